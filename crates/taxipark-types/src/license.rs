//! Driver license number validation.
//!
//! A license number is exactly 8 characters: 3 uppercase ASCII letters
//! followed by 5 decimal digits (e.g. `ABC12345`). The checks run in a
//! fixed order and the first failing check determines the reported error.

pub const LICENSE_NUMBER_LEN: usize = 8;
const PREFIX_LEN: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LicenseError {
	BadLength,
	BadPrefix,
	BadSuffix,
}

impl std::fmt::Display for LicenseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let msg = match self {
			LicenseError::BadLength => "License number should consist of 8 characters",
			LicenseError::BadPrefix => "First 3 characters should be uppercase letters",
			LicenseError::BadSuffix => "Last 5 characters should be digits",
		};
		f.write_str(msg)
	}
}

/// Validate a license number. Pure, no I/O.
pub fn validate_license_number(license_number: &str) -> Result<(), LicenseError> {
	let chars: Vec<char> = license_number.chars().collect();

	if chars.len() != LICENSE_NUMBER_LEN {
		return Err(LicenseError::BadLength);
	}
	if !chars[..PREFIX_LEN].iter().all(char::is_ascii_uppercase) {
		return Err(LicenseError::BadPrefix);
	}
	if !chars[PREFIX_LEN..].iter().all(char::is_ascii_digit) {
		return Err(LicenseError::BadSuffix);
	}

	Ok(())
}


// vim: ts=4
