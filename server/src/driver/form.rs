//! Driver form payloads and their validation rules.

use serde::Deserialize;

use taxipark_types::license::validate_license_number;

use crate::types::FormErrors;

/// # POST /api/driver
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCreationForm {
	pub username: String,
	pub password1: String,
	pub password2: String,
	pub license_number: String,
	#[serde(default)]
	pub first_name: String,
	#[serde(default)]
	pub last_name: String,
}

impl DriverCreationForm {
	pub fn validate(&self) -> FormErrors {
		let mut errors = FormErrors::default();
		if self.username.trim().is_empty() {
			errors.add("username", "This field is required");
		}
		if self.password1.is_empty() {
			errors.add("password1", "This field is required");
		}
		if self.password1 != self.password2 {
			errors.add("password2", "The two password fields didn't match");
		}
		if let Err(err) = validate_license_number(&self.license_number) {
			errors.add("licenseNumber", err.to_string());
		}
		errors
	}
}

/// # PATCH /api/driver/{driver_id}/license
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverLicenseUpdateForm {
	pub license_number: String,
}

impl DriverLicenseUpdateForm {
	pub fn validate(&self) -> FormErrors {
		let mut errors = FormErrors::default();
		if let Err(err) = validate_license_number(&self.license_number) {
			errors.add("licenseNumber", err.to_string());
		}
		errors
	}
}


// vim: ts=4
