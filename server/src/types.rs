//! Common API response types.

use serde::Serialize;
use std::collections::BTreeMap;

/// Field-scoped validation errors. Returned with status 200 in place of the
/// requested change, which is not persisted.
#[derive(Debug, Default, Serialize)]
pub struct FormErrors {
	pub errors: BTreeMap<&'static str, Vec<Box<str>>>,
}

impl FormErrors {
	pub fn add(&mut self, field: &'static str, message: impl Into<Box<str>>) {
		self.errors.entry(field).or_default().push(message.into());
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}
}


// vim: ts=4
