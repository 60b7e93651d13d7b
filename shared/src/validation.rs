// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::FormsConfig;
use crate::dom::FormDom;
use crate::field::{FieldSnapshot, InputType};
use crate::style::{ERROR_COLOR, SUCCESS_COLOR};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt;

pub const PRIMARY_PASSWORD_FIELD: &str = "password1";
pub const CONFIRM_PASSWORD_FIELD: &str = "password2";

// A byte order mark is whitespace to the browser but not to `\s`
static EMAIL_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap());

/// Reasons a field can fail client-side validation
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldError {
	MissingRequiredValue,
	InvalidEmailFormat,
	PasswordTooShort(usize),
	PasswordMismatch,
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingRequiredValue => write!(f, "This field is required"),
			Self::InvalidEmailFormat => write!(f, "Enter a valid email address"),
			Self::PasswordTooShort(min_length) => write!(f, "Password must be at least {} characters", min_length),
			Self::PasswordMismatch => write!(f, "Passwords do not match"),
		}
	}
}

impl Error for FieldError {}

pub fn is_valid_email(email: &str) -> bool {
	EMAIL_REGEX.is_match(email)
}

/// Checks a single required field. Only the first failing rule is reported.
pub fn check_required_field(field: &FieldSnapshot, min_password_length: usize) -> Option<FieldError> {
	if field.is_blank() {
		return Some(FieldError::MissingRequiredValue);
	}
	match field.input_type {
		InputType::Email if !is_valid_email(&field.value) => Some(FieldError::InvalidEmailFormat),
		InputType::Password if field.value.encode_utf16().count() < min_password_length => {
			Some(FieldError::PasswordTooShort(min_password_length))
		}
		_ => None,
	}
}

/// The outcome of checking a set of fields, indexed by their position in the checked slice
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
	checked: Vec<usize>,
	errors: Vec<(usize, FieldError)>,
}

impl ValidationReport {
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	/// Fields whose previous annotations are stale after this pass
	pub fn checked(&self) -> &[usize] {
		&self.checked
	}

	pub fn errors(&self) -> &[(usize, FieldError)] {
		&self.errors
	}

	pub fn error_for(&self, index: usize) -> Option<&FieldError> {
		self.errors
			.iter()
			.find(|(error_index, _)| *error_index == index)
			.map(|(_, error)| error)
	}

	fn mark_checked(&mut self, index: usize) {
		if !self.checked.contains(&index) {
			self.checked.push(index);
		}
	}

	/// Records an error, replacing any error the field already has
	fn set_error(&mut self, index: usize, error: FieldError) {
		match self.errors.iter_mut().find(|(error_index, _)| *error_index == index) {
			Some((_, existing)) => *existing = error,
			None => self.errors.push((index, error)),
		}
	}
}

/// Runs every rule over the given fields without touching the document.
///
/// Required fields get the per-field checks. When both password fields are present, a mismatch is reported on the
/// confirmation field regardless of how the per-field checks went, and replaces any error it already had.
pub fn validate_snapshots(fields: &[FieldSnapshot], min_password_length: usize) -> ValidationReport {
	let mut report = ValidationReport::default();

	for (index, field) in fields.iter().enumerate() {
		if !field.required {
			continue;
		}
		report.mark_checked(index);
		if let Some(error) = check_required_field(field, min_password_length) {
			report.set_error(index, error);
		}
	}

	let primary = fields.iter().position(|field| field.name == PRIMARY_PASSWORD_FIELD);
	let confirmation = fields.iter().position(|field| field.name == CONFIRM_PASSWORD_FIELD);
	if let (Some(primary), Some(confirmation)) = (primary, confirmation) {
		report.mark_checked(confirmation);
		if fields[primary].value != fields[confirmation].value {
			report.set_error(confirmation, FieldError::PasswordMismatch);
		}
	}

	report
}

/// Validates a form in the document, replacing its previous error annotations with the current ones.
///
/// Returns whether every check passed.
pub fn validate_form<D: FormDom>(dom: &D, form: &D::Form, config: &FormsConfig) -> bool {
	let (handles, snapshots): (Vec<D::Field>, Vec<FieldSnapshot>) = dom.fields(form).into_iter().unzip();
	let report = validate_snapshots(&snapshots, config.min_password_length);

	for index in report.checked() {
		dom.clear_field_error(&handles[*index]);
	}
	for (index, error) in report.errors() {
		log::debug!("Field {} failed validation: {}", snapshots[*index].name, error);
		dom.show_field_error(&handles[*index], &error.to_string());
	}

	log::debug!(
		"Validated {} fields with {} errors",
		report.checked().len(),
		report.errors().len()
	);
	report.is_valid()
}

/// Live feedback when a field loses focus. Required fields get an error or success border depending on whether
/// they're filled in; other fields are left alone.
///
/// Returns false only for a blank required field.
pub fn validate_on_blur<D: FormDom>(dom: &D, field: &D::Field, snapshot: &FieldSnapshot) -> bool {
	if !snapshot.required {
		return true;
	}
	let filled = !snapshot.is_blank();
	let color = if filled { SUCCESS_COLOR } else { ERROR_COLOR };
	dom.set_field_border(field, Some(color));
	filled
}
