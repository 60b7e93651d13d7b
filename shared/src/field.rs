// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The input types the validator distinguishes between. Everything else is treated as plain text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputType {
	Text,
	Email,
	Password,
	Hidden,
	Other,
}

impl InputType {
	/// Interprets the value of an input's `type` attribute. Browsers treat a missing or empty type as text.
	pub fn from_type_attribute(value: &str) -> Self {
		match value.trim().to_ascii_lowercase().as_str() {
			"" | "text" => Self::Text,
			"email" => Self::Email,
			"password" => Self::Password,
			"hidden" => Self::Hidden,
			_ => Self::Other,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text | Self::Other => "text",
			Self::Email => "email",
			Self::Password => "password",
			Self::Hidden => "hidden",
		}
	}
}

/// A read-only view of a form field at the moment it's inspected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldSnapshot {
	pub name: String,
	pub input_type: InputType,
	pub required: bool,
	pub value: String,
}

impl FieldSnapshot {
	pub fn new(name: impl Into<String>, input_type: InputType, required: bool, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			input_type,
			required,
			value: value.into(),
		}
	}

	/// Whether the field has nothing in it once surrounding whitespace is ignored. A byte order mark counts as
	/// whitespace, as it does for the browser's own trimming.
	pub fn is_blank(&self) -> bool {
		self.value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').is_empty()
	}
}

/// Which of the two authentication forms a submission belongs to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormKind {
	Login,
	Register,
}

impl FormKind {
	/// Reads the value of the hidden `form_type` field. Only an explicit "login" marks a login form; every other form
	/// (including one without the field) gets registration semantics.
	pub fn from_form_type(form_type: Option<&str>) -> Self {
		match form_type {
			Some("login") => Self::Login,
			_ => Self::Register,
		}
	}
}

pub const SHOW_PASSWORD_LABEL: &str = "👁️";
pub const HIDE_PASSWORD_LABEL: &str = "🙈";

/// Works out what a password visibility toggle does to its input: a password input is revealed as text, anything
/// else is masked again. Returns the new type and the toggle's new label.
pub fn toggle_password_visibility(current: InputType) -> (InputType, &'static str) {
	if current == InputType::Password {
		(InputType::Text, HIDE_PASSWORD_LABEL)
	} else {
		(InputType::Password, SHOW_PASSWORD_LABEL)
	}
}
