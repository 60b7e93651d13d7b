// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::field::FormKind;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_RESTORE_DELAY_MS: u32 = 3000;
pub const DEFAULT_NOTIFICATION_DURATION_MS: u32 = 5000;
pub const DEFAULT_NOTIFICATION_FADE_MS: u32 = 300;

/// Page-level settings for validation and submission feedback. Every setting is optional when deserializing; missing
/// ones take their default.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormsConfig {
	pub min_password_length: usize,
	/// How long a submit button stays busy when the page doesn't navigate away
	pub restore_delay_ms: u32,
	pub notification_duration_ms: u32,
	pub notification_fade_ms: u32,
	pub busy_label: String,
	pub login_label: String,
	pub register_label: String,
	/// Notification shown when a submission is blocked. `null` disables it.
	pub submit_failure_message: Option<String>,
	/// Question asked before a dangerous action goes ahead
	pub confirm_message: String,
}

impl Default for FormsConfig {
	fn default() -> Self {
		Self {
			min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
			restore_delay_ms: DEFAULT_RESTORE_DELAY_MS,
			notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
			notification_fade_ms: DEFAULT_NOTIFICATION_FADE_MS,
			busy_label: String::from("Processing..."),
			login_label: String::from("Sign In"),
			register_label: String::from("Create Account"),
			submit_failure_message: Some(String::from("Please complete all required fields")),
			confirm_message: String::from("Are you sure you want to perform this action?"),
		}
	}
}

impl FormsConfig {
	/// Parses a JSON configuration document
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn restore_delay(&self) -> Duration {
		Duration::from_millis(self.restore_delay_ms.into())
	}

	pub fn notification_duration(&self) -> Duration {
		Duration::from_millis(self.notification_duration_ms.into())
	}

	pub fn notification_fade(&self) -> Duration {
		Duration::from_millis(self.notification_fade_ms.into())
	}

	/// The label a submit button falls back to when it had no text of its own
	pub fn label_for(&self, kind: FormKind) -> &str {
		match kind {
			FormKind::Login => &self.login_label,
			FormKind::Register => &self.register_label,
		}
	}
}

#[derive(Debug)]
pub enum ConfigError {
	InvalidJson(serde_json::Error),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidJson(error) => write!(f, "could not parse forms configuration: {}", error),
		}
	}
}

impl Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
	fn from(error: serde_json::Error) -> Self {
		Self::InvalidJson(error)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_uses_defaults() {
		let config = FormsConfig::from_json("{}").unwrap();
		assert_eq!(config, FormsConfig::default());
		assert_eq!(config.restore_delay(), Duration::from_millis(3000));
		assert_eq!(config.notification_duration(), Duration::from_millis(5000));
		assert_eq!(config.notification_fade(), Duration::from_millis(300));
	}

	#[test]
	fn partial_document_overrides_named_settings() {
		let config =
			FormsConfig::from_json(r#"{"minPasswordLength": 12, "submitFailureMessage": null, "busyLabel": "Wait"}"#)
				.unwrap();
		assert_eq!(config.min_password_length, 12);
		assert_eq!(config.submit_failure_message, None);
		assert_eq!(config.busy_label, "Wait");
		assert_eq!(config.login_label, "Sign In");
	}

	#[test]
	fn malformed_document_is_an_error() {
		let error = FormsConfig::from_json("{minPasswordLength").unwrap_err();
		assert!(error.to_string().starts_with("could not parse forms configuration"));
	}

	#[test]
	fn labels_follow_form_kind() {
		let config = FormsConfig::default();
		assert_eq!(config.label_for(FormKind::Login), "Sign In");
		assert_eq!(config.label_for(FormKind::Register), "Create Account");
	}
}
