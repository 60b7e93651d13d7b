// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;
use wasm_bindgen::JsValue;

/// Failures reaching or manipulating the browser document
#[derive(Debug)]
pub enum DomError {
	NoWindow,
	NoDocument,
	NoHead,
	UnexpectedElement(&'static str),
	Js(String),
}

impl fmt::Display for DomError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "the browser window is unavailable"),
			Self::NoDocument => write!(f, "the page document is unavailable"),
			Self::NoHead => write!(f, "the page has no head"),
			Self::UnexpectedElement(expected) => write!(f, "expected a {} element", expected),
			Self::Js(error) => write!(f, "a browser call failed: {}", error),
		}
	}
}

impl Error for DomError {}

impl From<JsValue> for DomError {
	fn from(error: JsValue) -> Self {
		Self::Js(error.as_string().unwrap_or_else(|| format!("{:?}", error)))
	}
}

impl From<DomError> for JsValue {
	fn from(error: DomError) -> Self {
		JsValue::from_str(&error.to_string())
	}
}
