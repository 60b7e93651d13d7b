// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contrast::contrast;
use rgb::RGB8;

pub const ERROR_COLOR: RGB8 = RGB8::new(229, 62, 62);
pub const SUCCESS_COLOR: RGB8 = RGB8::new(39, 174, 96);
pub const INFO_COLOR: RGB8 = RGB8::new(49, 130, 206);
pub const WARNING_COLOR: RGB8 = RGB8::new(255, 193, 7);

pub const LIGHT_TEXT: RGB8 = RGB8::new(255, 255, 255);
pub const DARK_TEXT: RGB8 = RGB8::new(33, 37, 41);

/// Contrast light text needs against a background before dark text is used instead (WCAG AA for large text)
pub const MIN_LIGHT_TEXT_CONTRAST: f64 = 3.0;

pub const FIELD_ERROR_CLASS: &str = "field-error";
pub const FORM_GROUP_CLASS: &str = "form-group";

pub fn rgb_str_from_color(color: RGB8) -> String {
	format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Picks the text color for a background. Light text is preferred as long as it stays readable.
pub fn text_color_for(background: RGB8) -> RGB8 {
	let light_contrast: f64 = contrast(background, LIGHT_TEXT);
	if light_contrast >= MIN_LIGHT_TEXT_CONTRAST {
		LIGHT_TEXT
	} else {
		DARK_TEXT
	}
}

/// Glow drawn around a field in its error state
pub fn error_box_shadow() -> String {
	format!(
		"0 0 0 4px rgba({}, {}, {}, 0.1)",
		ERROR_COLOR.r, ERROR_COLOR.g, ERROR_COLOR.b
	)
}

/// Inline style for the message element attached under an invalid field
pub fn field_error_css() -> String {
	format!(
		"color: {}; font-size: 0.875rem; margin-top: 0.5rem; font-family: 'Inter', sans-serif;",
		rgb_str_from_color(ERROR_COLOR)
	)
}

/// Inline style for a toast notification on the given background
pub fn notification_css(background: RGB8) -> String {
	format!(
		"position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; background: {}; color: {}; \
		border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2); z-index: 1000; \
		font-family: 'Inter', sans-serif; animation: slideInRight 0.3s ease;",
		rgb_str_from_color(background),
		rgb_str_from_color(text_color_for(background))
	)
}

/// Keyframes used by notifications to slide in and out. Installed once per page.
pub const NOTIFICATION_KEYFRAMES: &str = "@keyframes slideInRight { \
	from { opacity: 0; transform: translateX(300px); } \
	to { opacity: 1; transform: translateX(0); } } \
	@keyframes slideOutRight { \
	from { opacity: 1; transform: translateX(0); } \
	to { opacity: 0; transform: translateX(300px); } }";

pub const NOTIFICATION_FADE_ANIMATION: &str = "slideOutRight 0.3s ease";
