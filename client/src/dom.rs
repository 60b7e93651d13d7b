// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::DomError;
use auth_forms_shared::dom::{FormDom, NotificationDom, TabDom};
use auth_forms_shared::feedback::Notification;
use auth_forms_shared::field::{FieldSnapshot, InputType};
use auth_forms_shared::style::{
	error_box_shadow, field_error_css, rgb_str_from_color, ERROR_COLOR, FIELD_ERROR_CLASS, FORM_GROUP_CLASS,
	NOTIFICATION_FADE_ANIMATION, NOTIFICATION_KEYFRAMES,
};
use rgb::RGB8;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, NodeList};

const TAB_PANEL_SELECTOR: &str = ".form-content";
const TAB_SELECTOR_SELECTOR: &str = ".tab-button";
const SERVER_MESSAGE_SELECTOR: &str = ".error-message, .success-message";
const SUBMIT_BUTTON_SELECTOR: &str = ".btn";
const FORM_TYPE_SELECTOR: &str = "input[name=\"form_type\"]";
const ACTIVE_CLASS: &str = "active";

pub fn document() -> Result<Document, DomError> {
	web_sys::window().ok_or(DomError::NoWindow)?.document().ok_or(DomError::NoDocument)
}

/// Collects the nodes of a query result that are of the requested element type. A failed query is logged and
/// treated as matching nothing.
pub fn collect_elements<T: JsCast>(nodes: Result<NodeList, JsValue>, selector: &str) -> Vec<T> {
	let nodes = match nodes {
		Ok(nodes) => nodes,
		Err(error) => {
			log::warn!("Failed to query {}: {}", selector, DomError::from(error));
			return Vec::new();
		}
	};
	(0..nodes.length())
		.filter_map(|index| nodes.get(index))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
	if let Err(error) = element.style().set_property(property, value) {
		log::warn!("Failed to set {} on element: {}", property, DomError::from(error));
	}
}

/// Reads the parts of an input the validator cares about
pub fn snapshot(input: &HtmlInputElement) -> FieldSnapshot {
	FieldSnapshot::new(
		input.name(),
		InputType::from_type_attribute(&input.type_()),
		input.required(),
		input.value(),
	)
}

/// The live page document
#[derive(Clone, Debug)]
pub struct BrowserDom {
	document: Document,
}

impl BrowserDom {
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	pub fn from_window() -> Result<Self, DomError> {
		Ok(Self::new(document()?))
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	pub fn select_all<T: JsCast>(&self, selector: &str) -> Vec<T> {
		collect_elements(self.document.query_selector_all(selector), selector)
	}

	/// Adds the notification animations to the page head
	pub fn install_notification_keyframes(&self) -> Result<(), DomError> {
		let head = self.document.head().ok_or(DomError::NoHead)?;
		let style = self.document.create_element("style")?;
		style.set_text_content(Some(NOTIFICATION_KEYFRAMES));
		head.append_child(&style)?;
		Ok(())
	}

	fn error_element(&self, group: &Element) -> Result<Element, DomError> {
		if let Some(existing) = group.query_selector(&format!(".{}", FIELD_ERROR_CLASS))? {
			return Ok(existing);
		}
		let element = self.document.create_element("div")?;
		element.set_class_name(FIELD_ERROR_CLASS);
		element.set_attribute("style", &field_error_css())?;
		group.append_child(&element)?;
		Ok(element)
	}

	fn set_class_on_all(&self, selector: &str, active: bool) {
		for element in self.select_all::<Element>(selector) {
			let class_list = element.class_list();
			let result = if active {
				class_list.add_1(ACTIVE_CLASS)
			} else {
				class_list.remove_1(ACTIVE_CLASS)
			};
			if let Err(error) = result {
				log::warn!("Failed to update classes of {}: {}", selector, DomError::from(error));
			}
		}
	}
}

fn form_group(field: &HtmlInputElement) -> Option<Element> {
	field.closest(&format!(".{}", FORM_GROUP_CLASS)).ok().flatten()
}

impl FormDom for BrowserDom {
	type Form = Element;
	type Field = HtmlInputElement;
	type Button = HtmlElement;

	fn fields(&self, form: &Element) -> Vec<(HtmlInputElement, FieldSnapshot)> {
		collect_elements::<HtmlInputElement>(form.query_selector_all("input"), "input")
			.into_iter()
			.map(|input| {
				let snapshot = snapshot(&input);
				(input, snapshot)
			})
			.collect()
	}

	fn show_field_error(&self, field: &HtmlInputElement, message: &str) {
		let Some(group) = form_group(field) else {
			return;
		};
		match self.error_element(&group) {
			Ok(element) => element.set_text_content(Some(message)),
			Err(error) => log::warn!("Failed to attach field error for {}: {}", field.name(), error),
		}
		set_style(field, "border-color", &rgb_str_from_color(ERROR_COLOR));
		set_style(field, "box-shadow", &error_box_shadow());
	}

	fn clear_field_error(&self, field: &HtmlInputElement) {
		if let Some(group) = form_group(field) {
			if let Ok(Some(element)) = group.query_selector(&format!(".{}", FIELD_ERROR_CLASS)) {
				element.remove();
			}
		}
		set_style(field, "border-color", "");
		set_style(field, "box-shadow", "");
	}

	fn set_field_border(&self, field: &HtmlInputElement, color: Option<RGB8>) {
		let color = color.map(rgb_str_from_color).unwrap_or_default();
		set_style(field, "border-color", &color);
	}

	fn submit_button(&self, form: &Element) -> Option<HtmlElement> {
		form.query_selector(SUBMIT_BUTTON_SELECTOR)
			.ok()
			.flatten()
			.and_then(|button| button.dyn_into::<HtmlElement>().ok())
	}

	fn form_type(&self, form: &Element) -> Option<String> {
		form.query_selector(FORM_TYPE_SELECTOR)
			.ok()
			.flatten()
			.and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
			.map(|input| input.value())
	}

	fn button_label(&self, button: &HtmlElement) -> String {
		button.text_content().unwrap_or_default().trim().to_string()
	}

	fn set_button_busy(&self, button: &HtmlElement, label: &str) {
		set_style(button, "opacity", "0.7");
		button.set_text_content(None);
		let result = self.document.create_element("span").and_then(|span| {
			span.set_text_content(Some(label));
			button.append_child(&span)
		});
		if let Err(error) = result {
			log::warn!("Failed to show busy label: {}", DomError::from(error));
			button.set_text_content(Some(label));
		}
	}

	fn restore_button(&self, button: &HtmlElement, label: &str) {
		set_style(button, "opacity", "1");
		button.set_text_content(Some(label));
	}
}

impl TabDom for BrowserDom {
	fn deactivate_all_panels(&self) {
		self.set_class_on_all(TAB_PANEL_SELECTOR, false);
	}

	fn deactivate_all_selectors(&self) {
		self.set_class_on_all(TAB_SELECTOR_SELECTOR, false);
	}

	fn activate_panel(&self, name: &str) -> bool {
		let Some(panel) = self.document.get_element_by_id(name) else {
			return false;
		};
		if let Err(error) = panel.class_list().add_1(ACTIVE_CLASS) {
			log::warn!("Failed to activate panel {}: {}", name, DomError::from(error));
		}
		true
	}

	fn activate_selector(&self, index: usize) {
		let selectors = self.select_all::<Element>(TAB_SELECTOR_SELECTOR);
		let Some(selector) = selectors.get(index) else {
			return;
		};
		if let Err(error) = selector.class_list().add_1(ACTIVE_CLASS) {
			log::warn!("Failed to activate tab selector {}: {}", index, DomError::from(error));
		}
	}

	fn active_panel(&self) -> Option<String> {
		self.document
			.query_selector(&format!("{}.{}", TAB_PANEL_SELECTOR, ACTIVE_CLASS))
			.ok()
			.flatten()
			.map(|panel| panel.id())
	}

	fn has_server_message(&self) -> bool {
		matches!(self.document.query_selector(SERVER_MESSAGE_SELECTOR), Ok(Some(_)))
	}
}

impl NotificationDom for BrowserDom {
	type Node = HtmlElement;

	fn append_notification(&self, notification: &Notification) -> Option<HtmlElement> {
		let body = self.document.body()?;
		let build = || -> Result<HtmlElement, DomError> {
			let element = self
				.document
				.create_element("div")?
				.dyn_into::<HtmlElement>()
				.map_err(|_| DomError::UnexpectedElement("div"))?;
			element.set_class_name(&notification.class_name());
			element.set_attribute("style", &notification.css())?;
			element.set_text_content(Some(&notification.message));
			body.append_child(&element)?;
			Ok(element)
		};
		match build() {
			Ok(element) => Some(element),
			Err(error) => {
				log::warn!("Failed to add notification: {}", error);
				None
			}
		}
	}

	fn start_fade(&self, node: &HtmlElement) {
		set_style(node, "animation", NOTIFICATION_FADE_ANIMATION);
	}

	fn remove_node(&self, node: &HtmlElement) {
		if let Some(parent) = node.parent_node() {
			if let Err(error) = parent.remove_child(node) {
				log::warn!("Failed to remove notification: {}", DomError::from(error));
			}
		}
	}
}
