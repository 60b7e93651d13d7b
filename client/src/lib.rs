// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser side of the authentication pages: wires the shared form components to the live document and exposes
//! them to other page scripts.

use auth_forms_shared::config::FormsConfig;
use auth_forms_shared::feedback::NotificationKind;
use auth_forms_shared::validation::validate_form;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub mod dom;
pub mod effects;
pub mod error;
pub mod events;
pub mod page;
pub mod timer;

use dom::BrowserDom;
use error::DomError;
use page::{inline_config, Page};

pub const NAMESPACE: &str = "AuthForms";

thread_local! {
	static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

fn current_page() -> Option<Rc<Page>> {
	PAGE.with(|page| page.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	if let Err(error) = install() {
		log::error!("Unable to set up form handling: {}", error);
	}
}

fn install() -> Result<(), DomError> {
	let dom = BrowserDom::from_window()?;
	install_namespace()?;

	let page_dom = dom.clone();
	events::when_document_ready(&dom, move || {
		if let Err(error) = attach_page(page_dom) {
			log::error!("Unable to attach form handlers: {}", error);
		}
	});
	Ok(())
}

/// Builds the page state from the parsed document and subscribes its handlers
pub fn attach_page(dom: BrowserDom) -> Result<Rc<Page>, DomError> {
	let config = inline_config(&dom);
	let page = Rc::new(Page::new(dom, config));
	PAGE.with(|current| *current.borrow_mut() = Some(Rc::clone(&page)));
	page.attach()?;
	Ok(page)
}

/// Publishes `showNotification` and `validateForm` on a page-wide object for scripts that don't import the module
fn install_namespace() -> Result<(), DomError> {
	let window = web_sys::window().ok_or(DomError::NoWindow)?;
	let namespace = js_sys::Object::new();

	let notify = Closure::wrap(Box::new(|message: JsValue, kind: JsValue| {
		let message = message.as_string().unwrap_or_default();
		show_notification(&message, kind.as_string())
	}) as Box<dyn Fn(JsValue, JsValue) -> bool>);
	js_sys::Reflect::set(&namespace, &JsValue::from_str("showNotification"), notify.as_ref())?;
	notify.forget();

	let validate = Closure::wrap(Box::new(|form: JsValue| match form.dyn_into::<Element>() {
		Ok(form) => validate_form_element(&form),
		Err(_) => {
			log::warn!("validateForm called with something other than an element");
			false
		}
	}) as Box<dyn Fn(JsValue) -> bool>);
	js_sys::Reflect::set(&namespace, &JsValue::from_str("validateForm"), validate.as_ref())?;
	validate.forget();

	js_sys::Reflect::set(&window, &JsValue::from_str(NAMESPACE), &namespace)?;
	Ok(())
}

/// Shows a toast notification. `kind` is one of "info", "success", "warning" or "error" and defaults to info.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) -> bool {
	let Some(page) = current_page() else {
		log::warn!("Notification requested before form handling was set up");
		return false;
	};
	let kind = kind.as_deref().map(NotificationKind::parse).unwrap_or_default();
	page.presenter().notify(message, kind).is_some()
}

/// Validates a form, annotating its fields. Returns whether it may be submitted.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_element(form: &Element) -> bool {
	match current_page() {
		Some(page) => validate_form(page.dom(), form, &page.presenter().config()),
		None => match BrowserDom::from_window() {
			Ok(dom) => validate_form(&dom, form, &FormsConfig::default()),
			Err(error) => {
				log::warn!("Unable to validate form: {}", error);
				false
			}
		},
	}
}

/// Switches to the "login" or "register" tab. Returns false for any other name.
#[wasm_bindgen(js_name = showTab)]
pub fn show_tab(name: &str) -> bool {
	match current_page() {
		Some(page) => page.tabs().show_tab_by_name(name),
		None => false,
	}
}

/// Replaces the page's form settings. Settings left out of the object take their defaults.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<(), JsValue> {
	let config: FormsConfig = serde_wasm_bindgen::from_value(config)
		.map_err(|error| JsValue::from_str(&format!("Failed to parse form settings: {}", error)))?;
	let page = current_page().ok_or_else(|| JsValue::from_str("Form handling is not set up"))?;
	page.presenter().set_config(config);
	Ok(())
}
