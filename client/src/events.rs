// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{snapshot, BrowserDom};
use crate::error::DomError;
use crate::page::Page;
use auth_forms_shared::validation::validate_on_blur;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlInputElement};

/// Subscribes a handler to a named event on the target for the rest of the page's life
pub fn listen(target: &EventTarget, event_name: &str, handler: impl FnMut(Event) + 'static) {
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	if let Err(error) = target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref()) {
		log::warn!("Failed to listen for {}: {}", event_name, DomError::from(error));
	}
	closure.forget();
}

/// Runs the setup once the document has been parsed
pub fn when_document_ready(dom: &BrowserDom, setup: impl FnOnce() + 'static) {
	if dom.document().ready_state() != "loading" {
		setup();
		return;
	}
	let mut setup = Some(setup);
	listen(dom.document(), "DOMContentLoaded", move |_event| {
		if let Some(setup) = setup.take() {
			setup();
		}
	});
}

/// Validates each form on submit, cancelling the submission when it fails
pub fn setup_form_validation(page: &Rc<Page>) {
	for form in page.dom().select_all::<Element>("form") {
		let page = Rc::clone(page);
		let target = form.clone();
		listen(&target, "submit", move |event| {
			if page.presenter().on_submit_attempt(&form).is_blocked() {
				event.prevent_default();
			}
		});
	}
}

/// Marks required inputs as they lose focus
pub fn setup_live_validation(page: &Rc<Page>) {
	for input in page.dom().select_all::<HtmlInputElement>("form input") {
		let page = Rc::clone(page);
		let target = input.clone();
		listen(&target, "blur", move |_event| {
			validate_on_blur(page.dom(), &input, &snapshot(&input));
		});
	}
}

/// Selector controls switch tabs by their position on the page
pub fn setup_tab_events(page: &Rc<Page>) {
	for (index, selector) in page.dom().select_all::<Element>(".tab-button").into_iter().enumerate() {
		let page = Rc::clone(page);
		listen(&selector, "click", move |_event| {
			page.tabs().on_selector_click(index);
		});
	}
}

/// Pending button restores are dropped once the browser leaves the page
pub fn setup_unload(page: &Rc<Page>) -> Result<(), DomError> {
	let window = web_sys::window().ok_or(DomError::NoWindow)?;
	let page = Rc::clone(page);
	listen(&window, "pagehide", move |_event| {
		page.presenter().on_page_unload();
	});
	Ok(())
}
