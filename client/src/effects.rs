// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{set_style, BrowserDom};
use crate::events::listen;
use auth_forms_shared::field::{toggle_password_visibility, InputType};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

/// Slides the authentication panel in shortly after load
pub fn animate_entrance(dom: &BrowserDom) {
	let Some(main) = dom.select_all::<HtmlElement>(".auth-main").into_iter().next() else {
		return;
	};
	set_style(&main, "opacity", "0");
	set_style(&main, "transform", "translateY(30px)");
	Timeout::new(100, move || {
		set_style(&main, "transition", "all 0.6s ease");
		set_style(&main, "opacity", "1");
		set_style(&main, "transform", "translateY(0)");
	})
	.forget();
}

/// Lifts an input's container slightly while the input has focus
pub fn setup_input_lift(dom: &BrowserDom) {
	for input in dom.select_all::<HtmlElement>(".form-control") {
		for (event_name, offset) in [("focus", "translateY(-1px)"), ("blur", "translateY(0)")] {
			let target = input.clone();
			listen(&input, event_name, move |_event| {
				if let Some(parent) = target.parent_element().and_then(|parent| parent.dyn_into::<HtmlElement>().ok()) {
					set_style(&parent, "transform", offset);
				}
			});
		}
	}
}

/// Dangerous buttons only act once the user confirms
pub fn setup_danger_confirmation(dom: &BrowserDom, message: String) {
	for button in dom.select_all::<Element>(".btn-danger") {
		let message = message.clone();
		listen(&button, "click", move |event| {
			let confirmed = web_sys::window()
				.map(|window| window.confirm_with_message(&message).unwrap_or(false))
				.unwrap_or(false);
			if !confirmed {
				event.prevent_default();
			}
		});
	}
}

/// Each toggle shows or hides the password input right before it
pub fn setup_password_toggles(dom: &BrowserDom) {
	for toggle in dom.select_all::<Element>(".password-toggle") {
		let target = toggle.clone();
		listen(&toggle, "click", move |_event| {
			let Some(input) = target
				.previous_element_sibling()
				.and_then(|sibling| sibling.dyn_into::<HtmlInputElement>().ok())
			else {
				return;
			};
			let (input_type, label) = toggle_password_visibility(InputType::from_type_attribute(&input.type_()));
			input.set_type(input_type.as_str());
			target.set_text_content(Some(label));
		});
	}
}
