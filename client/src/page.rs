// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::BrowserDom;
use crate::effects::{animate_entrance, setup_danger_confirmation, setup_input_lift, setup_password_toggles};
use crate::error::DomError;
use crate::events::{setup_form_validation, setup_live_validation, setup_tab_events, setup_unload};
use crate::timer::GlooScheduler;
use auth_forms_shared::config::FormsConfig;
use auth_forms_shared::feedback::FeedbackPresenter;
use auth_forms_shared::tabs::TabController;
use std::rc::Rc;

pub const INLINE_CONFIG_ID: &str = "auth-forms-config";

/// Everything the page's form handling shares between event handlers
pub struct Page {
	dom: Rc<BrowserDom>,
	presenter: FeedbackPresenter<BrowserDom, GlooScheduler>,
	tabs: TabController<BrowserDom>,
}

impl Page {
	pub fn new(dom: BrowserDom, config: FormsConfig) -> Self {
		let dom = Rc::new(dom);
		let presenter = FeedbackPresenter::new(Rc::clone(&dom), Rc::new(GlooScheduler), config);
		let tabs = TabController::new(Rc::clone(&dom));
		Self { dom, presenter, tabs }
	}

	pub fn dom(&self) -> &BrowserDom {
		&self.dom
	}

	pub fn presenter(&self) -> &FeedbackPresenter<BrowserDom, GlooScheduler> {
		&self.presenter
	}

	pub fn tabs(&self) -> &TabController<BrowserDom> {
		&self.tabs
	}

	/// Subscribes every handler and applies the initial tab policy. Expects a parsed document.
	pub fn attach(self: &Rc<Self>) -> Result<(), DomError> {
		if let Err(error) = self.dom.install_notification_keyframes() {
			log::warn!("Notifications will not animate: {}", error);
		}
		animate_entrance(&self.dom);
		setup_input_lift(&self.dom);
		setup_form_validation(self);
		setup_live_validation(self);
		setup_tab_events(self);
		setup_danger_confirmation(&self.dom, self.presenter.config().confirm_message);
		setup_password_toggles(&self.dom);
		setup_unload(self)?;
		self.tabs.initialize();
		log::debug!("Form handling attached");
		Ok(())
	}
}

/// Reads page settings from the inline JSON element, if the page has one. Unreadable settings are logged and the
/// defaults used instead.
pub fn inline_config(dom: &BrowserDom) -> FormsConfig {
	let Some(json) = dom
		.document()
		.get_element_by_id(INLINE_CONFIG_ID)
		.and_then(|element| element.text_content())
	else {
		log::debug!("No inline form settings, using defaults");
		return FormsConfig::default();
	};
	match FormsConfig::from_json(&json) {
		Ok(config) => config,
		Err(error) => {
			log::warn!("Using default form settings: {}", error);
			FormsConfig::default()
		}
	}
}
