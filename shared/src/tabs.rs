// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::TabDom;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TabSelection {
	Login,
	Register,
}

impl TabSelection {
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"login" => Some(Self::Login),
			"register" => Some(Self::Register),
			_ => None,
		}
	}

	/// Selectors are matched by position: the first selects login and every later one selects registration.
	pub fn from_selector_index(index: usize) -> Self {
		if index == 0 {
			Self::Login
		} else {
			Self::Register
		}
	}

	pub fn panel_name(&self) -> &'static str {
		match self {
			Self::Login => "login",
			Self::Register => "register",
		}
	}

	pub fn selector_index(&self) -> usize {
		match self {
			Self::Login => 0,
			Self::Register => 1,
		}
	}
}

/// Switches between the login and registration panels
pub struct TabController<D> {
	dom: Rc<D>,
	active: Cell<Option<TabSelection>>,
}

impl<D: TabDom> TabController<D> {
	/// Creates a controller starting from whichever panel the page marked active
	pub fn new(dom: Rc<D>) -> Self {
		let active = dom.active_panel().as_deref().and_then(TabSelection::from_name);
		Self {
			dom,
			active: Cell::new(active),
		}
	}

	pub fn active(&self) -> Option<TabSelection> {
		self.active.get()
	}

	/// Makes the given tab the only active panel and selector. Showing the active tab again leaves the page as it was.
	pub fn show_tab(&self, selection: TabSelection) {
		self.dom.deactivate_all_panels();
		self.dom.deactivate_all_selectors();
		if !self.dom.activate_panel(selection.panel_name()) {
			log::warn!("No tab panel named {} on the page", selection.panel_name());
		}
		self.dom.activate_selector(selection.selector_index());
		self.active.set(Some(selection));
		log::debug!("Switched to the {} tab", selection.panel_name());
	}

	/// Shows a tab by name. Unknown names leave the page untouched and return false.
	pub fn show_tab_by_name(&self, name: &str) -> bool {
		match TabSelection::from_name(name) {
			Some(selection) => {
				self.show_tab(selection);
				true
			}
			None => {
				log::warn!("Ignoring request to show unknown tab {:?}", name);
				false
			}
		}
	}

	pub fn on_selector_click(&self, index: usize) {
		self.show_tab(TabSelection::from_selector_index(index));
	}

	/// Applies the first-load policy: a message rendered by the server belongs to the registration form, so its tab
	/// is brought forward. Otherwise the page's own active panel stays.
	pub fn initialize(&self) {
		if self.dom.has_server_message() {
			self.show_tab(TabSelection::Register);
		}
	}
}
