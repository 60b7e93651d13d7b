// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The document operations the form components need, kept behind traits so the components can run against the
//! browser or an in-memory document.
//!
//! Operations touching structure the page may not have (a form group, a submit button, a panel) silently do
//! nothing when that structure is missing.

use crate::feedback::Notification;
use crate::field::FieldSnapshot;
use rgb::RGB8;

/// Form fields, their error annotations, and the submit control
pub trait FormDom {
	type Form: Clone;
	type Field: Clone;
	type Button: Clone;

	/// Every input of the form, in document order
	fn fields(&self, form: &Self::Form) -> Vec<(Self::Field, FieldSnapshot)>;

	/// Attaches or replaces the field's error message and applies the error affordance
	fn show_field_error(&self, field: &Self::Field, message: &str);

	/// Removes the field's error message and resets its affordance
	fn clear_field_error(&self, field: &Self::Field);

	/// Sets or resets the field's border color without touching its message
	fn set_field_border(&self, field: &Self::Field, color: Option<RGB8>);

	fn submit_button(&self, form: &Self::Form) -> Option<Self::Button>;

	/// Value of the form's hidden `form_type` field, if it has one
	fn form_type(&self, form: &Self::Form) -> Option<String>;

	fn button_label(&self, button: &Self::Button) -> String;

	fn set_button_busy(&self, button: &Self::Button, label: &str);

	fn restore_button(&self, button: &Self::Button, label: &str);
}

/// The two tab panels and their selector controls
pub trait TabDom {
	fn deactivate_all_panels(&self);

	fn deactivate_all_selectors(&self);

	/// Marks the named panel active. Returns false if no such panel exists.
	fn activate_panel(&self, name: &str) -> bool;

	fn activate_selector(&self, index: usize);

	/// Name of the panel marked active, if any
	fn active_panel(&self) -> Option<String>;

	/// Whether the server rendered an error or success message into the page
	fn has_server_message(&self) -> bool;
}

/// Transient notification elements
pub trait NotificationDom {
	type Node: Clone;

	/// Appends a styled notification to the document. Returns `None` when there's nowhere to put it.
	fn append_notification(&self, notification: &Notification) -> Option<Self::Node>;

	fn start_fade(&self, node: &Self::Node);

	/// Detaches the node. Nodes that were already detached are left alone.
	fn remove_node(&self, node: &Self::Node);
}
