// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An in-memory document and a hand-cranked clock for exercising the form components without a browser.

use crate::dom::{FormDom, NotificationDom, TabDom};
use crate::feedback::{Notification, NotificationKind};
use crate::field::FieldSnapshot;
use crate::style::ERROR_COLOR;
use crate::timer::{Scheduler, Task, TaskHandle};
use rgb::RGB8;
use std::cell::{Cell, RefCell};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FakeField {
	form: usize,
	index: usize,
}

struct FieldState {
	snapshot: FieldSnapshot,
	in_group: bool,
	error_elements: Vec<String>,
	error_style: bool,
	border: Option<RGB8>,
}

struct ButtonState {
	text: String,
	busy: bool,
	busy_labels: Vec<String>,
}

struct FormState {
	form_type: Option<String>,
	button: Option<ButtonState>,
	fields: Vec<FieldState>,
}

struct NotificationState {
	notification: Notification,
	fading: bool,
	attached: bool,
}

/// Active flags of the tab panels (by name) and selectors (by position)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TabState {
	pub panels: Vec<(String, bool)>,
	pub selectors: Vec<bool>,
}

struct DocumentState {
	forms: Vec<FormState>,
	tabs: TabState,
	server_message: bool,
	has_body: bool,
	notifications: Vec<NotificationState>,
}

pub struct FakeDom {
	state: RefCell<DocumentState>,
}

impl Default for FakeDom {
	fn default() -> Self {
		Self::new()
	}
}

impl FakeDom {
	/// A document with login and register panels (neither active), two selectors and a body
	pub fn new() -> Self {
		let tabs = TabState {
			panels: vec![(String::from("login"), false), (String::from("register"), false)],
			selectors: vec![false, false],
		};
		Self {
			state: RefCell::new(DocumentState {
				forms: Vec::new(),
				tabs,
				server_message: false,
				has_body: true,
				notifications: Vec::new(),
			}),
		}
	}

	/// A document whose markup starts with the named panel and its selector active
	pub fn with_tabs(active: Option<&str>) -> Self {
		let dom = Self::new();
		if let Some(active) = active {
			let mut state = dom.state.borrow_mut();
			let tabs = &mut state.tabs;
			for (index, (name, is_active)) in tabs.panels.iter_mut().enumerate() {
				*is_active = *name == active;
				tabs.selectors[index] = *is_active;
			}
		}
		dom
	}

	pub fn add_form(&self, form_type: Option<&str>, button_label: Option<&str>) -> usize {
		let mut state = self.state.borrow_mut();
		state.forms.push(FormState {
			form_type: form_type.map(String::from),
			button: button_label.map(|label| ButtonState {
				text: label.to_string(),
				busy: false,
				busy_labels: Vec::new(),
			}),
			fields: Vec::new(),
		});
		state.forms.len() - 1
	}

	/// Adds a field wrapped in a form group
	pub fn add_field(&self, form: usize, snapshot: FieldSnapshot) -> FakeField {
		self.push_field(form, snapshot, true)
	}

	/// Adds a field sitting directly in the form with no group around it
	pub fn add_ungrouped_field(&self, form: usize, snapshot: FieldSnapshot) -> FakeField {
		self.push_field(form, snapshot, false)
	}

	fn push_field(&self, form: usize, snapshot: FieldSnapshot, in_group: bool) -> FakeField {
		let mut state = self.state.borrow_mut();
		let fields = &mut state.forms[form].fields;
		fields.push(FieldState {
			snapshot,
			in_group,
			error_elements: Vec::new(),
			error_style: false,
			border: None,
		});
		FakeField {
			form,
			index: fields.len() - 1,
		}
	}

	pub fn set_value(&self, field: FakeField, value: &str) {
		self.state.borrow_mut().forms[field.form].fields[field.index].snapshot.value = value.to_string();
	}

	pub fn field_error(&self, field: FakeField) -> Option<String> {
		self.state.borrow().forms[field.form].fields[field.index]
			.error_elements
			.first()
			.cloned()
	}

	pub fn error_element_count(&self, field: FakeField) -> usize {
		self.state.borrow().forms[field.form].fields[field.index].error_elements.len()
	}

	pub fn has_error_style(&self, field: FakeField) -> bool {
		self.state.borrow().forms[field.form].fields[field.index].error_style
	}

	pub fn field_border(&self, field: FakeField) -> Option<RGB8> {
		self.state.borrow().forms[field.form].fields[field.index].border
	}

	pub fn button_text(&self, form: usize) -> Option<String> {
		self.state.borrow().forms[form].button.as_ref().map(|button| button.text.clone())
	}

	pub fn button_busy(&self, form: usize) -> bool {
		self.state.borrow().forms[form]
			.button
			.as_ref()
			.map_or(false, |button| button.busy)
	}

	/// Every label the button was given while busy, oldest first
	pub fn busy_labels_seen(&self, form: usize) -> Vec<String> {
		self.state.borrow().forms[form]
			.button
			.as_ref()
			.map(|button| button.busy_labels.clone())
			.unwrap_or_default()
	}

	pub fn set_server_message(&self, present: bool) {
		self.state.borrow_mut().server_message = present;
	}

	pub fn panel_active(&self, name: &str) -> bool {
		self.state
			.borrow()
			.tabs
			.panels
			.iter()
			.any(|(panel, active)| panel == name && *active)
	}

	pub fn selector_active(&self, index: usize) -> bool {
		self.state.borrow().tabs.selectors.get(index).copied().unwrap_or(false)
	}

	pub fn tab_state(&self) -> TabState {
		self.state.borrow().tabs.clone()
	}

	pub fn remove_body(&self) {
		self.state.borrow_mut().has_body = false;
	}

	pub fn attached_notifications(&self) -> Vec<(String, NotificationKind)> {
		self.state
			.borrow()
			.notifications
			.iter()
			.filter(|note| note.attached)
			.map(|note| (note.notification.message.clone(), note.notification.kind))
			.collect()
	}

	pub fn is_attached(&self, node: usize) -> bool {
		self.state.borrow().notifications[node].attached
	}

	pub fn is_fading(&self, node: usize) -> bool {
		self.state.borrow().notifications[node].fading
	}
}

impl FormDom for FakeDom {
	type Form = usize;
	type Field = FakeField;
	type Button = usize;

	fn fields(&self, form: &usize) -> Vec<(FakeField, FieldSnapshot)> {
		self.state.borrow().forms[*form]
			.fields
			.iter()
			.enumerate()
			.map(|(index, field)| (FakeField { form: *form, index }, field.snapshot.clone()))
			.collect()
	}

	fn show_field_error(&self, field: &FakeField, message: &str) {
		let mut state = self.state.borrow_mut();
		let field = &mut state.forms[field.form].fields[field.index];
		if !field.in_group {
			return;
		}
		match field.error_elements.first_mut() {
			Some(existing) => *existing = message.to_string(),
			None => field.error_elements.push(message.to_string()),
		}
		field.error_style = true;
		field.border = Some(ERROR_COLOR);
	}

	fn clear_field_error(&self, field: &FakeField) {
		let mut state = self.state.borrow_mut();
		let field = &mut state.forms[field.form].fields[field.index];
		field.error_elements.clear();
		field.error_style = false;
		field.border = None;
	}

	fn set_field_border(&self, field: &FakeField, color: Option<RGB8>) {
		self.state.borrow_mut().forms[field.form].fields[field.index].border = color;
	}

	fn submit_button(&self, form: &usize) -> Option<usize> {
		self.state.borrow().forms[*form].button.as_ref().map(|_| *form)
	}

	fn form_type(&self, form: &usize) -> Option<String> {
		self.state.borrow().forms[*form].form_type.clone()
	}

	fn button_label(&self, button: &usize) -> String {
		self.button_text(*button).unwrap_or_default()
	}

	fn set_button_busy(&self, button: &usize, label: &str) {
		if let Some(button) = self.state.borrow_mut().forms[*button].button.as_mut() {
			button.text = label.to_string();
			button.busy = true;
			button.busy_labels.push(label.to_string());
		}
	}

	fn restore_button(&self, button: &usize, label: &str) {
		if let Some(button) = self.state.borrow_mut().forms[*button].button.as_mut() {
			button.text = label.to_string();
			button.busy = false;
		}
	}
}

impl TabDom for FakeDom {
	fn deactivate_all_panels(&self) {
		for (_, active) in self.state.borrow_mut().tabs.panels.iter_mut() {
			*active = false;
		}
	}

	fn deactivate_all_selectors(&self) {
		for active in self.state.borrow_mut().tabs.selectors.iter_mut() {
			*active = false;
		}
	}

	fn activate_panel(&self, name: &str) -> bool {
		let mut state = self.state.borrow_mut();
		match state.tabs.panels.iter_mut().find(|(panel, _)| panel == name) {
			Some((_, active)) => {
				*active = true;
				true
			}
			None => false,
		}
	}

	fn activate_selector(&self, index: usize) {
		if let Some(active) = self.state.borrow_mut().tabs.selectors.get_mut(index) {
			*active = true;
		}
	}

	fn active_panel(&self) -> Option<String> {
		self.state
			.borrow()
			.tabs
			.panels
			.iter()
			.find(|(_, active)| *active)
			.map(|(name, _)| name.clone())
	}

	fn has_server_message(&self) -> bool {
		self.state.borrow().server_message
	}
}

impl NotificationDom for FakeDom {
	type Node = usize;

	fn append_notification(&self, notification: &Notification) -> Option<usize> {
		let mut state = self.state.borrow_mut();
		if !state.has_body {
			return None;
		}
		state.notifications.push(NotificationState {
			notification: notification.clone(),
			fading: false,
			attached: true,
		});
		Some(state.notifications.len() - 1)
	}

	fn start_fade(&self, node: &usize) {
		self.state.borrow_mut().notifications[*node].fading = true;
	}

	fn remove_node(&self, node: &usize) {
		self.state.borrow_mut().notifications[*node].attached = false;
	}
}

/// A scheduler whose clock only moves when [`ManualScheduler::advance`] is called
#[derive(Default)]
pub struct ManualScheduler {
	now: Cell<Duration>,
	next_sequence: Cell<u64>,
	queue: RefCell<Vec<(Duration, u64, Task)>>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn now(&self) -> Duration {
		self.now.get()
	}

	/// Tasks still queued, cancelled ones included
	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}

	/// Moves the clock forward, running every task that comes due in deadline order. Tasks due at the same time run
	/// in the order they were scheduled, and tasks scheduled along the way run too if they fall inside the window.
	pub fn advance(&self, by: Duration) {
		let target = self.now.get() + by;
		loop {
			let next = {
				let mut queue = self.queue.borrow_mut();
				let due = queue
					.iter()
					.enumerate()
					.filter(|(_, (deadline, _, _))| *deadline <= target)
					.min_by_key(|(_, (deadline, sequence, _))| (*deadline, *sequence))
					.map(|(index, _)| index);
				due.map(|index| queue.remove(index))
			};
			let Some((deadline, _, task)) = next else {
				break;
			};
			self.now.set(deadline);
			task();
		}
		self.now.set(target);
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		let (handle, task) = TaskHandle::guard(task);
		let sequence = self.next_sequence.get();
		self.next_sequence.set(sequence + 1);
		self.queue.borrow_mut().push((self.now.get() + delay, sequence, task));
		handle
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::rc::Rc;

	#[test]
	fn manual_scheduler_runs_in_deadline_order() {
		let scheduler = Rc::new(ManualScheduler::new());
		let order = Rc::new(RefCell::new(Vec::new()));
		for (delay, label) in [(20, "late"), (10, "early"), (10, "early again")] {
			let order = Rc::clone(&order);
			scheduler.schedule(Duration::from_millis(delay), Box::new(move || order.borrow_mut().push(label)));
		}

		scheduler.advance(Duration::from_millis(15));
		assert_eq!(*order.borrow(), vec!["early", "early again"]);
		scheduler.advance(Duration::from_millis(5));
		assert_eq!(*order.borrow(), vec!["early", "early again", "late"]);
		assert_eq!(scheduler.now(), Duration::from_millis(20));
	}

	#[test]
	fn tasks_scheduled_while_advancing_can_run() {
		let scheduler = Rc::new(ManualScheduler::new());
		let ran = Rc::new(Cell::new(false));
		scheduler.schedule(Duration::from_millis(10), {
			let scheduler = Rc::clone(&scheduler);
			let ran = Rc::clone(&ran);
			Box::new(move || {
				scheduler.schedule(Duration::from_millis(5), Box::new(move || ran.set(true)));
			})
		});

		scheduler.advance(Duration::from_millis(15));
		assert!(ran.get());
		assert_eq!(scheduler.pending(), 0);
	}
}
