// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::FormsConfig;
use crate::dom::{FormDom, NotificationDom};
use crate::field::FormKind;
use crate::style::{notification_css, ERROR_COLOR, INFO_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::timer::{Scheduler, TaskHandle};
use crate::validation::validate_form;
use rgb::RGB8;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NotificationKind {
	#[default]
	Info,
	Success,
	Warning,
	Error,
}

impl NotificationKind {
	/// Reads a kind name as page scripts pass it. Unknown names are shown as info.
	pub fn parse(kind: &str) -> Self {
		match kind {
			"success" => Self::Success,
			"warning" => Self::Warning,
			"error" => Self::Error,
			_ => Self::Info,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Info => "info",
			Self::Success => "success",
			Self::Warning => "warning",
			Self::Error => "error",
		}
	}

	pub fn background(&self) -> RGB8 {
		match self {
			Self::Info => INFO_COLOR,
			Self::Success => SUCCESS_COLOR,
			Self::Warning => WARNING_COLOR,
			Self::Error => ERROR_COLOR,
		}
	}
}

/// A toast message waiting to be put on the page
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
	pub message: String,
	pub kind: NotificationKind,
}

impl Notification {
	pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
		Self {
			message: message.into(),
			kind,
		}
	}

	pub fn class_name(&self) -> String {
		format!("notification notification-{}", self.kind.as_str())
	}

	pub fn css(&self) -> String {
		notification_css(self.kind.background())
	}
}

/// A submission that was allowed through and whose button is still waiting on the fallback restore
#[derive(Clone, Debug)]
pub struct FormSubmissionState<B> {
	button: B,
	original_label: String,
	restore: TaskHandle,
	restored: Rc<Cell<bool>>,
}

impl<B> FormSubmissionState<B> {
	pub fn original_label(&self) -> &str {
		&self.original_label
	}

	pub fn is_pending(&self) -> bool {
		!self.restored.get() && !self.restore.is_cancelled()
	}

	fn cancel(&self) {
		self.restore.cancel();
	}
}

#[derive(Debug)]
pub enum SubmitOutcome<B> {
	/// Validation failed; the native submission must be cancelled
	Blocked,
	/// The native submission may continue. Carries the busy state when the form has a submit button.
	Proceeding(Option<FormSubmissionState<B>>),
}

impl<B> SubmitOutcome<B> {
	pub fn is_blocked(&self) -> bool {
		matches!(self, Self::Blocked)
	}
}

/// Submit-button busy state and toast notifications
pub struct FeedbackPresenter<D: FormDom, S> {
	dom: Rc<D>,
	scheduler: Rc<S>,
	config: RefCell<FormsConfig>,
	submissions: RefCell<Vec<FormSubmissionState<D::Button>>>,
}

impl<D, S> FeedbackPresenter<D, S>
where
	D: FormDom + NotificationDom + 'static,
	D::Button: PartialEq + 'static,
	D::Node: 'static,
	S: Scheduler + 'static,
{
	pub fn new(dom: Rc<D>, scheduler: Rc<S>, config: FormsConfig) -> Self {
		Self {
			dom,
			scheduler,
			config: RefCell::new(config),
			submissions: RefCell::new(Vec::new()),
		}
	}

	pub fn config(&self) -> FormsConfig {
		self.config.borrow().clone()
	}

	pub fn set_config(&self, config: FormsConfig) {
		*self.config.borrow_mut() = config;
	}

	/// Handles a submit event for the form.
	///
	/// The submit button shows its busy state while the form is validated. A failed validation restores the button
	/// before returning [`SubmitOutcome::Blocked`]; a successful one leaves it busy and schedules a restore in case
	/// the page never navigates away.
	pub fn on_submit_attempt(&self, form: &D::Form) -> SubmitOutcome<D::Button> {
		let config = self.config();
		let button = self.dom.submit_button(form);
		let original_label = button.as_ref().map(|button| self.capture_label(form, button, &config));

		if let Some(button) = button.as_ref() {
			self.dom.set_button_busy(button, &config.busy_label);
		}

		if !validate_form(&*self.dom, form, &config) {
			if let (Some(button), Some(label)) = (button.as_ref(), original_label.as_ref()) {
				self.dom.restore_button(button, label);
			}
			if let Some(message) = config.submit_failure_message.as_ref() {
				self.notify(message, NotificationKind::Error);
			}
			log::debug!("Submission blocked by validation");
			return SubmitOutcome::Blocked;
		}

		let submission = match (button, original_label) {
			(Some(button), Some(label)) => Some(self.schedule_restore(button, label, config.restore_delay())),
			_ => None,
		};
		log::debug!("Submission allowed to proceed");
		SubmitOutcome::Proceeding(submission)
	}

	/// Cancels every pending button restore. Called when the page is being unloaded.
	pub fn on_page_unload(&self) {
		let mut submissions = self.submissions.borrow_mut();
		for submission in submissions.iter() {
			submission.cancel();
		}
		log::debug!("Cancelled {} pending button restores", submissions.len());
		submissions.clear();
	}

	pub fn pending_submissions(&self) -> usize {
		self.submissions
			.borrow()
			.iter()
			.filter(|submission| submission.is_pending())
			.count()
	}

	/// Shows a toast that dismisses itself after the configured display and fade times. Returns the node, or `None`
	/// if the document had nowhere to put it.
	pub fn notify(&self, message: &str, kind: NotificationKind) -> Option<D::Node> {
		let notification = Notification::new(message, kind);
		let Some(node) = self.dom.append_notification(&notification) else {
			log::warn!("Unable to show {} notification: {}", kind.as_str(), message);
			return None;
		};

		let (display, fade) = {
			let config = self.config.borrow();
			(config.notification_duration(), config.notification_fade())
		};
		let dom = Rc::clone(&self.dom);
		let scheduler = Rc::clone(&self.scheduler);
		let fading_node = node.clone();
		self.scheduler.schedule(
			display,
			Box::new(move || {
				dom.start_fade(&fading_node);
				scheduler.schedule(fade, Box::new(move || dom.remove_node(&fading_node)));
			}),
		);

		Some(node)
	}

	/// Gets the label to restore the button to. A button that's still busy from an earlier submission keeps the label
	/// it had before that one.
	fn capture_label(&self, form: &D::Form, button: &D::Button, config: &FormsConfig) -> String {
		let mut submissions = self.submissions.borrow_mut();
		if let Some(index) = submissions
			.iter()
			.position(|submission| submission.is_pending() && submission.button == *button)
		{
			let earlier = submissions.remove(index);
			earlier.cancel();
			return earlier.original_label;
		}
		drop(submissions);

		let label = self.dom.button_label(button);
		if label.trim().is_empty() {
			let kind = FormKind::from_form_type(self.dom.form_type(form).as_deref());
			config.label_for(kind).to_string()
		} else {
			label
		}
	}

	fn schedule_restore(&self, button: D::Button, label: String, delay: Duration) -> FormSubmissionState<D::Button> {
		let restored = Rc::new(Cell::new(false));
		let restore = self.scheduler.schedule(delay, {
			let dom = Rc::clone(&self.dom);
			let button = button.clone();
			let label = label.clone();
			let restored = Rc::clone(&restored);
			Box::new(move || {
				dom.restore_button(&button, &label);
				restored.set(true);
				log::debug!("Restored submit button after fallback delay");
			})
		});

		let submission = FormSubmissionState {
			button,
			original_label: label,
			restore,
			restored,
		};
		let mut submissions = self.submissions.borrow_mut();
		submissions.retain(FormSubmissionState::is_pending);
		submissions.push(submission.clone());
		submission
	}
}
