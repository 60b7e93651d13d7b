// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Runs deferred work on the same event queue as the caller.
///
/// Scheduled tasks are fire-and-forget: dropping the returned handle does not cancel the task. Only
/// [`TaskHandle::cancel`] does.
pub trait Scheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;
}

/// Cancellation handle for a scheduled task
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
	cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
	/// Wraps a task so that it does nothing once the returned handle is cancelled. Scheduler implementations hand the
	/// wrapped task to their timer.
	pub fn guard(task: Task) -> (Self, Task) {
		let handle = Self::default();
		let cancelled = Rc::clone(&handle.cancelled);
		let guarded: Task = Box::new(move || {
			if !cancelled.get() {
				task();
			}
		});
		(handle, guarded)
	}

	pub fn cancel(&self) {
		self.cancelled.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancelled.get()
	}
}
