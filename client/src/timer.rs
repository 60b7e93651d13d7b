// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use auth_forms_shared::timer::{Scheduler, Task, TaskHandle};
use gloo_timers::callback::Timeout;
use std::time::Duration;

/// Schedules tasks on the browser's timer queue
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		let (handle, task) = TaskHandle::guard(task);
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		// A dropped Timeout is cleared.
		Timeout::new(millis, task).forget();
		handle
	}
}
