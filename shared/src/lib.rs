// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Form validation, submission feedback and tab switching for the authentication pages, independent of the
//! browser. The client crate supplies the document and timers.

pub mod config;
pub mod dom;
pub mod feedback;
pub mod field;
pub mod style;
pub mod tabs;
pub mod timer;
pub mod validation;

#[cfg(test)]
pub mod testing;
