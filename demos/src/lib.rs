// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the longpress demos.

use longpress::{Disposition, InputEvent};

/// One scripted input: deliver `event` to `element` at `at` milliseconds.
#[derive(Copy, Clone, Debug)]
pub struct Step {
    /// Host time of the event.
    pub at: u64,
    /// Target element.
    pub element: &'static str,
    /// The event itself.
    pub event: InputEvent,
}

impl Step {
    /// Shorthand constructor.
    pub const fn new(at: u64, element: &'static str, event: InputEvent) -> Self {
        Self { at, element, event }
    }
}

/// Human-readable form of a disposition.
pub fn describe(disposition: Disposition) -> &'static str {
    if disposition.prevents_default() && disposition.stops_propagation() {
        "suppressed"
    } else if disposition.is_empty() {
        "delivered"
    } else {
        "partially suppressed"
    }
}
