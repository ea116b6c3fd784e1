// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the detector and the platform that owns elements.
//!
//! A [`Host`] knows how to register listeners on an element and how to
//! schedule one-shot timers. The detector decides *when* to do either; the
//! host decides *how*. [`HeadlessHost`](crate::HeadlessHost) is an in-memory
//! host; `longpress_web` provides one backed by the DOM.

use core::fmt;
use core::hash::Hash;

use crate::{EventKind, Threshold};

/// Identity of one scheduled press timer.
///
/// The detector issues a fresh id for every press it starts and hands it to
/// [`Host::set_timeout`]. When the timer fires, the host reports the same id
/// back through [`LongPress::expire`](crate::LongPress::expire) or
/// [`LongPress::confirm`](crate::LongPress::confirm); ids that no longer match
/// the pending timer are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Listener registration and timer scheduling for one kind of element.
pub trait Host {
    /// Identity of a host element. Used as the registry key.
    type Element: Clone + Eq + Hash;
    /// A registered listener, kept so that exactly it can be removed again.
    type Listener;
    /// A scheduled timer, kept so that it can be cancelled.
    type Timer;

    /// Register a listener for `kind` on `element`.
    ///
    /// Hosts must honor [`EventKind::capture`].
    fn add_listener(&mut self, element: &Self::Element, kind: EventKind) -> Self::Listener;

    /// Remove a listener previously returned by [`Host::add_listener`].
    fn remove_listener(
        &mut self,
        element: &Self::Element,
        kind: EventKind,
        listener: Self::Listener,
    );

    /// Schedule `timer` to fire once after `delay`.
    fn set_timeout(
        &mut self,
        element: &Self::Element,
        timer: TimerId,
        delay: Threshold,
    ) -> Self::Timer;

    /// Cancel a timer that has not fired yet.
    fn clear_timeout(&mut self, timer: Self::Timer);

    /// Release a timer that has already fired.
    ///
    /// Called from inside the expiry path, possibly while the host is still
    /// running the timer's own callback.
    fn timer_spent(&mut self, timer: Self::Timer) {
        let _ = timer;
    }
}
