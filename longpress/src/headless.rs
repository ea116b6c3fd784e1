// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Host`] with a manual clock.
//!
//! [`HeadlessHost`] keeps a ledger of registered listeners and a timer queue
//! ordered by deadline. Nothing happens on its own: the embedder advances the
//! clock with [`HeadlessHost::advance_to`] (or, through the detector,
//! [`LongPress::advance_to`]) and receives the timers that came due.
//!
//! This makes the host suitable for native toolkits that already run their
//! own event loop, and for deterministic tests.
//!
//! ```
//! use longpress::{Binding, HeadlessHost, InputEvent, LongPress};
//!
//! let mut lp = LongPress::new(HeadlessHost::new());
//! lp.attach(7_u32, Binding::new(|| {}).with_threshold(250)).unwrap();
//! lp.handle_event(&7, &InputEvent::touch_start());
//! assert_eq!(lp.host().next_deadline(), Some(250));
//!
//! assert_eq!(lp.advance_to(249), 0);
//! assert_eq!(lp.advance_to(250), 1);
//! assert_eq!(lp.host().pending_timers(), 0);
//! ```

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::{EventKind, Host, LongPress, PressTrace, Threshold, TimerId};

/// A listener registered on a [`HeadlessHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerToken(u64);

/// A timer scheduled on a [`HeadlessHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadlessTimer {
    deadline: u64,
    id: TimerId,
}

impl HeadlessTimer {
    /// When the timer is due, in host milliseconds.
    #[must_use]
    pub fn deadline(&self) -> u64 {
        self.deadline
    }

    /// The detector's id for this timer.
    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }
}

/// A timer that came due during [`HeadlessHost::advance_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<E> {
    /// The element the timer was scheduled for.
    pub element: E,
    /// The detector's id for the timer.
    pub timer: TimerId,
    /// The timer's deadline, in host milliseconds.
    pub deadline: u64,
}

/// An in-memory host with a manual millisecond clock.
#[derive(Clone, Debug)]
pub struct HeadlessHost<E> {
    now: u64,
    last_listener: u64,
    listeners: HashMap<ListenerToken, (E, EventKind)>,
    timers: BTreeMap<HeadlessTimer, E>,
}

impl<E> Default for HeadlessHost<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> HeadlessHost<E> {
    /// Creates a host with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: 0,
            last_listener: 0,
            listeners: HashMap::new(),
            timers: BTreeMap::new(),
        }
    }

    /// The current time, in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of timers that are scheduled and not yet due or cancelled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// The earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.keys().next().map(HeadlessTimer::deadline)
    }

    /// Number of listeners registered across all elements.
    #[must_use]
    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Move the clock forward to `now` and return the timers that came due,
    /// earliest first.
    ///
    /// The clock never moves backwards; an earlier `now` is a no-op.
    pub fn advance_to(&mut self, now: u64) -> Vec<Expired<E>> {
        let mut expired = Vec::new();
        while let Some(entry) = self.timers.first_entry() {
            if entry.key().deadline > now {
                break;
            }
            let (timer, element) = entry.remove_entry();
            expired.push(Expired {
                element,
                timer: timer.id,
                deadline: timer.deadline,
            });
        }
        self.now = self.now.max(now);
        expired
    }
}

impl<E: Eq> HeadlessHost<E> {
    /// Number of listeners registered on `element`.
    #[must_use]
    pub fn listener_count(&self, element: &E) -> usize {
        self.listeners.values().filter(|(e, _)| e == element).count()
    }

    /// Returns `true` if a listener for `kind` is registered on `element`.
    #[must_use]
    pub fn has_listener(&self, element: &E, kind: EventKind) -> bool {
        self.listeners
            .values()
            .any(|(e, k)| e == element && *k == kind)
    }
}

impl<E: Clone + Eq + Hash> Host for HeadlessHost<E> {
    type Element = E;
    type Listener = ListenerToken;
    type Timer = HeadlessTimer;

    fn add_listener(&mut self, element: &E, kind: EventKind) -> ListenerToken {
        self.last_listener += 1;
        let token = ListenerToken(self.last_listener);
        self.listeners.insert(token, (element.clone(), kind));
        token
    }

    fn remove_listener(&mut self, element: &E, kind: EventKind, listener: ListenerToken) {
        let removed = self.listeners.remove(&listener);
        debug_assert!(
            removed.is_some_and(|(e, k)| e == *element && k == kind),
            "removed a listener that was not registered for this element and kind"
        );
    }

    fn set_timeout(&mut self, element: &E, timer: TimerId, delay: Threshold) -> HeadlessTimer {
        let handle = HeadlessTimer {
            deadline: self.now.saturating_add(u64::from(delay.as_millis())),
            id: timer,
        };
        self.timers.insert(handle, element.clone());
        handle
    }

    fn clear_timeout(&mut self, timer: HeadlessTimer) {
        self.timers.remove(&timer);
    }
}

impl<E, T> LongPress<HeadlessHost<E>, T>
where
    E: Clone + Eq + Hash,
    T: PressTrace<E>,
{
    /// Advance the host clock to `now` and expire every timer that came due.
    ///
    /// Returns how many long presses were confirmed. Callbacks run inside
    /// this call, in deadline order.
    pub fn advance_to(&mut self, now: u64) -> usize {
        let mut confirmed = 0;
        for expired in self.host_mut().advance_to(now) {
            if self.expire(&expired.element, expired.timer) {
                confirmed += 1;
            }
        }
        confirmed
    }
}
