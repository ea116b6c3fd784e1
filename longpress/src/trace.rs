// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hook for the detector.
//!
//! The detector does not log. Instead it reports every transition to a
//! [`PressTrace`] sink chosen at construction time:
//!
//! - [`NoTrace`]: the default; discards everything.
//! - [`TraceRecorder`]: keeps an owned copy of every event, for tests and
//!   debugging overlays.
//! - `LogTrace` (feature `log`): forwards to the `log` facade.
//!
//! ```
//! use longpress::{Binding, HeadlessHost, InputEvent, LongPress, TraceEvent, TraceRecorder};
//!
//! let mut lp = LongPress::with_trace(HeadlessHost::new(), TraceRecorder::new());
//! lp.attach(1_u32, Binding::new(|| {})).unwrap();
//! lp.handle_event(&1, &InputEvent::touch_start());
//!
//! assert!(matches!(
//!     lp.trace().events(),
//!     [TraceEvent::Attached { element: 1, .. }, TraceEvent::PressStarted { element: 1, .. }]
//! ));
//! ```

use alloc::vec::Vec;

use crate::{EventKind, PointerButton, Threshold, TimerId};

/// One observable transition of an attachment.
///
/// The detector reports `TraceEvent<&E>`; use [`TraceEvent::cloned`] to keep
/// an owned copy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent<E> {
    /// A context was created and its listeners registered.
    Attached {
        /// The host element.
        element: E,
        /// The resolved threshold.
        threshold: Threshold,
    },
    /// An existing context was torn down because the element was attached again.
    Replaced {
        /// The host element.
        element: E,
    },
    /// A context was torn down.
    Detached {
        /// The host element.
        element: E,
        /// Whether a pending timer had to be cancelled.
        cancelled_timer: bool,
    },
    /// `detach` found no context.
    MissingContext {
        /// The host element.
        element: E,
    },
    /// A press-start scheduled a timer.
    PressStarted {
        /// The host element.
        element: E,
        /// The scheduled timer.
        timer: TimerId,
    },
    /// A press-start with a non-primary button was ignored.
    PressIgnored {
        /// The host element.
        element: E,
        /// The button that was pressed.
        button: PointerButton,
    },
    /// A pending timer was cancelled by a release or a new press.
    PressCancelled {
        /// The host element.
        element: E,
        /// The cancelled timer.
        timer: TimerId,
    },
    /// The threshold elapsed while pressing.
    LongPress {
        /// The host element.
        element: E,
        /// The timer that fired.
        timer: TimerId,
    },
    /// A confirmed long press was released.
    Released {
        /// The host element.
        element: E,
        /// The release event.
        kind: EventKind,
    },
    /// An event was suppressed because the last press was long.
    Suppressed {
        /// The host element.
        element: E,
        /// The suppressed event.
        kind: EventKind,
    },
    /// A timer fired that no longer matches the pending one.
    StaleTimer {
        /// The host element.
        element: E,
        /// The stale timer.
        timer: TimerId,
    },
}

impl<E> TraceEvent<E> {
    /// The element this event concerns.
    pub fn element(&self) -> &E {
        match self {
            Self::Attached { element, .. }
            | Self::Replaced { element }
            | Self::Detached { element, .. }
            | Self::MissingContext { element }
            | Self::PressStarted { element, .. }
            | Self::PressIgnored { element, .. }
            | Self::PressCancelled { element, .. }
            | Self::LongPress { element, .. }
            | Self::Released { element, .. }
            | Self::Suppressed { element, .. }
            | Self::StaleTimer { element, .. } => element,
        }
    }
}

impl<E: Clone> TraceEvent<&E> {
    /// Clone the borrowed element into an owned event.
    #[must_use]
    pub fn cloned(self) -> TraceEvent<E> {
        match self {
            Self::Attached { element, threshold } => TraceEvent::Attached {
                element: element.clone(),
                threshold,
            },
            Self::Replaced { element } => TraceEvent::Replaced {
                element: element.clone(),
            },
            Self::Detached {
                element,
                cancelled_timer,
            } => TraceEvent::Detached {
                element: element.clone(),
                cancelled_timer,
            },
            Self::MissingContext { element } => TraceEvent::MissingContext {
                element: element.clone(),
            },
            Self::PressStarted { element, timer } => TraceEvent::PressStarted {
                element: element.clone(),
                timer,
            },
            Self::PressIgnored { element, button } => TraceEvent::PressIgnored {
                element: element.clone(),
                button,
            },
            Self::PressCancelled { element, timer } => TraceEvent::PressCancelled {
                element: element.clone(),
                timer,
            },
            Self::LongPress { element, timer } => TraceEvent::LongPress {
                element: element.clone(),
                timer,
            },
            Self::Released { element, kind } => TraceEvent::Released {
                element: element.clone(),
                kind,
            },
            Self::Suppressed { element, kind } => TraceEvent::Suppressed {
                element: element.clone(),
                kind,
            },
            Self::StaleTimer { element, timer } => TraceEvent::StaleTimer {
                element: element.clone(),
                timer,
            },
        }
    }
}

/// A callback sink for detector transitions.
pub trait PressTrace<E> {
    /// Called once per transition, in the order transitions happen.
    fn record(&mut self, event: TraceEvent<&E>);
}

/// Discards all trace events.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTrace;

impl<E> PressTrace<E> for NoTrace {
    #[inline]
    fn record(&mut self, _event: TraceEvent<&E>) {}
}

/// Records an owned copy of every trace event.
#[derive(Clone, Debug)]
pub struct TraceRecorder<E> {
    events: Vec<TraceEvent<E>>,
}

impl<E> Default for TraceRecorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TraceRecorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent<E>] {
        &self.events
    }

    /// Takes the recorded events, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<TraceEvent<E>> {
        core::mem::take(&mut self.events)
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<E: Clone> PressTrace<E> for TraceRecorder<E> {
    fn record(&mut self, event: TraceEvent<&E>) {
        self.events.push(event.cloned());
    }
}

/// Forwards trace events to the `log` facade under the `longpress` target.
///
/// [`TraceEvent::MissingContext`] and [`TraceEvent::StaleTimer`] are logged
/// at `warn`, everything else at `debug`.
#[cfg(feature = "log")]
#[derive(Copy, Clone, Debug, Default)]
pub struct LogTrace;

#[cfg(feature = "log")]
impl<E: core::fmt::Debug> PressTrace<E> for LogTrace {
    fn record(&mut self, event: TraceEvent<&E>) {
        match event {
            TraceEvent::MissingContext { element } => {
                log::warn!(target: "longpress", "detach without attachment: {element:?}");
            }
            TraceEvent::StaleTimer { element, timer } => {
                log::warn!(target: "longpress", "ignored stale {timer} on {element:?}");
            }
            event => log::debug!(target: "longpress", "{event:?}"),
        }
    }
}
