// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=longpress --heading-base-level=0

//! Longpress: host-agnostic long-press gesture detection for UI elements.
//!
//! This crate turns raw press, release and click events on an element into a
//! long-press signal. A press held with the primary button (or a touch) for
//! longer than a threshold runs a callback, and the click that the platform
//! fires after the release is suppressed so the element does not also see an
//! ordinary click.
//!
//! ## Pieces
//!
//! - [`LongPress`]: the detector. It owns a registry of per-element
//!   [`AttachmentContext`]s and runs the press state machine for each.
//! - [`Host`]: the seam to the platform. A host registers listeners on its
//!   elements and schedules timers; the detector tells it when.
//! - [`HeadlessHost`]: an in-memory host with a manual clock, for native
//!   toolkits and tests. `longpress_web` provides a DOM host.
//! - [`Binding`] and [`Threshold`]: attach-time configuration.
//! - [`PressTrace`]: an observability hook, with [`NoTrace`] and
//!   [`TraceRecorder`] implementations.
//!
//! ## Lifecycle
//!
//! 1) When an element enters the live tree, call [`LongPress::attach`] with a
//!    [`Binding`]. One listener per [`EventKind::ALL`] entry is registered on
//!    the element through the host.
//! 2) Route every event those listeners receive through
//!    [`LongPress::handle_event`], and apply the returned [`Disposition`].
//! 3) When a timer the host scheduled fires, call [`LongPress::expire`] (or
//!    [`LongPress::confirm`]).
//! 4) When the element leaves the tree, call [`LongPress::detach`]. All
//!    listeners are removed and a pending timer is cancelled.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use longpress::{Binding, Disposition, HeadlessHost, InputEvent, LongPress, PointerButton};
//!
//! let presses = Rc::new(Cell::new(0));
//! let mut lp = LongPress::new(HeadlessHost::new());
//!
//! let counter = presses.clone();
//! let binding = Binding::new(move || counter.set(counter.get() + 1)).with_threshold(500);
//! lp.attach("save", binding).unwrap();
//!
//! // A short press: no long press, and the click goes through.
//! lp.handle_event(&"save", &InputEvent::mouse_down(PointerButton::Primary));
//! lp.advance_to(200);
//! lp.handle_event(&"save", &InputEvent::mouse_up());
//! assert_eq!(lp.handle_event(&"save", &InputEvent::click()), Disposition::PASS);
//! assert_eq!(presses.get(), 0);
//!
//! // A long press: the callback runs once and the trailing click is swallowed.
//! lp.handle_event(&"save", &InputEvent::mouse_down(PointerButton::Primary));
//! lp.advance_to(800);
//! lp.handle_event(&"save", &InputEvent::mouse_up());
//! assert_eq!(lp.handle_event(&"save", &InputEvent::click()), Disposition::SUPPRESS);
//! assert_eq!(presses.get(), 1);
//!
//! lp.detach(&"save").unwrap();
//! assert!(lp.detach(&"save").is_err());
//! ```
//!
//! ## Features
//!
//! - `std` (default): no effect on the API; this crate is `no_std` + `alloc`.
//! - `log`: adds `LogTrace`, a [`PressTrace`] that forwards to the `log` facade.
//!
//! The detector is single-threaded: callbacks are `Rc`, and every transition
//! happens on the thread that delivers events and timers.

#![no_std]

extern crate alloc;

mod binding;
mod detector;
mod error;
mod event;
mod headless;
mod host;
pub mod trace;

pub use binding::{Binding, Callback, DEFAULT_THRESHOLD_MS, Threshold};
pub use detector::{AttachmentContext, LongPress, PressPhase};
pub use error::Error;
pub use event::{Disposition, EventKind, EventRole, InputEvent, PointerButton};
pub use headless::{Expired, HeadlessHost, HeadlessTimer, ListenerToken};
pub use host::{Host, TimerId};
#[cfg(feature = "log")]
pub use trace::LogTrace;
pub use trace::{NoTrace, PressTrace, TraceEvent, TraceRecorder};
