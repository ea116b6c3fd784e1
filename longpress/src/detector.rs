// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attachment registry and the per-element press state machine.
//!
//! ## State machine
//!
//! Each attachment is in one of three [`PressPhase`]s:
//!
//! - `Idle → Pressing` on a primary press-start: the long-press flag is reset
//!   and a timer is scheduled for the threshold.
//! - `Pressing → LongPressConfirmed` when that timer fires: the flag is set
//!   and the callback runs.
//! - `Pressing → Idle` on a press-end before the timer fires: the timer is
//!   cancelled.
//! - `LongPressConfirmed → Idle` on a press-end after confirmation.
//!
//! While the flag is set, press-end and `click` events are reported as
//! [`Disposition::SUPPRESS`]. The flag survives the release so that the click
//! the platform synthesizes afterwards is swallowed; the next press-start
//! clears it.
//!
//! Non-primary mouse buttons never start tracking and leave the state alone.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{
    Binding, Callback, Disposition, Error, EventKind, EventRole, Host, InputEvent, NoTrace,
    PressTrace, Threshold, TimerId, TraceEvent,
};

/// Where an attachment is in the press gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PressPhase {
    /// No press is being tracked.
    #[default]
    Idle,
    /// A primary press is held and its timer is pending.
    Pressing,
    /// The threshold elapsed while the press was held.
    LongPressConfirmed,
}

/// Per-element state, created by `attach` and dropped by `detach`.
pub struct AttachmentContext<H: Host> {
    threshold: Threshold,
    pending_timer: Option<(TimerId, H::Timer)>,
    is_long_press: bool,
    phase: PressPhase,
    callback: Callback,
    listeners: SmallVec<[(EventKind, H::Listener); 7]>,
}

impl<H: Host> AttachmentContext<H> {
    /// The threshold fixed at attach time.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The pending timer, if a press is being timed.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer.as_ref().map(|(id, _)| *id)
    }

    /// Whether the most recent press was confirmed as long.
    #[must_use]
    pub fn is_long_press(&self) -> bool {
        self.is_long_press
    }

    /// The current phase of the gesture.
    #[must_use]
    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    /// The event kinds this context registered listeners for.
    pub fn listener_kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.listeners.iter().map(|(kind, _)| *kind)
    }
}

impl<H: Host> fmt::Debug for AttachmentContext<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentContext")
            .field("threshold", &self.threshold)
            .field("pending_timer", &self.pending_timer())
            .field("is_long_press", &self.is_long_press)
            .field("phase", &self.phase)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Long-press detection for any number of host elements.
///
/// The detector owns its [`Host`] and an attachment registry keyed by
/// [`Host::Element`]. Dropping it detaches every remaining element.
///
/// ## Driving it
///
/// - Call [`attach`](Self::attach) when an element enters the live tree and
///   [`detach`](Self::detach) when it leaves.
/// - Route each event the host's listeners receive through
///   [`handle_event`](Self::handle_event) and apply the [`Disposition`].
/// - When a timer scheduled through [`Host::set_timeout`] fires, call
///   [`expire`](Self::expire), or [`confirm`](Self::confirm) if the callback
///   must run outside a borrow of the detector.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use longpress::{Binding, Disposition, HeadlessHost, InputEvent, LongPress};
///
/// let fired = Rc::new(Cell::new(0));
/// let mut lp = LongPress::new(HeadlessHost::new());
/// let counter = fired.clone();
/// lp.attach("button", Binding::new(move || counter.set(counter.get() + 1)).with_threshold(500))
///     .unwrap();
///
/// lp.handle_event(&"button", &InputEvent::touch_start());
/// lp.advance_to(600);
/// assert_eq!(fired.get(), 1);
///
/// assert_eq!(lp.handle_event(&"button", &InputEvent::touch_end()), Disposition::SUPPRESS);
/// assert_eq!(lp.handle_event(&"button", &InputEvent::click()), Disposition::SUPPRESS);
/// ```
pub struct LongPress<H: Host, T: PressTrace<H::Element> = NoTrace> {
    host: H,
    trace: T,
    contexts: HashMap<H::Element, AttachmentContext<H>>,
    last_timer: u64,
}

impl<H: Host> LongPress<H> {
    /// Creates a detector without tracing.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_trace(host, NoTrace)
    }
}

impl<H: Host, T: PressTrace<H::Element>> LongPress<H, T> {
    /// Creates a detector reporting to `trace`.
    #[must_use]
    pub fn with_trace(host: H, trace: T) -> Self {
        Self {
            host,
            trace,
            contexts: HashMap::new(),
            last_timer: 0,
        }
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably. Changing listeners or timers behind the detector's
    /// back breaks its bookkeeping.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// The trace sink, mutably.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Start detecting long presses on `element`.
    ///
    /// Registers one listener per [`EventKind::ALL`] entry and records a fresh
    /// context. If `element` is already attached, the old context is detached
    /// first, so its timer and listeners never linger.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCallback`] if `binding` has no callback. Nothing is
    /// registered and any existing attachment is left untouched.
    pub fn attach(&mut self, element: H::Element, binding: Binding) -> Result<(), Error<H::Element>> {
        let threshold = binding.threshold();
        let Some(callback) = binding.value else {
            return Err(Error::InvalidCallback { element });
        };

        if let Some(old) = self.contexts.remove(&element) {
            self.trace.record(TraceEvent::Replaced { element: &element });
            self.release(&element, old);
        }

        let host = &mut self.host;
        let listeners: SmallVec<_> = EventKind::ALL
            .into_iter()
            .map(|kind| (kind, host.add_listener(&element, kind)))
            .collect();

        self.trace.record(TraceEvent::Attached {
            element: &element,
            threshold,
        });
        self.contexts.insert(
            element,
            AttachmentContext {
                threshold,
                pending_timer: None,
                is_long_press: false,
                phase: PressPhase::Idle,
                callback,
                listeners,
            },
        );
        Ok(())
    }

    /// Stop detecting long presses on `element`.
    ///
    /// Removes every listener registered by [`attach`](Self::attach) and
    /// cancels a pending timer.
    ///
    /// # Errors
    ///
    /// [`Error::MissingContext`] if `element` is not attached. No state
    /// changes; callers typically log and ignore it.
    pub fn detach(&mut self, element: &H::Element) -> Result<(), Error<H::Element>> {
        let Some(context) = self.contexts.remove(element) else {
            self.trace.record(TraceEvent::MissingContext { element });
            return Err(Error::MissingContext {
                element: element.clone(),
            });
        };
        let cancelled_timer = self.release(element, context);
        self.trace.record(TraceEvent::Detached {
            element,
            cancelled_timer,
        });
        Ok(())
    }

    /// Detach every attached element.
    pub fn detach_all(&mut self) {
        let contexts: Vec<_> = self.contexts.drain().collect();
        for (element, context) in contexts {
            let cancelled_timer = self.release(&element, context);
            self.trace.record(TraceEvent::Detached {
                element: &element,
                cancelled_timer,
            });
        }
    }

    /// Returns `true` if the timer was still pending.
    fn release(&mut self, element: &H::Element, context: AttachmentContext<H>) -> bool {
        for (kind, listener) in context.listeners {
            self.host.remove_listener(element, kind, listener);
        }
        match context.pending_timer {
            Some((_, timer)) => {
                self.host.clear_timeout(timer);
                true
            }
            None => false,
        }
    }

    /// Feed one input event for `element` through its state machine.
    ///
    /// Events for elements that are not attached pass through.
    pub fn handle_event(&mut self, element: &H::Element, event: &InputEvent) -> Disposition {
        let Some(context) = self.contexts.get_mut(element) else {
            return Disposition::PASS;
        };

        match event.kind.role() {
            EventRole::PressStart => {
                context.is_long_press = false;
                // Other buttons clear the flag but never start a timer.
                if let Some(button) = event.button.filter(|_| !event.starts_press()) {
                    self.trace
                        .record(TraceEvent::PressIgnored { element, button });
                    return Disposition::PASS;
                }

                if let Some((stale, timer)) = context.pending_timer.take() {
                    self.host.clear_timeout(timer);
                    self.trace.record(TraceEvent::PressCancelled {
                        element,
                        timer: stale,
                    });
                }

                self.last_timer += 1;
                let id = TimerId::new(self.last_timer);
                let timer = self.host.set_timeout(element, id, context.threshold);
                context.pending_timer = Some((id, timer));
                context.phase = PressPhase::Pressing;
                self.trace
                    .record(TraceEvent::PressStarted { element, timer: id });
                Disposition::PASS
            }
            EventRole::PressEnd => {
                let was = core::mem::take(&mut context.phase);
                if let Some((id, timer)) = context.pending_timer.take() {
                    self.host.clear_timeout(timer);
                    self.trace
                        .record(TraceEvent::PressCancelled { element, timer: id });
                }
                if was == PressPhase::LongPressConfirmed {
                    self.trace.record(TraceEvent::Released {
                        element,
                        kind: event.kind,
                    });
                }
                if context.is_long_press {
                    self.trace.record(TraceEvent::Suppressed {
                        element,
                        kind: event.kind,
                    });
                    Disposition::SUPPRESS
                } else {
                    Disposition::PASS
                }
            }
            EventRole::Click => {
                if context.is_long_press {
                    self.trace.record(TraceEvent::Suppressed {
                        element,
                        kind: event.kind,
                    });
                    Disposition::SUPPRESS
                } else {
                    Disposition::PASS
                }
            }
        }
    }

    /// Confirm a long press because `timer` fired, without running the callback.
    ///
    /// Returns the callback to run, or `None` if `timer` is not the pending
    /// timer of an attached `element` (it was cancelled, superseded by a later
    /// press, or the element was detached).
    ///
    /// Use this instead of [`expire`](Self::expire) when the callback may
    /// re-enter the detector, for example to detach its own element.
    #[must_use = "the returned callback has not been run"]
    pub fn confirm(&mut self, element: &H::Element, timer: TimerId) -> Option<Callback> {
        let context = self.contexts.get_mut(element)?;
        let Some((_, handle)) = context.pending_timer.take_if(|(id, _)| *id == timer) else {
            self.trace.record(TraceEvent::StaleTimer { element, timer });
            return None;
        };
        self.host.timer_spent(handle);
        context.is_long_press = true;
        context.phase = PressPhase::LongPressConfirmed;
        self.trace.record(TraceEvent::LongPress { element, timer });
        Some(context.callback.clone())
    }

    /// Confirm a long press because `timer` fired, and run the callback.
    ///
    /// Returns `true` if the callback ran.
    pub fn expire(&mut self, element: &H::Element, timer: TimerId) -> bool {
        match self.confirm(element, timer) {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `element` is attached.
    #[must_use]
    pub fn is_attached(&self, element: &H::Element) -> bool {
        self.contexts.contains_key(element)
    }

    /// The context of an attached element.
    #[must_use]
    pub fn context(&self, element: &H::Element) -> Option<&AttachmentContext<H>> {
        self.contexts.get(element)
    }

    /// The current phase of an attached element.
    #[must_use]
    pub fn phase(&self, element: &H::Element) -> Option<PressPhase> {
        self.context(element).map(AttachmentContext::phase)
    }

    /// The threshold `element` was attached with.
    #[must_use]
    pub fn threshold(&self, element: &H::Element) -> Option<Threshold> {
        self.context(element).map(AttachmentContext::threshold)
    }

    /// Whether the last press on `element` was long. `false` when not attached.
    #[must_use]
    pub fn is_long_press(&self, element: &H::Element) -> bool {
        self.context(element)
            .is_some_and(AttachmentContext::is_long_press)
    }

    /// Iterate over attached elements, in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &H::Element> + '_ {
        self.contexts.keys()
    }

    /// Number of attached elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Returns `true` if nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl<H: Host, T: PressTrace<H::Element>> Drop for LongPress<H, T> {
    fn drop(&mut self) {
        self.detach_all();
    }
}

impl<H, T> fmt::Debug for LongPress<H, T>
where
    H: Host + fmt::Debug,
    H::Element: fmt::Debug,
    T: PressTrace<H::Element> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LongPress")
            .field("host", &self.host)
            .field("trace", &self.trace)
            .field("contexts", &self.contexts)
            .field("last_timer", &self.last_timer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeadlessHost, PointerButton, TraceRecorder};
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn counting() -> (Rc<Cell<u32>>, Binding) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Binding::new(move || c.set(c.get() + 1)))
    }

    fn recorded() -> LongPress<HeadlessHost<u32>, TraceRecorder<u32>> {
        LongPress::with_trace(HeadlessHost::new(), TraceRecorder::new())
    }

    #[test]
    fn attach_registers_the_full_listener_set() {
        let mut lp = LongPress::new(HeadlessHost::new());
        let (_, binding) = counting();
        lp.attach(1_u32, binding).unwrap();

        let kinds: Vec<_> = lp.context(&1).unwrap().listener_kinds().collect();
        assert_eq!(kinds, EventKind::ALL.to_vec());
        assert_eq!(lp.host().listener_count(&1), EventKind::ALL.len());
        assert!(lp.host().has_listener(&1, EventKind::Click));
        assert_eq!(lp.phase(&1), Some(PressPhase::Idle));
    }

    #[test]
    fn attach_without_callback_registers_nothing() {
        let mut lp = recorded();
        let err = lp.attach(1, Binding::default()).unwrap_err();
        assert_eq!(err, Error::InvalidCallback { element: 1 });
        assert!(!lp.is_attached(&1));
        assert_eq!(lp.host().listener_count(&1), 0);
        assert!(lp.trace().events().is_empty());
    }

    #[test]
    fn failed_reattach_keeps_existing_context() {
        let mut lp = LongPress::new(HeadlessHost::new());
        let (_, binding) = counting();
        lp.attach(1_u32, binding.with_threshold(800)).unwrap();
        assert!(lp.attach(1, Binding::default()).is_err());
        assert_eq!(lp.threshold(&1).map(Threshold::as_millis), Some(800));
        assert_eq!(lp.host().listener_count(&1), EventKind::ALL.len());
    }

    #[test]
    fn reattach_replaces_context_and_cancels_timer() {
        let mut lp = recorded();
        let (first, binding) = counting();
        lp.attach(1, binding).unwrap();
        lp.handle_event(&1, &InputEvent::touch_start());
        assert_eq!(lp.host().pending_timers(), 1);

        let (second, binding) = counting();
        lp.attach(1, binding.with_threshold(100)).unwrap();
        assert_eq!(lp.host().pending_timers(), 0);
        assert_eq!(lp.host().listener_count(&1), EventKind::ALL.len());
        assert_eq!(lp.len(), 1);

        lp.advance_to(1_000);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 0);
        assert!(
            lp.trace()
                .events()
                .contains(&TraceEvent::Replaced { element: 1 })
        );
    }

    #[test]
    fn detach_removes_listeners_and_cancels_timer() {
        let mut lp = recorded();
        let (count, binding) = counting();
        lp.attach(1, binding).unwrap();
        lp.handle_event(&1, &InputEvent::mouse_down(PointerButton::Primary));

        lp.detach(&1).unwrap();
        assert!(lp.is_empty());
        assert_eq!(lp.host().listener_count(&1), 0);
        assert_eq!(lp.host().pending_timers(), 0);
        assert_eq!(
            lp.trace().events().last(),
            Some(&TraceEvent::Detached {
                element: 1,
                cancelled_timer: true
            })
        );

        lp.advance_to(5_000);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn detach_without_attach_reports_missing_context() {
        let mut lp = recorded();
        let (_, binding) = counting();
        lp.attach(2, binding).unwrap();

        let err = lp.detach(&1).unwrap_err();
        assert!(err.is_missing_context());
        assert!(lp.detach(&1).is_err());
        assert!(lp.is_attached(&2));
        assert_eq!(
            lp.trace().events().last(),
            Some(&TraceEvent::MissingContext { element: 1 })
        );
    }

    #[test]
    fn secondary_button_is_ignored_entirely() {
        let mut lp = recorded();
        let (count, binding) = counting();
        lp.attach(1, binding).unwrap();

        let d = lp.handle_event(&1, &InputEvent::mouse_down(PointerButton::Secondary));
        assert_eq!(d, Disposition::PASS);
        assert_eq!(lp.phase(&1), Some(PressPhase::Idle));
        assert_eq!(lp.host().pending_timers(), 0);

        lp.advance_to(10_000);
        assert_eq!(count.get(), 0);
        assert_eq!(lp.handle_event(&1, &InputEvent::click()), Disposition::PASS);
        assert!(lp.trace().events().contains(&TraceEvent::PressIgnored {
            element: 1,
            button: PointerButton::Secondary
        }));
    }

    #[test]
    fn secondary_press_clears_a_confirmed_flag() {
        let mut lp = LongPress::new(HeadlessHost::new());
        let (count, binding) = counting();
        lp.attach(1_u32, binding).unwrap();
        lp.handle_event(&1, &InputEvent::touch_start());
        lp.advance_to(500);
        assert!(lp.is_long_press(&1));

        lp.handle_event(&1, &InputEvent::mouse_down(PointerButton::Auxiliary));
        assert!(!lp.is_long_press(&1));
        assert_eq!(lp.phase(&1), Some(PressPhase::LongPressConfirmed));
        assert_eq!(lp.host().pending_timers(), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn secondary_release_after_long_press_passes() {
        let mut lp = LongPress::new(HeadlessHost::new());
        let (count, binding) = counting();
        lp.attach(1_u32, binding).unwrap();
        lp.handle_event(&1, &InputEvent::touch_start());
        lp.advance_to(600);
        assert_eq!(
            lp.handle_event(&1, &InputEvent::touch_end()),
            Disposition::SUPPRESS
        );
        assert_eq!(lp.handle_event(&1, &InputEvent::click()), Disposition::SUPPRESS);

        lp.handle_event(&1, &InputEvent::mouse_down(PointerButton::Secondary));
        lp.advance_to(5_000);
        assert_eq!(
            lp.handle_event(
                &1,
                &InputEvent {
                    kind: EventKind::MouseUp,
                    button: Some(PointerButton::Secondary),
                }
            ),
            Disposition::PASS
        );
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn second_press_start_supersedes_pending_timer() {
        let mut lp = recorded();
        let (count, binding) = counting();
        lp.attach(1, binding).unwrap();

        lp.handle_event(&1, &InputEvent::touch_start());
        lp.advance_to(300);
        lp.handle_event(&1, &InputEvent::mouse_down(PointerButton::Primary));
        assert_eq!(lp.host().pending_timers(), 1);

        // The first timer would have fired at 500.
        lp.advance_to(700);
        assert_eq!(count.get(), 0);
        lp.advance_to(800);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn stale_timer_ids_are_ignored() {
        let mut lp = recorded();
        let (count, binding) = counting();
        lp.attach(1, binding).unwrap();
        lp.handle_event(&1, &InputEvent::touch_start());
        let id = lp.context(&1).unwrap().pending_timer().unwrap();
        lp.handle_event(&1, &InputEvent::touch_cancel());

        assert!(!lp.expire(&1, id));
        assert_eq!(count.get(), 0);
        assert!(!lp.is_long_press(&1));
        assert_eq!(
            lp.trace().events().last(),
            Some(&TraceEvent::StaleTimer {
                element: 1,
                timer: id
            })
        );
        assert!(!lp.expire(&9, id));
    }

    #[test]
    fn confirm_returns_callback_without_running_it() {
        let mut lp = LongPress::new(HeadlessHost::new());
        let (count, binding) = counting();
        lp.attach(1_u32, binding).unwrap();
        lp.handle_event(&1, &InputEvent::touch_start());
        let id = lp.context(&1).unwrap().pending_timer().unwrap();

        let callback = lp.confirm(&1, id).unwrap();
        assert_eq!(count.get(), 0);
        assert_eq!(lp.phase(&1), Some(PressPhase::LongPressConfirmed));
        callback();
        assert_eq!(count.get(), 1);
        assert!(lp.confirm(&1, id).is_none());
    }

    #[test]
    fn release_after_confirmation_is_suppressed_and_traced() {
        let mut lp = recorded();
        let (_, binding) = counting();
        lp.attach(1, binding).unwrap();
        lp.handle_event(&1, &InputEvent::touch_start());
        lp.advance_to(500);
        lp.trace_mut().clear();

        let d = lp.handle_event(&1, &InputEvent::touch_end());
        assert_eq!(d, Disposition::SUPPRESS);
        assert_eq!(lp.phase(&1), Some(PressPhase::Idle));
        assert_eq!(
            lp.trace().events(),
            &[
                TraceEvent::Released {
                    element: 1,
                    kind: EventKind::TouchEnd
                },
                TraceEvent::Suppressed {
                    element: 1,
                    kind: EventKind::TouchEnd
                },
            ]
        );
    }

    #[test]
    fn events_for_unattached_elements_pass() {
        let mut lp = LongPress::new(HeadlessHost::<u32>::new());
        for event in [
            InputEvent::touch_start(),
            InputEvent::touch_end(),
            InputEvent::click(),
        ] {
            assert_eq!(lp.handle_event(&1, &event), Disposition::PASS);
        }
        assert_eq!(lp.host().pending_timers(), 0);
    }

    #[test]
    fn detach_all_and_drop_release_everything() {
        let mut lp = recorded();
        for el in 0..4 {
            let (_, binding) = counting();
            lp.attach(el, binding).unwrap();
            lp.handle_event(&el, &InputEvent::touch_start());
        }
        assert_eq!(lp.host().pending_timers(), 4);

        lp.detach_all();
        assert!(lp.is_empty());
        assert_eq!(lp.host().pending_timers(), 0);
        assert_eq!(lp.host().total_listeners(), 0);
        let detached = lp
            .trace()
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::Detached { .. }))
            .count();
        assert_eq!(detached, 4);
    }

    #[test]
    fn timers_are_per_element() {
        let mut lp = LongPress::new(HeadlessHost::new());
        let (a, binding_a) = counting();
        let (b, binding_b) = counting();
        lp.attach(1_u32, binding_a.with_threshold(200)).unwrap();
        lp.attach(2, binding_b.with_threshold(400)).unwrap();

        lp.handle_event(&1, &InputEvent::touch_start());
        lp.handle_event(&2, &InputEvent::touch_start());
        lp.advance_to(300);
        assert_eq!((a.get(), b.get()), (1, 0));

        lp.handle_event(&2, &InputEvent::touch_end());
        lp.advance_to(1_000);
        assert_eq!((a.get(), b.get()), (1, 0));
        assert_eq!(lp.handle_event(&1, &InputEvent::click()), Disposition::SUPPRESS);
        assert_eq!(lp.handle_event(&2, &InputEvent::click()), Disposition::PASS);
        assert_eq!(lp.len(), 2);
    }
}
