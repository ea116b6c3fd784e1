// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by the detector, and the dispositions it hands back.
//!
//! The detector never touches a real event object. Hosts translate whatever
//! their platform delivers into an [`InputEvent`], feed it to
//! [`LongPress::handle_event`](crate::LongPress::handle_event), and apply the
//! returned [`Disposition`] to the original event.
//!
//! ```
//! use longpress::{Disposition, EventKind, InputEvent, PointerButton};
//!
//! let down = InputEvent::mouse_down(PointerButton::from_dom(0));
//! assert_eq!(down.kind, EventKind::MouseDown);
//! assert!(down.starts_press());
//!
//! let right = InputEvent::mouse_down(PointerButton::from_dom(2));
//! assert!(!right.starts_press());
//!
//! assert!(Disposition::SUPPRESS.prevents_default());
//! assert!(Disposition::PASS.is_empty());
//! ```

use bitflags::bitflags;

/// The event types an attachment listens to.
///
/// Every attachment registers exactly the kinds in [`EventKind::ALL`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `mousedown`: press-start.
    MouseDown,
    /// `touchstart`: press-start.
    TouchStart,
    /// `mouseup`: press-end.
    MouseUp,
    /// `mouseleave`: press-end; leaving the element counts as a release.
    MouseLeave,
    /// `touchend`: press-end.
    TouchEnd,
    /// `touchcancel`: press-end.
    TouchCancel,
    /// `click`: filtered in the capture phase.
    Click,
}

/// What an [`EventKind`] means to the press state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventRole {
    /// Starts tracking a press.
    PressStart,
    /// Ends (or cancels) a tracked press.
    PressEnd,
    /// The click that follows a release.
    Click,
}

impl EventKind {
    /// The listener set registered for each attachment, in registration order.
    pub const ALL: [Self; 7] = [
        Self::MouseDown,
        Self::TouchStart,
        Self::MouseUp,
        Self::MouseLeave,
        Self::TouchEnd,
        Self::TouchCancel,
        Self::Click,
    ];

    /// The DOM event type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::TouchStart => "touchstart",
            Self::MouseUp => "mouseup",
            Self::MouseLeave => "mouseleave",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
            Self::Click => "click",
        }
    }

    /// Whether the listener for this kind is registered in the capture phase.
    ///
    /// Only `click` is, so that suppression runs before any bubble-phase
    /// listener on the same element.
    #[must_use]
    pub const fn capture(self) -> bool {
        matches!(self, Self::Click)
    }

    /// The role of this kind in the press state machine.
    #[must_use]
    pub const fn role(self) -> EventRole {
        match self {
            Self::MouseDown | Self::TouchStart => EventRole::PressStart,
            Self::MouseUp | Self::MouseLeave | Self::TouchEnd | Self::TouchCancel => {
                EventRole::PressEnd
            }
            Self::Click => EventRole::Click,
        }
    }
}

/// The mouse button reported with a mouse event.
///
/// Numbering follows `MouseEvent.button` in the DOM.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Button 0, usually the left button.
    Primary,
    /// Button 1, usually the wheel button.
    Auxiliary,
    /// Button 2, usually the right button.
    Secondary,
    /// Any other button number (back, forward, ...).
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub const fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    /// Returns `true` for the only button that starts long-press tracking.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// One input event delivered to an attached element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InputEvent {
    /// The event type.
    pub kind: EventKind,
    /// The mouse button, for mouse events. Touch events carry `None`.
    pub button: Option<PointerButton>,
}

impl InputEvent {
    /// A `mousedown` with the given button.
    #[must_use]
    pub const fn mouse_down(button: PointerButton) -> Self {
        Self {
            kind: EventKind::MouseDown,
            button: Some(button),
        }
    }

    /// A `mouseup` with the primary button.
    #[must_use]
    pub const fn mouse_up() -> Self {
        Self {
            kind: EventKind::MouseUp,
            button: Some(PointerButton::Primary),
        }
    }

    /// A `mouseleave`.
    #[must_use]
    pub const fn mouse_leave() -> Self {
        Self {
            kind: EventKind::MouseLeave,
            button: Some(PointerButton::Primary),
        }
    }

    /// A `touchstart`.
    #[must_use]
    pub const fn touch_start() -> Self {
        Self::touch(EventKind::TouchStart)
    }

    /// A `touchend`.
    #[must_use]
    pub const fn touch_end() -> Self {
        Self::touch(EventKind::TouchEnd)
    }

    /// A `touchcancel`.
    #[must_use]
    pub const fn touch_cancel() -> Self {
        Self::touch(EventKind::TouchCancel)
    }

    /// A primary-button `click`.
    #[must_use]
    pub const fn click() -> Self {
        Self {
            kind: EventKind::Click,
            button: Some(PointerButton::Primary),
        }
    }

    const fn touch(kind: EventKind) -> Self {
        Self { kind, button: None }
    }

    /// Returns `true` if this event begins long-press tracking.
    ///
    /// Touch starts always do; mouse downs only with the primary button.
    #[must_use]
    pub fn starts_press(&self) -> bool {
        self.kind.role() == EventRole::PressStart && self.button.is_none_or(PointerButton::is_primary)
    }
}

bitflags! {
    /// What the host must do to the event it just delivered.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Disposition: u8 {
        /// Call `preventDefault()` (or the platform equivalent).
        const PREVENT_DEFAULT = 1 << 0;
        /// Call `stopImmediatePropagation()`: no further listeners on this
        /// element, and no propagation beyond it.
        const STOP_IMMEDIATE_PROPAGATION = 1 << 1;
        /// Both of the above; used for clicks that end a long press.
        const SUPPRESS = Self::PREVENT_DEFAULT.bits() | Self::STOP_IMMEDIATE_PROPAGATION.bits();
    }
}

impl Disposition {
    /// Deliver the event unmodified.
    pub const PASS: Self = Self::empty();

    /// Returns `true` if the default action must be prevented.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        self.contains(Self::PREVENT_DEFAULT)
    }

    /// Returns `true` if propagation must stop immediately.
    #[must_use]
    pub const fn stops_propagation(self) -> bool {
        self.contains(Self::STOP_IMMEDIATE_PROPAGATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct_dom_types() {
        let names: alloc::vec::Vec<_> = EventKind::ALL.into_iter().map(EventKind::name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "{name} listed twice");
        }
        assert_eq!(EventKind::MouseLeave.name(), "mouseleave");
        assert_eq!(EventKind::TouchCancel.name(), "touchcancel");
    }

    #[test]
    fn only_click_listens_in_capture_phase() {
        let captured: alloc::vec::Vec<_> = EventKind::ALL
            .into_iter()
            .filter(|kind| kind.capture())
            .collect();
        assert_eq!(captured, alloc::vec![EventKind::Click]);
    }

    #[test]
    fn roles_cover_the_listener_set() {
        let starts = EventKind::ALL
            .iter()
            .filter(|k| k.role() == EventRole::PressStart)
            .count();
        let ends = EventKind::ALL
            .iter()
            .filter(|k| k.role() == EventRole::PressEnd)
            .count();
        assert_eq!(starts, 2);
        assert_eq!(ends, 4);
        assert_eq!(EventKind::Click.role(), EventRole::Click);
    }

    #[test]
    fn dom_button_numbers() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Auxiliary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Other(4));
        assert!(PointerButton::from_dom(0).is_primary());
        assert!(!PointerButton::from_dom(3).is_primary());
    }

    #[test]
    fn touch_starts_press_without_a_button() {
        assert!(InputEvent::touch_start().starts_press());
        assert!(InputEvent::mouse_down(PointerButton::Primary).starts_press());
        assert!(!InputEvent::mouse_down(PointerButton::Auxiliary).starts_press());
        assert!(!InputEvent::touch_end().starts_press());
        assert!(!InputEvent::click().starts_press());
    }

    #[test]
    fn suppress_sets_both_flags() {
        let d = Disposition::SUPPRESS;
        assert!(d.prevents_default());
        assert!(d.stops_propagation());
        assert!(!Disposition::PASS.prevents_default());
        assert!(!Disposition::PASS.stops_propagation());
    }
}
