// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attach-time configuration: the press threshold and the bound callback.
//!
//! A [`Binding`] is what a declarative directive hands to
//! [`LongPress::attach`](crate::LongPress::attach): an optional callback (the
//! directive value) and an optional threshold (the directive argument, as in
//! `v-longpress:800`).
//!
//! ```
//! use longpress::{Binding, Threshold};
//!
//! let binding = Binding::new(|| {}).with_arg("800");
//! assert_eq!(binding.threshold().as_millis(), 800);
//!
//! // Missing or malformed thresholds fall back to the default.
//! assert_eq!(Binding::new(|| {}).threshold(), Threshold::DEFAULT);
//! assert_eq!(Binding::new(|| {}).with_arg("soon").threshold(), Threshold::DEFAULT);
//! assert_eq!(Binding::new(|| {}).with_threshold(0).threshold(), Threshold::DEFAULT);
//! ```

use alloc::rc::Rc;
use core::fmt;
use core::num::NonZeroU32;

/// Default press duration, in milliseconds, after which a press is long.
pub const DEFAULT_THRESHOLD_MS: u32 = 500;

/// The action run when a long press is confirmed.
pub type Callback = Rc<dyn Fn()>;

/// A positive press duration in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Threshold(NonZeroU32);

impl Threshold {
    /// [`DEFAULT_THRESHOLD_MS`] as a threshold.
    pub const DEFAULT: Self = match NonZeroU32::new(DEFAULT_THRESHOLD_MS) {
        Some(ms) => Self(ms),
        None => panic!("default threshold must be positive"),
    };

    /// Returns `None` for a zero duration.
    #[must_use]
    pub const fn from_millis(ms: u32) -> Option<Self> {
        match NonZeroU32::new(ms) {
            Some(ms) => Some(Self(ms)),
            None => None,
        }
    }

    /// Parse a directive argument such as `"800"`.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything that is
    /// not a positive integer.
    #[must_use]
    pub fn parse(arg: &str) -> Option<Self> {
        arg.trim().parse::<u32>().ok().and_then(Self::from_millis)
    }

    /// The duration in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u32 {
        self.0.get()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// The inputs to one [`attach`](crate::LongPress::attach) call.
#[derive(Clone, Default)]
pub struct Binding {
    /// The callback to run on a confirmed long press.
    ///
    /// `None` models a directive used without a value; attaching it fails
    /// with [`Error::InvalidCallback`](crate::Error::InvalidCallback).
    pub value: Option<Callback>,
    /// The requested threshold in milliseconds.
    ///
    /// `None` and `Some(0)` both resolve to [`Threshold::DEFAULT`].
    pub threshold_ms: Option<u32>,
}

impl Binding {
    /// Bind `callback` with the default threshold.
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self::from_callback(Rc::new(callback))
    }

    /// Bind an already shared callback.
    #[must_use]
    pub fn from_callback(callback: Callback) -> Self {
        Self {
            value: Some(callback),
            threshold_ms: None,
        }
    }

    /// Request a threshold in milliseconds.
    #[must_use]
    pub fn with_threshold(mut self, ms: u32) -> Self {
        self.threshold_ms = Some(ms);
        self
    }

    /// Take the threshold from a directive argument.
    ///
    /// An argument that is not a positive integer clears any previously
    /// requested threshold.
    #[must_use]
    pub fn with_arg(mut self, arg: &str) -> Self {
        self.threshold_ms = Threshold::parse(arg).map(Threshold::as_millis);
        self
    }

    /// The threshold this binding resolves to.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold_ms
            .and_then(Threshold::from_millis)
            .unwrap_or_default()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.value.as_ref().map(|_| "Fn()"))
            .field("threshold_ms", &self.threshold_ms)
            .finish()
    }
}
