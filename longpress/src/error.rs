// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors reported by [`LongPress`](crate::LongPress).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// `attach` was called without a callback. Nothing was registered.
    InvalidCallback {
        /// The element that was being attached.
        element: E,
    },
    /// `detach` was called for an element with no attachment.
    ///
    /// This is benign: no state changed. Hosts usually log it and move on.
    MissingContext {
        /// The element that was being detached.
        element: E,
    },
}

impl<E> Error<E> {
    /// The element the failed operation was called with.
    #[must_use]
    pub fn element(&self) -> &E {
        match self {
            Self::InvalidCallback { element } | Self::MissingContext { element } => element,
        }
    }

    /// Returns `true` for [`Error::MissingContext`].
    #[must_use]
    pub fn is_missing_context(&self) -> bool {
        matches!(self, Self::MissingContext { .. })
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCallback { element } => {
                write!(f, "no long-press callback bound to {element:?}")
            }
            Self::MissingContext { element } => {
                write!(f, "no long-press attachment recorded for {element:?}")
            }
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_element() {
        let err = Error::MissingContext { element: 7_u32 };
        assert_eq!(
            err.to_string(),
            "no long-press attachment recorded for 7"
        );
        assert!(err.is_missing_context());
        assert_eq!(*err.element(), 7);

        let err = Error::InvalidCallback { element: "button" };
        assert_eq!(err.to_string(), "no long-press callback bound to \"button\"");
        assert!(!err.is_missing_context());
    }
}
