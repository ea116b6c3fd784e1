// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thresholds arriving from JavaScript.

/// Milliseconds for a threshold passed as a JavaScript number.
///
/// Only whole numbers from 1 to `u32::MAX` are accepted. Anything else,
/// including negative, fractional and non-finite values, gives `None` so
/// that the default threshold applies.
#[must_use]
pub fn threshold_from_js(value: Option<f64>) -> Option<u32> {
    let ms = value?;
    if !(1.0..=f64::from(u32::MAX)).contains(&ms) || ms.fract() != 0.0 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "range and integrality are checked above"
    )]
    let ms = ms as u32;
    Some(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_positive_numbers_pass_through() {
        assert_eq!(threshold_from_js(Some(1.0)), Some(1));
        assert_eq!(threshold_from_js(Some(800.0)), Some(800));
        assert_eq!(
            threshold_from_js(Some(f64::from(u32::MAX))),
            Some(u32::MAX)
        );
    }

    #[test]
    fn unusable_numbers_fall_back() {
        assert_eq!(threshold_from_js(None), None);
        assert_eq!(threshold_from_js(Some(-5.0)), None);
        assert_eq!(threshold_from_js(Some(0.0)), None);
        assert_eq!(threshold_from_js(Some(-0.0)), None);
        assert_eq!(threshold_from_js(Some(0.5)), None);
        assert_eq!(threshold_from_js(Some(250.25)), None);
        assert_eq!(threshold_from_js(Some(f64::NAN)), None);
        assert_eq!(threshold_from_js(Some(f64::INFINITY)), None);
        assert_eq!(threshold_from_js(Some(f64::from(u32::MAX) + 1.0)), None);
    }
}
