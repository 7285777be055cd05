//! Mark scale, assessment weights, and raw input reading.

/// Bounds of a mark and the pass threshold.
pub struct MarkScale;

impl MarkScale {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 20.0;
    pub const PASS: f64 = 10.0;
}

/// Blend ratio between continuous assessment (TD/TP) and the exam.
pub struct Weights;

impl Weights {
    pub const CC: f64 = 0.4;
    pub const EXAM: f64 = 0.6;
}

/// Clamp a mark into `[MarkScale::MIN, MarkScale::MAX]`.
///
/// NaN stays NaN so an invalid value is never mistaken for a zero.
pub fn clamp_mark(value: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    value.clamp(MarkScale::MIN, MarkScale::MAX)
}

/// True when the raw field content is blank.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Parse a raw field value into a clamped mark.
///
/// Returns `None` for blank, non-numeric or non-finite input.
pub fn parse_mark(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(clamp_mark(value))
}

/// Round to the two decimals averages are shown with.
pub fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whether an average reaches the pass threshold.
///
/// Decided on the displayed value, so an average printed as `10.00` passes.
pub fn is_pass(average: f64) -> bool {
    round_display(average) >= MarkScale::PASS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_mark_clamps_out_of_range() {
        assert_eq!(parse_mark("25"), Some(20.0));
        assert_eq!(parse_mark("-3"), Some(0.0));
        assert_eq!(parse_mark(" 12.5 "), Some(12.5));
    }

    #[test]
    fn parse_mark_rejects_blank_and_garbage() {
        assert_eq!(parse_mark(""), None);
        assert_eq!(parse_mark("   "), None);
        assert_eq!(parse_mark("abc"), None);
        assert_eq!(parse_mark("NaN"), None);
    }

    #[test]
    fn parse_mark_rejects_infinity() {
        assert_eq!(parse_mark("inf"), None);
        assert_eq!(parse_mark("+infinity"), None);
        assert_eq!(parse_mark("-inf"), None);
    }

    #[test]
    fn pass_boundary() {
        assert!(is_pass(10.0));
        assert!(is_pass(9.999999999999998));
        assert!(!is_pass(9.99));
        assert!(!is_pass(9.994));
    }

    proptest! {
        #[test]
        fn clamp_stays_in_range(v in -1.0e6f64..1.0e6) {
            let c = clamp_mark(v);
            prop_assert!((MarkScale::MIN..=MarkScale::MAX).contains(&c));
        }

        #[test]
        fn clamp_is_idempotent(v in proptest::num::f64::ANY) {
            let once = clamp_mark(v);
            let twice = clamp_mark(once);
            if once.is_nan() {
                prop_assert!(twice.is_nan());
            } else {
                prop_assert_eq!(once, twice);
            }
        }
    }
}
