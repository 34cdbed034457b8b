//! Numeric guards shared by every analysis.
//!
//! Two guard policies coexist in this crate and must stay distinct:
//! ratio denominators are accepted only when strictly positive (here), while
//! period-over-period variance accepts any non-zero base (see
//! `structure::percent_change`).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Days in the commercial year used for the average collection period.
pub const COMMERCIAL_YEAR_DAYS: Decimal = dec!(360);

pub(crate) const HUNDRED: Decimal = dec!(100);
const TWO: Decimal = dec!(2);

/// Divides `numerator` by `denominator` when the denominator is strictly positive.
///
/// A zero or negative denominator (e.g. negative equity) suppresses the ratio
/// and yields `0` instead of a sign-flipped or infinite value. A quotient too
/// large for a `Decimal` is suppressed the same way.
pub fn safe_divide(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

/// Scales a raw ratio (0.25) to its percentage form (25).
pub fn to_percent(ratio: Decimal) -> Decimal {
    ratio.checked_mul(HUNDRED).unwrap_or(Decimal::ZERO)
}

/// `part / whole * 100`, guarded like `safe_divide`.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    to_percent(safe_divide(part, whole))
}

/// Returns `primary` when it was provided (strictly positive), else `fallback`.
pub fn value_or_fallback(primary: Decimal, fallback: Decimal) -> Decimal {
    if primary > Decimal::ZERO {
        primary
    } else {
        fallback
    }
}

/// `a - b`, or `0` when the difference overflows.
pub fn difference(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or(Decimal::ZERO)
}

/// The two-point average `(a + b) / 2` of a balance across both periods.
///
/// A sum that overflows yields `0`, which then suppresses any ratio using it.
pub fn two_point_average(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).map_or(Decimal::ZERO, |sum| sum / TWO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_divide_returns_quotient_for_positive_denominator() {
        assert_eq!(safe_divide(dec!(50), dec!(200)), dec!(0.25));
        assert_eq!(safe_divide(dec!(-50), dec!(200)), dec!(-0.25));
    }

    #[test]
    fn safe_divide_suppresses_zero_and_negative_denominators() {
        for numerator in [dec!(0), dec!(1), dec!(-1), dec!(123456.789), Decimal::MAX] {
            assert_eq!(safe_divide(numerator, Decimal::ZERO), Decimal::ZERO);
            assert_eq!(safe_divide(numerator, dec!(-1)), Decimal::ZERO);
            assert_eq!(safe_divide(numerator, dec!(-0.0001)), Decimal::ZERO);
        }
    }

    #[test]
    fn safe_divide_suppresses_overflowing_quotient() {
        assert_eq!(safe_divide(Decimal::MAX, dec!(0.0001)), Decimal::ZERO);
    }

    #[test]
    fn percent_of_scales_once() {
        assert_eq!(percent_of(dec!(25), dec!(100)), dec!(25));
        assert_eq!(percent_of(dec!(400), dec!(100)), dec!(400));
        assert_eq!(percent_of(dec!(25), dec!(0)), dec!(0));
    }

    #[test]
    fn value_or_fallback_prefers_positive_primary() {
        assert_eq!(value_or_fallback(dec!(80), dec!(100)), dec!(80));
        assert_eq!(value_or_fallback(dec!(0), dec!(100)), dec!(100));
        // Negative inputs count as "not provided".
        assert_eq!(value_or_fallback(dec!(-5), dec!(100)), dec!(100));
    }

    #[test]
    fn difference_guards_overflow() {
        assert_eq!(difference(dec!(500), dec!(150)), dec!(350));
        assert_eq!(difference(dec!(-5), dec!(5)), dec!(-10));
        assert_eq!(difference(Decimal::MAX, Decimal::MIN), Decimal::ZERO);
        assert_eq!(difference(Decimal::MIN, Decimal::MAX), Decimal::ZERO);
    }

    #[test]
    fn two_point_average_guards_overflow() {
        assert_eq!(two_point_average(dec!(10), dec!(20)), dec!(15));
        assert_eq!(two_point_average(dec!(-10), dec!(10)), dec!(0));
        assert_eq!(two_point_average(Decimal::MAX, Decimal::MAX), Decimal::ZERO);
    }
}
