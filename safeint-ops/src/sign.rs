//! Sign rules shared by both strategies
//!
//! - Same-sign operands (or a zero operand) give a nonnegative product
//! - Strictly opposite-sign operands give a negative product
//! - An overflowed product clamps toward the sign it should have had
//!
//! Signed addition has no carrier-dependent fast path, so it lives here too.

use safeint_core::{CheckedResult, Integer};

/// Check if the exact product of `a` and `b` is below zero
#[inline]
pub(crate) fn product_is_negative<T: Integer>(a: T, b: T) -> bool {
    (a.is_negative() && b.is_positive()) || (a.is_positive() && b.is_negative())
}

/// Check if a truncated product has the sign the exact product must have
#[inline]
pub(crate) fn matches_product_sign<T: Integer>(a: T, b: T, value: T) -> bool {
    value.is_negative() == product_is_negative(a, b)
}

/// Overflowed product of `a` and `b`, clamped by the sign rule
#[inline]
pub(crate) fn clamp_product<T: Integer>(a: T, b: T) -> CheckedResult<T> {
    if product_is_negative(a, b) {
        CheckedResult::saturated_min()
    } else {
        CheckedResult::saturated_max()
    }
}

/// Checked addition for signed types of any width
///
/// The sum is formed on bit patterns, then judged by sign: two positives
/// that wrap below zero clamp to `MAX`, two negatives that wrap to zero or
/// above clamp to `MIN`. Mixed signs can never overflow.
#[inline]
pub(crate) fn signed_add<T: Integer>(a: T, b: T) -> CheckedResult<T> {
    let sum = a.wrapping_add(b);
    if a.is_positive() && b.is_positive() && sum.is_negative() {
        CheckedResult::saturated_max()
    } else if a.is_negative() && b.is_negative() && !sum.is_negative() {
        CheckedResult::saturated_min()
    } else {
        CheckedResult::exact(sum)
    }
}
