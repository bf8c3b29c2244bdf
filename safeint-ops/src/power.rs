//! Exponentiation by squaring
//!
//! `x^p` is computed as `(x^(p/2))^2`, times `x` again when `p` is odd.
//! Recursion depth is bounded by `log2(p) <= 32`.
//!
//! The checked variant stops at the first failing step. Before squaring an
//! intermediate it also rejects any value whose magnitude has a nonzero high
//! limb: `|y| >= 2^(W/2)` means `y^2 >= 2^W`, which no W-bit type can hold.

use crate::strategy::{CheckedArith, Strategy};
use safeint_core::{Bits, CheckedResult, HalfWidthSplit, Integer};

/// Checked `x^exp`, with `0^0 = 1`
///
/// On overflow the result saturates to `MIN` for a negative base raised to
/// an odd power and to `MAX` otherwise.
pub fn checked_pow<T: CheckedArith>(x: T, exp: u32) -> CheckedResult<T> {
    match pow_exact(x, exp) {
        Some(value) => CheckedResult::exact(value),
        None => {
            tracing::trace!(target: "safeint", base = %x, exp, "checked_pow short-circuited on overflow");
            if x.is_negative() && exp % 2 == 1 {
                CheckedResult::saturated_min()
            } else {
                CheckedResult::saturated_max()
            }
        }
    }
}

fn pow_exact<T: CheckedArith>(x: T, exp: u32) -> Option<T> {
    match exp {
        0 => return Some(T::ONE),
        1 => return Some(x),
        _ => {}
    }

    let half = pow_exact(x, exp / 2)?;
    if half.magnitude().hi() != <T::Bits as Bits>::ZERO {
        return None;
    }

    let square = <T::Strategy as Strategy<T>>::checked_mul(half, half).into_option()?;
    if exp % 2 == 0 {
        Some(square)
    } else {
        <T::Strategy as Strategy<T>>::checked_mul(square, x).into_option()
    }
}

/// Unchecked `x^exp` with two's complement wraparound
///
/// Same squaring recursion as [`checked_pow`], bit-for-bit equal to the
/// primitive `wrapping_pow`.
pub fn raw_pow<T: Integer>(x: T, exp: u32) -> T {
    match exp {
        0 => T::ONE,
        1 => x,
        _ => {
            let half = raw_pow(x, exp / 2);
            let square = half.wrapping_mul(half);
            if exp % 2 == 0 {
                square
            } else {
                square.wrapping_mul(x)
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_checked_pow_matches_std_i32(x in -50i32..50, exp in 0u32..40) {
            let result = checked_pow(x, exp);
            match x.checked_pow(exp) {
                Some(v) => prop_assert_eq!(result, CheckedResult::exact(v)),
                None => prop_assert!(result.overflowed),
            }
        }

        #[test]
        fn prop_checked_pow_matches_std_u64(x in 0u64..1000, exp in 0u32..70) {
            prop_assert_eq!(checked_pow(x, exp).into_option(), x.checked_pow(exp));
        }

        #[test]
        fn prop_raw_pow_matches_wrapping_pow(x: i64, exp in 0u32..200) {
            prop_assert_eq!(raw_pow(x, exp), x.wrapping_pow(exp));
        }
    }
}
