//! Fallback path: schoolbook arithmetic over half-width limbs
//!
//! Used for the widest types, which have no native carrier twice their
//! width. Nothing wider than W bits is ever materialized.
//!
//! ## Multiplication
//!
//! With `a = ha·2^h + la` and `b = hb·2^h + lb` (h = W/2), the full 2W-bit
//! product is accumulated in four half-width stages:
//!
//! ```text
//!                          [ la·lb     ]   -> s0 + carry
//!               [ ha·lb + carry ]          -> s11, s21
//!               [ s11 + la·hb   ]          -> s12 + carry
//!    [ s21 + ha·hb + carry ]               -> s22, s3
//!
//!  product = s3 : s22 : s12 : s0
//! ```
//!
//! No stage exceeds W bits: the largest, `s21 + ha·hb + carry`, is at most
//! `(2^h - 1) + (2^h - 1)^2 + (2^h - 1) = 2^W - 1`.
//!
//! The low W bits (`s12 : s0`) are the wrapped result. The upper stages
//! (`s3 : s22`) decide overflow: they must be zero for unsigned operands,
//! and the sign extension of the result for signed ones.
//!
//! ## Signed operands
//!
//! Limbs are cut from the unsigned bit patterns `A` and `B`. Their upper
//! stages describe `A·B`, which differs from the signed product by
//! `2^W·(B·[a < 0] + A·[b < 0])` modulo `2^2W`. Subtracting those terms from
//! the upper stages (wrapping, in W bits) recovers the upper half of the
//! signed product.

use crate::sign;
use crate::strategy::{Limb, Strategy};
use safeint_core::{Bits, CheckedResult, HalfWidthSplit, Integer};

/// Full 2W-bit product of two W-bit patterns, split into W-bit halves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimbProduct<B> {
    /// Stages `s12 : s0`
    pub low: B,
    /// Stages `s3 : s22`
    pub high: B,
}

/// Schoolbook multiply of two unsigned W-bit values into a 2W-bit result
#[inline]
pub fn mul_wide<B: Bits>(a: B, b: B) -> LimbProduct<B> {
    let (hia, loa) = a.split();
    let (hib, lob) = b.split();

    // Stage 0: la·lb, carry into stage 1
    let x1 = loa * lob;
    let s0 = x1.lo();

    // Stage 1: ha·lb plus the carry, overflow spills into stage 2
    let x2 = hia * lob + x1.hi();
    let s11 = x2.lo();
    let s21 = x2.hi();

    // Stage 1: second cross product la·hb
    let x3 = s11 + loa * hib;
    let s12 = x3.lo();

    // Stages 2 and 3: ha·hb plus both carries
    let x4 = s21 + hia * hib + x3.hi();
    let s22 = x4.lo();
    let s3 = x4.hi();

    LimbProduct {
        low: B::join(s12, s0),
        high: B::join(s3, s22),
    }
}

/// Upper half of the signed product, from the upper half of `A·B`
#[inline]
fn signed_high<T: Integer>(a: T, b: T, high: T::Bits) -> T::Bits {
    let mut high = high;
    if a.is_negative() {
        high = high.wrapping_sub(b.to_bits());
    }
    if b.is_negative() {
        high = high.wrapping_sub(a.to_bits());
    }
    high
}

impl<T: Integer> Strategy<T> for Limb {
    const IS_WIDE: bool = false;

    fn checked_mul(a: T, b: T) -> CheckedResult<T> {
        let zero = <T::Bits as Bits>::ZERO;
        let product = mul_wide(a.to_bits(), b.to_bits());
        let value = T::from_bits(product.low);

        if !T::LAYOUT.signed {
            return if product.high == zero {
                CheckedResult::exact(value)
            } else {
                CheckedResult::saturated_max()
            };
        }

        // Stages s3 : s22 must be all zeros or all ones
        let high = signed_high(a, b, product.high);
        let extended = high == zero || high == <T::Bits as Bits>::ALL_ONES;

        if extended && sign::matches_product_sign(a, b, value) {
            CheckedResult::exact(value)
        } else {
            sign::clamp_product(a, b)
        }
    }

    fn checked_add(a: T, b: T) -> CheckedResult<T> {
        if T::LAYOUT.signed {
            return sign::signed_add(a, b);
        }

        let (hia, loa) = a.to_bits().split();
        let (hib, lob) = b.to_bits().split();

        // Low limbs, carry into the high limbs
        let x1 = loa + lob;
        let s0 = x1.lo();

        // High limbs plus carry; anything above the limb is carry-out
        let x2 = hia + hib + x1.hi();
        let s1 = x2.lo();
        let s2 = x2.hi();

        if s2 != <T::Bits as Bits>::ZERO {
            CheckedResult::saturated_max()
        } else {
            CheckedResult::exact(T::from_bits(<T::Bits as HalfWidthSplit>::join(s1, s0)))
        }
    }
}
