//! Fast path: arithmetic in a native carrier of twice the width
//!
//! Both operands are widened (sign-extended for signed types), combined
//! exactly in the carrier, and the exact result is tested for fitting back
//! into W bits:
//!
//! ```text
//! unsigned: product >> W == 0
//! signed:   product >> W ∈ {0, -1}  and  sign(product as T) follows the sign rule
//! ```
//!
//! `u64`/`i64` also get an implementation through 128-bit carriers. The
//! dispatch table never selects it; it exists to cross-check [`crate::Limb`].

use crate::sign;
use crate::strategy::{Strategy, Wide};
use safeint_core::CheckedResult;

macro_rules! wide_unsigned_impl {
    ($($t:ty => $w:ty),* $(,)?) => {
        $(
            impl Strategy<$t> for Wide {
                const IS_WIDE: bool = true;

                #[inline]
                fn checked_mul(a: $t, b: $t) -> CheckedResult<$t> {
                    let product = (a as $w) * (b as $w);
                    if product >> <$t>::BITS == 0 {
                        CheckedResult::exact(product as $t)
                    } else {
                        CheckedResult::saturated_max()
                    }
                }

                #[inline]
                fn checked_add(a: $t, b: $t) -> CheckedResult<$t> {
                    let sum = (a as $w) + (b as $w);
                    if sum > <$t>::MAX as $w {
                        CheckedResult::saturated_max()
                    } else {
                        CheckedResult::exact(sum as $t)
                    }
                }
            }
        )*
    };
}

macro_rules! wide_signed_impl {
    ($($t:ty => $w:ty),* $(,)?) => {
        $(
            impl Strategy<$t> for Wide {
                const IS_WIDE: bool = true;

                #[inline]
                fn checked_mul(a: $t, b: $t) -> CheckedResult<$t> {
                    let product = (a as $w) * (b as $w);
                    let high = product >> <$t>::BITS;
                    let value = product as $t;
                    if (high == 0 || high == -1) && sign::matches_product_sign(a, b, value) {
                        CheckedResult::exact(value)
                    } else {
                        sign::clamp_product(a, b)
                    }
                }

                #[inline]
                fn checked_add(a: $t, b: $t) -> CheckedResult<$t> {
                    sign::signed_add(a, b)
                }
            }
        )*
    };
}

wide_unsigned_impl! {
    u8 => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
}

wide_signed_impl! {
    i8 => i16,
    i16 => i32,
    i32 => i64,
    i64 => i128,
}

#[cfg(target_pointer_width = "64")]
wide_unsigned_impl! { usize => u128 }
#[cfg(target_pointer_width = "64")]
wide_signed_impl! { isize => i128 }

#[cfg(target_pointer_width = "32")]
wide_unsigned_impl! { usize => u64 }
#[cfg(target_pointer_width = "32")]
wide_signed_impl! { isize => i64 }

#[cfg(target_pointer_width = "16")]
wide_unsigned_impl! { usize => u32 }
#[cfg(target_pointer_width = "16")]
wide_signed_impl! { isize => i32 }
