//! # Strategy dispatch
//!
//! Two implementations of the same checked interface:
//!
//! - [`Wide`]: widen into a native carrier of twice the width and compute
//!   exactly (8/16/32-bit operands)
//! - [`Limb`]: schoolbook multiplication over half-width limbs with
//!   explicit carries (64/128-bit operands, which have no wider carrier)
//!
//! The choice is made per primitive through [`CheckedArith::Strategy`], so it
//! is resolved at compile time and costs nothing at runtime.

use safeint_core::{CheckedResult, Integer};

/// Checked multiply/add for one operand type
pub trait Strategy<T: Integer> {
    /// Whether this strategy widens into a native carrier
    const IS_WIDE: bool;

    /// Checked multiplication
    fn checked_mul(a: T, b: T) -> CheckedResult<T>;

    /// Checked addition
    fn checked_add(a: T, b: T) -> CheckedResult<T>;
}

/// Fast path through a native carrier of twice the operand width
#[derive(Debug, Clone, Copy)]
pub enum Wide {}

/// Fallback path through half-width limb decomposition
#[derive(Debug, Clone, Copy)]
pub enum Limb {}

/// Integers with a compile-time selected checked strategy
pub trait CheckedArith: Integer {
    /// Strategy used by [`crate::checked_mul`] and [`crate::checked_add`]
    type Strategy: Strategy<Self>;
}

macro_rules! dispatch_impl {
    ($($t:ty => $s:ty),* $(,)?) => {
        $(
            impl CheckedArith for $t {
                type Strategy = $s;
            }
        )*
    };
}

dispatch_impl! {
    u8 => Wide,
    u16 => Wide,
    u32 => Wide,
    u64 => Limb,
    u128 => Limb,
    i8 => Wide,
    i16 => Wide,
    i32 => Wide,
    i64 => Limb,
    i128 => Limb,
}

#[cfg(target_pointer_width = "64")]
dispatch_impl! { usize => Limb, isize => Limb }

#[cfg(not(target_pointer_width = "64"))]
dispatch_impl! { usize => Wide, isize => Wide }

/// Check if `T` is dispatched to the wide strategy
pub fn uses_wide<T: CheckedArith>() -> bool {
    <T::Strategy as Strategy<T>>::IS_WIDE
}
