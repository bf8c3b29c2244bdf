//! # Integer Model
//!
//! This module abstracts over the fixed-width primitive integers.
//!
//! Every operand has an unsigned bit pattern of the same width
//! ([`Integer::Bits`]). Overflow detection works on that pattern only, so no
//! code path ever performs a signed operation that could overflow:
//!
//! ```text
//! i32 -> u32 (reinterpret)   u32 -> u32 (identity)
//! i64 -> u64 (reinterpret)   u64 -> u64 (identity)
//! ```

use crate::layout::Layout;
use crate::split::HalfWidthSplit;
use std::fmt;
use std::ops::{Add, BitOr, Mul};

/// Unsigned bit pattern of an operand
///
/// `Add` and `Mul` are only applied to half-width limbs, where the results
/// are known to fit.
pub trait Bits:
    HalfWidthSplit
    + Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::LowerHex
    + Add<Output = Self>
    + Mul<Output = Self>
    + BitOr<Output = Self>
{
    /// All bits clear
    const ZERO: Self;

    /// All bits set
    const ALL_ONES: Self;

    /// Wrapping addition
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Wrapping subtraction
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Wrapping multiplication
    fn wrapping_mul(self, rhs: Self) -> Self;
}

/// Trait for fixed-width integers supported by the checked operations
pub trait Integer:
    Copy + Eq + Ord + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Unsigned type of the same width
    type Bits: Bits;

    /// Width and signedness
    const LAYOUT: Layout;

    /// Smallest representable value
    const MIN: Self;

    /// Largest representable value
    const MAX: Self;

    /// Zero
    const ZERO: Self;

    /// One
    const ONE: Self;

    /// Reinterpret as the unsigned bit pattern
    fn to_bits(self) -> Self::Bits;

    /// Reinterpret an unsigned bit pattern
    fn from_bits(bits: Self::Bits) -> Self;

    /// Absolute value as an unsigned number (exact, even for `MIN`)
    fn magnitude(self) -> Self::Bits;

    /// Check if the value is below zero (always false for unsigned)
    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// Check if the value is above zero
    #[inline]
    fn is_positive(self) -> bool {
        self > Self::ZERO
    }

    /// Two's complement wrapping multiplication
    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits().wrapping_mul(rhs.to_bits()))
    }

    /// Two's complement wrapping addition
    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits().wrapping_add(rhs.to_bits()))
    }
}

macro_rules! bits_impl {
    ($($t:ty),*) => {
        $(
            impl Bits for $t {
                const ZERO: Self = 0;
                const ALL_ONES: Self = <$t>::MAX;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }
            }
        )*
    };
}

bits_impl!(u8, u16, u32, u64, u128, usize);

macro_rules! unsigned_integer_impl {
    ($($t:ty),*) => {
        $(
            impl Integer for $t {
                type Bits = $t;

                const LAYOUT: Layout = Layout::new_unchecked(<$t>::BITS, false);
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn to_bits(self) -> Self::Bits {
                    self
                }

                #[inline]
                fn from_bits(bits: Self::Bits) -> Self {
                    bits
                }

                #[inline]
                fn magnitude(self) -> Self::Bits {
                    self
                }
            }
        )*
    };
}

macro_rules! signed_integer_impl {
    ($($t:ty => $u:ty),*) => {
        $(
            impl Integer for $t {
                type Bits = $u;

                const LAYOUT: Layout = Layout::new_unchecked(<$t>::BITS, true);
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn to_bits(self) -> Self::Bits {
                    self as $u
                }

                #[inline]
                fn from_bits(bits: Self::Bits) -> Self {
                    bits as $t
                }

                #[inline]
                fn magnitude(self) -> Self::Bits {
                    self.unsigned_abs()
                }
            }
        )*
    };
}

unsigned_integer_impl!(u8, u16, u32, u64, u128, usize);
signed_integer_impl!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
