//! Half-width limb decomposition
//!
//! An unsigned value of width W splits into two W/2-bit limbs:
//!
//! ```text
//! value = hi · 2^(W/2) + lo
//! lo    = value & (2^(W/2) - 1)
//! hi    = value >> (W/2)        (logical shift, zero-filled)
//! ```
//!
//! Only unsigned types implement the split. Signed operands are split by
//! reinterpreting their bit pattern first (see [`crate::Integer::to_bits`]).

/// Split an unsigned value into its high and low half-width limbs
pub trait HalfWidthSplit: Copy {
    /// Limb width in bits
    const HALF_BITS: u32;

    /// Mask selecting the low limb (2^(W/2) - 1)
    const LOW_MASK: Self;

    /// High limb, shifted down into the low half
    fn hi(self) -> Self;

    /// Low limb
    fn lo(self) -> Self;

    /// Reassemble a value from its limbs (inverse of [`split`](Self::split))
    fn join(hi: Self, lo: Self) -> Self;

    /// Both limbs as `(hi, lo)`
    #[inline]
    fn split(self) -> (Self, Self) {
        (self.hi(), self.lo())
    }
}

macro_rules! half_width_split_impl {
    ($($t:ty),*) => {
        $(
            impl HalfWidthSplit for $t {
                const HALF_BITS: u32 = <$t>::BITS / 2;
                const LOW_MASK: Self = <$t>::MAX >> (<$t>::BITS / 2);

                #[inline]
                fn hi(self) -> Self {
                    self >> Self::HALF_BITS
                }

                #[inline]
                fn lo(self) -> Self {
                    self & Self::LOW_MASK
                }

                #[inline]
                fn join(hi: Self, lo: Self) -> Self {
                    (hi << Self::HALF_BITS) | (lo & Self::LOW_MASK)
                }
            }
        )*
    };
}

half_width_split_impl!(u8, u16, u32, u64, u128, usize);
