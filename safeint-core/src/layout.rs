//! # Integer Layout
//!
//! Compile-time description of an operand: its bit width, its signedness,
//! and the half-width limbs it decomposes into.
//!
//! Every primitive implementing [`crate::Integer`] carries a `Layout`
//! constant. The layout also answers the dispatch question the checked
//! operations ask: is there a native carrier at least twice as wide?

use crate::WIDE_CARRIER_BITS;
use std::fmt;
use thiserror::Error;

/// Width and signedness of a fixed-width integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Total width in bits (8, 16, 32, 64 or 128)
    pub bits: u32,
    /// Two's complement signed when true
    pub signed: bool,
}

impl Layout {
    /// Smallest supported width
    pub const MIN_BITS: u32 = 8;

    /// Largest supported width
    pub const MAX_BITS: u32 = 128;

    /// Create a new layout with validation
    pub const fn new(bits: u32, signed: bool) -> Result<Self, LayoutError> {
        let layout = Self { bits, signed };
        match layout.check() {
            Some(err) => Err(err),
            None => Ok(layout),
        }
    }

    /// Create a layout without validation (for primitive tables)
    #[inline]
    pub(crate) const fn new_unchecked(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }

    const fn check(&self) -> Option<LayoutError> {
        if self.bits < Self::MIN_BITS || self.bits > Self::MAX_BITS {
            return Some(LayoutError::OutOfRange(self.bits));
        }
        if !self.bits.is_power_of_two() {
            return Some(LayoutError::NotPowerOfTwo(self.bits));
        }
        None
    }

    /// Validate layout
    pub fn validate(&self) -> Result<(), LayoutError> {
        match self.check() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Limb width in bits (always bits / 2)
    #[inline]
    pub const fn half_bits(&self) -> u32 {
        self.bits / 2
    }

    /// Mask selecting the low limb, widened to u128
    #[inline]
    pub const fn half_mask(&self) -> u128 {
        match 1u128.checked_shl(self.half_bits()) {
            Some(bit) => bit - 1,
            None => u128::MAX,
        }
    }

    /// Limbs per operand (always 2 for our decomposition strategy)
    #[inline]
    pub const fn limbs(&self) -> usize {
        2
    }

    /// Whether a native carrier of twice this width is available
    #[inline]
    pub const fn has_wide_carrier(&self) -> bool {
        self.bits.saturating_mul(2) <= WIDE_CARRIER_BITS
    }

    /// Short type name, e.g. `i32` or `u64`
    pub const fn name(&self) -> &'static str {
        match (self.signed, self.bits) {
            (false, 8) => "u8",
            (false, 16) => "u16",
            (false, 32) => "u32",
            (false, 64) => "u64",
            (false, 128) => "u128",
            (true, 8) => "i8",
            (true, 16) => "i16",
            (true, 32) => "i32",
            (true, 64) => "i64",
            (true, 128) => "i128",
            (false, _) => "uN",
            (true, _) => "iN",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bits, {}×{}-bit limbs, {})",
            self.name(),
            self.bits,
            self.limbs(),
            self.half_bits(),
            if self.has_wide_carrier() { "wide" } else { "limb" },
        )
    }
}

/// Layout error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Width must be in range [8, 128]
    #[error("bits must be in range [8, 128], got {0}")]
    OutOfRange(u32),
    /// Width must be a power of two
    #[error("bits must be a power of two, got {0}")]
    NotPowerOfTwo(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_layout() {
        let layout = Layout::new(32, true).unwrap();
        assert_eq!(layout.half_bits(), 16);
        assert_eq!(layout.half_mask(), 0xFFFF);
        assert_eq!(layout.limbs(), 2);
        assert!(layout.has_wide_carrier());
        assert_eq!(layout.name(), "i32");
    }

    #[test]
    fn test_wide_carrier_threshold() {
        assert!(Layout::new_unchecked(8, false).has_wide_carrier());
        assert!(Layout::new_unchecked(16, true).has_wide_carrier());
        assert!(Layout::new_unchecked(32, false).has_wide_carrier());

        // No native carrier of 128 or 256 bits on the fast path
        assert!(!Layout::new_unchecked(64, false).has_wide_carrier());
        assert!(!Layout::new_unchecked(128, true).has_wide_carrier());
    }

    #[test]
    fn test_half_mask_at_128_bits() {
        let layout = Layout::new_unchecked(128, false);
        assert_eq!(layout.half_bits(), 64);
        assert_eq!(layout.half_mask(), u64::MAX as u128);
    }

    #[test]
    fn test_oversized_layout_queries() {
        // Fields are public, so out-of-range layouts can still be queried
        let layout = Layout { bits: 512, signed: false };
        assert!(layout.validate().is_err());
        assert_eq!(layout.half_mask(), u128::MAX);
        assert!(!layout.has_wide_carrier());

        let layout = Layout { bits: u32::MAX, signed: true };
        assert_eq!(layout.half_mask(), u128::MAX);
        assert!(!layout.has_wide_carrier());
        assert_eq!(layout.name(), "iN");
    }

    #[test]
    fn test_validation() {
        assert!(Layout::new(8, false).is_ok());
        assert!(Layout::new(128, true).is_ok());

        assert_eq!(Layout::new(4, false).unwrap_err(), LayoutError::OutOfRange(4));
        assert_eq!(Layout::new(256, true).unwrap_err(), LayoutError::OutOfRange(256));
        assert_eq!(Layout::new(24, false).unwrap_err(), LayoutError::NotPowerOfTwo(24));

        assert_eq!(
            Layout::new_unchecked(48, true).validate().unwrap_err(),
            LayoutError::NotPowerOfTwo(48)
        );
    }

    #[test]
    fn test_display() {
        let layout = Layout::new_unchecked(64, false);
        assert_eq!(layout.to_string(), "u64 (64 bits, 2×32-bit limbs, limb)");

        let layout = Layout::new_unchecked(16, true);
        assert_eq!(layout.to_string(), "i16 (16 bits, 2×8-bit limbs, wide)");

        let err = LayoutError::NotPowerOfTwo(24);
        assert_eq!(err.to_string(), "bits must be a power of two, got 24");
    }
}
