//! Checked operation results
//!
//! A checked operation never fails outright. It returns the value together
//! with an overflow flag, and on overflow the value is clamped to the bound
//! the exact result ran past (saturating convention).

use crate::error::{ArithError, Bound, Op};
use crate::integer::Integer;

/// Result of a checked operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckedResult<T> {
    /// Exact result, or the clamped bound when `overflowed` is set
    pub value: T,
    /// Whether the exact result was out of range
    pub overflowed: bool,
}

impl<T> CheckedResult<T> {
    /// Create an in-range result
    #[inline]
    pub const fn exact(value: T) -> Self {
        Self {
            value,
            overflowed: false,
        }
    }

    /// Create an overflowed result clamped to `value`
    #[inline]
    pub const fn saturated(value: T) -> Self {
        Self {
            value,
            overflowed: true,
        }
    }

    /// Check if the result is exact
    #[inline]
    pub const fn is_exact(&self) -> bool {
        !self.overflowed
    }

    /// Split into `(value, overflowed)`
    #[inline]
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.overflowed)
    }

    /// The exact value, or `None` on overflow
    #[inline]
    pub fn into_option(self) -> Option<T> {
        if self.overflowed {
            None
        } else {
            Some(self.value)
        }
    }
}

impl<T: Integer> CheckedResult<T> {
    /// Saturate toward the upper bound
    #[inline]
    pub const fn saturated_max() -> Self {
        Self::saturated(T::MAX)
    }

    /// Saturate toward the lower bound
    #[inline]
    pub const fn saturated_min() -> Self {
        Self::saturated(T::MIN)
    }

    /// Bound the value was clamped to, if the operation overflowed
    pub fn bound(&self) -> Option<Bound> {
        if !self.overflowed {
            None
        } else if self.value == T::MAX {
            Some(Bound::Max)
        } else {
            Some(Bound::Min)
        }
    }

    /// Convert into a `Result`, attributing an overflow to `op`
    pub fn into_result(self, op: Op) -> Result<T, ArithError> {
        match self.bound() {
            None => Ok(self.value),
            Some(bound) => Err(ArithError::Overflow {
                op,
                layout: T::LAYOUT,
                bound,
            }),
        }
    }
}

impl<T> From<CheckedResult<T>> for (T, bool) {
    fn from(result: CheckedResult<T>) -> (T, bool) {
        result.into_parts()
    }
}
