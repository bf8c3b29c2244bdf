//! Method-call syntax for the checked operations

use crate::power::{checked_pow, raw_pow};
use crate::strategy::CheckedArith;
use crate::{checked_add, checked_mul};
use safeint_core::CheckedResult;

/// Checked arithmetic as methods on every supported primitive
///
/// # Examples
///
/// ```rust
/// use safeint_ops::SafeArith;
///
/// let r = 0x10000i32.safe_mul(-0x8000);
/// assert_eq!(r.into_parts(), (i32::MIN, false));
///
/// let r = 200u8.safe_add(100);
/// assert_eq!(r.into_parts(), (u8::MAX, true));
///
/// assert_eq!(2i32.pow_raw(32), 0);
/// ```
pub trait SafeArith: CheckedArith {
    /// Checked multiplication
    #[inline]
    fn safe_mul(self, rhs: Self) -> CheckedResult<Self> {
        checked_mul(self, rhs)
    }

    /// Checked addition
    #[inline]
    fn safe_add(self, rhs: Self) -> CheckedResult<Self> {
        checked_add(self, rhs)
    }

    /// Checked exponentiation
    #[inline]
    fn safe_pow(self, exp: u32) -> CheckedResult<Self> {
        checked_pow(self, exp)
    }

    /// Wrapping exponentiation
    #[inline]
    fn pow_raw(self, exp: u32) -> Self {
        raw_pow(self, exp)
    }
}

impl<T: CheckedArith> SafeArith for T {}
