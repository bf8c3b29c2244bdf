//! # safeint ops
//!
//! Overflow-checked multiplication, addition and exponentiation for
//! fixed-width integers, without undefined behavior and without assuming a
//! native integer twice the operand width exists.
//!
//! ## Features
//!
//! - **Two strategies**: `Wide` (native double-width carrier) for 8/16/32-bit
//!   operands, `Limb` (half-width schoolbook multiplication) for 64/128-bit
//! - **Compile-time dispatch**: each primitive names its strategy in
//!   `CheckedArith`, so no runtime branch picks the path
//! - **Saturating results**: overflow returns the clamped bound together with
//!   a flag, never a panic
//! - **Allocation-free**: every operation is a pure function
//!
//! ## Example
//!
//! ```rust
//! use safeint_ops::{checked_add, checked_mul, checked_pow};
//!
//! let r = checked_mul(-3_000_000i32, 2_000_000);
//! assert!(r.overflowed);
//! assert_eq!(r.value, i32::MIN);
//!
//! assert_eq!(checked_add(-2_000_000_000i32, 2_000_004_000).into_option(), Some(4000));
//! assert_eq!(checked_pow(2i32, 30).into_option(), Some(1 << 30));
//! ```

pub mod ext;
pub mod limb;
pub mod power;
mod sign;
pub mod strategy;
pub mod wide;

pub use ext::SafeArith;
pub use limb::{mul_wide, LimbProduct};
pub use power::{checked_pow, raw_pow};
pub use strategy::{uses_wide, CheckedArith, Limb, Strategy, Wide};

pub use safeint_core::{ArithError, Bound, CheckedResult, Integer, Layout, Op};

/// Checked multiplication through the strategy selected for `T`
#[inline]
pub fn checked_mul<T: CheckedArith>(a: T, b: T) -> CheckedResult<T> {
    <T::Strategy as Strategy<T>>::checked_mul(a, b)
}

/// Checked addition through the strategy selected for `T`
#[inline]
pub fn checked_add<T: CheckedArith>(a: T, b: T) -> CheckedResult<T> {
    <T::Strategy as Strategy<T>>::checked_add(a, b)
}

/// Multiplication returning an error on overflow
pub fn try_mul<T: CheckedArith>(a: T, b: T) -> Result<T, ArithError> {
    report(checked_mul(a, b), Op::Mul)
}

/// Addition returning an error on overflow
pub fn try_add<T: CheckedArith>(a: T, b: T) -> Result<T, ArithError> {
    report(checked_add(a, b), Op::Add)
}

/// Exponentiation returning an error on overflow
pub fn try_pow<T: CheckedArith>(x: T, exp: u32) -> Result<T, ArithError> {
    report(checked_pow(x, exp), Op::Pow)
}

fn report<T: Integer>(result: CheckedResult<T>, op: Op) -> Result<T, ArithError> {
    result.into_result(op).map_err(|err| {
        tracing::trace!(target: "safeint", %err, "checked operation overflowed");
        err
    })
}
