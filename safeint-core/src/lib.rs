//! # safeint core
//!
//! Integer model and result types for overflow-checked arithmetic.
//!
//! ## Key Features
//! - `Integer` abstraction over 8/16/32/64/128-bit and pointer-sized
//!   primitives, signed and unsigned
//! - Unsigned bit-pattern view of every operand (no signed overflow needed
//!   to detect signed overflow)
//! - Half-width limb split (`HalfWidthSplit`)
//! - Compile-time `Layout` per type, including wide-carrier availability
//! - `CheckedResult` with saturating clamp on overflow

pub mod checked;
pub mod error;
pub mod integer;
pub mod layout;
pub mod split;

pub use checked::CheckedResult;
pub use error::{ArithError, Bound, Op};
pub use integer::{Bits, Integer};
pub use layout::{Layout, LayoutError};
pub use split::HalfWidthSplit;

/// Widest native integer the fast path may widen into.
///
/// Operands of more than half this width use limb decomposition.
pub const WIDE_CARRIER_BITS: u32 = 64;
