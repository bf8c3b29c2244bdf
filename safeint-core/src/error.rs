//! # Error Types for checked arithmetic

use crate::layout::{Layout, LayoutError};
use std::fmt;
use thiserror::Error;

/// Operation that produced an overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    Add,
    Mul,
    Pow,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => write!(f, "addition"),
            Op::Mul => write!(f, "multiplication"),
            Op::Pow => write!(f, "exponentiation"),
        }
    }
}

/// Type boundary an overflowed result was clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bound {
    /// Exact result was above the representable range
    Max,
    /// Exact result was below the representable range
    Min,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Max => write!(f, "MAX"),
            Bound::Min => write!(f, "MIN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(#[from] LayoutError),

    #[error("{op} overflowed {layout}, saturated to {bound}")]
    Overflow { op: Op, layout: Layout, bound: Bound },
}

impl ArithError {
    /// Check if this error came from the exact result exceeding the range
    pub fn is_overflow(&self) -> bool {
        matches!(self, ArithError::Overflow { .. })
    }
}
