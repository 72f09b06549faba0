#![warn(missing_docs)]

//! Error types for the grid-space math library.

use core::fmt;

/// Errors that can occur when stepping a ray across the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// An input point had a NaN or infinite component.
    /// The grid-line search is only defined over finite coordinates.
    NonFiniteInput(&'static str),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::NonFiniteInput(which) => write!(f, "Non-finite input point: {}", which),
        }
    }
}

impl core::error::Error for MathError {}
