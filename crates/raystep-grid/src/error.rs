//! This module defines the error types used by the `raystep-grid` crate.

#![warn(missing_docs)]

/// Error type for grid construction and coordinate mapping.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when the row or column count is zero.
    InvalidDimensions(&'static str),
    /// Error for an invalid canvas size.
    /// This variant is returned when a canvas dimension is not positive and finite.
    InvalidCanvasSize(&'static str),
    /// Error for a pixel position that is NaN or infinite.
    NonFinitePoint(&'static str),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            GridError::InvalidCanvasSize(msg) => write!(f, "Invalid canvas size: {}", msg),
            GridError::NonFinitePoint(msg) => write!(f, "Non-finite point: {}", msg),
        }
    }
}

impl core::error::Error for GridError {}
