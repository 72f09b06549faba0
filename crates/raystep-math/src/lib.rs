#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for 2D grid-space vector math."]
#![doc = ""]
#![doc = "This crate provides an immutable 2D vector type and the single-step DDA"]
#![doc = "functions that find where a ray next crosses an integer grid line."]

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use libm::sqrtf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub mod step;

pub use error::MathError;
pub use step::{StepCandidates, approximate_step, exact_step, step_candidates, try_exact_step};

/// A 2‑D vector `(x, y)` in grid-space, where one grid cell is `1.0` units wide.
///
/// `Vector2` is a plain value: every operation returns a new vector and
/// nothing is ever mutated in place.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component (grid columns).
    pub x: f32,
    /// Vertical component (grid rows, growing downwards on screen).
    pub y: f32,
}

impl Vector2 {
    /// The zero vector `(0, 0)`.
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Construct a new vector.
    ///
    /// # Arguments
    ///
    /// * `x`: Horizontal component.
    /// * `y`: Vertical component.
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Euclidean length of the vector.
    pub fn length(self) -> f32 {
        sqrtf(self.x * self.x + self.y * self.y)
    }

    /// Component-wise sum.
    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`.
    pub fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    /// Multiply both components by `scalar`.
    pub fn scale(self, scalar: f32) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    /// Component-wise product.
    pub fn multiply_by(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient `self / other`.
    ///
    /// A zero component in `other` yields an infinite or NaN component, the
    /// same as plain float division.
    pub fn divide_by(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x / other.x, self.y / other.y)
    }

    /// Unit vector pointing in the same direction.
    ///
    /// The zero vector has no direction; it normalizes to `(0, 0)` rather
    /// than to NaN.
    pub fn normalize(self) -> Vector2 {
        let length = self.length();
        if length == 0.0 {
            return Vector2::ZERO;
        }
        Vector2::new(self.x / length, self.y / length)
    }

    /// Euclidean distance between `self` and `other`.
    pub fn distance_to(self, other: Vector2) -> f32 {
        self.subtract(other).length()
    }

    /// Returns `true` when both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::add(self, other)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        self.subtract(other)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f32) -> Vector2 {
        self.scale(scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}
