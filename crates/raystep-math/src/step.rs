//! Single-step DDA grid traversal.
//!
//! Given a `source` and a `target` in grid-space, these functions find where
//! the ray from `source` through `target`, continued past `target`, next
//! crosses an integer grid line.
//!
//! The line through both points is written in slope-intercept form
//!
//! ```text
//! y = k*x + c        x = (y - c) / k
//! k = (y2 - y1) / (x2 - x1)
//! c = y1 - k*x1
//! ```
//!
//! and the next vertical and horizontal grid lines in the direction of travel
//! are intersected with it. The closer of the two intersections wins.

use libm::{ceilf, floorf};

use crate::{MathError, Vector2};

/// The two grid-line intersections considered for one DDA step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepCandidates {
    /// Intersection with the next vertical grid line (integer `x`).
    /// `None` for vertical rays, which never cross one.
    pub vertical_line: Option<Vector2>,
    /// Intersection with the next horizontal grid line (integer `y`).
    /// `None` for horizontal rays, which never cross one.
    pub horizontal_line: Option<Vector2>,
}

impl StepCandidates {
    /// Pick the candidate closest to `target`.
    ///
    /// The horizontal-line candidate only wins when it is strictly closer, so
    /// on a tie the vertical-line candidate is kept. With no candidates at
    /// all (source and target coincide) the result is `target` itself.
    pub fn closest(&self, target: Vector2) -> Vector2 {
        match (self.vertical_line, self.horizontal_line) {
            (Some(a), Some(b)) => {
                if target.distance_to(b) < target.distance_to(a) {
                    b
                } else {
                    a
                }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => target,
        }
    }
}

/// Round `value` to the next integer in the direction given by the sign of `delta`.
///
/// A zero `delta` leaves `value` unchanged. A value already on an integer is
/// also left unchanged, so a target sitting on a grid line is its own crossing.
fn snap_to_grid(value: f32, delta: f32) -> f32 {
    if delta > 0.0 {
        ceilf(value)
    } else if delta < 0.0 {
        floorf(value)
    } else {
        value
    }
}

/// Compute both grid-line candidates for the ray `source -> target`.
///
/// # Arguments
///
/// * `source`: Ray origin in grid-space.
/// * `target`: Point the ray passes through; the search starts here.
pub fn step_candidates(source: Vector2, target: Vector2) -> StepCandidates {
    let delta = target - source;

    if delta.x == 0.0 {
        return vertical_candidates(target, delta);
    }

    let k = delta.y / delta.x;
    let c = source.y - k * source.x;

    // A nearly vertical ray can overflow the slope; treat it as vertical.
    if !k.is_finite() || !c.is_finite() {
        return vertical_candidates(target, delta);
    }

    let x = snap_to_grid(target.x, delta.x);
    let vertical_line = Some(Vector2::new(x, k * x + c));

    let horizontal_line = if k != 0.0 {
        let y = snap_to_grid(target.y, delta.y);
        Some(Vector2::new((y - c) / k, y))
    } else {
        None
    };

    StepCandidates {
        vertical_line,
        horizontal_line,
    }
}

// x is constant, so only the next row boundary can be crossed.
fn vertical_candidates(target: Vector2, delta: Vector2) -> StepCandidates {
    let horizontal_line = if delta.y != 0.0 {
        Some(Vector2::new(target.x, snap_to_grid(target.y, delta.y)))
    } else {
        None
    };

    StepCandidates {
        vertical_line: None,
        horizontal_line,
    }
}

/// The exact DDA step: the nearest grid-line crossing along the ray from
/// `source` through `target`, at or beyond `target`.
///
/// # Arguments
///
/// * `source`: Ray origin in grid-space.
/// * `target`: Point the ray passes through.
///
/// # Returns
///
/// A point with an integer `x` or an integer `y` (unless `source == target`,
/// in which case `target` is returned unchanged).
pub fn exact_step(source: Vector2, target: Vector2) -> Vector2 {
    step_candidates(source, target).closest(target)
}

/// Checked variant of [`exact_step`].
///
/// # Errors
///
/// Returns `Err(MathError::NonFiniteInput)` if either point has a NaN or
/// infinite component.
pub fn try_exact_step(source: Vector2, target: Vector2) -> Result<Vector2, MathError> {
    if !source.is_finite() {
        return Err(MathError::NonFiniteInput("source"));
    }
    if !target.is_finite() {
        return Err(MathError::NonFiniteInput("target"));
    }
    Ok(exact_step(source, target))
}

/// One unit step along the ray: `target + normalize(target - source)`.
///
/// Cheap, but the result generally does not lie on a grid line. Kept as a
/// reference point to compare [`exact_step`] against.
pub fn approximate_step(source: Vector2, target: Vector2) -> Vector2 {
    target + (target - source).normalize()
}
