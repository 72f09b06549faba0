//! Grid-space layout for the raycasting step visualizer.
//!
//! A [`Grid`] is only a pair of dimensions: it owns no per-cell state. It maps
//! pointer positions from pixel-space into grid-space and enumerates the
//! grid lines that make up the drawing.

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::{Grid, GridLine, Orientation};
pub use raystep_math::Vector2;
