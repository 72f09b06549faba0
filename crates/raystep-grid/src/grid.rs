#![warn(missing_docs)]

use raystep_math::Vector2;

use crate::error::GridError;

/// Which axis a grid line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// A line of constant `x`, separating two columns.
    Vertical,
    /// A line of constant `y`, separating two rows.
    Horizontal,
}

/// One full-length grid line, in grid-space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLine {
    /// Axis the line runs along.
    pub orientation: Orientation,
    /// Start of the line.
    pub from: Vector2,
    /// End of the line.
    pub to: Vector2,
}

/// A `cols x rows` grid of unit cells with its origin in the top-left corner.
///
/// Grid-space has one unit per cell, so the grid spans `[0, cols] x [0, rows]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    /// Number of rows (cells along y)
    rows: u32,
    /// Number of columns (cells along x)
    cols: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            rows: Grid::DEFAULT_ROWS,
            cols: Grid::DEFAULT_COLS,
        }
    }
}

impl Grid {
    /// Row count used when none is configured.
    pub const DEFAULT_ROWS: u32 = 10;
    /// Column count used when none is configured.
    pub const DEFAULT_COLS: u32 = 10;

    /// Creates a new grid.
    ///
    /// # Arguments
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The grid, or an error if either dimension is zero
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions("rows and cols must be non-zero"));
        }
        tracing::debug!(rows, cols, "grid created");
        Ok(Grid { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Extent of the grid in grid-space: `(cols, rows)`.
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.cols as f32, self.rows as f32)
    }

    /// The fixed ray origin, placed at `fraction` of the way along both axes.
    pub fn source_point(&self, fraction: f32) -> Vector2 {
        self.size().scale(fraction)
    }

    /// Pixels per grid cell on each axis for a canvas of `canvas_size` pixels.
    ///
    /// # Errors
    /// Returns `GridError::InvalidCanvasSize` if either canvas dimension is not positive and finite.
    pub fn pixel_scale(&self, canvas_size: Vector2) -> Result<Vector2, GridError> {
        check_canvas_size(canvas_size)?;
        Ok(canvas_size.divide_by(self.size()))
    }

    /// Maps a pointer position in pixels to grid-space.
    ///
    /// This is a uniform scale by `(cols / width, rows / height)`; positions
    /// outside the canvas map outside `[0, cols] x [0, rows]`.
    ///
    /// # Arguments
    /// * `pixel` - Pointer position relative to the canvas' top-left corner
    /// * `canvas_size` - Canvas width and height in pixels
    ///
    /// # Errors
    /// Returns `GridError::InvalidCanvasSize` for a degenerate canvas and
    /// `GridError::NonFinitePoint` if `pixel` is NaN or infinite.
    pub fn pixel_to_grid(&self, pixel: Vector2, canvas_size: Vector2) -> Result<Vector2, GridError> {
        check_canvas_size(canvas_size)?;
        if !pixel.is_finite() {
            return Err(GridError::NonFinitePoint("pixel position must be finite"));
        }
        Ok(pixel.divide_by(canvas_size).multiply_by(self.size()))
    }

    /// Returns `true` if `point` lies inside the grid or on its border.
    pub fn contains(&self, point: Vector2) -> bool {
        let size = self.size();
        point.x >= 0.0 && point.y >= 0.0 && point.x <= size.x && point.y <= size.y
    }

    /// All grid lines: `cols + 1` vertical lines followed by `rows + 1` horizontal lines.
    pub fn lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        let size = self.size();
        let vertical = (0..=self.cols).map(move |x| {
            let x = x as f32;
            GridLine {
                orientation: Orientation::Vertical,
                from: Vector2::new(x, 0.0),
                to: Vector2::new(x, size.y),
            }
        });
        let horizontal = (0..=self.rows).map(move |y| {
            let y = y as f32;
            GridLine {
                orientation: Orientation::Horizontal,
                from: Vector2::new(0.0, y),
                to: Vector2::new(size.x, y),
            }
        });
        vertical.chain(horizontal)
    }
}

fn check_canvas_size(canvas_size: Vector2) -> Result<(), GridError> {
    if !canvas_size.is_finite() || canvas_size.x <= 0.0 || canvas_size.y <= 0.0 {
        return Err(GridError::InvalidCanvasSize("width and height must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;
    const CANVAS: Vector2 = Vector2::new(800.0, 800.0);

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 10),
            Err(GridError::InvalidDimensions("rows and cols must be non-zero"))
        );
        assert!(Grid::new(10, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_default_is_ten_by_ten() {
        let grid = Grid::default();
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 10);
        assert_eq!(grid.size(), Vector2::new(10.0, 10.0));
    }

    #[test]
    fn test_source_point() {
        let grid = Grid::default();
        let source = grid.source_point(0.34);
        assert!((source.x - 3.4).abs() < EPSILON);
        assert!((source.y - 3.4).abs() < EPSILON);

        let wide = Grid::new(5, 20).unwrap();
        let source = wide.source_point(0.5);
        assert_eq!(source, Vector2::new(10.0, 2.5));
    }

    #[test]
    fn test_pixel_to_grid() {
        let grid = Grid::default();
        let p = grid.pixel_to_grid(Vector2::new(400.0, 200.0), CANVAS).unwrap();
        assert!((p.x - 5.0).abs() < EPSILON);
        assert!((p.y - 2.5).abs() < EPSILON);

        let corner = grid.pixel_to_grid(CANVAS, CANVAS).unwrap();
        assert_eq!(corner, Vector2::new(10.0, 10.0));
    }

    #[test]
    fn test_pixel_to_grid_non_square() {
        let grid = Grid::new(5, 20).unwrap();
        let p = grid.pixel_to_grid(Vector2::new(300.0, 150.0), Vector2::new(600.0, 300.0)).unwrap();
        assert!((p.x - 10.0).abs() < EPSILON);
        assert!((p.y - 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_pixel_to_grid_errors() {
        let grid = Grid::default();
        assert!(matches!(
            grid.pixel_to_grid(Vector2::new(1.0, 1.0), Vector2::new(0.0, 800.0)),
            Err(GridError::InvalidCanvasSize(_))
        ));
        assert!(matches!(
            grid.pixel_to_grid(Vector2::new(f32::NAN, 1.0), CANVAS),
            Err(GridError::NonFinitePoint(_))
        ));
    }

    #[test]
    fn test_pixel_scale() {
        let grid = Grid::new(10, 20).unwrap();
        let scale = grid.pixel_scale(Vector2::new(800.0, 600.0)).unwrap();
        assert_eq!(scale, Vector2::new(40.0, 60.0));
        assert!(grid.pixel_scale(Vector2::new(800.0, -1.0)).is_err());
    }

    #[test]
    fn test_contains() {
        let grid = Grid::default();
        assert!(grid.contains(Vector2::new(0.0, 0.0)));
        assert!(grid.contains(Vector2::new(10.0, 10.0)));
        assert!(grid.contains(Vector2::new(3.4, 7.2)));
        assert!(!grid.contains(Vector2::new(-0.1, 5.0)));
        assert!(!grid.contains(Vector2::new(5.0, 10.1)));
    }

    #[test]
    fn test_lines() {
        let grid = Grid::new(3, 4).unwrap();
        let lines: Vec<GridLine> = grid.lines().collect();
        assert_eq!(lines.len(), 5 + 4);

        let vertical: Vec<&GridLine> = lines
            .iter()
            .filter(|l| l.orientation == Orientation::Vertical)
            .collect();
        assert_eq!(vertical.len(), 5);
        assert_eq!(vertical[0].from, Vector2::new(0.0, 0.0));
        assert_eq!(vertical[4].to, Vector2::new(4.0, 3.0));

        let last = lines.last().unwrap();
        assert_eq!(last.orientation, Orientation::Horizontal);
        assert_eq!(last.from, Vector2::new(0.0, 3.0));
        assert_eq!(last.to, Vector2::new(4.0, 3.0));
    }
}
