use raystep_grid::{Grid, GridError, Vector2};

/// Everything the renderer needs to know about user input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Pointer position in grid-space. `None` until the pointer first moves.
    pub target: Option<Vector2>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a pointer move to grid-space and stores it as the new target.
    ///
    /// Returns `true` if the target changed and the frame must be rebuilt.
    pub fn on_pointer_move(
        &mut self,
        grid: &Grid,
        pixel: Vector2,
        canvas_size: Vector2,
    ) -> Result<bool, GridError> {
        let target = grid.pixel_to_grid(pixel, canvas_size)?;
        if self.target == Some(target) {
            return Ok(false);
        }
        self.target = Some(target);
        Ok(true)
    }
}

/// Turns polled pointer positions into move events.
///
/// The first position seen is only a baseline: a pointer that has not moved
/// yet must not produce a target.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last: Option<Vector2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `position` and returns it if it differs from the previous one.
    pub fn observe(&mut self, position: Vector2) -> Option<Vector2> {
        let previous = self.last.replace(position);
        match previous {
            Some(previous) if previous != position => Some(position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Vector2 = Vector2::new(800.0, 800.0);

    #[test]
    fn test_target_starts_empty() {
        assert_eq!(AppState::new().target, None);
    }

    #[test]
    fn test_pointer_move_sets_target() {
        let grid = Grid::default();
        let mut state = AppState::new();

        let changed = state
            .on_pointer_move(&grid, Vector2::new(416.0, 176.0), CANVAS)
            .unwrap();
        assert!(changed);
        let target = state.target.unwrap();
        assert!((target.x - 5.2).abs() < 1e-5);
        assert!((target.y - 2.2).abs() < 1e-5);

        let unchanged = state
            .on_pointer_move(&grid, Vector2::new(416.0, 176.0), CANVAS)
            .unwrap();
        assert!(!unchanged);
    }

    #[test]
    fn test_failed_mapping_keeps_previous_target() {
        let grid = Grid::default();
        let mut state = AppState::new();
        state
            .on_pointer_move(&grid, Vector2::new(80.0, 80.0), CANVAS)
            .unwrap();

        let result = state.on_pointer_move(&grid, Vector2::new(10.0, 10.0), Vector2::ZERO);
        assert!(result.is_err());
        let target = state.target.unwrap();
        assert!((target.x - 1.0).abs() < 1e-5);
        assert!((target.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_tracker_ignores_first_position() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.observe(Vector2::new(10.0, 10.0)), None);
        assert_eq!(tracker.observe(Vector2::new(10.0, 10.0)), None);
        assert_eq!(
            tracker.observe(Vector2::new(12.0, 10.0)),
            Some(Vector2::new(12.0, 10.0))
        );
        assert_eq!(tracker.observe(Vector2::new(12.0, 10.0)), None);
    }
}
