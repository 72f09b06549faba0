use raystep_grid::{Grid, Vector2};
use raystep_math::{approximate_step, try_exact_step};
use tracing::{debug, warn};

use crate::color::Rgba;
use crate::settings::{Palette, Settings};
use crate::state::AppState;

/// Font size of the heads-up line, in pixels.
const HUD_FONT_SIZE: f32 = 20.0;
/// Top-left anchor of the heads-up line, in pixels.
const HUD_POSITION: Vector2 = Vector2::new(10.0, 20.0);

/// A 2D drawing surface.
///
/// Coordinates passed to the shape primitives are multiplied by the factor
/// set with [`Canvas::scale`]; text is always placed in pixels.
pub trait Canvas {
    /// Surface size in pixels.
    fn size(&self) -> Vector2;
    /// Clears the whole surface.
    fn clear(&mut self, color: Rgba);
    /// Sets the per-axis factor from drawing units to pixels.
    fn scale(&mut self, factor: Vector2);
    fn fill_rect(&mut self, min: Vector2, max: Vector2, color: Rgba);
    fn line(&mut self, from: Vector2, to: Vector2, thickness: f32, color: Rgba);
    fn circle(&mut self, center: Vector2, radius: f32, color: Rgba);
    fn text(&mut self, text: &str, position: Vector2, font_size: f32, color: Rgba);
}

/// One drawing primitive in grid-space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        min: Vector2,
        max: Vector2,
        color: Rgba,
    },
    Line {
        from: Vector2,
        to: Vector2,
        thickness: f32,
        color: Rgba,
    },
    Circle {
        center: Vector2,
        radius: f32,
        color: Rgba,
    },
}

/// A complete picture, built once per state change and replayed every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Extent of the drawing in grid units; mapped onto the whole canvas.
    pub grid_size: Vector2,
    pub commands: Vec<DrawCommand>,
    /// The computed next grid-line crossing, if a target is set.
    pub next_crossing: Option<Vector2>,
    pub hud: Option<String>,
    pub hud_color: Rgba,
}

impl Frame {
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let size = canvas.size();
        canvas.clear(Rgba::BLACK);
        canvas.scale(size.divide_by(self.grid_size));

        for command in &self.commands {
            match *command {
                DrawCommand::FillRect { min, max, color } => canvas.fill_rect(min, max, color),
                DrawCommand::Line {
                    from,
                    to,
                    thickness,
                    color,
                } => canvas.line(from, to, thickness, color),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => canvas.circle(center, radius, color),
            }
        }

        if let Some(hud) = &self.hud {
            canvas.text(hud, HUD_POSITION, HUD_FONT_SIZE, self.hud_color);
        }
    }
}

/// The fixed parts of the picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub grid: Grid,
    pub source: Vector2,
    pub palette: Palette,
}

impl Scene {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let grid = settings.grid()?;
        Ok(Scene {
            grid,
            source: grid.source_point(settings.grid.source_fraction),
            palette: settings.palette()?,
        })
    }
}

/// Builds the frame for `state`: background, grid lines, the source marker
/// and, once a target exists, the ray and its next grid-line crossing.
pub fn build_frame(scene: &Scene, state: &AppState) -> Frame {
    let palette = &scene.palette;
    let grid_size = scene.grid.size();
    let mut commands = Vec::new();

    commands.push(DrawCommand::FillRect {
        min: Vector2::ZERO,
        max: grid_size,
        color: palette.background,
    });

    commands.extend(scene.grid.lines().map(|line| DrawCommand::Line {
        from: line.from,
        to: line.to,
        thickness: palette.line_width,
        color: palette.grid_lines,
    }));

    let marker = |center| DrawCommand::Circle {
        center,
        radius: palette.marker_radius,
        color: palette.marker,
    };
    let ray = |from, to| DrawCommand::Line {
        from,
        to,
        thickness: palette.line_width,
        color: palette.ray,
    };

    commands.push(marker(scene.source));

    let mut next_crossing = None;
    let mut hud = None;

    if let Some(target) = state.target {
        commands.push(marker(target));
        commands.push(ray(scene.source, target));

        let next = match try_exact_step(scene.source, target) {
            Ok(next) => {
                debug!(source = %scene.source, %target, %next, "recomputed next grid crossing");
                commands.push(marker(next));
                commands.push(ray(target, next));
                Some(next)
            }
            Err(e) => {
                warn!(source = %scene.source, %target, "Skipping next grid crossing: {}", e);
                None
            }
        };

        if palette.show_approximate {
            commands.push(DrawCommand::Circle {
                center: approximate_step(scene.source, target),
                radius: palette.marker_radius * 0.5,
                color: palette.approximate,
            });
        }

        if palette.show_hud {
            hud = Some(match next {
                Some(next) => format!("Target: {}  Next crossing: {}", target, next),
                None => format!("Target: {}  Next crossing: none", target),
            });
        }
        next_crossing = next;
    }

    Frame {
        grid_size,
        commands,
        next_crossing,
        hud,
        hud_color: palette.marker,
    }
}
