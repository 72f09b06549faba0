use macroquad::prelude::{
    Color, Conf, KeyCode, clear_background, draw_circle, draw_line, draw_rectangle, draw_text,
    is_key_pressed, mouse_position, next_frame, screen_height, screen_width,
};
use tracing::{debug, info, warn};

use raystep_grid::Vector2;

use crate::color::Rgba;
use crate::render::{Canvas, Scene, build_frame};
use crate::settings::WindowSettings;
use crate::state::{AppState, PointerTracker};

// Function to configure the macroquad window
pub fn window_conf(window: &WindowSettings) -> Conf {
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        high_dpi: window.high_dpi,
        ..Default::default()
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::new(c.r, c.g, c.b, c.a)
    }
}

/// Draws onto the macroquad window, scaling shape coordinates to pixels.
struct MacroquadCanvas {
    scale: Vector2,
}

impl MacroquadCanvas {
    fn new() -> Self {
        MacroquadCanvas {
            scale: Vector2::new(1.0, 1.0),
        }
    }

    fn to_pixels(&self, p: Vector2) -> Vector2 {
        p.multiply_by(self.scale)
    }

    // Lengths (radius, stroke width) use the smaller axis so circles stay round.
    fn to_pixel_length(&self, length: f32) -> f32 {
        length * self.scale.x.min(self.scale.y)
    }
}

impl Canvas for MacroquadCanvas {
    fn size(&self) -> Vector2 {
        Vector2::new(screen_width(), screen_height())
    }

    fn clear(&mut self, color: Rgba) {
        clear_background(color.into());
    }

    fn scale(&mut self, factor: Vector2) {
        self.scale = factor;
    }

    fn fill_rect(&mut self, min: Vector2, max: Vector2, color: Rgba) {
        let min = self.to_pixels(min);
        let extent = self.to_pixels(max) - min;
        draw_rectangle(min.x, min.y, extent.x, extent.y, color.into());
    }

    fn line(&mut self, from: Vector2, to: Vector2, thickness: f32, color: Rgba) {
        let from = self.to_pixels(from);
        let to = self.to_pixels(to);
        // Never thinner than a pixel, or grid lines vanish on small windows.
        let thickness = self.to_pixel_length(thickness).max(1.0);
        draw_line(from.x, from.y, to.x, to.y, thickness, color.into());
    }

    fn circle(&mut self, center: Vector2, radius: f32, color: Rgba) {
        let center = self.to_pixels(center);
        draw_circle(center.x, center.y, self.to_pixel_length(radius), color.into());
    }

    fn text(&mut self, text: &str, position: Vector2, font_size: f32, color: Rgba) {
        draw_text(text, position.x, position.y, font_size, color.into());
    }
}

/// Polls the pointer, rebuilds the frame when the target moves and presents
/// the current frame once per display refresh. Returns when Escape is pressed.
pub async fn run_visualization_loop(scene: Scene) {
    let mut canvas = MacroquadCanvas::new();
    let mut state = AppState::new();
    let mut pointer = PointerTracker::new();
    let mut frame = build_frame(&scene, &state);

    info!(
        rows = scene.grid.rows(),
        cols = scene.grid.cols(),
        source = %scene.source,
        "Visualization loop starting..."
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed. Exiting visualization loop.");
            break;
        }

        let (x, y) = mouse_position();
        if let Some(pixel) = pointer.observe(Vector2::new(x, y)) {
            match state.on_pointer_move(&scene.grid, pixel, canvas.size()) {
                Ok(true) => {
                    frame = build_frame(&scene, &state);
                    if let Some(target) = state.target.filter(|t| !scene.grid.contains(*t)) {
                        debug!(%target, next = ?frame.next_crossing, "target is outside the grid");
                    }
                }
                Ok(false) => debug!(%pixel, "pointer moved within the same grid position"),
                Err(e) => warn!(%pixel, "Dropping pointer event: {}", e),
            }
        }

        frame.draw(&mut canvas);
        next_frame().await
    }
}
