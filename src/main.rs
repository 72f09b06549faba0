mod color;      // brings `color.rs` in as `crate::color`
mod graphics;   // macroquad window and canvas
mod render;     // frame builder and the `Canvas` trait
mod settings;   // config file + environment loading
mod state;      // pointer target state

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

use render::Scene;
use settings::DEFAULT_CONFIG_PATH;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Raycasting step visualizer starting...");

    let settings = settings::load_settings(DEFAULT_CONFIG_PATH)
        .with_context(|| format!("could not load settings from {}", DEFAULT_CONFIG_PATH))?;

    let scene = match Scene::from_settings(&settings) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Failed to build scene: {:#}", e);
            return Err(e);
        }
    };

    macroquad::Window::from_config(
        graphics::window_conf(&settings.window),
        graphics::run_visualization_loop(scene),
    );

    info!("Visualizer closed.");
    Ok(())
}
