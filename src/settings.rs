use anyhow::{Context, ensure};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

use raystep_grid::Grid;

use crate::color::Rgba;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub high_dpi: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            title: "Raycasting Step".to_string(),
            width: 800,
            height: 800,
            high_dpi: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub rows: u32,
    pub cols: u32,
    /// Fraction of the grid extent at which the ray source sits, on both axes.
    pub source_fraction: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        GridSettings {
            rows: Grid::DEFAULT_ROWS,
            cols: Grid::DEFAULT_COLS,
            source_fraction: 0.34,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub background: String,
    pub grid_lines: String,
    pub ray: String,
    pub marker: String,
    pub approximate: String,
    /// Stroke width in grid units.
    pub line_width: f32,
    /// Marker radius in grid units.
    pub marker_radius: f32,
    pub show_approximate: bool,
    pub show_hud: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        StyleSettings {
            background: "#181818".to_string(),
            grid_lines: "#333333".to_string(),
            ray: "#FF00FF".to_string(),
            marker: "#FF00FF".to_string(),
            approximate: "#FFFF00".to_string(),
            line_width: 0.02,
            marker_radius: 0.2,
            show_approximate: false,
            show_hud: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub grid: GridSettings,
    pub style: StyleSettings,
}

/// Resolved drawing colors and sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub grid_lines: Rgba,
    pub ray: Rgba,
    pub marker: Rgba,
    pub approximate: Rgba,
    pub line_width: f32,
    pub marker_radius: f32,
    pub show_approximate: bool,
    pub show_hud: bool,
}

impl Settings {
    /// Checks every value that cannot be expressed in the types alone.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be positive, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(
            (0.0..=1.0).contains(&self.grid.source_fraction),
            "grid.source_fraction must be within [0, 1], got {}",
            self.grid.source_fraction
        );
        ensure!(
            self.style.line_width > 0.0 && self.style.marker_radius > 0.0,
            "style.line_width and style.marker_radius must be positive"
        );
        self.grid()?;
        self.palette()?;
        Ok(())
    }

    pub fn grid(&self) -> anyhow::Result<Grid> {
        Grid::new(self.grid.rows, self.grid.cols).context("invalid [grid] settings")
    }

    pub fn palette(&self) -> anyhow::Result<Palette> {
        let style = &self.style;
        Ok(Palette {
            background: Rgba::from_hex(&style.background).context("style.background")?,
            grid_lines: Rgba::from_hex(&style.grid_lines).context("style.grid_lines")?,
            ray: Rgba::from_hex(&style.ray).context("style.ray")?,
            marker: Rgba::from_hex(&style.marker).context("style.marker")?,
            approximate: Rgba::from_hex(&style.approximate).context("style.approximate")?,
            line_width: style.line_width,
            marker_radius: style.marker_radius,
            show_approximate: style.show_approximate,
            show_hud: style.show_hud,
        })
    }
}

fn builder(path: &str) -> config::ConfigBuilder<config::builder::DefaultState> {
    Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("RAYSTEP")
                .prefix_separator("_")
                .separator("__"),
        )
}

fn deserialize(config: Config) -> anyhow::Result<Settings> {
    let settings: Settings = config
        .try_deserialize()
        .context("failed to deserialize settings")?;
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from `path` (optional) and `RAYSTEP_*` environment variables,
/// falling back to built-in defaults for anything unset.
pub fn load_settings(path: &str) -> anyhow::Result<Settings> {
    info!("Attempting to load configuration from {}", path);

    let result = builder(path)
        .build()
        .context("failed to read configuration")
        .and_then(deserialize);

    match result {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> anyhow::Result<Settings> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        deserialize(config)
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.grid.rows, 10);
        assert_eq!(settings.grid.cols, 10);
        assert_eq!(settings.window.width, 800);
    }

    #[test]
    fn test_partial_override() {
        let settings = from_toml(
            r#"
            [grid]
            rows = 16

            [style]
            show_approximate = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.grid.rows, 16);
        assert_eq!(settings.grid.cols, 10);
        assert!((settings.grid.source_fraction - 0.34).abs() < 1e-6);
        assert!(settings.style.show_approximate);
        assert_eq!(settings.style.ray, "#FF00FF");
    }

    #[test]
    fn test_shipped_default_file_matches_builtin_defaults() {
        let shipped = include_str!("../config/default.toml");
        assert_eq!(from_toml(shipped).unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(from_toml("[grid]\nrows = 0").is_err());
        assert!(from_toml("[grid]\nsource_fraction = 1.5").is_err());
        assert!(from_toml("[window]\nwidth = 0").is_err());
        assert!(from_toml("[style]\nray = \"magenta\"").is_err());
        assert!(from_toml("[style]\nmarker_radius = -0.2").is_err());
    }

    #[test]
    fn test_palette() {
        let palette = Settings::default().palette().unwrap();
        assert_eq!(palette.marker, Rgba::new(1.0, 0.0, 1.0, 1.0));
        assert!((palette.line_width - 0.02).abs() < 1e-6);
        assert!(!palette.show_approximate);
    }

    // The only test that touches the process environment, so the variables
    // cannot leak into another test running in parallel.
    #[test]
    fn test_missing_file_and_environment_overrides() {
        let settings = load_settings("does/not/exist.toml").unwrap();
        assert_eq!(settings, Settings::default());

        let vars = [
            ("RAYSTEP_GRID__ROWS", "16"),
            ("RAYSTEP_GRID__SOURCE_FRACTION", "0.5"),
            ("RAYSTEP_STYLE__SHOW_HUD", "false"),
        ];
        for (key, value) in vars {
            // SAFETY: no other test reads the process environment.
            unsafe { std::env::set_var(key, value) };
        }

        let result = load_settings("does/not/exist.toml");

        for (key, _) in vars {
            // SAFETY: as above.
            unsafe { std::env::remove_var(key) };
        }

        let settings = result.unwrap();
        assert_eq!(settings.grid.rows, 16);
        assert!((settings.grid.source_fraction - 0.5).abs() < 1e-6);
        assert!(!settings.style.show_hud);
        assert_eq!(settings.grid.cols, 10);
        assert!(!settings.style.show_approximate);
    }
}
