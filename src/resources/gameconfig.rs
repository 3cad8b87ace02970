//! Game configuration resource.
//!
//! Manages demo settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//!
//! [scene]
//! background = 123456
//! seed = 42
//!
//! [wire]
//! offset = 50
//!
//! [box]
//! spawn_x = 600
//! spawn_y = 300
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::background::{DEFAULT_BACKGROUND, parse_hex_color};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_WIRE_OFFSET: f32 = 50.0;
const DEFAULT_BOX_SPAWN: (f32, f32) = (600.0, 300.0);
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Demo configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels. Also the width of the play area.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Initial background color as `#RRGGBB`.
    pub background: String,
    /// Seed for background color changes. Random when `None`.
    pub seed: Option<u64>,
    /// Horizontal distance between consecutive vertices of a new wire.
    pub wire_offset: f32,
    /// Where "New Box" places the box.
    pub box_spawn_x: f32,
    pub box_spawn_y: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            background: DEFAULT_BACKGROUND.to_string(),
            seed: None,
            wire_offset: DEFAULT_WIRE_OFFSET,
            box_spawn_x: DEFAULT_BOX_SPAWN.0,
            box_spawn_y: DEFAULT_BOX_SPAWN.1,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, background={}, wire offset={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.background,
            self.wire_offset
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Apply every valid key; invalid or out of range values keep the
    /// current value.
    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = get_pixels(config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = get_pixels(config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = config
            .getuint("window", "target_fps")
            .ok()
            .flatten()
            .and_then(|fps| u32::try_from(fps).ok())
        {
            self.target_fps = fps;
        }

        // [scene] section
        // `#` starts a comment in INI files, so the color is stored without it.
        if let Some(background) = config.get("scene", "background") {
            match parse_hex_color(&background) {
                Ok(_) => {
                    self.background = format!(
                        "#{}",
                        background.trim_start_matches('#').to_ascii_uppercase()
                    );
                }
                Err(e) => warn!("{}, keeping background {}", e, self.background),
            }
        }
        if let Some(seed) = config.getuint("scene", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        // [wire] section
        if let Some(offset) = config.getfloat("wire", "offset").ok().flatten() {
            self.wire_offset = offset as f32;
        }

        // [box] section
        if let Some(x) = config.getfloat("box", "spawn_x").ok().flatten() {
            self.box_spawn_x = x as f32;
        }
        if let Some(y) = config.getfloat("box", "spawn_y").ok().flatten() {
            self.box_spawn_y = y as f32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set(
            "scene",
            "background",
            Some(self.background.trim_start_matches('#').to_string()),
        );
        if let Some(seed) = self.seed {
            config.set("scene", "seed", Some(seed.to_string()));
        }

        config.set("wire", "offset", Some(self.wire_offset.to_string()));

        config.set("box", "spawn_x", Some(self.box_spawn_x.to_string()));
        config.set("box", "spawn_y", Some(self.box_spawn_y.to_string()));

        config
    }

    /// Vertical line new wires bend away from.
    pub fn midline(&self) -> f32 {
        self.window_width as f32 * 0.5
    }
}

/// Window dimension in pixels. Zero and values past `i32::MAX`, which raylib
/// cannot take, are skipped.
fn get_pixels(config: &Ini, section: &str, key: &str) -> Option<u32> {
    config
        .getuint(section, key)
        .ok()
        .flatten()
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| (1..=i32::MAX as u32).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.background, "#123456");
        assert_eq!(config.seed, None);
        assert_eq!(config.wire_offset, 50.0);
        assert_eq!(config.midline(), 400.0);
        assert_eq!((config.box_spawn_x, config.box_spawn_y), (600.0, 300.0));
    }

    #[test]
    fn test_load_from_str_partial() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[scene]\nbackground = 00aa00\nseed = 9\n[wire]\noffset = 25\n")
            .unwrap();
        assert_eq!(config.background, "#00AA00");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.wire_offset, 25.0);
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn test_bad_color_is_skipped_alone() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 1024\n[scene]\nbackground = blue\n[wire]\noffset = 25\n[box]\nspawn_x = 10\n",
            )
            .unwrap();
        assert_eq!(config.background, "#123456");
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.wire_offset, 25.0);
        assert_eq!(config.box_spawn_x, 10.0);
    }

    #[test]
    fn test_out_of_range_numbers_are_skipped() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 5000000000\nheight = 3000000000\ntarget_fps = 99999999999\n",
            )
            .unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.target_fps, 60);

        config.load_from_str("[window]\nwidth = 0\nheight = 720\n").unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("boxwires-config-{}.ini", std::process::id()));
        let mut config = GameConfig::with_path(&path);
        config.window_width = 1024;
        config.seed = Some(5);
        config.save_to_file().unwrap();

        let mut reloaded = GameConfig::with_path(&path);
        reloaded.load_from_file().unwrap();
        assert_eq!(reloaded.window_width, 1024);
        assert_eq!(reloaded.seed, Some(5));
        assert_eq!(reloaded.background, "#123456");

        std::fs::remove_file(&path).ok();
    }
}
