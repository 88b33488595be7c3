//! Demo configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [page]
//! width = 2000
//! height = 4000
//! scroll_step = 48
//! scroll_speed = 600
//!
//! [theme]
//! path = assets/theme.json
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_PAGE_WIDTH: u32 = 2000;
const DEFAULT_PAGE_HEIGHT: u32 = 4000;
const DEFAULT_SCROLL_STEP: f32 = 48.0;
const DEFAULT_SCROLL_SPEED: f32 = 600.0;
const DEFAULT_THEME_PATH: &str = "./assets/theme.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Demo configuration resource.
///
/// Stores window settings, the document (page) extent, scroll behavior, and
/// the theme document path. Values missing from the file retain their
/// defaults.
#[derive(Resource, Debug, Clone)]
pub struct TrackerConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Document width in pixels.
    pub page_width: u32,
    /// Document height in pixels.
    pub page_height: u32,
    /// Scroll distance per wheel notch, in pixels.
    pub scroll_step: f32,
    /// Keyboard scroll speed, in pixels per second.
    pub scroll_speed: f32,
    /// Path to the theme document.
    pub theme_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            scroll_step: DEFAULT_SCROLL_STEP,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            theme_path: PathBuf::from(DEFAULT_THEME_PATH),
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

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [page] section
        if let Some(width) = config.getuint("page", "width").ok().flatten() {
            self.page_width = width as u32;
        }
        if let Some(height) = config.getuint("page", "height").ok().flatten() {
            self.page_height = height as u32;
        }
        if let Some(step) = config.getfloat("page", "scroll_step").ok().flatten() {
            self.scroll_step = step as f32;
        }
        if let Some(speed) = config.getfloat("page", "scroll_speed").ok().flatten() {
            self.scroll_speed = speed as f32;
        }

        // [theme] section
        if let Some(path) = config.get("theme", "path") {
            self.theme_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, page {}x{}, scroll step={} speed={}, theme={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.page_width,
            self.page_height,
            self.scroll_step,
            self.scroll_speed,
            self.theme_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("page", "width", Some(self.page_width.to_string()));
        config.set("page", "height", Some(self.page_height.to_string()));
        config.set("page", "scroll_step", Some(self.scroll_step.to_string()));
        config.set("page", "scroll_speed", Some(self.scroll_speed.to_string()));

        config.set(
            "theme",
            "path",
            Some(self.theme_path.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Get the document extent.
    pub fn page_size(&self) -> (u32, u32) {
        (self.page_width, self.page_height)
    }
}
