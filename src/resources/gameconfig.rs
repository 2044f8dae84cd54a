//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1920
//! height = 1080
//! title = Critter Walk
//! target_fps = 60
//!
//! [actor]
//! speed = 300
//! scale = 2.0
//! max_actors = 64
//! wander_interval = 1.5
//!
//! [assets]
//! species = ./assets/species.json
//!
//! [rows]
//! idle = 0,0
//! down = 5,6
//! left = 7,8
//! right = 9,10
//! up = 11,12
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::AppError;
use crate::resources::rowlayout::RowLayout;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1920;
const DEFAULT_WINDOW_HEIGHT: u32 = 1080;
const DEFAULT_TITLE: &str = "Critter Walk";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SPEED: f32 = 300.0;
const DEFAULT_SCALE: f32 = 2.0;
const DEFAULT_MAX_ACTORS: usize = 64;
const DEFAULT_WANDER_INTERVAL: f32 = 1.5;
const DEFAULT_SPECIES_PATH: &str = "./assets/species.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window (and viewport) width in pixels.
    pub window_width: u32,
    /// Window (and viewport) height in pixels.
    pub window_height: u32,
    pub title: String,
    /// Target frames per second, handed to raylib for frame pacing.
    pub target_fps: u32,
    /// Walking speed in pixels per second.
    pub speed: f32,
    /// On-screen size of one sheet frame.
    pub scale: f32,
    /// Upper bound on registered actors, player included.
    pub max_actors: usize,
    /// Seconds between direction changes of wandering actors.
    pub wander_interval: f32,
    /// JSON list of species and their sheets.
    pub species_path: PathBuf,
    pub rows: RowLayout,
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
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            speed: DEFAULT_SPEED,
            scale: DEFAULT_SCALE,
            max_actors: DEFAULT_MAX_ACTORS,
            wander_interval: DEFAULT_WANDER_INTERVAL,
            species_path: PathBuf::from(DEFAULT_SPECIES_PATH),
            rows: RowLayout::default(),
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
    /// Missing values retain their current (default) values. Returns an error
    /// if the file cannot be read or a value is malformed.
    pub fn load_from_file(&mut self) -> Result<(), AppError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| AppError::Config(format!("failed to load config file: {}", e)))?;
        self.apply_ini(&ini)?;

        info!(
            "Loaded config: {}x{} window, fps={}, speed={}, scale={}, max_actors={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.speed,
            self.scale,
            self.max_actors
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used by tests and by `load_from_file`.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), AppError> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| AppError::Config(format!("failed to parse config: {}", e)))?;
        self.apply_ini(&ini)
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<(), AppError> {
        let bad = |key: &str, e: String| AppError::Config(format!("{}: {}", key, e));

        // [window] section
        if let Some(width) = ini.getuint("window", "width").map_err(|e| bad("window.width", e))? {
            self.window_width = width as u32;
        }
        if let Some(height) = ini
            .getuint("window", "height")
            .map_err(|e| bad("window.height", e))?
        {
            self.window_height = height as u32;
        }
        if let Some(title) = ini.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = ini
            .getuint("window", "target_fps")
            .map_err(|e| bad("window.target_fps", e))?
        {
            self.target_fps = fps as u32;
        }

        // [actor] section
        if let Some(speed) = ini.getfloat("actor", "speed").map_err(|e| bad("actor.speed", e))? {
            self.speed = speed as f32;
        }
        if let Some(scale) = ini.getfloat("actor", "scale").map_err(|e| bad("actor.scale", e))? {
            self.scale = scale as f32;
        }
        if let Some(max) = ini
            .getuint("actor", "max_actors")
            .map_err(|e| bad("actor.max_actors", e))?
        {
            self.max_actors = max as usize;
        }
        if let Some(interval) = ini
            .getfloat("actor", "wander_interval")
            .map_err(|e| bad("actor.wander_interval", e))?
        {
            self.wander_interval = interval as f32;
        }

        // [assets] section
        if let Some(path) = ini.get("assets", "species") {
            self.species_path = PathBuf::from(path);
        }

        // [rows] section
        for facing in RowLayout::facings() {
            let key = RowLayout::config_key(*facing);
            if let Some(value) = ini.get("rows", key) {
                let pair = RowLayout::parse_pair(&value).map_err(|e| bad(&format!("rows.{}", key), e))?;
                self.rows.set(*facing, pair);
            }
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), AppError> {
        let mut ini = Ini::new();

        // [window] section
        ini.set("window", "width", Some(self.window_width.to_string()));
        ini.set("window", "height", Some(self.window_height.to_string()));
        ini.set("window", "title", Some(self.title.clone()));
        ini.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [actor] section
        ini.set("actor", "speed", Some(self.speed.to_string()));
        ini.set("actor", "scale", Some(self.scale.to_string()));
        ini.set("actor", "max_actors", Some(self.max_actors.to_string()));
        ini.set("actor", "wander_interval", Some(self.wander_interval.to_string()));

        // [assets] section
        ini.set(
            "assets",
            "species",
            Some(self.species_path.display().to_string()),
        );

        // [rows] section
        for facing in RowLayout::facings() {
            let [a, b] = self.rows.rows_for(*facing);
            ini.set("rows", RowLayout::config_key(*facing), Some(format!("{},{}", a, b)));
        }

        ini.write(&self.config_path)
            .map_err(|e| AppError::Config(format!("failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Reject settings that cannot open a window or would move actors off
    /// screen.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(AppError::Init(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.max_actors == 0 {
            return Err(AppError::Config("actor.max_actors must be at least 1".into()));
        }
        let checks = [
            ("actor.speed", self.speed, self.speed >= 0.0),
            ("actor.scale", self.scale, self.scale > 0.0),
            ("actor.wander_interval", self.wander_interval, self.wander_interval >= 0.0),
        ];
        for (key, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(AppError::Config(format!("{} out of range: {}", key, value)));
            }
        }
        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
