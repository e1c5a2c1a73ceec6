//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `config/default.toml` (version controlled)
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`SANDFALL_SECTION__KEY`)

use figment::{Figment, providers::{Env, Format, Serialized, Toml}};
use sandfall_grid::{Palette, Rgba};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Grid configuration
    #[serde(default)]
    pub grid: GridConfig,
    /// Simulation pacing
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Cell colours
    #[serde(default)]
    pub colors: ColorConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/user.toml`
    /// 4. Environment variables (`SANDFALL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional per-user overrides
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SANDFALL_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SANDFALL_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.cell_size == 0 {
            return Err(ConfigError::invalid("grid.cell_size must be at least 1"));
        }
        if self.simulation.tick_rate == 0 {
            return Err(ConfigError::invalid("simulation.tick_rate must be at least 1"));
        }
        if self.window.width < self.grid.cell_size || self.window.height < self.grid.cell_size {
            return Err(ConfigError::invalid(format!(
                "window {}x{} is smaller than one {}px cell",
                self.window.width, self.window.height, self.grid.cell_size
            )));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Falling Sand".to_string(),
            width: 600,
            height: 400,
            vsync: true,
        }
    }
}

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 4 }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target ticks per second
    pub tick_rate: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { tick_rate: 60 }
    }
}

/// Cell colours as RGBA
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub empty: Rgba,
    pub sand: Rgba,
}

impl ColorConfig {
    /// Build the render palette
    pub fn palette(&self) -> Palette {
        Palette::new(self.empty, self.sand)
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            empty: Palette::BLACK,
            sand: Palette::SAND,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or parsed
    Load(String),
    /// Values parsed but cannot be used
    Invalid(String),
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid(message.into())
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Configuration error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
