//! Configuration system
//!
//! Driver configuration with file loading support. Formats follow the
//! file extension: TOML and RON are both accepted.

use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window configuration
///
/// Defaults applied by applications when sizing a freshly created window.
/// New native windows always start from a small hidden placeholder, so the
/// values here describe the first visible geometry, not the created one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Initial window width in pixels
    pub width: u32,

    /// Initial window height in pixels
    pub height: u32,

    /// Whether the window can be resized by the user
    pub resizable: bool,
}

impl WindowConfig {
    /// Create a new window configuration with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 800,
            height: 600,
            resizable: true,
        }
    }

    /// Set the initial window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set whether the window is resizable
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("Pane Application")
    }
}

/// Driver configuration
///
/// Top-level configuration for the windowing driver. This is the structure
/// applications load from disk or build with the `with_*` methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Window defaults
    pub window: WindowConfig,

    /// Log filter for the logging system (same syntax as `RUST_LOG`)
    pub log_filter: String,
}

impl DriverConfig {
    /// Create a new driver configuration with defaults
    pub fn new() -> Self {
        Self {
            window: WindowConfig::default(),
            log_filter: "info".to_string(),
        }
    }

    /// Set the window configuration
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set the log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window.title.is_empty() {
            return Err("Window title cannot be empty".to_string());
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err("Window dimensions must be non-zero".to_string());
        }
        Ok(())
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for DriverConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DriverConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_geometry_is_rejected() {
        let config = DriverConfig::new().with_window(WindowConfig::new("test").with_size(0, 600));
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_title_is_rejected() {
        let config = DriverConfig::new().with_window(WindowConfig::new(""));
        assert!(config.validate().is_err());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = DriverConfig::new()
            .with_window(WindowConfig::new("shell").with_size(1024, 768).with_resizable(false))
            .with_log_filter("debug");

        assert_eq!(config.window.title, "shell");
        assert_eq!((config.window.width, config.window.height), (1024, 768));
        assert!(!config.window.resizable);
        assert_eq!(config.log_filter, "debug");
    }
}
