//! Configuration system

pub use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// Implemented by configuration structs to gain file load/save support.
/// The format is picked from the file extension (`.toml` or `.ron`).
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

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
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
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

/// Window shell configuration
///
/// The defaults reproduce the canonical teaching setup: an 800x600
/// resizable window with vsync and a muted blue clear color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Whether the window is resizable
    pub resizable: bool,

    /// Whether buffer swaps wait for the display refresh
    pub vsync: bool,

    /// Clear color as RGBA
    pub clear_color: [f32; 4],

    /// Depth buffer clear value
    pub clear_depth: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Quad Canvas".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            vsync: true,
            clear_color: [0.2, 0.4, 0.6, 0.0],
            clear_depth: 1.0,
        }
    }
}

impl Config for ShellConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ShellConfig::default();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert!(config.resizable);
        assert!(config.vsync);
        assert_eq!(config.clear_color, [0.2, 0.4, 0.6, 0.0]);
        assert_eq!(config.clear_depth, 1.0);
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let config: ShellConfig = toml::from_str(
            r#"
            title = "Assignment 1"
            width = 1024
            height = 768
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Assignment 1");
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        // Unspecified fields keep their defaults
        assert!(config.vsync);
        assert_eq!(config.clear_color, [0.2, 0.4, 0.6, 0.0]);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ShellConfig {
            title: "Round Trip".to_string(),
            width: 640,
            height: 480,
            resizable: false,
            vsync: false,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            clear_depth: 1.0,
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ShellConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.title, config.title);
        assert_eq!(parsed.width, config.width);
        assert_eq!(parsed.height, config.height);
        assert_eq!(parsed.resizable, config.resizable);
        assert_eq!(parsed.vsync, config.vsync);
    }
}
