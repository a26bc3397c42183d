//! # Unified Configuration
//!
//! All tunables of the script API in one serializable structure. Every section
//! has documented defaults so a missing file or a partial file still yields a
//! usable configuration.
//!
//! ## Configuration Categories
//!
//! - **UI Config**: text metrics and shape defaults for the command buffer
//! - **Color Defaults**: fallback colors used when a script passes no color or
//!   a malformed one
//! - **Audio Config**: defaults for sound-trigger delegation

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::ui::color::{PackedColor, DARK_GREY, WHITE};

/// # UI Configuration
///
/// Text metrics are fixed-pitch: every character is `char_width` wide and
/// every line `line_height` tall at `default_text_size`. Other sizes scale
/// linearly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Text size used when a script passes none
    pub default_text_size: f32,
    /// Width of one character at the default text size (UI units)
    pub char_width: f32,
    /// Height of one line at the default text size (UI units)
    pub line_height: f32,
    /// Line thickness used when a script passes none
    pub line_thickness: f32,
}

impl UiConfig {
    /// Create a UI configuration with default metrics
    pub fn new() -> Self {
        Self {
            default_text_size: 20.0,
            char_width: 10.0,
            line_height: 24.0,
            line_thickness: 2.0,
        }
    }

    /// Set the fixed-pitch text metrics
    pub fn with_text_metrics(mut self, default_size: f32, char_width: f32, line_height: f32) -> Self {
        self.default_text_size = default_size;
        self.char_width = char_width;
        self.line_height = line_height;
        self
    }

    /// Set the default line thickness
    pub fn with_line_thickness(mut self, thickness: f32) -> Self {
        self.line_thickness = thickness;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("default_text_size", self.default_text_size),
            ("char_width", self.char_width),
            ("line_height", self.line_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }

        if !(self.line_thickness.is_finite() && self.line_thickness >= 0.0) {
            return Err(format!("line_thickness must be non-negative, got {}", self.line_thickness));
        }

        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Color Defaults
///
/// Packed `0xRRGGBB` fallbacks applied when a color is absent or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiColorDefaults {
    /// Text commands
    pub text: PackedColor,
    /// Rect, circle, triangle and line commands
    pub shape: PackedColor,
    /// Button background
    pub button_background: PackedColor,
    /// Button label
    pub button_text: PackedColor,
}

impl Default for ApiColorDefaults {
    fn default() -> Self {
        Self {
            text: WHITE,
            shape: WHITE,
            button_background: DARK_GREY,
            button_text: WHITE,
        }
    }
}

/// # Audio Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Volume used when a script passes none (0.0 to 1.0)
    pub default_volume: f32,
}

impl AudioConfig {
    /// Set the default volume
    pub fn with_default_volume(mut self, volume: f32) -> Self {
        self.default_volume = volume;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.default_volume) {
            return Err(format!("default_volume must be within 0..=1, got {}", self.default_volume));
        }
        Ok(())
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { default_volume: 1.0 }
    }
}

/// # Complete API Configuration
///
/// Top-level configuration handed to every [`ScriptContext`](crate::host::ScriptContext).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Log filter used by [`logging::init_with_level`](crate::foundation::logging::init_with_level)
    pub log_level: String,
    /// UI command buffer configuration
    pub ui: UiConfig,
    /// Fallback colors
    pub colors: ApiColorDefaults,
    /// Sound delegation defaults
    pub audio: AudioConfig,
}

impl ApiConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            ui: UiConfig::default(),
            colors: ApiColorDefaults::default(),
            audio: AudioConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set UI configuration
    pub fn with_ui(mut self, ui: UiConfig) -> Self {
        self.ui = ui;
        self
    }

    /// Set fallback colors
    pub fn with_colors(mut self, colors: ApiColorDefaults) -> Self {
        self.colors = colors;
        self
    }

    /// Set audio configuration
    pub fn with_audio(mut self, audio: AudioConfig) -> Self {
        self.audio = audio;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ui.validate().map_err(ConfigError::Invalid)?;
        self.audio.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ApiConfig {}
