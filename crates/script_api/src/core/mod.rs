//! # Core Module
//!
//! Shared configuration for the script API surface.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the UI command layer, audio
//!   delegation defaults and logging

pub mod config;

pub use config::{
    ApiConfig,
    UiConfig,
    AudioConfig,
    ApiColorDefaults,
};
pub use crate::config::{Config, ConfigError, ConfigFormat};
