//! UI System Module
//!
//! Immediate-mode UI command layer. Scripts issue draw calls every frame; the
//! calls are staged as [`UiCommand`] records in a per-actor
//! [`UiCommandBuffer`], and the host renderer drains them once per frame
//! through [`UiFrame`].
//!
//! Architecture:
//! - color: normalization of script colors to packed RGB
//! - commands: the command records handed to the renderer
//! - options: per-call option structures with defaults
//! - metrics: fixed-pitch text measurement
//! - identifier: message-name validation for button clicks
//! - buffer: the per-actor accumulator
//! - frame: per-frame ownership of all actor buffers

pub mod color;
pub mod commands;
pub mod options;
pub mod metrics;
pub mod identifier;
pub mod buffer;
pub mod frame;

pub use color::{ColorValue, PackedColor, resolve_color};
pub use commands::{DrawStyle, UiCommand, UiCommandKind, UiPayload, UiRect};
pub use options::{ButtonOptions, ImageOptions, ShapeOptions, TextOptions, parse_options};
pub use metrics::TextMetrics;
pub use identifier::{is_valid_message_name, validate_message_name};
pub use buffer::UiCommandBuffer;
pub use frame::UiFrame;

/// Width of UI-space in units. Height follows the screen's aspect ratio.
pub const UI_SCREEN_WIDTH: f32 = 1600.0;
