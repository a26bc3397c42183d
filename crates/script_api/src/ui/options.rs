//! Per-call option structures
//!
//! Every draw call takes an optional options structure. Fields left out keep
//! their documented defaults. Scripts that hand options over as JSON go
//! through [`parse_options`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::color::ColorValue;
use super::commands::DrawStyle;
use crate::error::{ApiError, ApiResult};

/// Options for `add_text`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOptions {
    /// Treat `(x, y)` as the center of the text block (default `false`)
    pub center: bool,
    /// Text size (default [`UiConfig::default_text_size`](crate::core::UiConfig::default_text_size))
    pub size: Option<f32>,
    /// Opacity (default 1)
    pub opacity: f32,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            center: false,
            size: None,
            opacity: 1.0,
        }
    }
}

impl TextOptions {
    /// Centered text
    pub fn centered() -> Self {
        Self {
            center: true,
            ..Self::default()
        }
    }

    /// Set text size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Options for rects, circles, triangles and lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeOptions {
    /// Opacity (default 1)
    pub opacity: f32,
    /// Fill style (default `Filled`)
    pub style: DrawStyle,
    /// Line thickness, lines only (default [`UiConfig::line_thickness`](crate::core::UiConfig::line_thickness))
    pub thickness: Option<f32>,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            style: DrawStyle::Filled,
            thickness: None,
        }
    }
}

impl ShapeOptions {
    /// Outline-only shape
    pub fn border() -> Self {
        Self {
            style: DrawStyle::Border,
            ..Self::default()
        }
    }

    /// Set style
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    /// Set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set thickness
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = Some(thickness);
        self
    }
}

/// Options for `add_button`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonOptions {
    /// Argument delivered with the click message (default `{}`)
    pub click_message_arg: Option<Value>,
    /// Background color (default dark grey)
    pub background_color: Option<ColorValue>,
    /// Label color (default white)
    pub text_color: Option<ColorValue>,
    /// Label size (default [`UiConfig::default_text_size`](crate::core::UiConfig::default_text_size))
    pub text_size: Option<f32>,
    /// Opacity (default 1)
    pub opacity: f32,
    /// Background style (default `Filled`)
    pub style: DrawStyle,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            click_message_arg: None,
            background_color: None,
            text_color: None,
            text_size: None,
            opacity: 1.0,
            style: DrawStyle::Filled,
        }
    }
}

impl ButtonOptions {
    /// Attach a click argument, encoding it to JSON now
    pub fn with_click_arg<T: Serialize + ?Sized>(mut self, arg: &T) -> ApiResult<Self> {
        self.click_message_arg = Some(serde_json::to_value(arg)?);
        Ok(self)
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<ColorValue>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set label color
    pub fn with_text_color(mut self, color: impl Into<ColorValue>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set label size
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }
}

/// Options for `add_image` and `add_image_slice`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageOptions {
    /// Opacity (default 1)
    pub opacity: f32,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self { opacity: 1.0 }
    }
}

impl ImageOptions {
    /// Set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Parse script-supplied options
///
/// `null` yields the defaults. Anything other than an object, or an object
/// with fields of the wrong type, is an [`ApiError::InvalidArgument`].
pub fn parse_options<T: DeserializeOwned + Default>(value: &Value) -> ApiResult<T> {
    match value {
        Value::Null => Ok(T::default()),
        Value::Object(_) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::invalid(format!("invalid options: {e}"))),
        other => Err(ApiError::invalid(format!(
            "options must be an object, got {}",
            json_type_name(other)
        ))),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Opacity outside 0..=1 is clamped; NaN is rejected
pub(crate) fn clamp_opacity(opacity: f32) -> ApiResult<f32> {
    if opacity.is_nan() {
        return Err(ApiError::invalid("opacity must be a number"));
    }
    Ok(opacity.clamp(0.0, 1.0))
}
