//! Per-actor UI command accumulator
//!
//! Collects the draw calls one actor issues during one frame, in call order.
//! Every `add_*` call validates all of its inputs before touching the buffer,
//! so a failed call leaves no partial record behind.

use super::color::{resolve_color, ColorValue};
use super::commands::{DrawStyle, UiCommand, UiPayload, UiRect};
use super::identifier::validate_message_name;
use super::metrics::TextMetrics;
use super::options::{clamp_opacity, ButtonOptions, ImageOptions, ShapeOptions, TextOptions};
use crate::core::{ApiColorDefaults, UiConfig};
use crate::error::{ensure_finite, ensure_non_negative, ApiError, ApiResult};
use crate::foundation::math::Point2;
use crate::host::ActorId;

/// Image size that tells the renderer to use the intrinsic size
const INTRINSIC_SIZE: f32 = -1.0;

/// Immediate-mode command buffer for a single actor
#[derive(Debug, Clone)]
pub struct UiCommandBuffer {
    actor: ActorId,
    frame: u64,
    commands: Vec<UiCommand>,
    metrics: TextMetrics,
    colors: ApiColorDefaults,
    line_thickness: f32,
}

impl UiCommandBuffer {
    /// Create a buffer with default configuration
    pub fn new(actor: ActorId) -> Self {
        Self::with_config(actor, &UiConfig::default(), ApiColorDefaults::default())
    }

    /// Create a buffer from explicit configuration
    pub fn with_config(actor: ActorId, ui: &UiConfig, colors: ApiColorDefaults) -> Self {
        Self {
            actor,
            frame: 0,
            commands: Vec::new(),
            metrics: TextMetrics::from_config(ui),
            colors,
            line_thickness: ui.line_thickness,
        }
    }

    /// Actor that owns this buffer
    pub const fn actor(&self) -> ActorId {
        self.actor
    }

    /// Frame the buffered commands belong to
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Text metrics used for centering
    pub const fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    /// Commands issued so far this frame, in call order
    pub fn commands(&self) -> &[UiCommand] {
        &self.commands
    }

    /// Number of buffered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command was issued this frame
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Start a new frame, dropping anything left from the previous one
    pub fn begin_frame(&mut self, frame: u64) {
        if !self.commands.is_empty() {
            log::debug!(
                "Actor {:?}: dropping {} unconsumed UI commands from frame {}",
                self.actor,
                self.commands.len(),
                self.frame
            );
        }
        self.commands.clear();
        self.frame = frame;
    }

    /// Hand the buffered commands to the renderer, leaving the buffer empty
    pub fn take_commands(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.commands)
    }

    fn push(&mut self, rect: UiRect, opacity: f32, style: DrawStyle, payload: UiPayload) {
        let command = self.command(rect, opacity, style, payload);
        self.record(command);
    }

    fn command(&self, rect: UiRect, opacity: f32, style: DrawStyle, payload: UiPayload) -> UiCommand {
        UiCommand {
            actor: self.actor,
            rect,
            opacity,
            style,
            payload,
        }
    }

    /// Append an already validated command
    pub(crate) fn record(&mut self, command: UiCommand) {
        log::trace!(
            "Actor {:?} frame {}: {:?} at {:?}",
            self.actor,
            self.frame,
            command.kind(),
            command.rect
        );
        self.commands.push(command);
    }

    /// Queue a text label
    ///
    /// With `center` set, `(x, y)` is the center of the measured text block.
    pub fn add_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: Option<&ColorValue>,
        options: Option<&TextOptions>,
    ) -> ApiResult<()> {
        let options = options.cloned().unwrap_or_default();
        let mut x = ensure_finite("x", x)?;
        let mut y = ensure_finite("y", y)?;
        let size = check_text_size(options.size)?.unwrap_or_else(|| self.metrics.default_size());
        let opacity = clamp_opacity(options.opacity)?;

        let w = self.metrics.measure_width(text, Some(size));
        let h = self.metrics.measure_height(text, Some(size));
        if options.center {
            x -= w / 2.0;
            y -= h / 2.0;
        }

        let color = resolve_color(color, self.colors.text);
        self.push(
            UiRect::new(x, y, w, h),
            opacity,
            DrawStyle::Filled,
            UiPayload::Text {
                text: text.to_string(),
                color,
                size,
            },
        );
        Ok(())
    }

    /// Queue a rectangle
    pub fn add_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Option<&ColorValue>,
        options: Option<&ShapeOptions>,
    ) -> ApiResult<()> {
        let options = options.cloned().unwrap_or_default();
        let rect = UiRect::new(
            ensure_finite("x", x)?,
            ensure_finite("y", y)?,
            ensure_non_negative("w", w)?,
            ensure_non_negative("h", h)?,
        );
        let opacity = clamp_opacity(options.opacity)?;

        let color = resolve_color(color, self.colors.shape);
        self.push(rect, opacity, options.style, UiPayload::Rect { color });
        Ok(())
    }

    /// Queue a circle
    pub fn add_circle(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius: f32,
        color: Option<&ColorValue>,
        options: Option<&ShapeOptions>,
    ) -> ApiResult<()> {
        let options = options.cloned().unwrap_or_default();
        let center = Point2::new(ensure_finite("centerX", center_x)?, ensure_finite("centerY", center_y)?);
        let radius = ensure_non_negative("radius", radius)?;
        let opacity = clamp_opacity(options.opacity)?;

        let color = resolve_color(color, self.colors.shape);
        let rect = UiRect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
        self.push(
            rect,
            opacity,
            options.style,
            UiPayload::Circle {
                points: [center],
                radius,
                color,
            },
        );
        Ok(())
    }

    /// Queue a triangle
    pub fn add_triangle(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        color: Option<&ColorValue>,
        options: Option<&ShapeOptions>,
    ) -> ApiResult<()> {
        let options = options.cloned().unwrap_or_default();
        let points = [
            Point2::new(ensure_finite("x1", x1)?, ensure_finite("y1", y1)?),
            Point2::new(ensure_finite("x2", x2)?, ensure_finite("y2", y2)?),
            Point2::new(ensure_finite("x3", x3)?, ensure_finite("y3", y3)?),
        ];
        let opacity = clamp_opacity(options.opacity)?;

        let color = resolve_color(color, self.colors.shape);
        self.push(
            UiRect::bounding(&points),
            opacity,
            options.style,
            UiPayload::Triangle { points, color },
        );
        Ok(())
    }

    /// Queue a line segment
    pub fn add_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Option<&ColorValue>,
        options: Option<&ShapeOptions>,
    ) -> ApiResult<()> {
        let options = options.cloned().unwrap_or_default();
        let points = [
            Point2::new(ensure_finite("x1", x1)?, ensure_finite("y1", y1)?),
            Point2::new(ensure_finite("x2", x2)?, ensure_finite("y2", y2)?),
        ];
        let thickness = match options.thickness {
            Some(thickness) => ensure_non_negative("thickness", thickness)?,
            None => self.line_thickness,
        };
        let opacity = clamp_opacity(options.opacity)?;

        let color = resolve_color(color, self.colors.shape);
        self.push(
            UiRect::bounding(&points),
            opacity,
            options.style,
            UiPayload::Line {
                points,
                thickness,
                color,
            },
        );
        Ok(())
    }

    /// Queue a clickable button
    ///
    /// When the host reports a click, `click_message_name` is sent to this
    /// buffer's actor with the JSON-encoded `click_message_arg` (`{}` if none).
    pub fn add_button(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        text: &str,
        click_message_name: Option<&str>,
        options: Option<&ButtonOptions>,
    ) -> ApiResult<()> {
        let options = options.cloned().unwrap_or_default();
        let rect = UiRect::new(
            ensure_finite("x", x)?,
            ensure_finite("y", y)?,
            ensure_non_negative("w", w)?,
            ensure_non_negative("h", h)?,
        );
        if let Some(name) = click_message_name {
            validate_message_name(name)?;
        }
        let text_size = check_text_size(options.text_size)?.unwrap_or_else(|| self.metrics.default_size());
        let opacity = clamp_opacity(options.opacity)?;
        let click_message_arg_json = match &options.click_message_arg {
            Some(arg) => serde_json::to_string(arg)?,
            None => "{}".to_string(),
        };

        let background_color = resolve_color(options.background_color.as_ref(), self.colors.button_background);
        let text_color = resolve_color(options.text_color.as_ref(), self.colors.button_text);
        self.push(
            rect,
            opacity,
            options.style,
            UiPayload::Button {
                text: text.to_string(),
                text_color,
                background_color,
                text_size,
                click_message_name: click_message_name.map(str::to_string),
                click_message_arg_json,
            },
        );
        Ok(())
    }

    /// Queue a whole image
    ///
    /// Omitted or negative `width`/`height` are recorded as `-1`, which the
    /// renderer reads as "intrinsic size" (both omitted) or "keep aspect
    /// ratio" (one omitted).
    pub fn add_image(
        &mut self,
        x: f32,
        y: f32,
        image_id: &str,
        width: Option<f32>,
        height: Option<f32>,
        options: Option<&ImageOptions>,
    ) -> ApiResult<()> {
        let command = self.image_command(x, y, image_id, width, height, options)?;
        self.record(command);
        Ok(())
    }

    /// Validate an image draw without recording it
    pub(crate) fn image_command(
        &self,
        x: f32,
        y: f32,
        image_id: &str,
        width: Option<f32>,
        height: Option<f32>,
        options: Option<&ImageOptions>,
    ) -> ApiResult<UiCommand> {
        let options = options.cloned().unwrap_or_default();
        let x = ensure_finite("x", x)?;
        let y = ensure_finite("y", y)?;
        require_image_id(image_id)?;
        let w = image_extent("width", width)?;
        let h = image_extent("height", height)?;
        let opacity = clamp_opacity(options.opacity)?;

        Ok(self.command(
            UiRect::new(x, y, w, h),
            opacity,
            DrawStyle::Filled,
            UiPayload::Image {
                image_id: image_id.to_string(),
            },
        ))
    }

    /// Queue a region of an image (sprite-sheet frame)
    pub fn add_image_slice(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        src_x: f32,
        src_y: f32,
        src_w: f32,
        src_h: f32,
        image_id: &str,
        options: Option<&ImageOptions>,
    ) -> ApiResult<()> {
        let command =
            self.image_slice_command(x, y, w, h, src_x, src_y, src_w, src_h, image_id, options)?;
        self.record(command);
        Ok(())
    }

    /// Validate an image-slice draw without recording it
    pub(crate) fn image_slice_command(
        &self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        src_x: f32,
        src_y: f32,
        src_w: f32,
        src_h: f32,
        image_id: &str,
        options: Option<&ImageOptions>,
    ) -> ApiResult<UiCommand> {
        let options = options.cloned().unwrap_or_default();
        let rect = UiRect::new(
            ensure_finite("x", x)?,
            ensure_finite("y", y)?,
            ensure_non_negative("w", w)?,
            ensure_non_negative("h", h)?,
        );
        let src_rect = UiRect::new(
            ensure_finite("srcX", src_x)?,
            ensure_finite("srcY", src_y)?,
            ensure_non_negative("srcW", src_w)?,
            ensure_non_negative("srcH", src_h)?,
        );
        require_image_id(image_id)?;
        let opacity = clamp_opacity(options.opacity)?;

        Ok(self.command(
            rect,
            opacity,
            DrawStyle::Filled,
            UiPayload::ImageSlice {
                image_id: image_id.to_string(),
                src_rect,
            },
        ))
    }
}

/// Text sizes must be positive
pub(crate) fn check_text_size(size: Option<f32>) -> ApiResult<Option<f32>> {
    match size {
        Some(size) if !(size.is_finite() && size > 0.0) => {
            Err(ApiError::invalid(format!("text size must be a positive number, got {size}")))
        }
        other => Ok(other),
    }
}

fn image_extent(name: &str, value: Option<f32>) -> ApiResult<f32> {
    match value {
        None => Ok(INTRINSIC_SIZE),
        Some(value) => {
            let value = ensure_finite(name, value)?;
            Ok(if value < 0.0 { INTRINSIC_SIZE } else { value })
        }
    }
}

fn require_image_id(image_id: &str) -> ApiResult<()> {
    if image_id.trim().is_empty() {
        return Err(ApiError::invalid("imageId must not be empty"));
    }
    Ok(())
}
