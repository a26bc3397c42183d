//! UI draw calls and screen metrics

use crate::error::{ApiError, ApiResult, ResourceKind};
use crate::host::{HostRuntime, ScriptContext};
use crate::ui::buffer::check_text_size;
use crate::ui::{
    ButtonOptions, ColorValue, ImageOptions, ShapeOptions, TextOptions, UI_SCREEN_WIDTH,
};

impl<H: HostRuntime + ?Sized> ScriptContext<'_, H> {
    /// Draw text this frame
    pub fn add_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: Option<&ColorValue>,
        options: Option<&TextOptions>,
    ) -> ApiResult<()> {
        self.ui.add_text(x, y, text, color, options)
    }

    /// Draw a rectangle this frame
    pub fn add_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Option<&ColorValue>,
        options: Option<&ShapeOptions>,
    ) -> ApiResult<()> {
        self.ui.add_rect(x, y, w, h, color, options)
    }

    /// Draw a circle this frame
    pub fn add_circle(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius: f32,
        color: Option<&ColorValue>,
        options: Option<&ShapeOptions>,
    ) -> ApiResult<()> {
        self.ui.add_circle(center_x, center_y, radius, color, options)
    }

    /// Draw a triangle this frame
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
        self.ui.add_triangle(x1, y1, x2, y2, x3, y3, color, options)
    }

    /// Draw a line this frame
    pub fn add_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Option<&ColorValue>,
        options: Option<&ShapeOptions>,
    ) -> ApiResult<()> {
        self.ui.add_line(x1, y1, x2, y2, color, options)
    }

    /// Draw a button this frame; clicks send `click_message_name` back to the
    /// current actor
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
        self.ui.add_button(x, y, w, h, text, click_message_name, options)
    }

    /// Draw an image this frame
    ///
    /// Arguments are validated first; a well-formed call naming an image the
    /// host does not have fails with [`ApiError::MissingResource`].
    pub fn add_image(
        &mut self,
        x: f32,
        y: f32,
        image_id: &str,
        width: Option<f32>,
        height: Option<f32>,
        options: Option<&ImageOptions>,
    ) -> ApiResult<()> {
        let command = self.ui.image_command(x, y, image_id, width, height, options)?;
        self.require_image(image_id)?;
        self.ui.record(command);
        Ok(())
    }

    /// Draw a region of an image this frame
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
            self.ui.image_slice_command(x, y, w, h, src_x, src_y, src_w, src_h, image_id, options)?;
        self.require_image(image_id)?;
        self.ui.record(command);
        Ok(())
    }

    /// Width of the longest line of `text`
    pub fn measure_text_width(&self, text: &str, size: Option<f32>) -> ApiResult<f32> {
        Ok(self.ui.metrics().measure_width(text, check_text_size(size)?))
    }

    /// Height of all lines of `text`
    pub fn measure_text_height(&self, text: &str, size: Option<f32>) -> ApiResult<f32> {
        Ok(self.ui.metrics().measure_height(text, check_text_size(size)?))
    }

    /// UI-space width, always 1600
    pub fn get_screen_width(&self) -> f32 {
        UI_SCREEN_WIDTH
    }

    /// UI-space height as reported by the host
    pub fn get_screen_height(&self) -> f32 {
        self.host.screen_height()
    }

    fn require_image(&self, image_id: &str) -> ApiResult<()> {
        if !self.host.has_image(image_id) {
            return Err(ApiError::missing(ResourceKind::Image, image_id));
        }
        Ok(())
    }
}
