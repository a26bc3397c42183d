//! Fixed-pitch text measurement
//!
//! The renderer sizes text from its content, so these numbers are an
//! approximation scripts use for layout (and the buffer uses for centering).

use crate::core::UiConfig;

/// Text metrics derived from [`UiConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    default_size: f32,
    char_width: f32,
    line_height: f32,
}

impl TextMetrics {
    /// Metrics from the UI configuration
    pub const fn from_config(config: &UiConfig) -> Self {
        Self {
            default_size: config.default_text_size,
            char_width: config.char_width,
            line_height: config.line_height,
        }
    }

    /// Size used when none is given
    pub const fn default_size(&self) -> f32 {
        self.default_size
    }

    fn scale(&self, size: Option<f32>) -> f32 {
        size.unwrap_or(self.default_size) / self.default_size
    }

    /// Width of the longest line
    #[allow(clippy::cast_precision_loss)]
    pub fn measure_width(&self, text: &str, size: Option<f32>) -> f32 {
        let longest = text.split('\n').map(|line| line.chars().count()).max().unwrap_or(0);
        longest as f32 * self.char_width * self.scale(size)
    }

    /// Height of all lines; empty text still occupies one line
    #[allow(clippy::cast_precision_loss)]
    pub fn measure_height(&self, text: &str, size: Option<f32>) -> f32 {
        let lines = text.split('\n').count().max(1);
        lines as f32 * self.line_height * self.scale(size)
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_width_uses_longest_line() {
        let metrics = TextMetrics::default();
        assert_relative_eq!(metrics.measure_width("ab\nabcd", None), metrics.measure_width("abcd", None));
        assert_relative_eq!(metrics.measure_width("abcd", None), 40.0);
        assert_relative_eq!(metrics.measure_width("", None), 0.0);
    }

    #[test]
    fn test_width_scales_linearly() {
        let metrics = TextMetrics::default();
        let base = metrics.measure_width("hello", Some(20.0));
        assert_relative_eq!(metrics.measure_width("hello", Some(40.0)), base * 2.0);
        assert_relative_eq!(metrics.measure_width("hellohello", Some(20.0)), base * 2.0);
    }

    #[test]
    fn test_height_counts_lines() {
        let metrics = TextMetrics::default();
        assert_relative_eq!(metrics.measure_height("a\nb\nc", None), 3.0 * metrics.measure_height("a", None));
        assert_relative_eq!(metrics.measure_height("a", None), 24.0);
        assert_relative_eq!(metrics.measure_height("", None), 24.0);
        assert_relative_eq!(metrics.measure_height("a", Some(10.0)), 12.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let metrics = TextMetrics::default();
        assert_relative_eq!(metrics.measure_width("héllo", None), metrics.measure_width("hello", None));
    }
}
