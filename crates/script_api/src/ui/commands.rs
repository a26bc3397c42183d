//! UI command records
//!
//! One record per draw call. Records are created once, never mutated, and
//! dropped when the renderer drains the buffer.

use serde::{Deserialize, Serialize};

use super::color::PackedColor;
use crate::events::ActorMessage;
use crate::foundation::math::Point2;
use crate::host::ActorId;

/// Axis-aligned box in UI-space (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UiRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl UiRect {
    /// Create a rect from position and size
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest rect enclosing every point
    pub fn bounding(points: &[Point2]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Whether a UI-space point lies inside the rect (edges inclusive)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

/// How a shape is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrawStyle {
    /// Solid fill
    #[default]
    Filled,
    /// Outline only
    Border,
    /// Dashed outline
    Dashed,
}

/// Discriminant of a [`UiCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UiCommandKind {
    /// Text label
    Text,
    /// Rectangle
    Rect,
    /// Clickable button
    Button,
    /// Whole image
    Image,
    /// Circle
    Circle,
    /// Triangle
    Triangle,
    /// Line segment
    Line,
    /// Region of an image (sprite sheets)
    ImageSlice,
}

/// Variant-specific data of a [`UiCommand`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum UiPayload {
    /// Text label
    Text {
        /// Label content, may contain newlines
        text: String,
        /// Packed text color
        color: PackedColor,
        /// Text size
        size: f32,
    },
    /// Rectangle
    Rect {
        /// Packed color
        color: PackedColor,
    },
    /// Clickable button
    Button {
        /// Label
        text: String,
        /// Packed label color
        text_color: PackedColor,
        /// Packed background color
        background_color: PackedColor,
        /// Label size
        text_size: f32,
        /// Message sent to the issuing actor on click
        click_message_name: Option<String>,
        /// JSON-encoded message argument (`{}` when none was given)
        click_message_arg_json: String,
    },
    /// Whole image; negative rect size means intrinsic size
    Image {
        /// Host image id
        image_id: String,
    },
    /// Circle
    Circle {
        /// `[center]`
        points: [Point2; 1],
        /// Radius in UI units
        radius: f32,
        /// Packed color
        color: PackedColor,
    },
    /// Triangle
    Triangle {
        /// The three vertices in call order
        points: [Point2; 3],
        /// Packed color
        color: PackedColor,
    },
    /// Line segment
    Line {
        /// `[start, end]`
        points: [Point2; 2],
        /// Thickness in UI units
        thickness: f32,
        /// Packed color
        color: PackedColor,
    },
    /// Region of an image
    ImageSlice {
        /// Host image id
        image_id: String,
        /// Source region in image pixels
        src_rect: UiRect,
    },
}

/// A staged draw command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiCommand {
    /// Actor that issued the command
    pub actor: ActorId,
    /// Destination box in UI-space. Bounding box for circle, triangle and line.
    pub rect: UiRect,
    /// Opacity, 0.0 to 1.0
    pub opacity: f32,
    /// Fill, outline or dashed outline
    pub style: DrawStyle,
    /// Variant data
    pub payload: UiPayload,
}

impl UiCommand {
    /// Command discriminant
    pub const fn kind(&self) -> UiCommandKind {
        match &self.payload {
            UiPayload::Text { .. } => UiCommandKind::Text,
            UiPayload::Rect { .. } => UiCommandKind::Rect,
            UiPayload::Button { .. } => UiCommandKind::Button,
            UiPayload::Image { .. } => UiCommandKind::Image,
            UiPayload::Circle { .. } => UiCommandKind::Circle,
            UiPayload::Triangle { .. } => UiCommandKind::Triangle,
            UiPayload::Line { .. } => UiCommandKind::Line,
            UiPayload::ImageSlice { .. } => UiCommandKind::ImageSlice,
        }
    }

    /// Point payload; empty for variants without one
    pub fn points(&self) -> &[Point2] {
        match &self.payload {
            UiPayload::Circle { points, .. } => points.as_slice(),
            UiPayload::Triangle { points, .. } => points.as_slice(),
            UiPayload::Line { points, .. } => points.as_slice(),
            _ => &[],
        }
    }

    /// Text of Text and Button commands
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            UiPayload::Text { text, .. } | UiPayload::Button { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Image id of Image and ImageSlice commands
    pub fn image_id(&self) -> Option<&str> {
        match &self.payload {
            UiPayload::Image { image_id } | UiPayload::ImageSlice { image_id, .. } => Some(image_id.as_str()),
            _ => None,
        }
    }

    /// Source region of ImageSlice commands
    pub const fn src_rect(&self) -> Option<UiRect> {
        match &self.payload {
            UiPayload::ImageSlice { src_rect, .. } => Some(*src_rect),
            _ => None,
        }
    }

    /// Message to deliver to the issuing actor when the host reports a click
    ///
    /// `None` for non-button commands and buttons without a click message.
    pub fn click_message(&self) -> Option<ActorMessage> {
        match &self.payload {
            UiPayload::Button {
                click_message_name: Some(name),
                click_message_arg_json,
                ..
            } => Some(ActorMessage::new(self.actor, name.clone(), click_message_arg_json.clone())),
            _ => None,
        }
    }
}
