//! Text shape.

use super::{Rgba, Scale, ShapeId, ShapeTrait, ShapeUpdate};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f64 = 0.6;
/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// A single text label anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub(crate) id: ShapeId,
    #[serde(flatten)]
    pub position: Point,
    #[serde(rename = "text")]
    pub content: String,
    pub font_size: f64,
    pub fill: Rgba,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

impl Text {
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    pub fn new(id: ShapeId, position: Point, content: impl Into<String>, fill: Rgba) -> Self {
        Self {
            id,
            position,
            content: content.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            fill,
            scale: None,
        }
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn approximate_width(&self) -> f64 {
        let widest = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        widest as f64 * self.font_size * CHAR_WIDTH_FACTOR
    }

    fn approximate_height(&self) -> f64 {
        let mut lines = self.content.lines().count().max(1);
        if self.content.ends_with('\n') {
            lines += 1;
        }
        lines as f64 * self.font_size * LINE_HEIGHT_FACTOR
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.approximate_width(),
            self.position.y + self.approximate_height(),
        )
    }

    fn apply(&mut self, update: &ShapeUpdate) {
        update.apply_position(&mut self.position);
        if let Some(text) = &update.text {
            self.content.clone_from(text);
        }
        if let Some(size) = update.font_size {
            self.font_size = size;
        }
        if let Some(fill) = update.fill {
            self.fill = fill;
        }
        update.apply_scale(&mut self.scale);
    }
}
