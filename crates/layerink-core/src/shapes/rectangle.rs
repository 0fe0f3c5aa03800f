//! Rectangle shape.

use super::{Rgba, Scale, ShapeId, ShapeTrait, ShapeUpdate};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Width and height are signed: a rectangle dragged up or left of its origin
/// keeps the origin where the gesture started and stores negative extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Corner where the drawing gesture started, serialized as flat `x`/`y`.
    #[serde(flatten)]
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

impl Rectangle {
    pub fn new(id: ShapeId, position: Point, width: f64, height: f64, fill: Rgba) -> Self {
        Self {
            id,
            position,
            width,
            height,
            fill,
            scale: None,
        }
    }

    /// The covered area with extents normalized to be non-negative.
    pub fn normalized(&self) -> Rect {
        Rect::from_points(
            self.position,
            Point::new(self.position.x + self.width, self.position.y + self.height),
        )
    }

    /// Closed-interval containment on the normalized rectangle.
    pub fn contains(&self, point: Point) -> bool {
        let rect = self.normalized();
        point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.normalized()
    }

    fn apply(&mut self, update: &ShapeUpdate) {
        update.apply_position(&mut self.position);
        if let Some(width) = update.width {
            self.width = width;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(fill) = update.fill {
            self.fill = fill;
        }
        update.apply_scale(&mut self.scale);
    }
}
