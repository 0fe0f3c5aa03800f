//! Circle shape.

use super::{Rgba, Scale, ShapeId, ShapeTrait, ShapeUpdate};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A circle, sized by dragging away from its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    #[serde(flatten)]
    pub center: Point,
    pub radius: f64,
    pub fill: Rgba,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

impl Circle {
    pub fn new(id: ShapeId, center: Point, radius: f64, fill: Rgba) -> Self {
        Self {
            id,
            center,
            radius,
            fill,
            scale: None,
        }
    }

    /// Euclidean containment, boundary included.
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let diameter = 2.0 * self.radius.abs();
        Rect::from_center_size(self.center, Size::new(diameter, diameter))
    }

    fn apply(&mut self, update: &ShapeUpdate) {
        update.apply_position(&mut self.center);
        if let Some(radius) = update.radius {
            self.radius = radius;
        }
        if let Some(fill) = update.fill {
            self.fill = fill;
        }
        update.apply_scale(&mut self.scale);
    }
}
