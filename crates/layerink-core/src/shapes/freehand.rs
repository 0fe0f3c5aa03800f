//! Freehand stroke shape.

use super::{Rgba, Scale, ShapeId, ShapeTrait, ShapeUpdate};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A freehand stroke (series of points).
///
/// Points are kept as pairs internally and exposed flattened as alternating
/// `x, y` values, so the flattened form always has even length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freehand {
    pub(crate) id: ShapeId,
    /// Translation applied to every point (moved by drag-end updates).
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(with = "flat_points")]
    pub points: Vec<Point>,
    pub stroke: Rgba,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

impl Freehand {
    pub fn new(id: ShapeId, points: Vec<Point>, stroke: Rgba, stroke_width: f64) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            points,
            stroke,
            stroke_width,
            scale: None,
        }
    }

    /// Build from alternating `x, y` values. Odd-length input is rejected.
    pub fn from_flat(id: ShapeId, values: &[f64], stroke: Rgba, stroke_width: f64) -> Option<Self> {
        let points = flat_points::unflatten(values)?;
        Some(Self::new(id, points, stroke, stroke_width))
    }

    /// Points as alternating `x, y` values.
    pub fn flattened(&self) -> Vec<f64> {
        flat_points::flatten(&self.points)
    }

    /// Points with the stroke's translation applied.
    pub fn absolute_points(&self) -> impl Iterator<Item = Point> + '_ {
        let offset = Vec2::new(self.x, self.y);
        self.points.iter().map(move |p| *p + offset)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ShapeTrait for Freehand {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let mut points = self.absolute_points();
        let Some(first) = points.next() else {
            return Rect::ZERO;
        };
        let rect = points.fold(Rect::from_points(first, first), |rect, p| rect.union_pt(p));
        let half = self.stroke_width / 2.0;
        rect.inflate(half, half)
    }

    fn apply(&mut self, update: &ShapeUpdate) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(stroke) = update.stroke {
            self.stroke = stroke;
        }
        if let Some(width) = update.stroke_width {
            self.stroke_width = width;
        }
        update.apply_scale(&mut self.scale);
    }
}

/// Serde adapter storing `Vec<Point>` as a flat `[x0, y0, x1, y1, ...]` list.
mod flat_points {
    use kurbo::Point;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn flatten(points: &[Point]) -> Vec<f64> {
        points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    pub fn unflatten(values: &[f64]) -> Option<Vec<Point>> {
        if values.len() % 2 != 0 {
            return None;
        }
        Some(
            values
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect(),
        )
    }

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        flatten(points).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        unflatten(&values).ok_or_else(|| {
            D::Error::custom(format!("odd number of coordinates ({})", values.len()))
        })
    }
}
