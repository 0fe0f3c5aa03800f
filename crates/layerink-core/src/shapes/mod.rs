//! Shape definitions for the drawing surface.

mod circle;
mod freehand;
mod rectangle;
mod text;

pub use circle::Circle;
pub use freehand::Freehand;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::error::ColorParseError;
use crate::tools::ToolKind;
use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA8 color, serialized as a `#rrggbb` / `#rrggbbaa` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::opaque(255, 255, 255)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(hex.to_string());
        let digits = hex.trim().strip_prefix('#').ok_or_else(err)?;
        if !digits.is_ascii() {
            return Err(err());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| err())
        };

        match digits.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = channel(0..1)? * 17;
                let g = channel(1..2)? * 17;
                let b = channel(2..3)? * 17;
                Ok(Self::opaque(r, g, b))
            }
            6 => Ok(Self::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(err()),
        }
    }

    /// Hex form; the alpha pair is omitted when fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Non-uniform scale applied by the renderer's transform handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Identifier of a shape, unique within its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic shape id source, seeded once per editing session.
///
/// Ids are handed out in creation order, so two shapes created within the
/// same instant still get distinct, ordered ids. `u64::MAX` is never issued
/// or accepted: it would leave no successor.
#[derive(Debug, Clone)]
pub struct ShapeIdGenerator {
    next: u64,
}

impl ShapeIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(seed: u64) -> Self {
        Self { next: seed }
    }

    /// Hand out the next id, or `None` once the id space is used up.
    pub fn next_id(&mut self) -> Option<ShapeId> {
        let id = ShapeId(self.next);
        self.next = self.next.checked_add(1)?;
        Some(id)
    }

    /// Make sure an id that entered the document from outside is never
    /// reissued. Returns false, changing nothing, for an id without successor.
    pub fn observe(&mut self, id: ShapeId) -> bool {
        let Some(after) = id.0.checked_add(1) else {
            return false;
        };
        self.next = self.next.max(after);
        true
    }
}

impl Default for ShapeIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sparse attribute update. Only present fields are applied, and only the
/// ones meaningful to the target shape variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl ShapeUpdate {
    /// Move to a new origin / center / anchor.
    pub fn position(point: Point) -> Self {
        Self {
            x: Some(point.x),
            y: Some(point.y),
            ..Self::default()
        }
    }

    /// Signed rectangle size.
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn radius(radius: f64) -> Self {
        Self {
            radius: Some(radius),
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale_x = Some(scale.x);
        self.scale_y = Some(scale.y);
        self
    }

    /// True when the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_position(&self, position: &mut Point) {
        if let Some(x) = self.x {
            position.x = x;
        }
        if let Some(y) = self.y {
            position.y = y;
        }
    }

    pub(crate) fn apply_scale(&self, scale: &mut Option<Scale>) {
        if self.scale_x.is_none() && self.scale_y.is_none() {
            return;
        }
        let current = scale.get_or_insert(Scale::IDENTITY);
        if let Some(x) = self.scale_x {
            current.x = x;
        }
        if let Some(y) = self.scale_y {
            current.y = y;
        }
    }
}

/// Common behavior of every shape variant.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Approximate axis-aligned bounds in document space, scale ignored.
    fn bounds(&self) -> Rect;

    /// Merge a partial update into this shape.
    fn apply(&mut self, update: &ShapeUpdate);
}

/// Tagged union of every shape the editor can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Freehand(Freehand),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Freehand(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    /// The tool that produces this kind of shape.
    pub fn kind(&self) -> ToolKind {
        match self {
            Shape::Rectangle(_) => ToolKind::Rectangle,
            Shape::Circle(_) => ToolKind::Circle,
            Shape::Freehand(_) => ToolKind::Freehand,
            Shape::Text(_) => ToolKind::Text,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Freehand(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn apply(&mut self, update: &ShapeUpdate) {
        match self {
            Shape::Rectangle(s) => s.apply(update),
            Shape::Circle(s) => s.apply(update),
            Shape::Freehand(s) => s.apply(update),
            Shape::Text(s) => s.apply(update),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<Freehand> for Shape {
    fn from(shape: Freehand) -> Self {
        Shape::Freehand(shape)
    }
}

impl From<Text> for Shape {
    fn from(shape: Text) -> Self {
        Shape::Text(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgba::from_hex("#6602f2").unwrap(), Rgba::opaque(0x66, 0x02, 0xf2));
        assert_eq!(Rgba::from_hex("#fff").unwrap(), Rgba::white());
        assert_eq!(Rgba::from_hex("#00000080").unwrap(), Rgba::new(0, 0, 0, 128));
        assert!(Rgba::from_hex("6602f2").is_err());
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Rgba::opaque(0x66, 0x02, 0xf2).to_hex(), "#6602f2");
        assert_eq!(Rgba::new(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_peniko_interop() {
        let color: Color = Rgba::new(10, 20, 30, 40).into();
        assert_eq!(Rgba::from(color), Rgba::new(10, 20, 30, 40));
    }

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = ShapeIdGenerator::new();
        let a = ids.next_id().unwrap();
        let b = ids.next_id().unwrap();
        assert!(b > a);

        assert!(ids.observe(ShapeId(10)));
        assert_eq!(ids.next_id(), Some(ShapeId(11)));

        // Observing an older id does not rewind.
        assert!(ids.observe(ShapeId(3)));
        assert_eq!(ids.next_id(), Some(ShapeId(12)));
    }

    #[test]
    fn test_id_generator_at_end_of_range() {
        let mut ids = ShapeIdGenerator::starting_at(u64::MAX - 1);
        assert_eq!(ids.next_id(), Some(ShapeId(u64::MAX - 1)));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);

        let mut ids = ShapeIdGenerator::new();
        assert!(!ids.observe(ShapeId(u64::MAX)));
        assert_eq!(ids.next_id(), Some(ShapeId(1)));
        assert!(ids.observe(ShapeId(u64::MAX - 1)));
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn test_update_scale_fills_missing_component() {
        let update = ShapeUpdate {
            scale_x: Some(2.0),
            ..ShapeUpdate::default()
        };
        let mut scale = None;
        update.apply_scale(&mut scale);
        assert_eq!(scale, Some(Scale::new(2.0, 1.0)));
    }

    #[test]
    fn test_empty_update() {
        assert!(ShapeUpdate::default().is_empty());
        assert!(!ShapeUpdate::radius(3.0).is_empty());
    }

    #[test]
    fn test_shape_json_is_tagged() {
        let shape = Shape::from(Circle::new(ShapeId(7), Point::new(1.0, 2.0), 3.0, Rgba::black()));
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "circle");
        assert_eq!(json["id"], 7);
        assert_eq!(json["x"], 1.0);
        assert_eq!(json["y"], 2.0);
        assert_eq!(json["fill"], "#000000");
        assert!(json.get("center").is_none());
    }

    #[test]
    fn test_flat_position_records_load() {
        let json = r##"{"type":"rectangle","id":3,"x":10,"y":20,"width":5,"height":-6,"fill":"#6602f2"}"##;
        let Shape::Rectangle(rect) = serde_json::from_str::<Shape>(json).unwrap() else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.position, Point::new(10.0, 20.0));
        assert!((rect.height + 6.0).abs() < f64::EPSILON);

        let json = r##"{"type":"text","id":4,"x":1,"y":2,"text":"hi","fontSize":20,"fill":"#000"}"##;
        let Shape::Text(text) = serde_json::from_str::<Shape>(json).unwrap() else {
            panic!("expected text");
        };
        assert_eq!(text.position, Point::new(1.0, 2.0));
        assert_eq!(text.content, "hi");
    }
}
