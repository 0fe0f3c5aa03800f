//! Export contract: what an image encoder receives.
//!
//! The scene lists the shapes of visible layers in paint order together with
//! the output frame. Building it never touches the document.

use crate::document::Document;
use crate::layer::LayerId;
use crate::shapes::{Rgba, Shape};
use kurbo::{Affine, Rect, Size};
use serde::Serialize;

/// Export framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Resolution multiplier (1 = 1x, 2 = 2x).
    pub scale: f64,
    /// Margin around the content, in document units.
    pub padding: f64,
    pub background: Rgba,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            padding: 20.0,
            background: Rgba::white(),
        }
    }
}

/// Shapes of one visible layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportLayer {
    pub id: LayerId,
    pub name: String,
    pub shapes: Vec<Shape>,
}

/// Everything needed to rasterize the visible document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportScene {
    /// Bottom to top.
    pub layers: Vec<ExportLayer>,
    /// Padded content bounds in document space, `None` when nothing is visible.
    pub bounds: Option<Rect>,
    pub scale: f64,
    pub background: Rgba,
}

impl ExportScene {
    /// Collect the visible layers of a document.
    pub fn from_document(doc: &Document, options: &ExportOptions) -> Self {
        let layers: Vec<ExportLayer> = doc
            .visible_layers()
            .map(|layer| ExportLayer {
                id: layer.id(),
                name: layer.name.clone(),
                shapes: layer.shapes().to_vec(),
            })
            .collect();

        let bounds = layers
            .iter()
            .flat_map(|layer| &layer.shapes)
            .map(Shape::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
            .map(|bounds| bounds.inflate(options.padding, options.padding));

        Self {
            layers,
            bounds,
            scale: options.scale,
            background: options.background,
        }
    }

    /// All shapes in paint order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.layers.iter().flat_map(|layer| &layer.shapes)
    }

    pub fn is_empty(&self) -> bool {
        self.shapes().next().is_none()
    }

    /// Output image size in pixels.
    pub fn output_size(&self) -> Size {
        self.bounds
            .map(|bounds| Size::new(bounds.width() * self.scale, bounds.height() * self.scale))
            .unwrap_or(Size::ZERO)
    }

    /// Maps document space onto the output image.
    pub fn transform(&self) -> Affine {
        match self.bounds {
            Some(bounds) => Affine::scale(self.scale) * Affine::translate((-bounds.x0, -bounds.y0)),
            None => Affine::IDENTITY,
        }
    }
}

/// Turns a scene into encoded image bytes.
pub trait SceneEncoder {
    type Error: std::error::Error;

    /// MIME type of the produced bytes, e.g. `image/png`.
    fn mime_type(&self) -> &'static str;

    /// Encode the scene.
    fn encode(&self, scene: &ExportScene) -> Result<Vec<u8>, Self::Error>;
}
