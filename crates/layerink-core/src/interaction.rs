//! Pointer interaction state machine.
//!
//! Turns raw pointer events into document edits according to the current
//! tool. Each handler returns an [`Action`] telling the host what happened.

use crate::document::Document;
use crate::error::EditError;
use crate::layer::LayerId;
use crate::shapes::{Circle, Freehand, Rectangle, Shape, ShapeId, ShapeUpdate, Text};
use crate::tools::ToolKind;
use kurbo::Point;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// Settings, history or layer state changed; re-read the document.
    Changed,
    Selected(Option<ShapeId>),
    ShapeCreated(ShapeId),
    /// A shape created by the current gesture changed size.
    ShapeResized(ShapeId),
    ShapeUpdated(ShapeId),
    ShapeDeleted(ShapeId),
    LayerAdded(LayerId),
    /// The host should ask the operator for text, then call
    /// [`Interaction::text_input`] or [`Interaction::text_cancelled`].
    TextRequested { at: Point },
    Rejected(EditError),
}

impl Action {
    /// The operator-facing message, if this action carries one.
    pub fn notice(&self) -> Option<String> {
        match self {
            Action::Rejected(err) if err.is_notice() => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Shapes sized by dragging after pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Rectangle,
    Circle,
}

/// Where the current gesture stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Points collected so far; nothing is in the document yet.
    DrawingFreehand { points: Vec<Point> },
    /// A provisional shape was added at `origin` and follows the pointer.
    /// `step` is the undo step of the active layer holding its latest size.
    DrawingShape {
        id: ShapeId,
        origin: Point,
        kind: DragKind,
        step: usize,
    },
    /// Waiting for the operator to type the text to place at `at`.
    TextPrompting { at: Point },
}

/// Cursor the host should show for the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Crosshair,
    Move,
}

/// Gesture state for one drawing surface.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
    /// Outcome of a gesture ended early by the last pointer-down.
    interrupted: Option<Action>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// What happened to the gesture the last pointer-down cut short, if any.
    pub fn take_interrupted(&mut self) -> Option<Action> {
        self.interrupted.take()
    }

    /// Check if a drawing gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self.state,
            InteractionState::DrawingFreehand { .. } | InteractionState::DrawingShape { .. }
        )
    }

    /// Points of the stroke being drawn, for live preview.
    pub fn preview_points(&self) -> &[Point] {
        match &self.state {
            InteractionState::DrawingFreehand { points } => points,
            _ => &[],
        }
    }

    /// Cursor for a pointer hovering at `point`.
    pub fn cursor(&self, doc: &Document, point: Point) -> CursorHint {
        if self.is_drawing() {
            CursorHint::Crosshair
        } else if doc.hit_test(point).is_some() {
            CursorHint::Move
        } else {
            CursorHint::Default
        }
    }

    /// Pointer pressed. Selects a hit shape of the active layer, otherwise
    /// starts a gesture for the current tool.
    pub fn pointer_down(&mut self, doc: &mut Document, point: Point) -> Action {
        self.interrupted = None;
        if self.state != InteractionState::Idle {
            log::debug!("Pointer down during {:?}; ending it first", self.state);
            let ended = self.finish(doc);
            if let Action::Rejected(err) = &ended {
                log::warn!("Interrupted gesture rejected: {err}");
            }
            self.interrupted = Some(ended).filter(|action| *action != Action::None);
        }

        if let Some(id) = doc.hit_test(point) {
            return match doc.select_shape(Some(id)) {
                Ok(()) => Action::Selected(Some(id)),
                Err(err) => Action::Rejected(err),
            };
        }

        match doc.tool() {
            ToolKind::Text => {
                self.state = InteractionState::TextPrompting { at: point };
                Action::TextRequested { at: point }
            }
            ToolKind::Freehand => {
                self.state = InteractionState::DrawingFreehand {
                    points: vec![point],
                };
                Action::None
            }
            ToolKind::Rectangle => self.start_drag(doc, point, DragKind::Rectangle),
            ToolKind::Circle => self.start_drag(doc, point, DragKind::Circle),
        }
    }

    /// Add a zero-size shape at `origin` to be sized by the following moves.
    fn start_drag(&mut self, doc: &mut Document, origin: Point, kind: DragKind) -> Action {
        let color = doc.stroke_color();
        let added = doc.next_shape_id().and_then(|id| {
            let shape: Shape = match kind {
                DragKind::Rectangle => Rectangle::new(id, origin, 0.0, 0.0, color).into(),
                DragKind::Circle => Circle::new(id, origin, 0.0, color).into(),
            };
            doc.add_shape(shape)
        });
        match added {
            Ok(id) => {
                let step = doc.active_layer().map_or(0, |layer| layer.history().cursor());
                self.state = InteractionState::DrawingShape {
                    id,
                    origin,
                    kind,
                    step,
                };
                Action::ShapeCreated(id)
            }
            Err(err) => Action::Rejected(err),
        }
    }

    /// Pointer moved. Ignored unless a drawing gesture is in progress.
    pub fn pointer_move(&mut self, doc: &mut Document, point: Point) -> Action {
        match &mut self.state {
            InteractionState::DrawingFreehand { points } => {
                points.push(point);
                Action::None
            }
            InteractionState::DrawingShape {
                id,
                origin,
                kind,
                step,
            } => {
                let id = *id;
                let update = match kind {
                    DragKind::Rectangle => ShapeUpdate::size(point.x - origin.x, point.y - origin.y),
                    DragKind::Circle => ShapeUpdate::radius(point.distance(*origin)),
                };
                match doc.amend_shape(id, &update, *step) {
                    Ok(moved) => {
                        *step = moved;
                        Action::ShapeResized(id)
                    }
                    Err(err) => {
                        // The provisional shape went away under the gesture.
                        log::debug!("Abandoning drag of shape {id}: {err}");
                        self.state = InteractionState::Idle;
                        Action::Rejected(err)
                    }
                }
            }
            InteractionState::Idle | InteractionState::TextPrompting { .. } => Action::None,
        }
    }

    /// Pointer released. Commits a freehand stroke or ends shape sizing.
    pub fn pointer_up(&mut self, doc: &mut Document) -> Action {
        if matches!(self.state, InteractionState::TextPrompting { .. }) {
            return Action::None;
        }
        self.finish(doc)
    }

    /// End whatever gesture is in progress. A pending text prompt is cancelled.
    fn finish(&mut self, doc: &mut Document) -> Action {
        match std::mem::take(&mut self.state) {
            InteractionState::DrawingFreehand { points } => {
                let (color, width) = (doc.stroke_color(), doc.stroke_width());
                let added = doc
                    .next_shape_id()
                    .and_then(|id| doc.add_shape(Freehand::new(id, points, color, width).into()));
                match added {
                    Ok(id) => Action::ShapeCreated(id),
                    Err(err) => Action::Rejected(err),
                }
            }
            InteractionState::DrawingShape { id, .. } => {
                log::debug!("Finished sizing shape {id}");
                Action::None
            }
            InteractionState::TextPrompting { at } => {
                log::debug!("Text prompt at {at:?} cancelled");
                Action::None
            }
            InteractionState::Idle => Action::None,
        }
    }

    /// The operator answered a text prompt. Empty text places nothing.
    pub fn text_input(&mut self, doc: &mut Document, text: &str) -> Action {
        let InteractionState::TextPrompting { at } = self.state else {
            return Action::None;
        };
        self.state = InteractionState::Idle;
        if text.is_empty() {
            return Action::None;
        }
        let (color, font_size) = (doc.stroke_color(), doc.config().font_size);
        let added = doc.next_shape_id().and_then(|id| {
            let shape = Text::new(id, at, text, color).with_font_size(font_size);
            doc.add_shape(shape.into())
        });
        match added {
            Ok(id) => Action::ShapeCreated(id),
            Err(err) => Action::Rejected(err),
        }
    }

    /// The operator dismissed a text prompt.
    pub fn text_cancelled(&mut self) -> Action {
        if matches!(self.state, InteractionState::TextPrompting { .. }) {
            self.state = InteractionState::Idle;
        }
        Action::None
    }

    /// The renderer delivered a click on a shape. Only shapes of the active
    /// layer can be selected this way.
    pub fn shape_clicked(&mut self, doc: &mut Document, id: ShapeId) -> Action {
        if let Err(err) = doc.editable_shape(id) {
            return Action::Rejected(err);
        }
        match doc.select_shape(Some(id)) {
            Ok(()) => Action::Selected(Some(id)),
            Err(err) => Action::Rejected(err),
        }
    }

    /// The renderer finished a drag or transform and reports the final
    /// geometry of the shape.
    pub fn transform_end(&mut self, doc: &mut Document, id: ShapeId, update: &ShapeUpdate) -> Action {
        match doc.update_shape(id, update) {
            Ok(()) => Action::ShapeUpdated(id),
            Err(err) => Action::Rejected(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Scale;

    fn doc_with_tool(tool: ToolKind) -> Document {
        let mut doc = Document::default();
        doc.set_tool(tool);
        doc
    }

    fn active_shapes(doc: &Document) -> &[Shape] {
        doc.active_layer().unwrap().shapes()
    }

    #[test]
    fn test_freehand_stroke() {
        let mut doc = doc_with_tool(ToolKind::Freehand);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        input.pointer_move(&mut doc, Point::new(1.0, 1.0));
        input.pointer_move(&mut doc, Point::new(2.0, 2.0));
        assert_eq!(input.preview_points().len(), 3);
        assert!(active_shapes(&doc).is_empty());

        let action = input.pointer_up(&mut doc);
        assert!(matches!(action, Action::ShapeCreated(_)));

        let shapes = active_shapes(&doc);
        assert_eq!(shapes.len(), 1);
        let Shape::Freehand(stroke) = &shapes[0] else {
            panic!("expected a freehand stroke");
        };
        assert_eq!(stroke.flattened(), vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0]);
        assert_eq!(stroke.stroke.to_hex(), "#6602f2");
        assert!((stroke.stroke_width - 5.0).abs() < f64::EPSILON);
        assert_eq!(input.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_rectangle_drag_is_one_undo_step() {
        let mut doc = doc_with_tool(ToolKind::Rectangle);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(10.0, 10.0));
        input.pointer_move(&mut doc, Point::new(30.0, 20.0));
        input.pointer_move(&mut doc, Point::new(50.0, 40.0));
        input.pointer_up(&mut doc);

        let shapes = active_shapes(&doc).to_vec();
        assert_eq!(shapes.len(), 1);
        let Shape::Rectangle(rect) = &shapes[0] else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.position, Point::new(10.0, 10.0));
        assert!((rect.width - 40.0).abs() < f64::EPSILON);
        assert!((rect.height - 30.0).abs() < f64::EPSILON);

        assert!(doc.undo());
        assert!(active_shapes(&doc).is_empty());
        assert!(doc.redo());
        assert_eq!(active_shapes(&doc), shapes.as_slice());
    }

    #[test]
    fn test_backward_drag_then_hit() {
        let mut doc = doc_with_tool(ToolKind::Rectangle);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(100.0, 100.0));
        input.pointer_move(&mut doc, Point::new(50.0, 50.0));
        input.pointer_up(&mut doc);
        let id = active_shapes(&doc)[0].id();

        let action = input.pointer_down(&mut doc, Point::new(70.0, 70.0));
        assert_eq!(action, Action::Selected(Some(id)));
        assert_eq!(doc.selected_shape(), Some(id));
        assert_eq!(active_shapes(&doc).len(), 1);
        assert_eq!(input.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_circle_radius_follows_pointer() {
        let mut doc = doc_with_tool(ToolKind::Circle);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        let action = input.pointer_move(&mut doc, Point::new(3.0, 4.0));
        assert!(matches!(action, Action::ShapeResized(_)));
        input.pointer_up(&mut doc);

        let Shape::Circle(circle) = &active_shapes(&doc)[0] else {
            panic!("expected a circle");
        };
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_moves_outside_gesture_are_ignored() {
        let mut doc = Document::default();
        let mut input = Interaction::new();
        assert_eq!(input.pointer_move(&mut doc, Point::new(5.0, 5.0)), Action::None);
        assert_eq!(input.pointer_up(&mut doc), Action::None);
        assert!(active_shapes(&doc).is_empty());
    }

    #[test]
    fn test_text_prompt() {
        let mut doc = doc_with_tool(ToolKind::Text);
        let mut input = Interaction::new();

        let at = Point::new(12.0, 34.0);
        assert_eq!(input.pointer_down(&mut doc, at), Action::TextRequested { at });
        assert_eq!(input.pointer_up(&mut doc), Action::None);
        assert_eq!(input.state(), &InteractionState::TextPrompting { at });

        let action = input.text_input(&mut doc, "hello");
        assert!(matches!(action, Action::ShapeCreated(_)));
        let Shape::Text(text) = &active_shapes(&doc)[0] else {
            panic!("expected text");
        };
        assert_eq!(text.content, "hello");
        assert_eq!(text.position, at);
        assert!((text.font_size - 20.0).abs() < f64::EPSILON);
        assert_eq!(text.fill, doc.stroke_color());
    }

    #[test]
    fn test_empty_or_cancelled_text_adds_nothing() {
        let mut doc = doc_with_tool(ToolKind::Text);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::ZERO);
        assert_eq!(input.text_input(&mut doc, ""), Action::None);
        input.pointer_down(&mut doc, Point::ZERO);
        input.text_cancelled();
        assert_eq!(input.state(), &InteractionState::Idle);
        assert!(active_shapes(&doc).is_empty());
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_stale_freehand_committed_on_pointer_down() {
        let mut doc = doc_with_tool(ToolKind::Freehand);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        input.pointer_move(&mut doc, Point::new(1.0, 0.0));
        // The matching pointer-up never arrived.
        input.pointer_down(&mut doc, Point::new(50.0, 50.0));

        assert_eq!(active_shapes(&doc).len(), 1);
        let stroke = active_shapes(&doc)[0].id();
        assert_eq!(input.take_interrupted(), Some(Action::ShapeCreated(stroke)));
        assert_eq!(input.take_interrupted(), None);
        assert_eq!(input.preview_points(), &[Point::new(50.0, 50.0)]);
    }

    #[test]
    fn test_stale_drag_kept_on_pointer_down() {
        let mut doc = doc_with_tool(ToolKind::Rectangle);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        input.pointer_move(&mut doc, Point::new(10.0, 10.0));
        let first = active_shapes(&doc)[0].id();

        // No pointer-up; pressing inside the sized rectangle selects it.
        let action = input.pointer_down(&mut doc, Point::new(5.0, 5.0));
        assert_eq!(action, Action::Selected(Some(first)));
        assert_eq!(input.state(), &InteractionState::Idle);
        assert_eq!(input.take_interrupted(), None);

        // Pressing elsewhere mid-drag starts the next rectangle.
        input.pointer_down(&mut doc, Point::new(100.0, 100.0));
        input.pointer_move(&mut doc, Point::new(120.0, 130.0));
        let action = input.pointer_down(&mut doc, Point::new(200.0, 200.0));
        assert!(matches!(action, Action::ShapeCreated(_)));
        assert!(matches!(input.state(), InteractionState::DrawingShape { .. }));

        let shapes = active_shapes(&doc);
        assert_eq!(shapes.len(), 3);
        let Shape::Rectangle(second) = &shapes[1] else {
            panic!("expected a rectangle");
        };
        assert!((second.width - 20.0).abs() < f64::EPSILON);
        assert!((second.height - 30.0).abs() < f64::EPSILON);
        assert!(doc.is_consistent());
    }

    #[test]
    fn test_stale_text_prompt_cancelled_on_pointer_down() {
        let mut doc = doc_with_tool(ToolKind::Text);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(1.0, 1.0));
        let at = Point::new(40.0, 40.0);
        assert_eq!(input.pointer_down(&mut doc, at), Action::TextRequested { at });
        assert_eq!(input.state(), &InteractionState::TextPrompting { at });
        assert_eq!(input.take_interrupted(), None);

        doc.set_tool(ToolKind::Freehand);
        input.pointer_down(&mut doc, Point::new(60.0, 60.0));
        assert_eq!(input.text_input(&mut doc, "late"), Action::None);
        assert!(active_shapes(&doc).is_empty());
        assert_eq!(input.preview_points(), &[Point::new(60.0, 60.0)]);
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_drag_after_other_edit_keeps_that_edit() {
        let mut doc = doc_with_tool(ToolKind::Rectangle);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        input.pointer_move(&mut doc, Point::new(10.0, 10.0));
        input.pointer_up(&mut doc);
        let a = active_shapes(&doc)[0].id();

        input.pointer_down(&mut doc, Point::new(100.0, 100.0));
        let update = ShapeUpdate::position(Point::new(50.0, 0.0));
        assert_eq!(input.transform_end(&mut doc, a, &update), Action::ShapeUpdated(a));
        input.pointer_move(&mut doc, Point::new(140.0, 130.0));
        input.pointer_up(&mut doc);

        let position = |doc: &Document| match &active_shapes(doc)[0] {
            Shape::Rectangle(rect) => rect.position,
            other => panic!("expected a rectangle, got {other:?}"),
        };
        let width = |doc: &Document| match &active_shapes(doc)[1] {
            Shape::Rectangle(rect) => rect.width,
            other => panic!("expected a rectangle, got {other:?}"),
        };
        assert!((width(&doc) - 40.0).abs() < f64::EPSILON);

        // Undoing the resize leaves the move of A in place.
        assert!(doc.undo());
        assert_eq!(active_shapes(&doc).len(), 2);
        assert_eq!(position(&doc), Point::new(50.0, 0.0));
        assert!(width(&doc).abs() < f64::EPSILON);

        assert!(doc.undo());
        assert_eq!(position(&doc), Point::new(0.0, 0.0));
        assert_eq!(active_shapes(&doc).len(), 2);

        assert!(doc.undo());
        assert_eq!(active_shapes(&doc).len(), 1);
        assert!(doc.is_consistent());
    }

    #[test]
    fn test_last_shape_id_does_not_break_drawing() {
        let mut doc = doc_with_tool(ToolKind::Rectangle);
        let mut input = Interaction::new();

        let last = Rectangle::new(ShapeId(u64::MAX), Point::ZERO, 5.0, 5.0, doc.stroke_color());
        assert_eq!(
            doc.add_shape(last.into()),
            Err(EditError::ShapeIdOverflow(ShapeId(u64::MAX)))
        );

        let action = input.pointer_down(&mut doc, Point::new(10.0, 10.0));
        assert_eq!(action, Action::ShapeCreated(ShapeId(1)));
        assert_eq!(active_shapes(&doc).len(), 1);
    }

    #[test]
    fn test_exhausted_ids_reject_new_shapes() {
        let mut doc = Document::new(crate::config::EditorConfig {
            first_shape_id: u64::MAX,
            ..Default::default()
        });
        let mut input = Interaction::new();

        let action = input.pointer_down(&mut doc, Point::new(10.0, 10.0));
        assert_eq!(action, Action::Rejected(EditError::ShapeIdsExhausted));
        assert_eq!(input.state(), &InteractionState::Idle);

        doc.set_tool(ToolKind::Freehand);
        input.pointer_down(&mut doc, Point::new(10.0, 10.0));
        let action = input.pointer_down(&mut doc, Point::new(20.0, 20.0));
        assert_eq!(action, Action::None);
        assert_eq!(
            input.take_interrupted(),
            Some(Action::Rejected(EditError::ShapeIdsExhausted))
        );
        assert!(active_shapes(&doc).is_empty());
        assert!(doc.is_consistent());
    }

    #[test]
    fn test_undo_mid_drag_abandons_gesture() {
        let mut doc = doc_with_tool(ToolKind::Rectangle);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        doc.undo();
        let action = input.pointer_move(&mut doc, Point::new(10.0, 10.0));
        assert!(matches!(action, Action::Rejected(EditError::ShapeNotFound(_))));
        assert_eq!(input.state(), &InteractionState::Idle);
        assert!(doc.is_consistent());
    }

    #[test]
    fn test_shape_clicked_in_other_layer() {
        let mut doc = doc_with_tool(ToolKind::Rectangle);
        let mut input = Interaction::new();
        let first = doc.active_layer_id();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        input.pointer_move(&mut doc, Point::new(10.0, 10.0));
        input.pointer_up(&mut doc);
        let id = active_shapes(&doc)[0].id();

        doc.add_layer();
        let action = input.shape_clicked(&mut doc, id);
        assert_eq!(
            action.notice().as_deref(),
            Some("You can only interact with shapes in the active layer.")
        );
        assert!(doc.selected_shape().is_none());

        doc.set_active_layer(first).unwrap();
        assert_eq!(input.shape_clicked(&mut doc, id), Action::Selected(Some(id)));
    }

    #[test]
    fn test_transform_end_applies_geometry() {
        let mut doc = doc_with_tool(ToolKind::Circle);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        input.pointer_move(&mut doc, Point::new(0.0, 5.0));
        input.pointer_up(&mut doc);
        let id = active_shapes(&doc)[0].id();

        let update = ShapeUpdate::position(Point::new(20.0, 20.0)).with_scale(Scale::new(2.0, 0.5));
        assert_eq!(input.transform_end(&mut doc, id, &update), Action::ShapeUpdated(id));
        let Shape::Circle(circle) = &active_shapes(&doc)[0] else {
            panic!("expected a circle");
        };
        assert_eq!(circle.center, Point::new(20.0, 20.0));
        assert_eq!(circle.scale, Some(Scale::new(2.0, 0.5)));
    }

    #[test]
    fn test_freehand_not_hit_by_pointer_down() {
        let mut doc = doc_with_tool(ToolKind::Freehand);
        let mut input = Interaction::new();

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        input.pointer_move(&mut doc, Point::new(10.0, 10.0));
        input.pointer_up(&mut doc);

        // Starting on top of the first stroke draws a second one.
        input.pointer_down(&mut doc, Point::new(5.0, 5.0));
        input.pointer_up(&mut doc);
        assert_eq!(active_shapes(&doc).len(), 2);
    }

    #[test]
    fn test_cursor_hint() {
        let mut doc = doc_with_tool(ToolKind::Rectangle);
        let mut input = Interaction::new();
        assert_eq!(input.cursor(&doc, Point::new(5.0, 5.0)), CursorHint::Default);

        input.pointer_down(&mut doc, Point::new(0.0, 0.0));
        assert_eq!(input.cursor(&doc, Point::new(5.0, 5.0)), CursorHint::Crosshair);
        input.pointer_move(&mut doc, Point::new(10.0, 10.0));
        input.pointer_up(&mut doc);
        assert_eq!(input.cursor(&doc, Point::new(5.0, 5.0)), CursorHint::Move);
    }
}
