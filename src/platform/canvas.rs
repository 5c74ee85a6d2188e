/// Layered drawing sink. Shapes are recorded per layer in submission order
/// and replayed onto a `Renderer` in a fixed layer order.

use crate::core::config;
use crate::core::types::{Color, Point};
use crate::graph::geometry::Shape;
use crate::platform::renderer::{Renderer, Stroke};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub shape: Shape,
    pub color: Color,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
}

/// Append-only list of shapes painted the same way.
#[derive(Debug, Clone)]
pub struct ShapeLayer {
    mode: PaintMode,
    items: Vec<DrawItem>,
}

impl ShapeLayer {
    pub fn new(mode: PaintMode) -> Self {
        Self {
            mode,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, shape: Shape, color: Color, stroke: Stroke) {
        self.items.push(DrawItem {
            shape,
            color,
            stroke,
        });
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn paint(&self, renderer: &dyn Renderer) {
        for item in &self.items {
            match self.mode {
                PaintMode::Fill => renderer.fill_shape(&item.shape, item.color),
                PaintMode::Stroke => renderer.stroke_shape(&item.shape, item.color, item.stroke),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub color: Color,
}

#[derive(Debug, Clone, Default)]
pub struct TextLayer {
    labels: Vec<Label>,
}

impl TextLayer {
    pub fn add(&mut self, text: &str, position: Point, color: Color) {
        self.labels.push(Label {
            text: text.to_string(),
            position,
            color,
        });
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Base, selection, flag and text layers for both roles.
///
/// Paint order: edges, nodes, edge selection, node selection, edge flags,
/// node flags, text. Later layers draw on top regardless of the order in
/// which shapes were submitted across layers.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub edges: ShapeLayer,
    pub nodes: ShapeLayer,
    pub edge_selection: ShapeLayer,
    pub node_selection: ShapeLayer,
    pub edge_flags: ShapeLayer,
    pub node_flags: ShapeLayer,
    pub text: TextLayer,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            edges: ShapeLayer::new(PaintMode::Stroke),
            nodes: ShapeLayer::new(PaintMode::Fill),
            edge_selection: ShapeLayer::new(PaintMode::Stroke),
            node_selection: ShapeLayer::new(PaintMode::Stroke),
            edge_flags: ShapeLayer::new(PaintMode::Stroke),
            node_flags: ShapeLayer::new(PaintMode::Stroke),
            text: TextLayer::default(),
        }
    }

    fn shape_layers(&self) -> [&ShapeLayer; 6] {
        [
            &self.edges,
            &self.nodes,
            &self.edge_selection,
            &self.node_selection,
            &self.edge_flags,
            &self.node_flags,
        ]
    }

    fn shape_layers_mut(&mut self) -> [&mut ShapeLayer; 6] {
        [
            &mut self.edges,
            &mut self.nodes,
            &mut self.edge_selection,
            &mut self.node_selection,
            &mut self.edge_flags,
            &mut self.node_flags,
        ]
    }

    /// Number of recorded shapes and labels.
    pub fn len(&self) -> usize {
        self.shape_layers().iter().map(|l| l.len()).sum::<usize>() + self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append every layer of `other` after the matching layer of `self`.
    /// Merging per-worker canvases in a fixed order keeps paint order stable.
    pub fn append(&mut self, other: Canvas) {
        let Canvas {
            edges,
            nodes,
            edge_selection,
            node_selection,
            edge_flags,
            node_flags,
            text,
        } = other;
        let sources = [
            edges,
            nodes,
            edge_selection,
            node_selection,
            edge_flags,
            node_flags,
        ];
        for (dst, src) in self.shape_layers_mut().into_iter().zip(sources) {
            dst.items.extend(src.items);
        }
        self.text.labels.extend(text.labels);
    }

    /// Replay every layer onto `renderer`.
    pub fn paint(&self, renderer: &dyn Renderer) {
        for layer in self.shape_layers() {
            layer.paint(renderer);
        }
        for label in &self.text.labels {
            renderer.draw_text(label.position, &label.text, config::LABEL_FONT_SIZE, label.color);
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::types::Vec2;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Fill(Shape, Color),
        Stroke(Shape, Color, f64),
        Text(String, Color),
    }

    /// Renderer that records the calls it receives.
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub calls: RefCell<Vec<Call>>,
    }

    impl Renderer for RecordingRenderer {
        fn begin_frame(&mut self, _width: i32, _height: i32) {}

        fn end_frame(&mut self) {}

        fn fill_shape(&self, shape: &Shape, color: Color) {
            self.calls.borrow_mut().push(Call::Fill(*shape, color));
        }

        fn stroke_shape(&self, shape: &Shape, color: Color, stroke: Stroke) {
            self.calls
                .borrow_mut()
                .push(Call::Stroke(*shape, color, stroke.width));
        }

        fn draw_text(&self, _position: Point, text: &str, _size: f64, color: Color) {
            self.calls
                .borrow_mut()
                .push(Call::Text(text.to_string(), color));
        }
    }

    fn circle(x: f64) -> Shape {
        Shape::Circle {
            top_left: Vec2::new(x, 0.0),
            diameter: 1.0,
        }
    }

    #[test]
    fn test_paint_order_is_fixed() {
        let mut canvas = Canvas::new();
        canvas.text.add("label", Vec2::default(), Color::BLACK);
        canvas.node_flags.add(circle(5.0), Color::BLUE, Stroke::new(2.0));
        canvas.nodes.add(circle(1.0), Color::BLACK, Stroke::new(0.0));
        canvas.edges.add(circle(0.0), Color::BLUE, Stroke::round(1.0));

        let renderer = RecordingRenderer::default();
        canvas.paint(&renderer);
        let calls = renderer.calls.into_inner();
        assert_eq!(
            calls,
            vec![
                Call::Stroke(circle(0.0), Color::BLUE, 1.0),
                Call::Fill(circle(1.0), Color::BLACK),
                Call::Stroke(circle(5.0), Color::BLUE, 2.0),
                Call::Text("label".to_string(), Color::BLACK),
            ]
        );
    }

    #[test]
    fn test_layer_preserves_submission_order() {
        let mut layer = ShapeLayer::new(PaintMode::Fill);
        for i in 0..4 {
            layer.add(circle(i as f64), Color::BLACK, Stroke::new(0.0));
        }
        let xs: Vec<f64> = layer
            .items()
            .iter()
            .map(|item| match item.shape {
                Shape::Circle { top_left, .. } => top_left.x,
                Shape::Quad { .. } => f64::NAN,
            })
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_append_merges_layer_by_layer() {
        let mut a = Canvas::new();
        a.nodes.add(circle(1.0), Color::BLACK, Stroke::new(0.0));
        a.text.add("a", Vec2::default(), Color::BLACK);
        let mut b = Canvas::new();
        b.nodes.add(circle(2.0), Color::BLACK, Stroke::new(0.0));
        b.edges.add(circle(3.0), Color::BLACK, Stroke::new(1.0));
        b.text.add("b", Vec2::default(), Color::BLUE);

        a.append(b);
        assert_eq!(a.nodes.len(), 2);
        assert_eq!(a.nodes.items()[1].shape, circle(2.0));
        assert_eq!(a.edges.len(), 1);
        let texts: Vec<&str> = a.text.labels().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_empty_canvas() {
        let canvas = Canvas::default();
        assert!(canvas.is_empty());
        let renderer = RecordingRenderer::default();
        canvas.paint(&renderer);
        assert!(renderer.calls.borrow().is_empty());
    }
}
