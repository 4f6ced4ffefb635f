//! A [`DrawContext`] that builds an SVG document.
//!
//! Transforms are applied to coordinates as they are emitted, so the output
//! contains only absolute path data and no `transform` attributes.

use log::trace;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    apply_stroke,
    color::Color,
    draw::{DrawContext, StrokeDefinition, TextMeasure},
    geometry::{Bounds, Point},
};

/// Type alias for boxed SVG nodes.
type SvgNode = Box<dyn svg::Node>;

/// 2D affine transform `[a c e; b d f; 0 0 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Transform {
    const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn apply(&self, point: Point) -> Point {
        Point::new(
            self.a.mul_add(point.x(), self.c.mul_add(point.y(), self.e)),
            self.b.mul_add(point.x(), self.d.mul_add(point.y(), self.f)),
        )
    }

    fn translate(self, offset: Point) -> Self {
        let origin = self.apply(offset);
        Self {
            e: origin.x(),
            f: origin.y(),
            ..self
        }
    }

    fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: self.a.mul_add(cos, self.c * sin),
            b: self.b.mul_add(cos, self.d * sin),
            c: self.c.mul_add(cos, -self.a * sin),
            d: self.d.mul_add(cos, -self.b * sin),
            ..self
        }
    }
}

/// Draws into an in-memory list of SVG nodes.
///
/// # Examples
///
/// ```
/// # use sdfv_core::draw::{DrawContext, SvgContext};
/// # use sdfv_core::color::Color;
/// # use sdfv_core::geometry::{Bounds, Point, Size};
/// let mut ctx = SvgContext::new();
/// let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
/// ctx.fill_rect(bounds, Color::new("white").unwrap());
///
/// let svg = ctx.into_document(bounds).to_string();
/// assert!(svg.contains("<path"));
/// ```
pub struct SvgContext {
    transform: Transform,
    stack: Vec<Transform>,
    path: String,
    nodes: Vec<SvgNode>,
    text: TextMeasure,
}

impl SvgContext {
    /// Creates an empty context that measures text with the default font.
    pub fn new() -> Self {
        Self::with_text_measure(TextMeasure::default())
    }

    /// Creates an empty context that measures and renders text with `text`.
    pub fn with_text_measure(text: TextMeasure) -> Self {
        Self {
            transform: Transform::IDENTITY,
            stack: Vec::new(),
            path: String::new(),
            nodes: Vec::new(),
            text,
        }
    }

    /// Returns true if nothing has been painted yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consumes the context and wraps the painted nodes in a document whose
    /// viewBox is `view`.
    pub fn into_document(self, view: Bounds) -> svg::Document {
        trace!(nodes = self.nodes.len(); "Building SVG document");

        let doc = svg::Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view.min_x(),
                    view.min_y(),
                    view.width(),
                    view.height()
                ),
            )
            .set("width", view.width())
            .set("height", view.height());

        self.nodes.into_iter().fold(doc, |doc, node| doc.add(node))
    }

    fn push_segment(&mut self, command: char, points: &[Point]) {
        self.path.push(' ');
        self.path.push(command);
        for point in points {
            let point = self.transform.apply(*point);
            self.path.push_str(&format!(" {} {}", point.x(), point.y()));
        }
    }

    fn rect_path(&self, bounds: Bounds) -> String {
        let corners = [
            bounds.min_point(),
            Point::new(bounds.max_x(), bounds.min_y()),
            Point::new(bounds.max_x(), bounds.max_y()),
            Point::new(bounds.min_x(), bounds.max_y()),
        ]
        .map(|corner| self.transform.apply(corner));

        format!(
            "M {} {} L {} {} L {} {} L {} {} Z",
            corners[0].x(),
            corners[0].y(),
            corners[1].x(),
            corners[1].y(),
            corners[2].x(),
            corners[2].y(),
            corners[3].x(),
            corners[3].y()
        )
    }

    fn fill_path(&mut self, data: String, color: Color) {
        let path = svg_element::Path::new()
            .set("d", data)
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
            .set("stroke", "none");
        self.nodes.push(Box::new(path));
    }

    fn stroke_path(&mut self, data: String, stroke: &StrokeDefinition) {
        let path = svg_element::Path::new().set("d", data).set("fill", "none");
        let path = apply_stroke!(path, stroke);
        self.nodes.push(Box::new(path));
    }
}

impl Default for SvgContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawContext for SvgContext {
    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, offset: Point) {
        self.transform = self.transform.translate(offset);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform = self.transform.rotate(angle);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn close_path(&mut self) {
        self.push_segment('Z', &[]);
    }

    fn move_to(&mut self, point: Point) {
        self.push_segment('M', &[point]);
    }

    fn line_to(&mut self, point: Point) {
        self.push_segment('L', &[point]);
    }

    fn quadratic_curve_to(&mut self, control: Point, end: Point) {
        self.push_segment('Q', &[control, end]);
    }

    fn bezier_curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.push_segment('C', &[control1, control2, end]);
    }

    fn fill(&mut self, color: Color) {
        if self.path.is_empty() {
            return;
        }
        self.fill_path(self.path.trim_start().to_string(), color);
    }

    fn stroke(&mut self, stroke: &StrokeDefinition) {
        if self.path.is_empty() {
            return;
        }
        self.stroke_path(self.path.trim_start().to_string(), stroke);
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let data = self.rect_path(bounds);
        self.fill_path(data, color);
    }

    fn stroke_rect(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        let data = self.rect_path(bounds);
        self.stroke_path(data, stroke);
    }

    fn fill_text(&mut self, text: &str, position: Point, color: Color) {
        let position = self.transform.apply(position);
        let rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("font-family", self.text.font_family())
            .set("font-size", self.text.font_size())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
            .add(SvgText::new(text));
        self.nodes.push(Box::new(rendered_text));
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.text.width(text)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_transform_translate_then_rotate() {
        let transform = Transform::IDENTITY
            .translate(Point::new(20.0, 0.0))
            .rotate(std::f32::consts::FRAC_PI_2);

        let mapped = transform.apply(Point::new(-6.0, 3.0));
        assert_approx_eq!(f32, mapped.x(), 17.0, epsilon = 1e-4);
        assert_approx_eq!(f32, mapped.y(), -6.0, epsilon = 1e-4);
    }

    #[test]
    fn test_save_restore_transform() {
        let mut ctx = SvgContext::new();
        ctx.save();
        ctx.translate(Point::new(5.0, 5.0));
        ctx.restore();
        ctx.restore();

        assert_eq!(ctx.transform, Transform::IDENTITY);
    }

    #[test]
    fn test_path_is_painted_with_absolute_coordinates() {
        let mut ctx = SvgContext::new();
        ctx.translate(Point::new(10.0, 10.0));
        ctx.begin_path();
        ctx.move_to(Point::new(0.0, 0.0));
        ctx.line_to(Point::new(5.0, 0.0));
        ctx.close_path();
        ctx.stroke(&StrokeDefinition::dashed(Color::default(), 3.0));

        let view = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(20.0, 20.0));
        let svg = ctx.into_document(view).to_string();
        assert!(svg.contains("M 10 10 L 15 10 Z"));
        assert!(svg.contains("stroke-dasharray=\"5,3\""));
        assert!(svg.contains("stroke-width=\"3\""));
    }

    #[test]
    fn test_fill_without_path_is_ignored() {
        let mut ctx = SvgContext::new();
        ctx.begin_path();
        ctx.fill(Color::default());

        assert!(ctx.is_empty());
    }

    #[test]
    fn test_fill_text_emits_text_node() {
        let mut ctx = SvgContext::new();
        ctx.fill_text("tasklet", Point::new(1.0, 2.0), Color::default());

        let view = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(20.0, 20.0));
        let svg = ctx.into_document(view).to_string();
        assert!(svg.contains("tasklet"));
        assert!(svg.contains("<text"));
    }
}
