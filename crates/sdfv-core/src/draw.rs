//! Immediate-mode drawing surface abstraction.
//!
//! Every renderable element emits its output as a sequence of calls against a
//! [`DrawContext`]. The capability set mirrors a minimal 2D canvas: path
//! construction, fills and strokes of rectangles and paths, text with width
//! measurement, and save/restore of the transform stack.
//!
//! Unlike a canvas, style is never ambient: every fill, stroke and text call
//! carries its own [`Color`] or [`StrokeDefinition`]. Drawing one element can
//! therefore never leak fill/stroke/dash/width state into the next one.
//!
//! # Backends
//!
//! - [`RecordingContext`] stores [`DrawCommand`]s, for tests and for hosts that
//!   replay commands onto their own surface.
//! - [`SvgContext`] builds an `svg::Document`.
mod recording;
mod stroke;
mod svg_context;
mod text;

pub mod shapes;

pub use recording::{DrawCommand, RecordingContext};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use svg_context::SvgContext;
pub use text::TextMeasure;

use crate::{
    color::Color,
    geometry::{Bounds, Point},
};

/// The 2D drawing capability set consumed by the renderer.
///
/// Path construction follows canvas semantics: [`begin_path`](Self::begin_path)
/// discards the current path, segment calls extend it, and
/// [`fill`](Self::fill)/[`stroke`](Self::stroke) paint it without consuming it.
pub trait DrawContext {
    /// Pushes the current transform onto the transform stack.
    fn save(&mut self);

    /// Pops the transform stack. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Moves the origin of the current transform.
    fn translate(&mut self, offset: Point);

    /// Rotates the current transform by `angle` radians.
    fn rotate(&mut self, angle: f32);

    fn begin_path(&mut self);

    fn close_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    fn quadratic_curve_to(&mut self, control: Point, end: Point);

    fn bezier_curve_to(&mut self, control1: Point, control2: Point, end: Point);

    /// Fills the current path.
    fn fill(&mut self, color: Color);

    /// Strokes the current path.
    fn stroke(&mut self, stroke: &StrokeDefinition);

    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    fn stroke_rect(&mut self, bounds: Bounds, stroke: &StrokeDefinition);

    /// Draws `text` with its baseline starting at `position`.
    fn fill_text(&mut self, text: &str, position: Point, color: Color);

    /// Returns the advance width of `text` as [`fill_text`](Self::fill_text) would draw it.
    fn measure_text(&self, text: &str) -> f32;
}
