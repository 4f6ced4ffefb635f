//! A [`DrawContext`] that records every call as a [`DrawCommand`].

use crate::{
    color::Color,
    draw::{DrawContext, StrokeDefinition},
    geometry::{Bounds, Point},
};

/// Default advance width of one character for [`RecordingContext::measure_text`].
const DEFAULT_CHAR_WIDTH: f32 = 6.0;

/// One recorded call against a [`DrawContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(Point),
    Rotate(f32),
    BeginPath,
    ClosePath,
    MoveTo(Point),
    LineTo(Point),
    QuadraticCurveTo { control: Point, end: Point },
    BezierCurveTo { control1: Point, control2: Point, end: Point },
    Fill(Color),
    Stroke(StrokeDefinition),
    FillRect { bounds: Bounds, color: Color },
    StrokeRect { bounds: Bounds, stroke: StrokeDefinition },
    FillText { text: String, position: Point, color: Color },
}

/// Records drawing calls instead of painting them.
///
/// Text is measured with a fixed per-character advance so that label
/// placement is deterministic.
///
/// # Examples
///
/// ```
/// # use sdfv_core::draw::{DrawCommand, DrawContext, RecordingContext};
/// # use sdfv_core::geometry::Point;
/// let mut ctx = RecordingContext::new();
/// ctx.begin_path();
/// ctx.move_to(Point::new(1.0, 2.0));
///
/// assert_eq!(
///     ctx.commands(),
///     &[DrawCommand::BeginPath, DrawCommand::MoveTo(Point::new(1.0, 2.0))]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    char_width: f32,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the advance width used for every character (builder style).
    pub fn with_char_width(mut self, char_width: f32) -> Self {
        self.char_width = char_width;
        self
    }

    /// Returns the commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the context and returns the recorded commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Returns every stroke definition passed to path strokes, in call order.
    pub fn strokes(&self) -> impl Iterator<Item = &StrokeDefinition> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Stroke(stroke) => Some(stroke),
            _ => None,
        })
    }

    /// Returns every drawn text with its position, in call order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillText { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
    }

    /// Discards all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            char_width: DEFAULT_CHAR_WIDTH,
        }
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Point) {
        self.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.push(DrawCommand::Rotate(angle));
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, point: Point) {
        self.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.push(DrawCommand::LineTo(point));
    }

    fn quadratic_curve_to(&mut self, control: Point, end: Point) {
        self.push(DrawCommand::QuadraticCurveTo { control, end });
    }

    fn bezier_curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.push(DrawCommand::BezierCurveTo {
            control1,
            control2,
            end,
        });
    }

    fn fill(&mut self, color: Color) {
        self.push(DrawCommand::Fill(color));
    }

    fn stroke(&mut self, stroke: &StrokeDefinition) {
        self.push(DrawCommand::Stroke(stroke.clone()));
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.push(DrawCommand::FillRect { bounds, color });
    }

    fn stroke_rect(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        self.push(DrawCommand::StrokeRect {
            bounds,
            stroke: stroke.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, position: Point, color: Color) {
        self.push(DrawCommand::FillText {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}
