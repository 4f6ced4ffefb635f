//! SDFV - renderer for nested state-machine and dataflow graphs.
//!
//! Takes an already laid-out [`ir::Sdfg`] document, builds an element graph
//! from it, and draws that graph onto any [`DrawContext`]. Every state owns a
//! dataflow subgraph, and nested SDFG nodes own further state machines, so
//! drawing and offsetting both recurse through all nesting levels.

pub mod config;
pub mod element;
pub mod graph;
pub mod highlight;
pub mod ir;
pub mod offset;
pub mod render;

mod error;

pub use sdfv_core::{color, draw, geometry};

pub use error::SdfvError;

use log::{debug, info};

use sdfv_core::{
    draw::{DrawContext, SvgContext, TextMeasure},
    geometry::Point,
};

use config::{RenderConfig, Theme};
use element::ElementGraph;
use highlight::HighlightSource;
use render::Frame;

/// Margin around the graph in exported SVG documents.
const SVG_MARGIN: f32 = 10.0;

/// Entry point for drawing element graphs.
///
/// # Examples
///
/// ```rust
/// use sdfv::{Renderer, config::RenderConfig, element::ElementGraph, highlight::Highlight, ir::Sdfg};
///
/// let sdfg = Sdfg::default();
/// let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");
///
/// let renderer = Renderer::new(RenderConfig::default()).expect("Invalid config");
/// let svg = renderer.render_svg(&graph, &Highlight::None).expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    /// Creates a renderer, resolving every color of `config` once.
    ///
    /// # Errors
    ///
    /// Returns [`SdfvError::Config`] if a configured color is invalid.
    pub fn new(config: RenderConfig) -> Result<Self, SdfvError> {
        let theme = Theme::from_config(&config)?;
        info!(
            line_height = theme.line_height(),
            arrow_size = theme.arrow_size();
            "Renderer configured"
        );
        Ok(Self { theme })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draws one frame of `graph` onto `ctx`.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Target drawing surface
    /// * `graph` - State machine to draw, including every nested level
    /// * `highlights` - Highlight mode for each element
    /// * `pointer` - Pointer position in graph coordinates, if any
    ///
    /// # Errors
    ///
    /// Returns the first [`SdfvError`] raised while drawing; the frame is
    /// abandoned at that point.
    pub fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        graph: &ElementGraph<'_>,
        highlights: &dyn HighlightSource,
        pointer: Option<Point>,
    ) -> Result<(), SdfvError> {
        let mut frame = Frame::new(&self.theme, highlights);
        if let Some(pointer) = pointer {
            frame = frame.with_pointer(pointer);
        }
        render::draw_sdfg(ctx, graph, &frame)
    }

    /// Renders `graph` into an SVG document string.
    ///
    /// The view box covers every state and inter-state edge plus a margin.
    ///
    /// # Errors
    ///
    /// Returns the first [`SdfvError`] raised while drawing.
    pub fn render_svg(
        &self,
        graph: &ElementGraph<'_>,
        highlights: &dyn HighlightSource,
    ) -> Result<String, SdfvError> {
        info!(states = graph.node_count(); "Rendering SVG");

        let text = TextMeasure::new(self.theme.font_family(), self.theme.line_height());
        let mut ctx = SvgContext::with_text_measure(text);
        self.draw(&mut ctx, graph, highlights, None)?;

        let view = graph
            .bounds()
            .unwrap_or_default()
            .expand(SVG_MARGIN);
        debug!(width = view.width(), height = view.height(); "SVG view box");

        Ok(ctx.into_document(view).to_string())
    }
}

