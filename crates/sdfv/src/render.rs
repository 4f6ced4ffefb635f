//! Draw traversal across nesting levels.
//!
//! Every level is drawn in two passes so that edges are always composited
//! after the shapes they connect: states, then inter-state edges, then the
//! interior of each expanded state (nodes with their connectors, then
//! dataflow edges). Nested SDFG nodes re-enter [`draw_sdfg`] from their own
//! [`Element::draw`].

use log::trace;

use sdfv_core::{draw::DrawContext, geometry::Point};

use crate::{
    config::Theme,
    element::{Element, ElementGraph},
    error::SdfvError,
    highlight::HighlightSource,
};

/// Per-frame inputs shared by every element drawn in one traversal.
#[derive(Clone, Copy)]
pub struct Frame<'f> {
    theme: &'f Theme,
    highlights: &'f dyn HighlightSource,
    pointer: Option<Point>,
}

impl<'f> Frame<'f> {
    pub fn new(theme: &'f Theme, highlights: &'f dyn HighlightSource) -> Self {
        Self {
            theme,
            highlights,
            pointer: None,
        }
    }

    /// Sets the pointer position in graph coordinates (builder style).
    pub fn with_pointer(mut self, pointer: Point) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn theme(&self) -> &'f Theme {
        self.theme
    }

    /// Pointer position, if the pointer is over the surface.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    fn draw_element(&self, ctx: &mut dyn DrawContext, element: &Element<'_>) -> Result<(), SdfvError> {
        let highlight = self.highlights.highlight(element);
        element.draw(ctx, highlight, self)
    }
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("theme", self.theme)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

/// Draws a state machine and the interior of every expanded state.
///
/// # Errors
///
/// Returns the first [`SdfvError`] raised by an element; the rest of the
/// frame is not drawn.
pub fn draw_sdfg(
    ctx: &mut dyn DrawContext,
    graph: &ElementGraph<'_>,
    frame: &Frame<'_>,
) -> Result<(), SdfvError> {
    trace!(
        states = graph.node_count(),
        edges = graph.edge_count();
        "Drawing state machine"
    );

    for state in graph.nodes() {
        frame.draw_element(ctx, state)?;
    }
    for edge in graph.edges() {
        frame.draw_element(ctx, edge)?;
    }

    for state in graph.nodes() {
        if state.is_collapsed() {
            trace!(state = state.id(); "Skipping collapsed state");
            continue;
        }
        if let Some(dataflow) = state.dataflow() {
            draw_state(ctx, dataflow, frame)?;
        }
    }

    Ok(())
}

/// Draws one dataflow subgraph: nodes each followed by their connectors,
/// then edges.
pub fn draw_state(
    ctx: &mut dyn DrawContext,
    dataflow: &ElementGraph<'_>,
    frame: &Frame<'_>,
) -> Result<(), SdfvError> {
    for node in dataflow.nodes() {
        frame.draw_element(ctx, node)?;
        for connector in node.connectors() {
            frame.draw_element(ctx, connector)?;
        }
    }
    for edge in dataflow.edges() {
        frame.draw_element(ctx, edge)?;
    }

    Ok(())
}
