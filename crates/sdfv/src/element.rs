//! Renderable graph elements.
//!
//! An [`Element`] is built once from a laid-out IR record. Its size is fixed at
//! construction; only its center position changes afterwards, through
//! [`Element::translate`]. The variant-specific shape, label and style rules
//! live in [`ElementKind`] and are dispatched by a single `match` per rule.
//!
//! Elements borrow the [`Sdfg`] document that owns them so that access nodes
//! can look up their data container at draw time.

use log::debug;

use sdfv_core::{
    color::Color,
    draw::{
        DrawContext, StrokeDefinition,
        shapes::{self, TrapezoidOrientation},
    },
    geometry::{Bounds, Point, Size},
};

use crate::{
    config::Theme,
    error::SdfvError,
    graph::{ElementId, Graph},
    highlight::Highlight,
    ir::{ConnectorRecord, ContainerKind, EdgeRecord, NodeKind, NodeRecord, Sdfg, StateRecord},
    render::{self, Frame},
};

/// Fixed size of every connector.
pub const CONNECTOR_SIZE: Size = Size::new(10.0, 10.0);

/// One nesting level of renderable elements.
pub type ElementGraph<'a> = Graph<Element<'a>>;

/// Scope flavor of a scope node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Parallel region.
    Map,
    /// Producer/consumer region.
    Consume,
}

/// Which end of a scope a scope node marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopePosition {
    Entry,
    Exit,
}

/// The closed set of element variants with their variant-specific data.
#[derive(Debug, Clone)]
pub enum ElementKind<'a> {
    /// A state of a state machine, owning one dataflow subgraph.
    State {
        collapsed: bool,
        graph: ElementGraph<'a>,
    },
    /// A dataflow node without a more specific shape.
    Node,
    /// An inter-state or dataflow edge routed through `points`.
    Edge {
        points: Vec<Point>,
        src: ElementId,
        dst: ElementId,
    },
    Connector,
    /// A node referencing the data container named `data`.
    Access { data: &'a str },
    Scope {
        kind: ScopeKind,
        position: ScopePosition,
        collapsed: bool,
    },
    Tasklet,
    Reduce,
    /// A node owning a complete nested state machine.
    NestedGraph { graph: ElementGraph<'a> },
}

/// A renderable node, edge or connector of the nested graph structure.
#[derive(Debug, Clone)]
pub struct Element<'a> {
    id: ElementId,
    parent_id: Option<ElementId>,
    sdfg: &'a Sdfg,
    label: &'a str,
    size: Size,
    position: Point,
    connectors: Vec<Element<'a>>,
    kind: ElementKind<'a>,
}

impl<'a> Element<'a> {
    /// Builds a state and its dataflow subgraph.
    ///
    /// # Errors
    ///
    /// Returns [`SdfvError::MissingLayout`] if the state or any element it
    /// contains has no layout, and [`SdfvError::MissingNestedGraph`] for a
    /// nested SDFG node without its state machine.
    pub fn state(sdfg: &'a Sdfg, id: ElementId, record: &'a StateRecord) -> Result<Self, SdfvError> {
        let layout = record
            .layout
            .ok_or_else(|| SdfvError::missing_layout(format!("state {id} `{}`", record.label)))?;

        let mut graph = ElementGraph::new();
        for (node_id, node) in record.nodes.iter().enumerate() {
            graph.add_node(node_id, Self::node(sdfg, id, node_id, node)?);
        }
        for (edge_id, edge) in record.edges.iter().enumerate() {
            graph.add_edge(edge_id, Self::edge(sdfg, Some(id), edge_id, edge)?);
        }

        debug!(
            state = id,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            collapsed = record.is_collapsed;
            "Built dataflow subgraph"
        );

        Ok(Self {
            id,
            parent_id: None,
            sdfg,
            label: &record.label,
            size: layout.size(),
            position: layout.center(),
            connectors: Vec::new(),
            kind: ElementKind::State {
                collapsed: record.is_collapsed,
                graph,
            },
        })
    }

    /// Builds a dataflow node of state `state_id`, including its connectors.
    ///
    /// # Errors
    ///
    /// Returns [`SdfvError::MissingLayout`] if the node has no layout, and
    /// [`SdfvError::MissingNestedGraph`] if a nested SDFG node has no state
    /// machine.
    pub fn node(
        sdfg: &'a Sdfg,
        state_id: ElementId,
        id: ElementId,
        record: &'a NodeRecord,
    ) -> Result<Self, SdfvError> {
        let layout = record.layout.ok_or_else(|| {
            SdfvError::missing_layout(format!("node {id} `{}` of state {state_id}", record.label))
        })?;

        let kind = match record.kind {
            NodeKind::AccessNode => ElementKind::Access {
                data: record.data.as_deref().unwrap_or(record.label.as_str()),
            },
            NodeKind::MapEntry => Self::scope(ScopeKind::Map, ScopePosition::Entry, record),
            NodeKind::MapExit => Self::scope(ScopeKind::Map, ScopePosition::Exit, record),
            NodeKind::ConsumeEntry => Self::scope(ScopeKind::Consume, ScopePosition::Entry, record),
            NodeKind::ConsumeExit => Self::scope(ScopeKind::Consume, ScopePosition::Exit, record),
            NodeKind::Tasklet => ElementKind::Tasklet,
            NodeKind::Reduce => ElementKind::Reduce,
            NodeKind::NestedSdfg => {
                let nested = record.sdfg.as_deref().ok_or_else(|| SdfvError::MissingNestedGraph {
                    node: record.label.clone(),
                })?;
                ElementKind::NestedGraph {
                    graph: ElementGraph::build(nested)?,
                }
            }
            NodeKind::Other => ElementKind::Node,
        };

        let connectors = record
            .connectors
            .iter()
            .enumerate()
            .map(|(index, connector)| Self::connector(sdfg, state_id, index, connector))
            .collect();

        Ok(Self {
            id,
            parent_id: Some(state_id),
            sdfg,
            label: &record.label,
            size: layout.size(),
            position: layout.center(),
            connectors,
            kind,
        })
    }

    fn scope(kind: ScopeKind, position: ScopePosition, record: &NodeRecord) -> ElementKind<'a> {
        ElementKind::Scope {
            kind,
            position,
            collapsed: record.is_collapsed,
        }
    }

    /// Builds a connector. Connectors always have [`CONNECTOR_SIZE`].
    pub fn connector(
        sdfg: &'a Sdfg,
        state_id: ElementId,
        id: ElementId,
        record: &'a ConnectorRecord,
    ) -> Self {
        Self {
            id,
            parent_id: Some(state_id),
            sdfg,
            label: &record.name,
            size: CONNECTOR_SIZE,
            position: record.position,
            connectors: Vec::new(),
            kind: ElementKind::Connector,
        }
    }

    /// Builds an edge. Edges have zero size; their geometry is the point list.
    ///
    /// # Errors
    ///
    /// Returns [`SdfvError::MissingLayout`] if the edge has no layout.
    pub fn edge(
        sdfg: &'a Sdfg,
        parent_id: Option<ElementId>,
        id: ElementId,
        record: &'a EdgeRecord,
    ) -> Result<Self, SdfvError> {
        let layout = record.layout.as_ref().ok_or_else(|| {
            SdfvError::missing_layout(format!("edge {id} ({} -> {})", record.src, record.dst))
        })?;

        Ok(Self {
            id,
            parent_id,
            sdfg,
            label: &record.label,
            size: Size::default(),
            position: Point::new(layout.x, layout.y),
            connectors: Vec::new(),
            kind: ElementKind::Edge {
                points: layout.points.clone(),
                src: record.src,
                dst: record.dst,
            },
        })
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The enclosing state, if any.
    pub fn parent_id(&self) -> Option<ElementId> {
        self.parent_id
    }

    /// The document this element was built from.
    pub fn sdfg(&self) -> &'a Sdfg {
        self.sdfg
    }

    pub fn kind(&self) -> &ElementKind<'a> {
        &self.kind
    }

    /// Returns the display label. Nested SDFG nodes always return `""`.
    pub fn label(&self) -> &str {
        match self.kind {
            ElementKind::NestedGraph { .. } => "",
            _ => self.label,
        }
    }

    pub fn long_label(&self) -> &str {
        self.label()
    }

    /// Hover text, only defined for edges and connectors.
    pub fn tooltip(&self) -> Option<&str> {
        match self.kind {
            ElementKind::Edge { .. } | ElementKind::Connector => Some(self.label()),
            _ => None,
        }
    }

    /// Center position.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn topleft(&self) -> Point {
        Point::new(
            self.position.x() - self.size.width() / 2.0,
            self.position.y() - self.size.height() / 2.0,
        )
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_center(self.position, self.size)
    }

    /// Connectors in record order.
    pub fn connectors(&self) -> &[Element<'a>] {
        &self.connectors
    }

    /// Routed points of an edge; empty for every other variant.
    pub fn points(&self) -> &[Point] {
        match &self.kind {
            ElementKind::Edge { points, .. } => points,
            _ => &[],
        }
    }

    /// Source and destination ids of an edge.
    pub fn endpoints(&self) -> Option<(ElementId, ElementId)> {
        match self.kind {
            ElementKind::Edge { src, dst, .. } => Some((src, dst)),
            _ => None,
        }
    }

    /// The dataflow subgraph of a state.
    pub fn dataflow(&self) -> Option<&ElementGraph<'a>> {
        match &self.kind {
            ElementKind::State { graph, .. } => Some(graph),
            _ => None,
        }
    }

    pub fn dataflow_mut(&mut self) -> Option<&mut ElementGraph<'a>> {
        match &mut self.kind {
            ElementKind::State { graph, .. } => Some(graph),
            _ => None,
        }
    }

    /// The state machine owned by a nested SDFG node.
    pub fn nested(&self) -> Option<&ElementGraph<'a>> {
        match &self.kind {
            ElementKind::NestedGraph { graph } => Some(graph),
            _ => None,
        }
    }

    pub fn nested_mut(&mut self) -> Option<&mut ElementGraph<'a>> {
        match &mut self.kind {
            ElementKind::NestedGraph { graph } => Some(graph),
            _ => None,
        }
    }

    /// Returns true for a state whose interior is not drawn.
    pub fn is_collapsed(&self) -> bool {
        match self.kind {
            ElementKind::State { collapsed, .. } | ElementKind::Scope { collapsed, .. } => collapsed,
            _ => false,
        }
    }

    /// Stroke color for the given highlight mode.
    pub fn stroke_style(&self, highlight: Highlight, theme: &Theme) -> Color {
        theme.stroke_color(highlight)
    }

    /// Moves this element, its connectors and its edge points by `delta`.
    ///
    /// Owned subgraphs are not touched; see [`crate::offset`].
    pub fn translate(&mut self, delta: Point) {
        self.position = self.position.add_point(delta);
        for connector in &mut self.connectors {
            connector.translate(delta);
        }
        if let ElementKind::Edge { points, .. } = &mut self.kind {
            for point in points {
                *point = point.add_point(delta);
            }
        }
    }

    /// Draws this element. Connectors are drawn separately by the traversal.
    ///
    /// # Errors
    ///
    /// Returns [`SdfvError::UnknownArray`] if an access node references a data
    /// container its document does not declare.
    pub fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        highlight: Highlight,
        frame: &Frame<'_>,
    ) -> Result<(), SdfvError> {
        let theme = frame.theme();
        let line_height = theme.line_height();
        let color = self.stroke_style(highlight, theme);
        let outline = StrokeDefinition::solid(color, 1.0);

        match &self.kind {
            ElementKind::State { .. } => {
                let bounds = self.bounds();
                ctx.fill_rect(bounds, theme.state_fill());
                let topleft = self.topleft();
                ctx.fill_text(
                    self.label(),
                    Point::new(topleft.x(), topleft.y() + line_height),
                    theme.text(),
                );
                if highlight.is_highlighted() {
                    ctx.stroke_rect(bounds, &outline);
                }
            }
            ElementKind::Node => {
                self.draw_rectangle(ctx, theme, &outline);
                self.draw_label(ctx, theme, self.position.y() + line_height / 4.0);
            }
            ElementKind::NestedGraph { graph } => {
                self.draw_rectangle(ctx, theme, &outline);
                render::draw_sdfg(ctx, graph, frame)?;
            }
            ElementKind::Edge { points, .. } => {
                Self::draw_edge(ctx, points, &outline, theme.arrow_size());
            }
            ElementKind::Connector => {
                ctx.begin_path();
                shapes::ellipse(ctx, self.topleft(), self.size);
                ctx.close_path();
                ctx.fill(theme.connector_fill());
                ctx.stroke(&outline);
            }
            ElementKind::Access { data } => {
                let descriptor = self.sdfg.array(data).ok_or_else(|| SdfvError::UnknownArray {
                    name: (*data).to_string(),
                })?;

                let mut stroke = if descriptor.kind == ContainerKind::Stream {
                    StrokeDefinition::dashed(color, 1.0)
                } else {
                    StrokeDefinition::solid(color, 1.0)
                };
                if !descriptor.transient {
                    stroke.set_width(3.0);
                }

                ctx.begin_path();
                shapes::ellipse(ctx, self.topleft(), self.size);
                ctx.close_path();
                ctx.fill(theme.node_fill());
                ctx.stroke(&stroke);
                self.draw_label(ctx, theme, self.position.y() + line_height / 4.0);
            }
            ElementKind::Scope {
                kind,
                position,
                collapsed,
            } => {
                if *collapsed {
                    shapes::hexagon(ctx, self.position, self.size);
                } else {
                    let orientation = match position {
                        ScopePosition::Entry => TrapezoidOrientation::WideTop,
                        ScopePosition::Exit => TrapezoidOrientation::WideBottom,
                    };
                    shapes::trapezoid(ctx, self.topleft(), self.size, orientation);
                }
                let stroke = match kind {
                    ScopeKind::Consume => StrokeDefinition::dashed(color, 1.0),
                    ScopeKind::Map => outline,
                };
                ctx.fill(theme.node_fill());
                ctx.stroke(&stroke);
                self.draw_label(ctx, theme, self.position.y() + line_height / 2.0);
            }
            ElementKind::Tasklet => {
                shapes::octagon(ctx, self.topleft(), self.size);
                ctx.fill(theme.node_fill());
                ctx.stroke(&outline);
                self.draw_label(ctx, theme, self.position.y() + line_height / 2.0);
            }
            ElementKind::Reduce => {
                shapes::triangle(ctx, self.topleft(), self.size);
                ctx.fill(theme.node_fill());
                ctx.stroke(&outline);
                let baseline = self.position.y() - self.size.height() / 4.0 + line_height / 2.0;
                self.draw_label(ctx, theme, baseline);
            }
        }

        Ok(())
    }

    fn draw_rectangle(&self, ctx: &mut dyn DrawContext, theme: &Theme, outline: &StrokeDefinition) {
        let bounds = self.bounds();
        ctx.fill_rect(bounds, theme.node_fill());
        ctx.stroke_rect(bounds, outline);
    }

    /// Draws the label horizontally centered on the element.
    fn draw_label(&self, ctx: &mut dyn DrawContext, theme: &Theme, baseline: f32) {
        let label = self.label();
        if label.is_empty() {
            return;
        }
        let width = ctx.measure_text(label);
        ctx.fill_text(
            label,
            Point::new(self.position.x() - width / 2.0, baseline),
            theme.text(),
        );
    }

    fn draw_edge(
        ctx: &mut dyn DrawContext,
        points: &[Point],
        stroke: &StrokeDefinition,
        arrow_size: f32,
    ) {
        let [.., before_last, last] = points else {
            return;
        };

        ctx.begin_path();
        ctx.move_to(points[0]);
        if points.len() == 2 {
            ctx.line_to(*last);
        } else {
            ctx.line_to(points[0].midpoint(points[1]));
            for pair in points[1..points.len() - 1].windows(2) {
                ctx.quadratic_curve_to(pair[0], pair[0].midpoint(pair[1]));
            }
            ctx.quadratic_curve_to(*before_last, *last);
        }
        ctx.stroke(stroke);

        shapes::arrowhead(ctx, *before_last, *last, arrow_size, stroke.color());
    }
}

impl<'a> ElementGraph<'a> {
    /// Builds the element graph of a state machine, recursing into every
    /// state and nested SDFG node.
    ///
    /// # Errors
    ///
    /// Returns the first [`SdfvError`] raised by element construction.
    pub fn build(sdfg: &'a Sdfg) -> Result<Self, SdfvError> {
        let mut graph = Self::new();
        for (id, state) in sdfg.states.iter().enumerate() {
            graph.add_node(id, Element::state(sdfg, id, state)?);
        }
        for (id, edge) in sdfg.edges.iter().enumerate() {
            graph.add_edge(id, Element::edge(sdfg, None, id, edge)?);
        }

        debug!(
            label = sdfg.label.as_str(),
            states = graph.node_count(),
            edges = graph.edge_count();
            "Built state machine"
        );

        Ok(graph)
    }

    /// Returns the merged bounds of all states and inter-state edge points.
    pub fn bounds(&self) -> Option<Bounds> {
        let states = self.nodes().map(Element::bounds);
        let edges = self
            .edges()
            .filter_map(|edge| Bounds::from_points(edge.points().iter().copied()));
        states.chain(edges).reduce(|acc, bounds| acc.merge(&bounds))
    }
}
