//! Rigid translation of element subtrees.
//!
//! Offsets recurse through every nesting level so that a state machine, the
//! dataflow subgraphs of its states and any nested state machines below them
//! stay in one consistent coordinate space. Offsets compose additively and
//! never change the count or order of points and connectors.

use log::trace;

use sdfv_core::geometry::Point;

use crate::element::ElementGraph;

/// Translates every state, its dataflow subgraph and every inter-state edge.
///
/// Inter-state edges are addressed by their own id in the edge table.
pub fn offset_graph(graph: &mut ElementGraph<'_>, delta: Point) {
    trace!(
        states = graph.node_count(),
        dx = delta.x(),
        dy = delta.y();
        "Offsetting state machine"
    );

    for state in graph.nodes_mut() {
        state.translate(delta);
        if let Some(dataflow) = state.dataflow_mut() {
            offset_state(dataflow, delta);
        }
    }
    for edge in graph.edges_mut() {
        edge.translate(delta);
    }
}

/// Translates every node with its connectors, every nested state machine and
/// every edge of one dataflow subgraph.
pub fn offset_state(dataflow: &mut ElementGraph<'_>, delta: Point) {
    for node in dataflow.nodes_mut() {
        node.translate(delta);
        if let Some(nested) = node.nested_mut() {
            offset_graph(nested, delta);
        }
    }
    for edge in dataflow.edges_mut() {
        edge.translate(delta);
    }
}
