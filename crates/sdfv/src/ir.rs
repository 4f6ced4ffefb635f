//! The laid-out intermediate representation consumed by the renderer.
//!
//! These records are what an external loader and layout engine hand over:
//! the document structure plus, for every state, node and edge, the geometry
//! assigned by the layout pass. The renderer never mutates them; it builds
//! [`Element`](crate::element::Element)s that borrow from them.
//!
//! Node, state and edge ids are their index in the owning record list.
//!
//! All records derive [`Deserialize`] so a host can load them from whatever
//! serialized form it uses.

use indexmap::IndexMap;
use serde::Deserialize;

use sdfv_core::geometry::{Point, Size};

/// A state-machine document: data containers, states and inter-state edges.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sdfg {
    #[serde(default)]
    pub label: String,

    /// Data container descriptors, looked up by name.
    #[serde(default)]
    pub arrays: IndexMap<String, DataDescriptor>,

    #[serde(default)]
    pub states: Vec<StateRecord>,

    /// Inter-state edges; `src`/`dst` index into [`states`](Self::states).
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl Sdfg {
    /// Looks up a data container descriptor by name.
    pub fn array(&self, name: &str) -> Option<&DataDescriptor> {
        self.arrays.get(name)
    }
}

/// Storage kind of a data container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ContainerKind {
    #[default]
    Array,
    Scalar,
    Stream,
    #[serde(other)]
    Other,
}

/// Describes one data container of a document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataDescriptor {
    #[serde(rename = "type", default)]
    pub kind: ContainerKind,

    /// Transient containers are temporary storage that is never persisted.
    #[serde(default)]
    pub transient: bool,
}

/// Center position and size assigned by the layout engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Routed polyline and label anchor assigned to an edge by the layout engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EdgeLayout {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub points: Vec<Point>,
}

/// A state of the state machine and the dataflow graph it owns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateRecord {
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub is_collapsed: bool,

    pub layout: Option<Layout>,

    #[serde(default)]
    pub nodes: Vec<NodeRecord>,

    /// Dataflow edges; `src`/`dst` index into [`nodes`](Self::nodes).
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// The kind of a dataflow node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum NodeKind {
    AccessNode,
    MapEntry,
    MapExit,
    ConsumeEntry,
    ConsumeExit,
    Tasklet,
    Reduce,
    #[serde(rename = "NestedSDFG")]
    NestedSdfg,
    #[default]
    #[serde(other)]
    Other,
}

/// A node of a dataflow graph.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeRecord {
    #[serde(default)]
    pub label: String,

    #[serde(rename = "type", default)]
    pub kind: NodeKind,

    pub layout: Option<Layout>,

    /// Scope nodes only: draw as a collapsed hexagon.
    #[serde(default)]
    pub is_collapsed: bool,

    /// Access nodes only: name of the referenced data container.
    #[serde(default)]
    pub data: Option<String>,

    /// Connectors in the order their data edges attach.
    #[serde(default)]
    pub connectors: Vec<ConnectorRecord>,

    /// Nested SDFG nodes only: the owned state machine.
    #[serde(default)]
    pub sdfg: Option<Box<Sdfg>>,
}

/// An edge attachment point on a node boundary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConnectorRecord {
    pub name: String,

    /// Center assigned by the layout engine.
    #[serde(default)]
    pub position: Point,
}

/// An inter-state or dataflow edge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgeRecord {
    pub src: usize,
    pub dst: usize,

    #[serde(default)]
    pub src_connector: Option<String>,

    #[serde(default)]
    pub dst_connector: Option<String>,

    #[serde(default)]
    pub label: String,

    pub layout: Option<EdgeLayout>,
}
