use crate::error::Result;
use crate::math::Point3;
use crate::topology::{GraphNode, MeshGraph, NodeKind};

/// A node as handed to a viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayNode {
    pub id: String,
    pub kind: NodeKind,
    pub position: Point3,
    /// Opaque styling hint, passed through untouched.
    pub style: Option<String>,
}

/// An edge as handed to a viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub is_border: bool,
    /// Opaque styling hint, passed through untouched.
    pub style: Option<String>,
}

/// Read-only picture of a graph at one point in time.
///
/// Nodes list the vertices first and then the faces, each in ascending id
/// order. Edges are in ascending id order.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    pub graph_id: String,
    pub nodes: Vec<DisplayNode>,
    pub edges: Vec<DisplayEdge>,
}

impl DisplaySnapshot {
    /// Captures the current positions, ids and style hints of a graph.
    #[must_use]
    pub fn capture(graph: &MeshGraph) -> Self {
        let vertices = graph.vertices().map(|v| v as &dyn GraphNode);
        let faces = graph.faces().map(|f| f as &dyn GraphNode);
        let nodes = vertices
            .chain(faces)
            .map(|n| DisplayNode {
                id: n.id().to_owned(),
                kind: n.kind(),
                position: *n.coordinates().point(),
                style: n.style().map(str::to_owned),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|e| {
                let (from, to) = e.endpoints();
                DisplayEdge {
                    id: e.id().to_owned(),
                    from: from.id().to_owned(),
                    to: to.id().to_owned(),
                    is_border: e.is_border(),
                    style: e.style().map(str::to_owned),
                }
            })
            .collect();
        Self {
            graph_id: graph.id().to_owned(),
            nodes,
            edges,
        }
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&DisplayNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

impl From<&MeshGraph> for DisplaySnapshot {
    fn from(graph: &MeshGraph) -> Self {
        Self::capture(graph)
    }
}

/// A renderer that presents snapshots of a mesh.
///
/// Implementations live outside this crate. A viewer only reads what it is
/// given; it never mutates the mesh.
pub trait Viewer {
    /// Renders or refreshes the view with a new snapshot.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures as
    /// [`DisplayError`](crate::error::DisplayError), converted with `?` or
    /// `.into()`.
    fn show(&mut self, snapshot: &DisplaySnapshot) -> Result<()>;
}
