use crate::geometry::Coordinates;

use super::node::{GraphNode, NodeKind};

/// A named point of the mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: String,
    coordinates: Coordinates,
}

impl Vertex {
    pub(crate) fn new(id: String, coordinates: Coordinates) -> Self {
        Self { id, coordinates }
    }
}

impl GraphNode for Vertex {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Vertex
    }

    fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    fn coordinates_mut(&mut self) -> &mut Coordinates {
        &mut self.coordinates
    }
}
