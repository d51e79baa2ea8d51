pub mod animation;
pub mod display;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{MeshGraphError, Result};
pub use geometry::{Coordinates, EulerAngles};
pub use topology::{
    FaceNode, GraphEdge, GraphNode, MeshGraph, MeshParams, NodeKind, NodeRef, Vertex,
};
