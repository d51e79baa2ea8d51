mod longest_edge;
mod vertices_between;

pub use longest_edge::TriangleLongestEdge;
pub use vertices_between::{VertexBetween, VerticesBetween};
