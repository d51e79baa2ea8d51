use tracing::debug;

use crate::geometry::EulerAngles;
use crate::topology::MeshGraph;

/// Rotates every face and vertex of a graph about the origin.
///
/// Only node coordinates change. Edge lengths stay as they were when the
/// edges were built.
pub struct Rotate {
    angles: EulerAngles,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// Angles are in radians.
    #[must_use]
    pub fn new(angles: EulerAngles) -> Self {
        Self { angles }
    }

    /// Executes the rotation, modifying the graph in-place.
    pub fn execute(&self, graph: &mut MeshGraph) {
        let mut rotated = 0usize;
        for node in graph.nodes_mut() {
            node.rotate_by(self.angles);
            rotated += 1;
        }
        debug!(graph = %graph.id(), angles = ?self.angles, rotated, "rotate");
    }
}
