use tracing::trace;

use crate::error::{Result, TopologyError};
use crate::math::is_strictly_between;
use crate::topology::{GraphNode, MeshGraph, Vertex};

/// Finds the vertices lying strictly between two vertices.
///
/// A vertex qualifies when it differs from both end points, falls inside
/// their XY bounding rectangle and its position determinant with the end
/// points is within the graph's collinearity tolerance. If the two end points
/// are already joined by an edge, nothing qualifies.
pub struct VerticesBetween {
    beginning: String,
    end: String,
}

impl VerticesBetween {
    /// Creates a new `VerticesBetween` query.
    #[must_use]
    pub fn new(beginning: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            beginning: beginning.into(),
            end: end.into(),
        }
    }

    /// Executes the query. Results are in ascending vertex id order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::MissingVertex`] if either end point is not a
    /// registered vertex.
    pub fn execute<'g>(&self, graph: &'g MeshGraph) -> Result<Vec<&'g Vertex>> {
        let beginning = lookup(graph, &self.beginning)?.coordinates().point();
        let end = lookup(graph, &self.end)?.coordinates().point();

        if graph.edge_between(&self.beginning, &self.end).is_some() {
            trace!(beginning = %self.beginning, end = %self.end, "end points share an edge");
            return Ok(Vec::new());
        }

        let tolerance = graph.params().collinear_tolerance;
        let found: Vec<&Vertex> = graph
            .vertices()
            .filter(|v| is_strictly_between(v.coordinates().point(), beginning, end, tolerance))
            .collect();
        trace!(
            beginning = %self.beginning,
            end = %self.end,
            found = found.len(),
            "vertices between"
        );
        Ok(found)
    }
}

/// First vertex, by ascending id, found by [`VerticesBetween`].
pub struct VertexBetween {
    inner: VerticesBetween,
}

impl VertexBetween {
    /// Creates a new `VertexBetween` query.
    #[must_use]
    pub fn new(beginning: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            inner: VerticesBetween::new(beginning, end),
        }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::MissingVertex`] if either end point is not a
    /// registered vertex.
    pub fn execute<'g>(&self, graph: &'g MeshGraph) -> Result<Option<&'g Vertex>> {
        Ok(self.inner.execute(graph)?.into_iter().next())
    }
}

fn lookup<'g>(graph: &'g MeshGraph, id: &str) -> Result<&'g Vertex> {
    graph
        .vertex(id)
        .ok_or_else(|| TopologyError::MissingVertex(id.to_owned()).into())
}
