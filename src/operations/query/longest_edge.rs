use tracing::trace;

use crate::error::{Result, TopologyError};
use crate::topology::{GraphEdge, MeshGraph};

/// Picks the longest side of a triangle face.
///
/// The sides are the vertex-to-vertex edges `(v1, v2)`, `(v2, v3)` and
/// `(v1, v3)`, checked in that order. On equal lengths the first one checked
/// wins.
pub struct TriangleLongestEdge {
    face: String,
}

impl TriangleLongestEdge {
    /// Creates a new `TriangleLongestEdge` query.
    #[must_use]
    pub fn new(face: impl Into<String>) -> Self {
        Self { face: face.into() }
    }

    /// Executes the query, returning the longest side.
    ///
    /// # Errors
    ///
    /// - [`TopologyError::MissingNode`] if the face is not registered.
    /// - [`TopologyError::InvalidTriangle`] if the face is a placeholder.
    /// - [`TopologyError::UnknownEdge`] if a side has no edge in the graph.
    pub fn execute<'g>(&self, graph: &'g MeshGraph) -> Result<&'g GraphEdge> {
        let face = graph
            .face(&self.face)
            .ok_or_else(|| TopologyError::MissingNode(self.face.clone()))?;
        let [v1, v2, v3] = face
            .triangle_vertices()
            .ok_or_else(|| TopologyError::InvalidTriangle {
                face: self.face.clone(),
                reason: "face has no triangle vertices".into(),
            })?;

        let side = |a: &str, b: &str| {
            graph
                .edge_between(a, b)
                .ok_or_else(|| TopologyError::UnknownEdge(a.to_owned(), b.to_owned()))
        };
        let e1 = side(v1.as_str(), v2.as_str())?;
        let e2 = side(v2.as_str(), v3.as_str())?;
        let e3 = side(v1.as_str(), v3.as_str())?;

        let longest = if e1.length() >= e2.length() && e1.length() >= e3.length() {
            e1
        } else if e2.length() >= e3.length() {
            e2
        } else {
            e3
        };
        trace!(face = %self.face, edge = %longest.id(), length = longest.length(), "longest edge");
        Ok(longest)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MeshGraphError;
    use crate::geometry::Coordinates;

    fn c(x: f64, y: f64, z: f64) -> Coordinates {
        Coordinates::new(x, y, z)
    }

    /// Right triangle with sides 3 (a-b), 4 (a-c) and 5 (b-c).
    fn right_triangle(order: [(&str, &str, &str); 3]) -> MeshGraph {
        let mut g = MeshGraph::new("g");
        g.insert_vertex("a", c(0.0, 0.0, 0.0)).unwrap();
        g.insert_vertex("b", c(3.0, 0.0, 0.0)).unwrap();
        g.insert_vertex("c", c(0.0, 4.0, 0.0)).unwrap();
        for (id, from, to) in order {
            g.insert_edge(id, from, to, true).unwrap();
        }
        g
    }

    #[test]
    fn picks_the_hypotenuse_whatever_the_insertion_order() {
        let sides = [("ab", "a", "b"), ("ac", "a", "c"), ("bc", "b", "c")];
        let orders = [
            [sides[0], sides[1], sides[2]],
            [sides[2], sides[0], sides[1]],
            [sides[1], sides[2], sides[0]],
        ];
        for order in orders {
            for tri in [["a", "b", "c"], ["c", "a", "b"], ["b", "c", "a"]] {
                let mut g = right_triangle(order);
                g.insert_triangle("f", tri[0], tri[1], tri[2]).unwrap();
                let e = TriangleLongestEdge::new("f").execute(&g).unwrap();
                assert_eq!(e.id(), "bc");
                assert!((e.length() - 5.0).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn ties_go_to_the_first_side() {
        // a-b and b-c are both exactly 5, a-c is shorter.
        let mut g = MeshGraph::new("g");
        g.insert_vertex("a", c(0.0, 0.0, 0.0)).unwrap();
        g.insert_vertex("b", c(3.0, 4.0, 0.0)).unwrap();
        g.insert_vertex("c", c(-1.0, 1.0, 0.0)).unwrap();
        g.insert_edge("ab", "a", "b", false).unwrap();
        g.insert_edge("bc", "b", "c", false).unwrap();
        g.insert_edge("ca", "c", "a", false).unwrap();
        g.insert_triangle("f", "a", "b", "c").unwrap();
        g.insert_triangle("h", "b", "c", "a").unwrap();

        assert_eq!(g.triangle_longest_edge("f").unwrap().id(), "ab");
        assert_eq!(g.triangle_longest_edge("h").unwrap().id(), "bc");
    }

    #[test]
    fn missing_side_is_an_unknown_edge() {
        let mut g = right_triangle([("ab", "a", "b"), ("ac", "a", "c"), ("bc", "b", "c")]);
        g.insert_triangle("f", "a", "b", "c").unwrap();
        g.delete_edge("bc");
        let err = TriangleLongestEdge::new("f").execute(&g).unwrap_err();
        assert_eq!(
            err.to_string(),
            TopologyError::UnknownEdge("b".into(), "c".into()).to_string()
        );
        assert!(matches!(err, MeshGraphError::Topology(TopologyError::UnknownEdge(..))));
    }

    #[test]
    fn placeholder_face_is_rejected() {
        let mut g = MeshGraph::new("g");
        g.insert_face("p", c(0.0, 0.0, 0.0)).unwrap();
        let err = TriangleLongestEdge::new("p").execute(&g).unwrap_err();
        assert!(matches!(
            err,
            MeshGraphError::Topology(TopologyError::InvalidTriangle { .. })
        ));
    }

    #[test]
    fn unknown_face_is_missing() {
        let g = MeshGraph::new("g");
        assert!(TriangleLongestEdge::new("nope").execute(&g).is_err());
    }
}
