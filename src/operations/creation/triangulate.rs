use std::collections::{BTreeMap, HashSet};

use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};
use tracing::{debug, warn};

use crate::error::{Result, TriangulationError};
use crate::geometry::Coordinates;
use crate::topology::{MeshGraph, MeshParams};

/// Naming and styling used when building a graph from a point set.
#[derive(Debug, Clone)]
pub struct TriangulationParams {
    /// Prefix of generated vertex ids, followed by the input point index.
    pub vertex_prefix: String,
    /// Prefix of generated vertex-to-vertex edge ids.
    pub edge_prefix: String,
    /// Prefix of generated triangle face ids.
    pub face_prefix: String,
    /// Style hint for convex hull edges.
    pub border_style: String,
    /// Style hint for inner edges.
    pub interior_style: String,
    /// Parameters of the resulting graph.
    pub mesh: MeshParams,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            vertex_prefix: "v".into(),
            edge_prefix: "e".into(),
            face_prefix: "t".into(),
            border_style: "render as boundary".into(),
            interior_style: "render as interior".into(),
            mesh: MeshParams::default(),
        }
    }
}

/// Builds a triangulated [`MeshGraph`] from a set of 3D points.
///
/// Points are triangulated by their XY projection (Delaunay) and keep their
/// z coordinate. Every triangulation edge becomes a vertex-to-vertex edge,
/// flagged as border when it lies on the convex hull, and every inner
/// triangle becomes a triangle face. Points sharing an XY position with an
/// earlier point are merged into it.
///
/// Meant for building fixture meshes for tests, demos and viewers.
pub struct Triangulate {
    graph_id: String,
    points: Vec<Coordinates>,
    params: TriangulationParams,
}

impl Triangulate {
    /// Creates a new `Triangulate` operation with default parameters.
    #[must_use]
    pub fn new(graph_id: impl Into<String>, points: Vec<Coordinates>) -> Self {
        Self {
            graph_id: graph_id.into(),
            points,
            params: TriangulationParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: TriangulationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the new graph.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::Insertion`] if a point cannot be
    /// triangulated (non-finite or out of range coordinates), or a topology
    /// error if the configured prefixes make generated ids collide.
    pub fn execute(&self) -> Result<MeshGraph> {
        let mut dt: DelaunayTriangulation<SpadePoint2<f64>> = DelaunayTriangulation::new();

        // spade vertex index -> first input index at that position
        let mut owners: BTreeMap<usize, usize> = BTreeMap::new();
        for (index, c) in self.points.iter().enumerate() {
            let handle = dt
                .insert(SpadePoint2::new(c.x(), c.y()))
                .map_err(|cause: InsertionError| TriangulationError::Insertion { index, cause })?;
            let slot = handle.index();
            if let Some(&first) = owners.get(&slot) {
                warn!(point = index, merged_into = first, "duplicate point merged");
            } else {
                owners.insert(slot, index);
            }
        }

        let params = &self.params;
        let vertex_id = |slot: usize| format!("{}{}", params.vertex_prefix, owners[&slot]);

        let mut graph = MeshGraph::with_params(self.graph_id.clone(), params.mesh);
        let mut by_input: Vec<usize> = owners.values().copied().collect();
        by_input.sort_unstable();
        for index in by_input {
            graph.insert_vertex(format!("{}{index}", params.vertex_prefix), self.points[index])?;
        }

        let outer = dt.outer_face().fix();
        let hull: HashSet<_> = dt
            .directed_edges()
            .filter(|e| e.face().fix() == outer)
            .map(|e| e.as_undirected().fix())
            .collect();

        for edge in dt.undirected_edges() {
            let [a, b] = edge.vertices();
            let (a, b) = (a.fix().index(), b.fix().index());
            let is_border = hull.contains(&edge.fix());
            let style = if is_border {
                &params.border_style
            } else {
                &params.interior_style
            };
            graph.insert_edge_styled(
                format!("{}{}-{}", params.edge_prefix, owners[&a], owners[&b]),
                &vertex_id(a),
                &vertex_id(b),
                is_border,
                Some(style.clone()),
            )?;
        }

        for (n, face) in dt.inner_faces().enumerate() {
            let [a, b, c] = face.vertices().map(|v| vertex_id(v.fix().index()));
            graph.insert_triangle(format!("{}{n}", params.face_prefix), &a, &b, &c)?;
        }

        debug!(
            graph = %graph.id(),
            points = self.points.len(),
            vertices = graph.vertex_count(),
            faces = graph.face_count(),
            edges = graph.edge_count(),
            "triangulate"
        );
        Ok(graph)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MeshGraphError;
    use crate::topology::{GraphNode, NodeKind};

    fn c(x: f64, y: f64, z: f64) -> Coordinates {
        Coordinates::new(x, y, z)
    }

    fn vertex_edges(graph: &MeshGraph) -> usize {
        graph
            .edges()
            .filter(|e| {
                let (a, b) = e.endpoints();
                a.kind() == NodeKind::Vertex && b.kind() == NodeKind::Vertex
            })
            .count()
    }

    #[test]
    fn single_triangle() {
        let g = Triangulate::new("m", vec![c(0.0, 0.0, 1.0), c(10.0, 0.0, 2.0), c(0.0, 10.0, 3.0)])
            .execute()
            .unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.face_count(), 1);
        assert_eq!(vertex_edges(&g), 3);
        // 3 hull edges plus 3 face-to-vertex edges.
        assert_eq!(g.edge_count(), 6);
        assert!(g
            .edges()
            .filter(|e| e.endpoints().0.kind() == NodeKind::Vertex)
            .all(|e| e.is_border()));
        assert_eq!(g.vertex("v2").unwrap().coordinates().z(), 3.0);

        let longest = g.triangle_longest_edge("t0").unwrap();
        assert!(longest.touches("v1") && longest.touches("v2"));
    }

    #[test]
    fn square_with_centre_has_inner_edges() {
        let g = Triangulate::new(
            "m",
            vec![
                c(0.0, 0.0, 0.0),
                c(4.0, 0.0, 0.0),
                c(4.0, 4.0, 0.0),
                c(0.0, 4.0, 0.0),
                c(2.0, 2.0, 1.0),
            ],
        )
        .execute()
        .unwrap();
        assert_eq!(g.face_count(), 4);
        assert_eq!(vertex_edges(&g), 8);
        let border = g.edges().filter(|e| e.is_border()).count();
        assert_eq!(border, 4);
        let spokes = g
            .edges()
            .filter(|e| e.touches("v4") && e.endpoints().0.kind() == NodeKind::Vertex);
        for e in spokes {
            assert!(!e.is_border());
            assert_eq!(e.style(), Some("render as interior"));
        }
        for face in g.faces() {
            assert!(g.triangle_longest_edge(face.id()).is_ok());
        }
    }

    #[test]
    fn duplicate_points_are_merged() {
        let g = Triangulate::new(
            "m",
            vec![c(0.0, 0.0, 0.0), c(1.0, 0.0, 0.0), c(0.0, 0.0, 5.0), c(0.0, 1.0, 0.0)],
        )
        .execute()
        .unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert!(g.vertex("v2").is_none());
        assert_eq!(g.vertex("v0").unwrap().coordinates().z(), 0.0);
        assert_eq!(g.face_count(), 1);
    }

    #[test]
    fn too_few_points_give_no_faces() {
        let g = Triangulate::new("m", vec![c(0.0, 0.0, 0.0), c(1.0, 1.0, 0.0)])
            .execute()
            .unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.face_count(), 0);
    }

    #[test]
    fn nan_point_is_rejected() {
        let err = Triangulate::new("m", vec![c(0.0, 0.0, 0.0), c(f64::NAN, 0.0, 0.0)])
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            MeshGraphError::Triangulation(TriangulationError::Insertion { index: 1, .. })
        ));
    }

    #[test]
    fn clashing_prefixes_are_a_topology_error() {
        let params = TriangulationParams {
            face_prefix: "v".into(),
            ..TriangulationParams::default()
        };
        let err = Triangulate::new("m", vec![c(0.0, 0.0, 0.0), c(1.0, 0.0, 0.0), c(0.0, 1.0, 0.0)])
            .with_params(params)
            .execute()
            .unwrap_err();
        assert!(matches!(err, MeshGraphError::Topology(_)));
    }
}
