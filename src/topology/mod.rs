mod adjacency;
pub mod edge;
pub mod face;
pub mod node;
pub mod vertex;

use adjacency::Adjacency;
pub use edge::GraphEdge;
pub use face::FaceNode;
pub use node::{GraphNode, NodeKind, NodeRef};
pub use vertex::Vertex;

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::geometry::{Coordinates, EulerAngles};
use crate::math::COLLINEAR_TOLERANCE;
use crate::operations::query::{TriangleLongestEdge, VertexBetween, VerticesBetween};
use crate::operations::transform::Rotate;

/// Style hint attached to faces built from a triangle.
pub const TRIANGLE_FACE_STYLE: &str = "important";
/// Style hint attached to placeholder faces.
pub const PLACEHOLDER_FACE_STYLE: &str = "fill-color: red;";
/// Style hint attached to the face-to-vertex edges of a triangle.
pub const FACE_EDGE_STYLE: &str = "fill-color: blue;";

/// Tunable parameters of a [`MeshGraph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    /// Maximum absolute position determinant for three points to count as
    /// collinear.
    pub collinear_tolerance: f64,
    /// Increment applied by [`MeshGraph::rotate`].
    pub rotation_step: EulerAngles,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            collinear_tolerance: COLLINEAR_TOLERANCE,
            rotation_step: EulerAngles::DEFAULT_STEP,
        }
    }
}

/// Container that owns every vertex, face and edge of a mesh.
///
/// Entities reference each other by string id. Vertices and faces share one
/// node namespace; edges have their own. All structural changes go through
/// this type so that every edge endpoint and every triangle vertex always
/// exists in the container.
#[derive(Debug, Clone)]
pub struct MeshGraph {
    id: String,
    params: MeshParams,
    vertices: BTreeMap<String, Vertex>,
    faces: BTreeMap<String, FaceNode>,
    edges: BTreeMap<String, GraphEdge>,
    adjacency: Adjacency,
}

impl MeshGraph {
    /// Creates an empty graph with default parameters.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_params(id, MeshParams::default())
    }

    #[must_use]
    pub fn with_params(id: impl Into<String>, params: MeshParams) -> Self {
        Self {
            id: id.into(),
            params,
            vertices: BTreeMap::new(),
            faces: BTreeMap::new(),
            edges: BTreeMap::new(),
            adjacency: Adjacency::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn params(&self) -> &MeshParams {
        &self.params
    }

    /// Deep copy under a new graph id (`"<id>1"`).
    ///
    /// The copy shares no state with `self`; mutating one never affects the
    /// other.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.duplicate_as(format!("{}1", self.id))
    }

    /// Deep copy under the given graph id.
    #[must_use]
    pub fn duplicate_as(&self, id: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.id = id.into();
        copy
    }

    // --- Vertex operations ---

    /// Creates and registers a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DuplicateId`] if a vertex or face already uses
    /// the id.
    pub fn insert_vertex(
        &mut self,
        id: impl Into<String>,
        coordinates: Coordinates,
    ) -> std::result::Result<&Vertex, TopologyError> {
        let id = id.into();
        if !self.adjacency.add_node(&id) {
            return Err(TopologyError::DuplicateId(id));
        }
        debug!(graph = %self.id, vertex = %id, ?coordinates, "insert vertex");
        let vertex = self
            .vertices
            .entry(id.clone())
            .or_insert_with(|| Vertex::new(id, coordinates));
        Ok(&*vertex)
    }

    /// Removes a vertex, every face whose triangle uses it and every edge
    /// touching it. Returns `None` if no such vertex exists.
    pub fn remove_vertex(&mut self, id: &str) -> Option<Vertex> {
        let vertex = self.vertices.remove(id)?;

        let faces: Vec<String> = self
            .faces
            .values()
            .filter(|f| f.references(id))
            .map(|f| f.id().to_owned())
            .collect();
        for face in &faces {
            self.remove_face(face);
        }

        let edges: Vec<String> = self
            .edges
            .values()
            .filter(|e| e.touches(id))
            .map(|e| e.id().to_owned())
            .collect();
        for edge in &edges {
            self.delete_edge(edge);
        }

        self.adjacency.remove_node(id);
        debug!(
            graph = %self.id,
            vertex = %id,
            faces = faces.len(),
            edges = edges.len(),
            "remove vertex"
        );
        Some(vertex)
    }

    #[must_use]
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// All vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Face operations ---

    /// Registers a placeholder face that has no triangle and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DuplicateId`] if a vertex or face already uses
    /// the id.
    pub fn insert_face(
        &mut self,
        id: impl Into<String>,
        coordinates: Coordinates,
    ) -> std::result::Result<&FaceNode, TopologyError> {
        let id = id.into();
        if !self.adjacency.add_node(&id) {
            return Err(TopologyError::DuplicateId(id));
        }
        debug!(graph = %self.id, face = %id, "insert placeholder face");
        let style = Some(PLACEHOLDER_FACE_STYLE.into());
        let face = FaceNode::placeholder(id.clone(), coordinates, style);
        Ok(&*self.faces.entry(id).or_insert(face))
    }

    /// Builds a triangle face over three registered vertices.
    ///
    /// The face is placed at the centroid of the vertices and linked to each of
    /// them by an interior edge named `<face id><vertex id>`. Either everything
    /// is inserted or nothing is.
    ///
    /// # Errors
    ///
    /// - [`TopologyError::DuplicateId`] if the face id or one of the edge ids
    ///   is taken.
    /// - [`TopologyError::MissingVertex`] if a vertex is not registered.
    /// - [`TopologyError::InvalidTriangle`] if the vertices are not distinct.
    pub fn insert_triangle(
        &mut self,
        id: impl Into<String>,
        v1: &str,
        v2: &str,
        v3: &str,
    ) -> std::result::Result<&FaceNode, TopologyError> {
        let id = id.into();
        if self.adjacency.contains_node(&id) {
            return Err(TopologyError::DuplicateId(id));
        }

        let mut positions = [Coordinates::default(); 3];
        for (slot, vid) in positions.iter_mut().zip([v1, v2, v3]) {
            *slot = *self
                .vertices
                .get(vid)
                .ok_or_else(|| TopologyError::MissingVertex(vid.to_owned()))?
                .coordinates();
        }

        let face = FaceNode::triangle(
            id.clone(),
            Coordinates::centroid(&positions),
            [v1.to_owned(), v2.to_owned(), v3.to_owned()],
            Some(TRIANGLE_FACE_STYLE.into()),
        )?;

        let edge_ids = [v1, v2, v3].map(|v| format!("{id}{v}"));
        if let Some(taken) = edge_ids.iter().find(|e| self.edges.contains_key(*e)) {
            return Err(TopologyError::DuplicateId(taken.clone()));
        }

        self.adjacency.add_node(&id);
        let face_at = *face.coordinates();
        self.faces.insert(id.clone(), face);
        for ((edge_id, vid), at) in edge_ids.into_iter().zip([v1, v2, v3]).zip(positions) {
            self.link(
                edge_id,
                (NodeRef::Face(id.clone()), &face_at),
                (NodeRef::Vertex(vid.to_owned()), &at),
                false,
                Some(FACE_EDGE_STYLE.into()),
            );
        }
        debug!(graph = %self.id, face = %id, v1, v2, v3, "insert triangle face");

        self.faces
            .get(&id)
            .ok_or(TopologyError::MissingNode(id))
    }

    /// Removes a face and every edge touching it. Returns `None` if no such
    /// face exists.
    pub fn remove_face(&mut self, id: &str) -> Option<FaceNode> {
        let face = self.faces.remove(id)?;
        let edges: Vec<String> = self
            .edges
            .values()
            .filter(|e| e.touches(id))
            .map(|e| e.id().to_owned())
            .collect();
        for edge in &edges {
            self.delete_edge(edge);
        }
        self.adjacency.remove_node(id);
        debug!(graph = %self.id, face = %id, edges = edges.len(), "remove face");
        Some(face)
    }

    #[must_use]
    pub fn face(&self, id: &str) -> Option<&FaceNode> {
        self.faces.get(id)
    }

    /// All faces in ascending id order.
    pub fn faces(&self) -> impl Iterator<Item = &FaceNode> {
        self.faces.values()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Looks a node up in both the vertex and the face mapping.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&dyn GraphNode> {
        self.vertices
            .get(id)
            .map(|v| v as &dyn GraphNode)
            .or_else(|| self.faces.get(id).map(|f| f as &dyn GraphNode))
    }

    // --- Edge operations ---

    /// Connects two registered nodes.
    ///
    /// # Errors
    ///
    /// See [`insert_edge_styled`](Self::insert_edge_styled).
    pub fn insert_edge(
        &mut self,
        id: impl Into<String>,
        from: &str,
        to: &str,
        is_border: bool,
    ) -> std::result::Result<&GraphEdge, TopologyError> {
        self.insert_edge_styled(id, from, to, is_border, None)
    }

    /// Connects two registered nodes and attaches a display hint to the edge.
    ///
    /// # Errors
    ///
    /// - [`TopologyError::DuplicateId`] if the edge id is taken.
    /// - [`TopologyError::MissingNode`] if an endpoint is not registered.
    /// - [`TopologyError::DegenerateEdge`] if both endpoints are the same node.
    /// - [`TopologyError::FaceToFaceEdge`] if both endpoints are faces.
    /// - [`TopologyError::DuplicateEdge`] if an edge already runs `from -> to`.
    pub fn insert_edge_styled(
        &mut self,
        id: impl Into<String>,
        from: &str,
        to: &str,
        is_border: bool,
        style: Option<String>,
    ) -> std::result::Result<&GraphEdge, TopologyError> {
        let id = id.into();
        if self.edges.contains_key(&id) {
            return Err(TopologyError::DuplicateId(id));
        }
        let from_node = self
            .node(from)
            .ok_or_else(|| TopologyError::MissingNode(from.to_owned()))?;
        let to_node = self
            .node(to)
            .ok_or_else(|| TopologyError::MissingNode(to.to_owned()))?;
        if from == to {
            return Err(TopologyError::DegenerateEdge {
                edge: id,
                node: from.to_owned(),
            });
        }
        if from_node.kind() == NodeKind::Face && to_node.kind() == NodeKind::Face {
            return Err(TopologyError::FaceToFaceEdge {
                edge: id,
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }
        if let Some(existing) = self.adjacency.directed_link(from, to) {
            return Err(TopologyError::DuplicateEdge {
                existing: existing.to_owned(),
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }

        let from_end = (from_node.node_ref(), *from_node.coordinates());
        let to_end = (to_node.node_ref(), *to_node.coordinates());
        debug!(graph = %self.id, edge = %id, from, to, is_border, "insert edge");
        Ok(self.link(
            id,
            (from_end.0, &from_end.1),
            (to_end.0, &to_end.1),
            is_border,
            style,
        ))
    }

    /// Removes an edge by id. Returns `None` if no such edge exists.
    pub fn delete_edge(&mut self, id: &str) -> Option<GraphEdge> {
        let edge = self.edges.remove(id)?;
        self.adjacency.remove_link(id);
        debug!(graph = %self.id, edge = %id, "delete edge");
        Some(edge)
    }

    /// Removes the edge connecting two nodes, in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NoSuchEdge`] if the nodes are not connected.
    pub fn delete_edge_between(
        &mut self,
        a: &str,
        b: &str,
    ) -> std::result::Result<GraphEdge, TopologyError> {
        let id = self
            .adjacency
            .link_between(a, b)
            .map(str::to_owned)
            .ok_or_else(|| TopologyError::NoSuchEdge(a.to_owned(), b.to_owned()))?;
        self.delete_edge(&id)
            .ok_or_else(|| TopologyError::NoSuchEdge(a.to_owned(), b.to_owned()))
    }

    /// The edge connecting two nodes, in either direction.
    #[must_use]
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&GraphEdge> {
        self.adjacency
            .link_between(a, b)
            .and_then(|id| self.edges.get(id))
    }

    #[must_use]
    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.get(id)
    }

    /// All edges in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.values()
    }

    /// Edges touching a node, in insertion order.
    pub fn edges_of<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.adjacency
            .incident_links(node)
            .filter_map(move |id| self.edges.get(id))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Geometric queries ---

    /// Vertices strictly between two vertices on the same line.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is not registered.
    pub fn vertices_between(&self, beginning: &str, end: &str) -> Result<Vec<&Vertex>> {
        VerticesBetween::new(beginning, end).execute(self)
    }

    /// First vertex, by ascending id, strictly between two vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is not registered.
    pub fn vertex_between(&self, beginning: &str, end: &str) -> Result<Option<&Vertex>> {
        VertexBetween::new(beginning, end).execute(self)
    }

    /// Longest of the three vertex-to-vertex edges of a triangle face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing, has no triangle, or one of its
    /// sides has no edge.
    pub fn triangle_longest_edge(&self, face: &str) -> Result<&GraphEdge> {
        TriangleLongestEdge::new(face).execute(self)
    }

    // --- Transforms ---

    /// Rotates every face and vertex by the configured rotation step.
    pub fn rotate(&mut self) {
        Rotate::new(self.params.rotation_step).execute(self);
    }

    /// Rotates every face and vertex by the given angles.
    pub fn rotate_by(&mut self, pitch: f64, yaw: f64, roll: f64) {
        Rotate::new(EulerAngles::new(pitch, yaw, roll)).execute(self);
    }

    /// Mutable access to every positioned node, faces first.
    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut dyn GraphNode> {
        self.faces
            .values_mut()
            .map(|f| f as &mut dyn GraphNode)
            .chain(self.vertices.values_mut().map(|v| v as &mut dyn GraphNode))
    }

    fn link(
        &mut self,
        id: String,
        from: (NodeRef, &Coordinates),
        to: (NodeRef, &Coordinates),
        is_border: bool,
        style: Option<String>,
    ) -> &GraphEdge {
        self.adjacency.add_link(&id, from.0.id(), to.0.id());
        let edge = GraphEdge::new(id.clone(), from, to, is_border, style);
        self.edges.entry(id).or_insert(edge)
    }
}
