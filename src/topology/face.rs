use crate::error::TopologyError;
use crate::geometry::Coordinates;

use super::node::{GraphNode, NodeKind};

/// A named face node.
///
/// A face built from a triangle references exactly three distinct vertices by
/// id. Placeholder faces carry no triangle. The face's own coordinates are
/// fixed when it is created and are not kept in sync with its vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceNode {
    id: String,
    coordinates: Coordinates,
    triangle: Option<[String; 3]>,
    style: Option<String>,
}

impl FaceNode {
    pub(crate) fn placeholder(id: String, coordinates: Coordinates, style: Option<String>) -> Self {
        Self {
            id,
            coordinates,
            triangle: None,
            style,
        }
    }

    /// Builds a triangle face.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTriangle`] if the vertex ids are not
    /// pairwise distinct.
    pub(crate) fn triangle(
        id: String,
        coordinates: Coordinates,
        vertices: [String; 3],
        style: Option<String>,
    ) -> Result<Self, TopologyError> {
        let [a, b, c] = &vertices;
        if a == b || b == c || a == c {
            return Err(TopologyError::InvalidTriangle {
                face: id,
                reason: format!("vertices {a}, {b}, {c} are not distinct"),
            });
        }
        Ok(Self {
            id,
            coordinates,
            triangle: Some(vertices),
            style,
        })
    }

    /// Ordered vertex ids of the triangle, or `None` for a placeholder face.
    #[must_use]
    pub fn triangle_vertices(&self) -> Option<&[String; 3]> {
        self.triangle.as_ref()
    }

    /// Returns `true` if this face's triangle uses the given vertex.
    #[must_use]
    pub fn references(&self, vertex_id: &str) -> bool {
        self.triangle
            .as_ref()
            .is_some_and(|t| t.iter().any(|v| v == vertex_id))
    }
}

impl GraphNode for FaceNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Face
    }

    fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    fn coordinates_mut(&mut self) -> &mut Coordinates {
        &mut self.coordinates
    }

    fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(a: &str, b: &str, c: &str) -> [String; 3] {
        [a.into(), b.into(), c.into()]
    }

    #[test]
    fn triangle_keeps_vertex_order() {
        let f = FaceNode::triangle("f".into(), Coordinates::default(), ids("c", "a", "b"), None)
            .unwrap();
        assert_eq!(f.triangle_vertices().unwrap(), &ids("c", "a", "b"));
        assert!(f.references("a"));
        assert!(!f.references("d"));
    }

    #[test]
    fn repeated_vertex_is_rejected() {
        let err = FaceNode::triangle("f".into(), Coordinates::default(), ids("a", "b", "a"), None)
            .unwrap_err();
        assert!(matches!(err, TopologyError::InvalidTriangle { ref face, .. } if face == "f"));
    }

    #[test]
    fn placeholder_has_no_triangle() {
        let f = FaceNode::placeholder("p".into(), Coordinates::new(1.0, 1.0, 1.0), None);
        assert!(f.triangle_vertices().is_none());
        assert!(!f.references("a"));
        assert_eq!(f.kind(), NodeKind::Face);
    }
}
