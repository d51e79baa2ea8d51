use crate::geometry::Coordinates;

use super::node::NodeRef;

/// A named connection between two nodes of the mesh graph.
///
/// The length is the distance between the endpoints at construction time and
/// is never recomputed, even when the endpoints are rotated later on. The
/// border flag is supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    id: String,
    from: NodeRef,
    to: NodeRef,
    is_border: bool,
    length: f64,
    style: Option<String>,
}

impl GraphEdge {
    pub(crate) fn new(
        id: String,
        (from, from_at): (NodeRef, &Coordinates),
        (to, to_at): (NodeRef, &Coordinates),
        is_border: bool,
        style: Option<String>,
    ) -> Self {
        Self {
            id,
            from,
            to,
            is_border,
            length: from_at.distance(to_at),
            style,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Both endpoints, in insertion order.
    #[must_use]
    pub fn endpoints(&self) -> (&NodeRef, &NodeRef) {
        (&self.from, &self.to)
    }

    /// Returns `true` if either endpoint has the given node id.
    #[must_use]
    pub fn touches(&self, node_id: &str) -> bool {
        self.from.id() == node_id || self.to.id() == node_id
    }

    #[must_use]
    pub fn is_border(&self) -> bool {
        self.is_border
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}
