use crate::geometry::{Coordinates, EulerAngles};

/// The two kinds of positioned entity a mesh graph holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Vertex,
    Face,
}

/// A typed, id-based reference to a node owned by a [`MeshGraph`](super::MeshGraph).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Vertex(String),
    Face(String),
}

impl NodeRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Vertex(id) | Self::Face(id) => id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Vertex(_) => NodeKind::Vertex,
            Self::Face(_) => NodeKind::Face,
        }
    }
}

/// Capability shared by vertices and faces: an identified, positioned,
/// rotatable entity.
///
/// Rotating a node only replaces its own coordinates. Cached edge lengths and
/// face positions that were derived from it are left as they are.
pub trait GraphNode {
    fn id(&self) -> &str;

    fn kind(&self) -> NodeKind;

    fn coordinates(&self) -> &Coordinates;

    fn coordinates_mut(&mut self) -> &mut Coordinates;

    /// Opaque display hint, if any.
    fn style(&self) -> Option<&str> {
        None
    }

    /// Rotates by [`EulerAngles::DEFAULT_STEP`].
    fn rotate(&mut self) {
        self.rotate_by(EulerAngles::DEFAULT_STEP);
    }

    fn rotate_by(&mut self, angles: EulerAngles) {
        let rotated = self.coordinates().rotate_euler(angles);
        *self.coordinates_mut() = rotated;
    }

    fn node_ref(&self) -> NodeRef {
        match self.kind() {
            NodeKind::Vertex => NodeRef::Vertex(self.id().to_owned()),
            NodeKind::Face => NodeRef::Face(self.id().to_owned()),
        }
    }
}
