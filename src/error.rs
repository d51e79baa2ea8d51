use thiserror::Error;

/// Top-level error type for the mesh graph crate.
#[derive(Debug, Error)]
pub enum MeshGraphError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Errors raised when a mesh graph operation would break referential integrity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("id already in use: {0}")]
    DuplicateId(String),

    #[error("vertex not found: {0}")]
    MissingVertex(String),

    #[error("node not found: {0}")]
    MissingNode(String),

    #[error("invalid triangle for face {face}: {reason}")]
    InvalidTriangle { face: String, reason: String },

    #[error("no edge connects {0} and {1}")]
    NoSuchEdge(String, String),

    #[error("unknown edge between triangle vertices {0} and {1}")]
    UnknownEdge(String, String),

    #[error("edge {existing} already connects {from} -> {to}")]
    DuplicateEdge {
        existing: String,
        from: String,
        to: String,
    },

    #[error("edge {edge} has the same node {node} at both ends")]
    DegenerateEdge { edge: String, node: String },

    #[error("edge {edge} would connect two faces ({from}, {to})")]
    FaceToFaceEdge {
        edge: String,
        from: String,
        to: String,
    },
}

/// Errors raised while building a mesh from a point set.
#[derive(Debug, Error)]
pub enum TriangulationError {
    #[error("point {index} cannot be triangulated: {cause}")]
    Insertion {
        index: usize,
        cause: spade::InsertionError,
    },
}

/// Errors reported by a viewer while presenting a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("viewer closed: {0}")]
    Closed(String),

    #[error("display failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`MeshGraphError`].
pub type Result<T> = std::result::Result<T, MeshGraphError>;
