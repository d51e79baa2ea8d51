pub mod collinear;

pub use collinear::{is_strictly_between, position_determinant, within_xy_bounds};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Tolerance applied to the position determinant when testing collinearity.
pub const COLLINEAR_TOLERANCE: f64 = 1e-3;
