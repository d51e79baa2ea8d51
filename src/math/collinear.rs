use super::{Matrix3, Point3};

/// Signed volume spanned by the position vectors of three points.
///
/// The rows of the matrix are the coordinates of `a`, `b` and `c`:
///
/// ```text
/// | a.x  a.y  a.z |
/// | b.x  b.y  b.z |
/// | c.x  c.y  c.z |
/// ```
///
/// A value of zero means the three position vectors are linearly dependent.
#[must_use]
pub fn position_determinant(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    Matrix3::from_rows(&[
        a.coords.transpose(),
        b.coords.transpose(),
        c.coords.transpose(),
    ])
    .determinant()
}

/// Returns `true` if `p` lies inside the XY rectangle spanned by `a` and `b`
/// (boundaries included). The z coordinate is ignored.
#[must_use]
pub fn within_xy_bounds(p: &Point3, a: &Point3, b: &Point3) -> bool {
    p.x <= a.x.max(b.x) && p.x >= a.x.min(b.x) && p.y <= a.y.max(b.y) && p.y >= a.y.min(b.y)
}

/// Composite "between" test used by the mesh queries.
///
/// `p` qualifies when it is not exactly equal to either end point, falls
/// within their XY bounding rectangle, and the position determinant of
/// `(p, a, b)` is within `tolerance` of zero.
#[must_use]
pub fn is_strictly_between(p: &Point3, a: &Point3, b: &Point3, tolerance: f64) -> bool {
    if p == a || p == b {
        return false;
    }
    within_xy_bounds(p, a, b) && position_determinant(p, a, b).abs() < tolerance
}
