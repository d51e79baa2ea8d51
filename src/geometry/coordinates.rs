use nalgebra::Rotation3;

use crate::math::Point3;

/// Euler angles in radians.
///
/// `roll` turns about X, `pitch` about Y and `yaw` about Z. Rotations are
/// applied roll first, then pitch, then yaw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl EulerAngles {
    /// Increment applied by the argument-less `rotate` calls.
    pub const DEFAULT_STEP: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.01,
    };

    #[must_use]
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    fn rotation(self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(self.roll, self.pitch, self.yaw)
    }
}

/// An immutable 3D position.
///
/// Equality is exact and component-wise; no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    point: Point3,
}

impl Coordinates {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            point: Point3::new(x, y, z),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.point.z
    }

    /// Returns the underlying nalgebra point.
    #[must_use]
    pub fn point(&self) -> &Point3 {
        &self.point
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.point, &other.point)
    }

    /// Arithmetic mean of the given positions.
    #[must_use]
    pub fn centroid(points: &[Self]) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let sum = points
            .iter()
            .fold(crate::math::Vector3::zeros(), |acc, c| acc + c.point.coords);
        Self {
            point: Point3::from(sum / n),
        }
    }

    /// Returns these coordinates rotated about the origin.
    ///
    /// Applies `Rz(yaw) * Ry(pitch) * Rx(roll)`.
    #[must_use]
    pub fn rotate(&self, pitch: f64, yaw: f64, roll: f64) -> Self {
        self.rotate_euler(EulerAngles::new(pitch, yaw, roll))
    }

    #[must_use]
    pub fn rotate_euler(&self, angles: EulerAngles) -> Self {
        Self {
            point: angles.rotation() * self.point,
        }
    }

    /// Undoes [`rotate`](Self::rotate) with the same angles.
    #[must_use]
    pub fn rotate_inverse(&self, pitch: f64, yaw: f64, roll: f64) -> Self {
        let rotation = EulerAngles::new(pitch, yaw, roll).rotation();
        Self {
            point: rotation.inverse_transform_point(&self.point),
        }
    }

    /// Rotation by [`EulerAngles::DEFAULT_STEP`].
    #[must_use]
    pub fn default_rotation(&self) -> Self {
        self.rotate_euler(EulerAngles::DEFAULT_STEP)
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            point: Point3::origin(),
        }
    }
}

impl From<Point3> for Coordinates {
    fn from(point: Point3) -> Self {
        Self { point }
    }
}

impl From<Coordinates> for Point3 {
    fn from(c: Coordinates) -> Self {
        c.point
    }
}
