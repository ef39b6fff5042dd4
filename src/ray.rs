//! Ray representation for 3D ray tracing.
//!
//! A ray is the half-line r(t) = origin + t * direction used for all
//! intersection queries.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// The direction is not required to be normalized; intersection code works
/// with the squared length directly.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3A,
    /// Direction vector of the ray.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
