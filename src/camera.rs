//! Thin-lens camera for ray generation.
//!
//! All derived quantities are computed once at construction; `get_ray` maps
//! normalized image-plane coordinates plus a random lens sample to a
//! world-space ray.

use glam::Vec3A;

use crate::random;
use crate::ray::Ray;

/// Camera with a right-handed basis, a focus-plane viewport, and a
/// disk-shaped lens for depth of field.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Camera position in world space (lookfrom)
    pub origin: Vec3A,
    /// World position of the viewport's lower-left corner
    pub lower_left_corner: Vec3A,
    /// Vector spanning the viewport's horizontal extent
    pub horizontal: Vec3A,
    /// Vector spanning the viewport's vertical extent
    pub vertical: Vec3A,
    /// Camera basis vector pointing right
    pub u: Vec3A,
    /// Camera basis vector pointing up
    pub v: Vec3A,
    /// Camera basis vector pointing opposite the view direction
    pub w: Vec3A,
    /// Lens radius (half the aperture); 0 disables defocus blur
    pub lens_radius: f32,
}

impl Camera {
    /// Build a camera from its viewing parameters.
    ///
    /// `vfov` is the vertical field of view in degrees; `focus_dist` places
    /// the plane of perfect focus, which the viewport is scaled onto.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lookfrom: Vec3A,
        lookat: Vec3A,
        vup: Vec3A,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let w = (lookfrom - lookat).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = lookfrom;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate a ray through normalized viewport coordinates (s, t) in
    /// [0, 1], sampling the lens disk for depth-of-field blur.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        let rd = self.lens_radius * random::random_in_unit_disk();
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera(aperture: f32) -> Camera {
        Camera::new(
            Vec3A::new(13.0, 2.0, 3.0),
            Vec3A::ZERO,
            Vec3A::new(0.0, 1.0, 0.0),
            20.0,
            16.0 / 9.0,
            aperture,
            10.0,
        )
    }

    #[test]
    fn basis_is_right_handed_and_orthonormal() {
        let cam = test_camera(0.0);
        for b in [cam.u, cam.v, cam.w] {
            assert!((b.length() - 1.0).abs() < 1e-5);
        }
        assert!(cam.u.dot(cam.v).abs() < 1e-5);
        assert!(cam.u.dot(cam.w).abs() < 1e-5);
        assert!(cam.v.dot(cam.w).abs() < 1e-5);
        assert!((cam.u.cross(cam.v) - cam.w).length() < 1e-5);
    }

    #[test]
    fn zero_aperture_center_ray_starts_at_lookfrom() {
        let lookfrom = Vec3A::new(13.0, 2.0, 3.0);
        let cam = test_camera(0.0);

        for _ in 0..50 {
            let r = cam.get_ray(0.5, 0.5);
            assert_eq!(r.origin, lookfrom);
            // The center ray looks straight at the scene center
            let towards = (Vec3A::ZERO - lookfrom).normalize();
            assert!(r.direction.normalize().dot(towards) > 1.0 - 1e-5);
        }
    }

    #[test]
    fn lens_offsets_stay_within_the_aperture() {
        let cam = test_camera(2.0);
        for _ in 0..100 {
            let r = cam.get_ray(0.5, 0.5);
            assert!((r.origin - cam.origin).length() <= cam.lens_radius + 1e-5);
        }
    }
}
