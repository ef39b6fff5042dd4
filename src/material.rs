//! Material system for ray tracing.
//!
//! Implements three scattering laws: Lambertian (diffuse), Metal (specular
//! with fuzz), and Dielectric (refractive with Fresnel-weighted reflection).

use glam::Vec3A;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Outcome of a scattering event: the color multiplier and the next ray.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    /// Color attenuation applied to the scattered ray's radiance
    pub attenuation: Color,
    /// The continuation ray leaving the surface
    pub scattered: Ray,
}

/// Surface material variants.
///
/// A closed set of scattering laws; spheres sharing a material copy the
/// small value. No per-instance state changes after construction.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color,
    },
    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness (0.0 = mirror, 1.0 = rough).
        fuzz: f32,
    },
    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f32,
    },
}

impl Material {
    /// Compute ray scattering for this material.
    ///
    /// Returns `None` when the ray is absorbed.
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => scatter_lambertian(albedo, rec),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec),
            Material::Dielectric { refraction_index } => {
                scatter_dielectric(refraction_index, r_in, rec)
            }
        }
    }
}

/// Diffuse scattering: offset the normal by a random unit vector.
fn scatter_lambertian(albedo: Color, rec: &HitRecord) -> Option<Scatter> {
    let mut scatter_direction = rec.normal + random::random_unit_vector();

    // Catch degenerate scatter direction
    if near_zero(scatter_direction) {
        scatter_direction = rec.normal;
    }

    Some(Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, scatter_direction),
    })
}

/// Mirror reflection perturbed by fuzz; absorbed if the perturbed direction
/// falls below the surface.
fn scatter_metal(albedo: Color, fuzz: f32, r_in: &Ray, rec: &HitRecord) -> Option<Scatter> {
    let reflected = reflect(r_in.direction.normalize(), rec.normal);
    let direction = reflected + fuzz.min(1.0) * random::random_in_unit_sphere();

    if direction.dot(rec.normal) > 0.0 {
        Some(Scatter {
            attenuation: albedo,
            scattered: Ray::new(rec.p, direction),
        })
    } else {
        None
    }
}

/// Refraction with total-internal-reflection and Schlick-weighted
/// reflection. Glass is lossless: attenuation is always white.
fn scatter_dielectric(refraction_index: f32, r_in: &Ray, rec: &HitRecord) -> Option<Scatter> {
    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;

    let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f32() {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    Some(Scatter {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.p, direction),
    })
}

/// True when every component magnitude is below 1e-8.
fn near_zero(v: Vec3A) -> bool {
    v.abs().max_element() < 1e-8
}

/// Reflect a vector off a surface with normal n.
fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through an interface using Snell's law.
fn refract(uv: Vec3A, n: Vec3A, etai_over_etat: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation of the Fresnel reflectance.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
