//! raydiant path tracer
//!
//! A stochastic path tracer for sphere scenes: quadratic ray/sphere
//! intersection, Lambertian/Metal/Dielectric scattering, a thin-lens camera,
//! and a recursive radiance integrator evaluated in parallel per pixel.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
