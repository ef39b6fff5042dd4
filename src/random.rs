//! Random number generation for ray tracing.
//!
//! Thread-local ChaCha20 PRNG plus the sampling helpers the tracer needs:
//! uniform floats, colors, and points on/in the unit sphere and unit disk.
//! Each thread seeds its own generator, so rayon workers draw from
//! independent streams.

use glam::Vec3A;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

thread_local! {
    /// Thread-local ChaCha20 PRNG, seeded per thread.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32() -> f32 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f32 in [min, max)
pub fn random_f32_range(min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32()
}

/// Generate a random RGB color with components in [0.0, 1.0).
pub fn random_color() -> Vec3A {
    Vec3A::new(random_f32(), random_f32(), random_f32())
}

/// Generate a random RGB color with components in [min, max).
pub fn random_color_range(min: f32, max: f32) -> Vec3A {
    Vec3A::new(
        random_f32_range(min, max),
        random_f32_range(min, max),
        random_f32_range(min, max),
    )
}

/// Generate a random point inside the unit sphere using rejection sampling.
pub fn random_in_unit_sphere() -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(-1.0, 1.0),
            random_f32_range(-1.0, 1.0),
            random_f32_range(-1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate a random unit vector uniformly distributed on the unit sphere.
pub fn random_unit_vector() -> Vec3A {
    // Uniform longitude, uniform z; avoids the rejection loop.
    let theta = 2.0 * std::f32::consts::PI * random_f32();
    let z = 2.0 * random_f32() - 1.0;
    let r = (1.0 - z * z).sqrt();
    Vec3A::new(r * theta.cos(), r * theta.sin(), z)
}

/// Generate a random point inside the unit disk (z = 0) using rejection sampling.
pub fn random_in_unit_disk() -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(-1.0, 1.0),
            random_f32_range(-1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
