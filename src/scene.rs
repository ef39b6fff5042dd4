//! Procedural example scene.
//!
//! Builds the classic cover layout: a gray ground sphere, a jittered grid of
//! small random spheres, and three large feature spheres. The engine only
//! sees the resulting aggregate; how it was populated is irrelevant to it.

use glam::Vec3A;

use crate::hittable::HittableList;
use crate::material::Material;
use crate::random;
use crate::sphere::Sphere;

/// Build the cover scene with randomly placed small spheres.
pub fn random_scene() -> HittableList {
    let mut world = HittableList::new();

    let ground_material = Material::Lambertian {
        albedo: Vec3A::new(0.5, 0.5, 0.5),
    };
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f32();
            let center = Vec3A::new(
                a as f32 + 0.9 * random::random_f32(),
                0.2,
                b as f32 + 0.9 * random::random_f32(),
            );

            // Keep clear of the large feature spheres
            if (center - Vec3A::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let sphere_material = if choose_mat < 0.8 {
                Material::Lambertian {
                    albedo: random::random_color() * random::random_color(),
                }
            } else if choose_mat < 0.95 {
                Material::Metal {
                    albedo: random::random_color_range(0.5, 1.0),
                    fuzz: random::random_f32_range(0.0, 0.5),
                }
            } else {
                Material::Dielectric {
                    refraction_index: 1.5,
                }
            };

            world.add(Box::new(Sphere::new(center, 0.2, sphere_material)));
        }
    }

    let material1 = Material::Dielectric {
        refraction_index: 1.5,
    };
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 1.0, 0.0), 1.0, material1)));

    let material2 = Material::Lambertian {
        albedo: Vec3A::new(0.4, 0.2, 0.1),
    };
    world.add(Box::new(Sphere::new(Vec3A::new(-4.0, 1.0, 0.0), 1.0, material2)));

    let material3 = Material::Metal {
        albedo: Vec3A::new(0.7, 0.6, 0.5),
        fuzz: 0.0,
    };
    world.add(Box::new(Sphere::new(Vec3A::new(4.0, 1.0, 0.0), 1.0, material3)));

    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_scene_has_ground_grid_and_features() {
        let world = random_scene();
        // Ground + three feature spheres always present; the grid holds at
        // most 22x22 spheres, some skipped near the metal feature sphere.
        assert!(world.objects.len() >= 4);
        assert!(world.objects.len() <= 4 + 22 * 22);
    }
}
