//! Path-tracing integrator and pixel evaluators.
//!
//! `ray_color` is the recursive radiance estimator; `render` fans pixels out
//! across rayon workers while `render_sequential` evaluates the same
//! per-pixel job in a plain loop. Both produce a linear f32 HDR buffer.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::random;
use crate::ray::Ray;

/// RGB color type using Vec3A for SIMD optimization.
type Color = Vec3A;

/// Linear HDR render target.
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Fixed per-render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Rendered image width in pixels
    pub image_width: u32,
    /// Rendered image height in pixels (derived from the aspect ratio)
    pub image_height: u32,
    /// Number of radiance samples averaged per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces
    pub max_depth: u32,
}

impl RenderConfig {
    /// Derive the image height from width and aspect ratio (at least 1).
    pub fn new(image_width: u32, aspect_ratio: f32, samples_per_pixel: u32, max_depth: u32) -> Self {
        let image_height = ((image_width as f32 / aspect_ratio) as u32).max(1);
        Self {
            image_width,
            image_height,
            samples_per_pixel,
            max_depth,
        }
    }
}

/// Compute the radiance arriving along a ray.
///
/// Recursively follows scattered rays until the depth limit is reached, the
/// ray is absorbed, or it escapes into the sky gradient.
pub fn ray_color(r: &Ray, world: &dyn Hittable, depth: u32) -> Color {
    // Depth exhausted: no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    // t_min of 0.001 suppresses shadow acne from the previous bounce
    if let Some(rec) = world.hit(r, Interval::new(0.001, f32::INFINITY)) {
        return match rec.material.scatter(r, &rec) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, world, depth - 1)
            }
            None => Color::ZERO,
        };
    }

    // No hit: blend white to sky blue by the ray's vertical direction
    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

/// Average `samples_per_pixel` jittered radiance estimates for one pixel.
///
/// Image coordinates have y = 0 at the top scanline; viewport t runs bottom
/// to top, so the row index is flipped before normalization.
fn sample_pixel(x: u32, y: u32, camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> Color {
    let j = config.image_height - 1 - y;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (x as f32 + random::random_f32()) / (config.image_width - 1) as f32;
        let t = (j as f32 + random::random_f32()) / (config.image_height - 1) as f32;
        let r = camera.get_ray(s, t);
        pixel_color += ray_color(&r, world, config.max_depth);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Render the scene in parallel across all CPU cores.
///
/// Pixels are independent jobs; the scene and camera are shared read-only,
/// so no synchronization is needed beyond the fan-out/fan-in barrier.
pub fn render(world: &dyn Hittable, camera: &Camera, config: &RenderConfig) -> HdrImage {
    let mut image = HdrImage::new(config.image_width, config.image_height);

    info!("rendering on {} CPU cores...", rayon::current_num_threads());
    let start = std::time::Instant::now();
    let pb = progress_bar(config);

    image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
        let color = sample_pixel(x, y, camera, world, config);
        *pixel = Rgb([color.x, color.y, color.z]);
        pb.inc(1);
    });

    pb.finish();
    info!("image generated in {:.2?}", start.elapsed());
    image
}

/// Render the scene on a single thread.
///
/// Functionally identical to [`render`]; evaluates the pixel jobs in order.
pub fn render_sequential(world: &dyn Hittable, camera: &Camera, config: &RenderConfig) -> HdrImage {
    let mut image = HdrImage::new(config.image_width, config.image_height);

    info!("rendering on a single thread...");
    let start = std::time::Instant::now();
    let pb = progress_bar(config);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let color = sample_pixel(x, y, camera, world, config);
        *pixel = Rgb([color.x, color.y, color.z]);
        pb.inc(1);
    }

    pb.finish();
    info!("image generated in {:.2?}", start.elapsed());
    image
}

fn progress_bar(config: &RenderConfig) -> ProgressBar {
    let pb = ProgressBar::new((config.image_width * config.image_height) as u64);
    pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HittableList;
    use crate::material::Material;
    use crate::sphere::Sphere;

    fn empty_world() -> HittableList {
        HittableList::new()
    }

    #[test]
    fn depth_zero_is_black() {
        let world = empty_world();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert_eq!(ray_color(&r, &world, 0), Color::ZERO);
    }

    #[test]
    fn missed_rays_return_the_sky_gradient() {
        let world = empty_world();
        // Horizontal ray: unit y = 0, so a = 0.5
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let c = ray_color(&r, &world, 10);
        assert!((c - Color::new(0.75, 0.85, 1.0)).length() < 1e-5);

        // Straight up: pure sky blue
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        let c = ray_color(&r, &world, 10);
        assert!((c - Color::new(0.5, 0.7, 1.0)).length() < 1e-5);
    }

    #[test]
    fn ground_sphere_path_terminates() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3A::new(0.0, -1000.0, 0.0),
            1000.0,
            Material::Lambertian {
                albedo: Vec3A::splat(0.5),
            },
        )));

        let r = Ray::new(Vec3A::new(0.0, 10.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));
        for _ in 0..20 {
            let c = ray_color(&r, &world, 50);
            assert!(c.is_finite());
            assert!(c.min_element() >= 0.0);
        }
    }

    #[test]
    fn config_derives_height_from_aspect_ratio() {
        let config = RenderConfig::new(400, 16.0 / 9.0, 10, 50);
        assert_eq!(config.image_height, 225);

        // Extreme ratios still produce a valid image
        let config = RenderConfig::new(10, 100.0, 10, 50);
        assert_eq!(config.image_height, 1);
    }

    #[test]
    fn parallel_and_sequential_agree_on_a_sky_scene() {
        let world = empty_world();
        let camera = Camera::new(
            Vec3A::new(0.0, 0.0, 0.0),
            Vec3A::new(0.0, 0.0, -1.0),
            Vec3A::new(0.0, 1.0, 0.0),
            90.0,
            1.0,
            0.0,
            1.0,
        );
        let config = RenderConfig::new(8, 1.0, 64, 10);

        let parallel = render(&world, &camera, &config);
        let sequential = render_sequential(&world, &camera, &config);

        // Independent jitter, so not bit-identical; averages must agree
        for (p, s) in parallel.pixels().zip(sequential.pixels()) {
            for ch in 0..3 {
                assert!((p[ch] - s[ch]).abs() < 0.05);
            }
        }
    }
}
