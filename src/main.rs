use clap::Parser;
use log::info;

use glam::Vec3A;

mod camera;
mod cli;
mod hittable;
mod interval;
mod logger;
mod material;
mod output;
mod random;
mod ray;
mod renderer;
mod scene;
mod sphere;

use camera::Camera;
use cli::Args;
use hittable::HittableList;
use logger::init_logger;
use output::{save_image_as_exr, save_image_as_png, save_image_as_ppm};
use renderer::{HdrImage, RenderConfig};

/// Camera setup for the cover scene: high vantage point, narrow field of
/// view, slight defocus blur focused on the scene center.
fn cover_camera(aspect_ratio: f32) -> Camera {
    Camera::new(
        Vec3A::new(13.0, 2.0, 3.0),
        Vec3A::ZERO,
        Vec3A::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.1,
        10.0,
    )
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!("raydiant - git version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let config = RenderConfig::new(
        args.width,
        args.aspect_ratio,
        args.samples_per_pixel,
        args.max_depth,
    );
    info!(
        "image resolution: {}x{}, samples per pixel: {}, max depth: {}",
        config.image_width, config.image_height, config.samples_per_pixel, config.max_depth
    );

    let world = scene::random_scene();
    let camera = cover_camera(args.aspect_ratio);

    if args.bench {
        run_benchmark(&world, &camera, &config);
        return;
    }

    let image = if args.sequential {
        renderer::render_sequential(&world, &camera, &config)
    } else {
        renderer::render(&world, &camera, &config)
    };

    save_image(&image, &args.output);
}

/// Dispatch on the output extension; unsupported formats are fatal.
fn save_image(image: &HdrImage, output_path: &str) {
    if output_path.ends_with(".ppm") {
        save_image_as_ppm(image, output_path);
    } else if output_path.ends_with(".png") {
        save_image_as_png(image, output_path);
    } else if output_path.ends_with(".exr") {
        save_image_as_exr(image, output_path);
    } else {
        log::error!(
            "unsupported file extension '{}'. Only .ppm, .png and .exr are supported.",
            std::path::Path::new(output_path)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}

/// Render the same scene with both evaluators and report wall times.
fn run_benchmark(world: &HittableList, camera: &Camera, config: &RenderConfig) {
    info!("benchmark: parallel vs sequential pixel evaluation");

    let parallel_start = std::time::Instant::now();
    let parallel_image = renderer::render(world, camera, config);
    let parallel_time = parallel_start.elapsed();
    save_image_as_png(&parallel_image, "bench_parallel.png");

    let sequential_start = std::time::Instant::now();
    let sequential_image = renderer::render_sequential(world, camera, config);
    let sequential_time = sequential_start.elapsed();
    save_image_as_png(&sequential_image, "bench_sequential.png");

    let speedup = sequential_time.as_secs_f32() / parallel_time.as_secs_f32();
    info!("================ BENCHMARK RESULTS ================");
    info!("resolution: {}x{}, samples: {}", config.image_width, config.image_height, config.samples_per_pixel);
    info!("sequential: {:>8.2}s    1.0x    bench_sequential.png", sequential_time.as_secs_f32());
    info!("parallel:   {:>8.2}s  {:>5.1}x    bench_parallel.png", parallel_time.as_secs_f32(), speedup);
    info!("===================================================");
}
