//! Image encoders for the rendered HDR buffer.
//!
//! Three targets: plain-text PPM (P3), 8-bit PNG, and linear OpenEXR. The
//! PPM and PNG paths apply gamma-2 correction; EXR keeps linear radiance.
//! Encoders log failures and return, they never abort the process.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use exr::prelude::write_rgb_file;
use log::{info, warn};

use crate::interval::Interval;
use crate::renderer::HdrImage;

/// Gamma-2 transfer: linear radiance to display value.
fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Save the image as a plain-text PPM (P3) file.
///
/// Each channel is gamma-corrected, clamped to [0, 0.999], scaled by 256 and
/// truncated; pixels are written row-major from the top scanline.
pub fn save_image_as_ppm(image: &HdrImage, output_path: &str) {
    match write_ppm(image, output_path) {
        Ok(()) => info!("image saved as {}", output_path),
        Err(e) => warn!("failed to save PPM image: {}", e),
    }
}

fn write_ppm(image: &HdrImage, output_path: &str) -> io::Result<()> {
    let (width, height) = image.dimensions();
    let mut out = BufWriter::new(File::create(output_path)?);

    writeln!(out, "P3")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")?;

    let intensity = Interval::new(0.0, 0.999);
    for pixel in image.pixels() {
        let r = (256.0 * intensity.clamp(linear_to_gamma(pixel[0]))) as u32;
        let g = (256.0 * intensity.clamp(linear_to_gamma(pixel[1]))) as u32;
        let b = (256.0 * intensity.clamp(linear_to_gamma(pixel[2]))) as u32;
        writeln!(out, "{} {} {}", r, g, b)?;
    }

    out.flush()
}

/// Save the image as an 8-bit PNG with gamma-2 correction.
pub fn save_image_as_png(image: &HdrImage, output_path: &str) {
    let (width, height) = image.dimensions();
    let u8_image = image::ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        image::Rgb([
            (255.0 * linear_to_gamma(pixel[0]).clamp(0.0, 1.0)) as u8,
            (255.0 * linear_to_gamma(pixel[1]).clamp(0.0, 1.0)) as u8,
            (255.0 * linear_to_gamma(pixel[2]).clamp(0.0, 1.0)) as u8,
        ])
    });

    match u8_image.save(output_path) {
        Ok(()) => info!("image saved as {}", output_path),
        Err(e) => warn!("failed to save PNG image: {}", e),
    }
}

/// Save the image as a linear-light OpenEXR file (no tone mapping).
pub fn save_image_as_exr(image: &HdrImage, output_path: &str) {
    let (width, height) = image.dimensions();
    let result = write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        let pixel = image.get_pixel(x as u32, y as u32);
        (pixel[0], pixel[1], pixel[2])
    });

    match result {
        Ok(()) => info!("HDR image saved as {}", output_path),
        Err(e) => warn!("failed to save EXR image: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn gamma_handles_negative_and_bright_values() {
        assert_eq!(linear_to_gamma(-0.5), 0.0);
        assert_eq!(linear_to_gamma(0.25), 0.5);
        assert!(linear_to_gamma(2.0) > 1.0);
    }

    #[test]
    fn ppm_has_header_and_one_line_per_pixel() {
        let mut image = HdrImage::new(2, 2);
        for (_, _, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgb([1.0, 0.25, 0.0]);
        }

        let path = std::env::temp_dir().join("raydiant_ppm_test.ppm");
        let path = path.to_str().unwrap().to_string();
        write_ppm(&image, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "2 2");
        assert_eq!(lines[2], "255");
        assert_eq!(lines.len(), 3 + 4);
        // 1.0 clamps to 0.999 -> 255; 0.25 gammas to 0.5 -> 128
        assert_eq!(lines[3], "255 128 0");
        std::fs::remove_file(&path).ok();
    }
}
