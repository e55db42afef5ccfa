//! Gradient background synthesis.

use image::{Rgb, RgbImage};

/// Create an opaque canvas with a subtle vertical gradient.
///
/// Each RGB channel interpolates linearly from the base color at the top row
/// to a lightened variant at the bottom: `base + base * 0.2 * (y / height)`,
/// clamped to 255. Color varies by row only.
pub fn gradient_background(width: u32, height: u32, base: [u8; 3]) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        let ratio = y as f64 / height as f64;
        let color = Rgb([
            lighten(base[0], ratio),
            lighten(base[1], ratio),
            lighten(base[2], ratio),
        ]);
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }
    img
}

fn lighten(channel: u8, ratio: f64) -> u8 {
    let value = channel as f64 + channel as f64 * 0.2 * ratio;
    value.min(255.0) as u8
}
