//! Screenshot post-processing: corner rounding, drop shadow, flattening.

use image::{Rgb, RgbImage, Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::filter::gaussian_blur_f32;
use imageproc::rect::Rect;

/// Shadow fill before blurring: black at ~70% opacity.
const SHADOW_FILL: Rgba<u8> = Rgba([0, 0, 0, 180]);

/// Replace an image's alpha channel with a rounded-rectangle mask.
///
/// The mask is fully opaque inside the rounded-rect region covering the
/// whole canvas and fully transparent outside it. Any original alpha is
/// discarded.
pub fn round_corners(img: &RgbaImage, radius: u32) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mut out = img.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        pixel.0[3] = if inside_rounded_rect(x, y, width, height, radius) {
            255
        } else {
            0
        };
    }
    out
}

/// Rounded-rect membership test for the pixel at (x, y).
///
/// A pixel is inside unless it falls in one of the four corner squares and
/// lies farther than `radius` from that corner's circle center.
fn inside_rounded_rect(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
    if width == 0 || height == 0 {
        return false;
    }
    let r = radius.min(width / 2).min(height / 2) as i64;
    let (x, y) = (x as i64, y as i64);
    let (w, h) = (width as i64, height as i64);

    let cx = if x < r {
        r
    } else if x > w - 1 - r {
        w - 1 - r
    } else {
        return true;
    };
    let cy = if y < r {
        r
    } else if y > h - 1 - r {
        h - 1 - r
    } else {
        return true;
    };

    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= r * r
}

/// Add a drop shadow behind an image.
///
/// Returns a new canvas padded by `2 * offset` in each dimension: a blurred
/// dark rectangle sits at `(offset, offset)`, and the original image is
/// composited on top at the same position using its own alpha as the mask.
/// The default configuration runs blur sigma 30 against offset 15 — the
/// blur bleeds past the offset boundary, which is the intended look.
pub fn drop_shadow(img: &RgbaImage, offset: u32, blur: f32) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mut canvas = RgbaImage::new(width + offset * 2, height + offset * 2);

    draw_filled_rect_mut(
        &mut canvas,
        Rect::at(offset as i32, offset as i32).of_size(width, height),
        SHADOW_FILL,
    );
    let mut canvas = if blur > 0.0 {
        gaussian_blur_f32(&canvas, blur)
    } else {
        canvas
    };

    imageops::overlay(&mut canvas, img, offset as i64, offset as i64);
    canvas
}

/// Flatten an alpha-bearing canvas onto an opaque base color.
///
/// Every pixel is alpha-blended over `base`; the result has no alpha
/// channel and is ready to persist.
pub fn flatten_onto(canvas: &RgbaImage, base: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let Rgba([r, g, b, a]) = *canvas.get_pixel(x, y);
        Rgb([
            blend_channel(r, base[0], a),
            blend_channel(g, base[1], a),
            blend_channel(b, base[2], a),
        ])
    })
}

fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}
