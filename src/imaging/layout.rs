//! Pure placement math for the composed canvas.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! The screenshot (already shadow-padded) is scaled to the largest size that
//! fits the available box, then the screenshot + caption column combo is
//! centered horizontally and the screenshot centered vertically:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  padding                                 │
//! │   ┌───────────────────┐   ┌─caption─┐    │
//! │   │                   │gap│ Title   │    │
//! │   │    screenshot     │   │ subtitle│    │
//! │   │                   │   │ lines…  │    │
//! │   └───────────────────┘   └─────────┘    │
//! │                                 padding  │
//! └──────────────────────────────────────────┘
//! ```

use crate::manifest::Side;

/// Canvas geometry driving a placement computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub padding: u32,
    pub annotation_width: u32,
    pub gap: u32,
    /// Uniform shrink applied after fitting, default 0.98 (2% breathing room).
    pub scale_margin: f64,
}

/// Computed placement for one screenshot on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    /// Left edge of the scaled screenshot.
    pub image_x: i64,
    /// Top edge of the scaled screenshot.
    pub image_y: i64,
    /// Left edge of the caption column, when a caption is present.
    pub caption_x: Option<i64>,
}

/// Compute scale and placement for a screenshot of `image_width × image_height`.
///
/// When a caption is present, an annotation column (`annotation_width` plus
/// `gap`) is reserved beside the screenshot on the given side and the whole
/// combo is centered. The scale is uniform and chosen so the scaled image
/// fits the available box, then multiplied by `scale_margin` so the content
/// never touches the computed bounds.
pub fn place(
    params: &LayoutParams,
    image_width: u32,
    image_height: u32,
    side: Side,
    has_caption: bool,
) -> Placement {
    let reserved = if has_caption {
        params.annotation_width + params.gap
    } else {
        0
    };
    let avail_width = params.canvas_width.saturating_sub(params.padding * 2 + reserved);
    let avail_height = params.canvas_height.saturating_sub(params.padding * 2);

    let scale = (avail_width as f64 / image_width as f64)
        .min(avail_height as f64 / image_height as f64)
        * params.scale_margin;
    let scaled_width = (image_width as f64 * scale).round() as u32;
    let scaled_height = (image_height as f64 * scale).round() as u32;

    let combo_width = scaled_width as i64 + reserved as i64;
    let combo_x = (params.canvas_width as i64 - combo_width) / 2;

    let (image_x, caption_x) = if !has_caption {
        (combo_x, None)
    } else {
        match side {
            Side::Right => (
                combo_x,
                Some(combo_x + scaled_width as i64 + params.gap as i64),
            ),
            Side::Left => (
                combo_x + params.annotation_width as i64 + params.gap as i64,
                Some(combo_x),
            ),
        }
    };
    let image_y = (params.canvas_height as i64 - scaled_height as i64) / 2;

    Placement {
        scale,
        scaled_width,
        scaled_height,
        image_x,
        image_y,
        caption_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_params() -> LayoutParams {
        LayoutParams {
            canvas_width: 1280,
            canvas_height: 800,
            padding: 60,
            annotation_width: 240,
            gap: 50,
            scale_margin: 0.98,
        }
    }

    #[test]
    fn scaled_image_fits_available_box() {
        let params = stock_params();
        for (w, h) in [(430u32, 330u32), (1920, 1080), (300, 900), (64, 64)] {
            for has_caption in [true, false] {
                let p = place(&params, w, h, Side::Right, has_caption);
                let reserved = if has_caption { 290 } else { 0 };
                let avail_w = 1280 - 120 - reserved;
                let avail_h = 800 - 120;
                assert!(
                    p.scaled_width <= avail_w,
                    "{w}x{h} caption={has_caption}: {} > {avail_w}",
                    p.scaled_width
                );
                assert!(p.scaled_height <= avail_h);
            }
        }
    }

    #[test]
    fn scaled_dimensions_are_rounded_products() {
        let params = stock_params();
        let p = place(&params, 430, 330, Side::Right, true);
        assert_eq!(p.scaled_width, (430.0 * p.scale).round() as u32);
        assert_eq!(p.scaled_height, (330.0 * p.scale).round() as u32);
    }

    #[test]
    fn margin_keeps_content_strictly_inside() {
        // Shape that fits the available box exactly at scale / 0.98
        let params = stock_params();
        let p = place(&params, 870, 500, Side::Right, true);
        assert!(p.scaled_width < 870);
    }

    #[test]
    fn caption_right_puts_screenshot_left_of_center() {
        // 400x300 source padded by a 15px shadow on each side
        let params = stock_params();
        let p = place(&params, 430, 330, Side::Right, true);

        let image_center = p.image_x + p.scaled_width as i64 / 2;
        assert!(
            image_center < 640,
            "image center {image_center} should sit left of canvas center"
        );
        let caption_x = p.caption_x.unwrap();
        assert_eq!(caption_x, p.image_x + p.scaled_width as i64 + 50);
    }

    #[test]
    fn caption_left_puts_screenshot_right_of_caption() {
        let params = stock_params();
        let p = place(&params, 430, 330, Side::Left, true);

        let caption_x = p.caption_x.unwrap();
        assert_eq!(p.image_x, caption_x + 240 + 50);
        let image_center = p.image_x + p.scaled_width as i64 / 2;
        assert!(image_center > 640);
    }

    #[test]
    fn no_caption_centers_screenshot_exactly() {
        let params = stock_params();
        let p = place(&params, 430, 330, Side::Right, false);

        assert!(p.caption_x.is_none());
        assert_eq!(p.image_x, (1280 - p.scaled_width as i64) / 2);
    }

    #[test]
    fn screenshot_is_vertically_centered() {
        let params = stock_params();
        let p = place(&params, 430, 330, Side::Right, true);
        assert_eq!(p.image_y, (800 - p.scaled_height as i64) / 2);
    }

    #[test]
    fn combo_is_horizontally_centered() {
        let params = stock_params();
        let p = place(&params, 430, 330, Side::Right, true);

        let combo_width = p.scaled_width as i64 + 290;
        assert_eq!(p.image_x, (1280 - combo_width) / 2);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let params = stock_params();
        let p = place(&params, 800, 600, Side::Right, false);

        let in_aspect = 800.0 / 600.0;
        let out_aspect = p.scaled_width as f64 / p.scaled_height as f64;
        assert!((in_aspect - out_aspect).abs() < 0.01);
    }
}
