//! Pixel work — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Gradient background** | row-wise fill over `image::RgbImage` |
//! | **Corner rounding** | closed-form rounded-rect alpha mask |
//! | **Drop shadow** | `imageproc::filter::gaussian_blur_f32` + alpha overlay |
//! | **Scaling** | `image::imageops::resize` with `Lanczos3` |
//! | **Captions** | `imageproc::drawing` glyph rasterization (`ab_glyph`) |
//!
//! The module is split into:
//! - **Layout**: pure placement math (unit testable, no images)
//! - **Background**: gradient canvas synthesis
//! - **Effects**: corner mask, shadow, final flatten
//! - **Text**: font resolution, word-wrap, caption drawing

pub mod background;
pub mod effects;
pub mod layout;
pub mod text;

pub use background::gradient_background;
pub use effects::{drop_shadow, flatten_onto, round_corners};
pub use layout::{LayoutParams, Placement, place};
pub use text::{draw_caption, resolve_font, wrap_words};
