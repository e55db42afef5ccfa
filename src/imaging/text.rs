//! Caption rendering: font resolution, word-wrap, shadowed text.
//!
//! # Font Resolution
//!
//! Fonts resolve through an ordered candidate list (`bahnschrift.ttf`,
//! `segoeui.ttf`, `arial.ttf`, then common Linux faces) matched
//! case-insensitively against the platform font directories. This is a
//! best-effort lookup: if nothing resolves, the caller skips captions with
//! a warning and keeps composing images.
//!
//! # Shadowed Text
//!
//! Every caption line is drawn twice — once offset by (+2, +2) in
//! semi-transparent black, once at the anchor in a light fill — so the label
//! stays legible over the photographic screenshot area.

use crate::config::TextConfig;
use crate::manifest::Caption;
use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::collections::HashMap;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Vertical offset of the title anchor above the canvas midline.
const TITLE_RISE: i32 = 60;
/// Distance from the title anchor down to the first subtitle line.
const SUBTITLE_DROP: i32 = 60;
/// Spacing between subtitle lines.
const LINE_SPACING: i32 = 35;
/// Horizontal slack subtracted from the annotation width before wrapping.
const WRAP_SLACK: u32 = 20;
/// Shadow offset of the double-draw.
const SHADOW_SHIFT: i32 = 2;

const TITLE_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TITLE_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 150]);
const SUBTITLE_FILL: Rgba<u8> = Rgba([200, 200, 200, 255]);
const SUBTITLE_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 100]);

/// Platform directories scanned for font files. Missing ones are skipped.
fn font_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
    if let Some(home) = home {
        let home = PathBuf::from(home);
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs.into_iter().filter(|d| d.is_dir()).collect()
}

/// Resolve the first available font from an ordered candidate list.
///
/// Candidates are filenames (e.g. `"arial.ttf"`) matched case-insensitively
/// anywhere under the platform font directories. Returns `None` when no
/// candidate is found or none parses as a font — never an error.
pub fn resolve_font(candidates: &[String]) -> Option<FontVec> {
    let mut index: HashMap<String, PathBuf> = HashMap::new();
    for dir in font_search_dirs() {
        for entry in WalkDir::new(dir).into_iter().flatten() {
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                index
                    .entry(name.to_lowercase())
                    .or_insert_with(|| entry.path().to_path_buf());
            }
        }
    }

    for candidate in candidates {
        let Some(path) = index.get(&candidate.to_lowercase()) else {
            continue;
        };
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        if let Ok(font) = FontVec::try_from_vec(bytes) {
            return Some(font);
        }
    }
    None
}

/// Greedy word-wrap against a maximum rendered line width.
///
/// `measure` returns the rendered pixel width of a candidate line. When
/// adding a word would exceed `max_width`, the current line is closed —
/// unless it would then be empty, in which case the overlong word stands
/// alone on its own line.
pub fn wrap_words<F>(text: &str, max_width: u32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        if measure(&current.join(" ")) > max_width {
            if current.len() > 1 {
                current.pop();
                lines.push(current.join(" "));
                current = vec![word];
            } else {
                lines.push(word.to_string());
                current.clear();
            }
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// Rendered pixel width of `text` at the given size.
pub fn measure_width(font: &impl Font, size: f32, text: &str) -> u32 {
    text_size(PxScale::from(size), font, text).0
}

/// Draw a shadowed line: (+2, +2) shadow pass, then the fill at the anchor.
fn draw_shadowed_line(
    canvas: &mut RgbaImage,
    font: &impl Font,
    size: f32,
    x: i32,
    y: i32,
    shadow: Rgba<u8>,
    fill: Rgba<u8>,
    text: &str,
) {
    let scale = PxScale::from(size);
    draw_text_mut(
        canvas,
        shadow,
        x + SHADOW_SHIFT,
        y + SHADOW_SHIFT,
        scale,
        font,
        text,
    );
    draw_text_mut(canvas, fill, x, y, scale, font, text);
}

/// Render a caption column anchored at `caption_x`.
///
/// The title sits `TITLE_RISE` px above the vertical midline; subtitle lines
/// are word-wrapped to `annotation_width - WRAP_SLACK` px and drawn from
/// `SUBTITLE_DROP` px below the title, `LINE_SPACING` px apart.
pub fn draw_caption(
    canvas: &mut RgbaImage,
    caption: &Caption,
    caption_x: i64,
    annotation_width: u32,
    text_config: &TextConfig,
    font: &FontVec,
) {
    let x = caption_x as i32;
    let title_y = canvas.height() as i32 / 2 - TITLE_RISE;

    draw_shadowed_line(
        canvas,
        font,
        text_config.title_size,
        x,
        title_y,
        TITLE_SHADOW,
        TITLE_FILL,
        &caption.title,
    );

    let Some(subtitle) = caption.subtitle.as_deref() else {
        return;
    };
    let max_width = annotation_width.saturating_sub(WRAP_SLACK);
    let lines = wrap_words(subtitle, max_width, |line| {
        measure_width(font, text_config.subtitle_size, line)
    });
    for (i, line) in lines.iter().enumerate() {
        let line_y = title_y + SUBTITLE_DROP + i as i32 * LINE_SPACING;
        draw_shadowed_line(
            canvas,
            font,
            text_config.subtitle_size,
            x,
            line_y,
            SUBTITLE_SHADOW,
            SUBTITLE_FILL,
            line,
        );
    }
}
