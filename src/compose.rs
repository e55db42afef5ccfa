//! The compose pipeline and batch runner.
//!
//! Every batch entry runs the same fixed pipeline:
//!
//! ```text
//! decode → round corners → drop shadow → gradient background
//!        → scale + place → caption → flatten → save PNG
//! ```
//!
//! The only branches are the presence of a caption and its side, both fixed
//! per entry before processing starts.
//!
//! ## Batch Semantics
//!
//! - A missing input file is a warning: the entry is skipped and the run
//!   continues.
//! - A decode or write failure is reported for that entry; already-written
//!   outputs stay valid and the remaining entries are still attempted.
//! - Entries share no mutable state, so the runner fans them out with
//!   [rayon](https://docs.rs/rayon). Progress events stream through an
//!   `mpsc` channel drained by the caller's printer thread so console lines
//!   stay whole. `parallel = false` forces one entry at a time.

use crate::config::StyleConfig;
use crate::imaging::layout::LayoutParams;
use crate::imaging::{
    draw_caption, drop_shadow, flatten_onto, gradient_background, place, resolve_font,
    round_corners,
};
use crate::manifest::{BatchEntry, Manifest};
use ab_glyph::FontVec;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader};
use rayon::prelude::*;
use std::path::Path;
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Progress event emitted once per pipeline milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeEvent {
    /// No caption font resolved; captions will be skipped for the run.
    NoCaptionFont,
    Started { input: String },
    MissingInput { input: String },
    Created { output: String },
    Failed { output: String, message: String },
}

/// Per-run counters reported after the batch finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum EntryOutcome {
    Created,
    Skipped,
    Failed,
}

/// Run the full batch: one output image per manifest entry.
///
/// Creates `output_dir` if absent, resolves the caption font once, then
/// processes every entry. Per-entry failures and missing inputs are counted
/// in the summary, never propagated — only output-directory creation can
/// fail the run as a whole.
pub fn run_batch(
    manifest: &Manifest,
    style: &StyleConfig,
    source_dir: &Path,
    output_dir: &Path,
    parallel: bool,
    progress: Option<Sender<ComposeEvent>>,
) -> Result<BatchSummary, ComposeError> {
    std::fs::create_dir_all(output_dir)?;

    let wants_captions = manifest.entries.iter().any(|e| e.caption.is_some());
    let font = if wants_captions {
        let font = resolve_font(&style.text.fonts);
        if font.is_none() {
            emit(&progress, ComposeEvent::NoCaptionFont);
        }
        font
    } else {
        None
    };

    let run_one = |entry: &BatchEntry| -> EntryOutcome {
        let input_path = source_dir.join(&entry.input);
        if !input_path.exists() {
            emit(
                &progress,
                ComposeEvent::MissingInput {
                    input: input_path.display().to_string(),
                },
            );
            return EntryOutcome::Skipped;
        }

        emit(
            &progress,
            ComposeEvent::Started {
                input: entry.input.clone(),
            },
        );
        let output_path = output_dir.join(&entry.output);
        match compose_entry(entry, style, font.as_ref(), &input_path, &output_path) {
            Ok(()) => {
                emit(
                    &progress,
                    ComposeEvent::Created {
                        output: output_path.display().to_string(),
                    },
                );
                EntryOutcome::Created
            }
            Err(e) => {
                emit(
                    &progress,
                    ComposeEvent::Failed {
                        output: entry.output.clone(),
                        message: e.to_string(),
                    },
                );
                EntryOutcome::Failed
            }
        }
    };

    let outcomes: Vec<EntryOutcome> = if parallel {
        manifest.entries.par_iter().map(run_one).collect()
    } else {
        manifest.entries.iter().map(run_one).collect()
    };

    let mut summary = BatchSummary::default();
    for outcome in outcomes {
        match outcome {
            EntryOutcome::Created => summary.created += 1,
            EntryOutcome::Skipped => summary.skipped += 1,
            EntryOutcome::Failed => summary.failed += 1,
        }
    }
    Ok(summary)
}

fn emit(progress: &Option<Sender<ComposeEvent>>, event: ComposeEvent) {
    if let Some(tx) = progress {
        // A dropped receiver just means nobody is listening
        let _ = tx.send(event);
    }
}

/// Compose a single listing image from one screenshot.
pub fn compose_entry(
    entry: &BatchEntry,
    style: &StyleConfig,
    font: Option<&FontVec>,
    input_path: &Path,
    output_path: &Path,
) -> Result<(), ComposeError> {
    let screenshot = ImageReader::open(input_path)?.decode()?.to_rgba8();

    let rounded = round_corners(&screenshot, style.screenshot.corner_radius);
    let shadowed = drop_shadow(
        &rounded,
        style.screenshot.shadow_offset,
        style.screenshot.shadow_blur,
    );

    let params = LayoutParams {
        canvas_width: style.canvas.width,
        canvas_height: style.canvas.height,
        padding: style.layout.padding,
        annotation_width: style.layout.annotation_width,
        gap: style.layout.gap,
        scale_margin: style.screenshot.scale_margin,
    };
    let placement = place(
        &params,
        shadowed.width(),
        shadowed.height(),
        entry.side,
        entry.caption.is_some(),
    );
    let scaled = imageops::resize(
        &shadowed,
        placement.scaled_width,
        placement.scaled_height,
        FilterType::Lanczos3,
    );

    let background = gradient_background(
        style.canvas.width,
        style.canvas.height,
        style.canvas.background,
    );
    let mut canvas = DynamicImage::ImageRgb8(background).to_rgba8();
    imageops::overlay(&mut canvas, &scaled, placement.image_x, placement.image_y);

    if let (Some(caption), Some(font), Some(caption_x)) =
        (entry.caption.as_ref(), font, placement.caption_x)
    {
        draw_caption(
            &mut canvas,
            caption,
            caption_x,
            style.layout.annotation_width,
            &style.text,
            font,
        );
    }

    let final_image = flatten_onto(&canvas, style.canvas.background);
    final_image.save_with_format(output_path, ImageFormat::Png)?;
    Ok(())
}
