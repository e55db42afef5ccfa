//! # Storeframe
//!
//! Composes storefront listing images from raw extension screenshots.
//! Each screenshot is rounded, shadowed, scaled onto a gradient background,
//! and optionally annotated with a title + word-wrapped subtitle, then
//! flattened to an opaque 1280×800 PNG — the dimensions browser-extension
//! stores recommend for listing media.
//!
//! # Architecture: One Pipeline, Many Entries
//!
//! A batch manifest lists `{input, output, caption, side}` entries. Every
//! entry runs the same six-stage pipeline:
//!
//! ```text
//! decode → round corners → drop shadow → scale + place → caption → flatten → save
//! ```
//!
//! Entries share no mutable state, so the batch runner fans them out with
//! rayon and streams progress events back through a channel. A missing input
//! or a failed entry never stops the rest of the batch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | Batch manifest: entries, captions, placement side, JSON loading |
//! | [`config`] | `StyleConfig` — visual settings loaded from TOML with stock defaults |
//! | [`compose`] | Per-entry pipeline + batch runner with progress events |
//! | [`imaging`] | Pixel work: gradient background, shadow, corner mask, layout, text |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! All pixel work goes through the `image` and `imageproc` crates — no
//! ImageMagick, no system libraries. The binary is fully self-contained;
//! download it and it works.
//!
//! ## Layout Math Is Pure
//!
//! Scale and placement arithmetic lives in [`imaging::layout`] as functions
//! over plain numbers. Unit tests exercise every placement case without
//! decoding a single image.
//!
//! ## Manifest Over Hardcoding
//!
//! The batch list is a JSON manifest rather than compiled-in tuples, so
//! adding a screenshot is an edit, not a rebuild. `storeframe gen-manifest`
//! prints a stock manifest to start from. Captions accept either a bare
//! string (title only) or a `{title, subtitle}` object.
//!
//! ## Best-Effort Fonts
//!
//! Caption fonts resolve through an ordered candidate list scanned from the
//! platform font directories. If nothing resolves, captions are skipped with
//! a warning — a missing font never aborts an image run.

pub mod compose;
pub mod config;
pub mod imaging;
pub mod manifest;
pub mod output;
