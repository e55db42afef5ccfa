//! CLI output formatting.
//!
//! Each concern has a `format_*` function returning plain strings and a
//! `print_*` wrapper that writes to stdout. Format functions are pure — no
//! I/O, no side effects — so tests assert on exact lines.
//!
//! ```text
//! Processing: popup-dark.png
//! Created: screenshots/store-listing/1-popup-dark.png
//! Warning: screenshots/ghost.png not found
//!
//! Created 3 listing images in screenshots/store-listing
//!   Dimensions: 1280x800 (store recommended)
//!   Skipped: 1 missing input
//! ```

use crate::compose::{BatchSummary, ComposeEvent};
use crate::config::StyleConfig;
use crate::manifest::Manifest;
use std::path::Path;

/// Format one progress event as a console line.
pub fn format_compose_event(event: &ComposeEvent) -> String {
    match event {
        ComposeEvent::NoCaptionFont => {
            "Warning: no caption font found, captions will be skipped".to_string()
        }
        ComposeEvent::Started { input } => format!("Processing: {input}"),
        ComposeEvent::MissingInput { input } => format!("Warning: {input} not found"),
        ComposeEvent::Created { output } => format!("Created: {output}"),
        ComposeEvent::Failed { output, message } => format!("Failed: {output}: {message}"),
    }
}

pub fn print_compose_event(event: &ComposeEvent) {
    println!("{}", format_compose_event(event));
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Format the end-of-run summary block.
pub fn format_summary(summary: &BatchSummary, style: &StyleConfig, output_dir: &Path) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "Created {} listing image{} in {}",
            summary.created,
            plural(summary.created),
            output_dir.display()
        ),
        format!(
            "  Dimensions: {}x{} (store recommended)",
            style.canvas.width, style.canvas.height
        ),
    ];
    if summary.skipped > 0 {
        lines.push(format!(
            "  Skipped: {} missing input{}",
            summary.skipped,
            plural(summary.skipped)
        ));
    }
    if summary.failed > 0 {
        lines.push(format!(
            "  Failed: {} entr{}",
            summary.failed,
            if summary.failed == 1 { "y" } else { "ies" }
        ));
    }
    lines
}

pub fn print_summary(summary: &BatchSummary, style: &StyleConfig, output_dir: &Path) {
    for line in format_summary(summary, style, output_dir) {
        println!("{line}");
    }
}

/// Format the `check` listing: every entry with its caption status and
/// whether the input exists on disk.
pub fn format_check_output(manifest: &Manifest, source_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let mut missing = 0usize;

    for (i, entry) in manifest.entries.iter().enumerate() {
        let caption = match &entry.caption {
            Some(c) if c.subtitle.is_some() => "title + subtitle",
            Some(_) => "title",
            None => "no caption",
        };
        lines.push(format!(
            "{:0>3} {} -> {} ({caption})",
            i + 1,
            entry.input,
            entry.output
        ));
        if !source_dir.join(&entry.input).exists() {
            lines.push("    Missing input".to_string());
            missing += 1;
        }
    }

    lines.push(String::new());
    if missing == 0 {
        lines.push(format!("{} entries, all inputs present", manifest.entries.len()));
    } else {
        lines.push(format!(
            "{} entries, {missing} missing input{}",
            manifest.entries.len(),
            plural(missing)
        ));
    }
    lines
}

pub fn print_check_output(manifest: &Manifest, source_dir: &Path) {
    for line in format_check_output(manifest, source_dir) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{BatchEntry, Caption, Side};

    #[test]
    fn event_lines_match_contract() {
        assert_eq!(
            format_compose_event(&ComposeEvent::Started {
                input: "popup-dark.png".into()
            }),
            "Processing: popup-dark.png"
        );
        assert_eq!(
            format_compose_event(&ComposeEvent::Created {
                output: "out/1.png".into()
            }),
            "Created: out/1.png"
        );
        assert_eq!(
            format_compose_event(&ComposeEvent::MissingInput {
                input: "shots/ghost.png".into()
            }),
            "Warning: shots/ghost.png not found"
        );
    }

    #[test]
    fn failed_line_includes_reason() {
        let line = format_compose_event(&ComposeEvent::Failed {
            output: "1-bad.png".into(),
            message: "Image error: bad header".into(),
        });
        assert!(line.starts_with("Failed: 1-bad.png"));
        assert!(line.contains("bad header"));
    }

    #[test]
    fn summary_omits_zero_counts() {
        let summary = BatchSummary {
            created: 4,
            skipped: 0,
            failed: 0,
        };
        let lines = format_summary(&summary, &StyleConfig::default(), Path::new("out"));

        assert!(lines.iter().any(|l| l == "Created 4 listing images in out"));
        assert!(lines.iter().any(|l| l.contains("1280x800")));
        assert!(!lines.iter().any(|l| l.contains("Skipped")));
        assert!(!lines.iter().any(|l| l.contains("Failed")));
    }

    #[test]
    fn summary_reports_skips_and_failures() {
        let summary = BatchSummary {
            created: 1,
            skipped: 1,
            failed: 2,
        };
        let lines = format_summary(&summary, &StyleConfig::default(), Path::new("out"));

        assert!(lines.iter().any(|l| l == "Created 1 listing image in out"));
        assert!(lines.iter().any(|l| l == "  Skipped: 1 missing input"));
        assert!(lines.iter().any(|l| l == "  Failed: 2 entries"));
    }

    #[test]
    fn check_output_flags_missing_inputs() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("here.png"), b"x").unwrap();

        let manifest = Manifest {
            entries: vec![
                BatchEntry {
                    input: "here.png".into(),
                    output: "1-here.png".into(),
                    caption: Some(Caption::title_only("Title")),
                    side: Side::Right,
                },
                BatchEntry {
                    input: "ghost.png".into(),
                    output: "2-ghost.png".into(),
                    caption: None,
                    side: Side::Right,
                },
            ],
        };

        let lines = format_check_output(&manifest, tmp.path());
        assert_eq!(lines[0], "001 here.png -> 1-here.png (title)");
        assert_eq!(lines[1], "002 ghost.png -> 2-ghost.png (no caption)");
        assert_eq!(lines[2], "    Missing input");
        assert_eq!(lines.last().unwrap(), "2 entries, 1 missing input");
    }
}
