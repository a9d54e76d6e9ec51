//! Formatting helpers shared by the adapter and the CLI.

use crate::constants::PROGRESS_BAR_TEMPLATE;
use indicatif::{ProgressBar, ProgressStyle};

/// Format a byte count in human-readable form (1024-based units).
///
/// Savings can be negative when a compressor grows a file, so the input is
/// signed and negative values render with a leading `-`.
pub fn format_file_size(bytes: i64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes < 0 {
        return format!("-{}", format_file_size(-bytes));
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Format a percentage with one decimal, stripping a trailing `.0`:
/// `50.0` renders as `50`, `33.33` as `33.3`.
pub fn format_percent(percent: f64) -> String {
    let s = format!("{:.1}", percent);
    s.strip_suffix(".0").unwrap_or(&s).to_string()
}

/// Pluralize a word by count: `image` for 1, `images` otherwise.
pub fn plural(word: &str, count: u64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Per-file result message: `saved <bytes> - <percent>%` when the optimizer
/// shrank the payload, `already optimized` otherwise.
pub fn saved_message(original_size: u64, optimized_size: u64) -> String {
    let saved = original_size as i64 - optimized_size as i64;
    let percent = if original_size > 0 {
        saved as f64 / original_size as f64 * 100.0
    } else {
        0.0
    };

    if saved > 0 {
        format!(
            "saved {} - {}%",
            format_file_size(saved),
            format_percent(percent)
        )
    } else {
        "already optimized".to_string()
    }
}

pub fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .expect("Invalid progress template")
            .progress_chars("#>-"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_file_size_bytes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(400), "400 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn format_file_size_larger_units() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn format_file_size_negative() {
        assert_eq!(format_file_size(-400), "-400 B");
        assert_eq!(format_file_size(-1536), "-1.5 KB");
    }

    #[test]
    fn format_percent_strips_trailing_zero() {
        assert_eq!(format_percent(50.0), "50");
        assert_eq!(format_percent(40.0), "40");
        assert_eq!(format_percent(33.33), "33.3");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(-12.5), "-12.5");
    }

    #[test]
    fn plural_by_count() {
        assert_eq!(plural("image", 0), "images");
        assert_eq!(plural("image", 1), "image");
        assert_eq!(plural("image", 2), "images");
    }

    #[test]
    fn saved_message_with_savings() {
        assert_eq!(saved_message(1000, 600), "saved 400 B - 40%");
    }

    #[test]
    fn saved_message_without_savings() {
        assert_eq!(saved_message(1000, 1000), "already optimized");
        assert_eq!(saved_message(1000, 1200), "already optimized");
        assert_eq!(saved_message(0, 0), "already optimized");
    }

    #[test]
    fn saved_message_fractional_percent() {
        assert_eq!(saved_message(3000, 2000), "saved 1000 B - 33.3%");
    }
}
