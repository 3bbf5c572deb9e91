//! Output Formatting
//!
//! Centering, histogram bars, the heatmap color key, and the ingestion
//! progress bar. Pure string builders where possible so they stay
//! testable without a terminal.

use std::io::Write as _;

use crate::cli::colors::Colors;
use crate::db::heatmap::BUCKETS;

const BLOCK: &str = "█";
const EMPTY_BLOCK: &str = "░";

/// Number of visible characters, not bytes.
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Center `s` within `width`, padding with spaces. Strings wider than
/// `width` are returned unchanged.
pub fn center(s: &str, width: usize) -> String {
    let len = display_width(s);
    if len >= width {
        return s.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    format!("{}{}", " ".repeat(left), s)
}

/// Lay out a name/value pair around the midpoint of `width`: the name
/// right-aligned up to the midpoint, a single space, then the value.
pub fn center_pair(left: &str, right: &str, width: usize) -> String {
    let midpoint = width / 2;
    let pad = midpoint.saturating_sub(display_width(left));
    format!("{}{} {}", " ".repeat(pad), left, right)
}

/// A full-block histogram bar of length `count`.
pub fn histogram_bar(count: u64) -> String {
    BLOCK.repeat(count as usize)
}

/// Build a progress bar string: filled/empty blocks plus a percentage.
pub fn progress_bar(width: usize, percent: f64) -> String {
    let filled = (width as f64 * percent) as usize;
    let filled = filled.min(width);
    format!(
        "{}{} {}%",
        BLOCK.repeat(filled),
        EMPTY_BLOCK.repeat(width - filled),
        (percent * 100.0) as u64
    )
}

/// Render in-place progress for step `current` of `total`, optionally
/// pacing each step so the bar is visible on small inputs.
pub fn print_progress(total: usize, current: usize, pause_ms: u64) {
    if total == 0 {
        return;
    }
    if pause_ms > 0 {
        std::thread::sleep(std::time::Duration::from_millis(pause_ms));
    }
    let percent = current as f64 / total as f64;
    print!("{} {} of {}\r", progress_bar(40, percent), current, total);
    let _ = std::io::stdout().flush();
}

/// The heatmap color key: `1 ████ <max>`, one block per bucket,
/// coldest to hottest.
pub fn color_key(colors: &Colors, max_count: u64) -> String {
    let mut key = String::from("Color Key: 1 ");
    for bucket in 0..BUCKETS {
        key.push_str(colors.heat(bucket));
        key.push_str(BLOCK);
    }
    key.push_str(colors.reset());
    key.push(' ');
    key.push_str(&max_count.to_string());
    key
}
