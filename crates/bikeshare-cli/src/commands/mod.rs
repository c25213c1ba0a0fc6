//! CLI command implementations.

pub mod coverage;
pub mod export;
pub mod serve;
pub mod summary;

/// Render a proportional text bar of `width` cells.
pub(crate) fn bar(value: u64, max: u64, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}
