//! Line normalization: trimmed, non-empty lines in source order.

/// Splits raw text on line breaks and normalizes the pieces.
pub fn normalize_text(text: &str) -> Vec<String> {
    let lines = collect_lines(text.lines());
    if lines.is_empty() {
        tracing::warn!("No text lines to process.");
    }
    lines
}

/// Normalizes an already split sequence of lines.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let lines = collect_lines(lines.iter().map(|line| line.as_ref()));
    if lines.is_empty() {
        tracing::warn!("No text lines to process.");
    }
    lines
}

fn collect_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
