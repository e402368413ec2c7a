//! Address list normalization.

/// Split a block of text into addresses: one per line, trimmed, blank lines
/// dropped. Order and duplicates are preserved.
pub fn normalize_addresses(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
