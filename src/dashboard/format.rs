//! Number and address formatting for table cells.

const SCALES: &[(f64, &str)] = &[
    (1_000_000_000_000.0, "T"),
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Format a numeric string with two decimals and a K/M/B/T suffix.
///
/// Values that do not parse as a finite number render as `-`.
pub fn format_number(value: &str) -> String {
    let num = match value.trim().parse::<f64>() {
        Ok(num) if num.is_finite() => num,
        _ => return "-".to_string(),
    };

    for &(threshold, suffix) in SCALES {
        if num >= threshold {
            return format!("{:.2} {}", num / threshold, suffix);
        }
    }
    format!("{num:.2}")
}

/// First 6 and last 4 characters of an address, joined by `...`.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
