//! Text rendering of result sets.
//!
//! Two tables are produced, airdrop status first and reward balances second,
//! both listing addresses in insertion order. Wallet cells show the shortened
//! address and can carry an OSC 8 hyperlink to the referral page.

use crate::batch::ResultSet;
use crate::config::{DisplayConfig, OutputFormat};
use crate::dashboard::format::{format_number, shorten_address};

/// Rendering settings taken from [`DisplayConfig`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub referral_url: String,
    pub hyperlinks: bool,
}

impl From<&DisplayConfig> for RenderOptions {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            format: config.format,
            referral_url: config.referral_url.clone(),
            hyperlinks: config.hyperlinks,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
}

struct Cell {
    text: String,
    link: Option<String>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }
}

const AIRDROP_COLUMNS: &[Column] = &[
    Column { header: "Wallet", align: Align::Left },
    Column { header: "Eligible", align: Align::Center },
    Column { header: "Claim status", align: Align::Center },
    Column { header: "Reward", align: Align::Right },
];

const REWARD_COLUMNS: &[Column] = &[
    Column { header: "Wallet", align: Align::Left },
    Column { header: "Jager", align: Align::Right },
    Column { header: "JagerBNB", align: Align::Right },
    Column { header: "Pending Jager", align: Align::Right },
    Column { header: "Pending JagerBNB", align: Align::Right },
];

/// Render a result set in the configured format.
///
/// An empty set renders as an empty string.
pub fn render(results: &ResultSet, options: &RenderOptions) -> serde_json::Result<String> {
    if results.is_empty() {
        return Ok(String::new());
    }
    match options.format {
        OutputFormat::Table => Ok(format!(
            "{}\n{}",
            render_airdrop_table(results, options),
            render_reward_table(results, options)
        )),
        OutputFormat::Json => render_json(results).map(|json| json + "\n"),
    }
}

/// The result set as a pretty-printed JSON object keyed by address.
pub fn render_json(results: &ResultSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Eligibility, claim status and reward amount per address.
pub fn render_airdrop_table(results: &ResultSet, options: &RenderOptions) -> String {
    let rows: Vec<Vec<Cell>> = results
        .iter()
        .map(|(address, result)| {
            let airdrop = result.airdrop();
            vec![
                wallet_cell(address, options),
                Cell::plain(if airdrop.can_airdrop { "✓ eligible" } else { "✕ not eligible" }),
                Cell::plain(if airdrop.claimed { "claimed" } else { "unclaimed" }),
                Cell::plain(format_number(&airdrop.reward)),
            ]
        })
        .collect();

    draw_table(&title("Airdrop", results.len()), AIRDROP_COLUMNS, &rows)
}

/// Jager token balances per address.
pub fn render_reward_table(results: &ResultSet, options: &RenderOptions) -> String {
    let rows: Vec<Vec<Cell>> = results
        .iter()
        .map(|(address, result)| {
            let reward = result.reward();
            vec![
                wallet_cell(address, options),
                Cell::plain(format_number(&reward.jager)),
                Cell::plain(format_number(&reward.jager_bnb)),
                Cell::plain(format_number(&reward.pending_jager)),
                Cell::plain(format_number(&reward.pending_jager_bnb)),
            ]
        })
        .collect();

    draw_table(&title("Rewards", results.len()), REWARD_COLUMNS, &rows)
}

fn title(name: &str, count: usize) -> String {
    let noun = if count == 1 { "address" } else { "addresses" };
    format!("{name} ({count} {noun})")
}

fn wallet_cell(address: &str, options: &RenderOptions) -> Cell {
    Cell {
        text: shorten_address(address),
        link: options.hyperlinks.then(|| options.referral_url.clone()),
    }
}

fn draw_table(title: &str, columns: &[Column], rows: &[Vec<Cell>]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .map(|row| width_of(&row[i].text))
                .chain(std::iter::once(width_of(column.header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&border);
    out.push('\n');

    out.push('|');
    for (column, &width) in columns.iter().zip(&widths) {
        out.push(' ');
        out.push_str(&pad(column.header, width, column.align));
        out.push_str(" |");
    }
    out.push('\n');
    out.push_str(&border);
    out.push('\n');

    for row in rows {
        out.push('|');
        for ((cell, column), &width) in row.iter().zip(columns).zip(&widths) {
            out.push(' ');
            out.push_str(&pad_cell(cell, width, column.align));
            out.push_str(" |");
        }
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn padding(text: &str, width: usize, align: Align) -> (usize, usize) {
    let fill = width.saturating_sub(width_of(text));
    match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let (left, right) = padding(text, width, align);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

// Padding is measured on the visible text; escape sequences add no width.
fn pad_cell(cell: &Cell, width: usize, align: Align) -> String {
    let (left, right) = padding(&cell.text, width, align);
    let body = match &cell.link {
        Some(url) => hyperlink(&cell.text, url),
        None => cell.text.clone(),
    };
    format!("{}{}{}", " ".repeat(left), body, " ".repeat(right))
}

fn hyperlink(text: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}
