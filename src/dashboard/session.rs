//! Interactive terminal session.
//!
//! Addresses are typed one per line; an empty line submits the block. End of
//! input submits whatever is pending and ends the session.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::batch::normalize_addresses;
use crate::dashboard::render::{render, RenderOptions};
use crate::dashboard::state::Dashboard;

const PROMPT: &str = "Enter wallet addresses, one per line. Submit with an empty line, quit with Ctrl-D.";

/// Read address blocks from `input` until it ends, writing results to `out`.
pub async fn run_session<R, W>(
    dashboard: &mut Dashboard,
    input: R,
    out: &mut W,
    options: &RenderOptions,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut block = String::new();

    writeln!(out, "{PROMPT}")?;
    out.flush()?;

    loop {
        match lines.next_line().await? {
            Some(line) if !line.trim().is_empty() => {
                block.push_str(&line);
                block.push('\n');
            }
            Some(_) => {
                if Dashboard::can_submit(&block) {
                    submit_block(dashboard, &block, out, options).await?;
                    block.clear();
                    writeln!(out, "{PROMPT}")?;
                    out.flush()?;
                }
            }
            None => {
                if Dashboard::can_submit(&block) {
                    submit_block(dashboard, &block, out, options).await?;
                }
                break;
            }
        }
    }

    tracing::debug!("Interactive session ended");
    Ok(())
}

/// Submit one block and print either the new results or the error followed
/// by the results still on display.
async fn submit_block<W: Write>(
    dashboard: &mut Dashboard,
    block: &str,
    out: &mut W,
    options: &RenderOptions,
) -> io::Result<()> {
    let count = normalize_addresses(block).len();
    writeln!(out, "Querying {count} address(es)...")?;
    out.flush()?;

    let outcome = dashboard.submit(block).await.map(|_| ());
    match outcome {
        Ok(()) => {
            write!(out, "{}", render(dashboard.results(), options).map_err(io::Error::other)?)?;
        }
        Err(e) => {
            writeln!(out, "query failed: {e}")?;
            if !dashboard.results().is_empty() {
                writeln!(out, "Showing previous results.")?;
                write!(out, "{}", render(dashboard.results(), options).map_err(io::Error::other)?)?;
            }
        }
    }
    out.flush()
}
