//! jager-query
//!
//! Looks up Jager holder rewards and airdrop status for a batch of wallet
//! addresses and prints the merged results as two tables.
//!
//! ```text
//!   addresses ──▶ normalize ──▶ for each address, in order:
//!                                  ┌──────────────┐   ┌───────────────┐
//!                                  │ queryReward  │   │ queryAirdrop  │  (concurrent)
//!                                  └──────┬───────┘   └───────┬───────┘
//!                                         └──── merge ────────┘
//!                                                 │
//!                                           fixed delay
//!                                                 │
//!                     tables ◀── render ◀── ResultSet (all or nothing)
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use jager_query::batch::BatchOrchestrator;
use jager_query::config::{load_config, OutputFormat, QueryConfig};
use jager_query::dashboard::{render, run_session, Dashboard, RenderOptions};
use jager_query::observability::init_logging;
use jager_query::upstream::{JagerClient, QueryError};

#[derive(Parser)]
#[command(name = "jager-query")]
#[command(about = "Batch lookup of Jager holder rewards and airdrop status", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to query (repeatable).
    #[arg(short, long = "address", value_name = "ADDR")]
    addresses: Vec<String>,

    /// File with one address per line ("-" for stdin).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Run an interactive dashboard session (addresses are read from the prompt).
    #[arg(short, long, conflicts_with_all = ["addresses", "file"])]
    interactive: bool,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Pause after each address, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Link wallet cells to the referral page (OSC 8 terminals).
    #[arg(long)]
    hyperlinks: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut QueryConfig) {
        if let Some(format) = self.format {
            config.display.format = format;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.batch.delay_ms = delay_ms;
        }
        if self.hyperlinks {
            config.display.hyperlinks = true;
        }
    }

    /// Collect the address block from arguments, the file, or stdin.
    fn read_addresses(&self) -> io::Result<String> {
        let mut block = self.addresses.join("\n");

        let read_stdin = match &self.file {
            Some(path) if path.as_os_str() == "-" => true,
            Some(path) => {
                block.push('\n');
                block.push_str(&std::fs::read_to_string(path)?);
                false
            }
            None => self.addresses.is_empty(),
        };

        if read_stdin {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            block.push('\n');
            block.push_str(&input);
        }
        Ok(block)
    }
}

/// Build the dashboard for a loaded configuration.
fn build_dashboard(config: &QueryConfig) -> Result<Dashboard, QueryError> {
    let client = JagerClient::new(&config.upstream)?;
    Ok(Dashboard::new(BatchOrchestrator::new(client, &config.batch)))
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load {}: {}", path.display(), e);
                return Ok(ExitCode::from(2));
            }
        },
        None => QueryConfig::default(),
    };
    cli.apply_overrides(&mut config);

    init_logging(&config.observability.log_level);
    tracing::info!(
        base_url = %config.upstream.base_url,
        delay_ms = config.batch.delay_ms,
        "Configuration loaded"
    );

    let mut dashboard = match build_dashboard(&config) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(ExitCode::from(2));
        }
    };
    let options = RenderOptions::from(&config.display);

    if cli.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        run_session(&mut dashboard, stdin, &mut io::stdout(), &options).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let block = cli.read_addresses()?;
    if !Dashboard::can_submit(&block) {
        eprintln!("Error: {}", QueryError::NoAddresses);
        return Ok(ExitCode::from(2));
    }

    match dashboard.submit(&block).await {
        Ok(results) => {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", render(results, &options)?)?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("query failed: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
