use anyhow::Result;
use clap::Parser;
use memofill_core::{pipeline, RunOptions};

mod config;
mod privacy;
mod ynab;

use config::Config;
use privacy::PrivacyClient;
use ynab::YnabClient;

#[derive(Parser, Debug)]
#[command(
    name = "memofill",
    version,
    about = "Backfill YNAB memos from Privacy.com merchant descriptors"
)]
struct Cli {
    /// Print per-phase diagnostics (same as DEBUG=true)
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    config.verbose |= cli.verbose;

    let ledger = YnabClient::new(&config);
    let issuer = PrivacyClient::new(&config);
    let opts = RunOptions {
        payee_marker: config.privacy_descriptor.clone(),
        verbose: config.verbose,
    };

    let summary = pipeline::run(&ledger, &issuer, &opts).await?;

    if summary.candidates == 0 {
        println!("No unresolved Privacy.com transactions in YNAB");
    } else {
        println!(
            "Updated {} of {} transactions ({} update failures)",
            summary.updated, summary.candidates, summary.update_failures
        );
    }
    Ok(())
}
