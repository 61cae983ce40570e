//! sipinjam - campus facility booking from the command line
//!
//! Borrower flow: search buildings, check availability, submit and track
//! bookings. Staff flow: review bookings, manage buildings, facilities,
//! building managers and transactions, export reports.

mod cli;
mod commands;
mod context;
mod logging;
mod render;

use clap::Parser;

use cli::Cli;
use context::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env-backed flags
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let log_guard = logging::init(&cli.global)?;

    let ctx = AppContext::new(&cli.global)?;
    tracing::debug!(api = %ctx.client.config().base_url, "sipinjam starting");

    if let Err(e) = commands::run(cli.command, &ctx).await {
        tracing::error!(error = ?e, "Command failed");
        eprintln!("Gagal: {e:#}");
        drop(log_guard);
        std::process::exit(1);
    }
    Ok(())
}
