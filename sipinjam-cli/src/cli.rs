//! Command-line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sipinjam_client::ClientConfig;

use crate::commands::{
    auth::LoginArgs, availability::AvailabilityArgs, bookings::BookingsCommand,
    buildings::BuildingsCommand, facilities::FacilitiesCommand, managers::ManagersCommand,
    notifications::NotificationsCommand, search::SearchArgs, transactions::TransactionsCommand,
};

#[derive(Parser)]
#[command(version, about = "Peminjaman gedung dan fasilitas kampus", long_about = None)]
#[command(propagate_version = true)]
#[command(name = "sipinjam")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command; each one can come from the environment
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// API base URL
    #[arg(long, global = true, env = "SIPINJAM_API_URL", default_value = ClientConfig::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SIPINJAM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Rows per page
    #[arg(long, global = true, env = "SIPINJAM_PAGE_SIZE", default_value_t = 10)]
    pub page_size: u32,

    /// Search debounce delay in milliseconds
    #[arg(long, global = true, env = "SIPINJAM_SEARCH_DEBOUNCE_MS", default_value_t = 500)]
    pub debounce_ms: u64,

    /// Directory holding the saved session
    #[arg(long, global = true, env = "SIPINJAM_WORK_DIR", default_value = "./.sipinjam")]
    pub work_dir: PathBuf,

    /// Also write daily-rotated logs into this directory
    #[arg(long, global = true, env = "SIPINJAM_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
            .with_timeout(self.timeout)
            .with_page_size(self.page_size)
            .with_search_debounce_ms(self.debounce_ms)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and save the session
    Login(LoginArgs),
    /// Drop the saved session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Browse and manage buildings
    #[command(subcommand)]
    Buildings(BuildingsCommand),
    /// Interactive building search (type to filter)
    Search(SearchArgs),
    /// Buildings free at a given date and time
    Availability(AvailabilityArgs),
    /// Bookings (peminjaman)
    #[command(subcommand)]
    Bookings(BookingsCommand),
    /// Payment transactions
    #[command(subcommand)]
    Transactions(TransactionsCommand),
    /// Facility lookup list
    #[command(subcommand)]
    Facilities(FacilitiesCommand),
    /// In-app notifications
    #[command(subcommand)]
    Notifications(NotificationsCommand),
    /// Building manager accounts
    #[command(subcommand)]
    Managers(ManagersCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_build_config() {
        let cli = Cli::try_parse_from([
            "sipinjam",
            "--api-url",
            "http://api.kampus.ac.id",
            "--page-size",
            "25",
            "buildings",
            "list",
        ])
        .unwrap();
        let config = cli.global.client_config();
        assert_eq!(config.base_url, "http://api.kampus.ac.id");
        assert_eq!(config.page_size, 25);
    }
}
