//! Command handlers

pub mod auth;
pub mod availability;
pub mod bookings;
pub mod buildings;
pub mod facilities;
pub mod managers;
pub mod notifications;
pub mod search;
pub mod transactions;

use shared::Paginated;
use shared::view::Pagination;

use crate::cli::Commands;
use crate::context::AppContext;
use crate::render::{Table, pagination_footer};

pub async fn run(command: Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => auth::login(args, ctx).await,
        Commands::Logout => auth::logout(ctx).await,
        Commands::Whoami => auth::whoami(ctx).await,
        Commands::Buildings(cmd) => cmd.run(ctx).await,
        Commands::Search(args) => search::run(args, ctx).await,
        Commands::Availability(args) => availability::run(args, ctx).await,
        Commands::Bookings(cmd) => cmd.run(ctx).await,
        Commands::Transactions(cmd) => cmd.run(ctx).await,
        Commands::Facilities(cmd) => cmd.run(ctx).await,
        Commands::Notifications(cmd) => cmd.run(ctx).await,
        Commands::Managers(cmd) => cmd.run(ctx).await,
    }
}

/// Table followed by the page buttons and item summary
pub(crate) fn print_page<T>(page: &Paginated<T>, table: &Table) {
    if table.is_empty() {
        println!("Tidak ada data");
    } else {
        table.print();
    }
    let pagination = Pagination::from(page.meta);
    if pagination.total_pages > 0 {
        println!();
        println!("{}", pagination_footer(&pagination));
    }
}

/// Blank CLI values mean "no filter"
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
