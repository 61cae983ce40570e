//! Interactive building search
//!
//! Each stdin line replaces the query text; the request goes out once
//! typing pauses for the debounce delay. `:tipe X` sets the type filter,
//! `:tipe` clears it, `:keluar` quits.

use clap::Args;
use shared::models::Building;
use shared::util::format_rupiah;
use shared::{Paginated, view::Pagination};
use sipinjam_client::{BuildingFilter, Loadable, SearchController, SearchPanel};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::non_blank;
use crate::context::AppContext;
use crate::render::{Table, pagination_footer};

#[derive(Args)]
pub struct SearchArgs {
    /// Initial query text
    pub query: Option<String>,

    /// Initial building type filter
    #[arg(long = "type")]
    pub building_type: Option<String>,
}

enum Input {
    Query(String),
    Type(Option<String>),
    Quit,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim().strip_prefix(':') {
        Some("keluar") | Some("q") => Input::Quit,
        Some(rest) if rest.starts_with("tipe") => {
            Input::Type(non_blank(Some(rest["tipe".len()..].to_string())))
        }
        _ => Input::Query(line.to_string()),
    }
}

fn show(page: &Paginated<Building>, filter: &BuildingFilter) {
    println!();
    println!(
        "Hasil untuk \"{}\"{}",
        filter.search,
        filter
            .building_type
            .as_deref()
            .map(|t| format!(" (tipe {t})"))
            .unwrap_or_default()
    );
    if page.items.is_empty() {
        println!("Tidak ada gedung yang cocok");
        return;
    }
    let mut table = Table::new(&["ID", "Nama", "Tipe", "Kapasitas", "Harga"]);
    for b in &page.items {
        table.row(vec![
            b.id.clone(),
            b.name.clone(),
            b.building_type.clone(),
            b.capacity.to_string(),
            format_rupiah(b.price),
        ]);
    }
    table.print();
    println!("{}", pagination_footer(&Pagination::from(page.meta)));
}

pub async fn run(args: SearchArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let initial = BuildingFilter {
        search: args.query.unwrap_or_default(),
        building_type: non_blank(args.building_type),
    };
    let page_size = ctx.page_size();
    let mut panel = SearchPanel::new(initial.clone(), ctx.client.config().search_debounce());
    let (mut controller, mut outcomes) = SearchController::<Paginated<Building>>::new();
    let mut shown = initial.clone();
    let mut results: Loadable<Paginated<Building>> = Loadable::new();

    let submit = |controller: &mut SearchController<Paginated<Building>>, filter: &BuildingFilter| {
        let client = ctx.client.clone();
        let query = filter.to_query(1, page_size);
        controller.submit(async move { client.buildings().list(&query).await })
    };

    // first page on open; the panel itself stays quiet until the user types
    results.start();
    submit(&mut controller, &initial);
    println!("Ketik untuk mencari, `:tipe AULA` untuk filter tipe, `:keluar` untuk berhenti");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match parse_input(&line) {
                    Input::Query(text) => panel.set_query(text),
                    Input::Type(kind) => panel.set_type(kind),
                    Input::Quit => break,
                },
                None => break,
            },

            Some(filter) = panel.next_filter() => {
                tracing::debug!(search = %filter.search, kind = ?filter.building_type, "Search settled");
                shown = filter.clone();
                results.start();
                submit(&mut controller, &filter);
            }

            Some(outcome) = outcomes.recv() => match results.apply(outcome.result) {
                Some(notice) => eprintln!("Gagal: {}", notice.message()),
                None => {
                    if let Some(page) = &results.data {
                        show(page, &shown);
                    }
                }
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse_input(":keluar\n"), Input::Quit));
        assert!(matches!(parse_input(":tipe AULA"), Input::Type(Some(t)) if t == "AULA"));
        assert!(matches!(parse_input(":tipe"), Input::Type(None)));
        assert!(matches!(parse_input("aula barat\n"), Input::Query(q) if q == "aula barat"));
    }
}
