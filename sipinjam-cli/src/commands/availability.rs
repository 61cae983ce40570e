//! Availability check for a date and time

use clap::Args;
use shared::models::AvailabilityRequest;
use shared::util::{TIME_FORMAT, format_date_long, format_rupiah};

use crate::context::AppContext;
use crate::render::Table;

#[derive(Args)]
pub struct AvailabilityArgs {
    /// Date as YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Time as HH:MM
    #[arg(long)]
    pub time: String,
}

pub async fn run(args: AvailabilityArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let request = AvailabilityRequest::from_input(&args.date, &args.time)?;
    let buildings = ctx.check(ctx.client.buildings().check_availability(&request).await)?;

    println!(
        "Gedung tersedia pada {} pukul {}",
        format_date_long(request.date),
        request.time.format(TIME_FORMAT)
    );
    if buildings.is_empty() {
        println!("Tidak ada gedung yang tersedia");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "Nama", "Tipe", "Kapasitas", "Harga"]);
    for b in &buildings {
        table.row(vec![
            b.id.clone(),
            b.name.clone(),
            b.building_type.clone(),
            b.capacity.to_string(),
            format_rupiah(b.price),
        ]);
    }
    table.print();
    Ok(())
}
