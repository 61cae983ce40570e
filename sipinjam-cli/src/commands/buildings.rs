//! Building browsing and CRUD

use std::path::PathBuf;

use clap::{Args, Subcommand};
use shared::models::{BuildingForm, BuildingQuery};
use shared::util::format_rupiah;

use super::{non_blank, print_page};
use crate::context::AppContext;
use crate::render::{Table, or_dash};

#[derive(Subcommand)]
pub enum BuildingsCommand {
    /// List buildings
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Name filter
        #[arg(long, short)]
        search: Option<String>,
        /// Building type filter (e.g. AULA, LAB)
        #[arg(long = "type")]
        building_type: Option<String>,
    },
    /// Building details
    Show { id: String },
    /// Add a building
    Create(BuildingFormArgs),
    /// Edit a building
    Update {
        id: String,
        #[command(flatten)]
        form: BuildingFormArgs,
    },
    /// Remove a building
    Delete { id: String },
}

#[derive(Args)]
pub struct BuildingFormArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long = "type")]
    pub building_type: String,
    #[arg(long)]
    pub capacity: u32,
    /// Rental price in Rupiah
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Facility id, repeatable
    #[arg(long = "facility")]
    pub facilities: Vec<String>,
    /// Photo to upload
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

impl BuildingFormArgs {
    fn form(&self) -> BuildingForm {
        BuildingForm {
            name: self.name.trim().to_string(),
            building_type: self.building_type.trim().to_uppercase(),
            capacity: self.capacity,
            price: self.price,
            description: non_blank(self.description.clone()),
            location: non_blank(self.location.clone()),
            facilities: self.facilities.clone(),
        }
    }
}

impl BuildingsCommand {
    pub async fn run(self, ctx: &AppContext) -> anyhow::Result<()> {
        match self {
            BuildingsCommand::List {
                page,
                search,
                building_type,
            } => {
                let mut query = BuildingQuery::new(page, ctx.page_size());
                query.search = non_blank(search);
                query.building_type = non_blank(building_type);
                let result = ctx.check(ctx.client.buildings().list(&query).await)?;

                let mut table = Table::new(&["ID", "Nama", "Tipe", "Kapasitas", "Harga", "Lokasi"]);
                for b in &result.items {
                    table.row(vec![
                        b.id.clone(),
                        b.name.clone(),
                        b.building_type.clone(),
                        b.capacity.to_string(),
                        format_rupiah(b.price),
                        or_dash(b.location.as_deref()),
                    ]);
                }
                print_page(&result, &table);
            }
            BuildingsCommand::Show { id } => {
                let building = ctx.check(ctx.client.buildings().get(&id).await)?;
                println!("{} ({})", building.name, building.building_type);
                println!("Kapasitas : {} orang", building.capacity);
                println!("Harga     : {}", format_rupiah(building.price));
                println!("Lokasi    : {}", or_dash(building.location.as_deref()));
                println!("Deskripsi : {}", or_dash(building.description.as_deref()));
                if let Some(photo) = &building.photo {
                    println!("Foto      : {photo}");
                }
                let facilities: Vec<&str> = building
                    .facilities
                    .iter()
                    .map(|f| f.name().unwrap_or(f.id()))
                    .collect();
                if !facilities.is_empty() {
                    println!("Fasilitas : {}", facilities.join(", "));
                }
            }
            BuildingsCommand::Create(args) => {
                ctx.require_staff()?;
                let created = ctx.check(
                    ctx.client
                        .buildings()
                        .create(&args.form(), args.photo.as_deref())
                        .await,
                )?;
                println!("Gedung {} ditambahkan ({})", created.name, created.id);
            }
            BuildingsCommand::Update { id, form } => {
                ctx.require_staff()?;
                let updated = ctx.check(
                    ctx.client
                        .buildings()
                        .update(&id, &form.form(), form.photo.as_deref())
                        .await,
                )?;
                println!("Gedung {} diperbarui", updated.name);
            }
            BuildingsCommand::Delete { id } => {
                ctx.require_staff()?;
                ctx.check(ctx.client.buildings().delete(&id).await)?;
                println!("Gedung {id} dihapus");
            }
        }
        Ok(())
    }
}
