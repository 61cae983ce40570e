//! Facility lookup list

use clap::Subcommand;
use shared::models::FacilityForm;

use super::non_blank;
use crate::context::AppContext;
use crate::render::{Table, or_dash};

#[derive(Subcommand)]
pub enum FacilitiesCommand {
    /// List facilities
    List,
    /// Facility details
    Show { id: String },
    /// Add a facility
    Create {
        #[arg(long)]
        name: String,
        /// Icon name shown next to the facility
        #[arg(long)]
        icon: Option<String>,
    },
    /// Rename a facility or change its icon
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Remove a facility
    Delete { id: String },
}

impl FacilitiesCommand {
    pub async fn run(self, ctx: &AppContext) -> anyhow::Result<()> {
        let api = ctx.client.facilities();
        match self {
            FacilitiesCommand::List => {
                let facilities = ctx.check(api.list().await)?;
                if facilities.is_empty() {
                    println!("Tidak ada data");
                    return Ok(());
                }
                let mut table = Table::new(&["ID", "Nama", "Ikon"]);
                for f in &facilities {
                    table.row(vec![f.id.clone(), f.name.clone(), or_dash(f.icon.as_deref())]);
                }
                table.print();
            }
            FacilitiesCommand::Show { id } => {
                let facility = ctx.check(api.get(&id).await)?;
                println!("{} ({})", facility.name, facility.id);
                println!("Ikon : {}", or_dash(facility.icon.as_deref()));
            }
            FacilitiesCommand::Create { name, icon } => {
                ctx.require_staff()?;
                let form = FacilityForm {
                    name: name.trim().to_string(),
                    icon: non_blank(icon),
                };
                let created = ctx.check(api.create(&form).await)?;
                println!("Fasilitas {} ditambahkan ({})", created.name, created.id);
            }
            FacilitiesCommand::Update { id, name, icon } => {
                ctx.require_staff()?;
                let form = FacilityForm {
                    name: name.trim().to_string(),
                    icon: non_blank(icon),
                };
                let updated = ctx.check(api.update(&id, &form).await)?;
                println!("Fasilitas {} diperbarui", updated.name);
            }
            FacilitiesCommand::Delete { id } => {
                ctx.require_staff()?;
                ctx.check(api.delete(&id).await)?;
                println!("Fasilitas {id} dihapus");
            }
        }
        Ok(())
    }
}
