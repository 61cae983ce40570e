//! Building manager accounts

use clap::{Args, Subcommand};
use shared::models::BuildingManagerForm;
use sipinjam_client::api::PageQuery;

use super::{non_blank, print_page};
use crate::context::AppContext;
use crate::render::{Table, or_dash};

#[derive(Subcommand)]
pub enum ManagersCommand {
    /// List building managers
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Manager details
    Show { id: String },
    /// Create a manager account
    Create(ManagerFormArgs),
    /// Update a manager account
    Update {
        id: String,
        #[command(flatten)]
        form: ManagerFormArgs,
    },
    /// Remove a manager account
    Delete { id: String },
}

#[derive(Args)]
pub struct ManagerFormArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    /// Required on create; leave empty on update to keep the current one
    #[arg(long, env = "SIPINJAM_MANAGER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Managed building id, repeatable
    #[arg(long = "building")]
    pub buildings: Vec<String>,
}

impl ManagerFormArgs {
    fn form(&self) -> BuildingManagerForm {
        BuildingManagerForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(self.phone.clone()),
            password: self.password.clone().filter(|p| !p.is_empty()),
            buildings: self.buildings.clone(),
        }
    }
}

impl ManagersCommand {
    pub async fn run(self, ctx: &AppContext) -> anyhow::Result<()> {
        ctx.require_staff()?;
        let api = ctx.client.managers();
        match self {
            ManagersCommand::List { page, search } => {
                let query = PageQuery {
                    page,
                    limit: ctx.page_size(),
                    search: non_blank(search),
                };
                let result = ctx.check(api.list(&query).await)?;
                let mut table = Table::new(&["ID", "Nama", "Email", "Telepon", "Gedung"]);
                for m in &result.items {
                    table.row(vec![
                        m.id.clone(),
                        m.name.clone(),
                        m.email.clone(),
                        or_dash(m.phone.as_deref()),
                        m.buildings.len().to_string(),
                    ]);
                }
                print_page(&result, &table);
            }
            ManagersCommand::Show { id } => {
                let m = ctx.check(api.get(&id).await)?;
                println!("{} <{}>", m.name, m.email);
                println!("Telepon : {}", or_dash(m.phone.as_deref()));
                if !m.buildings.is_empty() {
                    println!("Gedung  : {}", m.buildings.join(", "));
                }
            }
            ManagersCommand::Create(args) => {
                if args.password.as_deref().is_none_or(str::is_empty) {
                    anyhow::bail!("Kata sandi wajib diisi untuk akun baru");
                }
                let created = ctx.check(api.create(&args.form()).await)?;
                println!("Pengelola {} ditambahkan ({})", created.name, created.id);
            }
            ManagersCommand::Update { id, form } => {
                let updated = ctx.check(api.update(&id, &form.form()).await)?;
                println!("Pengelola {} diperbarui", updated.name);
            }
            ManagersCommand::Delete { id } => {
                ctx.check(api.delete(&id).await)?;
                println!("Pengelola {id} dihapus");
            }
        }
        Ok(())
    }
}
