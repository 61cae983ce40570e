//! Notifications

use clap::Subcommand;
use sipinjam_client::api::notifications::unread_count;

use crate::context::AppContext;
use crate::render::{Table, badge, or_dash};

#[derive(Subcommand)]
pub enum NotificationsCommand {
    /// List notifications
    List {
        /// Only unread ones
        #[arg(long)]
        unread: bool,
    },
    /// Mark one notification as read
    Read { id: String },
    /// Mark everything as read
    ReadAll,
}

impl NotificationsCommand {
    pub async fn run(self, ctx: &AppContext) -> anyhow::Result<()> {
        ctx.require_login()?;
        let api = ctx.client.notifications();
        match self {
            NotificationsCommand::List { unread } => {
                let notifications = ctx.check(api.list().await)?;
                println!("{} belum dibaca", unread_count(&notifications));

                let mut table = Table::new(&["", "ID", "Jenis", "Pesan", "Waktu"]);
                for n in notifications.iter().filter(|n| !unread || !n.read_status) {
                    table.row(vec![
                        (if n.read_status { " " } else { "●" }).to_string(),
                        n.id.clone(),
                        badge(n.kind.badge()),
                        n.title
                            .as_deref()
                            .map(|t| format!("{t}: {}", n.message))
                            .unwrap_or_else(|| n.message.clone()),
                        or_dash(n.created_at.as_deref()),
                    ]);
                }
                if !table.is_empty() {
                    table.print();
                }
            }
            NotificationsCommand::Read { id } => {
                ctx.check(api.mark_read(&id).await)?;
                println!("Notifikasi {id} ditandai dibaca");
            }
            NotificationsCommand::ReadAll => {
                ctx.check(api.mark_all_read().await)?;
                println!("Semua notifikasi ditandai dibaca");
            }
        }
        Ok(())
    }
}
