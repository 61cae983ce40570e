//! Transactions

use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use shared::models::{PaymentStatus, TransactionExportQuery, TransactionQuery};
use shared::util::format_rupiah;

use super::{non_blank, print_page};
use crate::context::AppContext;
use crate::render::{Table, badge, or_dash};

#[derive(Subcommand)]
pub enum TransactionsCommand {
    /// List transactions
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// PENDING, PAID, FAILED, EXPIRED, REFUNDED
        #[arg(long)]
        status: Option<String>,
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Transaction details
    Show { id: String },
    /// Change the payment status
    SetStatus { id: String, status: String },
    /// Export transactions as a spreadsheet
    Export {
        #[arg(long)]
        status: Option<String>,
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

fn query(page: u32, limit: u32, status: Option<String>, search: Option<String>) -> TransactionQuery {
    TransactionQuery {
        page,
        limit,
        payment_status: payment_filter(status),
        search: non_blank(search),
    }
}

fn payment_filter(status: Option<String>) -> Option<String> {
    non_blank(status).map(|s| PaymentStatus::from(s).to_string())
}

impl TransactionsCommand {
    pub async fn run(self, ctx: &AppContext) -> anyhow::Result<()> {
        ctx.require_staff()?;
        let api = ctx.client.transactions();
        match self {
            TransactionsCommand::List { page, status, search } => {
                let result = ctx.check(api.list(&query(page, ctx.page_size(), status, search)).await)?;
                let mut table = Table::new(&["ID", "Invoice", "Jumlah", "Metode", "Status"]);
                for t in &result.items {
                    table.row(vec![
                        t.id.clone(),
                        t.invoice.clone(),
                        format_rupiah(t.amount),
                        or_dash(t.payment_method.as_deref()),
                        badge(t.payment_status.badge()),
                    ]);
                }
                print_page(&result, &table);
            }
            TransactionsCommand::Show { id } => {
                let t = ctx.check(api.get(&id).await)?;
                println!("{} [{}]", t.invoice, badge(t.payment_status.badge()));
                println!("Jumlah     : {}", format_rupiah(t.amount));
                println!("Metode     : {}", or_dash(t.payment_method.as_deref()));
                println!("Peminjaman : {}", or_dash(t.booking_id.as_deref()));
                println!("Dibayar    : {}", or_dash(t.paid_at.as_deref()));
            }
            TransactionsCommand::SetStatus { id, status } => {
                let status = PaymentStatus::from(status);
                if let PaymentStatus::Unknown(raw) = &status {
                    anyhow::bail!("Status pembayaran tidak dikenal: {raw}");
                }
                let t = ctx.check(api.update_status(&id, status).await)?;
                println!("Transaksi {} {}", t.invoice, badge(t.payment_status.badge()));
            }
            TransactionsCommand::Export { status, search, out } => {
                let filter = TransactionExportQuery {
                    payment_status: payment_filter(status),
                    search: non_blank(search),
                };
                let download = ctx.check(api.export(&filter).await)?;
                let path = download
                    .save_to(&out)
                    .await
                    .with_context(|| format!("Gagal menyimpan laporan ke {}", out.display()))?;
                println!("Laporan disimpan ke {}", path.display());
            }
        }
        Ok(())
    }
}
