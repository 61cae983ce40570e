//! Bookings: borrower submission and tracking, staff review and export

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use shared::client::UserInfo;
use shared::models::{
    Booking, BookingAction, BookingExportQuery, BookingForm, BookingQuery, BookingStatus, BorrowerType,
};
use shared::util::{format_rupiah, format_slot, parse_input_date, parse_time};

use super::{non_blank, print_page};
use crate::context::AppContext;
use crate::render::{Table, badge, or_dash};

#[derive(Subcommand)]
pub enum BookingsCommand {
    /// List bookings. Staff see all and borrowers their own. A session
    /// without a saved profile (`SIPINJAM_TOKEN`) asks for the full list
    /// and lets the server decide.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Status filter: PROCESSING, APPROVED, REJECTED, COMPLETED, CANCELLED
        #[arg(long)]
        status: Option<String>,
        #[arg(long, short)]
        search: Option<String>,
        /// Only my own bookings
        #[arg(long)]
        mine: bool,
    },
    /// Booking details and the actions available for it
    Show { id: String },
    /// Submit a booking
    Create(BookArgs),
    /// Approve a booking
    Approve { id: String },
    /// Reject a booking
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
    /// Mark a booking as completed
    Complete { id: String },
    /// Cancel a booking
    Cancel {
        id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Delete a booking
    Delete { id: String },
    /// Export bookings as a spreadsheet
    Export {
        #[arg(long)]
        status: Option<String>,
        #[arg(long, short)]
        search: Option<String>,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Args)]
pub struct BookArgs {
    /// Building id
    #[arg(long)]
    pub building: String,
    /// Activity name
    #[arg(long)]
    pub activity: String,
    /// Start date as YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// End date as YYYY-MM-DD, defaults to the start date
    #[arg(long)]
    pub end_date: Option<String>,
    /// Start time as HH:MM
    #[arg(long)]
    pub start: String,
    /// End time as HH:MM
    #[arg(long)]
    pub end: String,
    /// INTERNAL or EXTERNAL; defaults to the account's borrower type
    #[arg(long)]
    pub borrower_type: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Supporting letter to attach
    #[arg(long)]
    pub attachment: Option<PathBuf>,
}

impl BookArgs {
    fn form(&self, default_type: Option<&str>) -> anyhow::Result<BookingForm> {
        let start_date = parse_input_date(&self.date)?;
        let end_date = match &self.end_date {
            Some(date) => parse_input_date(date)?,
            None => start_date,
        };
        let start_time = parse_time(&self.start)?;
        let end_time = parse_time(&self.end)?;
        if (end_date, end_time) <= (start_date, start_time) {
            anyhow::bail!("Waktu selesai harus setelah waktu mulai");
        }
        let borrower_type = self
            .borrower_type
            .as_deref()
            .or(default_type)
            .map(BorrowerType::from)
            .unwrap_or(BorrowerType::Internal);

        Ok(BookingForm {
            building_id: self.building.trim().to_string(),
            activity: self.activity.trim().to_string(),
            borrower_type,
            start_date,
            end_date,
            start_time,
            end_time,
            description: non_blank(self.description.clone()),
        })
    }
}

fn status_filter(status: Option<String>) -> Option<String> {
    non_blank(status).map(|s| BookingStatus::from(s.as_str()).to_string())
}

fn print_booking(booking: &Booking) {
    println!("{} [{}]", booking.activity, badge(booking.status.badge()));
    println!("ID       : {}", booking.booking_id);
    println!("Peminjam : {}", booking.borrower.display_name());
    println!("Gedung   : {}", booking.building.label());
    println!(
        "Waktu    : {}",
        format_slot(booking.start_date, booking.start_time, booking.end_date, booking.end_time)
    );
    if let Some(kind) = &booking.borrower_type {
        println!("Jenis    : {kind}");
    }
    if let Some(price) = booking.total_price {
        println!("Biaya    : {}", format_rupiah(price));
    }
    if let Some(reason) = &booking.reason {
        println!("Catatan  : {reason}");
    }
}

/// `/bookings/me` when asked, or when the saved profile is not staff
fn own_bookings_only(mine: bool, user: Option<&UserInfo>) -> bool {
    mine || user.is_some_and(|u| !u.role.is_staff())
}

impl BookingsCommand {
    pub async fn run(self, ctx: &AppContext) -> anyhow::Result<()> {
        ctx.require_login()?;
        let api = ctx.client.bookings();
        match self {
            BookingsCommand::List {
                page,
                status,
                search,
                mine,
            } => {
                let mut query = BookingQuery::new(page, ctx.page_size());
                query.status = status_filter(status);
                query.search = non_blank(search);
                let result = if own_bookings_only(mine, ctx.user()) {
                    ctx.check(api.mine(&query).await)?
                } else {
                    ctx.check(api.list(&query).await)?
                };

                let mut table = Table::new(&["ID", "Kegiatan", "Peminjam", "Gedung", "Waktu", "Status"]);
                for b in &result.items {
                    table.row(vec![
                        b.booking_id.clone(),
                        b.activity.clone(),
                        b.borrower.display_name().to_string(),
                        b.building.label().to_string(),
                        format_slot(b.start_date, b.start_time, b.end_date, b.end_time),
                        badge(b.status.badge()),
                    ]);
                }
                print_page(&result, &table);
            }
            BookingsCommand::Show { id } => {
                let booking = ctx.check(api.get(&id).await)?;
                print_booking(&booking);
                let actions = BookingAction::available_for(&booking.status);
                if !actions.is_empty() {
                    let names: Vec<&str> = actions.iter().map(BookingAction::path_segment).collect();
                    println!("Aksi     : {}", names.join(", "));
                }
            }
            BookingsCommand::Create(args) => {
                let default_type = ctx.user().and_then(|u| u.borrower_type.as_deref());
                let form = args.form(default_type)?;
                let booking = ctx.check(api.create(&form, args.attachment.as_deref()).await)?;
                println!("Pengajuan peminjaman terkirim");
                print_booking(&booking);
            }
            BookingsCommand::Approve { id } => {
                ctx.require_staff()?;
                let booking = ctx.check(api.approve(&id).await)?;
                println!("Peminjaman {} {}", booking.booking_id, badge(booking.status.badge()));
            }
            BookingsCommand::Reject { id, reason } => {
                ctx.require_staff()?;
                let booking = ctx.check(api.reject(&id, reason.trim()).await)?;
                println!("Peminjaman {} {}", booking.booking_id, badge(booking.status.badge()));
            }
            BookingsCommand::Complete { id } => {
                ctx.require_staff()?;
                let booking = ctx.check(api.complete(&id).await)?;
                println!("Peminjaman {} {}", booking.booking_id, badge(booking.status.badge()));
            }
            BookingsCommand::Cancel { id, reason } => {
                let reason = non_blank(reason);
                let booking = ctx.check(api.cancel(&id, reason.as_deref()).await)?;
                println!("Peminjaman {} {}", booking.booking_id, badge(booking.status.badge()));
            }
            BookingsCommand::Delete { id } => {
                ctx.require_staff()?;
                ctx.check(api.delete(&id).await)?;
                println!("Peminjaman {id} dihapus");
            }
            BookingsCommand::Export { status, search, out } => {
                ctx.require_staff()?;
                let query = BookingExportQuery {
                    status: status_filter(status),
                    search: non_blank(search),
                };
                let download = ctx.check(api.export(&query).await)?;
                let path = download
                    .save_to(&out)
                    .await
                    .with_context(|| format!("Gagal menyimpan laporan ke {}", out.display()))?;
                println!("Laporan disimpan ke {} ({})", path.display(), or_dash(download.content_type.as_deref()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::UserRole;

    fn user(role: UserRole) -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            name: "Rina".into(),
            email: "rina@kampus.ac.id".into(),
            role,
            borrower_type: None,
        }
    }

    #[test]
    fn test_list_endpoint_choice() {
        assert!(!own_bookings_only(false, None));
        assert!(own_bookings_only(true, None));
        assert!(!own_bookings_only(false, Some(&user(UserRole::Admin))));
        assert!(!own_bookings_only(false, Some(&user(UserRole::BuildingManager))));
        assert!(own_bookings_only(false, Some(&user(UserRole::Borrower))));
        assert!(own_bookings_only(true, Some(&user(UserRole::Admin))));
    }

    fn args(date: &str, start: &str, end: &str) -> BookArgs {
        BookArgs {
            building: " g-1 ".into(),
            activity: "Seminar Nasional".into(),
            date: date.into(),
            end_date: None,
            start: start.into(),
            end: end.into(),
            borrower_type: None,
            description: Some("  ".into()),
            attachment: None,
        }
    }

    #[test]
    fn test_form_uses_account_borrower_type() {
        let form = args("2024-12-25", "08:00", "12:00").form(Some("EXTERNAL")).unwrap();
        assert_eq!(form.borrower_type, BorrowerType::External);
        assert_eq!(form.building_id, "g-1");
        assert_eq!(form.end_date, form.start_date);
        assert!(form.description.is_none());

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["startDate"], "25-12-2024");
        assert_eq!(json["startTime"], "08:00");
    }

    #[test]
    fn test_form_rejects_reversed_slot() {
        assert!(args("2024-12-25", "12:00", "08:00").form(None).is_err());
        assert!(args("25-12-2024", "08:00", "12:00").form(None).is_err());
    }

    #[test]
    fn test_status_filter_normalizes_case() {
        assert_eq!(status_filter(Some("approved".into())).as_deref(), Some("APPROVED"));
        assert_eq!(status_filter(Some(" ".into())), None);
    }
}
