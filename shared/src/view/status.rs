//! Status → badge lookup tables
//!
//! Each status-bearing entity maps its wire value to a label and a color
//! scheme through a static table. Unknown values get the table's fallback.

use serde::Serialize;

use crate::models::{BookingStatus, NotificationType, PaymentStatus};

/// Label + color scheme of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: &'static str,
}

impl StatusBadge {
    pub const fn new(label: &'static str, color: &'static str) -> Self {
        Self { label, color }
    }
}

/// A lookup table with its fallback
pub struct BadgeTable {
    entries: &'static [(&'static str, StatusBadge)],
    fallback: StatusBadge,
}

impl BadgeTable {
    /// Case-insensitive lookup, falling back for unknown or empty values
    pub fn lookup(&self, status: &str) -> StatusBadge {
        let status = status.trim();
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(status))
            .map(|(_, badge)| *badge)
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> StatusBadge {
        self.fallback
    }
}

pub static BOOKING_BADGES: BadgeTable = BadgeTable {
    entries: &[
        ("PROCESSING", StatusBadge::new("Diproses", "yellow")),
        ("APPROVED", StatusBadge::new("Disetujui", "green")),
        ("REJECTED", StatusBadge::new("Ditolak", "red")),
        ("COMPLETED", StatusBadge::new("Selesai", "blue")),
        ("CANCELLED", StatusBadge::new("Dibatalkan", "gray")),
    ],
    fallback: StatusBadge::new("Tidak Diketahui", "gray"),
};

pub static PAYMENT_BADGES: BadgeTable = BadgeTable {
    entries: &[
        ("PENDING", StatusBadge::new("Menunggu Pembayaran", "yellow")),
        ("PAID", StatusBadge::new("Lunas", "green")),
        ("FAILED", StatusBadge::new("Gagal", "red")),
        ("EXPIRED", StatusBadge::new("Kedaluwarsa", "orange")),
        ("REFUNDED", StatusBadge::new("Dikembalikan", "purple")),
    ],
    fallback: StatusBadge::new("Tidak Diketahui", "gray"),
};

pub static NOTIFICATION_BADGES: BadgeTable = BadgeTable {
    entries: &[
        ("BOOKING", StatusBadge::new("Peminjaman", "blue")),
        ("PAYMENT", StatusBadge::new("Pembayaran", "green")),
        ("REMINDER", StatusBadge::new("Pengingat", "orange")),
        ("SYSTEM", StatusBadge::new("Sistem", "purple")),
    ],
    fallback: StatusBadge::new("Info", "gray"),
};

pub fn booking_badge(status: &str) -> StatusBadge {
    BOOKING_BADGES.lookup(status)
}

pub fn payment_badge(status: &str) -> StatusBadge {
    PAYMENT_BADGES.lookup(status)
}

pub fn notification_badge(kind: &str) -> StatusBadge {
    NOTIFICATION_BADGES.lookup(kind)
}

impl BookingStatus {
    pub fn badge(&self) -> StatusBadge {
        booking_badge(self.as_str())
    }
}

impl PaymentStatus {
    pub fn badge(&self) -> StatusBadge {
        payment_badge(self.as_str())
    }
}

impl NotificationType {
    pub fn badge(&self) -> StatusBadge {
        notification_badge(self.as_str())
    }
}
