//! Presentation logic shared by every table and command
//!
//! Pure functions only: no I/O, no clock.

pub mod pagination;
pub mod status;

pub use pagination::{PageWindow, Pagination, VISIBLE_PAGES};
pub use status::{StatusBadge, booking_badge, notification_badge, payment_badge};
