//! Shared types for the SIPINJAM booking client
//!
//! DTOs mirrored from the booking API, the response envelope, and the pure
//! presentation logic (pagination window, status badges, date and currency
//! formatting) that every screen or command reuses.

pub mod client;
pub mod models;
pub mod response;
pub mod util;
pub mod view;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{ApiResponse, PageMeta, Paginated};
pub use util::FormatError;
