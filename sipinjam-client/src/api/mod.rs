//! Resource API wrappers
//!
//! One thin wrapper per REST resource. Every method is a single request;
//! envelopes are unwrapped defensively via `shared::response`.

pub mod auth;
pub mod bookings;
pub mod buildings;
pub mod facilities;
pub mod managers;
pub mod notifications;
pub mod transactions;

pub use auth::AuthApi;
pub use bookings::BookingsApi;
pub use buildings::BuildingsApi;
pub use facilities::FacilitiesApi;
pub use managers::ManagersApi;
pub use notifications::NotificationsApi;
pub use transactions::TransactionsApi;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ClientResult;

// =============================================================================
// Endpoints
// =============================================================================

pub const AUTH: &str = "api/v1/auth";
pub const BUILDINGS: &str = "api/v1/gedung";
pub const BOOKINGS: &str = "api/v1/bookings";
pub const TRANSACTIONS: &str = "api/v1/transactions";
pub const FACILITIES: &str = "api/v1/facilities";
pub const NOTIFICATIONS: &str = "api/v1/notifications";
pub const BUILDING_MANAGERS: &str = "api/v1/building-managers";

/// Decode a single-entity response, with or without the `data` envelope
pub(crate) fn decode_one<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    Ok(serde_json::from_value(shared::response::unwrap_data(value))?)
}

/// Query string for plain paginated lists
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
