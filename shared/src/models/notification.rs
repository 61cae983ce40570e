//! Notification Model

use serde::{Deserialize, Serialize};

wire_enum! {
    /// Notification category
    pub enum NotificationType {
        Booking => "BOOKING",
        Payment => "PAYMENT",
        Reminder => "REMINDER",
        System => "SYSTEM",
    }
}

/// In-app notification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    #[serde(default, alias = "isRead", alias = "read")]
    pub read_status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

id_keys!(Notification, ["_id", "id"]);
