//! Transaction Model

use serde::{Deserialize, Serialize};

wire_enum! {
    /// Payment status, owned by the server
    pub enum PaymentStatus {
        Pending => "PENDING",
        Paid => "PAID",
        Failed => "FAILED",
        Expired => "EXPIRED",
        Refunded => "REFUNDED",
    }
}

/// Payment transaction for a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Transaction {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "invoiceNumber")]
    pub invoice: String,
    /// Amount in Rupiah
    pub amount: f64,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

id_keys!(Transaction, ["_id", "id"]);

/// Payment status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusUpdate {
    pub payment_status: PaymentStatus,
}

/// Query for the transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Export filters; the whole filtered list, never a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionExportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
