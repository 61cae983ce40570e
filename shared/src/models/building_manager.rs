//! Building Manager Model

use serde::{Deserialize, Serialize};

/// Staff account responsible for one or more buildings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct BuildingManager {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Managed building ids
    #[serde(default)]
    pub buildings: Vec<String>,
}

id_keys!(BuildingManager, ["_id", "id"]);

/// Create/update building manager payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingManagerForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Only sent on create or password reset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub buildings: Vec<String>,
}
