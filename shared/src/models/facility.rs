//! Facility Model

use serde::{Deserialize, Serialize};

/// Facility entity (projector, AC, sound system...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Facility {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Icon reference understood by the front end (e.g. `FaWifi`)
    #[serde(default, alias = "iconName")]
    pub icon: Option<String>,
}

id_keys!(Facility, ["_id", "id"]);

/// Create/update facility payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityForm {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
