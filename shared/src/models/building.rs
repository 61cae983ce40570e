//! Building (Gedung) Model

use serde::{Deserialize, Serialize};

use super::facility::Facility;

/// Building entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Building {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Building type (e.g. `AULA`, `LAB`, `LAPANGAN`), opaque to the client
    #[serde(rename = "type", default)]
    pub building_type: String,
    #[serde(default)]
    pub capacity: u32,
    /// Rental price per booking in Rupiah
    #[serde(default)]
    pub price: f64,
    /// Photo URL or server-relative path
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Facilities may come back populated or as bare ids
    #[serde(default)]
    pub facilities: Vec<FacilityRef>,
}

id_keys!(Building, ["_id", "id"]);

/// Facility reference inside a building payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacilityRef {
    Id(String),
    Populated(Facility),
}

impl FacilityRef {
    pub fn id(&self) -> &str {
        match self {
            FacilityRef::Id(id) => id,
            FacilityRef::Populated(f) => &f.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            FacilityRef::Id(_) => None,
            FacilityRef::Populated(f) => Some(&f.name),
        }
    }
}

/// Create/update building form (sent as multipart)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingForm {
    pub name: String,
    #[serde(rename = "type")]
    pub building_type: String,
    pub capacity: u32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Facility ids; JSON-encoded into a single form field on the wire
    #[serde(default)]
    pub facilities: Vec<String>,
}

/// Query for the building list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildingQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
}

impl BuildingQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }
}
