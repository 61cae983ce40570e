//! Booking (Peminjaman) Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::building::Building;
use crate::util::{wire_date, wire_time};

wire_enum! {
    /// Booking status, owned by the server
    pub enum BookingStatus {
        Processing => "PROCESSING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

wire_enum! {
    /// Internal (civitas) or external borrower, priced differently server-side
    pub enum BorrowerType {
        Internal => "INTERNAL",
        External => "EXTERNAL",
    }
}

/// Borrower as returned by the API: a display name or a populated user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorrowerRef {
    Name(String),
    Detail(BorrowerDetail),
}

impl BorrowerRef {
    pub fn display_name(&self) -> &str {
        match self {
            BorrowerRef::Name(name) => name,
            BorrowerRef::Detail(detail) => &detail.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct BorrowerDetail {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

id_keys!(BorrowerDetail, ["_id", "id"]);

/// Building as referenced from a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildingRef {
    Id(String),
    Populated(Box<Building>),
}

impl BuildingRef {
    pub fn id(&self) -> &str {
        match self {
            BuildingRef::Id(id) => id,
            BuildingRef::Populated(b) => &b.id,
        }
    }

    /// Building name when populated, otherwise the id
    pub fn label(&self) -> &str {
        match self {
            BuildingRef::Id(id) => id,
            BuildingRef::Populated(b) => &b.name,
        }
    }
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "id", alias = "_id")]
    pub booking_id: String,
    pub borrower: BorrowerRef,
    pub building: BuildingRef,
    #[serde(alias = "activityName")]
    pub activity: String,
    #[serde(with = "wire_date")]
    pub start_date: NaiveDate,
    #[serde(with = "wire_date")]
    pub end_date: NaiveDate,
    #[serde(with = "wire_time")]
    pub start_time: NaiveTime,
    #[serde(with = "wire_time")]
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    #[serde(default)]
    pub borrower_type: Option<BorrowerType>,
    #[serde(default)]
    pub total_price: Option<f64>,
    /// Rejection or cancellation note
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

id_keys!(Booking, ["bookingId", "_id", "id"]);

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub building_id: String,
    pub activity: String,
    pub borrower_type: BorrowerType,
    #[serde(with = "wire_date")]
    pub start_date: NaiveDate,
    #[serde(with = "wire_date")]
    pub end_date: NaiveDate,
    #[serde(with = "wire_time")]
    pub start_time: NaiveTime,
    #[serde(with = "wire_time")]
    pub end_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query for booking lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl BookingQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }
}

/// Filters for the spreadsheet export. No paging: the server exports the
/// whole filtered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingExportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Transitions an admin can request on a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Approve,
    Reject,
    Complete,
    Cancel,
}

/// Buttons shown per status. The server still decides whether a
/// transition is legal.
const ACTIONS_BY_STATUS: &[(&str, &[BookingAction])] = &[
    ("PROCESSING", &[BookingAction::Approve, BookingAction::Reject, BookingAction::Cancel]),
    ("APPROVED", &[BookingAction::Complete, BookingAction::Cancel]),
];

impl BookingAction {
    /// Path segment under `/bookings/{id}/`
    pub fn path_segment(&self) -> &'static str {
        match self {
            BookingAction::Approve => "approve",
            BookingAction::Reject => "reject",
            BookingAction::Complete => "complete",
            BookingAction::Cancel => "cancel",
        }
    }

    /// Actions offered for a booking in the given status
    pub fn available_for(status: &BookingStatus) -> &'static [BookingAction] {
        ACTIONS_BY_STATUS
            .iter()
            .find(|(key, _)| *key == status.as_str())
            .map(|(_, actions)| *actions)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_from_wire() {
        let booking: Booking = serde_json::from_value(json!({
            "_id": "bk-1",
            "borrower": {"name": "Himpunan Mahasiswa Informatika", "email": "hmif@kampus.ac.id"},
            "building": {"id": "g-1", "name": "Aula Barat", "type": "AULA"},
            "activityName": "Seminar Nasional",
            "startDate": "25-12-2024",
            "endDate": "2024-12-26",
            "startTime": "08:00",
            "endTime": "12:30",
            "status": "APPROVED",
            "borrowerType": "INTERNAL"
        }))
        .unwrap();

        assert_eq!(booking.booking_id, "bk-1");
        assert_eq!(booking.borrower.display_name(), "Himpunan Mahasiswa Informatika");
        assert_eq!(booking.building.label(), "Aula Barat");
        assert_eq!(booking.start_date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(booking.end_date, NaiveDate::from_ymd_opt(2024, 12, 26).unwrap());
        assert_eq!(booking.status, BookingStatus::Approved);
        assert_eq!(booking.borrower_type, Some(BorrowerType::Internal));
    }

    #[test]
    fn test_booking_with_every_id_key() {
        let booking: Booking = serde_json::from_value(json!({
            "_id": "bk-2",
            "id": "bk-2",
            "bookingId": "BK-0002",
            "borrower": {"_id": "u-1", "id": "u-1", "name": "Rina"},
            "building": "g-1",
            "activityName": "Rapat",
            "startDate": "25-12-2024",
            "endDate": "25-12-2024",
            "startTime": "08:00",
            "endTime": "10:00",
            "status": "PROCESSING"
        }))
        .unwrap();
        assert_eq!(booking.booking_id, "BK-0002");
        assert_eq!(booking.building.id(), "g-1");
        match &booking.borrower {
            BorrowerRef::Detail(detail) => assert_eq!(detail.id.as_deref(), Some("u-1")),
            other => panic!("expected populated borrower, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let status: BookingStatus = serde_json::from_value(json!("ON_HOLD")).unwrap();
        assert_eq!(status, BookingStatus::Unknown("ON_HOLD".into()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("ON_HOLD"));
    }

    #[test]
    fn test_form_uses_wire_format() {
        let form = BookingForm {
            building_id: "g-1".into(),
            activity: "Rapat".into(),
            borrower_type: BorrowerType::External,
            start_date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            description: None,
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["startDate"], "25-12-2024");
        assert_eq!(value["startTime"], "09:00");
        assert_eq!(value["borrowerType"], "EXTERNAL");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_available_actions() {
        assert_eq!(
            BookingAction::available_for(&BookingStatus::Processing),
            &[BookingAction::Approve, BookingAction::Reject, BookingAction::Cancel]
        );
        assert!(BookingAction::available_for(&BookingStatus::Completed).is_empty());
        assert!(BookingAction::available_for(&BookingStatus::Unknown("X".into())).is_empty());
    }
}
