//! Availability check payload

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::util::{wire_date, wire_time};

/// Body of the "check availability" request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    #[serde(with = "wire_time")]
    pub time: NaiveTime,
}

impl AvailabilityRequest {
    /// Build from the raw form inputs (`YYYY-MM-DD` date, `HH:MM` time)
    pub fn from_input(date: &str, time: &str) -> Result<Self, crate::FormatError> {
        Ok(Self {
            date: crate::util::parse_input_date(date)?,
            time: crate::util::parse_time(time)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_serializes_to_wire() {
        let req = AvailabilityRequest::from_input("2024-12-25", "13:30").unwrap();
        let value = serde_json::to_value(req).unwrap();
        assert_eq!(value, serde_json::json!({"date": "25-12-2024", "time": "13:30"}));
    }

    #[test]
    fn test_from_input_rejects_wire_date() {
        assert!(AvailabilityRequest::from_input("25-12-2024", "13:30").is_err());
        assert!(AvailabilityRequest::from_input("2024-12-25", "25:00").is_err());
    }
}
