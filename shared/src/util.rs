//! Date, time and currency helpers
//!
//! The date widget speaks `YYYY-MM-DD`, the booking API speaks `DD-MM-YYYY`.
//! All conversion between the two goes through this module.

use chrono::{Datelike, NaiveDate, NaiveTime};
use thiserror::Error;

/// Format used by `<input type="date">` and the CLI
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format the booking API expects and returns
pub const WIRE_DATE_FORMAT: &str = "%d-%m-%Y";
/// Time-of-day format on both sides
pub const TIME_FORMAT: &str = "%H:%M";

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid date '{value}', expected {expected}")]
    InvalidDate { value: String, expected: &'static str },

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
}

/// Parse a `YYYY-MM-DD` input date
pub fn parse_input_date(value: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        FormatError::InvalidDate {
            value: value.to_string(),
            expected: "YYYY-MM-DD",
        }
    })
}

/// Parse a `DD-MM-YYYY` wire date
pub fn parse_wire_date(value: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(value.trim(), WIRE_DATE_FORMAT).map_err(|_| {
        FormatError::InvalidDate {
            value: value.to_string(),
            expected: "DD-MM-YYYY",
        }
    })
}

/// Parse a date the server sent in any of the shapes seen in practice:
/// `DD-MM-YYYY`, `YYYY-MM-DD`, or an ISO timestamp.
pub fn parse_any_date(value: &str) -> Result<NaiveDate, FormatError> {
    let trimmed = value.trim();
    parse_wire_date(trimmed)
        .or_else(|_| parse_input_date(trimmed))
        .or_else(|_| {
            // `2024-12-25T00:00:00.000Z`
            trimmed
                .get(..10)
                .filter(|_| trimmed.len() > 10 && trimmed.as_bytes()[10] == b'T')
                .ok_or(())
                .and_then(|prefix| parse_input_date(prefix).map_err(|_| ()))
                .map_err(|_| FormatError::InvalidDate {
                    value: value.to_string(),
                    expected: "DD-MM-YYYY",
                })
        })
}

/// Parse an `HH:MM` time (seconds are tolerated and dropped)
pub fn parse_time(value: &str) -> Result<NaiveTime, FormatError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| FormatError::InvalidTime(value.to_string()))
}

/// `YYYY-MM-DD` → `DD-MM-YYYY`
pub fn input_to_wire(value: &str) -> Result<String, FormatError> {
    Ok(parse_input_date(value)?.format(WIRE_DATE_FORMAT).to_string())
}

/// `DD-MM-YYYY` → `YYYY-MM-DD`
pub fn wire_to_input(value: &str) -> Result<String, FormatError> {
    Ok(parse_wire_date(value)?.format(INPUT_DATE_FORMAT).to_string())
}

/// Long Indonesian date, e.g. `25 Desember 2024`
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ID[date.month0() as usize],
        date.year()
    )
}

/// Booking slot, e.g. `25-12-2024 08:00 – 12:00` or
/// `25-12-2024 08:00 – 26-12-2024 12:00` when it spans days
pub fn format_slot(
    start_date: NaiveDate,
    start_time: NaiveTime,
    end_date: NaiveDate,
    end_time: NaiveTime,
) -> String {
    let start = format!(
        "{} {}",
        start_date.format(WIRE_DATE_FORMAT),
        start_time.format(TIME_FORMAT)
    );
    if start_date == end_date {
        format!("{} – {}", start, end_time.format(TIME_FORMAT))
    } else {
        format!(
            "{} – {} {}",
            start,
            end_date.format(WIRE_DATE_FORMAT),
            end_time.format(TIME_FORMAT)
        )
    }
}

/// Rupiah amount with dot grouping, e.g. `Rp 1.500.000`.
/// Fractions are rounded; Rupiah has no minor unit in practice.
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Serde adapter: `NaiveDate` as `DD-MM-YYYY`, lenient on input
pub mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(super::WIRE_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_any_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter: `NaiveTime` as `HH:MM`
pub mod wire_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(super::TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_round_trip() {
        assert_eq!(wire_to_input("25-12-2024").unwrap(), "2024-12-25");
        assert_eq!(input_to_wire("2024-12-25").unwrap(), "25-12-2024");
        assert_eq!(input_to_wire(&wire_to_input("01-02-2025").unwrap()).unwrap(), "01-02-2025");
    }

    #[test]
    fn test_wrong_direction_is_rejected() {
        assert!(wire_to_input("2024-12-25").is_err());
        assert!(input_to_wire("25-12-2024").is_err());
        assert!(input_to_wire("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_any_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(parse_any_date("25-12-2024").unwrap(), expected);
        assert_eq!(parse_any_date("2024-12-25").unwrap(), expected);
        assert_eq!(parse_any_date("2024-12-25T00:00:00.000Z").unwrap(), expected);
        assert!(parse_any_date("25/12/2024").is_err());
        assert!(parse_any_date("").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(parse_time("08:30:15").unwrap(), NaiveTime::from_hms_opt(8, 30, 15).unwrap());
        assert!(parse_time("8.30").is_err());
        assert!(parse_time("24:00").is_err());
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(950.0), "Rp 950");
        assert_eq!(format_rupiah(1500.0), "Rp 1.500");
        assert_eq!(format_rupiah(1_500_000.0), "Rp 1.500.000");
        assert_eq!(format_rupiah(250_000.4), "Rp 250.000");
        assert_eq!(format_rupiah(-75_000.0), "-Rp 75.000");
    }

    #[test]
    fn test_format_date_long() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_date_long(date), "25 Desember 2024");
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(format_date_long(date), "3 Januari 2025");
    }

    #[test]
    fn test_format_slot() {
        let d1 = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 12, 26).unwrap();
        let t1 = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let t2 = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(format_slot(d1, t1, d1, t2), "25-12-2024 08:00 – 12:00");
        assert_eq!(format_slot(d1, t1, d2, t2), "25-12-2024 08:00 – 26-12-2024 12:00");
    }
}
