use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used by the upstream trip feed, e.g.
/// `2024-01-31T08:15:00.000`.
pub const TRIP_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A single rental event as delivered by the ingestion side. The timestamp is
/// kept in its source form; [`Trip::checkout_time`] parses on demand so that
/// filtering can decide what to do with malformed records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub checkout_kiosk_id: String,
    pub return_kiosk_id: String,
    pub checkout_datetime: String,
    pub duration_minutes: u32,
}

impl Trip {
    pub fn checkout_time(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&self.checkout_datetime, TRIP_TIMESTAMP_FORMAT)
    }
}
