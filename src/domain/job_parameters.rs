use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Date format used for submission parameters, e.g. `01/31/2024`.
pub const PARAMETER_DATE_FORMAT: &str = "%m/%d/%Y";

/// Radius substituted for the `"default"` sentinel, in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 1.609_344;
/// Point substituted for the `"default"` lat/long sentinels (UT Austin campus).
pub const DEFAULT_LATITUDE: f64 = 30.286_273_061_972_8;
pub const DEFAULT_LONGITUDE: f64 = -97.739_377_274_909_16;

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 31).expect("valid constant date")
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid constant date")
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("job parameters must be a JSON object")]
    NotAnObject,
    #[error("missing required parameter '{0}'")]
    MissingField(&'static str),
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
    #[error("start_date {start} is after end_date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripDurationParams {
    pub kiosk1: String,
    pub kiosk2: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripsPerDayParams {
    pub lat: f64,
    pub long: f64,
    pub radius_km: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Job parameters as a tagged union, parsed and validated once at the
/// submission boundary. An unknown `plot_type` is not a validation failure:
/// the job is still created so the worker can fail it with an explicit
/// reason instead of the submission silently swallowing it.
#[derive(Debug, Clone, PartialEq)]
pub enum JobParameters {
    TripDuration(TripDurationParams),
    TripsPerDay(TripsPerDayParams),
    Unrecognized { plot_type: String },
}

impl JobParameters {
    /// Parse a raw submission mapping. Field values may be the sentinel
    /// `"default"`, and numeric fields also accept numeric strings, matching
    /// what front ends historically sent.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;
        let plot_type = require_str(obj, "plot_type")?;

        match plot_type {
            "trip_duration" => {
                let kiosk1 = require_kiosk_id(obj, "kiosk1")?;
                let kiosk2 = require_kiosk_id(obj, "kiosk2")?;
                let start_date = require_date(obj, "start_date", default_start_date())?;
                let end_date = require_date(obj, "end_date", default_end_date())?;
                check_date_order(start_date, end_date)?;
                Ok(JobParameters::TripDuration(TripDurationParams {
                    kiosk1,
                    kiosk2,
                    start_date,
                    end_date,
                }))
            }
            "trips_per_day" => {
                let lat = require_f64(obj, "lat", DEFAULT_LATITUDE)?;
                let long = require_f64(obj, "long", DEFAULT_LONGITUDE)?;
                let radius_km = require_f64(obj, "radius", DEFAULT_RADIUS_KM)?;
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(invalid("lat", format!("{} is outside [-90, 90]", lat)));
                }
                if !(-180.0..=180.0).contains(&long) {
                    return Err(invalid("long", format!("{} is outside [-180, 180]", long)));
                }
                if !radius_km.is_finite() || radius_km <= 0.0 {
                    return Err(invalid("radius", format!("{} is not a positive distance", radius_km)));
                }
                let start_date = require_date(obj, "start_date", default_start_date())?;
                let end_date = require_date(obj, "end_date", default_end_date())?;
                check_date_order(start_date, end_date)?;
                Ok(JobParameters::TripsPerDay(TripsPerDayParams {
                    lat,
                    long,
                    radius_km,
                    start_date,
                    end_date,
                }))
            }
            other => Ok(JobParameters::Unrecognized {
                plot_type: other.to_string(),
            }),
        }
    }

    pub fn plot_type(&self) -> &str {
        match self {
            JobParameters::TripDuration(_) => "trip_duration",
            JobParameters::TripsPerDay(_) => "trips_per_day",
            JobParameters::Unrecognized { plot_type } => plot_type,
        }
    }
}

fn invalid(field: &'static str, reason: String) -> ValidationError {
    ValidationError::InvalidField { field, reason }
}

fn check_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if start > end {
        return Err(ValidationError::InvertedDateRange { start, end });
    }
    Ok(())
}

fn require_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    obj.get(field)
        .ok_or(ValidationError::MissingField(field))?
        .as_str()
        .ok_or_else(|| invalid(field, "expected a string".to_string()))
}

fn require_kiosk_id(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let id = require_str(obj, field)?;
    if id.trim().is_empty() {
        return Err(invalid(field, "kiosk id must not be empty".to_string()));
    }
    Ok(id.to_string())
}

fn require_date(
    obj: &Map<String, Value>,
    field: &'static str,
    default: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let raw = require_str(obj, field)?;
    if raw == "default" {
        return Ok(default);
    }
    NaiveDate::parse_from_str(raw, PARAMETER_DATE_FORMAT)
        .map_err(|e| invalid(field, format!("'{}' is not a {} date: {}", raw, PARAMETER_DATE_FORMAT, e)))
}

fn require_f64(
    obj: &Map<String, Value>,
    field: &'static str,
    default: f64,
) -> Result<f64, ValidationError> {
    match obj.get(field) {
        None => Err(ValidationError::MissingField(field)),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid(field, format!("{} is not representable as f64", n))),
        Some(Value::String(s)) if s == "default" => Ok(default),
        Some(Value::String(s)) => s
            .parse::<f64>()
            .map_err(|e| invalid(field, format!("'{}' is not a number: {}", s, e))),
        Some(other) => Err(invalid(field, format!("expected a number, got {}", other))),
    }
}

impl Serialize for JobParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = Map::new();
        map.insert("plot_type".to_string(), Value::from(self.plot_type()));
        match self {
            JobParameters::TripDuration(p) => {
                map.insert("kiosk1".to_string(), Value::from(p.kiosk1.as_str()));
                map.insert("kiosk2".to_string(), Value::from(p.kiosk2.as_str()));
                insert_date(&mut map, "start_date", p.start_date);
                insert_date(&mut map, "end_date", p.end_date);
            }
            JobParameters::TripsPerDay(p) => {
                map.insert("lat".to_string(), Value::from(p.lat));
                map.insert("long".to_string(), Value::from(p.long));
                map.insert("radius".to_string(), Value::from(p.radius_km));
                insert_date(&mut map, "start_date", p.start_date);
                insert_date(&mut map, "end_date", p.end_date);
            }
            JobParameters::Unrecognized { .. } => {}
        }
        Value::Object(map).serialize(serializer)
    }
}

fn insert_date(map: &mut Map<String, Value>, field: &str, date: NaiveDate) {
    map.insert(
        field.to_string(),
        Value::from(date.format(PARAMETER_DATE_FORMAT).to_string()),
    );
}

impl<'de> Deserialize<'de> for JobParameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        JobParameters::from_value(&value).map_err(D::Error::custom)
    }
}
