use serde::{Deserialize, Serialize};

use super::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KioskStatus {
    Active,
    Inactive,
}

/// A fixed bike-share dock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kiosk {
    pub id: String,
    pub name: String,
    pub status: KioskStatus,
    pub location: GeoPoint,
}
