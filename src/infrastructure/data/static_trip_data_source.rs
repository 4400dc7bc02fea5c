use async_trait::async_trait;

use crate::application::ports::{DataSourceError, TripDataSource};
use crate::domain::{Kiosk, Trip};

/// Data source over a fixed in-memory snapshot, for wiring workers without
/// the external ingestion collaborator (and for tests).
pub struct StaticTripDataSource {
    trips: Vec<Trip>,
    kiosks: Vec<Kiosk>,
}

impl StaticTripDataSource {
    pub fn new(trips: Vec<Trip>, kiosks: Vec<Kiosk>) -> Self {
        Self { trips, kiosks }
    }
}

#[async_trait]
impl TripDataSource for StaticTripDataSource {
    async fn trips(&self) -> Result<Vec<Trip>, DataSourceError> {
        Ok(self.trips.clone())
    }

    async fn kiosks(&self) -> Result<Vec<Kiosk>, DataSourceError> {
        Ok(self.kiosks.clone())
    }
}
