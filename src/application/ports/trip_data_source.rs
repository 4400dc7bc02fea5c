use async_trait::async_trait;

use crate::domain::{Kiosk, Trip};

#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("trip data source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the ingested trip and kiosk records. Ingestion itself
/// lives outside this crate; workers only ever read.
#[async_trait]
pub trait TripDataSource: Send + Sync {
    async fn trips(&self) -> Result<Vec<Trip>, DataSourceError>;

    async fn kiosks(&self) -> Result<Vec<Kiosk>, DataSourceError>;
}
