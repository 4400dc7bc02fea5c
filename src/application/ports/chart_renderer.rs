use async_trait::async_trait;

use crate::domain::DataSeries;

#[derive(Debug, thiserror::Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// Turns a data series into an opaque artifact byte buffer. What the bytes
/// are (PNG, SVG, JSON) is the adapter's business.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    async fn render(&self, series: &DataSeries) -> Result<Vec<u8>, RenderError>;
}
