use async_trait::async_trait;

use crate::application::ports::{ChartRenderer, RenderError};
use crate::domain::DataSeries;

/// Renderer that encodes the series itself as JSON bytes. Chart drawing is
/// an external collaborator; this adapter keeps the pipeline whole where no
/// image backend is wired in, and any backend that draws real charts slots
/// in behind the same port.
pub struct JsonChartRenderer;

#[async_trait]
impl ChartRenderer for JsonChartRenderer {
    async fn render(&self, series: &DataSeries) -> Result<Vec<u8>, RenderError> {
        serde_json::to_vec(series).map_err(|e| RenderError(e.to_string()))
    }
}
