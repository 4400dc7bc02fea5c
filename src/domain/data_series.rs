use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub trips: u64,
}

/// What an analysis produces and the renderer consumes. The renderer is a
/// black box behind a port; this is the whole contract between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSeries {
    /// Unit-width bins; `counts[i]` covers minute `i`, the last bin also
    /// absorbs values equal to the upper edge.
    Histogram {
        labels: ChartLabels,
        lower_edge: u32,
        upper_edge: u32,
        counts: Vec<u64>,
    },
    TimeSeries {
        labels: ChartLabels,
        points: Vec<DailyCount>,
    },
}
