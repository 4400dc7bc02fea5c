use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{JobId, JobParameters, JobStatus};

/// A unit of deferred analytical work. `parameters` is fixed at creation;
/// only the status (and the failure reason alongside it) ever changes, and
/// only through the repository's transition checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    pub parameters: JobParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(parameters: JobParameters) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            status: JobStatus::Submitted,
            parameters,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }
}
