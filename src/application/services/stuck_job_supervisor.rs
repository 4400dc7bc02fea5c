use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::JobStatus;

/// Watches for jobs frozen in `InProgress`. There is no deadline on job
/// execution, so a worker that dies mid-job would otherwise leave its job
/// stuck forever. Requeueing would move the status backwards, which the
/// transition table forbids, so a stuck job is failed with a reason instead.
pub struct StuckJobSupervisor {
    job_repository: Arc<dyn JobRepository>,
    ttl: chrono::Duration,
    poll_interval: Duration,
}

impl StuckJobSupervisor {
    pub fn new(job_repository: Arc<dyn JobRepository>, ttl: Duration, poll_interval: Duration) -> Self {
        Self {
            job_repository,
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
            poll_interval,
        }
    }

    pub async fn run(self) {
        tracing::info!(poll_interval = ?self.poll_interval, "Stuck job supervisor started");
        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            ticker.tick().await;
            match self.sweep().await {
                Ok(0) => {}
                Ok(n) => tracing::warn!(failed = n, "Failed jobs stuck past the processing deadline"),
                Err(e) => tracing::error!(error = %e, "Stuck job sweep failed"),
            }
        }
    }

    /// One pass over in-progress jobs; fails those whose last transition is
    /// older than the TTL. Returns how many were failed.
    pub async fn sweep(&self) -> Result<usize, RepositoryError> {
        let now = Utc::now();
        let mut failed = 0;

        for job in self
            .job_repository
            .list_by_status(JobStatus::InProgress)
            .await?
        {
            if now - job.updated_at <= self.ttl {
                continue;
            }
            let reason = format!(
                "processing deadline exceeded: in progress since {}",
                job.updated_at.to_rfc3339()
            );
            match self
                .job_repository
                .update_status(job.id, JobStatus::Failed, Some(&reason))
                .await
            {
                Ok(()) => {
                    tracing::warn!(job_id = %job.id, "Failed stuck job");
                    failed += 1;
                }
                // The worker finished between the listing and this write.
                Err(RepositoryError::InvalidTransition { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(failed)
    }
}
