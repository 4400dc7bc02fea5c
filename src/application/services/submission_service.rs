use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{
    JobRepository, QueueError, RepositoryError, ResultStore, ResultStoreError, WorkQueue,
};
use crate::domain::{Job, JobId, JobParameters, JobStatus, ValidationError};

/// What a result query reports. A job that is not complete is not an error;
/// the caller gets its current standing instead of artifact bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    Complete(Vec<u8>),
    Pending(JobStatus),
    Failed { reason: String },
}

/// Front door of the pipeline: validates submissions, persists the job,
/// hands its id to the queue, and answers status/result queries.
pub struct SubmissionService {
    job_repository: Arc<dyn JobRepository>,
    queue: Arc<dyn WorkQueue>,
    result_store: Arc<dyn ResultStore>,
}

impl SubmissionService {
    pub fn new(
        job_repository: Arc<dyn JobRepository>,
        queue: Arc<dyn WorkQueue>,
        result_store: Arc<dyn ResultStore>,
    ) -> Self {
        Self {
            job_repository,
            queue,
            result_store,
        }
    }

    /// Validation happens here, once; a rejected submission never creates a
    /// job and never touches the queue.
    pub async fn submit(&self, request: &Value) -> Result<Job, SubmissionError> {
        let parameters =
            JobParameters::from_value(request).map_err(SubmissionError::Validation)?;
        let job = Job::new(parameters);

        self.job_repository
            .create(&job)
            .await
            .map_err(SubmissionError::Repository)?;
        self.queue
            .enqueue(job.id)
            .await
            .map_err(SubmissionError::Queue)?;

        tracing::info!(
            job_id = %job.id,
            plot_type = %job.parameters.plot_type(),
            "Job submitted"
        );
        Ok(job)
    }

    pub async fn job(&self, id: JobId) -> Result<Job, SubmissionError> {
        self.job_repository
            .get_by_id(id)
            .await
            .map_err(SubmissionError::Repository)?
            .ok_or(SubmissionError::NotFound(id))
    }

    pub async fn result(&self, id: JobId) -> Result<JobOutcome, SubmissionError> {
        let job = self.job(id).await?;
        match job.status {
            JobStatus::Complete => match self
                .result_store
                .get(id)
                .await
                .map_err(SubmissionError::ResultStore)?
            {
                Some(bytes) => Ok(JobOutcome::Complete(bytes)),
                None => Err(SubmissionError::ArtifactMissing(id)),
            },
            JobStatus::Failed => Ok(JobOutcome::Failed {
                reason: job
                    .error_message
                    .unwrap_or_else(|| "failed with no recorded reason".to_string()),
            }),
            status => Ok(JobOutcome::Pending(status)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("invalid submission: {0}")]
    Validation(ValidationError),
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("artifact missing for completed job {0}")]
    ArtifactMissing(JobId),
    #[error("repository: {0}")]
    Repository(RepositoryError),
    #[error("result store: {0}")]
    ResultStore(ResultStoreError),
    #[error("queue: {0}")]
    Queue(QueueError),
}
