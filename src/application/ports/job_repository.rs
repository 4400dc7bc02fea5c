use async_trait::async_trait;

use crate::domain::{Job, JobId, JobStatus};

use super::RepositoryError;

/// Durable store of job records. The repository owns the job lifecycle:
/// `update_status` must honour the [`JobStatus`] transition table and reject
/// anything else with [`RepositoryError::InvalidTransition`].
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;

    /// Read-modify-write of the stored record: advances the status, records
    /// the failure reason when given, bumps `updated_at`.
    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError>;

    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, RepositoryError>;

    /// Wholesale delete of every record. Jobs are never removed any other
    /// way.
    async fn flush(&self) -> Result<(), RepositoryError>;
}
