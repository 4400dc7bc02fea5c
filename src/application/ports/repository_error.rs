use crate::domain::JobStatus;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("illegal status transition: {from} -> {to}")]
    InvalidTransition { from: JobStatus, to: JobStatus },
}
