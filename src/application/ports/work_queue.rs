use async_trait::async_trait;

use crate::domain::JobId;

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("work queue is closed")]
    Closed,
    #[error("work queue unavailable: {0}")]
    Unavailable(String),
}

/// FIFO handoff of job ids from submitters to workers. Each popped id goes
/// to exactly one consumer; redelivery after a consumer crash is possible,
/// which is why claiming a job goes through the status transition table
/// rather than trusting the queue.
#[async_trait]
pub trait WorkQueue: Send + Sync {
    async fn enqueue(&self, id: JobId) -> Result<(), QueueError>;

    /// Waits until an id is available. `None` means the queue has been
    /// closed and no more ids will arrive; worker loops exit on it.
    async fn dequeue(&self) -> Option<JobId>;
}
