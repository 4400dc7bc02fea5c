use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};

use crate::application::ports::{QueueError, WorkQueue};
use crate::domain::JobId;

/// Work queue over an unbounded mpsc channel. The receiver sits behind an
/// async mutex so a pool of workers can share one queue; whoever holds the
/// lock when an id arrives is the one consumer that gets it.
pub struct InMemoryWorkQueue {
    sender: mpsc::UnboundedSender<JobId>,
    receiver: Mutex<mpsc::UnboundedReceiver<JobId>>,
}

impl InMemoryWorkQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: Mutex::new(receiver),
        }
    }
}

impl Default for InMemoryWorkQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkQueue for InMemoryWorkQueue {
    async fn enqueue(&self, id: JobId) -> Result<(), QueueError> {
        self.sender.send(id).map_err(|_| QueueError::Closed)
    }

    async fn dequeue(&self) -> Option<JobId> {
        self.receiver.lock().await.recv().await
    }
}
