use crate::domain::order::OrderLine;
use crate::domain::ports::OrderProcessorBox;
use crate::error::{CounterError, Result};
use std::num::NonZeroUsize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const WORKER_ID: usize = 1;

/// A bounded FIFO of order lines drained by a single background worker.
///
/// The queue is open while this value exists. [`OrderQueue::close`] consumes
/// it, so nothing can be submitted after closing.
pub struct OrderQueue {
    sender: mpsc::Sender<OrderLine>,
    worker: JoinHandle<usize>,
}

impl OrderQueue {
    /// Creates the channel and spawns the worker task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(capacity: NonZeroUsize, processor: OrderProcessorBox) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.get());
        let worker = tokio::spawn(run_worker(WORKER_ID, receiver, processor));
        tracing::debug!(capacity = capacity.get(), "order queue started");
        Self { sender, worker }
    }

    /// Enqueues a copy of the line, waiting while the buffer is full.
    pub async fn submit(&self, line: OrderLine) -> Result<()> {
        self.sender
            .send(line)
            .await
            .map_err(|_| CounterError::QueueClosed)
    }

    /// Closes the queue and waits until the worker has drained it.
    ///
    /// Returns the number of orders the worker processed.
    pub async fn close(self) -> Result<usize> {
        drop(self.sender);
        let processed = self
            .worker
            .await
            .map_err(|e| CounterError::WorkerFailed(e.to_string()))?;
        tracing::debug!(processed, "order queue closed");
        Ok(processed)
    }
}

async fn run_worker(
    worker_id: usize,
    mut receiver: mpsc::Receiver<OrderLine>,
    processor: OrderProcessorBox,
) -> usize {
    let mut processed = 0;
    while let Some(line) = receiver.recv().await {
        if let Err(e) = processor.process(worker_id, &line).await {
            tracing::warn!(worker_id, item = %line.item.name, error = %e, "order processing failed");
        }
        processed += 1;
    }
    processed
}
