use super::order::OrderLine;
use crate::error::Result;
use async_trait::async_trait;

/// Work performed by the queue worker for every order it receives.
#[async_trait]
pub trait OrderProcessor: Send + Sync {
    async fn process(&self, worker_id: usize, line: &OrderLine) -> Result<()>;
}

pub type OrderProcessorBox = Box<dyn OrderProcessor>;
