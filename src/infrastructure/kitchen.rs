use crate::domain::order::OrderLine;
use crate::domain::ports::OrderProcessor;
use crate::error::Result;
use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Kitchen stand-in: announces each order, then holds it for a fixed delay.
pub struct SimulatedKitchen<W: Write + Send> {
    delay: Duration,
    output: Mutex<W>,
}

impl SimulatedKitchen<io::Stdout> {
    pub fn stdout(delay: Duration) -> Self {
        Self::new(delay, io::stdout())
    }
}

impl<W: Write + Send> SimulatedKitchen<W> {
    pub fn new(delay: Duration, output: W) -> Self {
        Self {
            delay,
            output: Mutex::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> OrderProcessor for SimulatedKitchen<W> {
    async fn process(&self, worker_id: usize, line: &OrderLine) -> Result<()> {
        {
            let mut output = self.output.lock().unwrap_or_else(|e| e.into_inner());
            writeln!(
                output,
                "Worker {} sedang memproses: {} - Jumlah: {}",
                worker_id, line.item.name, line.quantity
            )?;
            output.flush()?;
        }
        tracing::debug!(worker_id, item = %line.item.name, quantity = line.quantity.value(), "processing order");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
