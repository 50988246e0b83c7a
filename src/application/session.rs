use crate::application::queue::OrderQueue;
use crate::application::settlement::{parse_cash, settle};
use crate::application::summary::encode_summary;
use crate::domain::ledger::Ledger;
use crate::domain::menu::{Menu, normalize_code};
use crate::domain::money::Price;
use crate::domain::order::{OrderLine, Quantity};
use crate::domain::ports::OrderProcessorBox;
use crate::error::Result;
use crate::interfaces::console::Console;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

pub const TERMINATOR: &str = "selesai";
pub const CLOSING_MESSAGE: &str = "Program selesai dijalankan.";

const MENU_PROMPT: &str = "Masukkan nama menu (ketik 'selesai' untuk berhenti): ";
const QUANTITY_PROMPT: &str = "Masukkan jumlah pesanan: ";
const PAYMENT_PROMPT: &str = "Masukkan jumlah uang yang dibayarkan: ";
const UNKNOWN_ITEM: &str = "Item tidak ada dalam daftar menu. Silakan coba lagi.";

pub const DEFAULT_QUEUE_CAPACITY: NonZeroUsize = NonZeroUsize::new(2).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Orders that may wait for the worker before the operator is held up.
    pub queue_capacity: NonZeroUsize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Outcome of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub ledger: Ledger,
    pub paid: Price,
    pub change: Price,
}

/// One customer at the counter: ordering, summary, then payment.
///
/// Problems while ordering are reported and the operator is asked again.
/// Problems during payment end the session with an error.
pub struct CounterSession {
    menu: Menu,
    config: SessionConfig,
}

impl CounterSession {
    pub fn new(menu: Menu, config: SessionConfig) -> Self {
        Self { menu, config }
    }

    pub async fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        processor: OrderProcessorBox,
    ) -> Result<Receipt> {
        self.show_menu(console)?;

        let queue = OrderQueue::start(self.config.queue_capacity, processor);
        let ledger = self.take_orders(console, &queue).await;
        // Drain the worker even if the console failed mid-order.
        let processed = queue.close().await?;
        let ledger = ledger?;
        tracing::info!(orders = ledger.len(), processed, total = %ledger.total(), "ordering finished");

        self.show_summary(console, &ledger)?;

        let input = console.prompt(PAYMENT_PROMPT)?.unwrap_or_default();
        let paid = parse_cash(&input)?;
        let change = settle(ledger.total(), paid)?;
        tracing::info!(paid = %paid, change = %change, "payment settled");
        console.line(format!(
            "Pembayaran valid. Kembalian: Rp {}",
            change.value().normalize()
        ))?;

        Ok(Receipt {
            ledger,
            paid,
            change,
        })
    }

    /// Runs the session and reports its outcome on the console.
    ///
    /// A failed session prints the error; the closing message is printed
    /// either way.
    pub async fn run_to_completion<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        processor: OrderProcessorBox,
    ) -> Result<Receipt> {
        let outcome = self.run(console, processor).await;
        if let Err(e) = &outcome {
            tracing::debug!(error = %e, "session aborted");
            console.line(format!("Terjadi error: {e}"))?;
        }
        console.line(CLOSING_MESSAGE)?;
        outcome
    }

    fn show_menu<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.line("Daftar Menu:")?;
        for (code, item) in self.menu.entries() {
            console.line(format!("- {}: {} ({})", code, item.name, item.unit_price))?;
        }
        Ok(())
    }

    async fn take_orders<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        queue: &OrderQueue,
    ) -> Result<Ledger> {
        let mut ledger = Ledger::new();
        loop {
            let Some(input) = console.prompt(MENU_PROMPT)? else {
                tracing::debug!("input closed, finishing orders");
                break;
            };
            let code = normalize_code(&input);
            if code == TERMINATOR {
                break;
            }

            let item = match self.menu.require(&code) {
                Ok(item) => item,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected menu code");
                    console.line(UNKNOWN_ITEM)?;
                    continue;
                }
            };

            let input = console.prompt(QUANTITY_PROMPT)?.unwrap_or_default();
            let quantity = match Quantity::parse(&input) {
                Ok(quantity) => quantity,
                Err(e) => {
                    tracing::debug!(%input, "rejected quantity");
                    console.line(e.to_string())?;
                    continue;
                }
            };

            let recorded = OrderLine::new(item.clone(), quantity)
                .and_then(|line| ledger.record(line.clone()).map(|()| line));
            let line = match recorded {
                Ok(line) => line,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected order line");
                    console.line(e.to_string())?;
                    continue;
                }
            };
            queue.submit(line).await?;
        }
        Ok(ledger)
    }

    fn show_summary<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        ledger: &Ledger,
    ) -> Result<()> {
        console.blank()?;
        console.line("Daftar Pesanan Anda:")?;
        for line in ledger.lines() {
            console.line(format!("- {}", line.item.name))?;
        }
        console.line(format!("Total Harga: {}", ledger.total()))?;
        if !ledger.is_empty() {
            console.line(format!(
                "Detail Pesanan (encoded base64): {}",
                encode_summary(ledger)
            ))?;
        }
        Ok(())
    }
}
