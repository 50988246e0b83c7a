use clap::{Parser, Subcommand};
use kasir::application::session::{CounterSession, DEFAULT_QUEUE_CAPACITY, SessionConfig};
use kasir::application::summary::decode_summary;
use kasir::domain::menu::Menu;
use kasir::error::CounterError;
use kasir::infrastructure::kitchen::SimulatedKitchen;
use kasir::interfaces::console::Console;
use kasir::interfaces::csv::load_menu;
use kasir::logging;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Menu CSV file with a `code,name,price` header. Defaults to the built-in menu.
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Orders that may wait for the kitchen before input is held up.
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    queue_capacity: NonZeroUsize,

    /// Simulated processing time per order, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    processing_delay_ms: u64,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a base64 order summary into its entries.
    Decode { encoded: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(Command::Decode { encoded }) = cli.command {
        for entry in decode_summary(&encoded).into_diagnostic()? {
            println!("{entry}");
        }
        return Ok(());
    }

    let menu = match cli.menu {
        Some(path) => load_menu(path).into_diagnostic()?,
        None => Menu::default(),
    };
    let config = SessionConfig {
        queue_capacity: cli.queue_capacity,
    };
    let kitchen = SimulatedKitchen::stdout(Duration::from_millis(cli.processing_delay_ms));

    let session = CounterSession::new(menu, config);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match session.run_to_completion(&mut console, Box::new(kitchen)).await {
        Ok(receipt) => tracing::debug!(orders = receipt.ledger.len(), "session complete"),
        Err(CounterError::Io(e)) => return Err(e).into_diagnostic(),
        // Already reported on the console.
        Err(e) => tracing::debug!(error = %e, "session ended without payment"),
    }

    Ok(())
}
