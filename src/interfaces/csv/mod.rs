pub mod menu_reader;

pub use menu_reader::{MenuReader, load_menu};
