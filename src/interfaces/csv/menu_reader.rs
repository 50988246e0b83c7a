use crate::domain::menu::{Menu, MenuItem};
use crate::domain::price::validate_price;
use crate::error::{CounterError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MenuRecord {
    code: String,
    name: String,
    price: String,
}

/// Reads menu entries from a `code,name,price` CSV source.
///
/// Prices are kept as text by the CSV layer and checked with
/// [`validate_price`], so `1e5` or `12.345` are rejected rather than coerced.
pub struct MenuReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MenuReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn entries(self) -> impl Iterator<Item = Result<(String, MenuItem)>> {
        self.reader.into_deserialize::<MenuRecord>().map(|result| -> Result<(String, MenuItem)> {
            let record = result.map_err(CounterError::from)?;
            let price = validate_price(&record.price)?;
            Ok((record.code, MenuItem::new(record.name, price)))
        })
    }

    /// Reads every entry. Fails on the first invalid row.
    pub fn into_menu(self) -> Result<Menu> {
        let entries = self.entries().collect::<Result<Vec<_>>>()?;
        Menu::from_entries(entries)
    }
}

/// Loads a menu from a CSV file.
pub fn load_menu(path: impl AsRef<Path>) -> Result<Menu> {
    let file = File::open(path)?;
    MenuReader::new(file).into_menu()
}
