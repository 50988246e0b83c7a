use crate::domain::money::Price;
use crate::error::{CounterError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub unit_price: Price,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// The catalog offered at the counter.
///
/// Entries keep the order they were added in, so the menu is always displayed
/// the same way. Codes are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<(String, MenuItem)>,
}

impl Menu {
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, MenuItem)>,
        S: AsRef<str>,
    {
        let mut menu = Self {
            entries: Vec::new(),
        };
        for (code, item) in entries {
            let code = normalize_code(code.as_ref());
            if menu.lookup(&code).is_some() {
                return Err(CounterError::DuplicateMenuCode(code));
            }
            menu.entries.push((code, item));
        }
        if menu.entries.is_empty() {
            return Err(CounterError::EmptyMenu);
        }
        Ok(menu)
    }

    /// Finds an item by code, ignoring surrounding whitespace and ASCII case.
    pub fn lookup(&self, code: &str) -> Option<&MenuItem> {
        let code = normalize_code(code);
        self.entries
            .iter()
            .find(|(entry_code, _)| *entry_code == code)
            .map(|(_, item)| item)
    }

    /// Like [`Menu::lookup`], failing with `UnknownMenuCode`.
    pub fn require(&self, code: &str) -> Result<&MenuItem> {
        self.lookup(code)
            .ok_or_else(|| CounterError::UnknownMenuCode(normalize_code(code)))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &MenuItem)> {
        self.entries.iter().map(|(code, item)| (code.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            entries: vec![
                (
                    "nasgor".to_string(),
                    MenuItem::new("Nasi Goreng", Price::from_units(25000)),
                ),
                (
                    "migor".to_string(),
                    MenuItem::new("Mie Goreng", Price::from_units(22000)),
                ),
                (
                    "ayamba".to_string(),
                    MenuItem::new("Ayam Bakar", Price::from_units(30000)),
                ),
            ],
        }
    }
}

pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}
