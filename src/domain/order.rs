use crate::domain::menu::MenuItem;
use crate::domain::money::Price;
use crate::error::{CounterError, Result};
use std::fmt;

/// A strictly positive number of portions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(CounterError::InvalidQuantity)
        }
    }

    /// Parses operator input. Non-numeric, zero and negative values are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let value = input
            .trim()
            .parse::<u32>()
            .map_err(|_| CounterError::InvalidQuantity)?;
        Self::new(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One accepted (item, quantity) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item: MenuItem,
    pub quantity: Quantity,
    subtotal: Price,
}

impl OrderLine {
    /// Fails with `AmountOverflow` when the subtotal does not fit a `Decimal`.
    pub fn new(item: MenuItem, quantity: Quantity) -> Result<Self> {
        let subtotal = item
            .unit_price
            .checked_times(quantity.value())
            .ok_or(CounterError::AmountOverflow)?;
        Ok(Self {
            item,
            quantity,
            subtotal,
        })
    }

    pub fn subtotal(&self) -> Price {
        self.subtotal
    }
}
