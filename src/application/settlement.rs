use crate::domain::money::Price;
use crate::error::{CounterError, Result};

/// Parses the cash handed over by the customer, in whole rupiah.
pub fn parse_cash(input: &str) -> Result<Price> {
    input
        .trim()
        .parse::<u64>()
        .map(Price::from_units)
        .map_err(|_| CounterError::InvalidPaymentInput)
}

/// Returns the change owed, or `InsufficientPayment` when cash does not cover the total.
pub fn settle(total: Price, cash: Price) -> Result<Price> {
    cash.checked_sub(total)
        .ok_or(CounterError::InsufficientPayment { total, paid: cash })
}
