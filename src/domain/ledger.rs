use crate::domain::money::Price;
use crate::domain::order::OrderLine;
use crate::error::{CounterError, Result};

/// Orders accepted during one session, with their running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    lines: Vec<OrderLine>,
    total: Price,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line and adds its subtotal to the running total.
    ///
    /// A line that would push the total past `Decimal::MAX` is rejected with
    /// `AmountOverflow` and the ledger is left unchanged.
    pub fn record(&mut self, line: OrderLine) -> Result<()> {
        self.total = self
            .total
            .checked_add(line.subtotal())
            .ok_or(CounterError::AmountOverflow)?;
        self.lines.push(line);
        Ok(())
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total(&self) -> Price {
        self.total
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{Menu, MenuItem};
    use crate::domain::order::Quantity;
    use rust_decimal_macros::dec;

    fn line(menu: &Menu, code: &str, quantity: u32) -> OrderLine {
        OrderLine::new(
            menu.lookup(code).unwrap().clone(),
            Quantity::new(quantity).unwrap(),
        )
        .unwrap()
    }

    fn sum_of_subtotals(ledger: &Ledger) -> Option<Price> {
        ledger
            .lines()
            .iter()
            .try_fold(Price::ZERO, |acc, l| acc.checked_add(l.subtotal()))
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Price::ZERO);
    }

    #[test]
    fn test_total_matches_sum_of_subtotals() {
        let menu = Menu::default();
        let mut ledger = Ledger::new();
        ledger.record(line(&menu, "nasgor", 2)).unwrap();
        ledger.record(line(&menu, "migor", 1)).unwrap();
        ledger.record(line(&menu, "ayamba", 3)).unwrap();

        assert_eq!(Some(ledger.total()), sum_of_subtotals(&ledger));
        assert_eq!(ledger.total(), Price::from_units(162000));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_total_keeps_fractional_units() {
        let mut ledger = Ledger::new();
        let teh = MenuItem::new("Es Teh", Price::new(dec!(4500.25)).unwrap());
        ledger
            .record(OrderLine::new(teh, Quantity::new(4).unwrap()).unwrap())
            .unwrap();
        assert_eq!(ledger.total().value(), dec!(18001.00));
    }

    #[test]
    fn test_overflowing_line_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        let price = Price::new(dec!(40000000000000000000000000000)).unwrap();
        let mahal = MenuItem::new("Mahal", price);
        let first = OrderLine::new(mahal.clone(), Quantity::new(1).unwrap()).unwrap();
        let second = OrderLine::new(mahal, Quantity::new(1).unwrap()).unwrap();

        ledger.record(first).unwrap();
        assert!(matches!(
            ledger.record(second),
            Err(CounterError::AmountOverflow)
        ));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total().value(), dec!(40000000000000000000000000000));
        assert_eq!(Some(ledger.total()), sum_of_subtotals(&ledger));
    }

    #[test]
    fn test_lines_keep_submission_order() {
        let menu = Menu::default();
        let mut ledger = Ledger::new();
        ledger.record(line(&menu, "ayamba", 1)).unwrap();
        ledger.record(line(&menu, "nasgor", 1)).unwrap();
        let names: Vec<&str> = ledger.lines().iter().map(|l| l.item.name.as_str()).collect();
        assert_eq!(names, vec!["Ayam Bakar", "Nasi Goreng"]);
    }
}
