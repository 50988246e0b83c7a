use rust_decimal::Decimal;
use std::fmt;

/// A non-negative rupiah amount.
///
/// Wraps `rust_decimal::Decimal` so totals and change are computed exactly,
/// including fractional units, instead of through floating point. Arithmetic
/// is checked: `Decimal` panics on overflow, so every operation that can grow
/// the value returns `None` past `Decimal::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Returns `None` for negative values.
    pub fn new(value: Decimal) -> Option<Self> {
        (value >= Decimal::ZERO).then_some(Self(value))
    }

    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Subtraction that refuses to go below zero.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::new(self.0 - rhs.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_rejects_negative() {
        assert!(Price::new(dec!(0)).is_some());
        assert!(Price::new(dec!(22.5)).is_some());
        assert!(Price::new(dec!(-0.01)).is_none());
    }

    #[test]
    fn test_price_arithmetic() {
        let unit = Price::from_units(25000);
        assert_eq!(unit.checked_times(2), Some(Price::from_units(50000)));

        let total = Price::ZERO
            .checked_add(unit)
            .and_then(|t| t.checked_add(Price::from_units(22000)));
        assert_eq!(total, Some(Price::from_units(47000)));
    }

    #[test]
    fn test_arithmetic_past_decimal_max_is_none() {
        let huge = Price::new(dec!(9999999999999999999999999999)).unwrap();
        assert_eq!(huge.checked_times(10), None);
        assert_eq!(
            huge.checked_times(7),
            Price::new(dec!(69999999999999999999999999993))
        );

        let max = Price::new(Decimal::MAX).unwrap();
        assert_eq!(max.checked_add(Price::from_units(1)), None);
        assert_eq!(max.checked_add(Price::ZERO), Some(max));
    }

    #[test]
    fn test_checked_sub_keeps_cents() {
        let total = Price::new(dec!(47000.50)).unwrap();
        let cash = Price::from_units(50000);
        assert_eq!(cash.checked_sub(total), Price::new(dec!(2999.50)));
        assert_eq!(Price::from_units(47000).checked_sub(total), None);
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Price::from_units(25000).to_string(), "Rp25000.00");
        assert_eq!(Price::new(dec!(22.5)).unwrap().to_string(), "Rp22.50");
    }
}
