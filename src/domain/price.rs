use crate::domain::money::Price;
use crate::error::{CounterError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static PRICE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d{1,2})?$").expect("price pattern is a valid regex")
});

/// Validates a price string and parses it.
///
/// Accepts one or more digits optionally followed by a decimal point and one
/// or two digits, e.g. `25000`, `22.5` or `30.00`.
pub fn validate_price(input: &str) -> Result<Price> {
    let input = input.trim();
    if !PRICE_FORMAT.is_match(input) {
        return Err(CounterError::InvalidFormat(input.to_string()));
    }
    let value = Decimal::from_str(input)?;
    Price::new(value).ok_or_else(|| CounterError::InvalidFormat(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_prices() {
        assert_eq!(validate_price("25000").unwrap(), Price::from_units(25000));
        assert_eq!(validate_price("25.5").unwrap().value(), dec!(25.5));
        assert_eq!(validate_price("30.00").unwrap().value(), dec!(30.00));
        assert_eq!(validate_price(" 22000 ").unwrap(), Price::from_units(22000));
    }

    #[test]
    fn test_invalid_prices() {
        for input in ["25.555", "", "abc", "-5", "12.", ".5", "1,000", "1e5"] {
            assert!(
                matches!(validate_price(input), Err(CounterError::InvalidFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_pattern_match_but_out_of_range() {
        let huge = "9".repeat(40);
        assert!(matches!(
            validate_price(&huge),
            Err(CounterError::ParseFailure(_))
        ));
    }
}
