use crate::domain::ledger::Ledger;
use crate::error::{CounterError, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};

const SEPARATOR: &str = "; ";

/// Human-readable summary: one entry per order line, then the total.
pub fn summary_text(ledger: &Ledger) -> String {
    ledger
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{} x{} ({})",
                line.item.name,
                line.quantity,
                line.subtotal()
            )
        })
        .chain(std::iter::once(format!("Total Biaya: {}", ledger.total())))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Base64 (standard alphabet, padded) of [`summary_text`].
pub fn encode_summary(ledger: &Ledger) -> String {
    STANDARD.encode(summary_text(ledger))
}

/// Decodes an encoded summary back into its entries.
pub fn decode_summary(encoded: &str) -> Result<Vec<String>> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CounterError::InvalidSummary(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| CounterError::InvalidSummary(e.to_string()))?;
    Ok(text.split(SEPARATOR).map(str::to_string).collect())
}
