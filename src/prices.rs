//! Price normalization.
//!
//! Prices arrive either already canonical or as free-form text such as
//! `"5,89"`, `"R$ 12.50"` or `"1.234,56"`. Normalization reduces them to a
//! single [`Decimal`] amount. The separator handling is a heuristic, not a
//! locale-correct parser: a lone dot is always read as the decimal separator,
//! even where a locale would mean thousands.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while normalizing a price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceParseError {
    /// The input contained no parseable amount.
    #[error("price contains no parseable amount: {0:?}")]
    Unparseable(String),
}

/// A price as supplied by a caller: already canonical, or free-form text.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceInput {
    /// An already-canonical amount, passed through unchanged.
    Amount(Decimal),

    /// Free-form text, normalized via [`parse_price`].
    Text(String),
}

impl PriceInput {
    /// Normalize to a canonical amount, substituting zero when the input
    /// cannot be interpreted. Add-to-cart and item creation use this lenient
    /// path so a bad price never fails the caller.
    #[must_use]
    pub fn canonical(&self) -> Decimal {
        self.try_canonical().unwrap_or(Decimal::ZERO)
    }

    /// Normalize to a canonical amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceParseError::Unparseable`] when text input contains no
    /// interpretable amount.
    pub fn try_canonical(&self) -> Result<Decimal, PriceParseError> {
        match self {
            Self::Amount(amount) => Ok(*amount),
            Self::Text(text) => parse_price(text),
        }
    }
}

impl From<Decimal> for PriceInput {
    fn from(value: Decimal) -> Self {
        Self::Amount(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PriceInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parse a price string into a canonical amount.
///
/// Strips everything except digits, comma, dot and minus. When both comma and
/// dot are present the dot is treated as a thousands separator and the comma
/// as the decimal separator; a comma alone is the decimal separator.
///
/// # Errors
///
/// Returns [`PriceParseError::Unparseable`] when nothing numeric remains.
pub fn parse_price(input: &str) -> Result<Decimal, PriceParseError> {
    let mut cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    if cleaned.contains(',') && cleaned.contains('.') {
        cleaned.retain(|c| c != '.');
    }

    let cleaned = cleaned.replace(',', ".");

    cleaned
        .parse::<Decimal>()
        .map_err(|_| PriceParseError::Unparseable(input.to_owned()))
}
