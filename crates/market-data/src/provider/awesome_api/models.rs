//! AwesomeAPI response models.
//!
//! The `/json/last/{pair}` endpoint answers with an object keyed by the pair
//! identifier (`USDBRL`), every value a string, numeric ones included.

use cotacao_core::quotes::Quote;
use cotacao_core::FetchError;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Pair object as sent by the provider, before numeric validation.
#[derive(Debug, Deserialize)]
pub struct AwesomeQuote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Parses without rounding: values beyond `Decimal`'s precision are rejected.
fn parse_decimal(field: &str, value: &str) -> Result<Decimal, FetchError> {
    Decimal::from_str_exact(value.trim()).map_err(|e| {
        FetchError::Decode(format!("Field '{}' is not a decimal ('{}'): {}", field, value, e))
    })
}

impl TryFrom<AwesomeQuote> for Quote {
    type Error = FetchError;

    fn try_from(raw: AwesomeQuote) -> Result<Self, Self::Error> {
        Ok(Quote {
            high: parse_decimal("high", &raw.high)?,
            low: parse_decimal("low", &raw.low)?,
            var_bid: parse_decimal("varBid", &raw.var_bid)?,
            pct_change: parse_decimal("pctChange", &raw.pct_change)?,
            bid: parse_decimal("bid", &raw.bid)?,
            ask: parse_decimal("ask", &raw.ask)?,
            code: raw.code,
            codein: raw.codein,
            name: raw.name,
            timestamp: raw.timestamp,
            create_date: raw.create_date,
        })
    }
}

/// Decodes a response body into the quote stored under `pair_key`.
///
/// A missing key and a malformed pair object both yield
/// [`FetchError::Decode`]; only the message differs.
pub fn decode_quote(body: &str, pair_key: &str) -> Result<Quote, FetchError> {
    let mut envelope: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| FetchError::Decode(format!("Failed to parse JSON response: {}", e)))?;

    let pair = envelope.remove(pair_key).ok_or_else(|| {
        FetchError::Decode(format!("No {} quote found in provider response", pair_key))
    })?;

    let raw: AwesomeQuote = serde_json::from_value(pair)
        .map_err(|e| FetchError::Decode(format!("Invalid {} quote: {}", pair_key, e)))?;

    Quote::try_from(raw)
}
