//! Quote domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One immutable snapshot of a currency pair as reported by the provider.
///
/// Numeric fields are exact decimals and serialize as strings, so the text the
/// provider sent (`"5.10"`) is the text the caller receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    #[serde(rename = "varBid", with = "rust_decimal::serde::str")]
    pub var_bid: Decimal,
    #[serde(rename = "pctChange", with = "rust_decimal::serde::str")]
    pub pct_change: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bid: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ask: Decimal,
    pub timestamp: String,
    pub create_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_quote() -> Quote {
        Quote {
            code: "USD".to_string(),
            codein: "BRL".to_string(),
            name: "Dólar/Real".to_string(),
            high: dec!(5.10),
            low: dec!(5.00),
            var_bid: dec!(0.02),
            pct_change: dec!(0.4),
            bid: dec!(5.05),
            ask: dec!(5.06),
            timestamp: "1700000000".to_string(),
            create_date: "2023-11-14 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_serializes_provider_field_names_with_exact_decimal_text() {
        let json = serde_json::to_value(sample_quote()).unwrap();

        assert_eq!(json["code"], "USD");
        assert_eq!(json["codein"], "BRL");
        assert_eq!(json["name"], "Dólar/Real");
        assert_eq!(json["high"], "5.10");
        assert_eq!(json["low"], "5.00");
        assert_eq!(json["varBid"], "0.02");
        assert_eq!(json["pctChange"], "0.4");
        assert_eq!(json["bid"], "5.05");
        assert_eq!(json["ask"], "5.06");
        assert_eq!(json["timestamp"], "1700000000");
        assert_eq!(json["create_date"], "2023-11-14 10:00:00");
        assert_eq!(json.as_object().unwrap().len(), 11);
    }
}
