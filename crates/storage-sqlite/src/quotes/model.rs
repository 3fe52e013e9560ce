//! Database models for quotes.

use diesel::prelude::*;
use rust_decimal::Decimal;

use cotacao_core::quotes::Quote;

use crate::errors::StorageError;

/// Stored quote row. Decimal columns keep the provider's textual form.
#[derive(Queryable, Identifiable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteDB {
    pub id: i32,
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Row to insert; `id` is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
pub struct NewQuoteDB {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

impl From<&Quote> for NewQuoteDB {
    fn from(quote: &Quote) -> Self {
        NewQuoteDB {
            code: quote.code.clone(),
            codein: quote.codein.clone(),
            name: quote.name.clone(),
            high: quote.high.to_string(),
            low: quote.low.to_string(),
            var_bid: quote.var_bid.to_string(),
            pct_change: quote.pct_change.to_string(),
            bid: quote.bid.to_string(),
            ask: quote.ask.to_string(),
            timestamp: quote.timestamp.clone(),
            create_date: quote.create_date.clone(),
        }
    }
}

fn parse_column(column: &str, value: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str_exact(value).map_err(|e| {
        StorageError::SerializationError(format!("Column '{}' holds '{}': {}", column, value, e))
    })
}

impl TryFrom<QuoteDB> for Quote {
    type Error = StorageError;

    fn try_from(db: QuoteDB) -> Result<Self, Self::Error> {
        Ok(Quote {
            high: parse_column("high", &db.high)?,
            low: parse_column("low", &db.low)?,
            var_bid: parse_column("var_bid", &db.var_bid)?,
            pct_change: parse_column("pct_change", &db.pct_change)?,
            bid: parse_column("bid", &db.bid)?,
            ask: parse_column("ask", &db.ask)?,
            code: db.code,
            codein: db.codein,
            name: db.name,
            timestamp: db.timestamp,
            create_date: db.create_date,
        })
    }
}
