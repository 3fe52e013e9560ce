use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{NewQuoteDB, QuoteDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::quotes::dsl as quotes_dsl;
use cotacao_core::quotes::{Quote, QuoteStore};
use cotacao_core::{Deadline, PersistError};

/// Quote rows in SQLite. Reads go through the pool, inserts through the
/// single writer.
pub struct QuoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Most recently inserted quote, if any.
    pub fn latest(&self) -> Result<Option<Quote>, StorageError> {
        let mut conn = get_connection(&self.pool)?;

        let row = quotes_dsl::quotes
            .order(quotes_dsl::id.desc())
            .select(QuoteDB::as_select())
            .first::<QuoteDB>(&mut conn)
            .optional()?;

        row.map(Quote::try_from).transpose()
    }

    pub fn count(&self) -> Result<i64, StorageError> {
        let mut conn = get_connection(&self.pool)?;
        Ok(quotes_dsl::quotes.count().get_result(&mut conn)?)
    }
}

#[async_trait]
impl QuoteStore for QuoteRepository {
    async fn persist(&self, deadline: &Deadline, quote: &Quote) -> Result<(), PersistError> {
        deadline.check()?;
        let row = NewQuoteDB::from(quote);

        let inserted = self
            .writer
            .exec(deadline, move |conn: &mut SqliteConnection| {
                diesel::insert_into(quotes_dsl::quotes)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::QueryFailed)
            })
            .await?;

        debug!("Inserted {} quote row(s)", inserted);
        Ok(())
    }
}
