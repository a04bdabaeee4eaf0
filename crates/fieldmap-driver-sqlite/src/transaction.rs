use super::{lock, statement::Statement};

use fieldmap_core::{async_trait, Error, Result};
use rusqlite::Connection as RusqliteConnection;
use std::sync::{Arc, Mutex};

/// An open SQLite transaction.
///
/// Rolled back on drop unless committed.
#[derive(Debug)]
pub struct Transaction {
    connection: Arc<Mutex<RusqliteConnection>>,
    finished: bool,
}

impl Transaction {
    pub(crate) fn begin(connection: Arc<Mutex<RusqliteConnection>>) -> Result<Transaction> {
        lock(&connection)?
            .execute_batch("BEGIN")
            .map_err(Error::driver)?;

        tracing::debug!("began sqlite transaction");

        Ok(Transaction {
            connection,
            finished: false,
        })
    }

    /// Commits the transaction. When the commit fails the transaction is
    /// rolled back as it is dropped.
    pub fn commit(mut self) -> Result<()> {
        self.finish("COMMIT")
    }

    pub fn rollback(mut self) -> Result<()> {
        self.finish("ROLLBACK")
    }

    fn finish(&mut self, sql: &str) -> Result<()> {
        tracing::debug!(sql, "finishing sqlite transaction");

        lock(&self.connection)?
            .execute_batch(sql)
            .map_err(Error::driver)?;

        self.finished = true;
        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if let Err(err) = self.finish("ROLLBACK") {
            tracing::warn!(error = %err, "failed to roll back abandoned sqlite transaction");
        }
    }
}

#[async_trait]
impl fieldmap_core::Transaction for Transaction {
    async fn prepare_statement(&self, sql: &str) -> Result<Box<dyn fieldmap_core::Statement>> {
        Ok(Box::new(Statement::prepare(self.connection.clone(), sql)?))
    }
}
