use crate::{Database, Error, FieldsMap, Record, Result, Statement, Transaction};

impl<R: Record> FieldsMap<'_, R> {
    /// Prepares `sql` through the supplied handle.
    ///
    /// The transaction handle is used when present, otherwise the database
    /// handle. Errors from the handle are returned unchanged. To cancel,
    /// drop the returned future.
    pub async fn prepare(
        &self,
        tx: Option<&dyn Transaction>,
        db: Option<&dyn Database>,
        sql: &str,
    ) -> Result<Box<dyn Statement>> {
        if let Some(tx) = tx {
            tracing::debug!(table = %self.table(), sql, "preparing statement in transaction");
            return tx.prepare_statement(sql).await;
        }

        if let Some(db) = db {
            tracing::debug!(table = %self.table(), sql, "preparing statement");
            return db.prepare_statement(sql).await;
        }

        Err(Error::no_handle_supplied())
    }

    /// Prepares [`select_statement_text`](Self::select_statement_text).
    pub async fn select_stmt(
        &self,
        tx: Option<&dyn Transaction>,
        db: Option<&dyn Database>,
        extra: &str,
    ) -> Result<Box<dyn Statement>> {
        let sql = self.select_statement_text(extra);
        self.prepare(tx, db, &sql).await
    }

    /// Prepares [`insert_statement_text`](Self::insert_statement_text).
    pub async fn insert_stmt(
        &self,
        tx: Option<&dyn Transaction>,
        db: Option<&dyn Database>,
    ) -> Result<Box<dyn Statement>> {
        let sql = self.insert_statement_text();
        self.prepare(tx, db, &sql).await
    }

    /// Prepares [`update_statement_text`](Self::update_statement_text).
    pub async fn update_stmt(
        &self,
        tx: Option<&dyn Transaction>,
        db: Option<&dyn Database>,
        extra: &str,
    ) -> Result<Box<dyn Statement>> {
        let sql = self.update_statement_text(extra);
        self.prepare(tx, db, &sql).await
    }

    /// Prepares [`delete_statement_text`](Self::delete_statement_text).
    pub async fn delete_stmt(
        &self,
        tx: Option<&dyn Transaction>,
        db: Option<&dyn Database>,
        extra: &str,
    ) -> Result<Box<dyn Statement>> {
        let sql = self.delete_statement_text(extra);
        self.prepare(tx, db, &sql).await
    }
}
