use fieldmap_core::{async_trait, Database, Result, Statement, Transaction};
use std::sync::{Arc, Mutex};

/// Which kind of handle prepared a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Database,
    Transaction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    pub handle: Handle,
    pub sql: String,
}

/// Shared log of every statement prepared through the recording handles.
#[derive(Debug, Clone, Default)]
pub struct PrepareLog {
    entries: Arc<Mutex<Vec<Prepared>>>,
}

impl PrepareLog {
    pub fn new() -> PrepareLog {
        PrepareLog::default()
    }

    /// Snapshot of the log, in prepare order.
    pub fn entries(&self) -> Vec<Prepared> {
        self.entries
            .lock()
            .expect("Failed to acquire prepare log lock")
            .clone()
    }

    fn push(&self, handle: Handle, sql: &str) {
        self.entries
            .lock()
            .expect("Failed to acquire prepare log lock")
            .push(Prepared {
                handle,
                sql: sql.to_string(),
            });
    }
}

/// A database handle wrapper that logs every prepared statement
#[derive(Debug)]
pub struct RecordingDatabase<D> {
    /// The underlying handle that actually prepares statements
    inner: D,

    log: PrepareLog,
}

impl<D> RecordingDatabase<D> {
    pub fn new(inner: D, log: &PrepareLog) -> Self {
        Self {
            inner,
            log: log.clone(),
        }
    }
}

#[async_trait]
impl<D: Database> Database for RecordingDatabase<D> {
    async fn prepare_statement(&self, sql: &str) -> Result<Box<dyn Statement>> {
        let stmt = self.inner.prepare_statement(sql).await?;
        self.log.push(Handle::Database, sql);
        Ok(stmt)
    }
}

/// A transaction handle wrapper that logs every prepared statement
#[derive(Debug)]
pub struct RecordingTransaction<T> {
    inner: T,
    log: PrepareLog,
}

impl<T> RecordingTransaction<T> {
    pub fn new(inner: T, log: &PrepareLog) -> Self {
        Self {
            inner,
            log: log.clone(),
        }
    }

    /// Returns the wrapped transaction, e.g. to commit it.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[async_trait]
impl<T: Transaction> Transaction for RecordingTransaction<T> {
    async fn prepare_statement(&self, sql: &str) -> Result<Box<dyn Statement>> {
        let stmt = self.inner.prepare_statement(sql).await?;
        self.log.push(Handle::Transaction, sql);
        Ok(stmt)
    }
}
