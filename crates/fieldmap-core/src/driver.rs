mod destination;
pub use destination::Destination;

mod response;
pub use response::ExecResponse;

mod row;
pub use row::{Row, Rows};

use crate::{async_trait, stmt::Value, Error, Result};

use std::fmt::Debug;

/// A plain database handle: statements prepared through it run outside of any
/// caller-managed transaction.
#[async_trait]
pub trait Database: Debug + Send + Sync {
    /// Prepares `sql` for execution.
    async fn prepare_statement(&self, sql: &str) -> Result<Box<dyn Statement>>;
}

/// An open transaction: statements prepared through it run inside the
/// transaction.
#[async_trait]
pub trait Transaction: Debug + Send + Sync {
    /// Prepares `sql` for execution within this transaction.
    async fn prepare_statement(&self, sql: &str) -> Result<Box<dyn Statement>>;
}

/// A prepared statement, owned by the handle that prepared it.
///
/// Parameters are positional and bind to the statement's `?` placeholders in
/// order.
#[async_trait]
pub trait Statement: Debug + Send + Sync {
    /// The SQL text this statement was prepared from.
    fn sql(&self) -> &str;

    /// Executes a statement that returns no rows.
    async fn execute(&self, params: &[Value]) -> Result<ExecResponse>;

    /// Executes a query and returns every row it produced.
    async fn query(&self, params: &[Value]) -> Result<Rows>;

    /// Executes a query expected to produce a single row.
    ///
    /// Extra rows are ignored. An empty result is a record-not-found error.
    async fn query_row(&self, params: &[Value]) -> Result<Row> {
        match self.query(params).await?.next() {
            Some(row) => Ok(row),
            None => Err(Error::record_not_found(self.sql())),
        }
    }
}
