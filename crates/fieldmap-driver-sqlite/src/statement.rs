use super::{lock, value};

use fieldmap_core::{
    async_trait,
    driver::{ExecResponse, Row, Rows},
    stmt::Value,
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::sync::{Arc, Mutex};

/// A statement prepared on a SQLite connection.
///
/// The compiled form lives in the connection's statement cache; preparing
/// validates the SQL up front so syntax errors surface here.
#[derive(Debug)]
pub(crate) struct Statement {
    connection: Arc<Mutex<RusqliteConnection>>,
    sql: String,

    /// Whether executing the statement generates a row id
    inserts: bool,
}

impl Statement {
    pub(crate) fn prepare(
        connection: Arc<Mutex<RusqliteConnection>>,
        sql: &str,
    ) -> Result<Statement> {
        lock(&connection)?
            .prepare_cached(sql)
            .map_err(Error::driver)?;

        tracing::debug!(sql, "prepared sqlite statement");

        Ok(Statement {
            connection,
            inserts: is_insert(sql),
            sql: sql.to_string(),
        })
    }
}

#[async_trait]
impl fieldmap_core::Statement for Statement {
    fn sql(&self) -> &str {
        &self.sql
    }

    async fn execute(&self, params: &[Value]) -> Result<ExecResponse> {
        let connection = lock(&self.connection)?;
        let mut stmt = connection
            .prepare_cached(&self.sql)
            .map_err(Error::driver)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter().map(value::Value)))
            .map_err(Error::driver)?;

        tracing::debug!(sql = %self.sql, rows_affected = count, "executed sqlite statement");

        Ok(ExecResponse {
            rows_affected: count as u64,
            last_insert_id: self.inserts.then(|| connection.last_insert_rowid()),
        })
    }

    async fn query(&self, params: &[Value]) -> Result<Rows> {
        let connection = lock(&self.connection)?;
        let mut stmt = connection
            .prepare_cached(&self.sql)
            .map_err(Error::driver)?;

        let width = stmt.column_count();
        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter().map(value::Value)))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut columns = Vec::with_capacity(width);

            for index in 0..width {
                let column = row.get_ref(index).map_err(Error::driver)?;
                columns.push(value::from_sql(column));
            }

            ret.push(Row::new(columns));
        }

        tracing::debug!(sql = %self.sql, rows = ret.len(), "queried sqlite statement");

        Ok(Rows::from_vec(ret))
    }
}

fn is_insert(sql: &str) -> bool {
    let keyword = sql.split_whitespace().next().unwrap_or("");
    keyword.eq_ignore_ascii_case("insert") || keyword.eq_ignore_ascii_case("replace")
}
