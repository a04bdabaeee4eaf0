mod statement;
use statement::Statement;

mod transaction;
pub use transaction::Transaction;

mod value;

use fieldmap_core::{async_trait, Error, Result};
use rusqlite::Connection as RusqliteConnection;
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL, either
    /// `sqlite::memory:` or `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> String {
        match self {
            Sqlite::InMemory => "sqlite::memory:".to_string(),
            Sqlite::File(path) => format!("sqlite:{}", path.display()),
        }
    }

    /// Opens a connection. Every in-memory connection is a fresh, empty
    /// database.
    pub fn connect(&self) -> Result<Connection> {
        let connection = match self {
            Sqlite::File(path) => RusqliteConnection::open(path),
            Sqlite::InMemory => RusqliteConnection::open_in_memory(),
        }
        .map_err(Error::driver)?;

        tracing::debug!(url = %self.url(), "opened sqlite connection");

        Ok(Connection {
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}

/// A SQLite connection, usable as a plain database handle.
#[derive(Debug, Clone)]
pub struct Connection {
    connection: Arc<Mutex<RusqliteConnection>>,
}

impl Connection {
    /// Runs one or more `;` separated statements without parameters, e.g.
    /// schema setup.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        lock(&self.connection)?
            .execute_batch(sql)
            .map_err(Error::driver)
    }

    /// Starts a transaction on this connection.
    ///
    /// The transaction shares the connection: statements prepared through
    /// the plain handle while it is open also run inside it.
    pub fn begin(&self) -> Result<Transaction> {
        Transaction::begin(self.connection.clone())
    }
}

#[async_trait]
impl fieldmap_core::Database for Connection {
    async fn prepare_statement(&self, sql: &str) -> Result<Box<dyn fieldmap_core::Statement>> {
        Ok(Box::new(Statement::prepare(self.connection.clone(), sql)?))
    }
}

fn lock(connection: &Mutex<RusqliteConnection>) -> Result<MutexGuard<'_, RusqliteConnection>> {
    connection
        .lock()
        .map_err(|_| fieldmap_core::err!("sqlite connection lock poisoned"))
}
