pub mod driver;
pub use driver::{Database, Statement, Transaction};

mod error;
pub use error::{Error, IntoError};

pub mod stmt;

/// A Result type alias that uses fieldmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
