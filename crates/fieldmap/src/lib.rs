//! Maps an in-memory record to a single table row: generates the SQL text,
//! the positional parameters and the scan destinations for CRUD statements,
//! and writes scanned rows back into the record.

extern crate self as fieldmap;

mod field;
pub use field::Field;

mod fields_map;
pub use fields_map::FieldsMap;

mod introspect;

mod prepare;

mod record;
pub use record::{Declaration, Record};

pub use fieldmap_core::{
    driver::{self, Database, Destination, Row, Rows, Statement, Transaction},
    stmt::{self, Type, Value},
    Error, Result,
};

pub use fieldmap_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Declaration, Record};
    pub use std::option::Option;
}
