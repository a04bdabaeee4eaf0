use fieldmap_core::stmt::Value as CoreValue;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Binds a core value as a SQLite parameter.
#[derive(Debug)]
pub(crate) struct Value<'a>(pub(crate) &'a CoreValue);

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
        }
    }
}

/// Converts a SQLite column to a core value; NULL becomes `None`.
///
/// SQLite has no boolean storage class, so booleans come back as integers
/// and are converted when scanned.
pub(crate) fn from_sql(value: ValueRef<'_>) -> Option<CoreValue> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(v) => Some(CoreValue::I64(v)),
        ValueRef::Real(v) => Some(CoreValue::F64(v)),
        ValueRef::Text(v) | ValueRef::Blob(v) => {
            Some(CoreValue::String(String::from_utf8_lossy(v).into_owned()))
        }
    }
}
