use super::Destination;
use crate::{stmt::Value, Error, Result};

/// One result row. `None` columns are SQL NULL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<Option<Value>>,
}

/// Rows returned by [`Statement::query`](super::Statement::query), in order.
#[derive(Debug)]
pub struct Rows {
    rows: std::vec::IntoIter<Row>,
}

enum Scanned {
    Bytes(Vec<u8>),
    Value(Value),
}

impl Row {
    pub fn new(columns: Vec<Option<Value>>) -> Row {
        Row { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column at `index`; `None` when it is NULL or out of range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.columns.get(index).and_then(Option::as_ref)
    }

    /// Copies the row's columns into `dst`, positionally.
    ///
    /// Every column is converted before any destination is written, so on
    /// error all destinations keep their previous contents.
    pub fn scan(&self, dst: &mut [Destination<'_>]) -> Result<()> {
        if dst.len() != self.columns.len() {
            return Err(Error::invalid_column_count(self.columns.len(), dst.len()));
        }

        let mut scanned = Vec::with_capacity(dst.len());

        for (index, (column, dst)) in self.columns.iter().zip(dst.iter()).enumerate() {
            let item = match dst {
                Destination::Buffer(_) => Scanned::Bytes(Value::into_bytes(column.clone())),
                Destination::Direct(slot) => Value::cast(column.clone(), slot.ty())
                    .map(Scanned::Value)
                    .map_err(|err| err.context(format!("scanning column {index}")))?,
            };
            scanned.push(item);
        }

        for (item, dst) in scanned.into_iter().zip(dst.iter_mut()) {
            match (item, dst) {
                (Scanned::Bytes(bytes), Destination::Buffer(buf)) => **buf = bytes,
                (Scanned::Value(value), Destination::Direct(slot)) => **slot = value,
                _ => unreachable!(),
            }
        }

        tracing::trace!(columns = self.columns.len(), "scanned row");
        Ok(())
    }
}

impl From<Vec<Option<Value>>> for Row {
    fn from(columns: Vec<Option<Value>>) -> Row {
        Row::new(columns)
    }
}

impl Rows {
    pub fn from_vec(rows: Vec<Row>) -> Rows {
        Rows {
            rows: rows.into_iter(),
        }
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.rows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}
