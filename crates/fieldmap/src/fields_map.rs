use crate::{introspect::introspect, Destination, Field, Record, Result, Row, Value};

use fieldmap_sql::{Serializer, Statement};

/// Maps one record instance to a row of `table`.
///
/// The field order fixed at build time is the canonical order: the column
/// list, the placeholders, [`values`](Self::values) and
/// [`addresses`](Self::addresses) all line up positionally.
///
/// A fields map is built per record instance. It is not meant to be shared:
/// scanning overwrites its buffers in place.
pub struct FieldsMap<'a, R: Record> {
    table: String,
    fields: Vec<Field<R>>,
    record: &'a mut R,
}

impl<'a, R: Record> FieldsMap<'a, R> {
    /// Introspects `record` and captures its current field values.
    ///
    /// Fails with an unsupported-field-type error if any field is not a
    /// `String`, `i64`, `f64` or `bool`.
    pub fn build(table: impl Into<String>, record: &'a mut R) -> Result<FieldsMap<'a, R>> {
        let table = table.into();
        let fields = introspect(&*record)?;

        tracing::debug!(table = %table, fields = fields.len(), "built fields map");

        Ok(FieldsMap {
            table,
            fields,
            record,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// The field descriptors, in canonical order.
    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    /// The mapped record, as of the last write-back.
    pub fn record(&self) -> &R {
        &*self.record
    }

    /// Column names in canonical order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(Field::column).collect()
    }

    /// Current field values in canonical order, for use as positional
    /// parameters of the INSERT and UPDATE statements.
    pub fn values(&self) -> Vec<Value> {
        self.fields.iter().map(|field| field.value().clone()).collect()
    }

    /// Scan destinations in canonical order.
    ///
    /// String fields scan into a byte buffer, every other field scans into
    /// its value. Call [`write_back`](Self::write_back) after a successful
    /// scan.
    pub fn addresses(&mut self) -> Vec<Destination<'_>> {
        self.fields.iter_mut().map(Field::destination).collect()
    }

    /// Copies the scanned values into the record and returns it.
    ///
    /// Every value is checked against its field's type before the record is
    /// touched. On error the record is unchanged and the destinations are
    /// reset to the record's current values.
    pub fn write_back(&mut self) -> Result<&mut R> {
        let scanned = match self.fields.iter().map(Field::scanned).collect::<Result<Vec<_>>>() {
            Ok(scanned) => scanned,
            Err(err) => {
                for field in &mut self.fields {
                    field.reset(&*self.record)?;
                }
                return Err(err);
            }
        };

        for (field, value) in self.fields.iter_mut().zip(scanned) {
            field.store(value, &mut *self.record)?;
        }

        tracing::trace!(table = %self.table, "wrote scanned values back to record");
        Ok(&mut *self.record)
    }

    /// Scans `row` into [`addresses`](Self::addresses) and writes the result
    /// back. The record is left untouched when the scan fails.
    pub fn scan(&mut self, row: &Row) -> Result<&mut R> {
        row.scan(&mut self.addresses())?;
        self.write_back()
    }

    /// `` " `a`, `b`, `c` " ``, or an empty string when there are no fields.
    pub fn fields_clause(&self) -> String {
        Serializer::new().fields_clause(&self.column_names())
    }

    /// `` " `a` = ?, `b` = ? " ``, or an empty string when there are no fields.
    pub fn fields_set_clause(&self) -> String {
        Serializer::new().fields_set_clause(&self.column_names())
    }

    /// `SELECT <fields> FROM `table` <extra>`
    ///
    /// `extra` is appended verbatim; it is neither validated nor escaped.
    pub fn select_statement_text(&self, extra: &str) -> String {
        let columns = self.column_names();
        self.serialize(Statement::select(&self.table, &columns, extra))
    }

    /// `INSERT INTO `table` (<fields>) VALUES (?, ...)` with one placeholder
    /// per field.
    pub fn insert_statement_text(&self) -> String {
        let columns = self.column_names();
        self.serialize(Statement::insert(&self.table, &columns))
    }

    /// `UPDATE `table` SET <field = ?, ...><extra>`
    ///
    /// `extra` is appended verbatim; it is neither validated nor escaped.
    pub fn update_statement_text(&self, extra: &str) -> String {
        let columns = self.column_names();
        self.serialize(Statement::update(&self.table, &columns, extra))
    }

    /// `DELETE FROM `table` <extra>`
    ///
    /// `extra` is appended verbatim; it is neither validated nor escaped.
    pub fn delete_statement_text(&self, extra: &str) -> String {
        self.serialize(Statement::delete(&self.table, extra))
    }

    fn serialize(&self, stmt: Statement<'_>) -> String {
        Serializer::new().serialize(&stmt)
    }
}

impl<R: Record> core::fmt::Debug for FieldsMap<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldsMap")
            .field("table", &self.table)
            .field("fields", &self.fields)
            .finish()
    }
}
