mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

/// A statement over a single table, built from an ordered column list.
///
/// The column order is the order of the SQL column list, the `?`
/// placeholders and the `SET` assignments.
#[derive(Debug, Clone)]
pub enum Statement<'a> {
    Select(Select<'a>),
    Insert(Insert<'a>),
    Update(Update<'a>),
    Delete(Delete<'a>),
}

impl<'a> Statement<'a> {
    /// `SELECT <columns> FROM <table> <extra>`
    pub fn select(table: &'a str, columns: &'a [&'a str], extra: &'a str) -> Self {
        Select {
            table,
            columns,
            extra,
        }
        .into()
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
    pub fn insert(table: &'a str, columns: &'a [&'a str]) -> Self {
        Insert { table, columns }.into()
    }

    /// `UPDATE <table> SET <column = ?, ...><extra>`
    pub fn update(table: &'a str, columns: &'a [&'a str], extra: &'a str) -> Self {
        Update {
            table,
            columns,
            extra,
        }
        .into()
    }

    /// `DELETE FROM <table> <extra>`
    pub fn delete(table: &'a str, extra: &'a str) -> Self {
        Delete { table, extra }.into()
    }

    /// Number of `?` placeholders the statement generates itself. Placeholders
    /// inside the caller's extra clause are not counted.
    pub fn num_placeholders(&self) -> usize {
        match self {
            Statement::Insert(stmt) => stmt.columns.len(),
            Statement::Update(stmt) => stmt.columns.len(),
            Statement::Select(_) | Statement::Delete(_) => 0,
        }
    }
}
