use super::Statement;

#[derive(Debug, Clone)]
pub struct Select<'a> {
    /// Table to read from
    pub table: &'a str,

    /// Columns to return, in order
    pub columns: &'a [&'a str],

    /// Raw SQL appended after the table name, usually a `WHERE` clause
    pub extra: &'a str,
}

impl<'a> From<Select<'a>> for Statement<'a> {
    fn from(value: Select<'a>) -> Self {
        Statement::Select(value)
    }
}
