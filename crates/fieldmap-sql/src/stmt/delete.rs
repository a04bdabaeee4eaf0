use super::Statement;

#[derive(Debug, Clone)]
pub struct Delete<'a> {
    /// Table to delete from
    pub table: &'a str,

    /// Raw SQL appended after the table name, usually a `WHERE` clause
    pub extra: &'a str,
}

impl<'a> From<Delete<'a>> for Statement<'a> {
    fn from(value: Delete<'a>) -> Self {
        Statement::Delete(value)
    }
}
