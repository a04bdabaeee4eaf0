use super::Statement;

#[derive(Debug, Clone)]
pub struct Insert<'a> {
    /// Table to insert into
    pub table: &'a str,

    /// Columns to set; one placeholder is generated per column
    pub columns: &'a [&'a str],
}

impl<'a> From<Insert<'a>> for Statement<'a> {
    fn from(value: Insert<'a>) -> Self {
        Statement::Insert(value)
    }
}
