use super::Statement;

#[derive(Debug, Clone)]
pub struct Update<'a> {
    /// Table to update
    pub table: &'a str,

    /// Columns assigned from positional parameters
    pub columns: &'a [&'a str],

    /// Raw SQL appended after the assignments, usually a `WHERE` clause
    pub extra: &'a str,
}

impl<'a> From<Update<'a>> for Statement<'a> {
    fn from(value: Update<'a>) -> Self {
        Statement::Update(value)
    }
}
