#[macro_use]
mod fmt;
use fmt::ToSql;

mod clause;
use clause::{ColumnList, SetList};

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod placeholder;
pub use placeholder::Placeholder;

mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string.
///
/// Identifiers are quoted with backticks, placeholders are unnamed `?`
/// markers, and caller-supplied extra clauses are copied verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer { _priv: () }
    }

    pub fn serialize(&self, stmt: &Statement<'_>) -> String {
        let mut ret = String::new();
        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret
    }

    /// The quoted column list, e.g. `` " `a`, `b`, `c` " ``.
    ///
    /// Surrounded by single spaces when non-empty; empty for no columns.
    pub fn fields_clause(&self, columns: &[&str]) -> String {
        self.fragment(ColumnList(columns))
    }

    /// The assignment list for `UPDATE ... SET`, e.g. `` " `a` = ?, `b` = ? " ``.
    ///
    /// Same spacing convention as [`fields_clause`](Self::fields_clause).
    pub fn fields_set_clause(&self, columns: &[&str]) -> String {
        self.fragment(SetList(columns))
    }

    /// `n` comma separated `?` placeholders.
    pub fn placeholders(&self, n: usize) -> String {
        self.fragment(Comma((0..n).map(|_| Placeholder)))
    }

    fn fragment(&self, fragment: impl ToSql) -> String {
        let mut ret = String::new();
        fragment.to_sql(&mut Formatter { dst: &mut ret });
        ret
    }
}
