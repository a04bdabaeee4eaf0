use super::{Comma, Formatter, Ident, Placeholder, ToSql};

/// `` " `a`, `b` " ``, or nothing for an empty list
pub(super) struct ColumnList<'a>(pub(super) &'a [&'a str]);

/// `` " `a` = ?, `b` = ? " ``, or nothing for an empty list
pub(super) struct SetList<'a>(pub(super) &'a [&'a str]);

struct Assignment<'a>(&'a str);

impl ToSql for ColumnList<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0.is_empty() {
            return;
        }

        fmt!(f, " " Comma(self.0.iter().map(Ident)) " ");
    }
}

impl ToSql for SetList<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0.is_empty() {
            return;
        }

        fmt!(f, " " Comma(self.0.iter().map(|column| Assignment(column))) " ");
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0) " = " Placeholder);
    }
}
