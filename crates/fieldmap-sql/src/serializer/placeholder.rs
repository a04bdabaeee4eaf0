use super::{Formatter, ToSql};

/// An unnamed positional parameter marker.
#[derive(Debug, Clone, Copy)]
pub struct Placeholder;

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('?');
    }
}
