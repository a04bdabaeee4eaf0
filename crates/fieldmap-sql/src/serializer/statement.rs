use super::{ColumnList, Comma, Formatter, Ident, Placeholder, SetList, ToSql};

use crate::stmt::{Delete, Insert, Select, Statement, Update};

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SELECT " ColumnList(self.columns) " FROM " Ident(self.table) " " self.extra);
    }
}

impl ToSql for &Insert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholders = Comma(self.columns.iter().map(|_| Placeholder));

        fmt!(
            f, "INSERT INTO " Ident(self.table) " (" ColumnList(self.columns) ") VALUES ("
            placeholders ")"
        );
    }
}

impl ToSql for &Update<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "UPDATE " Ident(self.table) " SET " SetList(self.columns) self.extra);
    }
}

impl ToSql for &Delete<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "DELETE FROM " Ident(self.table) " " self.extra);
    }
}
