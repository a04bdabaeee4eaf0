/// Outcome of [`Statement::execute`](super::Statement::execute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecResponse {
    /// Number of rows inserted, updated or deleted.
    pub rows_affected: u64,

    /// Row id generated by the last insert, when the database reports one.
    pub last_insert_id: Option<i64>,
}
