use super::Error;

/// Error when a statement is prepared without a transaction or database
/// handle to delegate to.
#[derive(Debug)]
pub(super) struct NoHandleSupplied;

impl std::error::Error for NoHandleSupplied {}

impl core::fmt::Display for NoHandleSupplied {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no transaction or database handle supplied")
    }
}

impl Error {
    /// Creates a no-handle-supplied error.
    pub fn no_handle_supplied() -> Error {
        Error::from(super::ErrorKind::NoHandleSupplied(NoHandleSupplied))
    }

    /// Returns `true` if this error is a no-handle-supplied error.
    pub fn is_no_handle_supplied(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoHandleSupplied(_))
    }
}
