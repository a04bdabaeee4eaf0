use super::Error;

/// Error when a row is scanned into a destination list of the wrong length.
#[derive(Debug)]
pub(super) struct InvalidColumnCount {
    expected: usize,
    actual: usize,
}

impl std::error::Error for InvalidColumnCount {}

impl core::fmt::Display for InvalidColumnCount {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "expected {} destination arguments in scan, not {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an invalid column count error.
    ///
    /// `expected` is the number of columns in the row, `actual` the number
    /// of destinations supplied to the scan.
    pub fn invalid_column_count(expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::InvalidColumnCount(InvalidColumnCount {
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is an invalid column count error.
    pub fn is_invalid_column_count(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidColumnCount(_))
    }
}
