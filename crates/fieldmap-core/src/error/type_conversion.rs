use super::Error;
use crate::stmt::Value;

/// Error when a scanned column cannot be converted to the destination type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    pub(super) value: Option<Value>,
    pub(super) to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "cannot convert {:?} to {}", value, self.to_type),
            None => write!(f, "cannot convert NULL to {}", self.to_type),
        }
    }
}

impl Error {
    /// Creates a type conversion error.
    ///
    /// `value` is `None` when the column was SQL NULL.
    pub fn type_conversion(value: Option<Value>, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            value,
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
