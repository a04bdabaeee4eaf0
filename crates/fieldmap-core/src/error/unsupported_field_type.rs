use super::Error;

/// Error when a record declares a field whose Rust type is not one of the
/// supported storage primitives (`String`, `i64`, `f64`, `bool`).
///
/// Raised while a fields map is built; no map is produced.
#[derive(Debug)]
pub(super) struct UnsupportedFieldType {
    type_name: Box<str>,
}

impl std::error::Error for UnsupportedFieldType {}

impl core::fmt::Display for UnsupportedFieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported field type: {}", self.type_name)
    }
}

impl Error {
    /// Creates an unsupported field type error naming the offending type.
    pub fn unsupported_field_type(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldType(UnsupportedFieldType {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported field type error.
    pub fn is_unsupported_field_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedFieldType(_))
    }
}
