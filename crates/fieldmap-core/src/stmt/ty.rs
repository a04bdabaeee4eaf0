use std::any::{Any, TypeId};

/// The storage primitives a record field may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// `String`, scanned through a byte buffer
    String,

    /// `i64`
    I64,

    /// `f64`
    F64,

    /// `bool`
    Bool,
}

impl Type {
    /// Maps a Rust type to its storage primitive, or `None` when the type is
    /// not supported.
    pub fn of<T: Any>() -> Option<Type> {
        Type::from_type_id(TypeId::of::<T>())
    }

    pub fn from_type_id(id: TypeId) -> Option<Type> {
        if id == TypeId::of::<String>() {
            Some(Type::String)
        } else if id == TypeId::of::<i64>() {
            Some(Type::I64)
        } else if id == TypeId::of::<f64>() {
            Some(Type::F64)
        } else if id == TypeId::of::<bool>() {
            Some(Type::Bool)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::String => "string",
            Type::I64 => "int64",
            Type::F64 => "float64",
            Type::Bool => "bool",
        }
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
