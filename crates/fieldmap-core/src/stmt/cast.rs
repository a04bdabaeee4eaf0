use super::{Type, Value};
use crate::Result;

impl Value {
    /// Converts a scanned column into `ty`.
    ///
    /// `None` is SQL NULL, which no fixed-width type accepts.
    pub fn cast(src: Option<Value>, ty: Type) -> Result<Value> {
        let Some(value) = src else {
            return Err(crate::Error::type_conversion(None, ty.name()));
        };

        let ret = match (ty, &value) {
            (Type::String, _) => Some(Value::String(value.to_text())),
            (Type::I64, Value::I64(v)) => Some(Value::I64(*v)),
            (Type::I64, Value::Bool(v)) => Some(Value::I64(*v as i64)),
            (Type::I64, Value::String(v)) => v.trim().parse().ok().map(Value::I64),
            (Type::F64, Value::F64(v)) => Some(Value::F64(*v)),
            (Type::F64, Value::I64(v)) => Some(Value::F64(*v as f64)),
            (Type::F64, Value::String(v)) => v.trim().parse().ok().map(Value::F64),
            (Type::Bool, Value::Bool(v)) => Some(Value::Bool(*v)),
            (Type::Bool, Value::I64(0)) => Some(Value::Bool(false)),
            (Type::Bool, Value::I64(1)) => Some(Value::Bool(true)),
            (Type::Bool, Value::String(v)) => parse_bool(v).map(Value::Bool),
            _ => None,
        };

        ret.ok_or_else(|| crate::Error::type_conversion(Some(value), ty.name()))
    }

    /// Converts a scanned column into the bytes held by a string buffer.
    ///
    /// SQL NULL becomes an empty buffer.
    pub fn into_bytes(src: Option<Value>) -> Vec<u8> {
        match src {
            None => vec![],
            Some(Value::String(v)) => v.into_bytes(),
            Some(value) => value.to_text().into_bytes(),
        }
    }
}

fn parse_bool(src: &str) -> Option<bool> {
    match src.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
