use crate::{Destination, Error, Result, Type, Value};

use std::any::Any;

/// Cached metadata and value slot for one record field.
pub struct Field<R> {
    name: &'static str,
    column: &'static str,
    ty: Type,
    value: Value,
    buffer: Vec<u8>,
    slot: Slot<R>,
}

/// How a scanned column reaches a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanStrategy {
    /// Scan into the byte buffer, decode into `value` on write-back
    Buffered,

    /// Scan straight into `value`
    Direct,
}

impl ScanStrategy {
    pub(crate) fn for_type(ty: Type) -> ScanStrategy {
        match ty {
            Type::String => ScanStrategy::Buffered,
            Type::I64 | Type::F64 | Type::Bool => ScanStrategy::Direct,
        }
    }
}

impl<R> Field<R> {
    pub(crate) fn new(
        name: &'static str,
        column: &'static str,
        ty: Type,
        value: Value,
        slot: Slot<R>,
    ) -> Field<R> {
        Field {
            name,
            column,
            ty,
            buffer: seed(&value),
            value,
            slot,
        }
    }

    /// The record's field identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The database column; empty when the field has no `sql` annotation.
    pub fn column(&self) -> &'static str {
        self.column
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    /// The current value, as captured at build time or by the last write-back.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Raw bytes of the last scan. Only used by string fields.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn strategy(&self) -> ScanStrategy {
        ScanStrategy::for_type(self.ty)
    }

    pub(crate) fn destination(&mut self) -> Destination<'_> {
        match self.strategy() {
            ScanStrategy::Buffered => Destination::Buffer(&mut self.buffer),
            ScanStrategy::Direct => Destination::Direct(&mut self.value),
        }
    }

    /// The value a write-back stores: the decoded buffer for buffered
    /// fields, `value` otherwise. Fails when it does not match the field's
    /// type.
    pub(crate) fn scanned(&self) -> Result<Value> {
        let value = match self.strategy() {
            ScanStrategy::Buffered => {
                Value::String(String::from_utf8_lossy(&self.buffer).into_owned())
            }
            ScanStrategy::Direct => self.value.clone(),
        };

        if value.ty() != self.ty {
            return Err(Error::type_conversion(Some(value), self.ty.name())
                .context(format!("writing back field `{}`", self.name)));
        }

        Ok(value)
    }

    /// Stores a value returned by [`scanned`](Self::scanned) in the record.
    pub(crate) fn store(&mut self, value: Value, record: &mut R) -> Result<()> {
        self.slot.store(record, &value)?;
        self.value = value;
        Ok(())
    }

    /// Discards scanned data, reloading `value` and the buffer from the
    /// record.
    pub(crate) fn reset(&mut self, record: &R) -> Result<()> {
        self.value = self.slot.load(record, self.ty)?;
        self.buffer = seed(&self.value);
        Ok(())
    }
}

/// Initial scan buffer: the current bytes of a string value.
fn seed(value: &Value) -> Vec<u8> {
    match value {
        Value::String(v) => v.as_bytes().to_vec(),
        _ => vec![],
    }
}

impl<R> core::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("ty", &self.ty)
            .field("value", &self.value)
            .field("buffer", &String::from_utf8_lossy(&self.buffer))
            .finish()
    }
}

/// Read/write access to one field of a record.
pub(crate) struct Slot<R> {
    accessor: Box<dyn Accessor<R>>,
}

trait Accessor<R>: Send + Sync {
    fn get<'r>(&self, record: &'r R) -> &'r dyn Any;

    fn get_mut<'r>(&self, record: &'r mut R) -> &'r mut dyn Any;
}

struct Typed<R, T> {
    get: fn(&R) -> &T,
    get_mut: fn(&mut R) -> &mut T,
}

impl<R: 'static, T: Any> Accessor<R> for Typed<R, T> {
    fn get<'r>(&self, record: &'r R) -> &'r dyn Any {
        (self.get)(record)
    }

    fn get_mut<'r>(&self, record: &'r mut R) -> &'r mut dyn Any {
        (self.get_mut)(record)
    }
}

impl<R: 'static> Slot<R> {
    pub(crate) fn new<T: Any>(get: fn(&R) -> &T, get_mut: fn(&mut R) -> &mut T) -> Slot<R> {
        Slot {
            accessor: Box::new(Typed { get, get_mut }),
        }
    }
}

impl<R> Slot<R> {
    /// Reads the field as a `ty` value.
    pub(crate) fn load(&self, record: &R, ty: Type) -> Result<Value> {
        let field = self.accessor.get(record);

        let value = match ty {
            Type::String => field.downcast_ref::<String>().cloned().map(Value::String),
            Type::I64 => field.downcast_ref::<i64>().copied().map(Value::I64),
            Type::F64 => field.downcast_ref::<f64>().copied().map(Value::F64),
            Type::Bool => field.downcast_ref::<bool>().copied().map(Value::Bool),
        };

        value.ok_or_else(|| fieldmap_core::err!("field slot does not hold a {ty} value"))
    }

    /// Overwrites the field with `value`.
    pub(crate) fn store(&self, record: &mut R, value: &Value) -> Result<()> {
        let field = self.accessor.get_mut(record);

        let stored = match value {
            Value::String(v) => field.downcast_mut::<String>().map(|dst| dst.clone_from(v)),
            Value::I64(v) => field.downcast_mut::<i64>().map(|dst| *dst = *v),
            Value::F64(v) => field.downcast_mut::<f64>().map(|dst| *dst = *v),
            Value::Bool(v) => field.downcast_mut::<bool>().map(|dst| *dst = *v),
        };

        stored.ok_or_else(|| {
            Error::type_conversion(Some(value.clone()), "the field's declared type")
        })
    }
}
