use crate::field::Slot;

use std::any::{Any, TypeId};

/// A struct whose fields map one-to-one onto the columns of a table row.
///
/// Usually derived:
///
/// ```
/// #[derive(fieldmap::Record)]
/// struct DemoRow {
///     #[sql("field_key")]
///     key: String,
///
///     #[sql("field_thr")]
///     three: i64,
/// }
/// ```
pub trait Record: Sized + 'static {
    /// Declares every field of the record, in declaration order.
    fn declare(fields: &mut Declaration<Self>);
}

/// The ordered field list of a [`Record`] type.
pub struct Declaration<R> {
    pub(crate) fields: Vec<FieldDecl<R>>,
}

pub(crate) struct FieldDecl<R> {
    /// Rust field identifier
    pub(crate) name: &'static str,

    /// Value of the `sql` annotation, if the field has one
    pub(crate) column: Option<&'static str>,

    pub(crate) type_id: TypeId,

    pub(crate) type_name: &'static str,

    pub(crate) slot: Slot<R>,
}

impl<R: Record> Declaration<R> {
    pub(crate) fn of() -> Declaration<R> {
        let mut declaration = Declaration { fields: vec![] };
        R::declare(&mut declaration);
        declaration
    }

    /// Declares the next field.
    ///
    /// `get` and `get_mut` project the record onto the field's storage. Any
    /// `'static` field type may be declared; types other than `String`,
    /// `i64`, `f64` and `bool` are rejected when a fields map is built.
    pub fn field<T: Any>(
        &mut self,
        name: &'static str,
        column: Option<&'static str>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> &mut Self {
        self.fields.push(FieldDecl {
            name,
            column,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            slot: Slot::new(get, get_mut),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
