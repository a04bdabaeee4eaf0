use crate::{record::Declaration, Error, Field, Record, Result, Type};

/// Builds the field descriptors of `record`, in declaration order, capturing
/// each field's current value.
///
/// Fails on the first field whose type is not a supported primitive; no
/// descriptors are returned in that case.
pub(crate) fn introspect<R: Record>(record: &R) -> Result<Vec<Field<R>>> {
    let declaration = Declaration::<R>::of();
    let mut fields = Vec::with_capacity(declaration.len());

    for decl in declaration.fields {
        let Some(ty) = Type::from_type_id(decl.type_id) else {
            return Err(Error::unsupported_field_type(decl.type_name));
        };

        let column = match decl.column {
            Some(column) => column,
            None => {
                tracing::warn!(
                    record = std::any::type_name::<R>(),
                    field = decl.name,
                    "field has no `sql` column annotation; mapping it to an empty column name"
                );
                ""
            }
        };

        let value = decl.slot.load(record, ty)?;
        fields.push(Field::new(decl.name, column, ty, value, decl.slot));
    }

    Ok(fields)
}
