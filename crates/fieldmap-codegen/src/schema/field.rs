use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type, as written
    pub(crate) ty: syn::Type,

    /// Database column, from `#[sql(...)]`
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::default();
        let mut column = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("sql") {
                continue;
            }

            if column.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[sql] attribute"));
                continue;
            }

            column = errs.check(Column::from_ast(attr));
        }

        errs.finish()?;

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            column,
        })
    }

    pub(crate) fn name(&self) -> String {
        self.ident.to_string()
    }
}
