use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Struct generics
    pub(crate) generics: syn::Generics,

    /// Fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        let mut errs = ErrorSet::default();
        let fields: Vec<_> = node
            .named
            .iter()
            .filter_map(|field| errs.check(Field::from_ast(field)))
            .collect();

        errs.finish()?;

        Ok(Record {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            fields,
        })
    }
}
