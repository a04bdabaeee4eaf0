/// The `sql` annotation on a field.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
}

impl Column {
    /// Parses either form of the annotation:
    ///
    /// #[sql("name")]
    /// #[sql = "name"]
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        match &attr.meta {
            syn::Meta::List(_) => attr.parse_args(),
            syn::Meta::NameValue(meta) => match &meta.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(name),
                    ..
                }) => Ok(Column { name: name.clone() }),
                value => Err(syn::Error::new_spanned(
                    value,
                    "expected a string literal column name",
                )),
            },
            syn::Meta::Path(_) => Err(syn::Error::new_spanned(
                attr,
                "expected a column name: #[sql(\"column\")]",
            )),
        }
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if !lookahead.peek(syn::LitStr) {
            return Err(lookahead.error());
        }

        let name = input.parse()?;

        if !input.is_empty() {
            return Err(syn::Error::new(
                input.span(),
                "unexpected tokens after column name",
            ));
        }

        Ok(Column { name })
    }
}
