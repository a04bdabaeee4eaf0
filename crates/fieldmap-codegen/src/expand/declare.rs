use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let fieldmap = &self.fieldmap;
        let ident = &self.record.ident;
        let (impl_generics, ty_generics, where_clause) = self.record.generics.split_for_impl();
        let fields = self.expand_field_declarations();

        quote! {
            impl #impl_generics #fieldmap::Record for #ident #ty_generics #where_clause {
                fn declare(fields: &mut #fieldmap::Declaration<Self>) {
                    #( #fields )*
                }
            }
        }
    }

    fn expand_field_declarations(&self) -> Vec<TokenStream> {
        let fieldmap = &self.fieldmap;

        self.record
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                let name = field.name();
                let column = match &field.column {
                    Some(column) => {
                        let lit = &column.name;
                        quote!(#fieldmap::Option::Some(#lit))
                    }
                    None => quote!(#fieldmap::Option::None),
                };

                quote! {
                    fields.field::<#ty>(
                        #name,
                        #column,
                        |record| &record.#ident,
                        |record| &mut record.#ident,
                    );
                }
            })
            .collect()
    }
}
