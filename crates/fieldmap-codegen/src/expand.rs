mod declare;

use crate::schema::Record;

use proc_macro2::TokenStream;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for fieldmap types
    fieldmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        wrap_in_const(self.expand_record_impl())
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        fieldmap: quote::quote!(_fieldmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote::quote! {
        const _: () = {
            use fieldmap as _fieldmap;
            #code
        };
    }
}
