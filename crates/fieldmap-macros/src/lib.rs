extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `fieldmap::Record` for a struct with named fields.
///
/// Each field names its database column with `#[sql("column")]`. A field
/// without the attribute maps to an empty column name.
#[proc_macro_derive(Record, attributes(sql))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match fieldmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
