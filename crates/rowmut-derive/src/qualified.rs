use crate::attr::RecordInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Error;

/// Tag that marks the field carrying an item's column name.
const QUALIFIER_FIELD: &str = "qualifier";

// derive_qualified
pub fn derive_qualified(input: TokenStream) -> TokenStream {
    let input = match RecordInput::parse(input) {
        Ok(input) => input,
        Err(err) => return err,
    };
    let fields = match input.resolve_fields() {
        Ok(fields) => fields,
        Err(err) => return err,
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut candidates = fields
        .iter()
        .filter(|f| f.tagged && !f.ignore && f.qualifier == QUALIFIER_FIELD);

    let Some(source) = candidates.next() else {
        return Error::new_spanned(
            ident,
            "Qualified needs a field tagged `#[column(\"qualifier\")]`",
        )
        .to_compile_error();
    };

    if let Some(extra) = candidates.next() {
        return Error::new_spanned(
            &extra.ident,
            "more than one field resolves to the `qualifier` column",
        )
        .to_compile_error();
    }

    let source_ident = &source.ident;

    quote! {
        impl #impl_generics ::rowmut::traits::Qualified for #ident #ty_generics #where_clause {
            fn qualifier(&self) -> &str {
                ::rowmut::traits::Qualified::qualifier(&self.#source_ident)
            }
        }
    }
}
