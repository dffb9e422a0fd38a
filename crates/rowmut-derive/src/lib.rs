use proc_macro::TokenStream;

mod attr;
mod columns;
mod qualified;

/// Derive `rowmut::traits::Columns` for a struct with named fields.
///
/// Each field may carry `#[column("name")]`, `#[column("name, omitempty")]`
/// or `#[column("-")]` (also accepted as `#[column = "..."]`). Untagged
/// fields stay in the schema but are never written.
#[proc_macro_derive(Columns, attributes(column))]
pub fn derive_columns(input: TokenStream) -> TokenStream {
    columns::derive_columns(input.into()).into()
}

/// Derive `rowmut::traits::Qualified` from the field tagged
/// `#[column("qualifier")]`.
#[proc_macro_derive(Qualified, attributes(column))]
pub fn derive_qualified(input: TokenStream) -> TokenStream {
    qualified::derive_qualified(input.into()).into()
}
