use crate::attr::RecordInput;
use proc_macro2::TokenStream;
use quote::quote;

// derive_columns
pub fn derive_columns(input: TokenStream) -> TokenStream {
    let input = match RecordInput::parse(input) {
        Ok(input) => input,
        Err(err) => return err,
    };
    let fields = match input.resolve_fields() {
        Ok(fields) => fields,
        Err(err) => return err,
    };

    let ident = &input.ident;
    let record_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let descriptors = fields.iter().map(|field| {
        let name = &field.name;
        if !field.tagged {
            return quote! { ::rowmut::schema::ColumnField::untagged(#name) };
        }

        let qualifier = &field.qualifier;
        let ignore = field.ignore;
        let omit_empty = field.omit_empty;

        quote! {
            ::rowmut::schema::ColumnField::new(#name, #qualifier, #ignore, #omit_empty)
        }
    });

    // untagged and ignored fields fall through to `None` and need no
    // FieldValue impl
    let value_arms = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.tagged && !field.ignore)
        .map(|(index, field)| {
            let field_ident = &field.ident;

            quote! {
                #index => ::core::option::Option::Some(
                    ::rowmut::traits::FieldValue::to_value(&self.#field_ident),
                ),
            }
        });

    quote! {
        impl #impl_generics ::rowmut::traits::Columns for #ident #ty_generics #where_clause {
            fn schema(&self) -> &::rowmut::schema::RecordSchema {
                // statics cannot borrow a temporary with drop glue
                const FIELDS: &[::rowmut::schema::ColumnField] = &[#(#descriptors),*];
                static SCHEMA: ::rowmut::schema::RecordSchema =
                    ::rowmut::schema::RecordSchema::new(#record_name, FIELDS);

                &SCHEMA
            }

            #[allow(clippy::match_single_binding)]
            fn column_value(&self, index: usize) -> ::core::option::Option<::rowmut::value::Value> {
                match index {
                    #(#value_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::rowmut::traits::FieldValue for #ident #ty_generics #where_clause {
            fn to_value(&self) -> ::rowmut::value::Value {
                ::rowmut::value::Value::Record(#record_name)
            }
        }
    }
}
