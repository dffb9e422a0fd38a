use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use rowmut_primitives::ColumnTag;
use syn::{Attribute, Expr, ExprLit, Generics, Ident, Lit, LitStr, Meta, ext::IdentExt};

///
/// RecordInput
///

#[derive(FromDeriveInput)]
#[darling(supports(struct_named, struct_unit))]
pub struct RecordInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<Ignored, RecordField>,
}

///
/// RecordField
///

#[derive(FromField)]
#[darling(forward_attrs(column))]
pub struct RecordField {
    pub ident: Option<Ident>,
    pub attrs: Vec<Attribute>,
}

///
/// ResolvedField
///
/// A field with its tag run through the shared tag parser.
///

pub struct ResolvedField {
    pub ident: Ident,
    pub name: String,
    pub qualifier: String,
    pub tagged: bool,
    pub ignore: bool,
    pub omit_empty: bool,
}

impl RecordInput {
    pub fn parse(input: TokenStream) -> Result<Self, TokenStream> {
        let input = syn::parse2(input).map_err(|err| err.to_compile_error())?;

        Self::from_derive_input(&input).map_err(darling::Error::write_errors)
    }

    /// Resolve every field's tag, in declaration order.
    pub fn resolve_fields(&self) -> Result<Vec<ResolvedField>, TokenStream> {
        let Some(fields) = self.data.as_ref().take_struct() else {
            return Ok(Vec::new());
        };

        let mut errors = darling::Error::accumulator();
        let mut resolved = Vec::with_capacity(fields.len());

        for field in fields.fields {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let Some(tag) = errors.handle(column_tag(&field.attrs)) else {
                continue;
            };

            let name = ident.unraw().to_string();
            let tag_value = tag.as_ref().map(LitStr::value);
            let parsed = ColumnTag::parse(tag_value.as_deref(), &name);

            resolved.push(ResolvedField {
                qualifier: parsed.qualifier.to_string(),
                tagged: parsed.tagged,
                ignore: parsed.ignore,
                omit_empty: parsed.omit_empty,
                ident,
                name,
            });
        }

        errors
            .finish()
            .map(|()| resolved)
            .map_err(darling::Error::write_errors)
    }
}

// column_tag
// at most one `#[column(...)]` per field, holding a single string literal
fn column_tag(attrs: &[Attribute]) -> darling::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("column")) {
        let lit = match &attr.meta {
            Meta::List(_) => attr.parse_args::<LitStr>().map_err(darling::Error::from)?,
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => lit.clone(),
                other => {
                    return Err(darling::Error::custom("expected a string tag")
                        .with_span(other));
                }
            },
            Meta::Path(path) => {
                return Err(darling::Error::custom(
                    "expected `#[column(\"...\")]` or `#[column = \"...\"]`",
                )
                .with_span(path));
            }
        };

        if found.is_some() {
            return Err(darling::Error::custom("duplicate `column` attribute").with_span(attr));
        }
        found = Some(lit);
    }

    Ok(found)
}
