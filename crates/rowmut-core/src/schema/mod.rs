//! Record schemas: the per-type list of column descriptors the struct-field
//! encoder iterates. Derived types carry a `'static` schema built at compile
//! time; `SchemaBuilder` produces an owned one at runtime.

mod builder;
mod dynamic;


pub use builder::SchemaBuilder;
pub use dynamic::DynamicRecord;

use rowmut_primitives::ColumnTag;
use std::borrow::Cow;

///
/// ColumnField
///
/// One struct field with its tag already resolved.
///
/// Only tagged, non-ignored fields produce mutations. An untagged field is
/// kept in the schema under its own identifier so positions line up with
/// declaration order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnField {
    ident: Cow<'static, str>,
    qualifier: Cow<'static, str>,
    tagged: bool,
    ignore: bool,
    omit_empty: bool,
}

impl ColumnField {
    /// Const constructor for a tagged field, used by generated code where
    /// the tag was parsed by the derive macro.
    #[must_use]
    pub const fn new(
        ident: &'static str,
        qualifier: &'static str,
        ignore: bool,
        omit_empty: bool,
    ) -> Self {
        Self {
            ident: Cow::Borrowed(ident),
            qualifier: Cow::Borrowed(qualifier),
            tagged: true,
            ignore,
            omit_empty,
        }
    }

    /// Const constructor for a field declared without a tag.
    #[must_use]
    pub const fn untagged(ident: &'static str) -> Self {
        Self {
            ident: Cow::Borrowed(ident),
            qualifier: Cow::Borrowed(ident),
            tagged: false,
            ignore: false,
            omit_empty: false,
        }
    }

    /// Resolve a raw tag against the field's identifier at runtime.
    #[must_use]
    pub fn from_tag(ident: impl Into<Cow<'static, str>>, tag: Option<&str>) -> Self {
        let ident = ident.into();
        let parsed = ColumnTag::parse(tag, &ident);
        let qualifier = parsed.qualifier.to_string();
        let (tagged, ignore, omit_empty) = (parsed.tagged, parsed.ignore, parsed.omit_empty);

        Self {
            ident,
            qualifier: Cow::Owned(qualifier),
            tagged,
            ignore,
            omit_empty,
        }
    }

    /// Declared field identifier.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Column qualifier the field is written under.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    #[must_use]
    pub const fn tagged(&self) -> bool {
        self.tagged
    }

    #[must_use]
    pub const fn ignore(&self) -> bool {
        self.ignore
    }

    /// Tagged and not `"-"`.
    #[must_use]
    pub const fn participates(&self) -> bool {
        self.tagged && !self.ignore
    }

    #[must_use]
    pub const fn omit_empty(&self) -> bool {
        self.omit_empty
    }
}

///
/// RecordSchema
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordSchema {
    name: Cow<'static, str>,
    fields: Cow<'static, [ColumnField]>,
}

impl RecordSchema {
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [ColumnField]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            fields: Cow::Borrowed(fields),
        }
    }

    pub(crate) fn owned(name: impl Into<Cow<'static, str>>, fields: Vec<ColumnField>) -> Self {
        Self {
            name: name.into(),
            fields: Cow::Owned(fields),
        }
    }

    pub(crate) fn push_field(&mut self, field: ColumnField) {
        self.fields.to_mut().push(field);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[ColumnField] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields that can produce a mutation.
    pub fn participating(&self) -> impl Iterator<Item = (usize, &ColumnField)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.participates())
    }

    /// Look a field up by the qualifier it is written under.
    #[must_use]
    pub fn by_qualifier(&self, qualifier: &str) -> Option<&ColumnField> {
        self.participating()
            .map(|(_, f)| f)
            .find(|f| f.qualifier() == qualifier)
    }
}
