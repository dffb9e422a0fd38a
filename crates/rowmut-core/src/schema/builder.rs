use crate::schema::{ColumnField, RecordSchema};
use std::borrow::Cow;

///
/// SchemaBuilder
///
/// Runtime counterpart of `#[derive(Columns)]`: fields are appended in
/// declaration order and each raw tag goes through the same tag parser the
/// derive uses.
///

#[derive(Clone, Debug)]
pub struct SchemaBuilder {
    name: Cow<'static, str>,
    fields: Vec<ColumnField>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field with an optional raw tag (`"name, omitempty"`, `"-"`).
    #[must_use]
    pub fn field(mut self, ident: impl Into<Cow<'static, str>>, tag: Option<&str>) -> Self {
        self.fields.push(ColumnField::from_tag(ident, tag));
        self
    }

    /// Append an already resolved descriptor.
    #[must_use]
    pub fn column(mut self, field: ColumnField) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn build(self) -> RecordSchema {
        RecordSchema::owned(self.name, self.fields)
    }
}
