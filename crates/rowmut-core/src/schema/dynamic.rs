use crate::{
    schema::{ColumnField, RecordSchema},
    traits::{Columns, FieldValue},
    value::Value,
};
use std::borrow::Cow;

///
/// DynamicRecord
///
/// A record assembled at runtime, for callers whose columns are not known
/// as a Rust struct. Each column is declared exactly like a struct field:
/// an identifier, an optional tag, and a value.
///

#[derive(Clone, Debug, PartialEq)]
pub struct DynamicRecord {
    schema: RecordSchema,
    values: Vec<Option<Value>>,
}

impl DynamicRecord {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            schema: RecordSchema::owned(name, Vec::new()),
            values: Vec::new(),
        }
    }

    /// Builder-style `push`.
    #[must_use]
    pub fn with(
        mut self,
        ident: impl Into<Cow<'static, str>>,
        tag: Option<&str>,
        value: impl FieldValue,
    ) -> Self {
        self.push(ident, tag, value);
        self
    }

    pub fn push(
        &mut self,
        ident: impl Into<Cow<'static, str>>,
        tag: Option<&str>,
        value: impl FieldValue,
    ) {
        let field = ColumnField::from_tag(ident, tag);
        let value = field.participates().then(|| value.to_value());

        self.schema.push_field(field);
        self.values.push(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Columns for DynamicRecord {
    fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    fn column_value(&self, index: usize) -> Option<Value> {
        self.values.get(index).cloned().flatten()
    }
}
