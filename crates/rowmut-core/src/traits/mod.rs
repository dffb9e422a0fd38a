mod field_value;
mod qualified;

pub use field_value::FieldValue;
pub use qualified::Qualified;

use crate::{schema::RecordSchema, value::Value};

// ============================================================================
// RECORDS
// ============================================================================
//
// A record is anything that can describe its columns once (the schema) and
// hand out one field value at a time by position. `#[derive(Columns)]`
// writes both halves; `schema::DynamicRecord` builds them at runtime.
//

///
/// Columns
///
/// Schema-described record consumed by the struct-field encoder.
///
/// `column_value(i)` must line up with `schema().fields()[i]`. Returning
/// `None` means the field does not participate; the derive does this for
/// untagged fields and fields tagged `"-"`, which therefore need no
/// `FieldValue` impl.
///

pub trait Columns {
    fn schema(&self) -> &RecordSchema;

    fn column_value(&self, index: usize) -> Option<Value>;
}

impl<T: Columns + ?Sized> Columns for &T {
    fn schema(&self) -> &RecordSchema {
        (**self).schema()
    }

    fn column_value(&self, index: usize) -> Option<Value> {
        (**self).column_value(index)
    }
}

impl<T: Columns + ?Sized> Columns for Box<T> {
    fn schema(&self) -> &RecordSchema {
        (**self).schema()
    }

    fn column_value(&self, index: usize) -> Option<Value> {
        (**self).column_value(index)
    }
}
