use crate::value::Value;
use serde_bytes::{ByteBuf, Bytes};
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    rc::Rc,
    sync::Arc,
};

///
/// FieldValue
///
/// Conversion boundary between a struct field and the encoder's `Value`.
///
/// Types without an impl cannot appear in a `#[derive(Columns)]` struct
/// (unless tagged `"-"`), so most unsupported kinds are rejected at compile
/// time. Collections convert into `Value::List` / `Value::Map` and are
/// rejected when encoded.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;

    /// Conversion for a contiguous run of `Self`. Defaults to a list;
    /// `u8` overrides it so `Vec<u8>` and friends become byte cells.
    fn slice_to_value(items: &[Self]) -> Value
    where
        Self: Sized,
    {
        Value::List(items.iter().map(Self::to_value).collect())
    }
}

// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }
            }
        )*
    };
}

impl_field_value!(
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
);

impl FieldValue for u8 {
    fn to_value(&self) -> Value {
        Value::Uint8(*self)
    }

    fn slice_to_value(items: &[Self]) -> Value {
        Value::Blob(items.to_vec())
    }
}

// platform-width integers are always stored at 64 bits
impl FieldValue for isize {
    #[allow(clippy::cast_possible_truncation)]
    fn to_value(&self) -> Value {
        Value::Int64(*self as i64)
    }
}

impl FieldValue for usize {
    #[allow(clippy::cast_possible_truncation)]
    fn to_value(&self) -> Value {
        Value::Uint64(*self as u64)
    }
}

// ---- text ----------------------------------------------------------------

impl FieldValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

// ---- bytes ---------------------------------------------------------------

impl FieldValue for ByteBuf {
    fn to_value(&self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl FieldValue for Bytes {
    fn to_value(&self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl FieldValue for Cow<'_, [u8]> {
    fn to_value(&self) -> Value {
        Value::Blob(self.to_vec())
    }
}

// ---- sequences -----------------------------------------------------------

impl<T: FieldValue> FieldValue for [T] {
    fn to_value(&self) -> Value {
        T::slice_to_value(self)
    }
}

impl<T: FieldValue, const N: usize> FieldValue for [T; N] {
    fn to_value(&self) -> Value {
        T::slice_to_value(self)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        T::slice_to_value(self)
    }
}

impl<T: FieldValue> FieldValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FieldValue, S> FieldValue for HashSet<T, S> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

// ---- maps ----------------------------------------------------------------

impl<K: FieldValue, V: FieldValue> FieldValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: FieldValue, V: FieldValue, S> FieldValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}

// ---- wrappers ------------------------------------------------------------

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Rc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

///
/// TESTS
///
