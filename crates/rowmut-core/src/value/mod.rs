mod encode;


use rowmut_primitives::ColumnKind;

pub use encode::{encode, encode_bool};

///
/// Value
///
/// Runtime snapshot of one field, produced by `FieldValue::to_value`.
///
/// The scalar variants map one-to-one onto `ColumnKind`. `List`, `Map`,
/// `Record` and `Null` exist so that shapes without a cell encoding reach
/// the kind encoder and fail there with the offending column's name.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Blob(Vec<u8>),
    Text(String),
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    List(Vec<Self>),
    Map(Vec<(Self, Self)>),
    Record(&'static str),
    Null,
}

impl Value {
    /// Column kind for encodable variants, `None` for everything else.
    #[must_use]
    pub const fn column_kind(&self) -> Option<ColumnKind> {
        let kind = match self {
            Self::Blob(_) => ColumnKind::Bytes,
            Self::Text(_) => ColumnKind::Text,
            Self::Bool(_) => ColumnKind::Bool,
            Self::Int8(_) => ColumnKind::Int8,
            Self::Int16(_) => ColumnKind::Int16,
            Self::Int32(_) => ColumnKind::Int32,
            Self::Int64(_) => ColumnKind::Int64,
            Self::Uint8(_) => ColumnKind::Uint8,
            Self::Uint16(_) => ColumnKind::Uint16,
            Self::Uint32(_) => ColumnKind::Uint32,
            Self::Uint64(_) => ColumnKind::Uint64,
            Self::Float32(_) => ColumnKind::Float32,
            Self::Float64(_) => ColumnKind::Float64,
            Self::List(_) | Self::Map(_) | Self::Record(_) | Self::Null => return None,
        };

        Some(kind)
    }

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Null => "null",
            _ => match self.column_kind() {
                Some(kind) => kind.label(),
                None => "unknown",
            },
        }
    }

    /// Whether this is the zero value of its kind, as tested by `omitempty`.
    ///
    /// Floats compare with `==`, so both `0.0` and `-0.0` count as empty.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_empty_value(&self) -> bool {
        match self {
            Self::Blob(v) => v.is_empty(),
            Self::Text(v) => v.is_empty(),
            Self::Bool(v) => !v,
            Self::Int8(v) => *v == 0,
            Self::Int16(v) => *v == 0,
            Self::Int32(v) => *v == 0,
            Self::Int64(v) => *v == 0,
            Self::Uint8(v) => *v == 0,
            Self::Uint16(v) => *v == 0,
            Self::Uint32(v) => *v == 0,
            Self::Uint64(v) => *v == 0,
            Self::Float32(v) => *v == 0.0,
            Self::Float64(v) => *v == 0.0,
            Self::List(v) => v.is_empty(),
            Self::Map(v) => v.is_empty(),
            Self::Record(_) => false,
            Self::Null => true,
        }
    }

    #[must_use]
    pub const fn is_encodable(&self) -> bool {
        self.column_kind().is_some()
    }
}
