//! Canonical cell encodings.
//!
//! Every multi-byte number is written big-endian at its declared width so
//! that unsigned cells sort lexicographically in numeric order under range
//! scans. These byte layouts are part of the stored format and must not
//! change.

use crate::{error::EncodeError, value::Value};
use rowmut_primitives::{BOOL_FALSE, BOOL_TRUE};

/// Encode one field value into cell bytes.
///
/// `qualifier` only feeds diagnostics; it is carried into
/// `EncodeError::UnsupportedKind` when the value has no cell encoding.
pub fn encode(qualifier: &str, value: Value) -> Result<Vec<u8>, EncodeError> {
    let bytes = match value {
        Value::Blob(v) => v,
        Value::Text(v) => v.into_bytes(),
        Value::Bool(v) => vec![encode_bool(v)],
        Value::Int8(v) => v.to_be_bytes().to_vec(),
        Value::Int16(v) => v.to_be_bytes().to_vec(),
        Value::Int32(v) => v.to_be_bytes().to_vec(),
        Value::Int64(v) => v.to_be_bytes().to_vec(),
        Value::Uint8(v) => v.to_be_bytes().to_vec(),
        Value::Uint16(v) => v.to_be_bytes().to_vec(),
        Value::Uint32(v) => v.to_be_bytes().to_vec(),
        Value::Uint64(v) => v.to_be_bytes().to_vec(),
        Value::Float32(v) => v.to_bits().to_be_bytes().to_vec(),
        Value::Float64(v) => v.to_bits().to_be_bytes().to_vec(),
        other @ (Value::List(_) | Value::Map(_) | Value::Record(_) | Value::Null) => {
            return Err(EncodeError::unsupported_kind(qualifier, other.kind_label()));
        }
    };

    Ok(bytes)
}

#[must_use]
pub const fn encode_bool(v: bool) -> u8 {
    if v { BOOL_TRUE } else { BOOL_FALSE }
}
