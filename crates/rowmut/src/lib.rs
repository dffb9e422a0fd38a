//! ## Crate layout
//! - `core`: values, schemas, encoders, and observability.
//! - `macros`: `#[derive(Columns)]` and `#[derive(Qualified)]`.
//! - `primitives`: column kinds and the field tag grammar.
//!
//! Records become `MutationSet`s: one write per participating struct field
//! (`encode_columns`) or one empty presence cell per named item
//! (`encode_qualifiers`). Applying the set to a row is the storage
//! client's job.

pub use rowmut_core as core;
pub use rowmut_core::primitives;
pub use rowmut_derive as macros;

// generated code addresses these paths as `::rowmut::<module>`
pub use rowmut_core::{config, encode, error, mutation, obs, schema, traits, types, value};

// traits and derives share names; they live in separate namespaces
pub use rowmut_core::EncodeError;
pub use rowmut_core::traits::{Columns, FieldValue, Qualified};
pub use rowmut_derive::{Columns, Qualified};

use rowmut_core::{encode::Encoder, mutation::MutationSet, types::Timestamp};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Entry points
//

/// Encode `record` with the default encoder configuration.
pub fn encode_columns<'r, R>(
    family: &str,
    timestamp: Timestamp,
    record: impl Into<Option<&'r R>>,
) -> Result<MutationSet, EncodeError>
where
    R: Columns + ?Sized + 'r,
{
    Encoder::default().encode_columns(family, timestamp, record)
}

/// Encode `items` as presence cells with the default encoder configuration.
pub fn encode_qualifiers<'i, Q>(
    family: &str,
    timestamp: Timestamp,
    items: impl Into<Option<&'i [Q]>>,
) -> Result<MutationSet, EncodeError>
where
    Q: Qualified + 'i,
{
    Encoder::default().encode_qualifiers(family, timestamp, items)
}

///
/// Prelude
/// `Columns` and `Qualified` bring both the trait and the derive
///

pub mod prelude {
    pub use crate::{Columns, FieldValue, Qualified, encode_columns, encode_qualifiers};
    pub use rowmut_core::{
        config::{DuplicatePolicy, EncoderConfig, TimestampGranularity},
        encode::Encoder,
        error::EncodeError,
        mutation::{Mutation, MutationSet},
        types::Timestamp,
        value::Value,
    };
}
