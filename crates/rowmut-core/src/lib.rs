//! Core runtime for rowmut: record schemas, values, the kind encoder, the
//! two mutation encoders, and the observability boundary.
#![warn(unreachable_pub)]

extern crate self as rowmut;

// public exports are one module level down
pub mod config;
pub mod encode;
pub mod error;
pub mod mutation;
pub mod obs;
pub mod schema;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::EncodeError;
pub use rowmut_primitives as primitives;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No sinks, builders, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        config::{DuplicatePolicy, EncoderConfig, TimestampGranularity},
        encode::Encoder,
        error::EncodeError,
        mutation::{Mutation, MutationSet},
        traits::{Columns, FieldValue, Qualified},
        types::Timestamp,
        value::Value,
    };
}
