//! Encoder configuration.
//!
//! Deserializable so an embedding service can keep it next to its store
//! client settings (JSON, TOML, ...). Every field has a default; unknown
//! keys are rejected.

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

///
/// EncoderConfig
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    pub duplicates: DuplicatePolicy,
    pub granularity: TimestampGranularity,
}

impl EncoderConfig {
    #[must_use]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    #[must_use]
    pub const fn with_granularity(mut self, granularity: TimestampGranularity) -> Self {
        self.granularity = granularity;
        self
    }
}

///
/// DuplicatePolicy
///
/// What to do when two fields or items resolve to the same qualifier
/// within one mutation set.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the whole encode with `EncodeError::DuplicateQualifier`.
    #[default]
    Reject,

    /// Keep the first position, take the last value.
    LastWriteWins,
}

///
/// TimestampGranularity
///
/// Cell version precision accepted by the target table.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampGranularity {
    #[default]
    Millis,
    Micros,
}

impl TimestampGranularity {
    #[must_use]
    pub const fn apply(self, timestamp: Timestamp) -> Timestamp {
        match self {
            Self::Millis => timestamp.truncate_to_millis(),
            Self::Micros => timestamp,
        }
    }
}

///
/// TESTS
///
