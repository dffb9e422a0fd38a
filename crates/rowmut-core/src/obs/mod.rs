//! Encoder observability boundary.
//!
//! Encoders report what they did through `EncodeEvent`s recorded into an
//! `EncodeSink`. Sinks are injected by the caller and must not affect
//! encoding results.

mod sink;

pub use sink::{NoopSink, TracingSink};

use crate::error::ErrorClass;

///
/// EncoderKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncoderKind {
    Columns,
    Qualifiers,
}

impl EncoderKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Columns => "columns",
            Self::Qualifiers => "qualifiers",
        }
    }
}

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// Field declared without a tag.
    Untagged,
    /// Field tagged `"-"`.
    Ignored,
    /// `omitempty` field holding its kind's zero value.
    OmittedEmpty,
    /// Field or item resolved to an empty qualifier.
    EmptyQualifier,
    /// Earlier value replaced under `DuplicatePolicy::LastWriteWins`.
    Superseded,
}

///
/// EncodeEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodeEvent<'a> {
    Start {
        encoder: EncoderKind,
        family: &'a str,
    },
    Skipped {
        encoder: EncoderKind,
        qualifier: &'a str,
        reason: SkipReason,
    },
    Finish {
        encoder: EncoderKind,
        family: &'a str,
        mutations: usize,
    },
    Failed {
        encoder: EncoderKind,
        class: ErrorClass,
    },
}

///
/// EncodeSink
///

pub trait EncodeSink: Send + Sync {
    fn record(&self, event: EncodeEvent<'_>);
}
