//! The two public encoders.
//!
//! Both share one shape: check preconditions, walk the input in order into a
//! local `Staged` buffer, and only build the `MutationSet` once every entry
//! has encoded. A failure anywhere returns the error and nothing else.

mod columns;
mod qualifiers;
mod stage;


use crate::{
    config::EncoderConfig,
    error::EncodeError,
    mutation::MutationSet,
    obs::{EncodeEvent, EncodeSink, EncoderKind, SkipReason, TracingSink},
    traits::{Columns, Qualified},
    types::Timestamp,
};
use std::{fmt, sync::Arc};

///
/// Encoder
///
/// Stateless apart from its configuration and sink; cheap to clone and safe
/// to share across threads.
///

#[derive(Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
    sink: Option<Arc<dyn EncodeSink>>,
}

impl Encoder {
    #[must_use]
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config, sink: None }
    }

    /// Route events to `sink` instead of the default `TracingSink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EncodeSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode every participating field of `record` as one mutation.
    ///
    /// Accepts `&T` or `Option<&T>`; `None` stands for a nil record.
    pub fn encode_columns<'r, R>(
        &self,
        family: &str,
        timestamp: Timestamp,
        record: impl Into<Option<&'r R>>,
    ) -> Result<MutationSet, EncodeError>
    where
        R: Columns + ?Sized + 'r,
    {
        let record = record.into();

        self.observe(EncoderKind::Columns, family, || {
            columns::encode(self, family, timestamp, record)
        })
    }

    /// Encode one empty-valued mutation per item with a non-empty qualifier.
    ///
    /// Accepts `&[Q]` or `Option<&[Q]>`; `None` stands for a nil list.
    pub fn encode_qualifiers<'i, Q>(
        &self,
        family: &str,
        timestamp: Timestamp,
        items: impl Into<Option<&'i [Q]>>,
    ) -> Result<MutationSet, EncodeError>
    where
        Q: Qualified + 'i,
    {
        let items = items.into();

        self.observe(EncoderKind::Qualifiers, family, || {
            qualifiers::encode(self, family, timestamp, items)
        })
    }

    fn sink(&self) -> &dyn EncodeSink {
        match &self.sink {
            Some(sink) => sink.as_ref(),
            None => &TracingSink,
        }
    }

    fn skipped(&self, encoder: EncoderKind, qualifier: &str, reason: SkipReason) {
        self.sink().record(EncodeEvent::Skipped {
            encoder,
            qualifier,
            reason,
        });
    }

    fn observe(
        &self,
        encoder: EncoderKind,
        family: &str,
        run: impl FnOnce() -> Result<MutationSet, EncodeError>,
    ) -> Result<MutationSet, EncodeError> {
        let sink = self.sink();
        sink.record(EncodeEvent::Start { encoder, family });

        let result = run();
        match &result {
            Ok(set) => sink.record(EncodeEvent::Finish {
                encoder,
                family,
                mutations: set.len(),
            }),
            Err(err) => sink.record(EncodeEvent::Failed {
                encoder,
                class: err.class(),
            }),
        }

        result
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("config", &self.config)
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}

// ensure_family
// checked before anything else in either encoder
fn ensure_family(family: &str) -> Result<(), EncodeError> {
    if family.is_empty() {
        return Err(EncodeError::EmptyFamily);
    }

    Ok(())
}
