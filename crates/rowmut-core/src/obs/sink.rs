use crate::obs::{EncodeEvent, EncodeSink};

///
/// TracingSink
///
/// Default sink. Forwards events to `tracing` under the `rowmut::encode`
/// target: lifecycle at `debug`, per-field skips at `trace`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EncodeSink for TracingSink {
    fn record(&self, event: EncodeEvent<'_>) {
        match event {
            EncodeEvent::Start { encoder, family } => {
                tracing::debug!(
                    target: "rowmut::encode",
                    encoder = encoder.label(),
                    family,
                    "encode start"
                );
            }
            EncodeEvent::Skipped {
                encoder,
                qualifier,
                reason,
            } => {
                tracing::trace!(
                    target: "rowmut::encode",
                    encoder = encoder.label(),
                    qualifier,
                    ?reason,
                    "column skipped"
                );
            }
            EncodeEvent::Finish {
                encoder,
                family,
                mutations,
            } => {
                tracing::debug!(
                    target: "rowmut::encode",
                    encoder = encoder.label(),
                    family,
                    mutations,
                    "encode finish"
                );
            }
            EncodeEvent::Failed { encoder, class } => {
                tracing::debug!(
                    target: "rowmut::encode",
                    encoder = encoder.label(),
                    %class,
                    "encode failed"
                );
            }
        }
    }
}

///
/// NoopSink
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl EncodeSink for NoopSink {
    fn record(&self, _event: EncodeEvent<'_>) {}
}
