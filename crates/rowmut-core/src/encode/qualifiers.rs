use crate::{
    encode::{
        Encoder, ensure_family,
        stage::{Staged, Staging},
    },
    error::{EncodeError, InvalidInput},
    mutation::MutationSet,
    obs::{EncoderKind, SkipReason},
    traits::Qualified,
    types::Timestamp,
};

const KIND: EncoderKind = EncoderKind::Qualifiers;

// encode
// one presence cell per named item, sequence order
pub(super) fn encode<Q: Qualified>(
    encoder: &Encoder,
    family: &str,
    timestamp: Timestamp,
    items: Option<&[Q]>,
) -> Result<MutationSet, EncodeError> {
    ensure_family(family)?;

    let items = items.ok_or(InvalidInput::NilItems)?;
    if items.is_empty() {
        return Err(InvalidInput::EmptyItems.into());
    }

    let mut staged = Staged::new(encoder.config.duplicates, items.len());

    for item in items {
        let qualifier = item.qualifier();
        if qualifier.is_empty() {
            encoder.skipped(KIND, qualifier, SkipReason::EmptyQualifier);
            continue;
        }

        if staged.push(qualifier, Vec::new())? == Staging::Replaced {
            encoder.skipped(KIND, qualifier, SkipReason::Superseded);
        }
    }

    Ok(staged.commit(family, encoder.config.granularity.apply(timestamp)))
}
