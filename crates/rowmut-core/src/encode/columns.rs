use crate::{
    encode::{
        Encoder, ensure_family,
        stage::{Staged, Staging},
    },
    error::{EncodeError, InvalidInput},
    mutation::MutationSet,
    obs::{EncoderKind, SkipReason},
    traits::Columns,
    types::Timestamp,
    value,
};

const KIND: EncoderKind = EncoderKind::Columns;

// encode
// struct-field walk, declaration order; only tagged fields are written
pub(super) fn encode<R: Columns + ?Sized>(
    encoder: &Encoder,
    family: &str,
    timestamp: Timestamp,
    record: Option<&R>,
) -> Result<MutationSet, EncodeError> {
    ensure_family(family)?;

    let record = record.ok_or(InvalidInput::NilRecord)?;
    let schema = record.schema();
    if schema.is_empty() {
        return Err(InvalidInput::NoFields {
            record: schema.name().to_string(),
        }
        .into());
    }

    let mut staged = Staged::new(encoder.config.duplicates, schema.len());

    for (index, field) in schema.fields().iter().enumerate() {
        let qualifier = field.qualifier();

        if !field.tagged() {
            encoder.skipped(KIND, qualifier, SkipReason::Untagged);
            continue;
        }
        if field.ignore() {
            encoder.skipped(KIND, qualifier, SkipReason::Ignored);
            continue;
        }
        let Some(value) = record.column_value(index) else {
            encoder.skipped(KIND, qualifier, SkipReason::Ignored);
            continue;
        };
        if field.omit_empty() && value.is_empty_value() {
            encoder.skipped(KIND, qualifier, SkipReason::OmittedEmpty);
            continue;
        }
        if qualifier.is_empty() {
            encoder.skipped(KIND, qualifier, SkipReason::EmptyQualifier);
            continue;
        }

        let bytes = value::encode(qualifier, value)?;
        if staged.push(qualifier, bytes)? == Staging::Replaced {
            encoder.skipped(KIND, qualifier, SkipReason::Superseded);
        }
    }

    Ok(staged.commit(family, encoder.config.granularity.apply(timestamp)))
}
