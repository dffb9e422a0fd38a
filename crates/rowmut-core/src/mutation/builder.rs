use crate::{
    mutation::{Mutation, MutationSet},
    types::Timestamp,
};

///
/// MutationBuilder
///
/// Append-only accumulator behind both encoders. Keeps insertion order and
/// performs no validation or deduplication; callers feed it only after the
/// whole record has encoded.
///

pub(crate) struct MutationBuilder {
    family: String,
    timestamp: Timestamp,
    mutations: Vec<Mutation>,
}

impl MutationBuilder {
    pub(crate) fn new(family: &str, timestamp: Timestamp, capacity: usize) -> Self {
        Self {
            family: family.to_string(),
            timestamp,
            mutations: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, qualifier: impl Into<Vec<u8>>, value: Vec<u8>) {
        self.mutations.push(Mutation::new(
            self.family.clone(),
            qualifier.into(),
            self.timestamp,
            value,
        ));
    }

    pub(crate) fn finish(self) -> MutationSet {
        MutationSet {
            family: self.family,
            timestamp: self.timestamp,
            mutations: self.mutations,
        }
    }
}

///
/// TESTS
///
