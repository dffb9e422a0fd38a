mod builder;

pub(crate) use builder::MutationBuilder;

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

///
/// Mutation
///
/// A single cell write: `{family, qualifier, timestamp, value}`.
/// An empty `value` is a real empty cell (a presence marker), never "unset".
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Mutation {
    family: String,
    #[serde(with = "serde_bytes")]
    qualifier: Vec<u8>,
    timestamp: Timestamp,
    #[serde(with = "serde_bytes")]
    value: Vec<u8>,
}

impl Mutation {
    pub(crate) const fn new(
        family: String,
        qualifier: Vec<u8>,
        timestamp: Timestamp,
        value: Vec<u8>,
    ) -> Self {
        Self {
            family,
            qualifier,
            timestamp,
            value,
        }
    }

    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    #[must_use]
    pub fn qualifier(&self) -> &[u8] {
        &self.qualifier
    }

    /// Qualifier as text. Qualifiers produced by the encoders are always
    /// UTF-8; this only returns `None` for deserialized foreign sets.
    #[must_use]
    pub fn qualifier_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.qualifier).ok()
    }

    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Split into `(qualifier, value)`, dropping the shared family/timestamp.
    #[must_use]
    pub fn into_cell(self) -> (Vec<u8>, Vec<u8>) {
        (self.qualifier, self.value)
    }
}

///
/// MutationSet
///
/// Ordered writes for one row, all under one family and one timestamp.
/// Sealed once returned: there is no way to add, remove or reorder entries.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MutationSet {
    family: String,
    timestamp: Timestamp,
    mutations: Vec<Mutation>,
}

impl MutationSet {
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[must_use]
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mutation> {
        self.mutations.iter()
    }

    /// First mutation written under `qualifier`.
    #[must_use]
    pub fn get(&self, qualifier: impl AsRef<[u8]>) -> Option<&Mutation> {
        let qualifier = qualifier.as_ref();
        self.mutations.iter().find(|m| m.qualifier == qualifier)
    }

    /// Qualifiers in write order.
    pub fn qualifiers(&self) -> impl Iterator<Item = &[u8]> {
        self.mutations.iter().map(Mutation::qualifier)
    }

    #[must_use]
    pub fn into_mutations(self) -> Vec<Mutation> {
        self.mutations
    }
}

impl<'a> IntoIterator for &'a MutationSet {
    type Item = &'a Mutation;
    type IntoIter = std::slice::Iter<'a, Mutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.mutations.iter()
    }
}

impl IntoIterator for MutationSet {
    type Item = Mutation;
    type IntoIter = std::vec::IntoIter<Mutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.mutations.into_iter()
    }
}
