use crate::{
    config::DuplicatePolicy,
    error::EncodeError,
    mutation::{MutationBuilder, MutationSet},
    types::Timestamp,
};
use std::collections::HashMap;

///
/// Staged
///
/// Local buffer of encoded cells, committed to a `MutationSet` only when
/// the walk finished without error. Owns duplicate-qualifier handling.
///

pub(super) struct Staged {
    policy: DuplicatePolicy,
    cells: Vec<(String, Vec<u8>)>,
    positions: HashMap<String, usize>,
}

///
/// Staging
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Staging {
    Appended,
    Replaced,
}

impl Staged {
    pub(super) fn new(policy: DuplicatePolicy, capacity: usize) -> Self {
        Self {
            policy,
            cells: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, qualifier: &str, value: Vec<u8>) -> Result<Staging, EncodeError> {
        if let Some(&pos) = self.positions.get(qualifier) {
            return match self.policy {
                DuplicatePolicy::Reject => Err(EncodeError::duplicate_qualifier(qualifier)),
                DuplicatePolicy::LastWriteWins => {
                    self.cells[pos].1 = value;
                    Ok(Staging::Replaced)
                }
            };
        }

        self.positions
            .insert(qualifier.to_string(), self.cells.len());
        self.cells.push((qualifier.to_string(), value));

        Ok(Staging::Appended)
    }

    pub(super) fn commit(self, family: &str, timestamp: Timestamp) -> MutationSet {
        let mut builder = MutationBuilder::new(family, timestamp, self.cells.len());
        for (qualifier, value) in self.cells {
            builder.push(qualifier, value);
        }

        builder.finish()
    }
}
