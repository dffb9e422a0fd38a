//! Column-kind vocabulary and the field tag grammar shared by the runtime
//! encoder and the derive macros. Has no dependencies, so proc-macros
//! can parse tags at compile time with the same rules the runtime uses.

#[macro_use]
mod macros;
mod tag;

pub use tag::{ColumnTag, IGNORE_TAG, OMIT_EMPTY_OPTION};

///
/// CONSTANTS
///

/// Canonical single-byte encoding of `true`.
pub const BOOL_TRUE: u8 = 0x01;

/// Canonical single-byte encoding of `false`.
pub const BOOL_FALSE: u8 = 0x00;

///
/// ColumnKind
///
/// Closed set of value kinds that have a canonical cell encoding.
/// Anything outside this set is rejected by the encoder.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnKind {
    Bytes,
    Text,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl ColumnKind {
    /// Return the full metadata descriptor for one column kind.
    #[must_use]
    pub const fn metadata(self) -> ColumnMetadata {
        column_kind_registry!(metadata_from_registry, self)
    }

    /// Stable lowercase label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    /// Encoded width in bytes, or `None` for variable-width kinds.
    #[must_use]
    pub const fn width(self) -> Option<usize> {
        self.metadata().width
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ColumnMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnMetadata {
    pub label: &'static str,
    pub width: Option<usize>,
}

/// Ordered list of all column kinds in registry order.
pub const ALL_COLUMN_KINDS: [ColumnKind; 13] = column_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///
