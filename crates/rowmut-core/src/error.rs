use std::fmt;
use thiserror::Error as ThisError;

///
/// EncodeError
///
/// Every failure either encoder can surface. Encoding is all-or-nothing, so
/// an error always means no mutation set was produced.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EncodeError {
    #[error("column family must not be empty")]
    EmptyFamily,

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("column '{qualifier}' has unsupported kind '{kind}'")]
    UnsupportedKind {
        qualifier: String,
        kind: &'static str,
    },

    #[error("duplicate column qualifier '{qualifier}'")]
    DuplicateQualifier { qualifier: String },
}

impl EncodeError {
    pub(crate) fn unsupported_kind(qualifier: &str, kind: &'static str) -> Self {
        Self::UnsupportedKind {
            qualifier: qualifier.to_string(),
            kind,
        }
    }

    pub(crate) fn duplicate_qualifier(qualifier: &str) -> Self {
        Self::DuplicateQualifier {
            qualifier: qualifier.to_string(),
        }
    }

    /// Stable classification for callers that route on error category.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::EmptyFamily | Self::InvalidInput(_) => ErrorClass::InvalidArgument,
            Self::UnsupportedKind { .. } => ErrorClass::Unsupported,
            Self::DuplicateQualifier { .. } => ErrorClass::Conflict,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// InvalidInput
///
/// Shape problems with the record or item list itself, detected before any
/// field is walked.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidInput {
    #[error("record is nil")]
    NilRecord,

    #[error("record '{record}' has no fields")]
    NoFields { record: String },

    #[error("item list is nil")]
    NilItems,

    #[error("item list is empty")]
    EmptyItems,
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    InvalidArgument,
    Unsupported,
    Conflict,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Unsupported => "unsupported",
            Self::Conflict => "conflict",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_route_by_variant() {
        assert_eq!(EncodeError::EmptyFamily.class(), ErrorClass::InvalidArgument);
        assert_eq!(
            EncodeError::from(InvalidInput::EmptyItems).class(),
            ErrorClass::InvalidArgument
        );
        assert_eq!(
            EncodeError::unsupported_kind("wrong", "map").class(),
            ErrorClass::Unsupported
        );
        assert_eq!(
            EncodeError::duplicate_qualifier("q").class(),
            ErrorClass::Conflict
        );
    }

    #[test]
    fn messages_name_the_column() {
        let err = EncodeError::unsupported_kind("wrong", "map");
        assert_eq!(err.to_string(), "column 'wrong' has unsupported kind 'map'");
        assert_eq!(
            err.display_with_class(),
            "unsupported: column 'wrong' has unsupported kind 'map'"
        );
    }

    #[test]
    fn invalid_input_message_is_nested() {
        let err = EncodeError::from(InvalidInput::NoFields {
            record: "Empty".to_string(),
        });
        assert_eq!(err.to_string(), "invalid input: record 'Empty' has no fields");
    }
}
