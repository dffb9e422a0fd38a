/// Tag body that excludes a field from encoding.
pub const IGNORE_TAG: &str = "-";

/// Option that skips a field holding its kind's zero value.
pub const OMIT_EMPTY_OPTION: &str = "omitempty";

///
/// ColumnTag
///
/// Parsed form of a field tag: `"-"` or `name[, option]*`.
///
/// Parsing never fails. Unknown options are ignored and a blank name falls
/// back to the field's own identifier.
///
/// `tagged` is false when the tag is absent or blank. The qualifier still
/// resolves to the fallback, but struct walks only write tagged fields.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnTag<'a> {
    pub qualifier: &'a str,
    pub tagged: bool,
    pub ignore: bool,
    pub omit_empty: bool,
}

impl<'a> ColumnTag<'a> {
    #[must_use]
    pub fn parse(tag: Option<&'a str>, fallback: &'a str) -> Self {
        let untagged = Self {
            qualifier: fallback,
            tagged: false,
            ignore: false,
            omit_empty: false,
        };

        let Some(tag) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
            return untagged;
        };

        let mut parts = tag.split(',').map(str::trim);
        let name = parts.next().unwrap_or_default();

        if name == IGNORE_TAG {
            return Self {
                qualifier: fallback,
                tagged: true,
                ignore: true,
                omit_empty: false,
            };
        }

        Self {
            qualifier: if name.is_empty() { fallback } else { name },
            tagged: true,
            ignore: false,
            omit_empty: parts.any(|opt| opt == OMIT_EMPTY_OPTION),
        }
    }
}

///
/// TESTS
///
