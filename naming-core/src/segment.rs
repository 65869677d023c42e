//! Tagged multi-field segments used in ad-level strings.
//!
//! A segment is a tag-prefixed primary value, optionally followed by an
//! untagged secondary value with an inner `-`.

use crate::join::join;
use crate::normalize::normalize;
use crate::record::{Field, FieldRecord};

/// Semantic category of a segment, rendered as a letter-dash prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `S-`: sequence or carousel description
    Sequence,
    /// `T-`: hook or title theme
    Theme,
    /// `V-`: visual theme
    Visual,
    /// `A-`: sound or visual identifier
    Tail,
}

impl Tag {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Sequence => "S-",
            Self::Theme => "T-",
            Self::Visual => "V-",
            Self::Tail => "A-",
        }
    }
}

/// Which record fields feed a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentFields {
    pub tag: Tag,
    pub primary: Field,
    pub secondary: Option<Field>,
}

impl SegmentFields {
    /// A segment made of the tagged primary field alone.
    pub const fn tagged(tag: Tag, primary: Field) -> Self {
        Self {
            tag,
            primary,
            secondary: None,
        }
    }

    /// A tagged primary field joined to an untagged secondary field.
    pub const fn paired(tag: Tag, primary: Field, secondary: Field) -> Self {
        Self {
            tag,
            primary,
            secondary: Some(secondary),
        }
    }

    /// Compose this segment from a record.
    pub fn compose(&self, record: &FieldRecord) -> String {
        compose(
            self.tag,
            record.text(self.primary),
            self.secondary.map(|field| record.text(field)),
        )
    }
}

/// `tag + normalized value`, or empty when the value normalizes to nothing.
pub fn tagged(tag: Tag, value: &str) -> String {
    let value = normalize(value);
    if value.is_empty() {
        String::new()
    } else {
        format!("{}{}", tag.prefix(), value)
    }
}

/// Compose a segment from raw values. Either half may be blank.
pub fn compose(tag: Tag, primary: &str, secondary: Option<&str>) -> String {
    let head = tagged(tag, primary);
    match secondary {
        Some(secondary) => join("-", [head.as_str(), secondary], normalize),
        None => head,
    }
}
