//! The fixed catalog of argument prefixes.

use serde::{Serialize, Serializer};
use std::fmt;

/// Marks the start of a labelled argument, e.g. `p/` in `p/91234567`.
/// Two prefixes are the same prefix exactly when their text is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_CLASS_GROUP: Prefix = Prefix::new("c/");
pub const PREFIX_TELEGRAM: Prefix = Prefix::new("tg/");
pub const PREFIX_GITHUB: Prefix = Prefix::new("gh/");
pub const PREFIX_INDICES: Prefix = Prefix::new("i/");
pub const PREFIX_WEEK: Prefix = Prefix::new("w/");
pub const PREFIX_PRESENT: Prefix = Prefix::new("pr/");
pub const PREFIX_ABSENT: Prefix = Prefix::new("ab/");

/// Every prefix the toolkit understands.
pub const ALL_PREFIXES: [Prefix; 10] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_CLASS_GROUP,
    PREFIX_TELEGRAM,
    PREFIX_GITHUB,
    PREFIX_INDICES,
    PREFIX_WEEK,
    PREFIX_PRESENT,
    PREFIX_ABSENT,
];

/// Fields the edit command can change, in the order they are validated.
pub const EDIT_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_CLASS_GROUP,
    PREFIX_TELEGRAM,
    PREFIX_GITHUB,
];

pub const MARK_PREFIXES: [Prefix; 3] = [PREFIX_WEEK, PREFIX_PRESENT, PREFIX_ABSENT];

pub const DELETE_NOTE_PREFIXES: [Prefix; 1] = [PREFIX_INDICES];
