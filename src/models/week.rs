use crate::models::index::Index;
use serde::Serialize;
use std::fmt;

/// A teaching week within the semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Week(Index);

impl Week {
    pub const FIRST: usize = 1;
    pub const LAST: usize = 13;

    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Week should be a whole number from 1 to 13.";

    pub fn new(index: Index) -> Option<Self> {
        if (Self::FIRST..=Self::LAST).contains(&index.one_based()) {
            Some(Self(index))
        } else {
            None
        }
    }

    pub fn number(&self) -> usize {
        self.0.one_based()
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {}", self.number())
    }
}
