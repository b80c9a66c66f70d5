use serde::{Serialize, Serializer};
use std::fmt;

/// A row position as the user sees it.
///
/// Stored zero-based; everything user-facing (display, serialization,
/// construction from typed input) goes through the one-based value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Largest one-based value accepted from user input.
    pub const MAX_ONE_BASED: usize = i32::MAX as usize;

    pub fn from_one_based(one_based: usize) -> Option<Self> {
        if one_based == 0 || one_based > Self::MAX_ONE_BASED {
            return None;
        }
        Some(Self {
            zero_based: one_based - 1,
        })
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl Serialize for Index {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.one_based() as u64)
    }
}
