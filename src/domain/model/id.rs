use serde::{Deserialize, Serialize};
use std::fmt;

/// ストレージが採番するBookの識別子。1始まりの連番。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// 空のストレージで最初に割り当てられるID
    pub const FIRST: BookId = BookId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// 連番で次のID
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
