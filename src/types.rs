//! Core value types shared by listing and line scanning.

use serde::{Deserialize, Serialize};

/// Line: decoded text of one line, keeping its `\n` terminator when present.
pub type Line = String;

/// How far a traversal descends below its root.
///
/// Entries directly inside the root are depth 0, so `Limited(0)` lists only
/// the root's children and `Limited(n)` descends `n` directory levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    Unbounded,
    Limited(usize),
}

impl Depth {
    /// Deepest permitted level, if any.
    pub fn limit(self) -> Option<usize> {
        match self {
            Depth::Unbounded => None,
            Depth::Limited(n) => Some(n),
        }
    }
}

/// Caller-facing recursion option: `true`, `false`, or a depth bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recursive {
    Flag(bool),
    Depth(usize),
}

impl Default for Recursive {
    fn default() -> Self {
        Recursive::Flag(true)
    }
}

impl From<Recursive> for Depth {
    fn from(value: Recursive) -> Self {
        match value {
            Recursive::Flag(true) => Depth::Unbounded,
            Recursive::Flag(false) => Depth::Limited(0),
            Recursive::Depth(n) => Depth::Limited(n),
        }
    }
}

impl From<bool> for Depth {
    fn from(recurse: bool) -> Self {
        Recursive::Flag(recurse).into()
    }
}

impl From<usize> for Depth {
    fn from(n: usize) -> Self {
        Depth::Limited(n)
    }
}
