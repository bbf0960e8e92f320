//! Filter Predicates
//!
//! One closed set of filter shapes used for both path filtering during
//! listing and line filtering during grep. Every shape resolves to a single
//! boolean decision for a candidate string.

use crate::error::FsError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::sync::Arc;

/// Signature for caller-supplied predicates. May perform I/O and may fail.
pub type PredicateFn = dyn Fn(&str) -> io::Result<bool> + Send + Sync;

/// Inclusion test applied to a path string or a line of text.
#[derive(Clone, Default)]
pub enum Filter {
    /// Matches everything.
    #[default]
    All,
    /// Candidate contains the substring.
    Substring(String),
    /// Candidate contains at least one of the substrings.
    AnyOf(Vec<String>),
    /// Unanchored regex match anywhere in the candidate.
    Pattern(Regex),
    /// Arbitrary predicate; its decision (or error) is used as-is.
    Predicate(Arc<PredicateFn>),
}

impl Filter {
    pub fn substring(needle: impl Into<String>) -> Self {
        Filter::Substring(needle.into())
    }

    pub fn any_of<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::AnyOf(needles.into_iter().map(Into::into).collect())
    }

    /// Compile `pattern` as a regex. Fails before any candidate is tested.
    pub fn pattern(pattern: &str) -> Result<Self, FsError> {
        Ok(Filter::Pattern(Regex::new(pattern)?))
    }

    /// Wrap an infallible predicate.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Arc::new(move |candidate: &str| -> io::Result<bool> {
            Ok(f(candidate))
        }))
    }

    /// Wrap a predicate that may fail; failures surface as [`FsError::Predicate`].
    pub fn try_predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> io::Result<bool> + Send + Sync + 'static,
    {
        Filter::Predicate(Arc::new(f))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Decide whether `candidate` is included.
    pub fn matches(&self, candidate: &str) -> Result<bool, FsError> {
        match self {
            Filter::All => Ok(true),
            Filter::Substring(needle) => Ok(candidate.contains(needle.as_str())),
            Filter::AnyOf(needles) => Ok(needles.iter().any(|n| candidate.contains(n.as_str()))),
            Filter::Pattern(regex) => Ok(regex.is_match(candidate)),
            Filter::Predicate(f) => (**f)(candidate).map_err(|source| FsError::Predicate {
                candidate: candidate.to_string(),
                source,
            }),
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Substring(s) => f.debug_tuple("Substring").field(s).finish(),
            Filter::AnyOf(set) => f.debug_tuple("AnyOf").field(set).finish(),
            Filter::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Filter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for Filter {
    fn from(needle: &str) -> Self {
        Filter::Substring(needle.to_string())
    }
}

impl From<String> for Filter {
    fn from(needle: String) -> Self {
        Filter::Substring(needle)
    }
}

impl From<Vec<String>> for Filter {
    fn from(needles: Vec<String>) -> Self {
        Filter::AnyOf(needles)
    }
}

impl From<Regex> for Filter {
    fn from(regex: Regex) -> Self {
        Filter::Pattern(regex)
    }
}

/// Serializable filter description used by configuration and the CLI.
///
/// Predicates have no serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSpec {
    Substring(String),
    AnyOf(Vec<String>),
    Pattern(String),
}

impl TryFrom<FilterSpec> for Filter {
    type Error = FsError;

    fn try_from(spec: FilterSpec) -> Result<Self, Self::Error> {
        match spec {
            FilterSpec::Substring(s) => Ok(Filter::Substring(s)),
            FilterSpec::AnyOf(set) => Ok(Filter::AnyOf(set)),
            FilterSpec::Pattern(p) => Filter::pattern(&p),
        }
    }
}
