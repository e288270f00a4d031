//! Client-side name filtering
//!
//! The service offers no server-side filtering on its listing endpoints, so
//! listing accessors fetch the full collection and filter locally. Matching
//! is glob-style (`*` and `?`) against the record's name field only; all
//! matches are returned and callers needing uniqueness enforce it themselves.

use glob::{MatchOptions, Pattern};

use crate::error::{Error, Result};

/// A compiled glob pattern applied to record names.
///
/// Case-insensitive by default; use [`NameFilter::case_sensitive`] to match
/// exact case.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: Pattern,
    options: MatchOptions,
}

impl NameFilter {
    /// Compile a case-insensitive filter
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_case(pattern, false)
    }

    /// Compile a case-sensitive filter
    pub fn case_sensitive(pattern: &str) -> Result<Self> {
        Self::with_case(pattern, true)
    }

    fn with_case(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let pattern = Pattern::new(pattern)
            .map_err(|e| Error::Validation(format!("invalid name pattern '{pattern}': {e}")))?;
        Ok(Self {
            pattern,
            options: MatchOptions {
                case_sensitive,
                // Names are flat strings, not paths: wildcards cross any
                // character, including separators and leading dots.
                require_literal_separator: false,
                require_literal_leading_dot: false,
            },
        })
    }

    /// Whether a single name matches
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.matches_with(name, self.options)
    }

    /// Retain the items whose name matches, preserving order
    pub fn apply<T>(&self, items: Vec<T>, name_of: impl Fn(&T) -> &str) -> Vec<T> {
        items
            .into_iter()
            .filter(|item| self.matches(name_of(item)))
            .collect()
    }
}
