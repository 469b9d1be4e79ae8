//! Name filters for folder loading.

use regex::Regex;

/// Matches an entry name exactly or by pattern.
#[derive(Debug, Clone)]
pub enum NameFilter {
    /// Whole-name equality.
    Exact(String),
    /// Regular-expression search anywhere in the name.
    Pattern(Regex),
}

impl NameFilter {
    /// Returns `true` when `name` matches.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == name,
            Self::Pattern(pattern) => pattern.is_match(name),
        }
    }
}

impl From<&str> for NameFilter {
    fn from(name: &str) -> Self {
        Self::Exact(name.to_owned())
    }
}

impl From<String> for NameFilter {
    fn from(name: String) -> Self {
        Self::Exact(name)
    }
}

impl From<Regex> for NameFilter {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

/// Returns `true` when `filters` is empty or any filter matches.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use zyro_utils::filesystem::domain::{NameFilter, should_include};
///
/// let filters = [NameFilter::from(Regex::new(r"\.json$").expect("valid")), NameFilter::from("README")];
/// assert!(should_include("users.json", &filters));
/// assert!(should_include("README", &filters));
/// assert!(!should_include("main.rs", &filters));
/// assert!(should_include("anything", &[]));
/// ```
#[must_use]
pub fn should_include(name: &str, filters: &[NameFilter]) -> bool {
    filters.is_empty() || filters.iter().any(|filter| filter.matches(name))
}

/// Returns `true` when any filter matches.
#[must_use]
pub fn should_ignore(name: &str, filters: &[NameFilter]) -> bool {
    filters.iter().any(|filter| filter.matches(name))
}
