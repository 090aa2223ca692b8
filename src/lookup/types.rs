//! Data types for the filter configuration table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-form classification of a filter (`date`, `taxonomy`, `numeric`, ...).
///
/// Compared by exact string equality. The builder attaches no meaning to
/// specific type names; callers pick the vocabulary of their
/// configuration store.
///
/// # Example
///
/// ```rust
/// use refiners::FilterType;
///
/// let ty = FilterType::from("taxonomy");
/// assert_eq!(ty.as_str(), "taxonomy");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterType(pub String);

impl FilterType {
    /// Creates a filter type from any string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the type name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FilterType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FilterType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared metadata for one filter, owned by the configuration store.
///
/// Looked up by `filter_name`; see
/// [`lookup_configuration`](crate::lookup_configuration).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfiguration {
    /// Name of the filter this entry describes.
    pub filter_name: String,

    /// Declared classification.
    #[serde(rename = "type")]
    pub filter_type: FilterType,
}

impl FilterConfiguration {
    /// Creates a configuration entry.
    pub fn new(filter_name: impl Into<String>, filter_type: impl Into<FilterType>) -> Self {
        Self {
            filter_name: filter_name.into(),
            filter_type: filter_type.into(),
        }
    }
}
