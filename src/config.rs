//! Configuration types for refinement building.
//!
//! The [`Config`] struct controls:
//! - Which query dialect refinements are built in
//! - Whether taxonomy tokens are percent-encoded (GET transports)
//! - The filter configuration table used for type lookups
//!
//! # Example
//! ```rust
//! use refiners::{Config, FilterConfiguration, QueryDialect};
//!
//! // Use defaults (FQL, raw taxonomy tokens, empty table)
//! let config = Config::default();
//!
//! // Customize for a GET transport with a configuration table
//! let config = Config {
//!     encode_tokens: true,
//!     filters: vec![FilterConfiguration::new("owstaxIdKeywords", "taxonomy")],
//!     ..Default::default()
//! };
//! assert_eq!(config.dialect, QueryDialect::Function);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RefinerError, ValidationError};
use crate::filter::Filter;
use crate::lookup::{first_duplicate_name, lookup_configuration, FilterConfiguration};
use crate::query::QueryDialect;

/// Refinement configuration options.
///
/// All fields have sensible defaults. Use struct update syntax to override
/// specific settings:
///
/// ```rust
/// use refiners::{Config, QueryDialect};
///
/// let config = Config {
///     dialect: QueryDialect::Keyword,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Query dialect refinements are built in.
    #[serde(default)]
    pub dialect: QueryDialect,

    /// Percent-encode taxonomy tokens in FQL output.
    ///
    /// Set for GET transports; POST transports keep the raw form.
    /// Default: `false`
    #[serde(default)]
    pub encode_tokens: bool,

    /// Filter configuration table, looked up by filter name.
    #[serde(default)]
    pub filters: Vec<FilterConfiguration>,
}

impl Config {
    /// Creates a Config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Config for the keyword (KQL) dialect.
    pub fn keyword() -> Self {
        Self {
            dialect: QueryDialect::Keyword,
            ..Default::default()
        }
    }

    /// Creates a Config for the function (FQL) dialect.
    ///
    /// # Example
    /// ```rust
    /// use refiners::Config;
    ///
    /// // Refiners sent as URL parameters need transport-safe tokens
    /// let config = Config::function(true);
    /// assert!(config.encode_tokens);
    /// ```
    pub fn function(encode_tokens: bool) -> Self {
        Self {
            dialect: QueryDialect::Function,
            encode_tokens,
            ..Default::default()
        }
    }

    /// Parses a Config from JSON.
    ///
    /// Missing fields take their defaults. Call [`validate`](Self::validate)
    /// afterwards to detect an ambiguous configuration table.
    pub fn from_json(json: &str) -> Result<Self, RefinerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - a table entry has an empty `filterName`
    /// - the same `filterName` appears more than once (lookups would
    ///   silently use the first entry)
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(i) = self.filters.iter().position(|c| c.filter_name.is_empty()) {
            return Err(ValidationError::invalid_field(
                "filters",
                format!("entry at index {} has an empty filterName", i),
            ));
        }

        if let Some(name) = first_duplicate_name(self.filters.iter().map(|c| c.filter_name.as_str())) {
            warn!(filter = name, "Duplicate filter configuration");
            return Err(ValidationError::duplicate_filter(name));
        }

        Ok(())
    }

    /// Returns the table entry for `filter`, first match wins.
    pub fn configuration_for(&self, filter: &Filter) -> Option<&FilterConfiguration> {
        lookup_configuration(filter, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dialect, QueryDialect::Function);
        assert!(!config.encode_tokens);
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_keyword_config() {
        let config = Config::keyword();
        assert_eq!(config.dialect, QueryDialect::Keyword);
    }

    #[test]
    fn test_function_config() {
        let config = Config::function(true);
        assert_eq!(config.dialect, QueryDialect::Function);
        assert!(config.encode_tokens);
    }

    #[test]
    fn test_validate_success() {
        let config = Config {
            filters: vec![
                FilterConfiguration::new("Color", "string"),
                FilterConfiguration::new("Created", "date"),
            ],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_names() {
        let config = Config {
            filters: vec![
                FilterConfiguration::new("Color", "string"),
                FilterConfiguration::new("Color", "taxonomy"),
            ],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateFilter { name } if name == "Color"));
    }

    #[test]
    fn test_validate_empty_name() {
        let config = Config {
            filters: vec![FilterConfiguration::new("", "string")],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField { field, .. } if field == "filters"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "dialect": "keyword",
            "encodeTokens": true,
            "filters": [
                { "filterName": "owstaxIdKeywords", "type": "taxonomy" },
                { "filterName": "Created", "type": "date" }
            ]
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.dialect, QueryDialect::Keyword);
        assert!(config.encode_tokens);
        assert_eq!(config.filters.len(), 2);
        assert_eq!(config.filters[1].filter_type.as_str(), "date");
    }

    #[test]
    fn test_from_json_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Config::from_json(r#"{"dialect": "sql"}"#).unwrap_err();
        assert!(matches!(err, RefinerError::Json(_)));
    }

    #[test]
    fn test_configuration_for() {
        let config = Config {
            filters: vec![FilterConfiguration::new("Created", "date")],
            ..Default::default()
        };
        let filter = Filter::new("Created", vec![]);
        assert_eq!(
            config.configuration_for(&filter).map(|c| c.filter_type.as_str()),
            Some("date")
        );
        assert!(config.configuration_for(&Filter::new("Other", vec![])).is_none());
    }
}
