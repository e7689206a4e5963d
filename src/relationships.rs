// 🏷️ Relationship Catalog - allowed relationship values
//
// The set of valid relationships is host configuration, not domain
// knowledge: the original form derives it from its select options. The
// catalog therefore supports being built from whatever option list the
// host owns, with `standard()` providing the usual household choices.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The relationship options the stock form offers
const STANDARD_OPTIONS: &[&str] = &["self", "spouse", "child", "parent", "grandparent", "other"];

// ============================================================================
// RELATIONSHIP CATALOG
// ============================================================================

/// Ordered set of allowed relationship values.
///
/// Order is preserved because error messages name the options in the order
/// the host presents them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipCatalog {
    options: Vec<String>,
}

impl RelationshipCatalog {
    /// Catalog with the standard household options
    pub fn standard() -> Self {
        Self::from_options(STANDARD_OPTIONS.iter().copied())
    }

    /// Build a catalog from host-supplied options.
    ///
    /// Empty strings are dropped: selects commonly carry a placeholder
    /// option with an empty value, and that placeholder is not a valid
    /// relationship.
    pub fn from_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RelationshipCatalog {
            options: options
                .into_iter()
                .map(Into::into)
                .filter(|option| !option.is_empty())
                .collect(),
        }
    }

    /// Load a catalog from a JSON file (an array of option strings)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read relationship file: {:?}", path.as_ref()))?;

        let options: Vec<String> =
            serde_json::from_str(&content).context("Failed to parse relationship JSON")?;

        Ok(Self::from_options(options))
    }

    /// Check whether a value is an allowed relationship
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }

    /// All options, joined by ", " - used verbatim in the validation message
    pub fn join(&self) -> String {
        self.options.join(", ")
    }

    /// The options in presentation order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of options
    pub fn count(&self) -> usize {
        self.options.len()
    }
}

impl Default for RelationshipCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = RelationshipCatalog::standard();

        assert_eq!(catalog.count(), 6);
        assert!(catalog.contains("self"));
        assert!(catalog.contains("grandparent"));
        assert!(!catalog.contains("roommate"));
    }

    #[test]
    fn test_from_options_drops_placeholder() {
        let catalog = RelationshipCatalog::from_options(["", "self", "spouse"]);

        assert_eq!(catalog.count(), 2);
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_join_preserves_order() {
        let catalog = RelationshipCatalog::from_options(["self", "spouse", "child"]);

        assert_eq!(catalog.join(), "self, spouse, child");
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        // Option values are opaque host tokens, not display labels
        let catalog = RelationshipCatalog::standard();

        assert!(!catalog.contains("Self"));
    }
}
