//! Caller-supplied filter state.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Facet value meaning "do not filter on this facet".
pub const ALL: &str = "all";

/// Selection for a single facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetChoice {
    All,
    Value(String),
}

impl FacetChoice {
    pub fn is_all(&self) -> bool {
        matches!(self, FacetChoice::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            FacetChoice::All => None,
            FacetChoice::Value(v) => Some(v),
        }
    }
}

impl From<String> for FacetChoice {
    fn from(value: String) -> Self {
        if value == ALL {
            FacetChoice::All
        } else {
            FacetChoice::Value(value)
        }
    }
}

impl From<&str> for FacetChoice {
    fn from(value: &str) -> Self {
        FacetChoice::from(value.to_string())
    }
}

impl From<FacetChoice> for String {
    fn from(choice: FacetChoice) -> Self {
        match choice {
            FacetChoice::All => ALL.to_string(),
            FacetChoice::Value(v) => v,
        }
    }
}

impl fmt::Display for FacetChoice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FacetChoice::All => write!(f, "{}", ALL),
            FacetChoice::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Free-text query plus facet selections.
///
/// The query is matched as given. Trimming is left to the host, so a
/// whitespace-only query still filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub facets: BTreeMap<String, FacetChoice>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_facet(mut self, name: impl Into<String>, choice: impl Into<FacetChoice>) -> Self {
        self.facets.insert(name.into(), choice.into());
        self
    }

    /// Facets with a concrete value selected.
    pub fn active_facets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facets
            .iter()
            .filter_map(|(name, choice)| choice.value().map(|v| (name.as_str(), v)))
    }

    /// True when neither the query nor any facet narrows the input.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.facets.values().all(FacetChoice::is_all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_maps_to_all() {
        assert_eq!(FacetChoice::from("all"), FacetChoice::All);
        assert_eq!(FacetChoice::from("Active"), FacetChoice::Value("Active".into()));
    }

    #[test]
    fn test_unfiltered() {
        assert!(FilterSpec::new().is_unfiltered());
        assert!(FilterSpec::new().with_facet("status", "all").is_unfiltered());
        assert!(!FilterSpec::new().with_query(" ").is_unfiltered());
        assert!(!FilterSpec::new().with_facet("status", "active").is_unfiltered());
    }

    #[test]
    fn test_active_facets_skip_all() {
        let spec = FilterSpec::new()
            .with_facet("status", "active")
            .with_facet("priority", "all");
        let active: Vec<_> = spec.active_facets().collect();
        assert_eq!(active, vec![("status", "active")]);
    }

    #[test]
    fn test_deserialize_from_json() {
        let spec: FilterSpec =
            serde_json::from_str(r#"{"query":"design","facets":{"status":"all","type":"contract"}}"#)
                .unwrap();
        assert_eq!(spec.query, "design");
        assert_eq!(spec.facets["status"], FacetChoice::All);
        assert_eq!(spec.facets["type"], FacetChoice::Value("contract".into()));
    }
}
