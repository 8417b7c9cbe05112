//! Allowed network operators.

use serde::{Deserialize, Serialize};

/// A set of lowercase substring patterns identifying acceptable operators.
///
/// Membership is case-insensitive substring containment, not equality:
/// "VODAFONE EGYPT" matches the pattern "vodafone".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CarrierAllowList {
    patterns: Vec<String>,
}

impl CarrierAllowList {
    /// Build a list, lower-casing every pattern and dropping empty ones.
    ///
    /// An empty pattern would match every operator name.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    /// Return the first pattern contained in `operator_name`, if any.
    pub fn matching_pattern(&self, operator_name: &str) -> Option<&str> {
        let name = operator_name.to_lowercase();
        self.patterns
            .iter()
            .find(|p| name.contains(p.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, operator_name: &str) -> bool {
        self.matching_pattern(operator_name).is_some()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl From<Vec<String>> for CarrierAllowList {
    fn from(patterns: Vec<String>) -> Self {
        Self::new(patterns)
    }
}

impl From<CarrierAllowList> for Vec<String> {
    fn from(list: CarrierAllowList) -> Self {
        list.patterns
    }
}
