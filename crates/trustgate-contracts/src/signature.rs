//! Emulator signature data.
//!
//! Virtualization markers drift as emulators evolve, so they are data rather
//! than code. The policy crate loads them from a versioned TOML file; the
//! heuristics crate evaluates signals against them.

use serde::{Deserialize, Serialize};

use crate::signal::BuildField;

/// How a marker pattern is compared with a build field. Always case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    StartsWith,
    Contains,
    Equals,
}

/// One comparison against one build field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerCondition {
    pub field: BuildField,
    #[serde(rename = "match")]
    pub match_kind: MatchKind,
    pub pattern: String,
}

impl MarkerCondition {
    pub fn new(field: BuildField, match_kind: MatchKind, pattern: impl Into<String>) -> Self {
        Self { field, match_kind, pattern: pattern.into() }
    }

    /// Compare `value` with the pattern.
    pub fn matches(&self, value: &str) -> bool {
        match self.match_kind {
            MatchKind::StartsWith => value.starts_with(&self.pattern),
            MatchKind::Contains => value.contains(&self.pattern),
            MatchKind::Equals => value == self.pattern,
        }
    }
}

/// A named marker that fires when every condition holds.
///
/// Most rules carry one condition. The brand/device pair is the one place a
/// conjunction is needed: a generic brand alone is not enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRule {
    /// Stable identifier used in verdict reason codes.
    pub id: String,
    pub conditions: Vec<MarkerCondition>,
}

/// The full set of emulator markers the emulator check evaluates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorSignatures {
    /// Free-form version tag of the signature set, e.g. "2024.06".
    pub version: String,

    /// Treat "battery at 100 and charging" as a simulator artifact.
    #[serde(default = "default_true")]
    pub battery_heuristic: bool,

    #[serde(default)]
    pub build_rules: Vec<BuildRule>,

    /// Device pipes that only exist on emulators.
    #[serde(default)]
    pub pipe_paths: Vec<String>,

    /// Kernel driver files that only exist on emulators.
    #[serde(default)]
    pub driver_paths: Vec<String>,
}

fn default_true() -> bool {
    true
}
