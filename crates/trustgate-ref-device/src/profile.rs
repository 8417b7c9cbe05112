//! Device profiles: the facts a reference host reports.
//!
//! A profile is plain data, loadable from TOML or JSON, so scenarios and the
//! demo CLI can describe a phone or an emulator without a real device.
//! Every field is optional; a missing field is an unreadable host fact.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use trustgate_contracts::{
    device::SimState,
    error::{TrustGateError, TrustGateResult},
    signal::{BuildField, SettingKey},
};

/// The status carried by the last battery-changed broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BroadcastStatus {
    Charging,
    Discharging,
    NotCharging,
    Full,
    Unknown,
}

impl BroadcastStatus {
    /// A full battery still on the charger counts as charging.
    pub fn is_charging(&self) -> bool {
        matches!(self, BroadcastStatus::Charging | BroadcastStatus::Full)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryFacts {
    pub level: Option<i64>,
    /// Answer to the direct charging query. Only read when
    /// `DeviceProfile::charging_query` is true.
    pub charging: Option<bool>,
    pub broadcast: Option<BroadcastStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelephonyFacts {
    pub sim_state: Option<SimState>,
    pub operator_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    pub name: String,

    /// Whether the host offers a direct charging query.
    pub charging_query: bool,

    pub battery: BatteryFacts,

    /// Build identifiers keyed by field name ("fingerprint", "model", ...).
    /// Missing fields are unreadable.
    pub build: BTreeMap<String, String>,

    /// Paths reported as existing. `None` means the filesystem cannot be probed.
    pub existing_paths: Option<BTreeSet<String>>,

    /// Probe the real filesystem of the machine running the host instead of
    /// `existing_paths`.
    pub probe_host_filesystem: bool,

    /// Global settings keyed by setting name ("adb_enabled", ...).
    pub settings: BTreeMap<String, i64>,

    pub telephony: TelephonyFacts,
}

impl DeviceProfile {
    pub fn build_value(&self, field: BuildField) -> Option<&str> {
        self.build.get(field.as_str()).map(String::as_str)
    }

    pub fn setting_value(&self, key: SettingKey) -> Option<i64> {
        self.settings.get(key.as_str()).copied()
    }

    /// Set a build field, returning `self` for chaining.
    pub fn with_build(mut self, field: BuildField, value: &str) -> Self {
        self.build.insert(field.as_str().to_string(), value.to_string());
        self
    }

    pub fn with_setting(mut self, key: SettingKey, value: i64) -> Self {
        self.settings.insert(key.as_str().to_string(), value);
        self
    }

    pub fn from_toml_str(s: &str) -> TrustGateResult<Self> {
        toml::from_str(s).map_err(|e| TrustGateError::ConfigError {
            reason: format!("failed to parse device profile TOML: {}", e),
        })
    }

    pub fn from_json_str(s: &str) -> TrustGateResult<Self> {
        serde_json::from_str(s).map_err(|e| TrustGateError::ConfigError {
            reason: format!("failed to parse device profile JSON: {}", e),
        })
    }

    /// Load a profile, choosing the format from the file extension
    /// (`.json`, anything else is read as TOML).
    pub fn from_file(path: &Path) -> TrustGateResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TrustGateError::ConfigError {
            reason: format!("failed to read device profile '{}': {}", path.display(), e),
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_toml_str(&contents),
        }
    }
}
