//! Raw host facts as read by a signal source.
//!
//! A `Signal` is created fresh on every query and is never cached. When the
//! adapter cannot read a fact (permission denied, service missing, API not
//! present on this platform version) it returns an unavailable signal, and
//! every evaluator treats that as "not matched".

use serde::{Deserialize, Serialize};

/// Build identifiers exposed by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildField {
    Fingerprint,
    Model,
    Manufacturer,
    Brand,
    Device,
    Hardware,
    Product,
}

impl BuildField {
    pub const ALL: [BuildField; 7] = [
        BuildField::Fingerprint,
        BuildField::Model,
        BuildField::Manufacturer,
        BuildField::Brand,
        BuildField::Device,
        BuildField::Hardware,
        BuildField::Product,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildField::Fingerprint => "fingerprint",
            BuildField::Model => "model",
            BuildField::Manufacturer => "manufacturer",
            BuildField::Brand => "brand",
            BuildField::Device => "device",
            BuildField::Hardware => "hardware",
            BuildField::Product => "product",
        }
    }
}

/// Global integer settings the debug checks read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingKey {
    /// Developer options master switch.
    DevelopmentSettingsEnabled,
    /// Wired debug bridge switch.
    AdbEnabled,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::DevelopmentSettingsEnabled => "development_settings_enabled",
            SettingKey::AdbEnabled => "adb_enabled",
        }
    }
}

/// Optional host features a signal source may or may not provide.
///
/// Collectors probe for these instead of branching on a platform version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostCapability {
    /// A direct "is the battery charging" query.
    ChargingQuery,
}

/// What a signal describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalKind {
    BatteryLevel,
    Charging,
    Build(BuildField),
    PathExists(String),
    GlobalSetting(SettingKey),
    SimState,
    NetworkOperatorName,
}

/// The payload of an available signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// A single raw fact read from the host, possibly unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    /// `None` means the adapter could not read the fact.
    pub value: Option<SignalValue>,
}

impl Signal {
    pub fn bool(kind: SignalKind, value: bool) -> Self {
        Self { kind, value: Some(SignalValue::Bool(value)) }
    }

    pub fn int(kind: SignalKind, value: i64) -> Self {
        Self { kind, value: Some(SignalValue::Int(value)) }
    }

    pub fn text(kind: SignalKind, value: impl Into<String>) -> Self {
        Self { kind, value: Some(SignalValue::Text(value.into())) }
    }

    pub fn unavailable(kind: SignalKind) -> Self {
        Self { kind, value: None }
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }

    /// The boolean payload, or `None` if unavailable or of another type.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Some(SignalValue::Bool(b)) => Some(b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            Some(SignalValue::Int(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Some(SignalValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}
