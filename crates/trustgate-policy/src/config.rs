//! Trust configuration schema.
//!
//! A `TrustConfig` is deserialized from TOML and decides which advisory checks
//! run, which checks are fatal, which carriers are allowed, and which
//! emulator signature set the emulator check uses.
//!
//! Example:
//! ```toml
//! signatures_file = "signatures/android-emulators.toml"
//!
//! [checks]
//! developer_mode = true
//! usb_debugging = true
//! carrier = false
//!
//! [enforcement]
//! fatal_checks = ["emulator"]
//!
//! [carrier]
//! allow = ["vodafone", "orange"]
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use trustgate_contracts::{
    bridge::DEFAULT_CHANNEL, carrier::CarrierAllowList, signature::EmulatorSignatures,
    verdict::CheckKind,
};

/// Carrier patterns used when a configuration does not name its own.
pub const DEFAULT_CARRIER_PATTERNS: [&str; 4] = ["we", "orange", "etisalat", "vodafone"];

/// Switches for the advisory checks.
///
/// The emulator check has no switch: it gates startup and always runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckToggles {
    pub developer_mode: bool,
    pub usb_debugging: bool,
    pub carrier: bool,
}

impl Default for CheckToggles {
    fn default() -> Self {
        Self { developer_mode: true, usb_debugging: true, carrier: true }
    }
}

impl CheckToggles {
    pub fn is_enabled(&self, check: CheckKind) -> bool {
        match check {
            CheckKind::Emulator => true,
            CheckKind::DeveloperMode => self.developer_mode,
            CheckKind::UsbDebugging => self.usb_debugging,
            CheckKind::Carrier => self.carrier,
        }
    }

    /// Enabled checks in evaluation order.
    pub fn enabled(&self) -> Vec<CheckKind> {
        CheckKind::ALL.into_iter().filter(|c| self.is_enabled(*c)).collect()
    }
}

/// Which flagged verdicts terminate the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnforcementConfig {
    /// Must contain `emulator`. Anything else listed here is promoted from
    /// advisory to fatal.
    pub fatal_checks: Vec<CheckKind>,
}

impl Default for EnforcementConfig {
    fn default() -> Self {
        Self { fatal_checks: vec![CheckKind::Emulator] }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarrierConfig {
    pub allow: CarrierAllowList,
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self { allow: CarrierAllowList::new(DEFAULT_CARRIER_PATTERNS) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Channel name the command bridge answers on.
    pub channel: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self { channel: DEFAULT_CHANNEL.to_string() }
    }
}

/// The on-disk shape of a trust configuration.
///
/// Signatures come from exactly one of: an inline `[signatures]` table, a
/// `signatures_file` path, or (when neither is given) the embedded default set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrustConfigFile {
    #[serde(default)]
    pub checks: CheckToggles,
    #[serde(default)]
    pub enforcement: EnforcementConfig,
    #[serde(default)]
    pub carrier: CarrierConfig,
    #[serde(default)]
    pub bridge: BridgeConfig,
    pub signatures: Option<EmulatorSignatures>,
    pub signatures_file: Option<PathBuf>,
}

/// A validated, fully resolved trust configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrustConfig {
    pub checks: CheckToggles,
    pub enforcement: EnforcementConfig,
    pub carrier: CarrierConfig,
    pub bridge: BridgeConfig,
    pub signatures: EmulatorSignatures,
}

impl TrustConfig {
    /// True if a positive verdict for `check` must terminate the application.
    pub fn is_fatal(&self, check: CheckKind) -> bool {
        self.enforcement.fatal_checks.contains(&check)
    }
}
