//! Device-level facts derived from signals: battery status and SIM state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Battery snapshot returned by the `getBatteryStatus` bridge command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryStatus {
    /// Charge level, 0 to 100.
    pub level: u8,
    pub is_charging: bool,
}

impl BatteryStatus {
    /// Build a status, clamping `level` into 0..=100.
    pub fn new(level: i64, is_charging: bool) -> Self {
        Self {
            level: level.clamp(0, 100) as u8,
            is_charging,
        }
    }

    /// Full charge while still reported as charging.
    pub fn is_full_while_charging(&self) -> bool {
        self.level == 100 && self.is_charging
    }
}

/// SIM card state as reported by the telephony adapter.
///
/// Travels inside a text `Signal` using the kebab-case names below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimState {
    Absent,
    PinRequired,
    PukRequired,
    NetworkLocked,
    NotReady,
    Ready,
    Unknown,
}

impl SimState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimState::Absent => "absent",
            SimState::PinRequired => "pin-required",
            SimState::PukRequired => "puk-required",
            SimState::NetworkLocked => "network-locked",
            SimState::NotReady => "not-ready",
            SimState::Ready => "ready",
            SimState::Unknown => "unknown",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SimState::Ready)
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absent" => Ok(SimState::Absent),
            "pin-required" => Ok(SimState::PinRequired),
            "puk-required" => Ok(SimState::PukRequired),
            "network-locked" => Ok(SimState::NetworkLocked),
            "not-ready" => Ok(SimState::NotReady),
            "ready" => Ok(SimState::Ready),
            "unknown" => Ok(SimState::Unknown),
            other => Err(format!("unrecognized SIM state '{}'", other)),
        }
    }
}
