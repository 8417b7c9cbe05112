//! Signal snapshots the evaluators consume.
//!
//! Collectors in `trustgate-core` fill these from a live signal source. Tests
//! and reference hosts can build them directly.

use trustgate_contracts::signal::{BuildField, Signal, SignalKind};

/// Build identifiers read in one pass.
#[derive(Debug, Clone, Default)]
pub struct BuildSignals {
    signals: Vec<Signal>,
}

impl BuildSignals {
    pub fn new(signals: Vec<Signal>) -> Self {
        Self { signals }
    }

    /// The text value of `field`, or `None` if it was not read or unavailable.
    pub fn get(&self, field: BuildField) -> Option<&str> {
        self.signals
            .iter()
            .find(|s| s.kind == SignalKind::Build(field))
            .and_then(Signal::as_text)
    }
}

/// Everything the emulator check looks at.
#[derive(Debug, Clone)]
pub struct EmulatorSignals {
    pub battery_level: Signal,
    pub charging: Signal,
    pub build: BuildSignals,
    /// One `PathExists` signal per configured pipe path.
    pub pipes: Vec<Signal>,
    /// One `PathExists` signal per configured driver path.
    pub drivers: Vec<Signal>,
}

impl EmulatorSignals {
    /// A snapshot where nothing could be read.
    pub fn unavailable() -> Self {
        Self {
            battery_level: Signal::unavailable(SignalKind::BatteryLevel),
            charging: Signal::unavailable(SignalKind::Charging),
            build: BuildSignals::default(),
            pipes: Vec::new(),
            drivers: Vec::new(),
        }
    }
}

/// Telephony facts the carrier check looks at.
#[derive(Debug, Clone)]
pub struct CarrierSignals {
    pub sim_state: Signal,
    pub operator_name: Signal,
}
