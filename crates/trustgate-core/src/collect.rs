//! Signal collection.
//!
//! Turns a live `SignalSource` into the snapshots the evaluators consume.
//! Capability-gated queries go through a probe first and fall back to a
//! secondary signal; nothing here branches on a platform version.

use tracing::{debug, warn};

use trustgate_contracts::{
    device::BatteryStatus,
    signal::{BuildField, HostCapability, SettingKey, Signal, SignalKind},
    signature::EmulatorSignatures,
};
use trustgate_heuristics::{BuildSignals, CarrierSignals, EmulatorSignals};

use crate::traits::SignalSource;

/// Read the charging state, preferring the direct query.
pub fn charging(source: &dyn SignalSource) -> Signal {
    if source.supports(HostCapability::ChargingQuery) {
        let direct = source.charging();
        if direct.is_available() {
            return direct;
        }
        warn!("direct charging query unavailable, falling back to last broadcast");
    } else {
        debug!("host lacks a charging query, using last broadcast");
    }
    source.charging_from_last_broadcast()
}

/// Read the battery level, clamped into 0..=100. The emulator check and the
/// bridge both read through here so they always agree on the level.
pub fn battery_level(source: &dyn SignalSource) -> Signal {
    let signal = source.battery_level();
    match signal.as_int() {
        Some(level) if !(0..=100).contains(&level) => {
            warn!(level, "battery level out of range, clamping");
            Signal::int(SignalKind::BatteryLevel, level.clamp(0, 100))
        }
        _ => signal,
    }
}

/// Battery snapshot for the bridge. Unavailable facts read as level 0 and
/// not charging.
pub fn battery_status(source: &dyn SignalSource) -> BatteryStatus {
    let level = battery_level(source).as_int().unwrap_or(0);
    let is_charging = charging(source).as_bool().unwrap_or(false);
    BatteryStatus::new(level, is_charging)
}

pub fn emulator_signals(source: &dyn SignalSource, signatures: &EmulatorSignatures) -> EmulatorSignals {
    let level = battery_level(source);
    let charging = charging(source);

    let build = BuildSignals::new(
        BuildField::ALL
            .iter()
            .map(|field| source.build_property(*field))
            .collect(),
    );

    let pipes = signatures.pipe_paths.iter().map(|p| source.path_exists(p)).collect();
    let drivers = signatures.driver_paths.iter().map(|p| source.path_exists(p)).collect();

    EmulatorSignals { battery_level: level, charging, build, pipes, drivers }
}

pub fn setting(source: &dyn SignalSource, key: SettingKey) -> Signal {
    source.global_setting(key)
}

pub fn carrier_signals(source: &dyn SignalSource) -> CarrierSignals {
    CarrierSignals {
        sim_state: source.sim_state(),
        operator_name: source.network_operator_name(),
    }
}
