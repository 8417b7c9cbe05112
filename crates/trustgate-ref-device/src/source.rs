//! A `SignalSource` backed by a `DeviceProfile`.

use std::sync::{Mutex, PoisonError};

use tracing::trace;

use trustgate_contracts::signal::{BuildField, HostCapability, SettingKey, Signal, SignalKind};
use trustgate_core::traits::SignalSource;

use crate::profile::DeviceProfile;

/// Reports the facts of a profile. The profile can be changed between
/// queries to simulate a SIM swap or a settings change.
pub struct ProfileSource {
    profile: Mutex<DeviceProfile>,
}

impl ProfileSource {
    pub fn new(profile: DeviceProfile) -> Self {
        Self { profile: Mutex::new(profile) }
    }

    pub fn update(&self, f: impl FnOnce(&mut DeviceProfile)) {
        f(&mut self.lock());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DeviceProfile> {
        self.profile.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn opt_int(kind: SignalKind, value: Option<i64>) -> Signal {
    match value {
        Some(v) => Signal::int(kind, v),
        None => Signal::unavailable(kind),
    }
}

fn opt_bool(kind: SignalKind, value: Option<bool>) -> Signal {
    match value {
        Some(v) => Signal::bool(kind, v),
        None => Signal::unavailable(kind),
    }
}

fn opt_text(kind: SignalKind, value: Option<&str>) -> Signal {
    match value {
        Some(v) => Signal::text(kind, v),
        None => Signal::unavailable(kind),
    }
}

impl SignalSource for ProfileSource {
    fn supports(&self, capability: HostCapability) -> bool {
        match capability {
            HostCapability::ChargingQuery => self.lock().charging_query,
        }
    }

    fn battery_level(&self) -> Signal {
        opt_int(SignalKind::BatteryLevel, self.lock().battery.level)
    }

    fn charging(&self) -> Signal {
        opt_bool(SignalKind::Charging, self.lock().battery.charging)
    }

    fn charging_from_last_broadcast(&self) -> Signal {
        let status = self.lock().battery.broadcast;
        opt_bool(SignalKind::Charging, status.map(|s| s.is_charging()))
    }

    fn build_property(&self, field: BuildField) -> Signal {
        let profile = self.lock();
        opt_text(SignalKind::Build(field), profile.build_value(field))
    }

    fn path_exists(&self, path: &str) -> Signal {
        let kind = SignalKind::PathExists(path.to_string());
        let profile = self.lock();
        if profile.probe_host_filesystem {
            let exists = std::path::Path::new(path).exists();
            trace!(path, exists, "probed host filesystem");
            return Signal::bool(kind, exists);
        }
        opt_bool(kind, profile.existing_paths.as_ref().map(|paths| paths.contains(path)))
    }

    fn global_setting(&self, key: SettingKey) -> Signal {
        opt_int(SignalKind::GlobalSetting(key), self.lock().setting_value(key))
    }

    fn sim_state(&self) -> Signal {
        let state = self.lock().telephony.sim_state;
        opt_text(SignalKind::SimState, state.as_ref().map(|s| s.as_str()))
    }

    fn network_operator_name(&self) -> Signal {
        let profile = self.lock();
        opt_text(SignalKind::NetworkOperatorName, profile.telephony.operator_name.as_deref())
    }
}
