//! Running individual checks against a live signal source.
//!
//! `CheckRunner` is shared by the decision engine and the command bridge.
//! Signals are re-read on every call, so a SIM swap or a settings change is
//! visible to the next check without any cache invalidation.

use std::sync::Arc;

use trustgate_contracts::{
    device::BatteryStatus,
    signal::SettingKey,
    verdict::{CheckKind, TrustReport, Verdict},
};
use trustgate_heuristics::{carrier, emulator, settings};
use trustgate_policy::TrustConfig;

use crate::{collect, traits::SignalSource};

#[derive(Clone)]
pub struct CheckRunner {
    config: Arc<TrustConfig>,
    source: Arc<dyn SignalSource>,
}

impl CheckRunner {
    pub fn new(config: Arc<TrustConfig>, source: Arc<dyn SignalSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// Collect fresh signals and run one evaluator.
    ///
    /// Runs even when `check` is disabled in the config, so the shell can
    /// still ask for it on demand.
    pub fn run(&self, check: CheckKind) -> Verdict {
        let source = self.source.as_ref();
        match check {
            CheckKind::Emulator => {
                let signals = collect::emulator_signals(source, &self.config.signatures);
                emulator::evaluate(&signals, &self.config.signatures)
            }
            CheckKind::DeveloperMode => {
                settings::developer_mode(&collect::setting(source, SettingKey::DevelopmentSettingsEnabled))
            }
            CheckKind::UsbDebugging => {
                settings::usb_debugging(&collect::setting(source, SettingKey::AdbEnabled))
            }
            CheckKind::Carrier => {
                carrier::evaluate(&collect::carrier_signals(source), &self.config.carrier.allow)
            }
        }
    }

    /// Run every enabled check, in evaluation order, into a complete report.
    pub fn report(&self) -> TrustReport {
        let verdicts = self
            .config
            .checks
            .enabled()
            .into_iter()
            .map(|check| self.run(check))
            .collect();
        TrustReport::new(verdicts)
    }

    pub fn battery_status(&self) -> BatteryStatus {
        collect::battery_status(self.source.as_ref())
    }
}
