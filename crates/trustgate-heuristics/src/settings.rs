//! Developer-mode and debug-bridge checks.
//!
//! Both read a global integer setting; any non-zero value means enabled.

use tracing::debug;

use trustgate_contracts::{
    signal::Signal,
    verdict::{CheckKind, Verdict},
};

pub const REASON_ENABLED: &str = "setting-enabled";
pub const REASON_DISABLED: &str = "setting-disabled";
pub const REASON_UNAVAILABLE: &str = "setting-unavailable";

/// Developer options master switch.
pub fn developer_mode(setting: &Signal) -> Verdict {
    setting_enabled(CheckKind::DeveloperMode, setting)
}

/// Wired debugging switch.
pub fn usb_debugging(setting: &Signal) -> Verdict {
    setting_enabled(CheckKind::UsbDebugging, setting)
}

fn setting_enabled(check: CheckKind, setting: &Signal) -> Verdict {
    let verdict = match setting.as_int() {
        Some(0) => Verdict::new(check, false, REASON_DISABLED),
        Some(_) => Verdict::new(check, true, REASON_ENABLED),
        None => Verdict::new(check, false, REASON_UNAVAILABLE),
    };
    debug!(check = %check, result = verdict.result, reason = %verdict.reason, "setting check evaluated");
    verdict
}
