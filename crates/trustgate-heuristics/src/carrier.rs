//! Carrier check.
//!
//! Fails closed: unless the SIM reports `ready`, the verdict is false no
//! matter what operator name the host returns.

use tracing::debug;

use trustgate_contracts::{
    carrier::CarrierAllowList,
    device::SimState,
    verdict::{CheckKind, Verdict},
};

use crate::signals::CarrierSignals;

pub const REASON_OPERATOR_NOT_ALLOWED: &str = "operator-not-allowed";
pub const REASON_OPERATOR_UNAVAILABLE: &str = "operator-unavailable";

/// Run the carrier check against `allow`.
pub fn evaluate(signals: &CarrierSignals, allow: &CarrierAllowList) -> Verdict {
    let verdict = decide(signals, allow);
    debug!(result = verdict.result, reason = %verdict.reason, "carrier check evaluated");
    verdict
}

fn decide(signals: &CarrierSignals, allow: &CarrierAllowList) -> Verdict {
    // An unreadable or unparseable state counts as not ready.
    let state = signals
        .sim_state
        .as_text()
        .and_then(|s| s.parse::<SimState>().ok())
        .unwrap_or(SimState::Unknown);

    if !state.is_ready() {
        return Verdict::new(CheckKind::Carrier, false, format!("sim-not-ready:{}", state));
    }

    let Some(name) = signals.operator_name.as_text() else {
        return Verdict::new(CheckKind::Carrier, false, REASON_OPERATOR_UNAVAILABLE);
    };

    match allow.matching_pattern(name) {
        Some(pattern) => Verdict::new(CheckKind::Carrier, true, format!("operator-allowed:{}", pattern)),
        None => Verdict::new(CheckKind::Carrier, false, REASON_OPERATOR_NOT_ALLOWED),
    }
}
