//! Emulator check.
//!
//! A disjunction over four sub-checks, evaluated in order: battery
//! heuristic, build rules, emulator pipes, emulator drivers. The first
//! positive sub-check decides the verdict and names it in the reason code.
//! There is no scoring or weighting.

use tracing::debug;

use trustgate_contracts::{
    signal::{Signal, SignalKind},
    signature::{BuildRule, EmulatorSignatures},
    verdict::{CheckKind, Verdict},
};

use crate::signals::{BuildSignals, EmulatorSignals};

pub const REASON_BATTERY: &str = "battery-full-while-charging";
pub const REASON_NO_MARKER: &str = "no-emulator-marker";

/// Run the emulator check.
pub fn evaluate(signals: &EmulatorSignals, signatures: &EmulatorSignatures) -> Verdict {
    let verdict = match first_marker(signals, signatures) {
        Some(reason) => Verdict::new(CheckKind::Emulator, true, reason),
        None => Verdict::new(CheckKind::Emulator, false, REASON_NO_MARKER),
    };
    debug!(
        result = verdict.result,
        reason = %verdict.reason,
        signatures_version = %signatures.version,
        "emulator check evaluated"
    );
    verdict
}

fn first_marker(signals: &EmulatorSignals, signatures: &EmulatorSignatures) -> Option<String> {
    if signatures.battery_heuristic
        && battery_full_while_charging(&signals.battery_level, &signals.charging)
    {
        return Some(REASON_BATTERY.to_string());
    }

    if let Some(rule) = signatures
        .build_rules
        .iter()
        .find(|r| rule_matches(r, &signals.build))
    {
        return Some(format!("build-rule:{}", rule.id));
    }

    if let Some(path) = first_existing(&signals.pipes) {
        return Some(format!("emulator-pipe:{}", path));
    }

    first_existing(&signals.drivers).map(|path| format!("emulator-driver:{}", path))
}

/// Level exactly 100 and charging reported true. Either signal unavailable
/// means no match.
pub fn battery_full_while_charging(level: &Signal, charging: &Signal) -> bool {
    matches!((level.as_int(), charging.as_bool()), (Some(100), Some(true)))
}

/// True if every condition in `rule` holds against the build signals.
pub fn rule_matches(rule: &BuildRule, build: &BuildSignals) -> bool {
    !rule.conditions.is_empty()
        && rule
            .conditions
            .iter()
            .all(|c| build.get(c.field).is_some_and(|value| c.matches(value)))
}

fn first_existing(probes: &[Signal]) -> Option<&str> {
    probes.iter().find_map(|s| match (&s.kind, s.as_bool()) {
        (SignalKind::PathExists(path), Some(true)) => Some(path.as_str()),
        _ => None,
    })
}
