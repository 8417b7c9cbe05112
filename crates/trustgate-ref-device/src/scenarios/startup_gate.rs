//! Scenario 1: Startup Gate
//!
//! Runs the decision pass on application start for four devices:
//!
//! Sub-case A: retail phone                     → Accept
//! Sub-case B: phone with debugging switched on → Accept, advisory warnings
//! Sub-case C: Android Studio emulator          → Reject, shell terminated
//! Sub-case D: adapter with every query missing → Accept (nothing can fire)

use std::sync::Arc;

use trustgate_contracts::{
    error::TrustGateResult,
    verdict::{TrustDecision, TrustReport},
};
use trustgate_core::TrustEngine;
use trustgate_policy::TrustConfig;

use crate::{
    host::{RecordingShell, ShellAction},
    mock_data,
    profile::DeviceProfile,
    source::ProfileSource,
};

/// Run the startup gate for one profile and return the decision with the
/// shell's recorded actions.
pub fn gate(
    config: &TrustConfig,
    profile: DeviceProfile,
) -> TrustGateResult<(TrustDecision, Vec<ShellAction>)> {
    let shell = RecordingShell::new();
    let mut engine = TrustEngine::new(config.clone(), Arc::new(ProfileSource::new(profile)));
    let decision = engine.enforce_startup(&shell)?;
    Ok((decision, shell.actions()))
}

pub fn print_report(report: &TrustReport) {
    for v in &report.verdicts {
        let mark = if v.is_flagged() { "FLAG" } else { "ok  " };
        println!("    {:<15} {}  {:<5} ({})", v.check.as_str(), mark, v.result, v.reason);
    }
}

/// Run Scenario 1: Startup Gate, four sub-cases.
pub fn run_scenario() -> TrustGateResult<()> {
    println!("=== Scenario 1: Startup Gate ===");
    println!();

    let config = TrustConfig::builtin()?;
    println!("  Signature set: {}", config.signatures.version);
    println!();

    let cases = [
        ("A", mock_data::pixel_8_pro()),
        ("B", mock_data::developer_galaxy()),
        ("C", mock_data::android_studio_emulator()),
        ("D", mock_data::stripped()),
    ];

    for (label, profile) in cases {
        println!("  Sub-case {}: {}", label, profile.name);
        let (decision, actions) = gate(&config, profile)?;
        print_report(decision.report());

        match &decision {
            TrustDecision::Accept { report } => {
                let warnings: Vec<&str> = report
                    .verdicts
                    .iter()
                    .filter(|v| v.is_flagged())
                    .map(|v| v.check.as_str())
                    .collect();
                if warnings.is_empty() {
                    println!("  Decision: ACCEPT");
                } else {
                    println!("  Decision: ACCEPT with warnings: {}", warnings.join(", "));
                }
            }
            TrustDecision::Reject { reason, .. } => {
                println!("  Decision: REJECT ({})", reason);
            }
        }
        println!("  Shell actions: {:?}", actions);
        println!();
    }

    Ok(())
}
