//! Scenario 3: Command Bridge
//!
//! The shell asks for individual verdicts on demand, e.g. to show a warning
//! banner instead of terminating. Demonstrates:
//!
//! - every supported command, including the legacy carrier command name
//! - fresh reads per call: the SIM is pulled between two carrier queries
//! - an unknown command and a foreign channel answered with not-implemented

use std::sync::Arc;

use trustgate_contracts::{
    bridge::BridgeRequest,
    device::SimState,
    error::TrustGateResult,
};
use trustgate_core::TrustEngine;
use trustgate_policy::TrustConfig;

use crate::{mock_data, source::ProfileSource};

const METHODS: [&str; 6] = [
    "isDeveloperModeEnabled",
    "isUsbDebuggingEnabled",
    "isEmulator",
    "isCarrierAllowed",
    "isEgyptianSimPresent",
    "getBatteryStatus",
];

/// Run Scenario 3: Command Bridge.
pub fn run_scenario() -> TrustGateResult<()> {
    println!("=== Scenario 3: Command Bridge ===");
    println!();

    let config = TrustConfig::builtin()?;
    let source = Arc::new(ProfileSource::new(mock_data::developer_galaxy()));
    let engine = TrustEngine::new(config, source.clone());
    let bridge = engine.bridge();

    println!("  Device: galaxy-s23-dev   Channel: {}", bridge.channel());
    for method in METHODS {
        let request = format!(r#"{{"channel":"{}","method":"{}"}}"#, bridge.channel(), method);
        println!("  {:<24} → {}", method, bridge.handle_json(&request));
    }
    println!();

    println!("  SIM removed between calls:");
    println!("  {:<24} → {:?}", "isCarrierAllowed", bridge.call("isCarrierAllowed"));
    source.update(|p| p.telephony.sim_state = Some(SimState::Absent));
    println!("  {:<24} → {:?}", "isCarrierAllowed", bridge.call("isCarrierAllowed"));
    println!();

    println!("  Unsupported requests:");
    println!("  {:<24} → {:?}", "isRooted", bridge.call("isRooted"));
    let foreign = BridgeRequest::new("com.example/other", "isEmulator");
    println!("  {:<24} → {:?}", "isEmulator @ other", bridge.handle(&foreign));
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trustgate_contracts::bridge::BridgeResponse;

    fn bridge_for(profile: crate::profile::DeviceProfile) -> (Arc<ProfileSource>, trustgate_core::CommandBridge) {
        let source = Arc::new(ProfileSource::new(profile));
        let engine = TrustEngine::new(TrustConfig::builtin().unwrap(), source.clone());
        (source, engine.bridge())
    }

    /// Every built-in command answers with a value on the default channel.
    #[test]
    fn test_all_methods_answer() {
        let (_, bridge) = bridge_for(mock_data::developer_galaxy());
        for method in METHODS {
            assert!(!bridge.call(method).is_not_implemented(), "{method}");
        }
        assert_eq!(bridge.call("isDeveloperModeEnabled").as_bool(), Some(true));
        assert_eq!(bridge.call("isUsbDebuggingEnabled").as_bool(), Some(true));
        assert_eq!(bridge.call("isEmulator").as_bool(), Some(false));
        assert_eq!(
            bridge.call("getBatteryStatus"),
            BridgeResponse::Success(json!({ "level": 72, "isCharging": false }))
        );
    }

    /// The legacy carrier command answers exactly like the generic one and
    /// both follow a SIM change between calls.
    #[test]
    fn test_carrier_alias_reads_fresh() {
        let (source, bridge) = bridge_for(mock_data::pixel_8_pro());
        assert_eq!(bridge.call("isCarrierAllowed").as_bool(), Some(true));
        assert_eq!(bridge.call("isEgyptianSimPresent").as_bool(), Some(true));

        source.update(|p| p.telephony.sim_state = Some(SimState::PinRequired));
        assert_eq!(bridge.call("isCarrierAllowed").as_bool(), Some(false));
        assert_eq!(bridge.call("isEgyptianSimPresent").as_bool(), Some(false));
    }

    #[test]
    fn test_emulator_answers_true() {
        let (_, bridge) = bridge_for(mock_data::genymotion());
        assert_eq!(bridge.call("isEmulator").as_bool(), Some(true));
    }

    #[test]
    fn test_unsupported_requests_not_implemented() {
        let (_, bridge) = bridge_for(mock_data::pixel_8_pro());
        assert!(bridge.call("isRooted").is_not_implemented());
        assert!(bridge
            .handle(&BridgeRequest::new("com.example/other", "isEmulator"))
            .is_not_implemented());
        assert_eq!(bridge.handle_json("not json"), r#"{"status":"not-implemented"}"#);
    }

    #[test]
    fn test_run_scenario_succeeds() {
        run_scenario().unwrap();
    }
}
