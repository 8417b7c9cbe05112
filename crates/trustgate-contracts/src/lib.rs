//! # trustgate-contracts
//!
//! Shared types and contracts for the TRUSTGATE device trust engine.
//!
//! Every crate in the workspace imports from here. No evaluation logic lives
//! in this crate, only the signal model, verdicts, configuration data types,
//! and the error enum.

pub mod bridge;
pub mod capture;
pub mod carrier;
pub mod device;
pub mod error;
pub mod signal;
pub mod signature;
pub mod verdict;

#[cfg(test)]
mod tests {
    use super::*;
    use bridge::BridgeResponse;
    use capture::{CaptureEvent, CaptureState};
    use carrier::CarrierAllowList;
    use device::{BatteryStatus, SimState};
    use error::TrustGateError;
    use signal::{BuildField, Signal, SignalKind};
    use signature::{MarkerCondition, MatchKind};
    use verdict::{CheckKind, TrustDecision, TrustReport, Verdict};

    // ── Signal ───────────────────────────────────────────────────────────────

    #[test]
    fn unavailable_signal_yields_no_typed_value() {
        let s = Signal::unavailable(SignalKind::BatteryLevel);
        assert!(!s.is_available());
        assert_eq!(s.as_int(), None);
        assert_eq!(s.as_bool(), None);
        assert_eq!(s.as_text(), None);
    }

    #[test]
    fn typed_accessors_reject_mismatched_payloads() {
        let s = Signal::text(SignalKind::Build(BuildField::Model), "Pixel 8");
        assert_eq!(s.as_text(), Some("Pixel 8"));
        assert_eq!(s.as_bool(), None);

        let s = Signal::int(SignalKind::BatteryLevel, 42);
        assert_eq!(s.as_int(), Some(42));
        assert_eq!(s.as_text(), None);
    }

    // ── CarrierAllowList ─────────────────────────────────────────────────────

    #[test]
    fn carrier_match_is_case_insensitive_substring() {
        let list = CarrierAllowList::new(["vodafone", "orange"]);
        assert!(list.matches("VODAFONE EGYPT"));
        assert!(list.matches("vodafone egypt"));
        assert_eq!(list.matching_pattern("Orange EG"), Some("orange"));
        assert!(!list.matches("T-Mobile"));
    }

    #[test]
    fn carrier_patterns_are_normalized() {
        let list = CarrierAllowList::new(["  Etisalat ", "", "WE"]);
        let patterns: Vec<&str> = list.patterns().collect();
        assert_eq!(patterns, vec!["etisalat", "we"]);
    }

    #[test]
    fn carrier_list_deserializes_through_normalization() {
        let list: CarrierAllowList = serde_json::from_str(r#"["Vodafone", ""]"#).unwrap();
        assert_eq!(list.patterns().collect::<Vec<_>>(), vec!["vodafone"]);
    }

    // ── BatteryStatus / SimState ─────────────────────────────────────────────

    #[test]
    fn battery_status_clamps_level() {
        assert_eq!(BatteryStatus::new(140, false).level, 100);
        assert_eq!(BatteryStatus::new(-3, false).level, 0);
    }

    #[test]
    fn battery_status_serializes_with_bridge_field_names() {
        let json = serde_json::to_value(BatteryStatus::new(87, true)).unwrap();
        assert_eq!(json, serde_json::json!({ "level": 87, "isCharging": true }));
    }

    #[test]
    fn full_while_charging_requires_both() {
        assert!(BatteryStatus::new(100, true).is_full_while_charging());
        assert!(!BatteryStatus::new(99, true).is_full_while_charging());
        assert!(!BatteryStatus::new(100, false).is_full_while_charging());
    }

    #[test]
    fn sim_state_parses_its_own_names() {
        for state in [
            SimState::Absent,
            SimState::PinRequired,
            SimState::PukRequired,
            SimState::NetworkLocked,
            SimState::NotReady,
            SimState::Ready,
            SimState::Unknown,
        ] {
            assert_eq!(state.as_str().parse::<SimState>().unwrap(), state);
        }
        assert!("locked-ish".parse::<SimState>().is_err());
    }

    // ── MarkerCondition ──────────────────────────────────────────────────────

    #[test]
    fn marker_matching_is_case_sensitive() {
        let c = MarkerCondition::new(BuildField::Model, MatchKind::Contains, "Emulator");
        assert!(c.matches("Android Emulator x86"));
        assert!(!c.matches("android emulator x86"));

        let c = MarkerCondition::new(BuildField::Product, MatchKind::Equals, "google_sdk");
        assert!(c.matches("google_sdk"));
        assert!(!c.matches("google_sdk_x86"));

        let c = MarkerCondition::new(BuildField::Fingerprint, MatchKind::StartsWith, "generic");
        assert!(c.matches("generic_x86/sdk/generic_x86"));
        assert!(!c.matches("google/generic"));
    }

    // ── TrustReport / TrustDecision ──────────────────────────────────────────

    #[test]
    fn report_is_untrusted_only_on_emulator_verdict() {
        let report = TrustReport::new(vec![
            Verdict::new(CheckKind::Emulator, false, "no-emulator-marker"),
            Verdict::new(CheckKind::DeveloperMode, true, "setting-enabled"),
        ]);
        assert!(!report.is_untrusted());
        assert!(report.any_positive(&[CheckKind::DeveloperMode]));
        assert!(report.verdict(CheckKind::Carrier).is_none());

        let report = TrustReport::new(vec![Verdict::new(
            CheckKind::Emulator,
            true,
            "battery-full-while-charging",
        )]);
        assert!(report.is_untrusted());
    }

    #[test]
    fn carrier_verdict_flags_when_not_allowed() {
        assert!(!Verdict::new(CheckKind::Carrier, true, "operator-allowed:we").is_flagged());
        assert!(Verdict::new(CheckKind::Carrier, false, "operator-not-allowed").is_flagged());
        assert!(Verdict::new(CheckKind::UsbDebugging, true, "setting-enabled").is_flagged());
    }

    #[test]
    fn decision_exposes_report() {
        let report = TrustReport::new(vec![]);
        let id = report.report_id.clone();
        let decision = TrustDecision::Reject { report, reason: "x".to_string() };
        assert!(decision.is_reject());
        assert_eq!(decision.report().report_id, id);
    }

    #[test]
    fn check_kind_parses_kebab_names() {
        assert_eq!("usb-debugging".parse::<CheckKind>().unwrap(), CheckKind::UsbDebugging);
        assert!("root".parse::<CheckKind>().is_err());
    }

    // ── Capture ──────────────────────────────────────────────────────────────

    #[test]
    fn capture_defaults_to_visible() {
        assert_eq!(CaptureState::default(), CaptureState::Visible);
        assert_eq!(CaptureEvent::Started.target_state(), CaptureState::Hidden);
        assert_eq!(CaptureEvent::from_captured(false), CaptureEvent::Ended);
    }

    // ── Bridge / errors ──────────────────────────────────────────────────────

    #[test]
    fn not_implemented_response_serializes_without_value() {
        let json = serde_json::to_value(BridgeResponse::NotImplemented).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "not-implemented" }));
    }

    #[test]
    fn error_config_error_display() {
        let err = TrustGateError::ConfigError { reason: "missing signatures".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing signatures"));
    }

    #[test]
    fn error_adapter_unavailable_display() {
        let err = TrustGateError::AdapterUnavailable { reason: "no telephony".to_string() };
        assert!(err.to_string().contains("signal source unavailable"));
    }
}
