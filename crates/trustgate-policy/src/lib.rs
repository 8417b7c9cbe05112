//! # trustgate-policy
//!
//! TOML-driven trust configuration for the TRUSTGATE engine.
//!
//! ## Overview
//!
//! This crate provides [`TrustConfig`], which decides which advisory checks
//! run, which checks terminate the application, which carriers are allowed,
//! and which versioned emulator signature set the emulator check uses. A
//! default Android signature set is embedded; deployments can replace it
//! with an updated file without rebuilding.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use trustgate_policy::TrustConfig;
//!
//! let config = TrustConfig::from_file(Path::new("config/trust.toml"))?;
//! // Pass `config` to `trustgate_core::TrustEngine::new(...)`.
//! ```

pub mod config;
pub mod loader;

pub use config::{
    BridgeConfig, CarrierConfig, CheckToggles, EnforcementConfig, TrustConfig, TrustConfigFile,
    DEFAULT_CARRIER_PATTERNS,
};
pub use loader::{builtin_signatures, signatures_from_file, signatures_from_toml_str};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use trustgate_contracts::{
        error::TrustGateError,
        signal::BuildField,
        signature::MatchKind,
        verdict::CheckKind,
    };

    use crate::{builtin_signatures, TrustConfig};

    // ── 1. builtin defaults ───────────────────────────────────────────────────

    #[test]
    fn test_builtin_config_is_emulator_only_fatal() {
        let config = TrustConfig::builtin().unwrap();

        assert!(config.is_fatal(CheckKind::Emulator));
        assert!(!config.is_fatal(CheckKind::DeveloperMode));
        assert!(!config.is_fatal(CheckKind::UsbDebugging));
        assert!(!config.is_fatal(CheckKind::Carrier));
        assert_eq!(config.checks.enabled(), CheckKind::ALL.to_vec());
        assert!(config.carrier.allow.matches("Vodafone EG"));
        assert_eq!(config.bridge.channel, "trustgate/security");
    }

    #[test]
    fn test_builtin_signatures_cover_known_markers() {
        let sigs = builtin_signatures().unwrap();

        assert!(sigs.battery_heuristic);
        assert_eq!(sigs.build_rules.len(), 11);
        assert_eq!(sigs.pipe_paths, vec!["/dev/socket/qemud", "/dev/qemu_pipe"]);
        assert_eq!(
            sigs.driver_paths,
            vec!["/system/lib/kernel/goldfish.ko", "/system/lib64/kernel/goldfish.ko"]
        );

        let pair = sigs
            .build_rules
            .iter()
            .find(|r| r.id == "brand-and-device-generic")
            .expect("brand/device rule present");
        assert_eq!(pair.conditions.len(), 2);
        assert_eq!(pair.conditions[0].field, BuildField::Brand);
        assert_eq!(pair.conditions[1].field, BuildField::Device);

        let product = sigs
            .build_rules
            .iter()
            .find(|r| r.id == "product-google-sdk")
            .expect("product rule present");
        assert_eq!(product.conditions[0].match_kind, MatchKind::Equals);
    }

    // ── 2. partial configs fall back to defaults ──────────────────────────────

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml = r#"
            [checks]
            carrier = false

            [carrier]
            allow = ["Movistar"]
        "#;

        let config = TrustConfig::from_toml_str(toml).unwrap();
        assert!(!config.checks.carrier);
        assert!(config.checks.developer_mode);
        assert_eq!(config.carrier.allow.patterns().collect::<Vec<_>>(), vec!["movistar"]);
        assert_eq!(config.signatures.version, "2024.06");
    }

    #[test]
    fn test_inline_signatures_replace_builtin() {
        let toml = r#"
            [signatures]
            version = "test-1"
            battery_heuristic = false
            pipe_paths = ["/dev/vboxguest"]

            [[signatures.build_rules]]
            id = "model-bluestacks"
            conditions = [{ field = "model", match = "contains", pattern = "BlueStacks" }]
        "#;

        let config = TrustConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.signatures.version, "test-1");
        assert!(!config.signatures.battery_heuristic);
        assert_eq!(config.signatures.build_rules.len(), 1);
        assert!(config.signatures.driver_paths.is_empty());
    }

    // ── 3. enforcement validation ─────────────────────────────────────────────

    #[test]
    fn test_fatal_checks_must_include_emulator() {
        let toml = r#"
            [enforcement]
            fatal_checks = ["developer-mode"]
        "#;

        match TrustConfig::from_toml_str(toml) {
            Err(TrustGateError::ConfigError { reason }) => {
                assert!(reason.contains("emulator"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_fatal_check_must_be_enabled() {
        let toml = r#"
            [checks]
            usb_debugging = false

            [enforcement]
            fatal_checks = ["emulator", "usb-debugging"]
        "#;

        match TrustConfig::from_toml_str(toml) {
            Err(TrustGateError::ConfigError { reason }) => {
                assert!(reason.contains("usb-debugging"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_promoting_an_advisory_check() {
        let toml = r#"
            [enforcement]
            fatal_checks = ["emulator", "usb-debugging"]
        "#;

        let config = TrustConfig::from_toml_str(toml).unwrap();
        assert!(config.is_fatal(CheckKind::UsbDebugging));
    }

    // ── 4. signature validation ───────────────────────────────────────────────

    #[test]
    fn test_empty_build_rule_rejected() {
        let toml = r#"
            [signatures]
            version = "bad"

            [[signatures.build_rules]]
            id = "matches-everything"
            conditions = []
        "#;

        match TrustConfig::from_toml_str(toml) {
            Err(TrustGateError::ConfigError { reason }) => {
                assert!(reason.contains("matches-everything"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_inline_and_file_signatures_conflict() {
        let toml = r#"
            signatures_file = "sigs.toml"

            [signatures]
            version = "x"
        "#;

        assert!(matches!(
            TrustConfig::from_toml_str(toml),
            Err(TrustGateError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_missing_signature_file() {
        let toml = r#"
            signatures_file = "/nonexistent/trustgate/sigs.toml"
        "#;

        match TrustConfig::from_toml_str(toml) {
            Err(TrustGateError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read signature file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 5. TOML parse error ───────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        match TrustConfig::from_toml_str(bad_toml) {
            Err(TrustGateError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse trust config TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
