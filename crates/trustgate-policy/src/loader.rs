//! Loading and validating trust configuration.
//!
//! Validation rules:
//!
//! 1. `enforcement.fatal_checks` must contain `emulator`.
//! 2. Every fatal check must also be enabled.
//! 3. Every build rule must carry at least one condition; an empty
//!    conjunction would match every device.
//! 4. An empty carrier allow list is accepted but logged, since the carrier
//!    check can then never pass.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use trustgate_contracts::{
    error::{TrustGateError, TrustGateResult},
    signature::EmulatorSignatures,
    verdict::CheckKind,
};

use crate::config::{TrustConfig, TrustConfigFile};

/// The signature set shipped with the crate.
pub const BUILTIN_SIGNATURES: &str = include_str!("../signatures/android-emulators.toml");

/// Parse a signature set from TOML and validate it.
pub fn signatures_from_toml_str(s: &str) -> TrustGateResult<EmulatorSignatures> {
    let signatures: EmulatorSignatures =
        toml::from_str(s).map_err(|e| TrustGateError::ConfigError {
            reason: format!("failed to parse signature TOML: {}", e),
        })?;
    validate_signatures(&signatures)?;
    Ok(signatures)
}

/// Read and parse a signature file.
pub fn signatures_from_file(path: &Path) -> TrustGateResult<EmulatorSignatures> {
    let contents = std::fs::read_to_string(path).map_err(|e| TrustGateError::ConfigError {
        reason: format!("failed to read signature file '{}': {}", path.display(), e),
    })?;
    signatures_from_toml_str(&contents)
}

/// The embedded Android emulator signature set.
pub fn builtin_signatures() -> TrustGateResult<EmulatorSignatures> {
    signatures_from_toml_str(BUILTIN_SIGNATURES)
}

impl TrustConfig {
    /// Default configuration: every check enabled, only the emulator check
    /// fatal, default carrier patterns, embedded signatures.
    pub fn builtin() -> TrustGateResult<Self> {
        resolve(TrustConfigFile::default(), None)
    }

    /// Parse `s` as a TOML trust configuration.
    ///
    /// A relative `signatures_file` is resolved against the working directory.
    pub fn from_toml_str(s: &str) -> TrustGateResult<Self> {
        let file = parse(s)?;
        resolve(file, None)
    }

    /// Read and parse a trust configuration file.
    ///
    /// A relative `signatures_file` is resolved against the directory
    /// containing `path`.
    pub fn from_file(path: &Path) -> TrustGateResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TrustGateError::ConfigError {
            reason: format!("failed to read trust config '{}': {}", path.display(), e),
        })?;
        let file = parse(&contents)?;
        resolve(file, path.parent())
    }
}

fn parse(s: &str) -> TrustGateResult<TrustConfigFile> {
    toml::from_str(s).map_err(|e| TrustGateError::ConfigError {
        reason: format!("failed to parse trust config TOML: {}", e),
    })
}

fn resolve(file: TrustConfigFile, base_dir: Option<&Path>) -> TrustGateResult<TrustConfig> {
    let signatures = match (file.signatures, file.signatures_file) {
        (Some(_), Some(_)) => {
            return Err(TrustGateError::ConfigError {
                reason: "set either [signatures] or signatures_file, not both".to_string(),
            })
        }
        (Some(inline), None) => {
            validate_signatures(&inline)?;
            inline
        }
        (None, Some(path)) => {
            let path = match base_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path,
            };
            signatures_from_file(&path)?
        }
        (None, None) => builtin_signatures()?,
    };

    let config = TrustConfig {
        checks: file.checks,
        enforcement: file.enforcement,
        carrier: file.carrier,
        bridge: file.bridge,
        signatures,
    };
    validate(&config)?;

    debug!(
        signatures_version = %config.signatures.version,
        build_rules = config.signatures.build_rules.len(),
        fatal_checks = ?config.enforcement.fatal_checks,
        "trust config loaded"
    );
    Ok(config)
}

fn validate(config: &TrustConfig) -> TrustGateResult<()> {
    if !config.is_fatal(CheckKind::Emulator) {
        return Err(TrustGateError::ConfigError {
            reason: "enforcement.fatal_checks must include 'emulator'".to_string(),
        });
    }

    for check in &config.enforcement.fatal_checks {
        if !config.checks.is_enabled(*check) {
            return Err(TrustGateError::ConfigError {
                reason: format!("check '{}' is fatal but not enabled", check),
            });
        }
    }

    if config.checks.carrier && config.carrier.allow.is_empty() {
        warn!("carrier check enabled with an empty allow list; it will never pass");
    }

    Ok(())
}

fn validate_signatures(signatures: &EmulatorSignatures) -> TrustGateResult<()> {
    let mut seen = HashSet::new();
    for rule in &signatures.build_rules {
        if rule.conditions.is_empty() {
            return Err(TrustGateError::ConfigError {
                reason: format!("build rule '{}' has no conditions", rule.id),
            });
        }
        if !seen.insert(rule.id.as_str()) {
            warn!(rule_id = %rule.id, "duplicate build rule id in signature set");
        }
    }
    Ok(())
}
