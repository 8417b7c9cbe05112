//! Error types for the TRUSTGATE engine.
//!
//! Only construction and enforcement can fail. Signal queries and evaluators
//! never return errors: an unreadable host fact is an unavailable `Signal`,
//! and an unknown bridge command is a `BridgeResponse::NotImplemented`.

use thiserror::Error;

/// The unified error type for the TRUSTGATE crates.
#[derive(Debug, Error)]
pub enum TrustGateError {
    /// A trust configuration or signature file is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The host adapter could not be constructed, so no evaluation pass can run.
    ///
    /// No `TrustReport` is produced when this is returned.
    #[error("signal source unavailable: {reason}")]
    AdapterUnavailable { reason: String },

    /// The shell could not carry out an enforcement action.
    #[error("enforcement failed: {reason}")]
    EnforcementFailed { reason: String },
}

/// Convenience alias used throughout the TRUSTGATE crates.
pub type TrustGateResult<T> = Result<T, TrustGateError>;
