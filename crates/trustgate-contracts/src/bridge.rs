//! Request and response types for the command bridge.
//!
//! The shell calls the bridge by command name on a single named channel.
//! Unknown names are answered with `NotImplemented`, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default channel name the bridge answers on.
pub const DEFAULT_CHANNEL: &str = "trustgate/security";

/// A single bridge call from the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRequest {
    pub channel: String,
    pub method: String,
}

impl BridgeRequest {
    pub fn new(channel: impl Into<String>, method: impl Into<String>) -> Self {
        Self { channel: channel.into(), method: method.into() }
    }
}

/// The answer to a bridge call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "kebab-case")]
pub enum BridgeResponse {
    Success(Value),
    NotImplemented,
}

impl BridgeResponse {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BridgeResponse::Success(v) => v.as_bool(),
            BridgeResponse::NotImplemented => None,
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, BridgeResponse::NotImplemented)
    }
}
