//! The command bridge.
//!
//! A synchronous request/response surface for the application shell. Each
//! command re-reads its signals; nothing is cached between calls. Unknown
//! commands, foreign channels, and malformed requests all get
//! `BridgeResponse::NotImplemented`.

use std::str::FromStr;

use serde_json::{json, Value};
use tracing::{debug, warn};

use trustgate_contracts::{
    bridge::{BridgeRequest, BridgeResponse},
    verdict::CheckKind,
};

use crate::runner::CheckRunner;

const NOT_IMPLEMENTED_JSON: &str = r#"{"status":"not-implemented"}"#;

/// Commands the bridge answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeCommand {
    IsDeveloperModeEnabled,
    IsUsbDebuggingEnabled,
    IsEmulator,
    IsCarrierAllowed,
    GetBatteryStatus,
}

impl BridgeCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BridgeCommand::IsDeveloperModeEnabled => "isDeveloperModeEnabled",
            BridgeCommand::IsUsbDebuggingEnabled => "isUsbDebuggingEnabled",
            BridgeCommand::IsEmulator => "isEmulator",
            BridgeCommand::IsCarrierAllowed => "isCarrierAllowed",
            BridgeCommand::GetBatteryStatus => "getBatteryStatus",
        }
    }

    fn check(&self) -> Option<CheckKind> {
        match self {
            BridgeCommand::IsDeveloperModeEnabled => Some(CheckKind::DeveloperMode),
            BridgeCommand::IsUsbDebuggingEnabled => Some(CheckKind::UsbDebugging),
            BridgeCommand::IsEmulator => Some(CheckKind::Emulator),
            BridgeCommand::IsCarrierAllowed => Some(CheckKind::Carrier),
            BridgeCommand::GetBatteryStatus => None,
        }
    }
}

impl FromStr for BridgeCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isDeveloperModeEnabled" => Ok(BridgeCommand::IsDeveloperModeEnabled),
            "isUsbDebuggingEnabled" => Ok(BridgeCommand::IsUsbDebuggingEnabled),
            "isEmulator" => Ok(BridgeCommand::IsEmulator),
            // Shells built against the country-specific name still work.
            "isCarrierAllowed" | "isEgyptianSimPresent" => Ok(BridgeCommand::IsCarrierAllowed),
            "getBatteryStatus" => Ok(BridgeCommand::GetBatteryStatus),
            other => Err(format!("unknown bridge command '{}'", other)),
        }
    }
}

pub struct CommandBridge {
    runner: CheckRunner,
    channel: String,
}

impl CommandBridge {
    pub fn new(runner: CheckRunner) -> Self {
        let channel = runner.config().bridge.channel.clone();
        Self { runner, channel }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Answer a request addressed to a channel and method.
    pub fn handle(&self, request: &BridgeRequest) -> BridgeResponse {
        if request.channel != self.channel {
            warn!(channel = %request.channel, expected = %self.channel, "bridge request on foreign channel");
            return BridgeResponse::NotImplemented;
        }
        self.call(&request.method)
    }

    /// Answer a method call on this bridge's own channel.
    pub fn call(&self, method: &str) -> BridgeResponse {
        match method.parse::<BridgeCommand>() {
            Ok(command) => BridgeResponse::Success(self.execute(command)),
            Err(reason) => {
                warn!(method = %method, %reason, "bridge command not implemented");
                BridgeResponse::NotImplemented
            }
        }
    }

    /// Answer a JSON-encoded `BridgeRequest` with a JSON-encoded response.
    pub fn handle_json(&self, request: &str) -> String {
        let response = match serde_json::from_str::<BridgeRequest>(request) {
            Ok(req) => self.handle(&req),
            Err(e) => {
                warn!(error = %e, "malformed bridge request");
                BridgeResponse::NotImplemented
            }
        };
        serde_json::to_string(&response).unwrap_or_else(|_| NOT_IMPLEMENTED_JSON.to_string())
    }

    fn execute(&self, command: BridgeCommand) -> Value {
        let value = match command.check() {
            Some(check) => Value::Bool(self.runner.run(check).result),
            None => json!(self.runner.battery_status()),
        };
        debug!(command = command.name(), %value, "bridge command answered");
        value
    }
}
