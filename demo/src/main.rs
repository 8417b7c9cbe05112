//! TRUSTGATE Device Trust Engine: Demo CLI
//!
//! Runs the reference host scenarios, or evaluates a single device profile
//! against a trust configuration.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- startup-gate
//!   cargo run -p demo -- capture-session
//!   cargo run -p demo -- command-bridge
//!   cargo run -p demo -- profiles
//!   cargo run -p demo -- evaluate --profile pixel-8-pro
//!   cargo run -p demo -- evaluate --profile phone.toml --config config/trust.toml
//!   cargo run -p demo -- call isEmulator --profile genymotion

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trustgate_contracts::error::{TrustGateError, TrustGateResult};
use trustgate_core::{traits::SignalSource, TrustEngine};
use trustgate_policy::TrustConfig;
use trustgate_ref_device::{
    mock_data,
    profile::DeviceProfile,
    scenarios::{capture_session, command_bridge, startup_gate},
    source::ProfileSource,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// TRUSTGATE device trust evaluation demo.
///
/// Each subcommand runs a reference scenario or evaluates one device profile,
/// demonstrating the startup gate, capture monitor, and command bridge.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "TRUSTGATE device trust engine demo",
    long_about = "Runs TRUSTGATE reference scenarios showing emulator rejection,\n\
                  advisory device checks, capture-state hiding, and the command bridge."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three reference scenarios in sequence.
    RunAll,
    /// Scenario 1: Startup Gate (accept, advisory warnings, emulator reject).
    StartupGate,
    /// Scenario 2: Capture Session (view hidden while the screen is captured).
    CaptureSession,
    /// Scenario 3: Command Bridge (on-demand verdicts by command name).
    CommandBridge,
    /// List the built-in device profiles.
    Profiles,
    /// Run the decision pass for one device profile and print the report.
    Evaluate {
        /// Built-in profile name, or a path to a .toml / .json profile.
        #[arg(long)]
        profile: String,
        /// Trust configuration file. Defaults to the built-in configuration.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Send one command to the bridge for a device profile.
    Call {
        /// Command name, e.g. isEmulator or getBatteryStatus.
        method: String,
        /// Built-in profile name, or a path to a .toml / .json profile.
        #[arg(long)]
        profile: String,
        /// Trust configuration file. Defaults to the built-in configuration.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::StartupGate => startup_gate::run_scenario(),
        Command::CaptureSession => capture_session::run_scenario(),
        Command::CommandBridge => command_bridge::run_scenario(),
        Command::Profiles => {
            list_profiles();
            Ok(())
        }
        Command::Evaluate { profile, config } => evaluate(&profile, config.as_deref()),
        Command::Call { method, profile, config } => call(&method, &profile, config.as_deref()),
    };

    match result {
        Ok(()) => {
            println!("Done.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

fn run_all() -> TrustGateResult<()> {
    startup_gate::run_scenario()?;
    capture_session::run_scenario()?;
    command_bridge::run_scenario()?;
    Ok(())
}

fn list_profiles() {
    println!("Built-in device profiles:");
    for profile in mock_data::all() {
        let model = profile.build.get("model").map(String::as_str).unwrap_or("-");
        println!("  {:<26} model={}", profile.name, model);
    }
    println!();
}

fn load_config(path: Option<&Path>) -> TrustGateResult<TrustConfig> {
    match path {
        Some(p) => TrustConfig::from_file(p),
        None => TrustConfig::builtin(),
    }
}

/// A built-in profile name wins over a file of the same name.
fn load_profile(name_or_path: &str) -> TrustGateResult<DeviceProfile> {
    match mock_data::by_name(name_or_path) {
        Some(profile) => Ok(profile),
        None => DeviceProfile::from_file(Path::new(name_or_path)),
    }
}

fn engine_for(profile: &str, config: Option<&Path>) -> TrustGateResult<TrustEngine> {
    let config = load_config(config)?;
    TrustEngine::try_new(config, || {
        let profile = load_profile(profile).map_err(|e| TrustGateError::AdapterUnavailable {
            reason: e.to_string(),
        })?;
        let source: Arc<dyn SignalSource> = Arc::new(ProfileSource::new(profile));
        Ok(source)
    })
}

fn evaluate(profile: &str, config: Option<&Path>) -> TrustGateResult<()> {
    let mut engine = engine_for(profile, config)?;
    info!(profile, "evaluating device profile");
    let decision = engine.decide();

    println!("Profile: {}", profile);
    println!("Signature set: {}", engine.config().signatures.version);
    startup_gate::print_report(decision.report());
    println!();

    let json = serde_json::to_string_pretty(&decision).map_err(|e| TrustGateError::ConfigError {
        reason: format!("failed to encode decision: {}", e),
    })?;
    println!("{}", json);
    println!();
    Ok(())
}

fn call(method: &str, profile: &str, config: Option<&Path>) -> TrustGateResult<()> {
    let engine = engine_for(profile, config)?;
    let bridge = engine.bridge();
    let request = serde_json::json!({ "channel": bridge.channel(), "method": method });
    println!("{} → {}", request, bridge.handle_json(&request.to_string()));
    println!();
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("TRUSTGATE — Device Trust Evaluation Engine");
    println!("Reference Host Demo");
    println!("==========================================");
    println!();
    println!("Startup gate per launch:");
    println!("  [1] Window marked secure before any content renders");
    println!("  [2] Emulator, developer-mode, USB-debugging, and carrier checks run");
    println!("  [3] Emulator verdict is fatal → release foreground, terminate");
    println!("  [4] Other verdicts returned as advisory warnings");
    println!("Capture monitor hides the view while the screen is recorded or mirrored.");
    println!();
}
