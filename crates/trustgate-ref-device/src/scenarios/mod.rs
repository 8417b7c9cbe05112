//! Reference host scenarios.
//!
//! Each scenario wires real TRUSTGATE components (config, engine, monitor,
//! bridge) to fixture device profiles and recording host stand-ins, and
//! demonstrates one enforcement pattern.

pub mod capture_session;
pub mod command_bridge;
pub mod startup_gate;
