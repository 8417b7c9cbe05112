//! # trustgate-heuristics
//!
//! Pure heuristic evaluators for the TRUSTGATE engine.
//!
//! Each evaluator maps a snapshot of signals to exactly one [`Verdict`]
//! carrying a machine-readable reason code. Evaluators never fail: an
//! unavailable signal cannot satisfy a positive branch, so it only ever
//! contributes to a "not matched" outcome for its own sub-check.
//!
//! | evaluator | positive when |
//! |---|---|
//! | [`emulator::evaluate`] | any battery, build, pipe, or driver marker fires |
//! | [`settings::developer_mode`] | developer options setting is non-zero |
//! | [`settings::usb_debugging`] | wired debugging setting is non-zero |
//! | [`carrier::evaluate`] | SIM ready and operator name matches the allow list |
//!
//! [`Verdict`]: trustgate_contracts::verdict::Verdict

pub mod carrier;
pub mod emulator;
pub mod settings;
pub mod signals;

pub use signals::{BuildSignals, CarrierSignals, EmulatorSignals};

// ── Tests ─────────────────────────────────────────────────────────────────────
