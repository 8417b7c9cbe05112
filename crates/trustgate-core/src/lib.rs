//! # trustgate-core
//!
//! The device trust evaluation runtime.
//!
//! This crate provides:
//! - The seam traits (`SignalSource`, `Shell`, `RootView`, `CaptureNotifier`,
//!   `CaptureObserver`) that platform adapters implement
//! - Signal collection with capability-probe fallbacks
//! - The `TrustEngine` startup gate
//! - The `CaptureMonitor` visibility relay
//! - The `CommandBridge` on-demand request surface
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trustgate_core::{TrustEngine, CaptureMonitor};
//!
//! let mut engine = TrustEngine::new(config, source);
//! let decision = engine.enforce_startup(&shell)?;
//! let bridge = engine.bridge();
//! ```

pub mod bridge;
pub mod capture;
pub mod collect;
pub mod engine;
pub mod runner;
pub mod traits;

pub use bridge::{BridgeCommand, CommandBridge};
pub use capture::CaptureMonitor;
pub use engine::{EngineState, TrustEngine};
pub use runner::CheckRunner;

// ── Tests ────────────────────────────────────────────────────────────────────
