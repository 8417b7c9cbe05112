//! # trustgate-ref-device
//!
//! Reference host for the TRUSTGATE device trust engine.
//!
//! Stands in for a real phone with data-only device profiles and recording
//! shell, view, and display-capture stand-ins, then runs three scenarios:
//!
//! 1. **Startup Gate**: the decision pass on a retail phone, a developer
//!    phone, an emulator, and a stripped adapter.
//! 2. **Capture Session**: the view hidden and shown as screen recording
//!    starts and stops across foreground transitions.
//! 3. **Command Bridge**: on-demand verdicts by command name, including the
//!    legacy carrier command and unsupported requests.
//!
//! All device data is fictional. Nothing is read from a real device unless a
//! profile opts into probing the local filesystem.

pub mod host;
pub mod mock_data;
pub mod profile;
pub mod scenarios;
pub mod source;
