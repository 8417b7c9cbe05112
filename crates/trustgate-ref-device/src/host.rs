//! In-process stand-ins for the application shell and the display host.
//!
//! They record what the engine asks of them instead of touching a real
//! window, so scenarios can print and assert on enforcement behaviour.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use trustgate_contracts::{
    capture::{CaptureEvent, SubscriptionId},
    error::TrustGateResult,
};
use trustgate_core::traits::{CaptureNotifier, CaptureObserver, RootView, Shell};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One enforcement call made on the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    SecureWindow,
    ReleaseForeground,
    Terminate { reason: String },
}

/// A shell that records enforcement calls. `terminate` is recorded as an
/// action instead of exiting the process.
#[derive(Default)]
pub struct RecordingShell {
    actions: Mutex<Vec<ShellAction>>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<ShellAction> {
        lock(&self.actions).clone()
    }
}

impl Shell for RecordingShell {
    fn set_secure_window(&self) -> TrustGateResult<()> {
        lock(&self.actions).push(ShellAction::SecureWindow);
        Ok(())
    }

    fn release_foreground(&self) {
        lock(&self.actions).push(ShellAction::ReleaseForeground);
    }

    fn terminate(&self, reason: &str) {
        lock(&self.actions).push(ShellAction::Terminate { reason: reason.to_string() });
    }
}

/// A root view that remembers its visibility.
#[derive(Default)]
pub struct RecordingView {
    hidden: Mutex<bool>,
    changes: Mutex<usize>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        *lock(&self.hidden)
    }

    /// How many times the visibility was set.
    pub fn changes(&self) -> usize {
        *lock(&self.changes)
    }
}

impl RootView for RecordingView {
    fn set_hidden(&self, hidden: bool) {
        *lock(&self.hidden) = hidden;
        *lock(&self.changes) += 1;
    }
}

/// A display host that can start and stop a simulated recording.
#[derive(Default)]
pub struct LocalCaptureHost {
    observers: Mutex<Vec<(SubscriptionId, Arc<dyn CaptureObserver>)>>,
    next_id: Mutex<u64>,
    captured: Mutex<bool>,
}

impl LocalCaptureHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.observers).len()
    }

    /// Change the capture flag and notify every subscriber.
    pub fn set_captured(&self, captured: bool) {
        *lock(&self.captured) = captured;
        let event = CaptureEvent::from_captured(captured);

        // Deliver outside the lock so an observer may unsubscribe.
        let observers: Vec<Arc<dyn CaptureObserver>> =
            lock(&self.observers).iter().map(|(_, o)| Arc::clone(o)).collect();
        debug!(?event, subscribers = observers.len(), "delivering capture notification");
        for observer in observers {
            observer.on_capture_event(event);
        }
    }
}

impl CaptureNotifier for LocalCaptureHost {
    fn subscribe(&self, observer: Arc<dyn CaptureObserver>) -> SubscriptionId {
        let mut next = lock(&self.next_id);
        let id = SubscriptionId(*next);
        *next += 1;
        lock(&self.observers).push((id, observer));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        lock(&self.observers).retain(|(i, _)| *i != id);
    }

    fn is_captured(&self) -> Option<bool> {
        Some(*lock(&self.captured))
    }
}
