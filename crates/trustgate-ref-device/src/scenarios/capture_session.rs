//! Scenario 2: Capture Session
//!
//! Walks one foreground session through screen recording events:
//!
//! 1. Enter foreground, register the monitor (twice, to show idempotence)
//! 2. Recording starts → view hidden; recording stops → view shown
//! 3. Mirroring starts and the app goes to background mid-capture
//! 4. Re-entering foreground while still mirrored hides the view at once
//! 5. Exit foreground twice; the second exit is a no-op

use std::sync::Arc;

use trustgate_contracts::error::TrustGateResult;
use trustgate_core::CaptureMonitor;

use crate::host::{LocalCaptureHost, RecordingView};

fn show(step: &str, monitor: &CaptureMonitor, view: &RecordingView) {
    println!(
        "  {:<44} state={:?} view_hidden={}",
        step,
        monitor.state(),
        view.is_hidden()
    );
}

/// Run Scenario 2: Capture Session.
pub fn run_scenario() -> TrustGateResult<()> {
    println!("=== Scenario 2: Capture Session ===");
    println!();

    let host = Arc::new(LocalCaptureHost::new());
    let view = Arc::new(RecordingView::new());
    let mut monitor = CaptureMonitor::new(host.clone(), view.clone());

    monitor.on_foreground_enter();
    monitor.on_foreground_enter();
    show("foreground enter (registered twice)", &monitor, &view);
    println!("  subscribers: {}", host.subscriber_count());

    host.set_captured(true);
    show("screen recording started", &monitor, &view);

    host.set_captured(false);
    show("screen recording stopped", &monitor, &view);

    host.set_captured(true);
    show("mirroring started", &monitor, &view);

    monitor.on_foreground_exit();
    show("foreground exit during mirroring", &monitor, &view);

    monitor.on_foreground_enter();
    show("foreground enter, still mirrored", &monitor, &view);

    host.set_captured(false);
    show("mirroring stopped", &monitor, &view);

    monitor.on_foreground_exit();
    let second_exit = monitor.on_foreground_exit();
    show("foreground exit (twice)", &monitor, &view);
    println!("  second exit changed anything: {}", second_exit);
    println!("  subscribers: {}", host.subscriber_count());
    println!("  view visibility changes: {}", view.changes());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustgate_contracts::capture::CaptureState;

    fn session() -> (Arc<LocalCaptureHost>, Arc<RecordingView>, CaptureMonitor) {
        let host = Arc::new(LocalCaptureHost::new());
        let view = Arc::new(RecordingView::new());
        let monitor = CaptureMonitor::new(host.clone(), view.clone());
        (host, view, monitor)
    }

    /// Recording hides the view and stopping it shows the view again.
    #[test]
    fn test_recording_toggles_visibility() {
        let (host, view, mut monitor) = session();
        monitor.on_foreground_enter();

        host.set_captured(true);
        assert_eq!(monitor.state(), CaptureState::Hidden);
        assert!(view.is_hidden());

        host.set_captured(false);
        assert_eq!(monitor.state(), CaptureState::Visible);
        assert!(!view.is_hidden());
    }

    #[test]
    fn test_double_enter_registers_once() {
        let (host, _, mut monitor) = session();
        monitor.on_foreground_enter();
        monitor.on_foreground_enter();
        assert_eq!(host.subscriber_count(), 1);

        monitor.on_foreground_exit();
        assert_eq!(host.subscriber_count(), 0);
        assert!(!monitor.on_foreground_exit());
    }

    /// A capture already running at foreground entry hides the view at once.
    #[test]
    fn test_enter_while_captured_hides_immediately() {
        let (host, view, mut monitor) = session();
        host.set_captured(true);
        assert!(!view.is_hidden());

        monitor.on_foreground_enter();
        assert_eq!(monitor.state(), CaptureState::Hidden);
        assert!(view.is_hidden());
    }

    /// Events after foreground exit do not reach the view.
    #[test]
    fn test_events_after_exit_ignored() {
        let (host, view, mut monitor) = session();
        monitor.on_foreground_enter();
        monitor.on_foreground_exit();
        let changes = view.changes();

        host.set_captured(true);
        assert_eq!(view.changes(), changes);
        assert!(!view.is_hidden());
    }

    #[test]
    fn test_run_scenario_succeeds() {
        run_scenario().unwrap();
    }
}
