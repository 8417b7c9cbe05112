//! The capture-state monitor.
//!
//! A reactive relay between host capture notifications and the root view:
//!
//!   Visible ⇄ Hidden
//!
//! "Capture started" hides the view synchronously; "capture ended" shows it.
//! The monitor runs no checks and is independent of the decision engine.
//! It is registered on foreground entry and deregistered on foreground exit,
//! never tied to construction or drop, so a torn-down view receives nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use trustgate_contracts::capture::{CaptureEvent, CaptureState, SubscriptionId};

use crate::traits::{CaptureNotifier, CaptureObserver, RootView};

struct RelayState {
    capture: CaptureState,
    /// False outside a foreground session; late notifications are dropped.
    active: bool,
}

/// The observer handed to the host notifier.
pub struct CaptureRelay {
    state: Mutex<RelayState>,
    view: Arc<dyn RootView>,
}

impl CaptureRelay {
    fn new(view: Arc<dyn RootView>) -> Self {
        Self {
            state: Mutex::new(RelayState { capture: CaptureState::Visible, active: false }),
            view,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.lock().capture
    }

    fn lock(&self) -> MutexGuard<'_, RelayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a session in `initial` state, updating the view if it differs.
    fn begin_session(&self, initial: CaptureState) {
        let changed = {
            let mut state = self.lock();
            state.active = true;
            let changed = state.capture != initial;
            state.capture = initial;
            changed
        };
        if changed {
            self.view.set_hidden(initial == CaptureState::Hidden);
        }
    }

    fn end_session(&self) {
        self.lock().active = false;
    }

    /// Apply one notification. Returns true if the state changed.
    fn apply(&self, event: CaptureEvent) -> bool {
        let target = event.target_state();
        {
            let mut state = self.lock();
            if !state.active {
                debug!(?event, "capture notification outside foreground session ignored");
                return false;
            }
            if state.capture == target {
                return false;
            }
            state.capture = target;
        }

        // The lock is released before calling into the view, so the view may
        // read the state or trigger another notification. Notifications are
        // delivered on the UI thread only, so transitions cannot interleave.
        self.view.set_hidden(target == CaptureState::Hidden);
        info!(state = ?target, "capture state changed");
        true
    }
}

impl CaptureObserver for CaptureRelay {
    fn on_capture_event(&self, event: CaptureEvent) {
        self.apply(event);
    }
}

pub struct CaptureMonitor {
    notifier: Arc<dyn CaptureNotifier>,
    relay: Arc<CaptureRelay>,
    subscription: Option<SubscriptionId>,
}

impl CaptureMonitor {
    pub fn new(notifier: Arc<dyn CaptureNotifier>, view: Arc<dyn RootView>) -> Self {
        Self {
            notifier,
            relay: Arc::new(CaptureRelay::new(view)),
            subscription: None,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.relay.state()
    }

    pub fn is_registered(&self) -> bool {
        self.subscription.is_some()
    }

    /// Register with the host. Idempotent: a second call while registered
    /// does nothing and returns false.
    ///
    /// When the host can report whether the display is already captured,
    /// the session starts in the matching state, so a recording that began
    /// while in the background still hides the view.
    pub fn on_foreground_enter(&mut self) -> bool {
        if self.subscription.is_some() {
            debug!("capture monitor already registered");
            return false;
        }

        let initial = match self.notifier.is_captured() {
            Some(true) => CaptureState::Hidden,
            Some(false) => CaptureState::Visible,
            None => {
                warn!(
                    last_state = ?self.relay.state(),
                    "host cannot report capture state; starting session visible"
                );
                CaptureState::Visible
            }
        };
        self.relay.begin_session(initial);

        let observer: Arc<dyn CaptureObserver> = self.relay.clone();
        self.subscription = Some(self.notifier.subscribe(observer));
        info!(state = ?initial, "capture monitor registered");
        true
    }

    /// Deregister from the host. A no-op returning false when not registered.
    pub fn on_foreground_exit(&mut self) -> bool {
        let Some(id) = self.subscription.take() else {
            return false;
        };
        self.relay.end_session();
        self.notifier.unsubscribe(id);
        info!("capture monitor deregistered");
        true
    }

    /// Deliver a notification directly, as the host would.
    pub fn handle(&self, event: CaptureEvent) -> bool {
        self.relay.apply(event)
    }
}
