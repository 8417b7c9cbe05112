//! Seam traits between the engine and its host.
//!
//! - `SignalSource`     : platform adapter reading raw device facts
//! - `Shell`            : the application shell that carries out enforcement
//! - `RootView`         : the view whose visibility follows capture state
//! - `CaptureNotifier`  : host-side display-capture notifications
//! - `CaptureObserver`  : what the engine registers with a `CaptureNotifier`
//!
//! The engine does not care how an adapter talks to the operating system.
//! It only relies on the contracts documented here.

use std::sync::Arc;

use trustgate_contracts::{
    capture::{CaptureEvent, SubscriptionId},
    error::TrustGateResult,
    signal::{BuildField, HostCapability, SettingKey, Signal},
};

/// A platform adapter exposing typed queries over host facts.
///
/// No method may fail or panic. When a fact cannot be read (permission
/// denied, service missing, API not present) the adapter returns
/// `Signal::unavailable`. Filesystem probes are read-only existence checks.
pub trait SignalSource: Send + Sync {
    /// Whether the host offers an optional query.
    ///
    /// Collectors call this before using a capability-gated method and fall
    /// back to a secondary signal when it returns false.
    fn supports(&self, capability: HostCapability) -> bool;

    /// Battery charge level, an integer 0 to 100.
    fn battery_level(&self) -> Signal;

    /// Direct charging query. Only consulted when
    /// `supports(HostCapability::ChargingQuery)` is true.
    fn charging(&self) -> Signal;

    /// Charging state inferred from the last battery broadcast. A "full"
    /// status counts as charging.
    fn charging_from_last_broadcast(&self) -> Signal;

    /// A build identifier as text.
    fn build_property(&self, field: BuildField) -> Signal;

    /// Whether `path` exists, as a boolean signal.
    fn path_exists(&self, path: &str) -> Signal;

    /// A global integer setting.
    fn global_setting(&self, key: SettingKey) -> Signal;

    /// SIM state, text-encoded as a `SimState` name.
    fn sim_state(&self) -> Signal;

    /// The registered network operator's display name.
    fn network_operator_name(&self) -> Signal;
}

/// The application shell the engine enforces through.
pub trait Shell: Send + Sync {
    /// Block external capture of the window itself. Called before anything
    /// else at startup, ahead of any content rendering.
    fn set_secure_window(&self) -> TrustGateResult<()>;

    /// Finish the current lifecycle callback and drop foreground resources.
    fn release_foreground(&self);

    /// Terminate the process. Irreversible: production implementations call
    /// `std::process::exit` here. An implementation that returns must never
    /// render protected content again.
    fn terminate(&self, reason: &str);
}

/// The root view that hides protected content while the display is captured.
pub trait RootView: Send + Sync {
    fn set_hidden(&self, hidden: bool);
}

/// Receives display-capture notifications.
pub trait CaptureObserver: Send + Sync {
    fn on_capture_event(&self, event: CaptureEvent);
}

/// Host-side source of display-capture notifications.
///
/// Notifications are delivered on the UI thread, synchronously from the
/// host's point of view.
pub trait CaptureNotifier: Send + Sync {
    fn subscribe(&self, observer: Arc<dyn CaptureObserver>) -> SubscriptionId;

    /// Stop delivering to the observer behind `id`. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);

    /// Whether the display is captured right now, if the host can tell.
    fn is_captured(&self) -> Option<bool> {
        None
    }
}
