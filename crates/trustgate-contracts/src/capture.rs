//! Display-capture visibility state.

use serde::{Deserialize, Serialize};

/// Whether protected content is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureState {
    #[default]
    Visible,
    Hidden,
}

/// A host notification about screen recording, mirroring, or casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureEvent {
    Started,
    Ended,
}

impl CaptureEvent {
    /// The state the content must be in after this notification.
    pub fn target_state(&self) -> CaptureState {
        match self {
            CaptureEvent::Started => CaptureState::Hidden,
            CaptureEvent::Ended => CaptureState::Visible,
        }
    }

    /// Map a "display is captured" flag onto an event.
    pub fn from_captured(captured: bool) -> Self {
        if captured {
            CaptureEvent::Started
        } else {
            CaptureEvent::Ended
        }
    }
}

/// Opaque handle returned by a host notifier when an observer subscribes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);
