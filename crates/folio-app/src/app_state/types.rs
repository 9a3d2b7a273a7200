//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll the HUD channel and webview events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Target frame pacing for the animated background (approx 60 fps).
pub(super) const FRAME_INTERVAL: Duration = Duration::from_millis(16);
