//! HUD overlay configuration types.

use serde::{Deserialize, Serialize};

/// Settings for the two blinking status overlays on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub enabled: bool,
    /// Seconds between visibility flips.
    pub blink_interval_secs: u64,
    /// Opacity while visible (the hidden state is always 0).
    pub shown_opacity: f64,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            blink_interval_secs: 60,
            shown_opacity: 0.3,
        }
    }
}
