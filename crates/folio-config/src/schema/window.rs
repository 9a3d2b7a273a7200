//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Shell window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial logical width in pixels.
    pub width: u32,
    /// Initial logical height in pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Aditya Patil | Portfolio".into(),
            width: 1280,
            height: 800,
        }
    }
}
