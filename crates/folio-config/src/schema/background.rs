//! Backdrop layer configuration types.

use serde::{Deserialize, Serialize};

/// Backdrop display mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum BackgroundMode {
    #[default]
    Image,
    Solid,
    None,
}

/// Image backdrop settings.
///
/// The path is resolved relative to the working directory. A missing or
/// undecodable file falls back to the solid color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageBackgroundConfig {
    pub path: String,
    pub opacity: f64,
}

impl Default for ImageBackgroundConfig {
    fn default() -> Self {
        Self {
            path: "assets/background.png".into(),
            opacity: 0.2,
        }
    }
}

/// Backdrop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub mode: BackgroundMode,
    pub solid_color: String,
    pub image: ImageBackgroundConfig,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            mode: BackgroundMode::Image,
            solid_color: "#050508".into(),
            image: ImageBackgroundConfig::default(),
        }
    }
}
