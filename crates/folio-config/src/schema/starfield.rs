//! Starfield configuration types.

use serde::{Deserialize, Serialize};

/// Animated particle-sphere background settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub enabled: bool,
    /// Number of star particles sampled inside the sphere.
    pub points: u32,
    /// Sphere radius in world units.
    pub radius: f64,
    /// Star tint color.
    pub color: String,
    /// Billboard half-extent in world units.
    pub point_size: f64,
    /// Star opacity (0.0-1.0).
    pub opacity: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            points: 5000,
            radius: 1.5,
            color: "#ff9933".into(),
            point_size: 0.002,
            opacity: 1.0,
        }
    }
}
