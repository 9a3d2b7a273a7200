//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the shipped site.

mod background;
mod hud;
mod logging;
mod starfield;
mod theme;
mod window;

pub use background::*;
pub use hud::*;
pub use logging::*;
pub use starfield::*;
pub use theme::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change; every section has defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FolioConfig {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub background: BackgroundConfig,
    pub starfield: StarfieldConfig,
    pub hud: HudConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
