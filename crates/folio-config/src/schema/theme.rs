//! Theme and palette configuration types.

use serde::{Deserialize, Serialize};

/// Page palette. Values are hex colors injected into the page CSS as
/// custom properties after sanitization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub text_muted: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "folio-dark".into(),
            primary: "#ff9933".into(),
            secondary: "#138808".into(),
            background: "#050508".into(),
            text: "#e8e4dc".into(),
            text_muted: "#8a8a8a".into(),
        }
    }
}
