//! WebView layer for the portfolio shell.
//!
//! Wraps the `wry` crate to provide:
//! - A managed WebView child over the wgpu window
//! - Page HTML/CSS generation from the built-in profile
//! - A `folio://` custom protocol with a catch-all not-found route
//! - Navigation control (allowlist + new-window interception)
//! - Bidirectional IPC (Rust <-> JavaScript) used for HUD blinking

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod pages;
pub mod profile;
pub mod style;

pub use content::{ContentRoutes, Resolved};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use profile::Profile;
