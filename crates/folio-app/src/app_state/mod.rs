//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, renderer, the page WebView, and the
//! HUD blink timer.

mod core;
mod event_handler;
mod hud;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::FolioApp;
