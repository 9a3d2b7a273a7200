//! FolioApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use folio_common::events::EventBus;
use folio_config::FolioConfig;
use folio_renderer::RenderState;
use folio_webview::{WebViewHandle, WebViewManager};

use super::hud::HudTimer;

/// Top-level application state.
pub struct FolioApp {
    pub(super) config: FolioConfig,
    pub(super) event_bus: EventBus,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // The page WebView layered over the wgpu surface
    pub(super) webviews: Option<WebViewManager>,
    pub(super) page: Option<WebViewHandle>,

    // HUD blink timer (owned; cancelled on drop)
    pub(super) hud_timer: Option<HudTimer>,
    pub(super) hud_rx: Option<tokio::sync::mpsc::UnboundedReceiver<bool>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Whether the app should exit
    pub(super) should_exit: bool,

    // Animation clock and poll bookkeeping
    pub(super) started_at: Instant,
    pub(super) last_poll: Instant,
}

impl FolioApp {
    pub fn new(config: FolioConfig) -> Self {
        Self {
            config,
            event_bus: EventBus::new(64),
            window: None,
            render_state: None,
            webviews: None,
            page: None,
            hud_timer: None,
            hud_rx: None,
            tokio_runtime: None,
            should_exit: false,
            started_at: Instant::now(),
            last_poll: Instant::now(),
        }
    }

    /// Seconds since app construction, for animation parameters.
    pub(super) fn elapsed_secs(&self) -> f32 {
        self.started_at.elapsed().as_secs_f32()
    }

    pub(super) fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
