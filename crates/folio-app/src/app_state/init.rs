//! Window creation, renderer initialization, and webview setup.

use std::sync::Arc;
use std::time::Duration;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use folio_renderer::RenderState;
use folio_webview::content::ContentRoutes;
use folio_webview::pages::{render_landing, render_not_found};
use folio_webview::profile::BUILTIN;
use folio_webview::{WebViewConfig, WebViewManager};

use super::core::FolioApp;
use super::hud::HudTimer;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Relative path from the binary to the bundled assets (background image).
const ASSETS_DIR: &str = "assets";

// =============================================================================
// INITIALIZATION
// =============================================================================

impl FolioApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.config));
        match render_state {
            Ok(rs) => {
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        self.initialize_webview();

        tracing::info!("Window created and renderer initialized");
        true
    }

    /// Render the pages, wire up the `folio://` routes, and create the
    /// transparent page WebView covering the window.
    fn initialize_webview(&mut self) {
        let assets_dir = std::env::current_dir().unwrap_or_default().join(ASSETS_DIR);
        if !assets_dir.is_dir() {
            tracing::warn!(
                path = %assets_dir.display(),
                "Assets directory not found — the backdrop image request will 404"
            );
        }

        let routes = ContentRoutes::new(
            &assets_dir,
            render_landing(&BUILTIN, &self.config.theme, &self.config.hud),
            render_not_found(&self.config.theme),
        );

        let mut manager = WebViewManager::new();
        manager.set_content_routes(routes);

        let window = match &self.window {
            Some(w) => Arc::clone(w),
            None => return,
        };

        match manager.create(window.as_ref(), self.page_bounds(), WebViewConfig::default()) {
            Ok(handle) => {
                self.page = Some(handle);
                tracing::info!("Page WebView created");
            }
            Err(e) => {
                tracing::error!("Failed to create page WebView: {e}");
            }
        }

        self.webviews = Some(manager);
    }

    /// Start the tokio runtime and the HUD blink timer.
    pub(super) fn start_hud(&mut self) {
        if !self.config.hud.enabled {
            return;
        }

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start tokio runtime, HUD blink disabled: {e}");
                return;
            }
        };

        let period = Duration::from_secs(self.config.hud.blink_interval_secs);
        let (timer, rx) = HudTimer::start(runtime.handle(), period);

        self.hud_timer = Some(timer);
        self.hud_rx = Some(rx);
        self.tokio_runtime = Some(runtime);
        tracing::info!(
            interval_secs = self.config.hud.blink_interval_secs,
            "HUD blink timer started"
        );
    }

    /// The page WebView covers the whole window.
    pub(super) fn page_bounds(&self) -> wry::Rect {
        let (width, height) = match &self.window {
            Some(w) => {
                let size = w.inner_size();
                (size.width, size.height)
            }
            None => (self.config.window.width, self.config.window.height),
        };
        wry::Rect {
            position: wry::dpi::PhysicalPosition::new(0, 0).into(),
            size: wry::dpi::PhysicalSize::new(width, height).into(),
        }
    }

    /// Keep the WebView covering the window after a resize.
    pub(super) fn sync_page_bounds(&mut self) {
        let bounds = self.page_bounds();
        if let Some(page) = &self.page {
            if let Err(e) = page.set_bounds(bounds) {
                tracing::warn!("Failed to resize page WebView: {e}");
            }
        }
    }
}
