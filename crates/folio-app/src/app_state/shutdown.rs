//! Graceful shutdown: stop the HUD timer, destroy the webview, release GPU.

use std::time::Duration;

use folio_common::events::Event;

use super::core::FolioApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl FolioApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Drop the HUD timer (aborts the blink task; no flips after this)
    /// 2. Destroy the page WebView
    /// 3. Shut down the tokio runtime
    /// 4. Release GPU resources
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Cancel the HUD blink timer
        self.hud_timer = None;
        self.hud_rx = None;

        // 2. Destroy the page WebView
        self.page = None;
        self.webviews = None;

        // 3. Shut down the tokio runtime
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        // 4. Release GPU resources
        self.render_state = None;

        self.event_bus.publish(Event::Shutdown);
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::FolioApp;
    use folio_config::FolioConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = FolioApp::new(FolioConfig::default());

        app.shutdown();

        assert!(app.hud_timer.is_none());
        assert!(app.hud_rx.is_none());
        assert!(app.tokio_runtime.is_none());
        assert!(app.page.is_none());
        assert!(app.render_state.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = FolioApp::new(FolioConfig::default());

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(app.hud_timer.is_none());
        assert!(app.render_state.is_none());
    }

    #[test]
    fn shutdown_cancels_a_running_hud_timer() {
        let mut app = FolioApp::new(FolioConfig::default());
        app.start_hud();
        assert!(app.hud_timer.is_some());
        assert!(app.tokio_runtime.is_some());

        app.shutdown();

        assert!(app.hud_timer.is_none());
        assert!(app.tokio_runtime.is_none());
    }
}
