//! Event polling: HUD flips and webview events, plus frame scheduling.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use folio_common::events::Event;
use folio_common::PageRoute;
use folio_webview::{PageLoadState, WebViewEvent};

use super::core::FolioApp;
use super::types::{FRAME_INTERVAL, POLL_INTERVAL};

impl FolioApp {
    /// Run polling and schedule the next wake-up.
    ///
    /// The starfield animates continuously, so a redraw is requested on
    /// every pass; the control flow waits at frame cadence in between.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_hud();
            self.poll_webview_events();
        }

        self.request_redraw();
        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            now + FRAME_INTERVAL,
        ));
    }

    /// Apply pending HUD visibility flips to the page.
    fn poll_hud(&mut self) {
        let Some(rx) = &mut self.hud_rx else { return };

        let mut latest = None;
        while let Ok(visible) = rx.try_recv() {
            latest = Some(visible);
        }

        if let Some(visible) = latest {
            if let Some(page) = &self.page {
                if let Err(e) = page.set_hud_visible(visible) {
                    tracing::warn!("Failed to push HUD visibility: {e}");
                }
            }
            self.event_bus.publish(Event::HudToggled { visible });
        }
    }

    /// Drain webview events: route external links to the system browser,
    /// track titles, log page loads.
    fn poll_webview_events(&mut self) {
        let Some(manager) = &self.webviews else { return };

        for event in manager.drain_events() {
            match event {
                WebViewEvent::NewWindowRequested { url } => {
                    match folio_platform::browser::open_external(&url) {
                        Ok(()) => {
                            self.event_bus.publish(Event::ExternalLinkOpened { url });
                        }
                        Err(e) => {
                            // A link that fails to open is a no-op, not an error page.
                            tracing::warn!(url = %url, "external link not opened: {e}");
                        }
                    }
                }

                WebViewEvent::NavigationBlocked { url } => {
                    self.event_bus.publish(Event::NavigationBlocked { url });
                }

                WebViewEvent::NavigationRequested { url } => {
                    tracing::debug!(url = %url, "in-view navigation");
                }

                WebViewEvent::PageLoad { state, url } => {
                    if state == PageLoadState::Finished {
                        let route = route_for_url(&url);
                        tracing::info!(url = %url, %route, "page loaded");
                        self.event_bus.publish(Event::PageLoaded(route));
                    }
                }

                WebViewEvent::TitleChanged { title } => {
                    if let Some(page) = &mut self.page {
                        page.set_title(title);
                    }
                }

                WebViewEvent::IpcMessage { body } => {
                    tracing::debug!(body_len = body.len(), "IPC message from page");
                }
            }
        }
    }
}

/// Which page a loaded URL corresponds to.
fn route_for_url(url: &str) -> PageRoute {
    let path = url
        .trim_start_matches("folio://localhost")
        .trim_start_matches("http://folio.localhost")
        .trim_start_matches('/');
    match path {
        "" | "index.html" => PageRoute::Landing,
        _ => PageRoute::NotFound,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_urls_map_to_landing() {
        assert_eq!(route_for_url("folio://localhost/"), PageRoute::Landing);
        assert_eq!(
            route_for_url("folio://localhost/index.html"),
            PageRoute::Landing
        );
        assert_eq!(
            route_for_url("http://folio.localhost/index.html"),
            PageRoute::Landing
        );
    }

    #[test]
    fn unknown_urls_map_to_not_found() {
        assert_eq!(
            route_for_url("folio://localhost/no/such/page"),
            PageRoute::NotFound
        );
        assert_eq!(route_for_url("about:blank"), PageRoute::NotFound);
    }
}
