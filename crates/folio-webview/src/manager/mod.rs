//! WebView lifecycle management.
//!
//! `WebViewManager` creates the single page WebView layered over the
//! wgpu window and collects its events for the main loop to consume.

use std::sync::{Arc, Mutex};

use crate::content::ContentRoutes;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Creates WebViews and owns the shared event sink.
pub struct WebViewManager {
    /// Event sink — events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Content routes for the `folio://` custom protocol.
    routes: Option<Arc<ContentRoutes>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            routes: None,
        }
    }

    /// Set the content routes served via `folio://`.
    pub fn set_content_routes(&mut self, routes: ContentRoutes) {
        self.routes = Some(Arc::new(routes));
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_events_empties_the_sink() {
        let manager = WebViewManager::new();
        manager.events.lock().unwrap().push(WebViewEvent::TitleChanged {
            title: "x".into(),
        });

        let drained = manager.drain_events();
        assert_eq!(drained.len(), 1);
        assert!(manager.drain_events().is_empty());
    }
}
