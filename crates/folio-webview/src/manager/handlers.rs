use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for in-view navigation.
///
/// Only the shell's own protocol may navigate the WebView. External
/// links never navigate in-view; they arrive as new-window requests and
/// are routed to the system browser instead.
/// - `folio://` — custom protocol for the two pages and bundled assets
/// - `http://folio.localhost` — WebView2 rewrites custom protocols on
///   Windows: folio://localhost/… → http://folio.localhost/…
/// - `about:blank` — default empty page
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["folio://", "http://folio.localhost", "about:blank"];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler(
        builder: WebViewBuilder<'_>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'_> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { body });
            }
        })
    }

    pub(super) fn attach_page_load_handler(
        builder: WebViewBuilder<'_>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'_> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_title_handler(
        builder: WebViewBuilder<'_>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'_> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { title });
            }
        })
    }

    pub(super) fn attach_navigation_handler(
        builder: WebViewBuilder<'_>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'_> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                if let Ok(mut evts) = events.lock() {
                    evts.push(WebViewEvent::NavigationBlocked { url });
                }
                return false;
            }

            debug!(url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationRequested { url });
            }
            true
        })
    }

    /// `target="_blank"` links land here. The request is always denied
    /// in-view; the event tells the shell to open the system browser.
    pub(super) fn attach_new_window_handler(
        builder: WebViewBuilder<'_>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'_> {
        builder.with_new_window_req_handler(move |url| {
            debug!(url = %url, "new window request intercepted");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NewWindowRequested { url });
            }
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Allowed URLs --

    #[test]
    fn allows_folio_protocol() {
        assert!(is_navigation_allowed("folio://localhost/"));
        assert!(is_navigation_allowed("folio://localhost/index.html"));
        assert!(is_navigation_allowed("folio://localhost/no/such/page"));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn allows_webview2_rewritten_custom_protocol() {
        // WebView2 on Windows rewrites folio://localhost/… → http://folio.localhost/…
        assert!(is_navigation_allowed("http://folio.localhost/index.html"));
    }

    // -- Blocked URLs --

    #[test]
    fn blocks_external_https() {
        // The social links are https but must never navigate in-view;
        // they go through the new-window path to the system browser.
        assert!(!is_navigation_allowed("https://github.com/adityapatil100"));
        assert!(!is_navigation_allowed(
            "https://linkedin.com/in/adityapatil100"
        ));
        assert!(!is_navigation_allowed("https://evil.com"));
    }

    #[test]
    fn blocks_file_protocol() {
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("file://localhost/etc/hosts"));
    }

    #[test]
    fn blocks_http_unencrypted() {
        assert!(!is_navigation_allowed("http://evil.com"));
        assert!(!is_navigation_allowed("http://localhost:8080"));
    }

    #[test]
    fn blocks_javascript_protocol() {
        assert!(!is_navigation_allowed("javascript:alert(1)"));
    }

    #[test]
    fn blocks_data_protocol() {
        assert!(!is_navigation_allowed("data:text/html,<h1>XSS</h1>"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("   "));
        assert!(!is_navigation_allowed("not-a-url"));
    }

    // -- Allowlist structure --

    #[test]
    fn allowlist_has_expected_entries() {
        assert_eq!(ALLOWED_NAV_PREFIXES.len(), 3);
        assert!(ALLOWED_NAV_PREFIXES.contains(&"folio://"));
        assert!(ALLOWED_NAV_PREFIXES.contains(&"about:blank"));
    }
}
