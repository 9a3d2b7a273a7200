use std::sync::Arc;

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the page WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView covers `bounds` within the parent window and is
    /// transparent so the wgpu starfield shows through.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false);

        // Initialization script for the IPC bridge
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);

        // User agent
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // IPC handler: JS -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));

        // Page load handler
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));

        // Title change handler
        builder = Self::attach_title_handler(builder, Arc::clone(&events));

        // Navigation handler — allowlist: only the folio:// scheme
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events));

        // New-window handler — external links go to the system browser
        builder = Self::attach_new_window_handler(builder, Arc::clone(&events));

        // Custom protocol serving the pages and bundled assets
        builder = self.attach_custom_protocol(builder);

        builder = builder.with_url(&config.url);

        // Build as child WebView
        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: config.url,
            current_title: String::new(),
        })
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(routes) = &self.routes {
            let routes = Arc::clone(routes);
            builder = builder.with_custom_protocol("folio".to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = uri
                    .strip_prefix("folio://localhost/")
                    .or_else(|| uri.strip_prefix("folio://localhost"))
                    .or_else(|| uri.strip_prefix("folio:///"))
                    .or_else(|| uri.strip_prefix("folio://"))
                    .unwrap_or("");

                let resolved = routes.resolve(path);
                if resolved.status != 200 {
                    warn!(path = %path, status = resolved.status, "custom protocol: fallback response");
                }
                wry::http::Response::builder()
                    .status(resolved.status)
                    .header("Content-Type", resolved.mime.as_ref())
                    .header("Access-Control-Allow-Origin", "folio://localhost")
                    .body(std::borrow::Cow::from(resolved.data.into_owned()))
                    .unwrap_or_else(|e| {
                        warn!("custom protocol: response build failed: {e}");
                        wry::http::Response::new(std::borrow::Cow::from(Vec::new()))
                    })
            });
        }
        builder
    }
}
