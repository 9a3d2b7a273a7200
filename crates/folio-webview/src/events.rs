//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the WebView.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// Document title changed.
    TitleChanged { title: String },
    /// An IPC message was received from JavaScript.
    IpcMessage { body: String },
    /// An in-view navigation passed the allowlist.
    NavigationRequested { url: String },
    /// An in-view navigation was blocked by the allowlist.
    NavigationBlocked { url: String },
    /// A `target="_blank"` link asked for a new browsing context.
    /// The shell forwards these to the system browser.
    NewWindowRequested { url: String },
}
