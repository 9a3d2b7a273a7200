//! IPC protocol between Rust and the page JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.ipc.postMessage(JSON.stringify({...}))`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to invoke
//!   JavaScript functions in the WebView context. The only message the
//!   shell currently sends is the HUD visibility flip.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    pub payload: IpcPayload,
}

/// Payload of an IPC message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into the WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    // Folio IPC bridge
    window.folio = window.folio || {};
    window.folio.ipc = {
        postMessage: function(msg) {
            window.ipc.postMessage(JSON.stringify(msg));
        },
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload || null
            }));
        },
        // Callbacks registered by page code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.folio.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// The HUD visibility message sent on every blink-timer tick.
pub fn js_set_hud_visible(visible: bool) -> String {
    js_dispatch_message("hud", &serde_json::json!({ "visible": visible }))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_message_quotes_kind_and_payload() {
        let js = js_dispatch_message("hud", &serde_json::json!({"visible": true}));
        assert_eq!(
            js,
            "window.folio.ipc._dispatch(\"hud\", {\"visible\":true});"
        );
    }

    #[test]
    fn set_hud_visible_both_states() {
        assert!(js_set_hud_visible(true).contains("{\"visible\":true}"));
        assert!(js_set_hud_visible(false).contains("{\"visible\":false}"));
    }

    #[test]
    fn init_script_installs_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.folio.ipc"));
        assert!(IPC_INIT_SCRIPT.contains("_dispatch"));
    }

    #[test]
    fn ipc_message_from_json() {
        let msg = IpcMessage::from_json(r#"{"kind":"ready","payload":null}"#).unwrap();
        assert_eq!(msg.kind, "ready");
    }

    #[test]
    fn ipc_message_from_invalid_json_is_none() {
        assert!(IpcMessage::from_json("not json").is_none());
    }

    #[test]
    fn ipc_message_json_constructor() {
        let msg = IpcMessage::json("hud", serde_json::json!({"visible": false}));
        assert_eq!(msg.kind, "hud");
        assert!(matches!(msg.payload, IpcPayload::Json(_)));
    }
}
