/// Configuration for creating the page WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Whether the WebView background should be transparent.
    /// Must stay true for the wgpu starfield to show through.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: crate::content::HOME_URL.to_string(),
            transparent: true,
            devtools: cfg!(debug_assertions),
            user_agent: Some("Folio/0.1".to_string()),
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_transparent_and_home() {
        let config = WebViewConfig::default();
        assert!(config.transparent);
        assert_eq!(config.url, "folio://localhost/");
    }

    #[test]
    fn with_url_overrides_only_the_url() {
        let config = WebViewConfig::with_url("folio://localhost/index.html");
        assert_eq!(config.url, "folio://localhost/index.html");
        assert!(config.transparent);
    }
}
