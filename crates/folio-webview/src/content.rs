//! Route resolution for the `folio://` custom protocol.
//!
//! The landing page is served at the root, bundled files under
//! `assets/`, and every other path falls through to the not-found page
//! with a 404 status. Pages are rendered once at startup and served from
//! memory; only assets touch the filesystem.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use folio_common::PageRoute;
use tracing::warn;

/// Root URL of the shell, as seen by page links.
pub const HOME_URL: &str = "folio://localhost/";

/// A resolved response for a protocol request.
pub struct Resolved<'a> {
    pub mime: Cow<'a, str>,
    pub data: Cow<'a, [u8]>,
    pub status: u16,
    pub route: PageRoute,
}

/// Serves the two pages and bundled assets.
pub struct ContentRoutes {
    /// Base directory for `assets/*` requests.
    assets_dir: PathBuf,
    landing_html: String,
    not_found_html: String,
}

impl ContentRoutes {
    pub fn new(
        assets_dir: impl Into<PathBuf>,
        landing_html: String,
        not_found_html: String,
    ) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            landing_html,
            not_found_html,
        }
    }

    /// Resolve a request path to a response.
    ///
    /// `""`, `"/"`, and `"index.html"` serve the landing page. `assets/*`
    /// serves bundled files. Anything else is the catch-all: the
    /// not-found page with a 404 status.
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        let clean = path.trim_start_matches('/');
        let clean = clean.split(&['?', '#'][..]).next().unwrap_or("");

        match clean {
            "" | "index.html" => Resolved {
                mime: Cow::Borrowed("text/html"),
                data: Cow::Borrowed(self.landing_html.as_bytes()),
                status: 200,
                route: PageRoute::Landing,
            },
            p if p.starts_with("assets/") => match self.resolve_asset(p) {
                Some((mime, data)) => Resolved {
                    mime: Cow::Borrowed(mime),
                    data: Cow::Owned(data),
                    status: 200,
                    route: PageRoute::Landing,
                },
                None => {
                    // A missing image degrades to a blank area page-side;
                    // plain 404, not the error page.
                    warn!(path = %p, "asset not found");
                    Resolved {
                        mime: Cow::Borrowed("text/plain"),
                        data: Cow::Borrowed(b"Not Found"),
                        status: 404,
                        route: PageRoute::NotFound,
                    }
                }
            },
            _ => Resolved {
                mime: Cow::Borrowed("text/html"),
                data: Cow::Borrowed(self.not_found_html.as_bytes()),
                status: 404,
                route: PageRoute::NotFound,
            },
        }
    }

    /// Resolve an `assets/...` path against the assets directory.
    ///
    /// Canonicalizes both sides to block directory traversal, including
    /// through symlinks.
    fn resolve_asset(&self, path: &str) -> Option<(&'static str, Vec<u8>)> {
        let relative = path.strip_prefix("assets/")?;
        let file_path = self.assets_dir.join(relative);

        let canonical_base = std::fs::canonicalize(&self.assets_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        Some((mime_from_extension(&file_path), data))
    }

    /// The assets base directory.
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

// =============================================================================
// TESTS
// =============================================================================
