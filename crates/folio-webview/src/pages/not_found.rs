//! Not-found page: 404 headline and two navigation actions.

use folio_config::schema::{HudConfig, ThemeConfig};

use crate::content::HOME_URL;
use crate::style::stylesheet;

/// Render the not-found page as a complete HTML document.
///
/// Offers two actions: an anchor back to the landing page and a button
/// invoking the platform history's back action.
pub fn render_not_found(theme: &ThemeConfig) -> String {
    // The 404 page never shows the HUD; defaults only feed the shared CSS.
    let css = stylesheet(theme, &HudConfig::default());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>404 | System Not Found</title>
<style>{css}</style>
</head>
<body>
<div class="nf">
<div class="nf-inner">
<div class="nf-code">404</div>
<h1>System Not Found</h1>
<p class="subtitle">The page you&#39;re looking for has entered hyperspace</p>
<p class="description">Oops! It seems this pathway doesn&#39;t exist in our digital realm. Let&#39;s get you back on track.</p>
<div class="nf-actions">
<a class="action primary" href="{home}">Back to Home</a>
<button class="action ghost" onclick="history.back()">Go Back</button>
</div>
<p class="status">Error Code: 404 | System Status: Offline</p>
</div>
</div>
</body>
</html>
"#,
        home = HOME_URL,
    )
}

// =============================================================================
// TESTS
// =============================================================================
