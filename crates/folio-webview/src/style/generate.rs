//! CSS generation from theme variables.
//!
//! Takes validated (name, value) pairs and generates the `:root` block
//! that the static page stylesheet reads its palette from.

use folio_config::schema::{HudConfig, ThemeConfig};

use super::sanitize::{validate_css_color, validate_css_font_family, validate_css_numeric};

/// The type of validation to apply to a CSS value.
#[derive(Debug, Clone, Copy)]
pub enum CssValueKind {
    /// Hex or rgb()/rgba() color.
    Color,
    /// Font family name(s).
    FontFamily,
    /// Numeric value with optional unit.
    Numeric,
}

/// Generate a CSS `:root { ... }` block from a list of variable definitions.
///
/// Each entry is `(name, value, kind)`. Values are validated according to
/// their kind; invalid values are skipped with a warning log, leaving the
/// stylesheet's `var()` fallbacks in charge.
pub fn generate_css_root(variables: &[(&str, &str, CssValueKind)]) -> String {
    let mut css = String::from(":root {\n");

    for (name, value, kind) in variables {
        let validation = match kind {
            CssValueKind::Color => validate_css_color(value),
            CssValueKind::FontFamily => validate_css_font_family(value),
            CssValueKind::Numeric => validate_css_numeric(value),
        };

        match validation {
            Ok(()) => {
                css.push_str(&format!("  {name}: {value};\n"));
            }
            Err(e) => {
                tracing::warn!(
                    name,
                    value,
                    error = %e,
                    "Theme variable rejected by sanitizer"
                );
            }
        }
    }

    css.push('}');
    css
}

/// Build the complete `<style>` body for a page: themed `:root` variables
/// followed by the static page rules.
pub fn stylesheet(theme: &ThemeConfig, hud: &HudConfig) -> String {
    let hud_opacity = format!("{}", hud.shown_opacity);
    let variables: Vec<(&str, &str, CssValueKind)> = vec![
        ("--color-primary", theme.primary.as_str(), CssValueKind::Color),
        ("--color-secondary", theme.secondary.as_str(), CssValueKind::Color),
        ("--color-bg", theme.background.as_str(), CssValueKind::Color),
        ("--color-text", theme.text.as_str(), CssValueKind::Color),
        ("--color-text-muted", theme.text_muted.as_str(), CssValueKind::Color),
        ("--hud-opacity", hud_opacity.as_str(), CssValueKind::Numeric),
        (
            "--font-tech",
            "'Courier New', Menlo, monospace",
            CssValueKind::FontFamily,
        ),
    ];

    format!("{}\n{}", generate_css_root(&variables), PAGE_CSS)
}

/// Static page rules. The wgpu starfield shows through the transparent
/// body; every panel sits above it.
const PAGE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
  background: transparent;
  color: var(--color-text, #e8e4dc);
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  min-height: 100vh;
  overflow-x: hidden;
}

main {
  position: relative;
  max-width: 1100px;
  margin: 0 auto;
  padding: 80px 16px;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 48px;
}

.avatar-wrap { position: relative; width: 224px; height: 224px; }
.avatar {
  width: 100%;
  height: 100%;
  border-radius: 50%;
  object-fit: cover;
  border: 1px solid var(--color-primary, #ff9933);
}
.orbit-ring {
  position: absolute;
  border-radius: 50%;
  border: 1px solid var(--color-secondary, #138808);
  opacity: 0.3;
  animation: spin 10s linear infinite;
}
.orbit-ring.outer {
  inset: -25%;
  border-color: var(--color-primary, #ff9933);
  opacity: 0.2;
  animation: spin 15s linear infinite reverse;
}
.orbit-ring.inner { inset: -10%; }
@keyframes spin { to { transform: rotate(360deg); } }

.intro { text-align: center; max-width: 760px; }
.intro h1 {
  font-size: 64px;
  font-weight: 900;
  letter-spacing: -0.03em;
  background: linear-gradient(90deg, #ffffff, var(--color-primary, #ff9933), #ffffff);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}
.intro .tagline {
  color: var(--color-primary, #ff9933);
  opacity: 0.8;
  font-size: 14px;
  margin-top: 4px;
}
.intro h2 {
  font-family: var(--font-tech, monospace);
  color: var(--color-secondary, #138808);
  font-size: 22px;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  margin-top: 8px;
}
.bio {
  color: var(--color-text-muted, #8a8a8a);
  font-size: 17px;
  line-height: 1.7;
  margin-top: 24px;
}
.bio .hl { color: var(--color-primary, #ff9933); }
.bio .hl-underline {
  color: #ffffff;
  font-family: var(--font-tech, monospace);
  border-bottom: 1px solid var(--color-secondary, #138808);
}

.skills {
  border: 1px solid rgba(255, 255, 255, 0.1);
  background: rgba(255, 255, 255, 0.05);
  border-radius: 8px;
  padding: 16px;
  max-width: 760px;
  font-family: var(--font-tech, monospace);
  font-size: 12px;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}
.skills .row {
  display: grid;
  grid-template-columns: 1fr 3fr;
  gap: 16px;
  padding: 8px 0;
  border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}
.skills .row:last-child { border-bottom: none; }
.skills .row .items { color: var(--color-primary, #ff9933); }

.links {
  width: 100%;
  max-width: 760px;
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 16px;
}
.social-link {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 16px 24px;
  border: 1px solid rgba(255, 255, 255, 0.1);
  background: rgba(10, 10, 16, 0.4);
  border-radius: 12px;
  text-decoration: none;
  color: var(--color-text, #e8e4dc);
  transition: border-color 0.3s, background 0.3s, transform 0.3s;
}
.social-link:hover {
  border-color: var(--color-primary, #ff9933);
  background: rgba(10, 10, 16, 0.6);
  transform: translateY(-4px);
}
.social-link .monogram {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border-radius: 8px;
  background: rgba(255, 255, 255, 0.05);
  color: var(--color-primary, #ff9933);
  font-family: var(--font-tech, monospace);
  text-transform: uppercase;
}
.social-link .label {
  font-family: var(--font-tech, monospace);
  font-size: 17px;
  letter-spacing: 0.05em;
}

.hud {
  position: fixed;
  left: 16px;
  font-family: var(--font-tech, monospace);
  font-size: 10px;
  letter-spacing: 0.2em;
  opacity: var(--hud-opacity, 0.3);
  transition: opacity 0.5s;
  pointer-events: none;
}
.hud.hud-hidden { opacity: 0; }
#hud-top { top: 16px; color: var(--color-primary, #ff9933); }
#hud-bottom { bottom: 16px; color: var(--color-secondary, #138808); }

footer {
  margin-top: 80px;
  text-align: center;
  opacity: 0.6;
  font-size: 12px;
}
footer .motto {
  font-family: var(--font-tech, monospace);
  letter-spacing: 0.1em;
  color: var(--color-text-muted, #8a8a8a);
}
footer .nation {
  color: var(--color-primary, #ff9933);
  opacity: 0.8;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  margin-top: 6px;
}
footer .copyright { margin-top: 6px; }

/* Not-found page */
.nf {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
}
.nf-inner { max-width: 640px; padding: 48px 24px; }
.nf-code {
  font-size: 128px;
  font-weight: 900;
  letter-spacing: -0.04em;
  background: linear-gradient(90deg, var(--color-primary, #ff9933), var(--color-secondary, #138808), var(--color-primary, #ff9933));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}
.nf h1 { font-size: 40px; font-weight: 900; margin-top: 16px; }
.nf .subtitle {
  font-family: var(--font-tech, monospace);
  color: var(--color-text-muted, #8a8a8a);
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-top: 12px;
}
.nf .description {
  color: var(--color-text-muted, #8a8a8a);
  line-height: 1.7;
  margin: 32px 0 48px;
}
.nf-actions { display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; }
.action {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  padding: 16px 32px;
  font-family: var(--font-tech, monospace);
  font-weight: 600;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  border-radius: 8px;
  cursor: pointer;
  text-decoration: none;
  transition: transform 0.3s;
}
.action:hover { transform: translateY(-2px); }
.action.primary {
  background: linear-gradient(90deg, var(--color-primary, #ff9933), var(--color-secondary, #138808));
  color: #ffffff;
  border: none;
}
.action.ghost {
  background: transparent;
  color: var(--color-primary, #ff9933);
  border: 2px solid var(--color-primary, #ff9933);
  font-size: 14px;
}
.nf .status {
  font-family: var(--font-tech, monospace);
  font-size: 12px;
  color: var(--color-text-muted, #8a8a8a);
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-top: 48px;
}
"#;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_root_contains_valid_variables() {
        let vars = [
            ("--color-primary", "#ff9933", CssValueKind::Color),
            ("--hud-opacity", "0.3", CssValueKind::Numeric),
        ];
        let css = generate_css_root(&vars);
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #ff9933;"));
        assert!(css.contains("--hud-opacity: 0.3;"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn css_root_skips_invalid_values() {
        let vars = [
            ("--color-primary", "#ff9933", CssValueKind::Color),
            ("--evil", "url(http://evil)", CssValueKind::Color),
        ];
        let css = generate_css_root(&vars);
        assert!(css.contains("--color-primary"));
        assert!(!css.contains("--evil"));
        assert!(!css.contains("url("));
    }

    #[test]
    fn stylesheet_injects_theme_palette() {
        let theme = ThemeConfig::default();
        let hud = HudConfig::default();
        let css = stylesheet(&theme, &hud);
        assert!(css.contains("--color-primary: #ff9933;"));
        assert!(css.contains("--color-secondary: #138808;"));
        assert!(css.contains("--hud-opacity: 0.3;"));
        // Static rules follow the root block
        assert!(css.contains(".social-link"));
        assert!(css.contains(".hud-hidden"));
    }

    #[test]
    fn stylesheet_survives_hostile_theme_values() {
        let theme = ThemeConfig {
            primary: "</style><script>alert(1)</script>".into(),
            ..Default::default()
        };
        let hud = HudConfig::default();
        let css = stylesheet(&theme, &hud);
        assert!(!css.contains("<script>"));
        // Other variables still present
        assert!(css.contains("--color-secondary"));
    }
}
