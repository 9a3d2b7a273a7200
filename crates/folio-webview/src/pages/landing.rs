//! Landing page: profile header, skills panel, social grid, HUD overlays.

use folio_config::schema::{HudConfig, ThemeConfig};

use crate::profile::{HudAnchor, HudPanel, Profile, SocialLink};
use crate::style::stylesheet;

use super::escape_html;

/// Render the landing page as a complete HTML document.
pub fn render_landing(profile: &Profile, theme: &ThemeConfig, hud: &HudConfig) -> String {
    let mut body = String::new();

    body.push_str(&avatar_section(profile));
    body.push_str(&intro_section(profile));
    body.push_str(&skills_section(profile));
    body.push_str(&links_section(profile));
    if hud.enabled {
        for panel in &profile.hud {
            body.push_str(&hud_overlay(panel));
        }
    }
    body.push_str(&footer_section(profile));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<main>
{body}</main>
<script>
if (window.folio && window.folio.ipc) {{
  window.folio.ipc.on('hud', function (payload) {{
    var hidden = !(payload && payload.visible);
    var huds = document.querySelectorAll('.hud');
    for (var i = 0; i < huds.length; i++) {{
      huds[i].classList.toggle('hud-hidden', hidden);
    }}
  }});
}}
</script>
</body>
</html>
"#,
        title = escape_html(profile.name),
        css = stylesheet(theme, hud),
        body = body,
    )
}

fn avatar_section(profile: &Profile) -> String {
    format!(
        r#"<div class="avatar-wrap">
<img class="avatar" src="{src}" alt="Profile">
<div class="orbit-ring inner"></div>
<div class="orbit-ring outer"></div>
</div>
"#,
        src = escape_html(profile.avatar_url),
    )
}

fn intro_section(profile: &Profile) -> String {
    format!(
        r#"<div class="intro">
<h1>{name}</h1>
<p class="tagline">{tagline}</p>
<h2>{roles}</h2>
<p class="bio">{bio}</p>
</div>
"#,
        name = escape_html(profile.name),
        tagline = escape_html(profile.tagline),
        roles = escape_html(profile.roles),
        // Owner-authored markup, not escaped.
        bio = profile.bio_html,
    )
}

fn skills_section(profile: &Profile) -> String {
    let mut rows = String::new();
    for row in profile.skills {
        rows.push_str(&format!(
            r#"<div class="row"><p class="category">{category}</p><p class="items">{items}</p></div>
"#,
            category = escape_html(row.category),
            items = escape_html(row.items),
        ));
    }
    format!("<div class=\"skills\">\n{rows}</div>\n")
}

fn links_section(profile: &Profile) -> String {
    let mut links = String::new();
    for link in profile.links {
        links.push_str(&social_link(link));
    }
    format!("<div class=\"links\">\n{links}</div>\n")
}

fn social_link(link: &SocialLink) -> String {
    match link.href {
        // External links open in a new browsing context; the shell routes
        // them to the system browser.
        Some(href) => format!(
            r#"<a class="social-link" href="{href}" target="_blank" rel="noopener noreferrer"><span class="monogram">{monogram}</span><span class="label">{label}</span></a>
"#,
            href = escape_html(href),
            monogram = escape_html(link.monogram),
            label = escape_html(link.label),
        ),
        None => format!(
            r#"<a class="social-link" href="#"><span class="monogram">{monogram}</span><span class="label">{label}</span></a>
"#,
            monogram = escape_html(link.monogram),
            label = escape_html(link.label),
        ),
    }
}

fn hud_overlay(panel: &HudPanel) -> String {
    let id = match panel.anchor {
        HudAnchor::TopLeft => "hud-top",
        HudAnchor::BottomLeft => "hud-bottom",
    };
    let lines: Vec<String> = panel.lines.iter().map(|l| escape_html(l)).collect();
    format!(
        "<div id=\"{id}\" class=\"hud\">{}</div>\n",
        lines.join("<br>")
    )
}

fn footer_section(profile: &Profile) -> String {
    format!(
        r#"<footer>
<p class="motto">{motto}</p>
<p class="nation">{nation}</p>
<p class="copyright">{copyright}</p>
</footer>
"#,
        motto = escape_html(profile.footer_motto),
        nation = escape_html(profile.footer_tagline),
        copyright = escape_html(profile.copyright),
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::BUILTIN;

    fn render_default() -> String {
        render_landing(
            &BUILTIN,
            &ThemeConfig::default(),
            &HudConfig::default(),
        )
    }

    #[test]
    fn landing_contains_profile_header() {
        let html = render_default();
        assert!(html.contains("<h1>ADITYA PATIL</h1>"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("Sukoon AI"));
    }

    #[test]
    fn landing_contains_all_external_links() {
        let html = render_default();
        for href in BUILTIN.links.iter().filter_map(|l| l.href) {
            assert!(html.contains(href), "missing link {href}");
        }
    }

    #[test]
    fn external_links_open_in_new_context() {
        let html = render_default();
        let target_count = html.matches("target=\"_blank\"").count();
        assert_eq!(target_count, 6, "exactly the six external links");
        let noopener_count = html.matches("rel=\"noopener noreferrer\"").count();
        assert_eq!(noopener_count, 6);
    }

    #[test]
    fn placeholder_links_are_inert() {
        let html = render_default();
        assert_eq!(html.matches("href=\"#\"").count(), 2);
        assert!(html.contains("Stack Overflow"));
        assert!(html.contains("Discord"));
    }

    #[test]
    fn landing_contains_all_skill_rows() {
        let html = render_default();
        for row in BUILTIN.skills {
            assert!(html.contains(row.category), "missing row {}", row.category);
        }
        assert!(html.contains("Computer Vision"));
        assert!(html.contains("Sanskrit"));
    }

    #[test]
    fn hud_overlays_present_by_default() {
        let html = render_default();
        assert!(html.contains("id=\"hud-top\""));
        assert!(html.contains("id=\"hud-bottom\""));
        assert!(html.contains("SYSTEM: ONLINE"));
        assert!(html.contains("VISION: INFINITE"));
    }

    #[test]
    fn hud_overlays_absent_when_disabled() {
        let hud = HudConfig {
            enabled: false,
            ..Default::default()
        };
        let html = render_landing(&BUILTIN, &ThemeConfig::default(), &hud);
        assert!(!html.contains("id=\"hud-top\""));
        assert!(!html.contains("id=\"hud-bottom\""));
        // The IPC handler script is harmless either way
        assert!(html.contains("window.folio.ipc"));
    }

    #[test]
    fn hud_script_uses_ipc_bridge_not_innerhtml() {
        let html = render_default();
        assert!(html.contains("window.folio.ipc.on('hud'"));
        assert!(!html.contains(".innerHTML"));
    }

    #[test]
    fn landing_contains_footer() {
        let html = render_default();
        assert!(html.contains("ENGINEERED WITH PASSION"));
        assert!(html.contains("2026 Aditya Patil"));
    }

    #[test]
    fn landing_body_is_transparent_for_the_starfield() {
        let html = render_default();
        assert!(html.contains("background: transparent"));
    }
}
