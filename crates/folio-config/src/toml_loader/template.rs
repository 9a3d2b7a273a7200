//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Folio Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
name = "folio-dark"
# primary = "#ff9933"
# secondary = "#138808"
# background = "#050508"
# text = "#e8e4dc"
# text_muted = "#8a8a8a"

[window]
# title = "Aditya Patil | Portfolio"
# width = 1280
# height = 800

[background]
# mode = "image"         # image, solid, none
# solid_color = "#050508"

[background.image]
# path = "assets/background.png"
# opacity = 0.2          # 0.0-1.0

[starfield]
# enabled = true
# points = 5000          # 1-200000
# radius = 1.5           # > 0
# color = "#ff9933"
# point_size = 0.002     # > 0, world units
# opacity = 1.0          # 0.0-1.0

[hud]
# enabled = true
# blink_interval_secs = 60   # >= 1
# shown_opacity = 0.3        # 0.0-1.0

[logging]
# level = "info"         # error, warn, info, debug, trace
"##
    .to_string()
}
