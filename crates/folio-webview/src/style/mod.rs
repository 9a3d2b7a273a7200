//! Page styling: CSS custom properties generated from theme config.

mod generate;
mod sanitize;

pub use generate::{generate_css_root, stylesheet, CssValueKind};
pub use sanitize::{validate_css_color, validate_css_font_family, validate_css_numeric};
