//! CSS value sanitization to prevent CSS injection.
//!
//! Only allows safe CSS value formats:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with numeric arguments
//! - Font families: quoted or unquoted alphanumeric names, comma-separated
//! - Numeric values with units: `14px`, `1.6`, `1.2em`

/// Validate a CSS color value.
///
/// Accepts hex and `rgb()`/`rgba()` with numeric args. Rejects everything
/// else, including named colors.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }

    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(format!(
        "Invalid CSS color: only hex (#rrggbb) and rgb()/rgba() allowed, got '{trimmed}'"
    ))
}

/// Validate a CSS font-family value.
///
/// Accepts quoted or unquoted font names separated by commas.
pub fn validate_css_font_family(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty font-family value".to_string());
    }

    check_injection_patterns(trimmed)?;

    for ch in trimmed.chars() {
        if !ch.is_alphanumeric()
            && ch != ' '
            && ch != '-'
            && ch != '_'
            && ch != '\''
            && ch != '"'
            && ch != ','
        {
            return Err(format!(
                "Invalid character '{ch}' in font-family: '{trimmed}'"
            ));
        }
    }

    Ok(())
}

/// Validate a CSS numeric value (opacity, size, duration number).
///
/// Accepts integers and floats with an optional unit (px, em, rem, s, %).
pub fn validate_css_numeric(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS numeric value".to_string());
    }

    check_injection_patterns(trimmed)?;

    let numeric_part = trimmed
        .trim_end_matches("px")
        .trim_end_matches("rem")
        .trim_end_matches("em")
        .trim_end_matches('s')
        .trim_end_matches('%');

    if numeric_part.parse::<f64>().is_err() {
        return Err(format!("Invalid CSS numeric value: '{trimmed}'"));
    }

    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

/// Check for common CSS injection patterns.
fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "import",
        "@charset",
        "behavior:",
        "-moz-binding",
        ";",
        "{",
        "}",
        "<",
        ">",
    ];

    for pattern in &dangerous {
        if lower.contains(pattern) {
            return Err(format!("CSS injection blocked: contains '{pattern}'"));
        }
    }

    Ok(())
}

fn validate_hex_color(value: &str) -> Result<(), String> {
    let digits = &value[1..];
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(format!("Invalid hex color length: '{value}'"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color digits: '{value}'"));
    }
    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), String> {
    let inner = value
        .trim_start_matches("rgba(")
        .trim_start_matches("rgb(")
        .strip_suffix(')')
        .ok_or_else(|| format!("Unterminated rgb()/rgba(): '{value}'"))?;

    for part in inner.split(',') {
        if part.trim().parse::<f64>().is_err() {
            return Err(format!("Non-numeric rgb()/rgba() argument in '{value}'"));
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_colors() {
        assert!(validate_css_color("#ff9933").is_ok());
        assert!(validate_css_color("#fff").is_ok());
        assert!(validate_css_color("#ff993380").is_ok());
    }

    #[test]
    fn accepts_rgb_functions() {
        assert!(validate_css_color("rgb(255, 153, 51)").is_ok());
        assert!(validate_css_color("rgba(255, 153, 51, 0.3)").is_ok());
    }

    #[test]
    fn rejects_named_colors() {
        assert!(validate_css_color("saffron").is_err());
        assert!(validate_css_color("red").is_err());
    }

    #[test]
    fn rejects_injection_in_color() {
        assert!(validate_css_color("#fff; background: url(http://evil)").is_err());
        assert!(validate_css_color("expression(alert(1))").is_err());
        assert!(validate_css_color("#fff}body{color:red").is_err());
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(validate_css_color("#gggggg").is_err());
        assert!(validate_css_color("#12345").is_err());
        assert!(validate_css_color("").is_err());
    }

    #[test]
    fn rejects_bad_rgb_args() {
        assert!(validate_css_color("rgba(255, eval, 0, 1)").is_err());
        assert!(validate_css_color("rgb(1, 2").is_err());
    }

    #[test]
    fn accepts_font_families() {
        assert!(validate_css_font_family("'Courier New', monospace").is_ok());
        assert!(validate_css_font_family("Menlo, Consolas, monospace").is_ok());
    }

    #[test]
    fn rejects_font_family_injection() {
        assert!(validate_css_font_family("mono; background: red").is_err());
        assert!(validate_css_font_family("mono</style><script>").is_err());
    }

    #[test]
    fn accepts_numerics() {
        assert!(validate_css_numeric("0.3").is_ok());
        assert!(validate_css_numeric("14px").is_ok());
        assert!(validate_css_numeric("1.6").is_ok());
        assert!(validate_css_numeric("0.5s").is_ok());
    }

    #[test]
    fn rejects_bad_numerics() {
        assert!(validate_css_numeric("abc").is_err());
        assert!(validate_css_numeric("1.5; color: red").is_err());
        assert!(validate_css_numeric("").is_err());
    }
}
