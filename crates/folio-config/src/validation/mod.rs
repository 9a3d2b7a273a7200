//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Errors are collected and
//! joined into a single `ConfigError` so the user sees everything wrong
//! with their file at once.

mod helpers;

use crate::schema::FolioConfig;
use folio_common::ConfigError;

use helpers::{check_hex_color, check_range_f64};

/// Hard cap on star count; beyond this the instance buffer upload gets
/// silly for a decorative background.
const MAX_STAR_POINTS: u32 = 200_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_theme(&mut errors, config);
    validate_window(&mut errors, config);
    validate_background(&mut errors, config);
    validate_starfield(&mut errors, config);
    validate_hud(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_theme(errors: &mut Vec<String>, config: &FolioConfig) {
    let t = &config.theme;
    for (name, value) in [
        ("theme.primary", &t.primary),
        ("theme.secondary", &t.secondary),
        ("theme.background", &t.background),
        ("theme.text", &t.text),
        ("theme.text_muted", &t.text_muted),
    ] {
        check_hex_color(errors, name, value);
    }
}

fn validate_window(errors: &mut Vec<String>, config: &FolioConfig) {
    if config.window.width == 0 {
        errors.push("window.width must be > 0".into());
    }
    if config.window.height == 0 {
        errors.push("window.height must be > 0".into());
    }
}

fn validate_background(errors: &mut Vec<String>, config: &FolioConfig) {
    check_hex_color(errors, "background.solid_color", &config.background.solid_color);
    check_range_f64(
        errors,
        "background.image.opacity",
        config.background.image.opacity,
        0.0,
        1.0,
    );
}

fn validate_starfield(errors: &mut Vec<String>, config: &FolioConfig) {
    let s = &config.starfield;
    if s.points > MAX_STAR_POINTS {
        errors.push(format!(
            "starfield.points must be <= {MAX_STAR_POINTS}, got {}",
            s.points
        ));
    }
    if s.radius <= 0.0 {
        errors.push(format!("starfield.radius must be > 0, got {}", s.radius));
    }
    if s.point_size <= 0.0 {
        errors.push(format!(
            "starfield.point_size must be > 0, got {}",
            s.point_size
        ));
    }
    check_hex_color(errors, "starfield.color", &s.color);
    check_range_f64(errors, "starfield.opacity", s.opacity, 0.0, 1.0);
}

fn validate_hud(errors: &mut Vec<String>, config: &FolioConfig) {
    if config.hud.blink_interval_secs == 0 {
        errors.push("hud.blink_interval_secs must be >= 1".into());
    }
    check_range_f64(
        errors,
        "hud.shown_opacity",
        config.hud.shown_opacity,
        0.0,
        1.0,
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&FolioConfig::default()).is_ok());
    }

    #[test]
    fn zero_radius_is_rejected() {
        let mut config = FolioConfig::default();
        config.starfield.radius = 0.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("starfield.radius"));
    }

    #[test]
    fn excessive_points_are_rejected() {
        let mut config = FolioConfig::default();
        config.starfield.points = MAX_STAR_POINTS + 1;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("starfield.points"));
    }

    #[test]
    fn zero_points_are_allowed() {
        // An empty starfield renders nothing but is not an error.
        let mut config = FolioConfig::default();
        config.starfield.points = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn bad_hex_color_is_rejected() {
        let mut config = FolioConfig::default();
        config.theme.primary = "saffron".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("theme.primary"));
    }

    #[test]
    fn out_of_range_opacity_is_rejected() {
        let mut config = FolioConfig::default();
        config.hud.shown_opacity = 1.5;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("hud.shown_opacity"));
    }

    #[test]
    fn zero_blink_interval_is_rejected() {
        let mut config = FolioConfig::default();
        config.hud.blink_interval_secs = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("blink_interval_secs"));
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let mut config = FolioConfig::default();
        config.window.width = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("window.width"));
    }

    #[test]
    fn multiple_errors_are_collected() {
        let mut config = FolioConfig::default();
        config.starfield.radius = -1.0;
        config.hud.blink_interval_secs = 0;
        config.theme.text = "not-a-color".into();
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("starfield.radius"));
        assert!(msg.contains("blink_interval_secs"));
        assert!(msg.contains("theme.text"));
    }
}
