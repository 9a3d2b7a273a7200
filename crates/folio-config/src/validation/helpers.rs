//! Shared validation helpers.

use folio_common::Color;

/// Push an error if `value` is not a parseable hex color.
pub(super) fn check_hex_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} must be a hex color (#rrggbb), got '{value}'"));
    }
}

/// Push an error if `value` falls outside `[min, max]`.
pub(super) fn check_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} must be in {min}..={max}, got {value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_accepts_valid() {
        let mut errors = Vec::new();
        check_hex_color(&mut errors, "x", "#ff9933");
        assert!(errors.is_empty());
    }

    #[test]
    fn hex_color_rejects_invalid() {
        let mut errors = Vec::new();
        check_hex_color(&mut errors, "x", "orange");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("x must be a hex color"));
    }

    #[test]
    fn range_check_bounds_are_inclusive() {
        let mut errors = Vec::new();
        check_range_f64(&mut errors, "x", 0.0, 0.0, 1.0);
        check_range_f64(&mut errors, "x", 1.0, 0.0, 1.0);
        assert!(errors.is_empty());

        check_range_f64(&mut errors, "x", 1.01, 0.0, 1.0);
        assert_eq!(errors.len(), 1);
    }
}
