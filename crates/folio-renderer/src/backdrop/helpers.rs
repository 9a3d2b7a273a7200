use folio_common::Color;

/// Parse `#rrggbb` into normalized RGB components.
pub fn hex_to_rgb(hex: &str) -> Option<[f64; 3]> {
    let color = Color::from_hex(hex)?;
    if hex.trim_start_matches('#').len() != 6 {
        return None;
    }
    Some([
        color.r as f64 / 255.0,
        color.g as f64 / 255.0,
        color.b as f64 / 255.0,
    ])
}
