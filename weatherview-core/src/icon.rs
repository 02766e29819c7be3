//! Condition category to display glyph mapping.

/// Map a provider condition category to its display glyph.
///
/// Matching is case-insensitive. Total over any input: unrecognized
/// categories fall back to the rainbow glyph rather than failing.
pub fn condition_glyph(category: &str) -> &'static str {
    match category.to_ascii_lowercase().as_str() {
        "clear" => "\u{2600}\u{fe0f}",
        "clouds" => "\u{2601}\u{fe0f}",
        "rain" | "drizzle" => "\u{1f327}\u{fe0f}",
        "thunderstorm" => "\u{26c8}\u{fe0f}",
        "snow" => "\u{2744}\u{fe0f}",
        "mist" | "fog" => "\u{1f32b}\u{fe0f}",
        _ => "\u{1f308}",
    }
}
