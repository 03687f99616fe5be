//! Utility functions for SVG conversion: escaping and number formatting.

/// Escapes special XML characters (`&`, `<`, `>`) for use in SVG text content.
pub fn escape_svg_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_svg_attr(value: &str) -> String {
    escape_svg_text(value).replace('"', "&quot;")
}

/// Formats a coordinate with the shortest representation that round-trips,
/// so `0.0` prints as `0` and `2.5` as `2.5`.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_svg_text("a<b & c>"), "a&lt;b &amp; c&gt;");
        assert_eq!(escape_svg_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(75.5905511812), "75.5905511812");
    }
}
