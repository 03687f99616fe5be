//! Advance widths of the standard 14 Helvetica faces.
//!
//! Built-in PDF fonts are not embedded, so right and centre alignment has to
//! be resolved up front from the published AFM metrics. Widths are in 1/1000
//! of the font size and cover printable ASCII (`0x20..=0x7E`).

use crate::models::TextAnchor;

// Width used for glyphs outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Face used for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

fn glyph_width(face: FontFace, c: char) -> u16 {
    let table = match face {
        FontFace::Helvetica => &HELVETICA,
        FontFace::HelveticaBold => &HELVETICA_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - 0x20],
        _ => FALLBACK_WIDTH,
    }
}

/// Rendered width of `text` in the same unit as `font_size`.
pub fn text_width(text: &str, face: FontFace, font_size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(face, c))).sum();
    f64::from(units) * font_size / 1000.0
}

/// Left edge of a text run anchored at `x`.
pub fn aligned_x(x: f64, anchor: TextAnchor, width: f64) -> f64 {
    match anchor {
        TextAnchor::Start => x,
        TextAnchor::Middle => x - width / 2.0,
        TextAnchor::End => x - width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_widths() {
        assert_eq!(text_width("30", FontFace::Helvetica, 10.0), 11.12);
        assert_eq!(text_width("", FontFace::Helvetica, 10.0), 0.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = text_width("Workshop", FontFace::Helvetica, 12.0);
        let bold = text_width("Workshop", FontFace::HelveticaBold, 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_table_lookup_edges() {
        assert_eq!(glyph_width(FontFace::Helvetica, ' '), 278);
        assert_eq!(glyph_width(FontFace::Helvetica, '~'), 584);
        assert_eq!(glyph_width(FontFace::Helvetica, 'W'), 944);
        assert_eq!(glyph_width(FontFace::HelveticaBold, 'm'), 889);
        assert_eq!(glyph_width(FontFace::Helvetica, 'ç'), FALLBACK_WIDTH);
    }

    #[test]
    fn test_aligned_x() {
        assert_eq!(aligned_x(100.0, TextAnchor::Start, 20.0), 100.0);
        assert_eq!(aligned_x(100.0, TextAnchor::Middle, 20.0), 90.0);
        assert_eq!(aligned_x(100.0, TextAnchor::End, 20.0), 80.0);
    }
}
