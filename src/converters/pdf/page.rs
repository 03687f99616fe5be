//! Maps a ruler layout onto PDF page coordinates.
//!
//! The layout uses a top-left origin with y growing downwards, PDF uses a
//! bottom-left origin. Everything here is plain geometry so the drawing code
//! in the parent module only has to replay the plan.

use super::metrics::{aligned_x, text_width, FontFace};
use crate::layout::{Orientation, RulerLayout};
use crate::models::TextAnchor;

/// A vertical tick segment in page points.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLine {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// A text run positioned by its left edge and baseline, in page points.
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    pub text: String,
    pub x: f64,
    pub baseline: f64,
    pub font_size: f64,
    pub face: FontFace,
}

/// Everything drawn on the single ruler page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
    pub lines: Vec<PageLine>,
    pub texts: Vec<PageText>,
}

fn place_text(
    text: &str,
    x: f64,
    y: f64,
    anchor: TextAnchor,
    font_size: f64,
    face: FontFace,
    page_height: f64,
) -> PageText {
    let width = text_width(text, face, font_size);
    PageText {
        text: text.to_string(),
        x: aligned_x(x, anchor, width),
        baseline: page_height - y,
        font_size,
        face,
    }
}

/// Builds the page plan: one px of layout is one point on the page, and the
/// page is exactly `total_length_px` by `width_px`.
pub fn plan_page(layout: &RulerLayout, name: &str) -> PagePlan {
    let height = layout.width_px;
    let lines = layout
        .ticks
        .iter()
        .map(|tick| PageLine {
            x: tick.position_px,
            y_top: height,
            y_bottom: height - tick.height_px,
        })
        .collect();

    let mut texts: Vec<PageText> = layout
        .labels()
        .map(|label| {
            place_text(
                &label.text,
                label.x,
                label.y,
                label.anchor,
                label.font_size,
                FontFace::Helvetica,
                height,
            )
        })
        .collect();

    if let Some(name_label) = layout.name_label(name) {
        texts.push(place_text(
            &name_label.text,
            name_label.x,
            name_label.y,
            TextAnchor::Middle,
            name_label.font_size,
            FontFace::HelveticaBold,
            height,
        ));
    }

    PagePlan {
        width: layout.total_length_px,
        height,
        orientation: layout.orientation(),
        lines,
        texts,
    }
}
