//! Handles the overall structure of the SVG document: root element,
//! background strip and the draw order of the ruler primitives.

use super::{
    constants::*,
    elements::{write_name_label, write_tick_label, write_tick_line},
    error::{Result, SvgConversionError},
    utils::fmt_num,
};
use crate::layout::RulerLayout;
use std::fmt::Write;

/// Serializes a whole layout. Ticks are drawn in index order, each line
/// followed by its label; the name goes last so it sits on top.
pub(crate) fn convert_layout_to_svg(layout: &RulerLayout, name: &str) -> Result<String> {
    if !(layout.total_length_px > 0.0 && layout.width_px > 0.0) {
        return Err(SvgConversionError::InvalidLayout(format!(
            "non-positive drawing size {} x {}",
            layout.total_length_px, layout.width_px
        )));
    }

    let mut svg_string = String::new();
    let total = fmt_num(layout.total_length_px);
    let width = fmt_num(layout.width_px);

    // --- SVG Header ---
    writeln!(
        svg_string,
        r#"<svg xmlns="{}" id="{}" viewBox="0 0 {total} {width}">"#,
        SVG_NAMESPACE, RULER_ELEMENT_ID
    )?;

    // --- Background strip ---
    writeln!(
        svg_string,
        r#"  <rect x="0" y="0" width="{total}" height="{width}" fill="{}" stroke="{}" />"#,
        BACKGROUND_FILL, STROKE_COLOR
    )?;

    // --- Ticks ---
    for tick in &layout.ticks {
        write_tick_line(tick, &mut svg_string)?;
        writeln!(svg_string)?;
        if let Some(label) = &tick.label {
            write_tick_label(label, &mut svg_string)?;
            writeln!(svg_string)?;
        }
    }

    // --- Name ---
    if let Some(name_label) = layout.name_label(name) {
        write_name_label(&name_label, &mut svg_string)?;
        writeln!(svg_string)?;
    }

    // --- SVG Footer ---
    writeln!(svg_string, "</svg>")?;
    Ok(svg_string)
}
