//! Converts individual ruler primitives (tick lines, tick labels, name label)
//! to SVG elements.

use super::{
    constants::*,
    error::Result,
    utils::{escape_svg_text, fmt_num},
};
use crate::models::{NameLabel, TextAnchor, TickLabel, TickMark};
use std::fmt::Write;

/// Appends the vertical line for `tick`, from the top edge down to its height.
pub(crate) fn write_tick_line(tick: &TickMark, svg: &mut String) -> Result<()> {
    let x = fmt_num(tick.position_px);
    write!(
        svg,
        r#"  <line x1="{x}" y1="0" x2="{x}" y2="{}" stroke="{}" stroke-width="{}" />"#,
        fmt_num(tick.height_px),
        STROKE_COLOR,
        fmt_num(tick.stroke_width)
    )?;
    Ok(())
}

/// Appends the number printed next to a major tick.
pub(crate) fn write_tick_label(label: &TickLabel, svg: &mut String) -> Result<()> {
    write!(
        svg,
        r#"  <text x="{}" y="{}" text-anchor="{}" font-size="{}">{}</text>"#,
        fmt_num(label.x),
        fmt_num(label.y),
        label.anchor.as_svg(),
        fmt_num(label.font_size),
        escape_svg_text(&label.text)
    )?;
    Ok(())
}

/// Appends the bold, centered ruler name.
pub(crate) fn write_name_label(name: &NameLabel, svg: &mut String) -> Result<()> {
    write!(
        svg,
        r#"  <text x="{}" y="{}" text-anchor="{}" font-size="{}" font-weight="{}">{}</text>"#,
        fmt_num(name.x),
        fmt_num(name.y),
        TextAnchor::Middle.as_svg(),
        fmt_num(name.font_size),
        NAME_FONT_WEIGHT,
        escape_svg_text(&name.text)
    )?;
    Ok(())
}
