//! Converts a ruler layout to Scalable Vector Graphics (SVG) markup.
//!
//! The document mirrors the on-page preview: a `viewBox` sized to the ruler in
//! px, a white background strip with a black outline, one `<line>` per tick,
//! one `<text>` per labeled tick and an optional bold name in the middle.

// Declare the submodules
mod constants;
mod elements;
mod error;
mod structure;
mod utils;

// Re-export the main error type and result alias for consumers of this module
pub use error::{Result, SvgConversionError};
pub use utils::{escape_svg_attr, escape_svg_text};

use crate::layout::RulerLayout;
use structure::convert_layout_to_svg;

/// Renders `layout` as a standalone SVG document.
///
/// # Arguments
/// * `layout` - Ticks and bounds from [`crate::layout::compute_ticks`].
/// * `name` - Custom ruler name; an empty string draws no name.
pub fn render_svg(layout: &RulerLayout, name: &str) -> Result<String> {
    let svg = convert_layout_to_svg(layout, name)?;
    log::debug!(
        "[render_svg] {} ticks, {} bytes",
        layout.ticks.len(),
        svg.len()
    );
    Ok(svg)
}
