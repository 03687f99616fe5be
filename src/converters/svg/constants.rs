//! Defines constants used throughout the SVG conversion process.

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
// Element id the page shell uses to find the preview.
pub const RULER_ELEMENT_ID: &str = "ruler";

pub const BACKGROUND_FILL: &str = "white";
pub const STROKE_COLOR: &str = "black";
pub const NAME_FONT_WEIGHT: &str = "bold";
