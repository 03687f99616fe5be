//! Geometry constants shared by the layout engine and both renderers.

// 96 DPI equivalence: 96 px per inch / 2.54 cm per inch.
pub const PX_PER_CM: f64 = 37.7952755906;

// Subdivisions per labeled unit.
pub const METRIC_MAIN_DIVISIONS: u32 = 10;
pub const INCH_MAIN_DIVISIONS: u32 = 16; // 1/16" graduations
// Every fifth millimeter tick is major.
pub const MM_MAJOR_EVERY: u32 = 5;

// Tick heights as a divisor of the ruler width.
pub const MAJOR_HEIGHT_DIVISOR: f64 = 3.0;
pub const MEDIUM_HEIGHT_DIVISOR: f64 = 4.0;
pub const MINOR_HEIGHT_DIVISOR: f64 = 6.0;

// Stroke widths in px.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const MM_MINOR_STROKE_WIDTH: f64 = 0.5;

// Label placement.
pub const LABEL_OFFSET_START: f64 = 2.0;
pub const LABEL_OFFSET_END: f64 = 4.0;
pub const LABEL_BASELINE_DIVISOR: f64 = 2.5;
pub const MM_LABEL_FONT_DIVISOR: f64 = 12.0;
pub const LABEL_FONT_DIVISOR: f64 = 10.0;

// Name label placement.
pub const NAME_BASELINE_FACTOR: f64 = 0.75;
pub const NAME_FONT_DIVISOR: f64 = 6.0;
