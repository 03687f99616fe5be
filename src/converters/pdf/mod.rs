//! Draws a ruler layout onto a single PDF page with `printpdf`.
//!
//! The page is sized to the ruler in points (one layout px per point), filled
//! white, outlined in black, and carries the same ticks and labels as the SVG
//! output. Labels use the built-in Helvetica faces.

mod error;
pub mod metrics;
pub mod page;

pub use error::{PdfConversionError, Result};
pub use page::{plan_page, PagePlan};

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
    Polygon, Pt, Rgb,
};

use crate::layout::RulerLayout;
use metrics::FontFace;

const DOCUMENT_TITLE: &str = "Ruler";
const LAYER_NAME: &str = "Ruler";
// Default stroke width of the browser-side PDF writer, in points.
const DEFAULT_LINE_WIDTH_PT: f32 = 0.200025;

fn mm(pt: f64) -> Mm {
    Mm::from(Pt(pt as f32))
}

fn point(x: f64, y: f64) -> Point {
    Point::new(mm(x), mm(y))
}

fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn backend_err(e: impl std::fmt::Display) -> PdfConversionError {
    PdfConversionError::Backend(e.to_string())
}

fn draw_background(layer: &PdfLayerReference, plan: &PagePlan) {
    let ring = vec![
        (point(0.0, 0.0), false),
        (point(plan.width, 0.0), false),
        (point(plan.width, plan.height), false),
        (point(0.0, plan.height), false),
    ];
    layer.set_fill_color(rgb(1.0, 1.0, 1.0));
    layer.set_outline_color(rgb(0.0, 0.0, 0.0));
    layer.set_outline_thickness(DEFAULT_LINE_WIDTH_PT);
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode: PaintMode::FillStroke,
        winding_order: WindingOrder::NonZero,
    });
}

fn draw_ticks(layer: &PdfLayerReference, plan: &PagePlan) {
    layer.set_outline_color(rgb(0.0, 0.0, 0.0));
    layer.set_outline_thickness(DEFAULT_LINE_WIDTH_PT);
    for line in &plan.lines {
        layer.add_line(Line {
            points: vec![
                (point(line.x, line.y_top), false),
                (point(line.x, line.y_bottom), false),
            ],
            is_closed: false,
        });
    }
}

fn draw_texts(
    layer: &PdfLayerReference,
    plan: &PagePlan,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    layer.set_fill_color(rgb(0.0, 0.0, 0.0));
    for text in &plan.texts {
        let font = match text.face {
            FontFace::Helvetica => regular,
            FontFace::HelveticaBold => bold,
        };
        layer.use_text(
            text.text.as_str(),
            text.font_size as f32,
            mm(text.x),
            mm(text.baseline),
            font,
        );
    }
}

/// Renders `layout` as a one-page PDF document and returns its bytes.
///
/// # Arguments
/// * `layout` - Ticks and bounds from [`crate::layout::compute_ticks`].
/// * `name` - Custom ruler name; an empty string draws no name.
pub fn render_pdf(layout: &RulerLayout, name: &str) -> Result<Vec<u8>> {
    if !(layout.total_length_px > 0.0 && layout.width_px > 0.0) {
        return Err(PdfConversionError::InvalidLayout(format!(
            "non-positive page size {} x {}",
            layout.total_length_px, layout.width_px
        )));
    }

    let plan = plan_page(layout, name);
    log::debug!(
        "[render_pdf] page {}pt x {}pt ({:?}), {} lines, {} texts",
        plan.width,
        plan.height,
        plan.orientation,
        plan.lines.len(),
        plan.texts.len()
    );

    let (doc, page_index, layer_index) =
        PdfDocument::new(DOCUMENT_TITLE, mm(plan.width), mm(plan.height), LAYER_NAME);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(backend_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(backend_err)?;
    let layer = doc.get_page(page_index).get_layer(layer_index);

    draw_background(&layer, &plan);
    draw_ticks(&layer, &plan);
    draw_texts(&layer, &plan, &regular, &bold);

    doc.save_to_bytes().map_err(backend_err)
}
