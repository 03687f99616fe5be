//! Entry points for the browser page.
//!
//! The page shell keeps the widgets and triggers the actual download; it calls
//! into these functions to render the preview and to get the bytes and file
//! name for each export. Rendering errors are logged to the console and show
//! up as `undefined` on the JavaScript side.

use wasm_bindgen::prelude::*;

use crate::converters::svg::render_svg;
use crate::export::{file_name, render, ExportFormat};
use crate::layout::compute_ticks;
use crate::models::{RulerConfig, RulerForm};

/// Routes `log` output to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        // A logger is already installed.
        log::debug!("console logger not installed: {}", e);
    }
}

/// Builds a config the same way the form widgets would.
fn form_config(unit: &str, length: f64, width_cm: u8, name: &str) -> RulerConfig {
    let mut form = RulerForm::new();
    form.set_unit(unit);
    form.set_length_value(length);
    form.set_width(&width_cm.to_string());
    form.set_name(name);
    form.config().clone()
}

/// SVG markup for the preview and the `.svg` download.
#[wasm_bindgen]
pub fn ruler_svg(unit: &str, length: f64, width_cm: u8, name: &str) -> Option<String> {
    let config = form_config(unit, length, width_cm, name);
    match render_svg(&compute_ticks(&config), &config.name) {
        Ok(svg) => Some(svg),
        Err(e) => {
            log::error!("Failed to render SVG: {}", e);
            None
        }
    }
}

/// Same as [`ruler_svg`], from a JSON config such as `{"unit":"mm","length":50}`.
#[wasm_bindgen]
pub fn ruler_svg_from_json(json: &str) -> Option<String> {
    let config = match RulerConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid ruler config: {}", e);
            return None;
        }
    };
    ruler_svg(
        config.unit.token(),
        f64::from(config.length),
        config.width_cm.centimeters(),
        &config.name,
    )
}

/// Bytes of the `.pdf` download.
#[wasm_bindgen]
pub fn ruler_pdf(unit: &str, length: f64, width_cm: u8, name: &str) -> Option<Vec<u8>> {
    let config = form_config(unit, length, width_cm, name);
    match render(&config, ExportFormat::Pdf) {
        Ok(file) => Some(file.bytes),
        Err(e) => {
            log::error!("Failed to render PDF: {}", e);
            None
        }
    }
}

/// Download file name, e.g. `ruler_custom_30cm.svg`.
#[wasm_bindgen]
pub fn ruler_file_name(unit: &str, length: f64, name: &str, extension: &str) -> Option<String> {
    let format = ExportFormat::from_extension(extension)?;
    let config = form_config(unit, length, 2, name);
    Some(file_name(&config, format))
}
