pub mod converters;
pub mod errors;
pub mod export;
pub mod layout;
pub mod models;
pub mod web;

pub use converters::{pdf::render_pdf, svg::render_svg};
pub use errors::{Result, RulerError};
pub use export::{export_ruler, file_name, DirectorySink, DownloadSink, ExportFormat, MemorySink};
pub use layout::{compute_ticks, RulerLayout};
pub use models::{RulerConfig, RulerForm, RulerWidth, Unit};
