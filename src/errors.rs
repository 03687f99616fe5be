use thiserror::Error;

use crate::converters::{pdf::PdfConversionError, svg::SvgConversionError};

/// Represents errors that can occur while rendering or exporting a ruler.
#[derive(Error, Debug)]
pub enum RulerError {
    /// Error originating from the SVG converter.
    #[error("SVG rendering failed: {0}")]
    Svg(#[from] SvgConversionError),

    /// Error originating from the PDF converter.
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] PdfConversionError),

    /// Error occurred while (de)serializing a ruler configuration.
    #[error("Failed to parse ruler configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while writing an exported file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error indicating invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The download sink refused or could not accept the file.
    #[error("Download sink error: {0}")]
    Sink(String),
}

/// A type alias for `Result<T, RulerError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, RulerError>;
