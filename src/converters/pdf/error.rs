use thiserror::Error;

/// Errors that can occur while drawing a ruler layout onto a PDF page.
#[derive(Error, Debug)]
pub enum PdfConversionError {
    #[error("PDF backend error: {0}")]
    Backend(String),
    #[error("Layout cannot be drawn: {0}")]
    InvalidLayout(String),
}

/// A specialized Result type for PDF conversion operations.
pub type Result<T> = std::result::Result<T, PdfConversionError>;
