use thiserror::Error;

/// Errors that can occur while serializing a ruler layout to SVG.
#[derive(Error, Debug)]
pub enum SvgConversionError {
    #[error("Formatting error during SVG generation: {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("Layout cannot be drawn: {0}")]
    InvalidLayout(String),
}

/// A specialized Result type for SVG conversion operations.
pub type Result<T> = std::result::Result<T, SvgConversionError>;
