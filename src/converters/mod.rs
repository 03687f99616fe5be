pub mod pdf;
pub mod svg;
