//! File export: naming, rendering and handing bytes to a download sink.
//!
//! Export is the only place in the crate where the environment can fail (no
//! writable target, blocked download). Those failures are logged and
//! swallowed here; they never reach the layout engine or the form state.

use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::converters::{pdf::render_pdf, svg::render_svg};
use crate::errors::{Result, RulerError};
use crate::layout::compute_ticks;
use crate::models::RulerConfig;

/// Name used in file names when the ruler has no custom name.
pub const DEFAULT_FILE_STEM: &str = "custom";

/// Output document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Svg,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Parses a file extension such as `"svg"` or `"pdf"`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "svg" => Some(ExportFormat::Svg),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }
}

/// A rendered document ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// `ruler_<name or "custom">_<length><unit>.<ext>`
pub fn file_name(config: &RulerConfig, format: ExportFormat) -> String {
    let stem = if config.name.is_empty() {
        DEFAULT_FILE_STEM
    } else {
        config.name.as_str()
    };
    format!(
        "ruler_{}_{}{}.{}",
        stem,
        config.length,
        config.unit.token(),
        format.extension()
    )
}

/// Lays out and renders `config` without touching any sink.
pub fn render(config: &RulerConfig, format: ExportFormat) -> Result<ExportedFile> {
    let layout = compute_ticks(config);
    let bytes = match format {
        ExportFormat::Svg => render_svg(&layout, &config.name)?.into_bytes(),
        ExportFormat::Pdf => render_pdf(&layout, &config.name)?,
    };
    Ok(ExportedFile {
        file_name: file_name(config, format),
        mime_type: format.mime_type().to_string(),
        bytes,
    })
}

/// The host's save/download mechanism.
pub trait DownloadSink {
    fn save(&mut self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes exported files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save(&mut self, file_name: &str, _mime_type: &str, bytes: &[u8]) -> Result<()> {
        // The ruler name is free text; it must not escape the target directory.
        if file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return Err(RulerError::InvalidInput(format!(
                "refusing to write file name {file_name:?}"
            )));
        }
        if !self.dir.is_dir() {
            return Err(RulerError::Sink(format!(
                "download directory {} does not exist",
                self.dir.display()
            )));
        }
        fs::write(self.dir.join(file_name), bytes)?;
        Ok(())
    }
}

/// Keeps exported files in memory, e.g. to pass them on to a browser.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: Vec<ExportedFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Default::default()
    }
}

impl DownloadSink for MemorySink {
    fn save(&mut self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<()> {
        self.files.push(ExportedFile {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

fn try_export(
    config: &RulerConfig,
    format: ExportFormat,
    sink: &mut dyn DownloadSink,
) -> Result<String> {
    let file = render(config, format)?;
    sink.save(&file.file_name, &file.mime_type, &file.bytes)?;
    Ok(file.file_name)
}

/// Renders `config` and hands it to `sink`.
///
/// Returns the saved file name, or `None` if anything failed. Failures are
/// logged and otherwise ignored.
pub fn export_ruler(
    config: &RulerConfig,
    format: ExportFormat,
    sink: &mut dyn DownloadSink,
) -> Option<String> {
    match try_export(config, format, sink) {
        Ok(name) => {
            info!("Exported ruler to {}", name);
            Some(name)
        }
        Err(e) => {
            error!(
                "Failed to export {} ruler: {}",
                format.extension().to_uppercase(),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RulerWidth, Unit};

    struct BlockedSink;

    impl DownloadSink for BlockedSink {
        fn save(&mut self, _: &str, _: &str, _: &[u8]) -> Result<()> {
            Err(RulerError::Sink("download blocked".to_string()))
        }
    }

    #[test]
    fn test_file_name_defaults_to_custom() {
        let config = RulerConfig::default();
        assert_eq!(file_name(&config, ExportFormat::Svg), "ruler_custom_30cm.svg");
        assert_eq!(file_name(&config, ExportFormat::Pdf), "ruler_custom_30cm.pdf");
    }

    #[test]
    fn test_file_name_uses_name_and_unit_token() {
        let config = RulerConfig::new(Unit::Inch, 12, RulerWidth::ThreeCm, "shop");
        assert_eq!(file_name(&config, ExportFormat::Pdf), "ruler_shop_12pol.pdf");
        let config = RulerConfig::new(Unit::Millimeter, 50, RulerWidth::TwoCm, "");
        assert_eq!(file_name(&config, ExportFormat::Svg), "ruler_custom_50mm.svg");
    }

    #[test]
    fn test_export_to_memory() {
        let config = RulerConfig::default();
        let mut sink = MemorySink::new();
        assert_eq!(
            export_ruler(&config, ExportFormat::Svg, &mut sink).as_deref(),
            Some("ruler_custom_30cm.svg")
        );
        assert_eq!(
            export_ruler(&config, ExportFormat::Pdf, &mut sink).as_deref(),
            Some("ruler_custom_30cm.pdf")
        );
        assert_eq!(sink.files.len(), 2);
        assert_eq!(sink.files[0].mime_type, "image/svg+xml");
        assert!(sink.files[0].bytes.starts_with(b"<svg"));
        assert_eq!(sink.files[1].mime_type, "application/pdf");
        assert!(sink.files[1].bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_export_failure_is_swallowed() {
        let config = RulerConfig::default();
        assert_eq!(export_ruler(&config, ExportFormat::Svg, &mut BlockedSink), None);
    }

    #[test]
    fn test_directory_sink_rejects_path_names() {
        let config = RulerConfig::new(Unit::Centimeter, 10, RulerWidth::TwoCm, "../escape");
        let mut sink = DirectorySink::new(std::env::temp_dir());
        assert_eq!(export_ruler(&config, ExportFormat::Svg, &mut sink), None);
    }

    #[test]
    fn test_directory_sink_missing_dir() {
        let mut sink = DirectorySink::new(std::env::temp_dir().join("ruler-tools-missing-dir"));
        assert!(matches!(
            sink.save("ruler_custom_1cm.svg", "image/svg+xml", b"<svg/>"),
            Err(RulerError::Sink(_))
        ));
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = std::env::temp_dir().join(format!("ruler-tools-test-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        let config = RulerConfig::new(Unit::Millimeter, 20, RulerWidth::TwoCm, "");
        let mut sink = DirectorySink::new(&dir);
        let name = export_ruler(&config, ExportFormat::Svg, &mut sink).expect("export succeeds");
        let written = fs::read_to_string(sink.dir().join(&name)).expect("file written");
        assert!(written.starts_with("<svg"));
        fs::remove_dir_all(&dir).expect("clean up temp dir");
    }
}
