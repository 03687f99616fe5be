use std::{env, fs, path::PathBuf};

use anyhow::Context;
use ruler_tools::{export_ruler, DirectorySink, ExportFormat, RulerConfig};

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    // This reads the RUST_LOG environment variable to configure logging levels
    env_logger::builder()
        .filter_level(log::LevelFilter::Info) // Set default level
        .parse_default_env() // Allow RUST_LOG override
        .init();

    // Optional JSON config as first argument, e.g. '{"unit":"mm","length":50,"widthCm":2}'
    let config = match env::args().nth(1) {
        Some(json) => RulerConfig::from_json(&json).context("invalid ruler config")?,
        None => RulerConfig::default(),
    };
    let out_dir = env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/rulers"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("cannot create {}", out_dir.display()))?;

    log::info!("Exporting {:?} to {}", config, out_dir.display());
    let mut sink = DirectorySink::new(&out_dir);
    for format in [ExportFormat::Svg, ExportFormat::Pdf] {
        match export_ruler(&config, format, &mut sink) {
            Some(name) => log::info!("Wrote {}", out_dir.join(name).display()),
            None => log::warn!("{:?} export skipped, see error above", format),
        }
    }
    Ok(())
}
