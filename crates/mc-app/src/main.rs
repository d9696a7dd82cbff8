use anyhow::Result;
use clap::Parser;
use mc_core::config::FilterConfig;

pub mod cli;
pub mod convert;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Resolve config, then CLI overrides
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);

    // 4. Decode → render → encode
    let written = convert::convert_image(&cli.input, &cli.output_path(), config)?;
    log::info!("done: {}", written.display());
    Ok(())
}

/// Resolve config: explicit --config file, or defaults.
fn resolve_config(cli: &cli::Cli) -> Result<FilterConfig> {
    match cli.config {
        Some(ref path) if path.exists() => mc_core::config::load_config(path),
        Some(ref path) => {
            log::warn!("config not found: {}. Using defaults.", path.display());
            Ok(FilterConfig::default())
        }
        None => Ok(FilterConfig::default()),
    }
}
