//! bandramp - apply multi-stop color ramps to data-bearing elements
//!
//! This is the main entry point for the bandramp command-line tool.

use anyhow::Context;
use tracing::{error, info};

use bandramp::mapping::get_mapper;
use bandramp::ramp::{build_ramp, save_swatch};
use bandramp::{apply_colors, init_tracing, log_timed_operation, Config, Document};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, args) = Config::load().context("Failed to load configuration")?;

    init_tracing(&config.log_level);

    info!("Starting bandramp v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let segments = config.segments()?;
    let ramp = log_timed_operation("build_ramp", || build_ramp(&segments));
    info!(
        "Built ramp with {} colors from {} segments",
        ramp.len(),
        segments.len()
    );

    if let Some(swatch_path) = &args.swatch {
        save_swatch(
            &ramp,
            config.swatch.band_width,
            config.swatch.height,
            swatch_path,
        )?;
        info!("Wrote swatch to {:?}", swatch_path);
    }

    info!("Loading document: {:?}", args.document);
    let mut document = Document::load(&args.document)
        .with_context(|| format!("Failed to load document {}", args.document.display()))?;

    let mapper = get_mapper(&config.apply.mode)?;
    let report = apply_colors(&mut document, &config.apply.marker, &ramp, mapper.as_ref())?;

    let json = document.to_json_pretty()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote styled document to {:?}", path);
        }
        None => println!("{}", json),
    }

    info!("Styled {} of {} elements", report.styled, report.matched);
    Ok(())
}
