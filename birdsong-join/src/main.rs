//! birdsong-join - Main entry point
//!
//! Joins a GBIF occurrence table with its multimedia table, keeps audio
//! recordings from the configured locations, groups them per species, adds
//! species pictures and writes the result as one JSON document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use birdsong_common::config::{load_config, PicturePolicy};
use birdsong_join::{ConfigOverrides, JoinPipeline, PipelineConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for birdsong-join
#[derive(Parser, Debug)]
#[command(name = "birdsong-join")]
#[command(about = "Join GBIF occurrences and sound recordings into a per-species birdsong document")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long, env = "BIRDSONG_CONFIG")]
    config: Option<PathBuf>,

    /// Multimedia table (tab-delimited, header row)
    #[arg(short, long, env = "BIRDSONG_MULTIMEDIA")]
    multimedia: Option<PathBuf>,

    /// Occurrence table (tab-delimited, header row)
    #[arg(short = 'i', long, env = "BIRDSONG_OCCURRENCE")]
    occurrence: Option<PathBuf>,

    /// Output JSON file
    #[arg(short, long, env = "BIRDSONG_OUTPUT")]
    output: Option<PathBuf>,

    /// Permitted top-level location; repeat or comma-separate for several
    #[arg(short, long = "location", env = "BIRDSONG_LOCATIONS", value_delimiter = ',')]
    locations: Vec<String>,

    /// Picture policy: still_images or all_media
    #[arg(short, long, env = "BIRDSONG_PICTURE_POLICY")]
    picture_policy: Option<PicturePolicy>,

    /// Species media API root
    #[arg(long, env = "BIRDSONG_MEDIA_API")]
    media_api: Option<String>,

    /// Remote lookup timeout in seconds
    #[arg(long, env = "BIRDSONG_LOOKUP_TIMEOUT")]
    timeout_secs: Option<u64>,

    /// Pretty-print the output document
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            multimedia_path: self.multimedia.clone(),
            occurrence_path: self.occurrence.clone(),
            output_path: self.output.clone(),
            allowed_locations: Some(self.locations.clone()).filter(|l| !l.is_empty()),
            picture_policy: self.picture_policy,
            media_api_base_url: self.media_api.clone(),
            lookup_timeout_secs: self.timeout_secs,
            pretty: self.pretty.then_some(true),
        }
    }
}

// Stages run one after another; a current-thread runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config file is read before tracing so its log level can apply
    let (toml_config, config_source) =
        load_config(args.config.as_deref()).context("Failed to load config file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&toml_config.logging.level)),
        )
        .init();

    info!(
        "Starting birdsong-join v{} [{}] ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_PROFILE")
    );
    match &config_source {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let config = PipelineConfig::resolve(args.overrides(), toml_config)
        .context("Invalid configuration")?;
    info!("Multimedia: {}", config.multimedia_path.display());
    info!("Occurrences: {}", config.occurrence_path.display());
    info!("Output: {}", config.output_path.display());

    let pipeline = JoinPipeline::new(config).context("Failed to initialize pipeline")?;
    let summary = pipeline.run().await.context("Join failed")?;

    info!("{}", summary.display_string());
    Ok(())
}
