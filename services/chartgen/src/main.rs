//! Heat-map chart generator.
//!
//! One-shot flow: fetch the global temperature anomaly dataset, plan the
//! chart geometry, render the SVG (optionally rasterized to PNG), write the
//! output file. No retries: a load failure aborts the run with a non-zero
//! exit.

mod fetch;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use heatmap_common::ChartLayout;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Upstream location of the global land-surface temperature dataset.
const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Parser, Debug)]
#[command(name = "chartgen")]
#[command(about = "Renders the global land-surface temperature heat map")]
struct Args {
    /// Dataset URL
    #[arg(long, env = "DATASET_URL", default_value = DATASET_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of fetching
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "heatmap.svg")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "svg")]
    format: Format,

    /// HTTP timeout for the dataset fetch, in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting heat-map chart generation");

    let dataset = match &args.input {
        Some(path) => fetch::read_dataset(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))?,
        None => {
            let client = fetch::build_client(Duration::from_secs(args.timeout_secs))?;
            fetch::fetch_dataset(&client, &args.url)
                .await
                .with_context(|| format!("Failed to fetch dataset from {}", args.url))?
        }
    };

    let (min_year, max_year) = dataset.year_domain();
    info!(
        records = dataset.record_count(),
        base_temperature = dataset.base_temperature,
        min_year,
        max_year,
        "Dataset loaded"
    );

    let layout = ChartLayout::default();
    let svg = heatmap_svg::render_chart(&dataset, &layout).context("Failed to render chart")?;

    match args.format {
        Format::Svg => tokio::fs::write(&args.output, &svg).await?,
        Format::Png => {
            let png =
                heatmap_svg::raster::rasterize(&svg).context("Failed to rasterize chart")?;
            tokio::fs::write(&args.output, &png).await?;
        }
    }

    info!(output = %args.output.display(), "Chart written");

    Ok(())
}
