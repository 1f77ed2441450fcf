use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kazam_report::ReportConfig;

#[derive(Parser)]
#[command(name = "kazam-report")]
#[command(about = "Defensive type profiles and rankings for a Pokemon dataset")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Creature dataset CSV
    #[arg(long)]
    creatures: Option<PathBuf>,

    /// Effectiveness matrix CSV
    #[arg(long, conflicts_with = "standard_chart")]
    matrix: Option<PathBuf>,

    /// Use the built-in type chart instead of a matrix file
    #[arg(long)]
    standard_chart: bool,

    /// Workbook output path
    #[arg(long)]
    workbook: Option<PathBuf>,

    /// Scatter plot output path (SVG)
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Rows per ranked view
    #[arg(long)]
    top: Option<usize>,

    /// Do not print the ranked views
    #[arg(long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    fn resolve_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => ReportConfig::default(),
        };

        if let Some(creatures) = &self.creatures {
            config.creatures = creatures.clone();
        }
        if let Some(matrix) = &self.matrix {
            config.matrix = matrix.clone();
            config.standard_chart = false;
        }
        if self.standard_chart {
            config.standard_chart = true;
        }
        if let Some(workbook) = &self.workbook {
            config.workbook = workbook.clone();
        }
        if let Some(plot) = &self.plot {
            config.plot = plot.clone();
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting kazam-report v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.resolve_config()?;

    let summary = if cli.quiet {
        kazam_report::run(&config, &mut std::io::sink())?
    } else {
        kazam_report::run(&config, &mut std::io::stdout().lock())?
    };

    tracing::info!(
        loaded = summary.loaded,
        enriched = summary.enriched,
        workbook = %summary.workbook.display(),
        plot = %summary.plot.display(),
        "Report complete"
    );

    Ok(())
}
