//! Defensive type report: load, enrich, rank, export, plot.
//!
//! The whole run is one forward pass over two input tables:
//!
//! ```text
//! Pokemon.csv ─┐
//!              ├─> enrich ─> rank x4 ─┬─> pkmn.xlsx
//! effMat.csv ──┘                      └─> vulnerability.svg
//! ```
//!
//! Each stage fails with a [`ReportError`] variant naming the stage.

pub mod config;
pub mod export;
pub mod plot;
pub mod table;

use std::io::Write;
use std::path::PathBuf;

use kazam_data::ParseError;
use kazam_dex::{DexError, EffectivenessMatrix, ViewKind};
use thiserror::Error;

pub use config::{ConfigError, ReportConfig};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Configuration failed")]
    Config(#[from] ConfigError),

    #[error("Load stage failed")]
    Load(#[from] ParseError),

    #[error("Enrich stage failed")]
    Enrich(#[from] DexError),

    #[error("Export stage failed: cannot write {path}")]
    Export {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Plot stage failed: cannot render {path}")]
    Plot {
        path: PathBuf,
        #[source]
        source: plot::DrawError,
    },

    #[error("Failed to print ranked views")]
    Output(#[source] std::io::Error),
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Rows in the creature file
    pub loaded: usize,
    /// Rows left after the exclusion filter
    pub enriched: usize,
    /// Names in each view, in rank order
    pub views: Vec<(ViewKind, Vec<String>)>,
    pub workbook: PathBuf,
    pub plot: PathBuf,
}

/// Load the effectiveness matrix named by the configuration
pub fn load_matrix(config: &ReportConfig) -> Result<EffectivenessMatrix, ReportError> {
    if config.standard_chart {
        tracing::info!("Using built-in type chart");
        return Ok(EffectivenessMatrix::standard());
    }
    Ok(kazam_data::read_matrix_path(&config.matrix)?)
}

/// Run the full report, printing the ranked views to `out`
pub fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<RunSummary, ReportError> {
    config.validate()?;

    let matrix = load_matrix(config)?;
    let creatures = kazam_data::read_creatures_path(&config.creatures)?;
    let loaded = creatures.len();

    let enriched = kazam_dex::enrich(creatures, &matrix, &config.rules())?;
    tracing::info!(creatures = enriched.len(), "Enriched collection");

    let views = kazam_dex::standard_views(&enriched, config.top_n);
    table::print_views(out, &views).map_err(ReportError::Output)?;

    export::write_workbook(&config.workbook, &enriched, &matrix, &views).map_err(|source| {
        ReportError::Export {
            path: config.workbook.clone(),
            source,
        }
    })?;

    plot::write_scatter(&config.plot, &views).map_err(|source| ReportError::Plot {
        path: config.plot.clone(),
        source,
    })?;

    Ok(RunSummary {
        loaded,
        enriched: enriched.len(),
        views: views
            .iter()
            .map(|(kind, view)| (*kind, view.iter().map(|c| c.name().to_string()).collect()))
            .collect(),
        workbook: config.workbook.clone(),
        plot: config.plot.clone(),
    })
}
