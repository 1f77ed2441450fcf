use std::fs::File;
use std::path::{Path, PathBuf};

use kazam_dex::DexError;
use thiserror::Error;

mod creatures;
mod matrix;

pub use creatures::{REQUIRED_COLUMNS, read_creatures};
pub use matrix::read_matrix;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value on line {line}: {message}")]
    InvalidValue { line: u64, message: String },

    #[error(transparent)]
    Matrix(#[from] DexError),

    #[error("Empty input")]
    EmptyInput,
}

/// Read the creature dataset at `path`
pub fn read_creatures_path(path: impl AsRef<Path>) -> Result<Vec<kazam_dex::Creature>, ParseError> {
    let path = path.as_ref();
    let creatures = read_creatures(open(path)?)?;
    tracing::info!(path = %path.display(), rows = creatures.len(), "Loaded creature dataset");
    Ok(creatures)
}

/// Read the effectiveness matrix at `path`
pub fn read_matrix_path(
    path: impl AsRef<Path>,
) -> Result<kazam_dex::EffectivenessMatrix, ParseError> {
    let path = path.as_ref();
    let matrix = read_matrix(open(path)?)?;
    tracing::info!(path = %path.display(), types = matrix.len(), "Loaded effectiveness matrix");
    Ok(matrix)
}

fn open(path: &Path) -> Result<File, ParseError> {
    File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn reader<R: std::io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}
