use std::path::PathBuf;
use structal::core::io::fasta::FastaError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fasta(#[from] FastaError),

    #[error("Failed to parse '{path}' at line {line}: {message}", path = path.display())]
    InputParsing {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
