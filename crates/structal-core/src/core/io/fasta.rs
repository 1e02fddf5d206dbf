use crate::core::models::sequence::{ResidueSequence, SequenceRecord};
use std::io::{self, Write};
use thiserror::Error;

/// Default column width for wrapped residue lines.
pub const DEFAULT_LINE_LENGTH: usize = 60;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid line length: {0} (must be at least 1)")]
    InvalidLineLength(usize),
}

/// Strategy for producing the header line of a FASTA record.
///
/// The writer calls this once per sequence; the returned string is emitted
/// verbatim after the `>` marker. Implementations decide what a header looks
/// like (bare accession, pipe-delimited database fields, free-form
/// description), keeping that policy out of the writer itself.
pub trait HeaderFormat<S> {
    fn header(&self, sequence: &S) -> String;
}

/// Default header strategy: the record identifier, verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericHeaderFormat;

impl HeaderFormat<SequenceRecord> for GenericHeaderFormat {
    fn header(&self, sequence: &SequenceRecord) -> String {
        sequence.id.clone()
    }
}

/// Writes sequences to a sink in FASTA format.
///
/// One record per sequence, in iteration order: a `>`-prefixed header line,
/// then the residue string hard-wrapped at [`line_length`](Self::line_length)
/// bytes per line. No blank line separates records.
pub struct FastaWriter<F> {
    header_format: F,
    line_length: usize,
}

impl<F> FastaWriter<F> {
    pub fn new(header_format: F) -> Self {
        Self {
            header_format,
            line_length: DEFAULT_LINE_LENGTH,
        }
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Sets the wrap width for subsequent [`process`](Self::process) calls.
    ///
    /// Fails fast on a zero width rather than looping forever downstream.
    pub fn set_line_length(&mut self, line_length: usize) -> Result<(), FastaError> {
        if line_length == 0 {
            return Err(FastaError::InvalidLineLength(line_length));
        }
        self.line_length = line_length;
        Ok(())
    }

    /// Writes all sequences to `sink`, in iteration order.
    ///
    /// A sequence of byte length `L` produces `ceil(L / line_length)` body
    /// lines; every line except possibly the last is exactly `line_length`
    /// bytes. A zero-length sequence produces only its header line. Sink
    /// errors abort the write and propagate; no partial-write recovery is
    /// attempted.
    pub fn process<'a, S, W>(
        &self,
        sink: &mut W,
        sequences: impl IntoIterator<Item = &'a S>,
    ) -> Result<(), FastaError>
    where
        S: ResidueSequence + 'a,
        F: HeaderFormat<S>,
        W: Write,
    {
        for sequence in sequences {
            let header = self.header_format.header(sequence);
            sink.write_all(b">")?;
            sink.write_all(header.as_bytes())?;
            sink.write_all(b"\n")?;

            let residues = sequence.residues();
            for chunk in residues.as_bytes().chunks(self.line_length) {
                sink.write_all(chunk)?;
                sink.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
