use std::borrow::Cow;

/// The writer-facing view of a biological sequence.
///
/// The FASTA writer is agnostic to how sequences are represented internally
/// (compound sets, alphabets, annotations); all it requires is the residue
/// sequence in its stringified form. Implement this trait on richer sequence
/// types to make them exportable.
pub trait ResidueSequence {
    /// Returns the residue sequence as a string, in residue order.
    ///
    /// Implementations backed by a plain `String` should return a borrowed
    /// `Cow` to avoid copying on every export.
    fn residues(&self) -> Cow<'_, str>;
}

/// A minimal owned sequence: an identifier plus its residue string.
///
/// This is the concrete type used by the CLI and by tests; library consumers
/// with their own sequence representation implement [`ResidueSequence`]
/// directly instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Identifier used by header formatters (e.g. an accession).
    pub id: String,
    /// The residue sequence, one character per residue.
    pub residues: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }
}

impl ResidueSequence for SequenceRecord {
    fn residues(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.residues)
    }
}
