//! Fundamental building blocks: sequence data models and the I/O primitives
//! (FASTA and XML writers) built on top of them.

pub mod io;
pub mod models;
