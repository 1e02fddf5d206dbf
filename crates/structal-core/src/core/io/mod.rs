//! Provides output functionality for the textual interchange formats used by
//! the toolkit.
//!
//! This module contains the FASTA sequence writer and the tag-stream XML
//! writer used to persist resolved configurations. Both write to any
//! `std::io::Write` sink and propagate sink errors to the caller.

pub mod fasta;
pub mod xml;
