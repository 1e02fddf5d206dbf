//! # Structal Core Library
//!
//! Utilities shared by structure-alignment tooling: exporting biological
//! sequences to the FASTA interchange format, and resolving where locally
//! cached reference data (PDB files and derived caches) lives on disk.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`SequenceRecord`)
//!   and I/O primitives: the FASTA writer and the tag-stream XML writer.
//!
//! - **[`config`]: Environment-derived state.** The `UserConfig` value object,
//!   its layered resolution against property overrides / environment
//!   variables / system defaults, and its XML persistence format. All ambient
//!   process state is reached through an injected
//!   [`EnvironmentAccessor`](config::environment::EnvironmentAccessor)
//!   capability, so resolution is deterministic under test.

pub mod config;
pub mod core;
