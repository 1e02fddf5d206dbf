//! Resolution and persistence of the user configuration.
//!
//! The configuration answers one question: where do locally cached PDB files
//! and derived data live on disk? Each directory is resolved through the same
//! three-tier precedence (explicit property override, environment variable,
//! system default), with unusable candidates downgraded to the system temp
//! directory. Ambient process state is reached only through the
//! [`environment::EnvironmentAccessor`] capability so the chain is
//! deterministic under test.

pub mod environment;
pub mod user;

pub use environment::{EnvironmentAccessor, ProcessEnvironment};
pub use user::{CACHE_DIR, FileFormat, PDB_DIR, StartupParameters, UserConfig};
