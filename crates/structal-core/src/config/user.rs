use crate::config::environment::EnvironmentAccessor;
use crate::core::io::xml::XmlWriter;
use std::fmt;
use std::io;
use std::path::{MAIN_SEPARATOR, Path};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Key for the local PDB mirror directory, as a property override or an
/// environment variable.
pub const PDB_DIR: &str = "PDB_DIR";

/// Key for the derived-data cache directory, as a property override or an
/// environment variable.
pub const CACHE_DIR: &str = "CACHE_DIR";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown file format: '{0}' (expected 'PDB' or 'mmCif')")]
pub struct ParseFileFormatError(String);

/// On-disk format of cached structure files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    /// Legacy PDB flat files.
    #[default]
    Pdb,
    /// mmCIF files.
    MmCif,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileFormat::Pdb => "PDB",
            FileFormat::MmCif => "mmCif",
        })
    }
}

impl FromStr for FileFormat {
    type Err = ParseFileFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PDB" => Ok(FileFormat::Pdb),
            "mmCif" => Ok(FileFormat::MmCif),
            other => Err(ParseFileFormatError(other.to_string())),
        }
    }
}

/// Startup-time parameters from which a [`UserConfig`] can be derived.
///
/// This is a one-way source: values flow from here into a resolved
/// configuration, never back.
#[derive(Debug, Clone, Default)]
pub struct StartupParameters {
    /// Explicit PDB directory; when absent the resolved default is kept.
    pub pdb_file_path: Option<String>,
    pub auto_fetch: bool,
    pub split: bool,
    pub file_format: FileFormat,
}

/// The resolved user configuration: where cached reference data lives and how
/// it is organized.
///
/// Both directory paths are resolved once, at construction, through the same
/// three-tier precedence (property override, environment variable, system
/// default) and always carry exactly one trailing path separator. The fields
/// may be mutated afterwards through the raw setters; setters do not
/// re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pdb_file_path: String,
    cache_file_path: String,
    split: bool,
    auto_fetch: bool,
    file_format: FileFormat,
}

impl UserConfig {
    /// Resolves a configuration against the real process environment.
    pub fn new() -> Self {
        Self::resolve(&crate::config::environment::ProcessEnvironment::new())
    }

    /// Resolves a configuration against the given environment.
    ///
    /// The PDB directory is resolved first (override, then environment
    /// variable, then the system temp directory); the cache directory is
    /// resolved through the same chain except that its default is the
    /// already-resolved PDB directory. Resolution never fails: unusable
    /// candidates downgrade to the system temp directory with a warning.
    pub fn resolve(env: &impl EnvironmentAccessor) -> Self {
        let pdb_file_path = resolve_pdb_dir(env);
        let cache_file_path = resolve_cache_dir(env, &pdb_file_path);

        Self {
            pdb_file_path,
            cache_file_path,
            split: true,
            auto_fetch: true,
            file_format: FileFormat::Pdb,
        }
    }

    /// Derives a configuration from startup parameters.
    ///
    /// Starts from [`resolve`](Self::resolve) and overwrites the PDB path
    /// (normalized), the fetch flag, the split flag, and the file format from
    /// `params`. The cache path keeps its independently resolved value.
    pub fn from_startup_parameters(
        params: &StartupParameters,
        env: &impl EnvironmentAccessor,
    ) -> Self {
        let mut config = Self::resolve(env);
        if let Some(path) = &params.pdb_file_path {
            config.pdb_file_path = ensure_trailing_separator(path.clone());
        }
        config.auto_fetch = params.auto_fetch;
        config.split = params.split;
        config.file_format = params.file_format;
        config
    }

    pub fn pdb_file_path(&self) -> &str {
        &self.pdb_file_path
    }

    pub fn set_pdb_file_path(&mut self, path: impl Into<String>) {
        self.pdb_file_path = path.into();
    }

    pub fn cache_file_path(&self) -> &str {
        &self.cache_file_path
    }

    pub fn set_cache_file_path(&mut self, path: impl Into<String>) {
        self.cache_file_path = path.into();
    }

    pub fn is_split(&self) -> bool {
        self.split
    }

    pub fn set_split(&mut self, split: bool) {
        self.split = split;
    }

    pub fn auto_fetch(&self) -> bool {
        self.auto_fetch
    }

    pub fn set_auto_fetch(&mut self, auto_fetch: bool) {
        self.auto_fetch = auto_fetch;
    }

    pub fn file_format(&self) -> FileFormat {
        self.file_format
    }

    pub fn set_file_format(&mut self, file_format: FileFormat) {
        self.file_format = file_format;
    }

    /// Serializes the configuration as its fixed XML document.
    ///
    /// The `path` attribute is omitted when the PDB path equals the system
    /// temp directory: the ambient default is not a meaningful override worth
    /// persisting. Sink failures propagate.
    pub fn write_xml(
        &self,
        env: &impl EnvironmentAccessor,
        xw: &mut impl XmlWriter,
    ) -> io::Result<()> {
        xw.print_raw("<?xml version='1.0' standalone='no' ?>")?;
        xw.open_tag("JFatCatConfig")?;
        xw.open_tag("PDBFILEPATH")?;

        let temp_dir = normalized_temp_dir(env);
        if self.pdb_file_path != temp_dir {
            xw.attribute("path", &self.pdb_file_path)?;
        }
        xw.attribute("split", &self.split.to_string())?;
        xw.attribute("autofetch", &self.auto_fetch.to_string())?;
        xw.attribute("fileFormat", &self.file_format.to_string())?;

        xw.close_tag("PDBFILEPATH")?;
        xw.close_tag("JFatCatConfig")?;
        Ok(())
    }

    /// Renders the XML document to a string via [`PrettyXmlWriter`].
    ///
    /// [`PrettyXmlWriter`]: crate::core::io::xml::PrettyXmlWriter
    pub fn to_xml_string(&self, env: &impl EnvironmentAccessor) -> io::Result<String> {
        let mut xw = crate::core::io::xml::PrettyXmlWriter::new(Vec::new());
        self.write_xml(env, &mut xw)?;
        String::from_utf8(xw.into_inner())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_pdb_dir(env: &impl EnvironmentAccessor) -> String {
    let path = match candidate_from(env, PDB_DIR) {
        Some((candidate, source)) => validate_or_temp(env, PDB_DIR, candidate, source),
        None => {
            let temp = temp_dir_string(env);
            info!(
                "No {} property override or environment variable set, using system temp directory {}",
                PDB_DIR, temp
            );
            temp
        }
    };
    ensure_trailing_separator(path)
}

fn resolve_cache_dir(env: &impl EnvironmentAccessor, pdb_file_path: &str) -> String {
    match candidate_from(env, CACHE_DIR) {
        Some((candidate, source)) => {
            ensure_trailing_separator(validate_or_temp(env, CACHE_DIR, candidate, source))
        }
        None => {
            info!(
                "No {} property override or environment variable set, using PDB directory {}",
                CACHE_DIR, pdb_file_path
            );
            pdb_file_path.to_string()
        }
    }
}

/// Pulls a candidate path from the first source that has one, with the source
/// name for diagnostics. Does not validate.
fn candidate_from(env: &impl EnvironmentAccessor, key: &str) -> Option<(String, &'static str)> {
    if let Some(value) = env.property(key) {
        debug!("Read dir from property override {}: {}", key, value);
        return Some((value, "property override"));
    }
    if let Some(value) = env.env_var(key) {
        debug!("Read dir from environment variable {}: {}", key, value);
        return Some((value, "environment variable"));
    }
    None
}

/// Keeps a tier-1/2 candidate only if it names an existing, writable
/// directory; otherwise downgrades to the system temp directory.
fn validate_or_temp(
    env: &impl EnvironmentAccessor,
    key: &str,
    candidate: String,
    source: &str,
) -> String {
    let dir = Path::new(&candidate);
    if !dir.is_dir() {
        let temp = temp_dir_string(env);
        warn!(
            "Provided path {} (from {} {}) is not a directory, using system temp directory {} instead",
            candidate, source, key, temp
        );
        return temp;
    }
    if tempfile::tempfile_in(dir).is_err() {
        let temp = temp_dir_string(env);
        warn!(
            "Provided path {} (from {} {}) is not writable, using system temp directory {} instead",
            candidate, source, key, temp
        );
        return temp;
    }
    candidate
}

fn temp_dir_string(env: &impl EnvironmentAccessor) -> String {
    env.temp_dir().to_string_lossy().into_owned()
}

fn normalized_temp_dir(env: &impl EnvironmentAccessor) -> String {
    ensure_trailing_separator(temp_dir_string(env))
}

fn ensure_trailing_separator(mut path: String) -> String {
    if !path.ends_with(MAIN_SEPARATOR) {
        path.push(MAIN_SEPARATOR);
    }
    path
}
