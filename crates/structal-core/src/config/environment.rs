use std::collections::HashMap;
use std::path::PathBuf;

/// Read-only access to the process's configuration sources.
///
/// Directory resolution consults three sources in order: explicit property
/// overrides, environment variables, and the system temp directory. Keeping
/// them behind this capability lets tests supply all three deterministically
/// instead of mutating the real process environment.
pub trait EnvironmentAccessor {
    /// Looks up an explicit override set by the operator (the analogue of a
    /// `-D` system property).
    fn property(&self, key: &str) -> Option<String>;

    /// Looks up a process environment variable.
    fn env_var(&self, key: &str) -> Option<String>;

    /// The system temporary directory, the universal fallback.
    fn temp_dir(&self) -> PathBuf;
}

/// The production accessor: an explicit property map layered over the real
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment {
    properties: HashMap<String, String>,
}

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an explicit override for `key`, taking precedence over any
    /// environment variable of the same name.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }
}

impl EnvironmentAccessor for ProcessEnvironment {
    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_shadow_nothing_until_set() {
        let mut env = ProcessEnvironment::new();
        assert_eq!(env.property("PDB_DIR"), None);
        env.set_property("PDB_DIR", "/data/pdb");
        assert_eq!(env.property("PDB_DIR"), Some("/data/pdb".to_string()));
    }

    #[test]
    fn temp_dir_is_nonempty() {
        let env = ProcessEnvironment::new();
        assert!(!env.temp_dir().as_os_str().is_empty());
    }
}
