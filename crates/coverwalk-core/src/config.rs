//! Layered configuration: defaults, then an optional TOML file, then
//! `COVERWALK_`-prefixed environment variables.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::search::{SearchConfig, ThreadConfig};

/// Tunables for a solver run that callers may supply from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Worker threads for the search pool; `None` sizes the pool from the
    /// CPU count.
    pub threads: Option<usize>,
}

impl CoreConfig {
    /// Loads configuration, layering an optional TOML file and the
    /// environment over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a layer fails to parse or a value has
    /// the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config = figment.merge(Env::prefixed("COVERWALK_")).extract()?;
        Ok(config)
    }

    /// Converts into the search engine's configuration.
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        let threads = match self.threads {
            Some(n) => ThreadConfig::Fixed(n),
            None => ThreadConfig::Auto,
        };
        SearchConfig::new().with_threads(threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::default();
        assert_eq!(config.threads, None);
        assert_eq!(config.search_config().threads, ThreadConfig::Auto);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coverwalk.toml");
        std::fs::write(&path, "threads = 3\n").unwrap();

        let config = CoreConfig::load(Some(&path)).unwrap();
        assert_eq!(config.threads, Some(3));
        assert_eq!(config.search_config().threads, ThreadConfig::Fixed(3));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = CoreConfig::load(Some(Path::new("/nonexistent/coverwalk.toml"))).unwrap();
        assert_eq!(config, CoreConfig::default());
    }
}
