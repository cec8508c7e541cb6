//! Runtime configuration.

use std::path::PathBuf;

use anyhow::Result;

/// Explicit startup configuration, passed to the server instead of
/// process-wide constants.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP API.
    pub port: u16,
    /// Path of the flat catalog file.
    pub data_file: PathBuf,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    /// Resolve the default catalog path under the platform data directory.
    pub fn default_data_file() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "libris")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(dirs.data_dir().join("books.txt"))
    }

    /// Build a config from CLI values, falling back to the default catalog
    /// path when none was given.
    pub fn resolve(port: u16, data_file: Option<PathBuf>) -> Result<Self> {
        let data_file = match data_file {
            Some(path) => path,
            None => Self::default_data_file()?,
        };
        Ok(Self { port, data_file })
    }
}
