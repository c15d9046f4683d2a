use crate::index::types::CONTEXT_RADIUS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Service configuration, optionally read from a JSON file
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listen port
    pub port: u16,

    /// HTTP listen address
    pub bind_address: IpAddr,

    /// Complete-works text searched for substrings
    pub corpus_path: PathBuf,

    /// Quote CSV searched by whole word
    pub quotes_path: PathBuf,

    /// Skip the first CSV row
    pub quotes_has_header: bool,

    /// Directory served at `/`; ignored if it does not exist
    pub static_dir: PathBuf,

    /// Bytes of corpus kept on each side of a context match
    pub context_radius: usize,

    /// Corpora at least this many bytes are sorted in parallel
    pub parallel_sort_threshold: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            corpus_path: PathBuf::from("completeworks.txt"),
            quotes_path: PathBuf::from("completeworkssorted.csv"),
            quotes_has_header: false,
            static_dir: PathBuf::from("static"),
            context_radius: CONTEXT_RADIUS,
            parallel_sort_threshold: 100_000,
        }
    }
}

impl ServiceConfig {
    /// Load config from `path`, or return the defaults if no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ServiceConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
