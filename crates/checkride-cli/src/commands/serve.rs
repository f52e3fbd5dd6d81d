//! The `checkride serve` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use checkride_server::{CheckrideServer, ServerConfig};

/// On-disk configuration file, e.g.:
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8000
/// ```
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    server: ServerSection,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config in {}", path.display()))
}

pub async fn execute(host: Option<String>, port: Option<u16>, config: Option<PathBuf>) -> Result<()> {
    let file = match &config {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };

    // Flags win over the config file, the file over the defaults.
    let defaults = ServerConfig::default();
    let config = ServerConfig {
        host: host.or(file.server.host).unwrap_or(defaults.host),
        port: port.or(file.server.port).unwrap_or(defaults.port),
    };

    tracing::info!("starting checkride server on {}", config.addr());
    CheckrideServer::new(config).run().await?;
    Ok(())
}
