use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "crmseed";
const CONNECTION_FILE: &str = "connection.yaml";

/// Optional on-disk connection settings. Every field may be omitted;
/// missing fields fall back to CLI flags or built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Return the application config directory path, creating it if missing.
pub fn get_app_config_path() -> Result<PathBuf> {
    let mut path = if cfg!(target_os = "macos") {
        dirs_next::home_dir().map(|h| h.join(".config"))
    } else {
        dirs_next::config_dir()
    }
    .ok_or_else(|| anyhow::anyhow!("failed to find os config dir."))?;

    path.push(APP_NAME);
    fs::create_dir_all(&path)?;
    Ok(path)
}

fn connection_path() -> Result<PathBuf> {
    Ok(get_app_config_path()?.join(CONNECTION_FILE))
}

/// Load the connection file. Returns None if it does not exist.
pub fn load_connection() -> Result<Option<ConnectionConfig>> {
    let path = connection_path()?;
    if !Path::new(&path).exists() {
        return Ok(None);
    }
    let data = fs::read(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: ConnectionConfig = serde_yaml::from_slice(&data)
        .with_context(|| format!("failed to parse YAML at {}", path.display()))?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_connection_file() {
        let yaml = "database: crm\nhost: db.internal\nport: 5433\n";
        let config: ConnectionConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.database.as_deref(), Some("crm"));
        assert_eq!(config.host.as_deref(), Some("db.internal"));
        assert_eq!(config.port, Some(5433));
        assert!(config.user.is_none());
        assert!(config.password.is_none());
    }

    #[test]
    fn parses_empty_document_as_all_defaults() {
        let config: ConnectionConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.database.is_none());
        assert!(config.port.is_none());
    }
}
