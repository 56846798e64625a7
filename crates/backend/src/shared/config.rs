use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {}:{}: {}", self.host, self.port, e))?;
        Ok(addr)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Параметры импорта каталога из CSV
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    pub csv_path: String,
    pub delimiter: String,
    /// Перезагружать каталог при старте сервера
    pub reload_on_start: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            csv_path: "combined_data.csv".to_string(),
            delimiter: ",".to_string(),
            reload_on_start: true,
        }
    }
}

impl ImportConfig {
    /// Разделитель должен быть ровно одним ASCII-символом
    pub fn delimiter_byte(&self) -> anyhow::Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => anyhow::bail!(
                "import.delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AssetsConfig {
    pub logo_path: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            logo_path: "logo.png".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 5000

[database]
path = "target/db/furniture_production.db"

[import]
csv_path = "combined_data.csv"
delimiter = ","
reload_on_start = true

[assets]
logo_path = "logo.png"
"#;

fn candidate_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));

    paths
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.import.delimiter_byte()?;
    Ok(config)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for development)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_config_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(db_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/furniture_production.db");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.import.csv_path, "combined_data.csv");
        assert!(config.import.reload_on_start);
        assert_eq!(config.assets.logo_path, "logo.png");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[database]\npath = \"/tmp/shop.db\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.import.delimiter_byte().unwrap(), b',');
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/tmp/shop.db")
        );
    }

    #[test]
    fn test_delimiter_must_be_single_char() {
        let toml = "[database]\npath = \"a.db\"\n[import]\ndelimiter = \";;\"\n";
        assert!(parse_config(toml).is_err());

        let toml = "[database]\npath = \"a.db\"\n[import]\ndelimiter = \";\"\n";
        let config = parse_config(toml).unwrap();
        assert_eq!(config.import.delimiter_byte().unwrap(), b';');
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 8080);
    }
}
