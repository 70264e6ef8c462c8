use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "cleanbook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_PREVIEW_ROWS: usize = 100;
pub const MAX_PREVIEW_ROWS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_region: String,
    pub csv: CsvConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    pub preview_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_region: DEFAULT_REGION.to_string(),
            csv: CsvConfig {
                preview_rows: DEFAULT_PREVIEW_ROWS,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_region value: {0:?}")]
    InvalidDefaultRegion(String),
    #[error("invalid csv.preview_rows value: {0}")]
    InvalidPreviewRows(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_region: Option<String>,
    csv: Option<CsvFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CsvFile {
    preview_rows: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(region) = parsed.default_region {
        config.default_region = validate_region(&region)?;
    }

    if let Some(csv) = parsed.csv {
        if let Some(rows) = csv.preview_rows {
            if rows == 0 || rows > MAX_PREVIEW_ROWS {
                return Err(ConfigError::InvalidPreviewRows(rows));
            }
            config.csv.preview_rows = rows;
        }
    }

    Ok(config)
}

/// Trims a region code; codes are free-form but must be non-blank.
pub fn validate_region(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidDefaultRegion(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, resolve_config_path, validate_region, ConfigError,
        ConfigFile, CsvFile, DEFAULT_PREVIEW_ROWS, DEFAULT_REGION,
    };
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            default_region: Some(" ca ".to_string()),
            csv: Some(CsvFile {
                preview_rows: Some(25),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.default_region, "ca");
        assert_eq!(merged.csv.preview_rows, 25);
    }

    #[test]
    fn merge_config_defaults_when_empty() {
        let parsed = ConfigFile {
            default_region: None,
            csv: None,
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.default_region, DEFAULT_REGION);
        assert_eq!(merged.csv.preview_rows, DEFAULT_PREVIEW_ROWS);
    }

    #[test]
    fn merge_config_rejects_zero_preview_rows() {
        let parsed = ConfigFile {
            default_region: None,
            csv: Some(CsvFile {
                preview_rows: Some(0),
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPreviewRows(0)));
    }

    #[test]
    fn validate_region_rejects_blank() {
        assert!(validate_region("   ").is_err());
        assert_eq!(validate_region("INTL").expect("region"), "INTL");
    }

    #[test]
    fn resolve_config_path_rejects_empty_custom_path() {
        let err = resolve_config_path(Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfigPath(_)));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "default_region = \"CA\"\n[csv]\npreview_rows = 10\n")
            .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.default_region, "CA");
        assert_eq!(config.csv.preview_rows, 10);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "region = \"CA\"\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
