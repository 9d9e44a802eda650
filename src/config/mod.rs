use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_enforce_foreign_keys")]
    pub enforce_foreign_keys: bool,
}

fn default_separator_char() -> String {
    "|".to_string()
}
fn default_enforce_foreign_keys() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            enforce_foreign_keys: default_enforce_foreign_keys(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jobtrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".jobtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jobtrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("jobtrack.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or unparsable file warns and falls back to defaults so
    /// the user sees which store the session is about to touch.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    crate::ui::messages::warning(format!(
                        "Malformed config file {}: {e}. Using defaults.",
                        path.display()
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                crate::ui::messages::warning(format!(
                    "Could not read config file {}: {e}. Using defaults.",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    /// Verify that the config file parses and names an existing database.
    pub fn check() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found: {}. Run 'jobtrack init' first.",
                path.display()
            )));
        }
        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {e}")))?;
        Ok(cfg)
    }

    /// Initialize configuration and database files.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() {
                p
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            enforce_foreign_keys: default_enforce_foreign_keys(),
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("Failed to serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
