use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "trackese.conf";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    pub registry_file: String,
    pub database: String,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: usize,
}

fn default_lookback_days() -> usize {
    3
}

impl Config {
    /// Defaults rooted at `home`.
    pub fn with_home(home: &Path) -> Self {
        Self {
            data_dir: home.join("attendance_data").to_string_lossy().to_string(),
            registry_file: home
                .join("batch_sections.json")
                .to_string_lossy()
                .to_string(),
            database: home.join("trackese.sqlite").to_string_lossy().to_string(),
            lookback_days: default_lookback_days(),
        }
    }

    /// Standard home directory: `~/.trackese` (`%APPDATA%\trackese` on Windows).
    pub fn default_home() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("trackese")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".trackese")
        }
    }

    pub fn config_file(home: &Path) -> PathBuf {
        home.join(CONFIG_FILE_NAME)
    }

    /// Load `<home>/trackese.conf`, or the defaults when it does not exist.
    pub fn load(home: &Path) -> AppResult<Self> {
        let path = Self::config_file(home);

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("failed to parse {}: {e}", path.display()))
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::with_home(home)),
            Err(e) => Err(AppError::Config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Write this configuration to `<home>/trackese.conf`.
    pub fn save(&self, home: &Path) -> AppResult<PathBuf> {
        fs::create_dir_all(home)?;
        let yaml = self.to_yaml()?;
        let path = Self::config_file(home);
        fs::write(&path, yaml)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))
    }

    pub fn data_dir_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn registry_path(&self) -> PathBuf {
        expand_tilde(&self.registry_file)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
