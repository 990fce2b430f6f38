use crate::errors::{AppError, AppResult};
use crate::i18n::{Catalog, Identity, Localizer};
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// CSV translation file (`source,translated`), relative to the config dir
    #[serde(default)]
    pub translations: Option<String>,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_color() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            language: default_language(),
            translations: None,
            color: default_color(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `ZKINDICATOR_HOME` overrides it.
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var("ZKINDICATOR_HOME")
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("zkindicator")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".zkindicator")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("zkindicator.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("zkindicator.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    /// ANSI output only when enabled and stdout is a terminal.
    pub fn use_color(&self) -> bool {
        self.color && std::io::stdout().is_terminal()
    }

    /// Separator used under table headers; falls back to '-' when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Build the localizer configured for this run: the translation catalog
    /// when one is set, identity otherwise.
    pub fn localizer(&self) -> AppResult<Box<dyn Localizer>> {
        match &self.translations {
            Some(file) if !file.trim().is_empty() => {
                let path = resolve_in(&Self::config_dir(), file);
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "translation file not found: {}",
                        path.display()
                    )));
                }
                Ok(Box::new(Catalog::load(&self.language, &path)?))
            }
            _ => Ok(Box::new(Identity)),
        }
    }

    /// Initialize configuration and database paths. In test mode the config
    /// file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        if let Some(name) = custom_db {
            config.database = resolve_in(&dir, &name).to_string_lossy().to_string();
        }

        if !is_test {
            let path = config.save()?;
            println!("✅ Config file: {:?}", path);
        }

        Ok(config)
    }
}
