use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub log_level: Option<String>,
    pub tui: TuiConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// Constraints applied by the input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormConfig {
    pub title_min_length: usize,
    pub title_max_length: Option<usize>,
    pub description_min_length: usize,
    pub description_max_length: Option<usize>,
    pub count_min: Option<f64>,
    pub count_max: Option<f64>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title_min_length: 5,
            title_max_length: None,
            description_min_length: 5,
            description_max_length: None,
            count_min: None,
            count_max: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            tui: TuiConfig::default(),
            form: FormConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject settings that would make the form or the TUI unusable.
    pub fn validate(&self) -> Result<()> {
        if self.tui.tick_rate_ms == 0 {
            eyre::bail!("tui.tick-rate-ms must be > 0");
        }
        let form = &self.form;
        if form.title_max_length.is_some_and(|max| max < form.title_min_length) {
            eyre::bail!("form.title-max-length must be >= form.title-min-length");
        }
        if form.description_max_length.is_some_and(|max| max < form.description_min_length) {
            eyre::bail!("form.description-max-length must be >= form.description-min-length");
        }
        if let (Some(min), Some(max)) = (form.count_min, form.count_max)
            && max < min
        {
            eyre::bail!("form.count-max must be >= form.count-min");
        }
        Ok(())
    }
}
