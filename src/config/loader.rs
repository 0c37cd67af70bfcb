use super::types::EsdrasConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "./esdras.yaml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// An explicit path must exist and parse. Default locations are tried in
    /// order and skipped with a warning when broken.
    pub fn load_with_custom_path(custom_path: Option<&Path>) -> Result<EsdrasConfig> {
        if let Some(path) = custom_path {
            if !path.exists() {
                anyhow::bail!("Config file not found: {:?}", path);
            }
            return Self::load_from_file(path)
                .with_context(|| format!("Failed to load config from custom path: {:?}", path));
        }

        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from: {:?}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {:#}", path, e);
                        continue;
                    }
                }
            }
        }

        tracing::info!("No configuration file found, using default settings");
        Ok(EsdrasConfig::default())
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(proj_dirs) = ProjectDirs::from("io", "esdras", "esdras") {
            paths.push(proj_dirs.config_dir().join("config.yaml"));
        }
        paths
    }

    fn load_from_file(path: &Path) -> Result<EsdrasConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: EsdrasConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {:?}", path))?;

        Self::validate_config(&config)?;

        Ok(config)
    }

    pub fn validate_config(config: &EsdrasConfig) -> Result<()> {
        if config.scanner.command.trim().is_empty() {
            anyhow::bail!("scanner command cannot be empty");
        }

        if config.scanner.min_rate == 0 {
            anyhow::bail!("scanner min_rate must be greater than 0");
        }

        if config.report.title.trim().is_empty() {
            anyhow::bail!("report title cannot be empty");
        }

        Ok(())
    }
}
