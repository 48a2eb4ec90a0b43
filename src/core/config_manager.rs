// src/core/config_manager.rs
//! Configuration loading: `config.yaml` sections per environment, with defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::FsOps;
use crate::resume_analysis::SkillVocabulary;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment_name: String,
    pub environment: EnvironmentConfig,
    pub vocabulary: SkillVocabulary,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvironmentConfig {
    pub upload_path: PathBuf,
    pub database_path: PathBuf,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-file upload limit in mebibytes
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<EnvironmentConfig>,
    #[serde(default)]
    production: Option<EnvironmentConfig>,
    #[serde(default)]
    skills: Option<Vec<String>>,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_mb() -> u64 {
    10
}

impl EnvironmentConfig {
    /// Built-in settings used when the config file has no section for `environment`
    pub fn defaults_for(environment: &str) -> Self {
        let base = if environment == "production" {
            PathBuf::from("/app")
        } else {
            PathBuf::new()
        };

        Self {
            upload_path: base.join("uploads"),
            database_path: base.join("ats.db"),
            address: if environment == "production" {
                "0.0.0.0".to_string()
            } else {
                default_address()
            },
            port: default_port(),
            max_upload_mb: default_max_upload_mb(),
            log_file: None,
        }
    }

    fn resolve_paths(mut self, root: &Path) -> Self {
        self.upload_path = resolve_path(root, &self.upload_path);
        self.database_path = resolve_path(root, &self.database_path);
        self.log_file = self.log_file.map(|p| resolve_path(root, &p));
        self
    }
}

fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

impl ConfigManager {
    /// Load configuration for the current environment.
    ///
    /// A missing file is not an error: built-in defaults apply. `ATS_PORT`
    /// overrides whatever port was configured.
    pub fn load(config_path: &Path) -> Result<Self> {
        let environment = Self::environment_name();
        let root = std::env::current_dir().context("Failed to get current directory")?;

        let content = if config_path.exists() {
            Some(std::fs::read_to_string(config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?)
        } else {
            None
        };

        let mut config = Self::from_yaml(content.as_deref(), &environment, &root)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        if let Ok(port) = std::env::var("ATS_PORT") {
            config.environment.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ATS_PORT must be a valid port number"))?;
        }

        app_log!(
            info,
            "Loaded configuration for environment: {} ({} skills)",
            config.environment_name,
            config.vocabulary.len()
        );
        Ok(config)
    }

    /// Build configuration from optional YAML text, relative paths resolved against `root`
    pub fn from_yaml(content: Option<&str>, environment: &str, root: &Path) -> Result<Self> {
        let file = match content {
            Some(text) => serde_yaml::from_str::<ConfigFile>(text)?,
            None => ConfigFile {
                local: None,
                production: None,
                skills: None,
            },
        };

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };
        let env_config = section
            .unwrap_or_else(|| EnvironmentConfig::defaults_for(environment))
            .resolve_paths(root);

        let vocabulary = match file.skills {
            Some(skills) => SkillVocabulary::new(skills),
            None => SkillVocabulary::default(),
        };
        if vocabulary.is_empty() {
            anyhow::bail!("Skill vocabulary is empty");
        }

        Ok(Self {
            environment_name: environment.to_string(),
            environment: env_config,
            vocabulary,
        })
    }

    fn environment_name() -> String {
        std::env::var("ATS_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Path of the generated CSV export inside the upload directory
    pub fn export_path(&self) -> PathBuf {
        self.environment
            .upload_path
            .join(crate::export::EXPORT_FILE_NAME)
    }

    /// Ensure all required directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.environment.upload_path).await?;

        if let Some(db_parent) = self.environment.database_path.parent() {
            FsOps::ensure_dir_exists(db_parent).await?;
        }

        Ok(())
    }
}
