use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::fetch::FetchConfig;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::resolvers::ResolversConfig;
use super::sources::SourcesConfig;
use super::summary::SummaryConfig;
use crate::errors::DomainError;
use crate::resolver_set::{ResolverSet, DEFAULT_DOMESTIC_RESOLVER, DEFAULT_FOREIGN_RESOLVER};
use crate::rule_source::{RuleSource, SourceRegistry};

const LOCAL_CONFIG_PATH: &str = "ferrous-splitdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-splitdns/config.toml";

/// Main configuration structure for Ferrous SplitDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output directory layout
    pub output: OutputConfig,

    /// Rule files per category
    pub sources: SourcesConfig,

    /// Resolver addresses per category
    pub resolvers: ResolversConfig,

    /// Download behaviour
    pub fetch: FetchConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Console summary
    pub summary: SummaryConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-splitdns.toml in current directory
    /// 3. /etc/ferrous-splitdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.output_dir {
            self.output.root_dir = dir;
        }
        if let Some(token_file) = overrides.token_file {
            self.output.token_file = token_file;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if !overrides.domestic_resolvers.is_empty() {
            self.resolvers.domestic = overrides.domestic_resolvers;
        }
        if !overrides.foreign_resolvers.is_empty() {
            self.resolvers.foreign = overrides.foreign_resolvers;
        }
        if overrides.strict_metadata {
            self.fetch.strict_metadata = true;
        }
        if overrides.mirror_only {
            self.fetch.mirror_only = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "fetch.max_attempts must be at least 1".to_string(),
            ));
        }

        if self.fetch.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.request_timeout_secs cannot be 0".to_string(),
            ));
        }

        crate::validators::validate_url(&self.fetch.mirror_base_url)
            .map_err(|e| ConfigError::Validation(format!("fetch.mirror_base_url: {}", e)))?;

        if !self.fetch.mirror_only {
            crate::validators::validate_url(&self.fetch.release_api_url)
                .map_err(|e| ConfigError::Validation(format!("fetch.release_api_url: {}", e)))?;
        }

        if self.sources.domestic.is_empty() && self.sources.foreign.is_empty() {
            return Err(ConfigError::Validation(
                "No rule sources configured".to_string(),
            ));
        }

        for name in self.sources.domestic.iter().chain(&self.sources.foreign) {
            RuleSource::validate_name(name).map_err(ConfigError::Validation)?;
        }

        if self.output.root_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output.root_dir cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn registry(&self) -> Result<SourceRegistry, DomainError> {
        SourceRegistry::new(&self.sources.domestic, &self.sources.foreign)
    }

    pub fn domestic_resolvers(&self) -> Result<ResolverSet, DomainError> {
        ResolverSet::or_default(self.resolvers.domestic.clone(), DEFAULT_DOMESTIC_RESOLVER)
    }

    pub fn foreign_resolvers(&self) -> Result<ResolverSet, DomainError> {
        ResolverSet::or_default(self.resolvers.foreign.clone(), DEFAULT_FOREIGN_RESOLVER)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output_dir: Option<String>,
    pub token_file: Option<String>,
    pub log_level: Option<String>,
    pub domestic_resolvers: Vec<String>,
    pub foreign_resolvers: Vec<String>,
    pub strict_metadata: bool,
    pub mirror_only: bool,
}
