use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_root_dir")]
    pub root_dir: String,

    /// Subdirectory of `root_dir` holding raw and converted rule files
    #[serde(default = "default_configs_dir")]
    pub configs_dir: String,

    /// Merged upstream file, relative to `root_dir`
    #[serde(default = "default_merged_file")]
    pub merged_file: String,

    /// Optional bearer token file, relative to `root_dir`
    #[serde(default = "default_token_file")]
    pub token_file: String,
}

impl OutputConfig {
    pub fn configs_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir).join(&self.configs_dir)
    }

    pub fn merged_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir).join(&self.merged_file)
    }

    pub fn token_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir).join(&self.token_file)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            configs_dir: default_configs_dir(),
            merged_file: default_merged_file(),
            token_file: default_token_file(),
        }
    }
}

fn default_root_dir() -> String {
    "china-list-config".to_string()
}

fn default_configs_dir() -> String {
    "configs".to_string()
}

fn default_merged_file() -> String {
    "chinalist-for-adguard.txt".to_string()
}

fn default_token_file() -> String {
    "token".to_string()
}
