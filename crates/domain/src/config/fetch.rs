use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Latest-release endpoint used to locate the primary download prefix
    #[serde(default = "default_release_api_url")]
    pub release_api_url: String,

    /// Token-free mirror, always tried last
    #[serde(default = "default_mirror_base_url")]
    pub mirror_base_url: String,

    /// Tries per source before moving to the next one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_retry_backoff_secs")]
    pub retry_backoff_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Abort the run when release metadata cannot be resolved
    #[serde(default)]
    pub strict_metadata: bool,

    /// Skip the metadata lookup and download from the mirror only
    #[serde(default)]
    pub mirror_only: bool,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl FetchConfig {
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_secs(self.retry_backoff_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            release_api_url: default_release_api_url(),
            mirror_base_url: default_mirror_base_url(),
            max_attempts: default_max_attempts(),
            retry_backoff_secs: default_retry_backoff_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            strict_metadata: false,
            mirror_only: false,
            user_agent: default_user_agent(),
        }
    }
}

fn default_release_api_url() -> String {
    "https://api.github.com/repos/Loyalsoldier/v2ray-rules-dat/releases/latest".to_string()
}

fn default_mirror_base_url() -> String {
    "https://cdn.jsdelivr.net/gh/Loyalsoldier/v2ray-rules-dat@release/".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_backoff_secs() -> u64 {
    2
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; ferrous-splitdns)".to_string()
}
