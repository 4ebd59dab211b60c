pub mod release_metadata;
pub mod rule_downloader;

pub use release_metadata::{
    download_base_from_release, GithubReleaseClient, ReleaseAsset, ReleaseInfo,
};
pub use rule_downloader::HttpRuleDownloader;

use ferrous_splitdns_domain::DomainError;
use std::time::Duration;

/// Shared client for metadata and rule downloads.
///
/// `timeout` bounds connecting and each read, not the whole transfer, so a
/// slow but steady body still completes.
pub fn build_http_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(user_agent)
        .connect_timeout(timeout)
        .read_timeout(timeout)
        .pool_max_idle_per_host(2)
        .build()
        .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}
