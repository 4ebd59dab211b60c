use async_trait::async_trait;
use ferrous_splitdns_domain::DomainError;

#[async_trait]
pub trait ReleaseMetadataPort: Send + Sync {
    /// Download prefix of the latest release, ending in `/`.
    async fn latest_download_base(&self, token: Option<&str>) -> Result<String, DomainError>;
}
