use async_trait::async_trait;
use bytes::Bytes;
use ferrous_splitdns_domain::DomainError;

/// One HTTP GET, no retries. Non-2xx responses are errors.
#[async_trait]
pub trait RuleDownloader: Send + Sync {
    async fn download(&self, url: &str, bearer_token: Option<&str>) -> Result<Bytes, DomainError>;
}
