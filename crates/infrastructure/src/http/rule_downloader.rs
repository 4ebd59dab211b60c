use async_trait::async_trait;
use bytes::Bytes;
use ferrous_splitdns_application::ports::RuleDownloader;
use ferrous_splitdns_domain::DomainError;
use tracing::debug;

/// Single-attempt GET of one rule file; retries live in the fetch use case.
pub struct HttpRuleDownloader {
    client: reqwest::Client,
}

impl HttpRuleDownloader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RuleDownloader for HttpRuleDownloader {
    async fn download(&self, url: &str, bearer_token: Option<&str>) -> Result<Bytes, DomainError> {
        let mut request = self.client.get(url);
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| DomainError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::DownloadFailed {
                url: url.to_string(),
                reason: format!("read error: {}", e),
            })?;

        debug!(
            url,
            bytes = body.len(),
            authenticated = bearer_token.is_some(),
            "Rule file fetched"
        );
        Ok(body)
    }
}
