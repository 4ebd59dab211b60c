use async_trait::async_trait;
use ferrous_splitdns_application::ports::ReleaseMetadataPort;
use ferrous_splitdns_domain::DomainError;
use serde::Deserialize;
use tracing::debug;

const GITHUB_JSON: &str = "application/vnd.github+json";

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseInfo {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    #[serde(default)]
    pub browser_download_url: Option<String>,
}

/// Drops the last path segment of the first asset URL found:
/// `.../releases/download/<tag>/geoip.dat` becomes `.../releases/download/<tag>/`.
pub fn download_base_from_release(release: &ReleaseInfo) -> Option<String> {
    let url = release
        .assets
        .iter()
        .find_map(|asset| asset.browser_download_url.as_deref())?;
    let (prefix, _) = url.rsplit_once('/')?;
    if prefix.is_empty() {
        return None;
    }
    Some(format!("{}/", prefix))
}

/// Reads the latest-release endpoint of the GitHub REST API.
pub struct GithubReleaseClient {
    client: reqwest::Client,
    api_url: String,
}

impl GithubReleaseClient {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl ReleaseMetadataPort for GithubReleaseClient {
    async fn latest_download_base(&self, token: Option<&str>) -> Result<String, DomainError> {
        let mut request = self.client.get(&self.api_url).header("Accept", GITHUB_JSON);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::MetadataUnavailable(format!("{}: {}", self.api_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::MetadataUnavailable(format!(
                "{} returned HTTP {}",
                self.api_url,
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::MetadataUnavailable(format!("{}: {}", self.api_url, e)))?;

        let release: ReleaseInfo = serde_json::from_slice(&body)
            .map_err(|e| DomainError::InvalidMetadata(format!("malformed JSON: {}", e)))?;

        debug!(
            tag = release.tag_name.as_deref().unwrap_or("unknown"),
            assets = release.assets.len(),
            "Release metadata received"
        );

        download_base_from_release(&release).ok_or_else(|| {
            DomainError::InvalidMetadata("no asset carries a browser_download_url".to_string())
        })
    }
}
