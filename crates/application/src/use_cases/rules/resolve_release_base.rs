use ferrous_splitdns_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::ports::ReleaseMetadataPort;

/// Looks up the download prefix of the latest rule release.
///
/// Without `strict`, a failed lookup degrades to mirror-only downloads.
pub struct ResolveReleaseBaseUseCase {
    metadata: Arc<dyn ReleaseMetadataPort>,
}

impl ResolveReleaseBaseUseCase {
    pub fn new(metadata: Arc<dyn ReleaseMetadataPort>) -> Self {
        Self { metadata }
    }

    #[instrument(skip(self, token))]
    pub async fn execute(
        &self,
        token: Option<&str>,
        strict: bool,
    ) -> Result<Option<String>, DomainError> {
        match self.metadata.latest_download_base(token).await {
            Ok(base) => {
                info!(base = %base, "Resolved release download base");
                Ok(Some(base))
            }
            Err(e) if strict => {
                error!(error = %e, "Release metadata lookup failed");
                Err(e)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "Release metadata unavailable, downloading from mirror only"
                );
                Ok(None)
            }
        }
    }
}
