use ferrous_splitdns_domain::{DomainError, MergeStats, ResolverSet, RuleSource, SourceRegistry};
use std::sync::Arc;
use tracing::info;

use super::{
    ConvertOutcome, ConvertRulesUseCase, FetchReport, FetchRulesUseCase, MergeRulesUseCase,
    ResolveReleaseBaseUseCase,
};

#[derive(Debug, Clone)]
pub struct SyncRequest {
    pub registry: SourceRegistry,
    pub domestic: ResolverSet,
    pub foreign: ResolverSet,
    pub token: Option<String>,
    pub strict_metadata: bool,
    pub mirror_only: bool,
}

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub download_base: Option<String>,
    pub fetch: FetchReport,
    pub conversions: Vec<(RuleSource, ConvertOutcome)>,
    pub merge: MergeStats,
}

/// Runs resolve, fetch, convert and merge one after another.
pub struct SyncRulesUseCase {
    resolve_base: Arc<ResolveReleaseBaseUseCase>,
    fetch: Arc<FetchRulesUseCase>,
    convert: Arc<ConvertRulesUseCase>,
    merge: Arc<MergeRulesUseCase>,
}

impl SyncRulesUseCase {
    pub fn new(
        resolve_base: Arc<ResolveReleaseBaseUseCase>,
        fetch: Arc<FetchRulesUseCase>,
        convert: Arc<ConvertRulesUseCase>,
        merge: Arc<MergeRulesUseCase>,
    ) -> Self {
        Self {
            resolve_base,
            fetch,
            convert,
            merge,
        }
    }

    pub async fn execute(&self, request: &SyncRequest) -> Result<SyncReport, DomainError> {
        let token = request.token.as_deref();

        let download_base = if request.mirror_only {
            info!("Mirror-only mode, skipping release metadata lookup");
            None
        } else {
            self.resolve_base
                .execute(token, request.strict_metadata)
                .await?
        };

        info!(files = request.registry.len(), "Downloading rule files");
        let fetch = self
            .fetch
            .execute_all(&request.registry, download_base.as_deref(), token)
            .await;

        info!(
            domestic = %request.domestic,
            foreign = %request.foreign,
            "Converting rule files"
        );
        let conversions = self
            .convert
            .execute_all(&request.registry, &request.domestic, &request.foreign)
            .await;

        let merge = self
            .merge
            .execute(&request.registry, &request.domestic, &request.foreign)
            .await?;

        Ok(SyncReport {
            download_base,
            fetch,
            conversions,
            merge,
        })
    }
}
