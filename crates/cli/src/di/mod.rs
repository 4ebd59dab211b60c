use ferrous_splitdns_application::ports::RuleFileStore;
use ferrous_splitdns_application::use_cases::{
    ConvertRulesUseCase, FetchRulesUseCase, MergeRulesUseCase, ResolveReleaseBaseUseCase,
    RetryPolicy, SyncRulesUseCase,
};
use ferrous_splitdns_domain::Config;
use ferrous_splitdns_infrastructure::http::{
    build_http_client, GithubReleaseClient, HttpRuleDownloader,
};
use ferrous_splitdns_infrastructure::storage::FsRuleFileStore;
use std::sync::Arc;

pub struct Services {
    pub store: Arc<dyn RuleFileStore>,
    pub sync: Arc<SyncRulesUseCase>,
}

impl Services {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let fs_store = FsRuleFileStore::new(
            config.output.configs_path(),
            config.output.merged_path(),
        );
        fs_store.ensure_layout().await?;
        let store: Arc<dyn RuleFileStore> = Arc::new(fs_store);

        let client = build_http_client(&config.fetch.user_agent, config.fetch.request_timeout())?;
        let metadata = Arc::new(GithubReleaseClient::new(
            client.clone(),
            config.fetch.release_api_url.clone(),
        ));
        let downloader = Arc::new(HttpRuleDownloader::new(client));

        let policy = RetryPolicy::new(config.fetch.max_attempts, config.fetch.retry_backoff());

        let sync = Arc::new(SyncRulesUseCase::new(
            Arc::new(ResolveReleaseBaseUseCase::new(metadata)),
            Arc::new(FetchRulesUseCase::new(
                downloader,
                store.clone(),
                config.fetch.mirror_base_url.clone(),
                policy,
            )),
            Arc::new(ConvertRulesUseCase::new(store.clone())),
            Arc::new(MergeRulesUseCase::new(store.clone())),
        ));

        Ok(Self { store, sync })
    }
}
