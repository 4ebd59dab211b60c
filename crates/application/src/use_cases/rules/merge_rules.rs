use chrono::{Local, NaiveDateTime};
use ferrous_splitdns_domain::{
    Category, DomainError, MergeBuilder, MergeStats, ResolverSet, SourceRegistry,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::RuleFileStore;

/// Builds the merged upstream file from every converted file present.
///
/// Domestic files are merged before foreign ones and a domain pattern is
/// kept only the first time it appears. Failing to write the result is
/// the only error this returns.
pub struct MergeRulesUseCase {
    store: Arc<dyn RuleFileStore>,
}

impl MergeRulesUseCase {
    pub fn new(store: Arc<dyn RuleFileStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        registry: &SourceRegistry,
        domestic: &ResolverSet,
        foreign: &ResolverSet,
    ) -> Result<MergeStats, DomainError> {
        self.execute_at(registry, domestic, foreign, Local::now().naive_local())
            .await
    }

    #[instrument(skip_all)]
    pub async fn execute_at(
        &self,
        registry: &SourceRegistry,
        domestic: &ResolverSet,
        foreign: &ResolverSet,
        generated_at: NaiveDateTime,
    ) -> Result<MergeStats, DomainError> {
        let mut merge = MergeBuilder::new(generated_at);

        for category in Category::ALL {
            let resolvers = match category {
                Category::Domestic => domestic,
                Category::Foreign => foreign,
            };
            merge.begin_section(category, resolvers);

            for source in registry.by_category(category) {
                let converted_name = source.converted_file_name();
                match self.store.read_converted(&converted_name).await {
                    Ok(Some(content)) => {
                        let kept =
                            merge.add_file(category, source.raw_file_name(), content.lines());
                        debug!(file = %converted_name, kept, "Converted file merged");
                    }
                    Ok(None) => {
                        warn!(
                            file = %converted_name,
                            "Converted file missing, leaving it out of the merge"
                        );
                    }
                    Err(e) => {
                        warn!(
                            file = %converted_name,
                            error = %e,
                            "Failed to read converted file, leaving it out of the merge"
                        );
                    }
                }
            }
        }

        let artifact = merge.finish();
        self.store.write_merged(&artifact.content).await?;

        info!(
            output = %self.store.merged_location(),
            domestic = artifact.stats.domestic,
            foreign = artifact.stats.foreign,
            unique = artifact.stats.unique,
            "Merged upstream file written"
        );

        Ok(artifact.stats)
    }
}
