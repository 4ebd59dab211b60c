use ferrous_splitdns_domain::{Category, ConvertedFile, ResolverSet, RuleSource, SourceRegistry};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::ports::RuleFileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    Converted { directives: usize },
    SkippedMissing,
    Failed(String),
}

impl ConvertOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, ConvertOutcome::Converted { .. })
    }
}

/// Rewrites raw rule files into AdGuard Home upstream directives.
///
/// Missing or unreadable inputs are logged and skipped; they never abort
/// the run.
pub struct ConvertRulesUseCase {
    store: Arc<dyn RuleFileStore>,
}

impl ConvertRulesUseCase {
    pub fn new(store: Arc<dyn RuleFileStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, source: &RuleSource, resolvers: &ResolverSet) -> ConvertOutcome {
        let raw_name = source.raw_file_name();
        let converted_name = source.converted_file_name();

        let raw = match self.store.read_raw(raw_name).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                warn!(file = raw_name, "Raw rule file missing, skipping conversion");
                if let Err(e) = self.store.remove_converted(&converted_name).await {
                    debug!(
                        file = %converted_name,
                        error = %e,
                        "Could not remove stale converted file"
                    );
                }
                return ConvertOutcome::SkippedMissing;
            }
            Err(e) => {
                error!(file = raw_name, error = %e, "Failed to read raw rule file");
                return ConvertOutcome::Failed(e.to_string());
            }
        };

        let converted = ConvertedFile::render(raw_name, resolvers, raw.lines());

        match self
            .store
            .write_converted(&converted_name, &converted.content)
            .await
        {
            Ok(()) => {
                info!(
                    file = raw_name,
                    output = %converted_name,
                    directives = converted.directives,
                    resolvers = %resolvers,
                    "Rule file converted"
                );
                ConvertOutcome::Converted {
                    directives: converted.directives,
                }
            }
            Err(e) => {
                error!(file = %converted_name, error = %e, "Failed to write converted file");
                ConvertOutcome::Failed(e.to_string())
            }
        }
    }

    pub async fn execute_all(
        &self,
        registry: &SourceRegistry,
        domestic: &ResolverSet,
        foreign: &ResolverSet,
    ) -> Vec<(RuleSource, ConvertOutcome)> {
        let mut outcomes = Vec::with_capacity(registry.len());
        for source in registry.sources() {
            let resolvers = match source.category {
                Category::Domestic => domestic,
                Category::Foreign => foreign,
            };
            let outcome = self.execute(source, resolvers).await;
            outcomes.push((source.clone(), outcome));
        }

        let converted = outcomes.iter().filter(|(_, o)| o.is_converted()).count();
        info!(converted, total = outcomes.len(), "Conversion finished");
        outcomes
    }
}
