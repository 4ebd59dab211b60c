use ferrous_splitdns_domain::{DomainError, RuleSource, SourceRegistry};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::ports::{RuleDownloader, RuleFileStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLabel {
    Release,
    Mirror,
}

impl SourceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLabel::Release => "release",
            SourceLabel::Mirror => "mirror",
        }
    }
}

impl std::fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Delivered { source: SourceLabel, attempts: u32 },
    Exhausted { attempts: u32 },
}

impl FetchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, FetchOutcome::Delivered { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub outcomes: Vec<(RuleSource, FetchOutcome)>,
}

impl FetchReport {
    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_delivered()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_delivered(&self) -> bool {
        self.delivered() == self.total()
    }

    pub fn exhausted(&self) -> impl Iterator<Item = &RuleSource> {
        self.outcomes
            .iter()
            .filter(|(_, o)| !o.is_delivered())
            .map(|(s, _)| s)
    }
}

struct Candidate<'a> {
    label: SourceLabel,
    url: String,
    token: Option<&'a str>,
}

/// Downloads rule files, trying the release prefix first and the mirror
/// last, each up to `RetryPolicy::max_attempts` times.
pub struct FetchRulesUseCase {
    downloader: Arc<dyn RuleDownloader>,
    store: Arc<dyn RuleFileStore>,
    mirror_base: String,
    policy: RetryPolicy,
}

impl FetchRulesUseCase {
    pub fn new(
        downloader: Arc<dyn RuleDownloader>,
        store: Arc<dyn RuleFileStore>,
        mirror_base: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            downloader,
            store,
            mirror_base: with_trailing_slash(mirror_base.into()),
            policy,
        }
    }

    fn candidates<'a>(
        &self,
        file_name: &str,
        release_base: Option<&str>,
        token: Option<&'a str>,
    ) -> Vec<Candidate<'a>> {
        let mut candidates = Vec::with_capacity(2);
        if let Some(base) = release_base {
            candidates.push(Candidate {
                label: SourceLabel::Release,
                url: format!("{}{}", with_trailing_slash(base.to_string()), file_name),
                token,
            });
        }
        candidates.push(Candidate {
            label: SourceLabel::Mirror,
            url: format!("{}{}", self.mirror_base, file_name),
            token: None,
        });
        candidates
    }

    pub async fn execute(
        &self,
        source: &RuleSource,
        release_base: Option<&str>,
        token: Option<&str>,
    ) -> FetchOutcome {
        let file = source.raw_file_name();
        let max_attempts = self.policy.max_attempts;
        let mut attempts = 0;

        for candidate in self.candidates(file, release_base, token) {
            for attempt in 1..=max_attempts {
                attempts += 1;
                info!(
                    file,
                    source = %candidate.label,
                    attempt,
                    max_attempts,
                    "Downloading rule file"
                );

                match self.try_once(file, &candidate).await {
                    Ok(size) => {
                        info!(
                            file,
                            source = %candidate.label,
                            bytes = size,
                            "Rule file downloaded"
                        );
                        return FetchOutcome::Delivered {
                            source: candidate.label,
                            attempts,
                        };
                    }
                    Err(e) => {
                        warn!(
                            file,
                            source = %candidate.label,
                            attempt,
                            error = %e,
                            "Download attempt failed"
                        );
                        if attempt < max_attempts {
                            tokio::time::sleep(self.policy.backoff).await;
                        }
                    }
                }
            }
            warn!(file, source = %candidate.label, "Source exhausted");
        }

        error!(file, attempts, "Rule file could not be downloaded from any source");
        self.discard_stale(file).await;
        FetchOutcome::Exhausted { attempts }
    }

    pub async fn execute_all(
        &self,
        registry: &SourceRegistry,
        release_base: Option<&str>,
        token: Option<&str>,
    ) -> FetchReport {
        let mut report = FetchReport::default();
        for source in registry.sources() {
            let outcome = self.execute(source, release_base, token).await;
            report.outcomes.push((source.clone(), outcome));
        }

        if report.all_delivered() {
            info!(files = report.total(), "All rule files downloaded");
        } else {
            warn!(
                delivered = report.delivered(),
                total = report.total(),
                "Only part of the rule files were downloaded, continuing with the files present"
            );
        }
        report
    }

    async fn try_once(&self, file: &str, candidate: &Candidate<'_>) -> Result<usize, DomainError> {
        let body = self.downloader.download(&candidate.url, candidate.token).await?;
        self.store.store_raw(file, &body).await?;
        Ok(body.len())
    }

    /// A raw file left over from an earlier run must not be converted as
    /// if it were this run's download.
    async fn discard_stale(&self, file: &str) {
        if let Err(e) = self.store.remove_raw(file).await {
            debug!(file, error = %e, "Could not remove stale raw file");
        }
    }
}

fn with_trailing_slash(mut base: String) -> String {
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}
