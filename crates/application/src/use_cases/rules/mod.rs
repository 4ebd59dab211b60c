mod convert_rules;
mod fetch_rules;
mod merge_rules;
mod resolve_release_base;
mod sync_rules;

pub use convert_rules::{ConvertOutcome, ConvertRulesUseCase};
pub use fetch_rules::{FetchOutcome, FetchReport, FetchRulesUseCase, RetryPolicy, SourceLabel};
pub use merge_rules::MergeRulesUseCase;
pub use resolve_release_base::ResolveReleaseBaseUseCase;
pub use sync_rules::{SyncReport, SyncRequest, SyncRulesUseCase};
