pub mod rules;

pub use rules::{
    ConvertOutcome, ConvertRulesUseCase, FetchOutcome, FetchReport, FetchRulesUseCase,
    MergeRulesUseCase, ResolveReleaseBaseUseCase, RetryPolicy, SourceLabel, SyncReport,
    SyncRequest, SyncRulesUseCase,
};
