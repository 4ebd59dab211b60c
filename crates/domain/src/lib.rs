//! Ferrous SplitDNS Domain Layer
pub mod category;
pub mod config;
pub mod converted_file;
pub mod directive;
pub mod errors;
pub mod merge;
pub mod resolver_set;
pub mod rule_source;
pub mod validators;

pub use category::Category;
pub use config::{CliOverrides, Config, ConfigError};
pub use converted_file::ConvertedFile;
pub use directive::{transform_line, DedupKey, Directive};
pub use errors::DomainError;
pub use merge::{MergeBuilder, MergeStats, MergedArtifact, RECOMMENDED_UPSTREAMS};
pub use resolver_set::ResolverSet;
pub use rule_source::{RuleSource, SourceRegistry};
