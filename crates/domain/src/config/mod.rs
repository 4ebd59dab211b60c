//! Configuration module for Ferrous SplitDNS
//!
//! Structures are organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `output`: Output directory layout
//! - `sources`: Rule file lists per category
//! - `resolvers`: Resolver addresses per category
//! - `fetch`: Release metadata, mirror and retry settings
//! - `logging`: Logging settings
//! - `summary`: Console summary settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod resolvers;
pub mod root;
pub mod sources;
pub mod summary;

pub use errors::ConfigError;
pub use fetch::FetchConfig;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use resolvers::ResolversConfig;
pub use root::{CliOverrides, Config};
pub use sources::SourcesConfig;
pub use summary::SummaryConfig;
