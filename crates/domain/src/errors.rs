use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid rule source: {0}")]
    InvalidRuleSource(String),

    #[error("Invalid resolver set: {0}")]
    InvalidResolverSet(String),

    #[error("Download of {url} failed: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Release metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("Release metadata has no usable asset: {0}")]
    InvalidMetadata(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Failed to write merged file {path}: {reason}")]
    MergeWriteFailed { path: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
