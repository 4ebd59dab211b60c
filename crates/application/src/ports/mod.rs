mod release_metadata;
mod rule_downloader;
mod rule_file_store;

pub use release_metadata::ReleaseMetadataPort;
pub use rule_downloader::RuleDownloader;
pub use rule_file_store::RuleFileStore;
