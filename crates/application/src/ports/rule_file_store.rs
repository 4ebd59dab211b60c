use async_trait::async_trait;
use ferrous_splitdns_domain::DomainError;

/// Raw, converted and merged files of one run.
///
/// Readers return `Ok(None)` when the file does not exist.
#[async_trait]
pub trait RuleFileStore: Send + Sync {
    /// Removes any previous copy, then writes `body` in one call.
    async fn store_raw(&self, file_name: &str, body: &[u8]) -> Result<(), DomainError>;

    async fn read_raw(&self, file_name: &str) -> Result<Option<String>, DomainError>;

    /// Deleting a file that does not exist is not an error.
    async fn remove_raw(&self, file_name: &str) -> Result<(), DomainError>;

    async fn write_converted(&self, file_name: &str, content: &str) -> Result<(), DomainError>;

    async fn read_converted(&self, file_name: &str) -> Result<Option<String>, DomainError>;

    async fn remove_converted(&self, file_name: &str) -> Result<(), DomainError>;

    /// Removes any previous merged file, then writes `content`.
    async fn write_merged(&self, content: &str) -> Result<(), DomainError>;

    async fn raw_exists(&self, file_name: &str) -> bool;

    async fn converted_exists(&self, file_name: &str) -> bool;

    async fn merged_exists(&self) -> bool;

    /// First `lines` lines of the merged file.
    async fn merged_preview(&self, lines: usize) -> Result<Vec<String>, DomainError>;

    /// Display path of the merged file.
    fn merged_location(&self) -> String;
}
