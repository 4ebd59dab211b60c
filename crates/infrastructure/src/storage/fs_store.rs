use async_trait::async_trait;
use ferrous_splitdns_application::ports::RuleFileStore;
use ferrous_splitdns_domain::DomainError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Rule files on local disk.
///
/// Raw and converted files share `configs_dir`; the merged file lives at
/// `merged_path`, normally one level above.
pub struct FsRuleFileStore {
    configs_dir: PathBuf,
    merged_path: PathBuf,
}

impl FsRuleFileStore {
    pub fn new(configs_dir: impl Into<PathBuf>, merged_path: impl Into<PathBuf>) -> Self {
        Self {
            configs_dir: configs_dir.into(),
            merged_path: merged_path.into(),
        }
    }

    /// Creates the configs directory and the merged file's parent.
    pub async fn ensure_layout(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.configs_dir).await.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to create {}: {}",
                self.configs_dir.display(),
                e
            ))
        })?;

        if let Some(parent) = self.merged_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    DomainError::IoError(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        info!(configs_dir = %self.configs_dir.display(), "Output directories ready");
        Ok(())
    }

    fn raw_path(&self, file_name: &str) -> PathBuf {
        self.configs_dir.join(file_name)
    }

    fn converted_path(&self, file_name: &str) -> PathBuf {
        self.configs_dir.join(file_name)
    }
}

async fn remove_if_present(path: &Path) -> Result<(), DomainError> {
    match fs::remove_file(path).await {
        Ok(()) => {
            debug!(path = %path.display(), "Removed previous file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DomainError::IoError(format!(
            "Failed to remove {}: {}",
            path.display(),
            e
        ))),
    }
}

async fn read_optional(path: &Path) -> Result<Option<String>, DomainError> {
    match fs::read(path).await {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DomainError::IoError(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

#[async_trait]
impl RuleFileStore for FsRuleFileStore {
    async fn store_raw(&self, file_name: &str, body: &[u8]) -> Result<(), DomainError> {
        let path = self.raw_path(file_name);
        remove_if_present(&path).await?;
        fs::write(&path, body).await.map_err(|e| {
            DomainError::IoError(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    async fn read_raw(&self, file_name: &str) -> Result<Option<String>, DomainError> {
        read_optional(&self.raw_path(file_name)).await
    }

    async fn remove_raw(&self, file_name: &str) -> Result<(), DomainError> {
        remove_if_present(&self.raw_path(file_name)).await
    }

    async fn write_converted(&self, file_name: &str, content: &str) -> Result<(), DomainError> {
        let path = self.converted_path(file_name);
        fs::write(&path, content).await.map_err(|e| {
            DomainError::IoError(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    async fn read_converted(&self, file_name: &str) -> Result<Option<String>, DomainError> {
        read_optional(&self.converted_path(file_name)).await
    }

    async fn remove_converted(&self, file_name: &str) -> Result<(), DomainError> {
        remove_if_present(&self.converted_path(file_name)).await
    }

    async fn write_merged(&self, content: &str) -> Result<(), DomainError> {
        let write_failed = |reason: String| DomainError::MergeWriteFailed {
            path: self.merged_path.display().to_string(),
            reason,
        };

        remove_if_present(&self.merged_path)
            .await
            .map_err(|e| write_failed(e.to_string()))?;
        fs::write(&self.merged_path, content)
            .await
            .map_err(|e| write_failed(e.to_string()))
    }

    async fn raw_exists(&self, file_name: &str) -> bool {
        is_file(&self.raw_path(file_name)).await
    }

    async fn converted_exists(&self, file_name: &str) -> bool {
        is_file(&self.converted_path(file_name)).await
    }

    async fn merged_exists(&self) -> bool {
        is_file(&self.merged_path).await
    }

    async fn merged_preview(&self, lines: usize) -> Result<Vec<String>, DomainError> {
        let file = match fs::File::open(&self.merged_path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(DomainError::IoError(format!(
                    "Failed to open {}: {}",
                    self.merged_path.display(),
                    e
                )))
            }
        };

        let mut reader = BufReader::new(file).lines();
        let mut preview = Vec::with_capacity(lines);
        while preview.len() < lines {
            match reader.next_line().await {
                Ok(Some(line)) => preview.push(line),
                Ok(None) => break,
                Err(e) => {
                    return Err(DomainError::IoError(format!(
                        "Failed to read {}: {}",
                        self.merged_path.display(),
                        e
                    )))
                }
            }
        }
        Ok(preview)
    }

    fn merged_location(&self) -> String {
        self.merged_path.display().to_string()
    }
}
