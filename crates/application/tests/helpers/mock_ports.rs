#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_splitdns_application::ports::{ReleaseMetadataPort, RuleDownloader, RuleFileStore};
use ferrous_splitdns_domain::{DomainError, ResolverSet};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, RwLock};

pub const RELEASE_BASE: &str =
    "https://github.com/Loyalsoldier/v2ray-rules-dat/releases/download/202405012210/";
pub const MIRROR_BASE: &str = "https://mirror.example/rules/";

pub fn resolvers(addrs: &[&str]) -> ResolverSet {
    ResolverSet::new(addrs.iter().map(|s| s.to_string()).collect()).unwrap()
}

// ============================================================================
// Release metadata
// ============================================================================

pub struct MockReleaseMetadata {
    result: Result<String, DomainError>,
    tokens_seen: Mutex<Vec<Option<String>>>,
}

impl MockReleaseMetadata {
    pub fn available(base: &str) -> Self {
        Self {
            result: Ok(base.to_string()),
            tokens_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            result: Err(DomainError::MetadataUnavailable(
                "connection refused".to_string(),
            )),
            tokens_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.tokens_seen.lock().unwrap().len()
    }

    pub fn tokens_seen(&self) -> Vec<Option<String>> {
        self.tokens_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseMetadataPort for MockReleaseMetadata {
    async fn latest_download_base(&self, token: Option<&str>) -> Result<String, DomainError> {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(token.map(str::to_string));
        self.result.clone()
    }
}

// ============================================================================
// Downloader
// ============================================================================

/// Replies from a per-URL script; an exhausted or missing script answers 404.
#[derive(Default)]
pub struct MockRuleDownloader {
    scripts: Mutex<HashMap<String, VecDeque<Result<Bytes, DomainError>>>>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl MockRuleDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, body: &str) {
        self.push(url, Ok(Bytes::from(body.to_string())));
    }

    pub fn fail(&self, url: &str, times: usize) {
        for _ in 0..times {
            self.push(
                url,
                Err(DomainError::DownloadFailed {
                    url: url.to_string(),
                    reason: "timed out".to_string(),
                }),
            );
        }
    }

    fn push(&self, url: &str, reply: Result<Bytes, DomainError>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| u == url)
            .count()
    }
}

#[async_trait]
impl RuleDownloader for MockRuleDownloader {
    async fn download(&self, url: &str, bearer_token: Option<&str>) -> Result<Bytes, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), bearer_token.map(str::to_string)));

        let reply = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(|queue| queue.pop_front());

        reply.unwrap_or_else(|| {
            Err(DomainError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
        })
    }
}

// ============================================================================
// File store
// ============================================================================

#[derive(Default)]
pub struct InMemoryRuleFileStore {
    raw: RwLock<HashMap<String, Vec<u8>>>,
    converted: RwLock<HashMap<String, String>>,
    merged: RwLock<Option<String>>,
    fail_merged_write: RwLock<bool>,
    fail_raw_write: RwLock<bool>,
}

impl InMemoryRuleFileStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn put_raw(&self, name: &str, content: &str) {
        self.raw
            .write()
            .unwrap()
            .insert(name.to_string(), content.as_bytes().to_vec());
    }

    pub fn put_raw_bytes(&self, name: &str, content: &[u8]) {
        self.raw
            .write()
            .unwrap()
            .insert(name.to_string(), content.to_vec());
    }

    pub fn put_converted(&self, name: &str, content: &str) {
        self.converted
            .write()
            .unwrap()
            .insert(name.to_string(), content.to_string());
    }

    pub fn raw(&self, name: &str) -> Option<String> {
        self.raw
            .read()
            .unwrap()
            .get(name)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn converted(&self, name: &str) -> Option<String> {
        self.converted.read().unwrap().get(name).cloned()
    }

    pub fn merged(&self) -> Option<String> {
        self.merged.read().unwrap().clone()
    }

    pub fn set_fail_merged_write(&self, fail: bool) {
        *self.fail_merged_write.write().unwrap() = fail;
    }

    pub fn set_fail_raw_write(&self, fail: bool) {
        *self.fail_raw_write.write().unwrap() = fail;
    }
}

#[async_trait]
impl RuleFileStore for InMemoryRuleFileStore {
    async fn store_raw(&self, file_name: &str, body: &[u8]) -> Result<(), DomainError> {
        if *self.fail_raw_write.read().unwrap() {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        self.raw
            .write()
            .unwrap()
            .insert(file_name.to_string(), body.to_vec());
        Ok(())
    }

    async fn read_raw(&self, file_name: &str) -> Result<Option<String>, DomainError> {
        match self.raw.read().unwrap().get(file_name) {
            Some(bytes) => String::from_utf8(bytes.clone())
                .map(Some)
                .map_err(|e| DomainError::IoError(e.to_string())),
            None => Ok(None),
        }
    }

    async fn remove_raw(&self, file_name: &str) -> Result<(), DomainError> {
        self.raw.write().unwrap().remove(file_name);
        Ok(())
    }

    async fn write_converted(&self, file_name: &str, content: &str) -> Result<(), DomainError> {
        self.put_converted(file_name, content);
        Ok(())
    }

    async fn read_converted(&self, file_name: &str) -> Result<Option<String>, DomainError> {
        Ok(self.converted(file_name))
    }

    async fn remove_converted(&self, file_name: &str) -> Result<(), DomainError> {
        self.converted.write().unwrap().remove(file_name);
        Ok(())
    }

    async fn write_merged(&self, content: &str) -> Result<(), DomainError> {
        if *self.fail_merged_write.read().unwrap() {
            return Err(DomainError::MergeWriteFailed {
                path: self.merged_location(),
                reason: "permission denied".to_string(),
            });
        }
        *self.merged.write().unwrap() = Some(content.to_string());
        Ok(())
    }

    async fn raw_exists(&self, file_name: &str) -> bool {
        self.raw.read().unwrap().contains_key(file_name)
    }

    async fn converted_exists(&self, file_name: &str) -> bool {
        self.converted.read().unwrap().contains_key(file_name)
    }

    async fn merged_exists(&self) -> bool {
        self.merged.read().unwrap().is_some()
    }

    async fn merged_preview(&self, lines: usize) -> Result<Vec<String>, DomainError> {
        Ok(self
            .merged()
            .map(|m| m.lines().take(lines).map(str::to_string).collect())
            .unwrap_or_default())
    }

    fn merged_location(&self) -> String {
        "memory://merged.txt".to_string()
    }
}
