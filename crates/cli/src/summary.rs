use ferrous_splitdns_application::ports::RuleFileStore;
use ferrous_splitdns_application::use_cases::SyncReport;
use ferrous_splitdns_domain::{Category, MergeStats, ResolverSet, SourceRegistry};
use std::fmt::Write;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub name: String,
    pub present: bool,
}

/// Everything the end-of-run report shows, gathered from disk after the
/// pipeline finished.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub raw_files: Vec<FileStatus>,
    pub converted_files: Vec<FileStatus>,
    pub merged_location: String,
    pub merged_present: bool,
    pub delivered: usize,
    pub total: usize,
    pub stats: MergeStats,
    /// Release prefix used for downloads; `None` means mirror only.
    pub download_base: Option<String>,
    pub preview: Vec<String>,
    pub preview_error: Option<String>,
}

impl RunSummary {
    pub async fn collect(
        store: &dyn RuleFileStore,
        registry: &SourceRegistry,
        report: &SyncReport,
        preview_lines: usize,
    ) -> Self {
        let mut raw_files = Vec::with_capacity(registry.len());
        let mut converted_files = Vec::with_capacity(registry.len());
        for source in registry.sources() {
            raw_files.push(FileStatus {
                name: source.raw_file_name().to_string(),
                present: store.raw_exists(source.raw_file_name()).await,
            });
            let converted = source.converted_file_name();
            converted_files.push(FileStatus {
                present: store.converted_exists(&converted).await,
                name: converted,
            });
        }

        let merged_present = store.merged_exists().await;
        let (preview, preview_error) = if merged_present {
            match store.merged_preview(preview_lines).await {
                Ok(preview) => (preview, None),
                Err(e) => {
                    warn!(error = %e, "Failed to read merged file preview");
                    (Vec::new(), Some(e.to_string()))
                }
            }
        } else {
            (Vec::new(), None)
        };

        Self {
            raw_files,
            converted_files,
            merged_location: store.merged_location(),
            merged_present,
            delivered: report.fetch.delivered(),
            total: report.fetch.total(),
            stats: report.merge,
            download_base: report.download_base.clone(),
            preview,
            preview_error,
        }
    }

    pub fn render(&self, domestic: &ResolverSet, foreign: &ResolverSet) -> String {
        let mut out = String::new();

        match &self.download_base {
            Some(base) => {
                let _ = writeln!(out, "Release: {}", base);
            }
            None => {
                let _ = writeln!(out, "Release: none, mirror only");
            }
        }

        let _ = writeln!(out, "Downloaded files ({}/{}):", self.delivered, self.total);
        for file in &self.raw_files {
            let _ = writeln!(out, "  {} {}", mark(file.present), file.name);
        }

        let _ = writeln!(out, "Converted files:");
        for file in &self.converted_files {
            let _ = writeln!(out, "  {} {}", mark(file.present), file.name);
        }

        let _ = writeln!(
            out,
            "Merged file: {} {}",
            mark(self.merged_present),
            self.merged_location
        );

        let _ = writeln!(out, "Resolvers:");
        let _ = writeln!(out, "  {}: {}", Category::Domestic.section_title(), domestic);
        let _ = writeln!(out, "  {}: {}", Category::Foreign.section_title(), foreign);

        let _ = writeln!(out, "Unique entries:");
        for category in Category::ALL {
            let _ = writeln!(
                out,
                "  {}: {}",
                category.section_title(),
                self.stats.count_for(category)
            );
        }
        let _ = writeln!(out, "  Total: {}", self.stats.unique);

        if let Some(reason) = &self.preview_error {
            let _ = writeln!(out, "Preview unavailable: {}", reason);
        } else if !self.preview.is_empty() {
            let _ = writeln!(out, "Preview (first {} lines):", self.preview.len());
            for line in &self.preview {
                let _ = writeln!(out, "  {}", line);
            }
        }

        out
    }
}

fn mark(present: bool) -> &'static str {
    if present {
        "[present]"
    } else {
        "[absent] "
    }
}
