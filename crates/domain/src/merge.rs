use crate::category::Category;
use crate::directive::DedupKey;
use crate::resolver_set::ResolverSet;
use chrono::NaiveDateTime;
use std::collections::HashSet;

/// Encrypted upstreams listed at the top of every merged file.
pub const RECOMMENDED_UPSTREAMS: [&str; 4] = [
    "tls://dns.alidns.com",
    "tls://dot.pub",
    "tls://dns.google",
    "tls://one.one.one.one",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub domestic: usize,
    pub foreign: usize,
    pub unique: usize,
}

impl MergeStats {
    pub fn count_for(&self, category: Category) -> usize {
        match category {
            Category::Domestic => self.domestic,
            Category::Foreign => self.foreign,
        }
    }

    fn bump(&mut self, category: Category) {
        match category {
            Category::Domestic => self.domestic += 1,
            Category::Foreign => self.foreign += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedArtifact {
    pub content: String,
    pub stats: MergeStats,
}

/// Accumulates the merged upstream file.
///
/// A single seen-set spans every section, so a domain pattern kept in the
/// domestic section is dropped from any later foreign file.
#[derive(Debug)]
pub struct MergeBuilder {
    content: String,
    seen: HashSet<DedupKey>,
    stats: MergeStats,
}

impl MergeBuilder {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        let mut content = String::new();
        content.push_str("# AdGuard Home split-DNS upstream list\n");
        content.push_str(&format!(
            "# Generated: {}\n",
            generated_at.format(TIMESTAMP_FORMAT)
        ));
        content.push_str("# Note: duplicate domain entries have been removed\n\n");
        content.push_str("# Recommended secure upstream DNS servers\n");
        for upstream in RECOMMENDED_UPSTREAMS {
            content.push_str(upstream);
            content.push('\n');
        }
        content.push('\n');

        Self {
            content,
            seen: HashSet::new(),
            stats: MergeStats::default(),
        }
    }

    pub fn begin_section(&mut self, category: Category, resolvers: &ResolverSet) {
        self.content.push_str(&format!(
            "# === {} (DNS: {}) ===\n",
            category.section_title(),
            resolvers.joined()
        ));
    }

    /// Appends the first-seen directives of one converted file and returns
    /// how many were kept.
    pub fn add_file<'a, I>(&mut self, category: Category, source_name: &str, lines: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.content.push_str(&format!("# source: {}\n", source_name));

        let mut kept = 0;
        for line in lines {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let Some(key) = DedupKey::extract(line) else {
                continue;
            };
            if self.seen.insert(key) {
                self.content.push_str(line);
                self.content.push('\n');
                self.stats.bump(category);
                kept += 1;
            }
        }

        self.content.push('\n');
        kept
    }

    pub fn stats(&self) -> MergeStats {
        MergeStats {
            unique: self.seen.len(),
            ..self.stats
        }
    }

    pub fn finish(self) -> MergedArtifact {
        let stats = self.stats();
        MergedArtifact {
            content: self.content,
            stats,
        }
    }
}
