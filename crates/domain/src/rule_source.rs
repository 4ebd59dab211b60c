use crate::category::Category;
use crate::errors::DomainError;
use std::collections::HashSet;
use std::sync::Arc;

const CONVERTED_MARKER: &str = "adg";

pub const DEFAULT_DOMESTIC_FILES: [&str; 3] = ["apple-cn.txt", "google-cn.txt", "china-list.txt"];
pub const DEFAULT_FOREIGN_FILES: [&str; 3] = ["proxy-list.txt", "gfw.txt", "greatfire.txt"];

/// One remote rule file and the category its domains belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleSource {
    pub name: Arc<str>,
    pub category: Category,
}

impl RuleSource {
    pub fn new(name: impl Into<Arc<str>>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        crate::validators::validate_source_name(name, "Rule source")
    }

    pub fn raw_file_name(&self) -> &str {
        &self.name
    }

    /// `apple-cn.txt` becomes `apple-cn.adg.txt`; names without an
    /// extension get the marker appended.
    pub fn converted_file_name(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                format!("{stem}.{CONVERTED_MARKER}.{ext}")
            }
            _ => format!("{}.{CONVERTED_MARKER}", self.name),
        }
    }
}

impl std::fmt::Display for RuleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Ordered list of rule sources. Domestic sources always come before
/// foreign ones; within a category the configured order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRegistry {
    sources: Vec<RuleSource>,
}

impl SourceRegistry {
    pub fn new(domestic: &[String], foreign: &[String]) -> Result<Self, DomainError> {
        let mut sources = Vec::with_capacity(domestic.len() + foreign.len());
        let mut seen: HashSet<&str> = HashSet::new();

        let grouped = [(Category::Domestic, domestic), (Category::Foreign, foreign)];
        for (category, names) in grouped {
            for name in names {
                RuleSource::validate_name(name).map_err(DomainError::InvalidRuleSource)?;
                if !seen.insert(name.as_str()) {
                    return Err(DomainError::InvalidRuleSource(format!(
                        "Rule source '{}' is listed more than once",
                        name
                    )));
                }
                sources.push(RuleSource::new(name.as_str(), category));
            }
        }

        if sources.is_empty() {
            return Err(DomainError::InvalidRuleSource(
                "No rule sources configured".to_string(),
            ));
        }

        Ok(Self { sources })
    }

    pub fn sources(&self) -> &[RuleSource] {
        &self.sources
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &RuleSource> {
        self.sources.iter().filter(move |s| s.category == category)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        let domestic = DEFAULT_DOMESTIC_FILES
            .iter()
            .map(|name| RuleSource::new(*name, Category::Domestic));
        let foreign = DEFAULT_FOREIGN_FILES
            .iter()
            .map(|name| RuleSource::new(*name, Category::Foreign));
        Self {
            sources: domestic.chain(foreign).collect(),
        }
    }
}
