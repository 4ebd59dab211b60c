use crate::rule_source::{DEFAULT_DOMESTIC_FILES, DEFAULT_FOREIGN_FILES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    #[serde(default = "default_domestic")]
    pub domestic: Vec<String>,

    #[serde(default = "default_foreign")]
    pub foreign: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            domestic: default_domestic(),
            foreign: default_foreign(),
        }
    }
}

fn default_domestic() -> Vec<String> {
    DEFAULT_DOMESTIC_FILES.iter().map(|s| s.to_string()).collect()
}

fn default_foreign() -> Vec<String> {
    DEFAULT_FOREIGN_FILES.iter().map(|s| s.to_string()).collect()
}
