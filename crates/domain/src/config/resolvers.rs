use crate::resolver_set::{DEFAULT_DOMESTIC_RESOLVER, DEFAULT_FOREIGN_RESOLVER};
use serde::{Deserialize, Serialize};

/// Resolver addresses per category. An empty list falls back to the
/// built-in default when the run starts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolversConfig {
    #[serde(default = "default_domestic")]
    pub domestic: Vec<String>,

    #[serde(default = "default_foreign")]
    pub foreign: Vec<String>,
}

impl Default for ResolversConfig {
    fn default() -> Self {
        Self {
            domestic: default_domestic(),
            foreign: default_foreign(),
        }
    }
}

fn default_domestic() -> Vec<String> {
    vec![DEFAULT_DOMESTIC_RESOLVER.to_string()]
}

fn default_foreign() -> Vec<String> {
    vec![DEFAULT_FOREIGN_RESOLVER.to_string()]
}
