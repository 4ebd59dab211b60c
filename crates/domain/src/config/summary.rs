use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryConfig {
    /// Lines of the merged file echoed after a run
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            preview_lines: default_preview_lines(),
        }
    }
}

fn default_preview_lines() -> usize {
    15
}
