use serde::{Deserialize, Serialize};

/// Classification of a rule file; decides which resolver set its directives use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Domestic,
    Foreign,
}

impl Category {
    /// Processing order for conversion and merge.
    pub const ALL: [Category; 2] = [Category::Domestic, Category::Foreign];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Domestic => "domestic",
            Category::Foreign => "foreign",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            Category::Domestic => "Domestic domains",
            Category::Foreign => "Foreign domains",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
