use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// A batch + section pair. Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    pub batch_name: String,
    pub section: String,
}

impl Section {
    pub fn new(batch_name: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            batch_name: batch_name.into(),
            section: section.into(),
        }
    }

    /// `"58 C"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.batch_name, self.section)
    }

    /// Name of the CSV file backing this section: whitespace runs become `_`.
    ///
    /// `("58 A", "Morning  Shift")` → `58_A_Morning_Shift.csv`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.csv",
            WHITESPACE.replace_all(&self.batch_name, "_"),
            WHITESPACE.replace_all(&self.section, "_")
        )
    }

    pub fn matches_ignore_case(&self, batch_name: &str, section: &str) -> bool {
        self.batch_name.to_lowercase() == batch_name.to_lowercase()
            && self.section.to_lowercase() == section.to_lowercase()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.batch_name, self.section)
    }
}
