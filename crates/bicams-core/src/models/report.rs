use serde::{Deserialize, Serialize};

use super::result::TestResult;
use super::subject::Subject;

/// Everything a rendered report needs: who, when and what was scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub subject: Subject,
    pub test_date: jiff::civil::Date,
    pub results: Vec<TestResult>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Test date as printed in the report body (`dd/mm/YYYY`).
    pub fn test_date_display(&self) -> String {
        self.test_date.strftime("%d/%m/%Y").to_string()
    }

    /// `<name>_BICAMS_Report_<YYYY-MM-DD>.<extension>`.
    ///
    /// Whitespace, path separators and control characters in the name
    /// become underscores, so the result is always a single file name.
    pub fn file_name(&self, extension: &str) -> String {
        let name: String = self
            .subject
            .name
            .chars()
            .map(|c| {
                if c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\' | ':') {
                    '_'
                } else {
                    c
                }
            })
            .collect();
        format!(
            "{name}_BICAMS_Report_{}.{extension}",
            self.test_date.strftime("%Y-%m-%d"),
        )
    }
}
