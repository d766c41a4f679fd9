//! A single filed case

use crate::classifier::Severity;
use crate::config::Category;
use chrono::{DateTime, Local};

/// Timestamp format shown in the case history
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A problem brought before the court together with its ruling
#[derive(Debug, Clone)]
pub struct Case {
    pub problem: String,
    pub category: Category,
    /// Severity at filing; appeals do not change it
    pub severity: Severity,
    pub ruling: String,
    pub timestamp: DateTime<Local>,
    /// Number of times this ruling was appealed
    pub appeals: u32,
}

impl Case {
    pub fn new(problem: &str, category: Category, severity: Severity, ruling: String) -> Self {
        Self::with_timestamp(problem, category, severity, ruling, Local::now())
    }

    pub fn with_timestamp(
        problem: &str,
        category: Category,
        severity: Severity,
        ruling: String,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            problem: problem.to_string(),
            category,
            severity,
            ruling,
            timestamp,
            appeals: 0,
        }
    }

    /// Replace the ruling after an appeal
    pub fn revise(&mut self, ruling: String) {
        self.ruling = ruling;
        self.appeals += 1;
    }

    pub fn timestamp_label(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_revise_keeps_severity() {
        let mut case = Case::new("robot ate my homework", Category::Technology, Severity::new(2), "first".to_string());
        case.revise("second".to_string());

        assert_eq!(case.ruling, "second");
        assert_eq!(case.severity.get(), 2);
        assert_eq!(case.appeals, 1);
    }

    #[test]
    fn test_timestamp_label() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let case = Case::with_timestamp("x", Category::Unknown, Severity::default(), String::new(), timestamp);
        assert_eq!(case.timestamp_label(), "2024-03-09 07:05:01");
    }
}
