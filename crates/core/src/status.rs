//! Status and category vocabularies stored as text columns.
//!
//! The datastore keeps the original Chinese labels verbatim, so every enum
//! here converts to and from its label rather than a numeric id.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status labels
// ---------------------------------------------------------------------------

pub const STATUS_NOT_STARTED: &str = "未开始";
pub const STATUS_IN_PROGRESS: &str = "进行中";
pub const STATUS_COMPLETED: &str = "已完成";
pub const STATUS_DELAYED: &str = "已延期";

/// All valid status labels.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_NOT_STARTED,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_DELAYED,
];

/// Lifecycle status shared by projects, milestones, tasks and KPI progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkStatus {
    #[serde(rename = "未开始")]
    NotStarted,
    #[serde(rename = "进行中")]
    InProgress,
    #[serde(rename = "已完成")]
    Completed,
    #[serde(rename = "已延期")]
    Delayed,
}

impl WorkStatus {
    pub const ALL: [WorkStatus; 4] = [
        WorkStatus::NotStarted,
        WorkStatus::InProgress,
        WorkStatus::Completed,
        WorkStatus::Delayed,
    ];

    /// The label stored in the `status` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => STATUS_NOT_STARTED,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
            Self::Delayed => STATUS_DELAYED,
        }
    }

    /// Convert from a database label.
    pub fn from_label(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_NOT_STARTED => Ok(Self::NotStarted),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            STATUS_DELAYED => Ok(Self::Delayed),
            _ => Err(CoreError::Validation(format!(
                "Invalid status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Output categories
// ---------------------------------------------------------------------------

/// Research output category a task can produce.
///
/// The declaration order is the order the output report lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputCategory {
    #[serde(rename = "论文")]
    Paper,
    #[serde(rename = "专利")]
    Patent,
    #[serde(rename = "软件著作权")]
    SoftwareCopyright,
    #[serde(rename = "技术报告")]
    TechnicalReport,
    #[serde(rename = "标准规范")]
    Standard,
}

impl OutputCategory {
    pub const ALL: [OutputCategory; 5] = [
        OutputCategory::Paper,
        OutputCategory::Patent,
        OutputCategory::SoftwareCopyright,
        OutputCategory::TechnicalReport,
        OutputCategory::Standard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Paper => "论文",
            Self::Patent => "专利",
            Self::SoftwareCopyright => "软件著作权",
            Self::TechnicalReport => "技术报告",
            Self::Standard => "标准规范",
        }
    }

    /// Returns `None` for labels outside the fixed enumeration.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

/// Project funding categories used by the sample-data generator.
pub const PROJECT_TYPES: &[&str] = &[
    "国家级项目",
    "省部级项目",
    "市级项目",
    "企业合作项目",
    "横向课题",
    "院校内部项目",
];

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn status_label_round_trips() {
        for status in WorkStatus::ALL {
            assert_eq!(WorkStatus::from_label(status.label()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_matches!(
            WorkStatus::from_label("paused"),
            Err(CoreError::Validation(msg)) if msg.contains("paused")
        );
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&WorkStatus::Delayed).unwrap();
        assert_eq!(json, "\"已延期\"");
    }

    #[test]
    fn output_category_lookup() {
        assert_eq!(
            OutputCategory::from_label("专利"),
            Some(OutputCategory::Patent)
        );
        assert_eq!(OutputCategory::from_label("专著"), None);
    }

    #[test]
    fn output_categories_keep_report_order() {
        let labels: Vec<_> = OutputCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["论文", "专利", "软件著作权", "技术报告", "标准规范"]);
    }
}
