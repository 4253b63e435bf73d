//! Typed forms of the semi-structured JSON columns.
//!
//! These are decoded at the datastore boundary (`sqlx::types::Json<T>` in
//! `labman-db`) so the rest of the code never handles raw JSON text. Field
//! names follow the stored documents, which the frontend also reads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Head count per staff role on a project, e.g. `{"研究人员": 3}`.
pub type TeamAllocation = BTreeMap<String, u32>;

/// A plain list of person or organization names.
pub type NameList = Vec<String>;

/// Expected research outcome counts for one participating organization.
///
/// Missing keys in stored documents decode as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectedOutcomes {
    pub software: u32,
    pub hardware: u32,
    pub papers: u32,
    pub patents: u32,
    pub copyrights: u32,
    pub standards: u32,
    pub reports: u32,
    pub demonstrations: u32,
}

impl ExpectedOutcomes {
    pub fn total(&self) -> u32 {
        self.software
            + self.hardware
            + self.papers
            + self.patents
            + self.copyrights
            + self.standards
            + self.reports
            + self.demonstrations
    }
}

/// A KPI declared on a project, e.g. `{"name": "论文发表", "target": "3篇"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiTarget {
    pub name: String,
    /// Free-text quantity; not guaranteed to be numeric.
    pub target: String,
}

/// Gantt chart document stored per project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GanttPayload {
    pub tasks: Vec<GanttTask>,
    pub links: Vec<GanttLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttTask {
    pub id: i64,
    pub text: String,
    pub start_date: String,
    /// Duration in days.
    pub duration: u32,
    /// Fraction complete, 0.0 to 1.0.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub parent: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttLink {
    pub id: i64,
    pub source: i64,
    pub target: i64,
    /// dhtmlx-gantt link type code ("0" = finish-to-start).
    #[serde(rename = "type")]
    pub link_type: String,
}
