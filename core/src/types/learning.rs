use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the mastery table: current and target proficiency for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRecord {
    pub id: i64,
    pub skill: String,
    pub category: Option<String>,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub target_level: i32,
    pub last_practiced: Option<NaiveDate>,
}

/// Payload for creating or replacing a mastery record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMasteryRecord {
    pub skill: String,
    pub category: Option<String>,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub target_level: i32,
    pub last_practiced: Option<NaiveDate>,
}

/// A tracked course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub provider: Option<String>,
    /// Percent complete, 0 to 100.
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for creating or replacing a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub provider: Option<String>,
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub completed: bool,
}
