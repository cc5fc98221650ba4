use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::holland::domain::{AnswerSet, CategoryScores, ScoreGap};
use crate::holland::{Recommendation, RecommendationSummary};
use crate::session::StudentInfo;

/// Identifier assigned to a stored quiz result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub String);

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A completed quiz as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub student: StudentInfo,
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default, alias = "selectedBlocks", alias = "selected_blocks")]
    pub exam_groups: Vec<String>,
    #[serde(default)]
    pub scores: Vec<ScoreGap>,
}

/// Stored result: the inputs, the scores and the recommendation built from them.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    pub id: ResultId,
    pub student: StudentInfo,
    pub submitted_at: DateTime<Utc>,
    pub answers: AnswerSet,
    pub category_scores: CategoryScores,
    pub exam_groups: Vec<String>,
    pub recommendation: Recommendation,
    pub summary: RecommendationSummary,
    pub narrative: String,
}

impl ResultRecord {
    pub fn listing(&self) -> ResultListing {
        ResultListing {
            id: self.id.clone(),
            student_name: self.student.name.clone(),
            student_class: self.student.class_name.clone(),
            student_number: self.student.student_number.clone(),
            submitted_at: self.submitted_at,
            profile_code: self.summary.profile_code.clone(),
            exam_groups: self.exam_groups.clone(),
            compatible_count: self.summary.compatible_count,
        }
    }
}

/// Row shown in the administrator's result list.
#[derive(Debug, Clone, Serialize)]
pub struct ResultListing {
    pub id: ResultId,
    pub student_name: String,
    pub student_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub profile_code: String,
    pub exam_groups: Vec<String>,
    pub compatible_count: usize,
}
