use super::domain::{normalize_group_code, ExamGroup, ScoreGap};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    NeedsImprovement,
    TargetMet,
    ExceededTarget,
}

impl GapStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "Needs Improvement",
            Self::TargetMet => "Target Met",
            Self::ExceededTarget => "Exceeded Target",
        }
    }

    fn classify(gap: f32) -> Self {
        if gap > 0.0 {
            Self::NeedsImprovement
        } else if gap < 0.0 {
            Self::ExceededTarget
        } else {
            Self::TargetMet
        }
    }
}

/// Advisory line for one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapAdvice {
    pub subject: String,
    pub current_score: f32,
    pub target_score: f32,
    pub gap: f32,
    pub status: GapStatus,
    pub status_label: &'static str,
    pub message: String,
}

/// Gaps this close to zero are float noise from the score arithmetic.
const GAP_TOLERANCE: f32 = 1e-4;

/// Classify a score gap. Only float noise counts as meeting the target exactly.
pub fn advise(score: &ScoreGap) -> GapAdvice {
    let raw = score.gap();
    // also avoids reporting -0.0
    let gap = if raw.abs() <= GAP_TOLERANCE { 0.0 } else { raw };
    let status = GapStatus::classify(gap);
    let message = match status {
        GapStatus::NeedsImprovement => format!("Needs improvement: +{gap:.1}"),
        GapStatus::TargetMet => "Target met".to_string(),
        GapStatus::ExceededTarget => "Exceeded target".to_string(),
    };

    GapAdvice {
        subject: score.subject.clone(),
        current_score: score.current_score,
        target_score: score.target_score,
        gap,
        status,
        status_label: status.label(),
        message,
    }
}

/// Ordered union of the subjects examined by the selected groups.
///
/// Subjects keep the order in which they first appear, walking the selection in order.
/// Unknown group codes are skipped.
pub fn subjects_for_groups<S: AsRef<str>>(selected: &[S], exam_groups: &[ExamGroup]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut subjects = Vec::new();

    for code in selected {
        let code = normalize_group_code(code.as_ref());
        let Some(group) = exam_groups
            .iter()
            .find(|group| normalize_group_code(&group.code) == code)
        else {
            continue;
        };

        for subject in &group.subjects {
            let subject = subject.trim();
            if !subject.is_empty() && seen.insert(subject.to_string()) {
                subjects.push(subject.to_string());
            }
        }
    }

    subjects
}

/// Blank score entries for every subject of the selected groups.
pub fn seed_score_gaps<S: AsRef<str>>(selected: &[S], exam_groups: &[ExamGroup]) -> Vec<ScoreGap> {
    subjects_for_groups(selected, exam_groups)
        .into_iter()
        .map(ScoreGap::unscored)
        .collect()
}
