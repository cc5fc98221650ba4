//! Holland (RIASEC) scoring, ranking and major matching.
//!
//! Everything in this module is pure: the functions take catalog slices and answers
//! and never fail. Unknown question ids or exam-group codes are ignored, and an
//! uninformative answer pattern yields an empty profile rather than an error.

pub mod advice;
pub mod domain;
pub mod matching;
pub mod ranking;
pub mod report;
mod result;
pub mod scoring;

pub use advice::{advise, seed_score_gaps, subjects_for_groups, GapAdvice, GapStatus};
pub use domain::{
    normalize_group_code, AnswerSet, CategoryScores, ExamGroup, HollandCode, Major,
    ProfileEntry, ProfileError, Question, QuestionId, ScoreBucket, ScoreGap, TopProfile,
    UnknownHollandCode, MAX_SUBJECT_SCORE, PROFILE_CAPACITY,
};
pub use matching::{filter_compatible_majors, rank_by_category_overlap, MatchOptions};
pub use ranking::{resolve_top_profile, score_buckets};
pub use report::{RecommendationSummary, DEFAULT_MAJOR_DISPLAY_LIMIT};
pub use result::{assemble_recommendation, EngineOutcome, Recommendation, RecommendationEngine};
pub use scoring::compute_category_scores;
