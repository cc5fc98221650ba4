use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{ResultId, ResultRecord, SubmissionRequest};
use super::repository::{RepositoryError, ResultPage, ResultQuery, ResultRepository};
use crate::holland::RecommendationEngine;
use crate::session::{QuizSession, SessionError};

/// Service validating submissions, running the engine and storing results.
pub struct SubmissionService<R> {
    repository: Arc<R>,
    engine: Arc<RecommendationEngine>,
    display_limit: usize,
}

static RESULT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_result_id() -> ResultId {
    let id = RESULT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ResultId(format!("res-{id:06}"))
}

impl<R> SubmissionService<R>
where
    R: ResultRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<RecommendationEngine>, display_limit: usize) -> Self {
        Self {
            repository,
            engine,
            display_limit: display_limit.max(1),
        }
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Replay the quiz steps for a submission, then persist the resulting record.
    pub fn submit(&self, request: SubmissionRequest) -> Result<ResultRecord, SubmissionError> {
        let session = self.replay(request).map_err(|error| {
            warn!(%error, "rejected quiz submission");
            error
        })?;

        let student = session.student().cloned().unwrap_or_default();
        let answers = session.answers().clone();
        let exam_groups = session.exam_groups().to_vec();
        let outcome = session.into_outcome()?;

        let summary = outcome
            .recommendation
            .summary(&exam_groups, self.display_limit);
        let narrative = summary.narrative();

        let record = ResultRecord {
            id: next_result_id(),
            student,
            submitted_at: Utc::now(),
            answers,
            category_scores: outcome.category_scores,
            exam_groups,
            recommendation: outcome.recommendation,
            summary,
            narrative,
        };

        let stored = self.repository.insert(record)?;
        info!(
            result_id = %stored.id,
            profile = %stored.summary.profile_code,
            compatible_majors = stored.summary.compatible_count,
            "stored quiz result"
        );
        Ok(stored)
    }

    fn replay(&self, request: SubmissionRequest) -> Result<QuizSession, SessionError> {
        let mut session = QuizSession::new()
            .with_student(request.student)?
            .with_answers(request.answers)?
            .finish_questionnaire()?
            .select_exam_groups(&request.exam_groups, self.engine.catalog())?;

        for score in &request.scores {
            session = session.set_score(&score.subject, score.current_score, score.target_score)?;
        }

        session.complete(&self.engine)
    }

    pub fn get(&self, id: &ResultId) -> Result<ResultRecord, SubmissionError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn search(&self, query: &ResultQuery) -> Result<ResultPage, SubmissionError> {
        Ok(self.repository.search(query)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] SessionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
