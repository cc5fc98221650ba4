use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::catalog::{Catalog, CatalogProvider};
use crate::holland::{AnswerSet, HollandCode, MatchOptions, RecommendationEngine, ScoreGap};
use crate::session::StudentInfo;
use crate::submissions::domain::{ResultId, ResultRecord, SubmissionRequest};
use crate::submissions::repository::{
    RepositoryError, ResultPage, ResultQuery, ResultRepository,
};
use crate::submissions::{results_router, SubmissionService};

pub(super) fn engine() -> Arc<RecommendationEngine> {
    Arc::new(RecommendationEngine::new(
        Arc::new(Catalog::standard()),
        MatchOptions::default(),
    ))
}

/// Select the first `count` questions of each listed type.
pub(super) fn answers(picks: &[(HollandCode, usize)]) -> AnswerSet {
    let catalog = Catalog::standard();
    picks
        .iter()
        .flat_map(|&(code, count)| {
            catalog
                .questions()
                .iter()
                .filter(move |question| question.category == code)
                .take(count)
                .map(|question| (question.id, true))
                .collect::<Vec<_>>()
        })
        .collect()
}

pub(super) fn submission() -> SubmissionRequest {
    SubmissionRequest {
        student: StudentInfo::new("Linh Tran", "12A1").with_student_number("17"),
        answers: answers(&[
            (HollandCode::Investigative, 8),
            (HollandCode::Realistic, 6),
            (HollandCode::Conventional, 3),
        ]),
        exam_groups: vec!["A00".to_string(), "a01".to_string()],
        scores: vec![
            ScoreGap::new("Maths", 7.5, 9.0),
            ScoreGap::new("Physics", 8.0, 8.0),
        ],
    }
}

pub(super) fn balanced_submission() -> SubmissionRequest {
    let mut request = submission();
    request.answers = answers(&[
        (HollandCode::Realistic, 2),
        (HollandCode::Investigative, 2),
        (HollandCode::Artistic, 2),
        (HollandCode::Social, 2),
    ]);
    request
}

pub(super) fn invalid_group_submission() -> SubmissionRequest {
    let mut request = submission();
    request.exam_groups = vec!["Z99".to_string()];
    request
}

pub(super) fn build_service() -> (SubmissionService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = SubmissionService::new(repository.clone(), engine(), 5);
    (service, repository)
}

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Store a finished result for `name` with a fixed submission time.
pub(super) fn seed_result(
    service: &SubmissionService<MemoryRepository>,
    repository: &MemoryRepository,
    student: StudentInfo,
    submitted_at: DateTime<Utc>,
) -> ResultRecord {
    let mut request = submission();
    request.student = student;
    let record = service.submit(request).expect("submission succeeds");

    let mut record = repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .remove(&record.id)
        .expect("record stored");
    record.submitted_at = submitted_at;
    repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .insert(record.id.clone(), record.clone());
    record
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ResultId, ResultRecord>>>,
}

impl ResultRepository for MemoryRepository {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn search(&self, query: &ResultQuery) -> Result<ResultPage, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(query.select(guard.values()))
    }
}

pub(super) struct ConflictRepository;

impl ResultRepository for ConflictRepository {
    fn insert(&self, _record: ResultRecord) -> Result<ResultRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError> {
        Ok(None)
    }

    fn search(&self, query: &ResultQuery) -> Result<ResultPage, RepositoryError> {
        Ok(query.select(std::iter::empty()))
    }
}

pub(super) struct UnavailableRepository;

impl ResultRepository for UnavailableRepository {
    fn insert(&self, _record: ResultRecord) -> Result<ResultRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn search(&self, _query: &ResultQuery) -> Result<ResultPage, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn results_router_with_service(
    service: SubmissionService<MemoryRepository>,
) -> axum::Router {
    results_router(Arc::new(service))
}
