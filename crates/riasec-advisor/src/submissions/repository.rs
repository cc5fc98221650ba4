use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::domain::{ResultId, ResultListing, ResultRecord};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Storage abstraction so the service can be exercised without a database.
pub trait ResultRepository: Send + Sync {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, RepositoryError>;
    fn fetch(&self, id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError>;
    fn search(&self, query: &ResultQuery) -> Result<ResultPage, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Administrator search over stored results.
///
/// Text filters are case-insensitive substring matches; blank filters are ignored.
/// The date range is inclusive and compared against the UTC submission date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultQuery {
    #[serde(alias = "studentName")]
    pub student_name: Option<String>,
    #[serde(alias = "studentClass")]
    pub student_class: Option<String>,
    #[serde(alias = "studentNumber")]
    pub student_number: Option<String>,
    #[serde(alias = "dateFrom")]
    pub submitted_from: Option<NaiveDate>,
    #[serde(alias = "dateTo")]
    pub submitted_to: Option<NaiveDate>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ResultQuery {
    /// 1-based page number.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn matches(&self, record: &ResultRecord) -> bool {
        let student = &record.student;
        let submitted_on = record.submitted_at.date_naive();

        contains(Some(&student.name), self.student_name.as_deref())
            && contains(Some(&student.class_name), self.student_class.as_deref())
            && contains(student.student_number.as_ref(), self.student_number.as_deref())
            && self.submitted_from.map_or(true, |from| submitted_on >= from)
            && self.submitted_to.map_or(true, |to| submitted_on <= to)
    }

    /// Filter, order newest first and cut out the requested page.
    ///
    /// Repository implementations without their own query engine can delegate here.
    pub fn select<'a, I>(&self, records: I) -> ResultPage
    where
        I: IntoIterator<Item = &'a ResultRecord>,
    {
        let mut matching: Vec<&ResultRecord> = records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect();
        matching.sort_by_key(|record| Reverse((record.submitted_at, record.id.clone())));

        let total = matching.len();
        let limit = self.limit();
        let page = self.page();
        let results = matching
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .map(ResultRecord::listing)
            .collect();

        ResultPage {
            results,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        }
    }
}

fn contains(value: Option<&String>, needle: Option<&str>) -> bool {
    let needle = match needle.map(str::trim) {
        Some(needle) if !needle.is_empty() => needle.to_lowercase(),
        _ => return true,
    };

    value.is_some_and(|value| value.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultPage {
    pub results: Vec<ResultListing>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}
