//! Quiz result intake, storage boundary and administrator search.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ResultId, ResultListing, ResultRecord, SubmissionRequest};
pub use repository::{
    RepositoryError, ResultPage, ResultQuery, ResultRepository, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use router::results_router;
pub use service::{SubmissionError, SubmissionService};
