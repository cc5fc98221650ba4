use metrics_exporter_prometheus::PrometheusHandle;
use riasec_advisor::catalog::Catalog;
use riasec_advisor::error::AppError;
use riasec_advisor::submissions::{
    RepositoryError, ResultId, ResultPage, ResultQuery, ResultRecord, ResultRepository,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<Catalog>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryResultRepository {
    records: Arc<Mutex<HashMap<ResultId, ResultRecord>>>,
}

impl InMemoryResultRepository {
    fn guard(&self) -> Result<MutexGuard<'_, HashMap<ResultId, ResultRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))
    }
}

impl ResultRepository for InMemoryResultRepository {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError> {
        Ok(self.guard()?.get(id).cloned())
    }

    fn search(&self, query: &ResultQuery) -> Result<ResultPage, RepositoryError> {
        Ok(query.select(self.guard()?.values()))
    }
}

/// Catalog from `dir` when one is configured, otherwise the bundled standard catalog.
pub(crate) fn load_catalog(dir: Option<&Path>) -> Result<Catalog, AppError> {
    match dir {
        Some(dir) => {
            let catalog = Catalog::from_dir(dir)?;
            info!(catalog_dir = %dir.display(), "imported catalog");
            Ok(catalog)
        }
        None => Ok(Catalog::standard()),
    }
}
