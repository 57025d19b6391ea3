use career_fit::assessment::{
    AssessmentService, FileSnapshotStore, InMemorySnapshotStore, QuestionCatalog,
    ScoringConfig,
};
use career_fit::config::AppConfig;
use career_fit::error::AppError;
use career_fit::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type FileBackedService = AssessmentService<FileSnapshotStore>;
pub(crate) type MemoryBackedService = AssessmentService<InMemorySnapshotStore>;

/// Service persisting to the configured snapshot file, or `path_override` when given.
pub(crate) fn file_backed_service(
    config: &AppConfig,
    path_override: Option<PathBuf>,
) -> Arc<FileBackedService> {
    let path = path_override.unwrap_or_else(|| config.storage.snapshot_path.clone());
    let store = Arc::new(FileSnapshotStore::new(path));
    Arc::new(AssessmentService::new(
        QuestionCatalog::standard(),
        store,
        config.scoring,
    ))
}

pub(crate) fn memory_backed_service(scoring: ScoringConfig) -> Arc<MemoryBackedService> {
    Arc::new(AssessmentService::new(
        QuestionCatalog::standard(),
        Arc::new(InMemorySnapshotStore::new()),
        scoring,
    ))
}

/// Load configuration and install logging for the one-shot terminal commands.
pub(crate) fn load_runtime() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}
