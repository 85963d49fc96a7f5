use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use resume_score::config::AppConfig;
use resume_score::resumes::{InMemoryResumeRepository, ResumeAnalysisService};
use resume_score::scoring::ResumeScorer;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the default service stack: in-memory storage plus a scorer over the
/// configured vocabulary and the in-process grammar engine.
pub(crate) fn build_analysis_service(
    config: &AppConfig,
) -> Arc<ResumeAnalysisService<InMemoryResumeRepository>> {
    let repository = Arc::new(InMemoryResumeRepository::default());
    let scorer = ResumeScorer::new(config.vocabulary.clone());
    Arc::new(ResumeAnalysisService::new(repository, scorer))
}
