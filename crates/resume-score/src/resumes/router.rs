use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{CandidateProfile, JobId, JobPosting, ResumeId};
use super::repository::ResumeRepository;
use super::service::{ResumeAnalysisService, ResumeServiceError};

/// Router builder exposing HTTP endpoints for resume intake, scoring, and
/// job matching.
pub fn resume_router<R>(service: Arc<ResumeAnalysisService<R>>) -> Router
where
    R: ResumeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/resumes",
            post(register_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/resumes/:resume_id",
            get(get_handler::<R>).delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/resumes/:resume_id/analyze",
            post(analyze_handler::<R>),
        )
        .route("/api/v1/resumes/:resume_id/score", get(score_handler::<R>))
        .route("/api/v1/jobs", post(create_job_handler::<R>))
        .route(
            "/api/v1/match/resume/:resume_id/job/:job_id",
            post(match_handler::<R>),
        )
        .route("/api/v1/analytics/dashboard", get(dashboard_handler::<R>))
        .with_state(service)
}

fn error_response(error: ResumeServiceError) -> Response {
    let status = match &error {
        ResumeServiceError::ResumeNotFound(_)
        | ResumeServiceError::JobNotFound(_)
        | ResumeServiceError::ScoreNotFound(_) => StatusCode::NOT_FOUND,
        ResumeServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
    axum::Json(profile): axum::Json<CandidateProfile>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.register(profile) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
    Path(resume_id): Path<u64>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.get(ResumeId(resume_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
    Path(resume_id): Path<u64>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.delete(ResumeId(resume_id)) {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(json!({ "deleted": resume_id })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analyze_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
    Path(resume_id): Path<u64>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.analyze(ResumeId(resume_id)) {
        Ok(score) => (StatusCode::OK, axum::Json(score)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
    Path(resume_id): Path<u64>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.latest_score(ResumeId(resume_id)) {
        Ok(score) => (StatusCode::OK, axum::Json(score)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_job_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
    axum::Json(posting): axum::Json<JobPosting>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.create_job(posting) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn match_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
    Path((resume_id, job_id)): Path<(u64, u64)>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.match_to_job(ResumeId(resume_id), JobId(job_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<ResumeAnalysisService<R>>>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.dashboard() {
        Ok(analytics) => (StatusCode::OK, axum::Json(analytics)).into_response(),
        Err(error) => error_response(error),
    }
}
