use std::sync::Arc;

use chrono::Utc;

use super::common::*;
use crate::resumes::domain::{JobId, ResumeId, ScoreRecord};
use crate::resumes::repository::ResumeRepository;
use crate::resumes::service::{ResumeAnalysisService, ResumeServiceError};
use crate::scoring::ResumeScorer;

#[test]
fn register_assigns_sequential_ids() {
    let (service, _) = build_service();
    let first = service.register(profile()).expect("first insert");
    let second = service.register(profile()).expect("second insert");
    assert_eq!(first.id, ResumeId(1));
    assert_eq!(second.id, ResumeId(2));
    assert!(first.score.is_none());
}

#[test]
fn analyze_scores_and_upserts_a_single_score_record() {
    let (service, repository) = build_service();
    let record = service.register(profile()).expect("insert");

    let first = service.analyze(record.id).expect("first analysis");
    assert!(first.report.matched_skills.contains("python"));
    assert!(first.report.matched_skills.contains("docker"));
    assert!(first.report.matched_skills.contains("java"));
    assert_eq!(first.report.skills_score, 30);

    let second = service.analyze(record.id).expect("second analysis");
    assert_eq!(second.report, first.report);

    let stored = repository
        .fetch_resume(record.id)
        .expect("fetch")
        .expect("present");
    assert_eq!(
        stored.score.expect("score stored").report,
        second.report
    );
}

#[test]
fn latest_score_requires_a_prior_analysis() {
    let (service, _) = build_service();
    let record = service.register(profile()).expect("insert");
    let error = service.latest_score(record.id).expect_err("no score yet");
    assert!(matches!(error, ResumeServiceError::ScoreNotFound(_)));

    service.analyze(record.id).expect("analysis");
    let score = service.latest_score(record.id).expect("score available");
    assert_eq!(score.report.skills_score, 30);
}

#[test]
fn match_to_job_uses_declared_skills() {
    let (service, _) = build_service();
    let resume = service.register(profile()).expect("insert resume");
    let job = service.create_job(job_posting()).expect("insert job");

    let report = service
        .match_to_job(resume.id, job.id)
        .expect("match computed");
    assert_eq!(report.match_score, 67);
    assert_eq!(report.total_required, 3);
    assert_eq!(report.total_matched, 2);
    assert!(report.missing_skills.contains("sql"));
}

#[test]
fn missing_records_surface_not_found_errors() {
    let (service, _) = build_service();
    assert!(matches!(
        service.get(ResumeId(99)),
        Err(ResumeServiceError::ResumeNotFound(ResumeId(99)))
    ));
    assert!(matches!(
        service.analyze(ResumeId(99)),
        Err(ResumeServiceError::ResumeNotFound(_))
    ));

    let resume = service.register(profile()).expect("insert");
    assert!(matches!(
        service.match_to_job(resume.id, JobId(42)),
        Err(ResumeServiceError::JobNotFound(JobId(42)))
    ));
}

#[test]
fn delete_removes_the_resume() {
    let (service, _) = build_service();
    let record = service.register(profile()).expect("insert");
    service.delete(record.id).expect("delete");
    assert!(matches!(
        service.delete(record.id),
        Err(ResumeServiceError::ResumeNotFound(_))
    ));
}

#[test]
fn dashboard_aggregates_scores_and_skill_frequencies() {
    let (service, _) = build_service();
    let first = service.register(profile()).expect("insert");
    let mut other = profile();
    other.skills = vec!["Python".to_string(), "SQL".to_string()];
    service.register(other).expect("insert");
    service.create_job(job_posting()).expect("insert job");
    service.analyze(first.id).expect("analysis");

    let analytics = service.dashboard().expect("dashboard");
    assert_eq!(analytics.total_resumes, 2);
    assert_eq!(analytics.total_jobs, 1);
    assert!(analytics.average_overall_score > 0.0);

    let python = analytics
        .top_skills
        .iter()
        .find(|entry| entry.skill == "python")
        .expect("python counted");
    assert_eq!(python.count, 2);
    assert_eq!(analytics.top_skills[0].skill, "python");
}

#[test]
fn dashboard_average_is_rounded_to_two_decimals() {
    let (service, repository) = build_service();
    for overall in [33u8, 33, 34] {
        let record = service.register(profile()).expect("insert");
        let mut report = service.scorer().generate_score("");
        report.overall_score = overall;
        repository
            .upsert_score(
                record.id,
                ScoreRecord {
                    report,
                    analyzed_at: Utc::now(),
                },
            )
            .expect("upsert");
    }

    let analytics = service.dashboard().expect("dashboard");
    // 100 / 3 = 33.333..., reported as 33.33.
    assert_eq!(analytics.average_overall_score, 33.33);
}

#[test]
fn repository_outage_propagates_as_repository_error() {
    let service = ResumeAnalysisService::new(
        Arc::new(UnavailableRepository),
        ResumeScorer::new(vocabulary()),
    );
    assert!(matches!(
        service.register(profile()),
        Err(ResumeServiceError::Repository(_))
    ));
    assert!(matches!(
        service.dashboard(),
        Err(ResumeServiceError::Repository(_))
    ));
}
