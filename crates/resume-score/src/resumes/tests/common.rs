use std::sync::Arc;

use crate::resumes::domain::{
    CandidateProfile, JobId, JobPosting, JobRecord, PersonalInfo, Project, ResumeId,
    ResumeRecord, ScoreRecord, WorkExperience,
};
use crate::resumes::repository::{InMemoryResumeRepository, RepositoryError, ResumeRepository};
use crate::resumes::service::ResumeAnalysisService;
use crate::scoring::{ResumeScorer, SkillVocabulary};

pub(super) fn vocabulary() -> SkillVocabulary {
    SkillVocabulary::new(["python", "sql", "docker", "machine learning", "java"])
}

pub(super) fn profile() -> CandidateProfile {
    CandidateProfile {
        personal_info: PersonalInfo {
            name: "Dana Example".to_string(),
            email: Some("dana@example.com".to_string()),
            phone: None,
            location: Some("Des Moines, IA".to_string()),
            linkedin_url: None,
        },
        summary: Some(
            "Backend engineer with a focus on reliable data platforms. \
             Shipped Python services at scale."
                .to_string(),
        ),
        skills: vec![
            "Python".to_string(),
            "Docker".to_string(),
            "Java".to_string(),
        ],
        work_experiences: vec![WorkExperience {
            company: "Globex".to_string(),
            job_title: "Senior Engineer".to_string(),
            start_date: Some("2021-03".to_string()),
            end_date: None,
            description: Some(
                "Led the ingestion platform. Reduced job latency by forty percent.".to_string(),
            ),
        }],
        projects: vec![Project {
            name: "warehouse-sync".to_string(),
            description: Some("Nightly sync between Docker deployments.".to_string()),
            technologies: Some("python, docker".to_string()),
        }],
        educations: Vec::new(),
    }
}

pub(super) fn job_posting() -> JobPosting {
    JobPosting {
        title: "Data Engineer".to_string(),
        company: "Initech".to_string(),
        description: "Build and operate the warehouse.".to_string(),
        required_skills: vec![
            "python".to_string(),
            "sql".to_string(),
            "docker".to_string(),
        ],
    }
}

pub(super) fn build_service() -> (
    Arc<ResumeAnalysisService<InMemoryResumeRepository>>,
    Arc<InMemoryResumeRepository>,
) {
    let repository = Arc::new(InMemoryResumeRepository::default());
    let service = Arc::new(ResumeAnalysisService::new(
        repository.clone(),
        ResumeScorer::new(vocabulary()),
    ));
    (service, repository)
}

/// Repository that fails every call, for exercising degraded paths.
pub(super) struct UnavailableRepository;

impl ResumeRepository for UnavailableRepository {
    fn insert_resume(&self, _: CandidateProfile) -> Result<ResumeRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn fetch_resume(&self, _: ResumeId) -> Result<Option<ResumeRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn list_resumes(&self) -> Result<Vec<ResumeRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn delete_resume(&self, _: ResumeId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn upsert_score(&self, _: ResumeId, _: ScoreRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn insert_job(&self, _: JobPosting) -> Result<JobRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn fetch_job(&self, _: JobId) -> Result<Option<JobRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn list_jobs(&self) -> Result<Vec<JobRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }
}
