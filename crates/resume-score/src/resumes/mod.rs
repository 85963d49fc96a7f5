//! Candidate/job domain model, repository seam, job matcher, service layer,
//! and the HTTP router exposing them.

pub mod domain;
pub mod matching;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CandidateProfile, Education, JobId, JobPosting, JobRecord, PersonalInfo, Project, ResumeId,
    ResumeRecord, ScoreRecord, WorkExperience,
};
pub use matching::JobMatchReport;
pub use repository::{InMemoryResumeRepository, RepositoryError, ResumeRepository};
pub use router::resume_router;
pub use service::{
    DashboardAnalytics, ResumeAnalysisService, ResumeServiceError, SkillFrequency,
};
