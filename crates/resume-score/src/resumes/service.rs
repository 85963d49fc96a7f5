use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::domain::{CandidateProfile, JobId, JobPosting, JobRecord, ResumeId, ResumeRecord, ScoreRecord};
use super::matching::JobMatchReport;
use super::repository::{RepositoryError, ResumeRepository};
use crate::scoring::ResumeScorer;

/// Number of skills reported in the dashboard leaderboard.
const TOP_SKILL_LIMIT: usize = 10;

/// Service composing the repository and the scoring engine. Stateless apart
/// from the shared scorer and repository handles, so a single instance is
/// shared across request handlers.
pub struct ResumeAnalysisService<R> {
    repository: Arc<R>,
    scorer: Arc<ResumeScorer>,
}

impl<R> ResumeAnalysisService<R>
where
    R: ResumeRepository + 'static,
{
    pub fn new(repository: Arc<R>, scorer: ResumeScorer) -> Self {
        Self {
            repository,
            scorer: Arc::new(scorer),
        }
    }

    pub fn scorer(&self) -> &ResumeScorer {
        &self.scorer
    }

    /// Store a structured profile produced by the upstream extraction
    /// collaborator.
    pub fn register(
        &self,
        profile: CandidateProfile,
    ) -> Result<ResumeRecord, ResumeServiceError> {
        let record = self.repository.insert_resume(profile)?;
        info!(resume_id = record.id.0, "resume registered");
        Ok(record)
    }

    pub fn get(&self, id: ResumeId) -> Result<ResumeRecord, ResumeServiceError> {
        self.repository
            .fetch_resume(id)?
            .ok_or(ResumeServiceError::ResumeNotFound(id))
    }

    pub fn list(&self) -> Result<Vec<ResumeRecord>, ResumeServiceError> {
        Ok(self.repository.list_resumes()?)
    }

    pub fn delete(&self, id: ResumeId) -> Result<(), ResumeServiceError> {
        if self.repository.delete_resume(id)? {
            info!(resume_id = id.0, "resume deleted");
            Ok(())
        } else {
            Err(ResumeServiceError::ResumeNotFound(id))
        }
    }

    /// Assemble the resume text, score it, and upsert the score record so the
    /// resume carries exactly one current report.
    pub fn analyze(&self, id: ResumeId) -> Result<ScoreRecord, ResumeServiceError> {
        let record = self.get(id)?;
        let text = record.profile.scoring_text();
        let report = self.scorer.generate_score(&text);
        let score = ScoreRecord {
            report,
            analyzed_at: Utc::now(),
        };
        self.repository.upsert_score(id, score.clone())?;
        info!(
            resume_id = id.0,
            overall_score = score.report.overall_score,
            "resume analyzed"
        );
        Ok(score)
    }

    pub fn latest_score(&self, id: ResumeId) -> Result<ScoreRecord, ResumeServiceError> {
        self.get(id)?
            .score
            .ok_or(ResumeServiceError::ScoreNotFound(id))
    }

    pub fn create_job(&self, posting: JobPosting) -> Result<JobRecord, ResumeServiceError> {
        let record = self.repository.insert_job(posting)?;
        info!(job_id = record.id.0, "job posting created");
        Ok(record)
    }

    /// Match a stored resume's declared skills against a job posting's
    /// required skills. The report is computed on demand and not persisted.
    pub fn match_to_job(
        &self,
        resume_id: ResumeId,
        job_id: JobId,
    ) -> Result<JobMatchReport, ResumeServiceError> {
        let resume = self.get(resume_id)?;
        let job = self
            .repository
            .fetch_job(job_id)?
            .ok_or(ResumeServiceError::JobNotFound(job_id))?;

        Ok(JobMatchReport::compute(
            resume.profile.skills.iter().map(String::as_str),
            job.posting.required_skills.iter().map(String::as_str),
        ))
    }

    /// Aggregate counters for the analytics dashboard.
    pub fn dashboard(&self) -> Result<DashboardAnalytics, ResumeServiceError> {
        let resumes = self.repository.list_resumes()?;
        let jobs = self.repository.list_jobs()?;

        let scored: Vec<u8> = resumes
            .iter()
            .filter_map(|record| record.score.as_ref())
            .map(|score| score.report.overall_score)
            .collect();
        let average_overall_score = if scored.is_empty() {
            0.0
        } else {
            let total: u32 = scored.iter().map(|&score| u32::from(score)).sum();
            let average = f64::from(total) / scored.len() as f64;
            // Reported to two decimal places.
            (average * 100.0).round() / 100.0
        };

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for record in &resumes {
            for skill in &record.profile.skills {
                let normalized = skill.trim().to_lowercase();
                if !normalized.is_empty() {
                    *counts.entry(normalized).or_default() += 1;
                }
            }
        }
        let mut top_skills: Vec<SkillFrequency> = counts
            .into_iter()
            .map(|(skill, count)| SkillFrequency { skill, count })
            .collect();
        top_skills.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
        top_skills.truncate(TOP_SKILL_LIMIT);

        Ok(DashboardAnalytics {
            total_resumes: resumes.len(),
            total_jobs: jobs.len(),
            average_overall_score,
            top_skills,
        })
    }
}

/// Platform-wide aggregates served by the dashboard endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardAnalytics {
    pub total_resumes: usize,
    pub total_jobs: usize,
    pub average_overall_score: f64,
    pub top_skills: Vec<SkillFrequency>,
}

/// How often a declared skill appears across stored resumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: usize,
}

/// Error raised by the resume analysis service.
#[derive(Debug, thiserror::Error)]
pub enum ResumeServiceError {
    #[error("resume {0} not found")]
    ResumeNotFound(ResumeId),
    #[error("job posting {0} not found")]
    JobNotFound(JobId),
    #[error("resume {0} has not been analyzed yet")]
    ScoreNotFound(ResumeId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
