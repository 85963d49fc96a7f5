use std::collections::BTreeMap;
use std::sync::Mutex;

use super::domain::{
    CandidateProfile, JobId, JobPosting, JobRecord, ResumeId, ResumeRecord, ScoreRecord,
};

/// Storage abstraction so the service layer can be exercised in isolation.
/// Implementations assign identifiers on insert. Score upserts replace any
/// prior record for the resume; at most one active score per candidate.
pub trait ResumeRepository: Send + Sync {
    fn insert_resume(&self, profile: CandidateProfile) -> Result<ResumeRecord, RepositoryError>;
    fn fetch_resume(&self, id: ResumeId) -> Result<Option<ResumeRecord>, RepositoryError>;
    fn list_resumes(&self) -> Result<Vec<ResumeRecord>, RepositoryError>;
    fn delete_resume(&self, id: ResumeId) -> Result<bool, RepositoryError>;
    fn upsert_score(&self, id: ResumeId, score: ScoreRecord) -> Result<(), RepositoryError>;
    fn insert_job(&self, posting: JobPosting) -> Result<JobRecord, RepositoryError>;
    fn fetch_job(&self, id: JobId) -> Result<Option<JobRecord>, RepositoryError>;
    fn list_jobs(&self) -> Result<Vec<JobRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct Store {
    next_resume_id: u64,
    next_job_id: u64,
    resumes: BTreeMap<ResumeId, ResumeRecord>,
    jobs: BTreeMap<JobId, JobRecord>,
}

/// Mutex-guarded in-memory store used by the API service and tests. SQL
/// backends live behind the same trait in their own crates.
#[derive(Debug, Default)]
pub struct InMemoryResumeRepository {
    store: Mutex<Store>,
}

impl ResumeRepository for InMemoryResumeRepository {
    fn insert_resume(&self, profile: CandidateProfile) -> Result<ResumeRecord, RepositoryError> {
        let mut store = self.store.lock().expect("repository mutex poisoned");
        store.next_resume_id += 1;
        let record = ResumeRecord {
            id: ResumeId(store.next_resume_id),
            profile,
            score: None,
        };
        store.resumes.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch_resume(&self, id: ResumeId) -> Result<Option<ResumeRecord>, RepositoryError> {
        let store = self.store.lock().expect("repository mutex poisoned");
        Ok(store.resumes.get(&id).cloned())
    }

    fn list_resumes(&self) -> Result<Vec<ResumeRecord>, RepositoryError> {
        let store = self.store.lock().expect("repository mutex poisoned");
        Ok(store.resumes.values().cloned().collect())
    }

    fn delete_resume(&self, id: ResumeId) -> Result<bool, RepositoryError> {
        let mut store = self.store.lock().expect("repository mutex poisoned");
        Ok(store.resumes.remove(&id).is_some())
    }

    fn upsert_score(&self, id: ResumeId, score: ScoreRecord) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().expect("repository mutex poisoned");
        let record = store.resumes.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        record.score = Some(score);
        Ok(())
    }

    fn insert_job(&self, posting: JobPosting) -> Result<JobRecord, RepositoryError> {
        let mut store = self.store.lock().expect("repository mutex poisoned");
        store.next_job_id += 1;
        let record = JobRecord {
            id: JobId(store.next_job_id),
            posting,
            created_at: chrono::Utc::now(),
        };
        store.jobs.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch_job(&self, id: JobId) -> Result<Option<JobRecord>, RepositoryError> {
        let store = self.store.lock().expect("repository mutex poisoned");
        Ok(store.jobs.get(&id).cloned())
    }

    fn list_jobs(&self) -> Result<Vec<JobRecord>, RepositoryError> {
        let store = self.store.lock().expect("repository mutex poisoned");
        Ok(store.jobs.values().cloned().collect())
    }
}
