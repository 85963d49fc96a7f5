use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreReport;

/// Identifier wrapper for stored resumes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ResumeId(pub u64);

/// Identifier wrapper for job postings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct JobId(pub u64);

impl std::fmt::Display for ResumeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact details extracted upstream. Every field beyond the name is
/// optional; extraction is a lossy, non-deterministic collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub job_title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Structured candidate profile as produced by the upstream extraction
/// collaborator and stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub educations: Vec<Education>,
}

impl CandidateProfile {
    /// Assemble the text handed to the scorer: summary, skill names,
    /// work-experience descriptions, and project descriptions, newline
    /// separated. Missing fields contribute nothing; no field is ever
    /// rendered as a literal "null". Contact details and education entries
    /// are deliberately excluded so header noise does not skew grammar and
    /// readability statistics.
    pub fn scoring_text(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if let Some(summary) = self.summary.as_deref() {
            if !summary.trim().is_empty() {
                sections.push(summary.trim().to_string());
            }
        }

        if !self.skills.is_empty() {
            sections.push(self.skills.join(" "));
        }

        for experience in &self.work_experiences {
            if let Some(description) = experience.description.as_deref() {
                if !description.trim().is_empty() {
                    sections.push(description.trim().to_string());
                }
            }
        }

        for project in &self.projects {
            if let Some(description) = project.description.as_deref() {
                if !description.trim().is_empty() {
                    sections.push(description.trim().to_string());
                }
            }
        }

        sections.join("\n")
    }
}

/// A job posting with the skill set it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// Score report plus the moment it was produced; at most one per resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub report: ScoreReport,
    pub analyzed_at: DateTime<Utc>,
}

/// Repository record for a stored resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: ResumeId,
    pub profile: CandidateProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreRecord>,
}

/// Repository record for a stored job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub posting: JobPosting,
    pub created_at: DateTime<Utc>,
}
