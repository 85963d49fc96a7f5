//! Skill-overlap matching between a candidate and a job posting.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Percentage overlap between a candidate's skills and a job's required
/// skills. Computed on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatchReport {
    pub match_score: u8,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub total_required: usize,
    pub total_matched: usize,
}

impl JobMatchReport {
    /// Compare the two skill sets case-insensitively.
    ///
    /// `match_score = round(100 × matched / required)`; an empty required
    /// set is a defined degenerate case scoring 0, never a division error.
    pub fn compute<'a, C, R>(candidate_skills: C, required_skills: R) -> Self
    where
        C: IntoIterator<Item = &'a str>,
        R: IntoIterator<Item = &'a str>,
    {
        let candidate: BTreeSet<String> = normalize(candidate_skills);
        let required: BTreeSet<String> = normalize(required_skills);

        let matched_skills: BTreeSet<String> =
            required.intersection(&candidate).cloned().collect();
        let missing_skills: BTreeSet<String> =
            required.difference(&candidate).cloned().collect();

        let match_score = if required.is_empty() {
            0
        } else {
            (100.0 * matched_skills.len() as f64 / required.len() as f64).round() as u8
        };

        Self {
            match_score,
            total_required: required.len(),
            total_matched: matched_skills.len(),
            matched_skills,
            missing_skills,
        }
    }
}

fn normalize<'a, I>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    skills
        .into_iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(candidate: &[&str], required: &[&str]) -> JobMatchReport {
        JobMatchReport::compute(candidate.iter().copied(), required.iter().copied())
    }

    #[test]
    fn two_of_three_required_skills_round_to_sixty_seven() {
        let report = report(&["python", "docker", "java"], &["python", "sql", "docker"]);
        assert_eq!(report.match_score, 67);
        assert_eq!(
            report.matched_skills,
            BTreeSet::from(["python".to_string(), "docker".to_string()])
        );
        assert_eq!(report.missing_skills, BTreeSet::from(["sql".to_string()]));
        assert_eq!(report.total_required, 3);
        assert_eq!(report.total_matched, 2);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let report = report(&["Python", "AWS"], &["python", "aws"]);
        assert_eq!(report.match_score, 100);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn empty_candidate_set_misses_everything() {
        let report = report(&[], &["python", "sql"]);
        assert_eq!(report.match_score, 0);
        assert_eq!(
            report.missing_skills,
            BTreeSet::from(["python".to_string(), "sql".to_string()])
        );
    }

    #[test]
    fn empty_required_set_scores_zero_without_error() {
        let report = report(&["python"], &[]);
        assert_eq!(report.match_score, 0);
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.total_required, 0);
    }

    #[test]
    fn blank_entries_are_dropped_before_comparing() {
        let report = report(&["python", "  "], &["python", ""]);
        assert_eq!(report.match_score, 100);
        assert_eq!(report.total_required, 1);
    }
}
