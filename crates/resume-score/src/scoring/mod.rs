//! Composite resume quality scoring.
//!
//! [`ResumeScorer`] combines skill coverage, readability, and grammar-error
//! density into a single [`ScoreReport`]. Scoring is deterministic given the
//! text and vocabulary; the only external state is the grammar engine handle,
//! and an unavailable engine degrades to a neutral grammar score rather than
//! failing the call.

pub mod grammar;
mod readability;
mod skills;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use grammar::{
    EngineUnavailable, GrammarChecker, GrammarError, GrammarOutcome, RuleBasedChecker,
    REPORTED_ERROR_LIMIT,
};
pub use readability::readability;
pub use skills::SkillVocabulary;

/// Weight given to skill coverage in the overall score.
const SKILLS_WEIGHT: f64 = 0.4;
/// Weight given to readability in the overall score.
const READABILITY_WEIGHT: f64 = 0.3;
/// Weight given to grammar in the overall score.
const GRAMMAR_WEIGHT: f64 = 0.3;

/// Points credited per matched vocabulary skill, capped at 100.
const POINTS_PER_SKILL: u32 = 10;

/// Result of one scoring invocation. Immutable once constructed; persisted
/// by the caller keyed by candidate (one active report per candidate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u8,
    pub skills_score: u8,
    pub readability_score: f64,
    pub grammar_score: u8,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub feedback: ScoreFeedback,
    /// First ten detected issues in order of occurrence. The grammar score
    /// reflects the full count, not this truncated list.
    pub grammar_errors: Vec<GrammarError>,
}

/// Qualitative feedback per scoring category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFeedback {
    pub skills: String,
    pub readability: String,
    pub grammar: String,
}

/// Deterministic scoring pipeline over a fixed vocabulary and a grammar
/// engine handle. Stateless per call and safe to share across request
/// handlers.
pub struct ResumeScorer {
    vocabulary: SkillVocabulary,
    checker: Arc<dyn GrammarChecker>,
}

impl ResumeScorer {
    /// Scorer over `vocabulary` backed by the in-process rule engine.
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self::with_checker(vocabulary, Arc::new(RuleBasedChecker))
    }

    /// Scorer with an explicit grammar backend, for alternate engines and
    /// tests.
    pub fn with_checker(vocabulary: SkillVocabulary, checker: Arc<dyn GrammarChecker>) -> Self {
        Self {
            vocabulary,
            checker,
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Score `resume_text`, producing the composite report.
    ///
    /// `overall = round(0.4 × skills + 0.3 × readability + 0.3 × grammar)`
    /// with `skills = min(100, 10 × matched)`. A grammar engine outage is
    /// logged and treated as a clean pass so skills and readability scoring
    /// always complete.
    pub fn generate_score(&self, resume_text: &str) -> ScoreReport {
        let matched_skills = self.vocabulary.match_skills(resume_text);
        let missing_skills = self.vocabulary.missing_from(&matched_skills);
        let readability_score = readability(resume_text);

        let grammar_outcome = match self.checker.check(resume_text) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "grammar engine unavailable; scoring without grammar penalty");
                GrammarOutcome::default()
            }
        };
        let grammar_score = grammar_outcome.score();
        let total_grammar_errors = grammar_outcome.errors.len();

        let skills_score =
            (POINTS_PER_SKILL * matched_skills.len() as u32).min(100) as u8;
        let overall = SKILLS_WEIGHT * f64::from(skills_score)
            + READABILITY_WEIGHT * readability_score
            + GRAMMAR_WEIGHT * f64::from(grammar_score);

        let feedback = ScoreFeedback {
            skills: if skills_score > 50 {
                "Great job on listing relevant skills!".to_string()
            } else {
                "Consider adding more industry-standard skills.".to_string()
            },
            readability: if readability_score > 60.0 {
                "Your resume is easy to read.".to_string()
            } else {
                "Try using shorter sentences and simpler words.".to_string()
            },
            grammar: if grammar_score > 80 {
                "Excellent grammar!".to_string()
            } else {
                format!("Found {total_grammar_errors} grammar issues.")
            },
        };

        ScoreReport {
            overall_score: overall.round() as u8,
            skills_score,
            readability_score,
            grammar_score,
            matched_skills,
            missing_skills,
            feedback,
            grammar_errors: grammar_outcome.reported_errors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingChecker;

    impl GrammarChecker for FailingChecker {
        fn check(&self, _text: &str) -> Result<GrammarOutcome, EngineUnavailable> {
            Err(EngineUnavailable {
                reason: "rule service offline".to_string(),
            })
        }
    }

    struct NoisyChecker(usize);

    impl GrammarChecker for NoisyChecker {
        fn check(&self, _text: &str) -> Result<GrammarOutcome, EngineUnavailable> {
            Ok(GrammarOutcome {
                errors: (0..self.0)
                    .map(|index| GrammarError {
                        message: format!("issue {index}"),
                        context: String::new(),
                    })
                    .collect(),
            })
        }
    }

    fn scorer() -> ResumeScorer {
        ResumeScorer::new(SkillVocabulary::new(["python", "machine learning", "java"]))
    }

    #[test]
    fn empty_text_yields_the_degenerate_report() {
        let report = scorer().generate_score("");
        assert_eq!(report.skills_score, 0);
        assert_eq!(report.readability_score, 0.0);
        assert_eq!(report.grammar_score, 100);
        assert!(report.grammar_errors.is_empty());
        assert!(report.matched_skills.is_empty());
        assert_eq!(report.missing_skills.len(), 3);
        assert_eq!(report.overall_score, 30);
    }

    #[test]
    fn matched_and_missing_partition_the_vocabulary() {
        let report = scorer()
            .generate_score("I have experience in Python and also Machine Learning techniques.");
        assert_eq!(report.skills_score, 20);
        assert!(report.matched_skills.contains("python"));
        assert!(report.matched_skills.contains("machine learning"));
        assert_eq!(report.missing_skills, BTreeSet::from(["java".to_string()]));
        assert!(report.matched_skills.is_disjoint(&report.missing_skills));
    }

    #[test]
    fn skills_score_caps_at_one_hundred() {
        let vocabulary = SkillVocabulary::default();
        let scorer = ResumeScorer::new(vocabulary.clone());
        let everything = vocabulary.entries().join(". ");
        let report = scorer.generate_score(&everything);
        assert!(report.matched_skills.len() > 10);
        assert_eq!(report.skills_score, 100);
    }

    #[test]
    fn overall_score_is_reconstructible_from_components() {
        let report = scorer().generate_score(
            "Senior engineer with Python and Java. Built resilient data platforms for years.",
        );
        let expected = (0.4 * f64::from(report.skills_score)
            + 0.3 * report.readability_score
            + 0.3 * f64::from(report.grammar_score))
        .round() as u8;
        assert_eq!(report.overall_score, expected);
    }

    #[test]
    fn engine_outage_degrades_to_a_clean_grammar_pass() {
        let scorer = ResumeScorer::with_checker(
            SkillVocabulary::new(["python"]),
            Arc::new(FailingChecker),
        );
        let report = scorer.generate_score("Python everywhere.");
        assert_eq!(report.grammar_score, 100);
        assert!(report.grammar_errors.is_empty());
        assert_eq!(report.skills_score, 10);
    }

    #[test]
    fn grammar_penalty_uses_full_count_and_truncates_reported_errors() {
        let scorer = ResumeScorer::with_checker(
            SkillVocabulary::new(["python"]),
            Arc::new(NoisyChecker(14)),
        );
        let report = scorer.generate_score("Fine text.");
        assert_eq!(report.grammar_score, 30);
        assert_eq!(report.grammar_errors.len(), REPORTED_ERROR_LIMIT);
        assert_eq!(report.feedback.grammar, "Found 14 grammar issues.");
    }

    #[test]
    fn feedback_thresholds_follow_the_sub_scores() {
        let report = scorer().generate_score("");
        assert_eq!(
            report.feedback.skills,
            "Consider adding more industry-standard skills."
        );
        assert_eq!(
            report.feedback.readability,
            "Try using shorter sentences and simpler words."
        );
        assert_eq!(report.feedback.grammar, "Excellent grammar!");
    }
}
