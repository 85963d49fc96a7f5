//! Rule-based grammar checking behind a swappable capability trait.
//!
//! The engine reports subject-verb agreement, spelling, punctuation,
//! capitalization, and redundancy issues. Alternate backends (remote
//! services, ML-based linters) implement [`GrammarChecker`] and map their
//! own failure and timeout conditions to [`EngineUnavailable`].

mod rules;

use serde::{Deserialize, Serialize};

/// Penalty applied per detected error when deriving the grammar score.
const POINTS_PER_ERROR: u32 = 5;

/// Maximum number of errors retained in a [`crate::scoring::ScoreReport`].
pub const REPORTED_ERROR_LIMIT: usize = 10;

/// A single detected language issue with a snippet of surrounding text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarError {
    pub message: String,
    pub context: String,
}

/// Full result of a grammar pass: every detected error, ordered by the
/// position of occurrence in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarOutcome {
    pub errors: Vec<GrammarError>,
}

impl GrammarOutcome {
    /// `max(0, 100 − 5 × count)`, computed over the full error count — never
    /// over a truncated list.
    pub fn score(&self) -> u8 {
        100u32.saturating_sub(POINTS_PER_ERROR * self.errors.len() as u32) as u8
    }

    /// The first [`REPORTED_ERROR_LIMIT`] errors, for inclusion in reports.
    pub fn reported_errors(&self) -> Vec<GrammarError> {
        self.errors
            .iter()
            .take(REPORTED_ERROR_LIMIT)
            .cloned()
            .collect()
    }
}

/// Raised when the grammar backend cannot be reached or initialized; a
/// deadline overrun on a remote backend maps here as well.
#[derive(Debug, thiserror::Error)]
#[error("grammar engine unavailable: {reason}")]
pub struct EngineUnavailable {
    pub reason: String,
}

/// Capability seam for grammar backends so the aggregator never depends on a
/// concrete engine.
pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> Result<GrammarOutcome, EngineUnavailable>;
}

/// In-process rule engine. Stateless, bounded latency, trivially shareable
/// across concurrent scoring calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedChecker;

impl GrammarChecker for RuleBasedChecker {
    fn check(&self, text: &str) -> Result<GrammarOutcome, EngineUnavailable> {
        Ok(GrammarOutcome {
            errors: rules::run(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_scores_full_marks() {
        let outcome = RuleBasedChecker.check("We shipped the release on time.").unwrap();
        assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);
        assert_eq!(outcome.score(), 100);
    }

    #[test]
    fn empty_text_has_no_errors() {
        let outcome = RuleBasedChecker.check("").unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.score(), 100);
    }

    #[test]
    fn each_error_costs_five_points() {
        let outcome = GrammarOutcome {
            errors: vec![
                GrammarError {
                    message: "one".to_string(),
                    context: String::new(),
                };
                3
            ],
        };
        assert_eq!(outcome.score(), 85);
    }

    #[test]
    fn score_floors_at_zero_while_reported_list_truncates() {
        let outcome = GrammarOutcome {
            errors: vec![
                GrammarError {
                    message: "noise".to_string(),
                    context: String::new(),
                };
                25
            ],
        };
        assert_eq!(outcome.score(), 0);
        assert_eq!(outcome.reported_errors().len(), REPORTED_ERROR_LIMIT);
    }

    #[test]
    fn detects_each_rule_class() {
        let checker = RuleBasedChecker;

        let agreement = checker.check("They is shipping weekly.").unwrap();
        assert!(agreement
            .errors
            .iter()
            .any(|e| e.message.contains("agreement")));

        let spelling = checker.check("I recieve weekly reports.").unwrap();
        assert!(spelling.errors.iter().any(|e| e.message.contains("spelling")));

        let punctuation = checker.check("Led the team , shipped twice.").unwrap();
        assert!(punctuation
            .errors
            .iter()
            .any(|e| e.message.contains("punctuation")));

        let capitalization = checker.check("built the ingestion pipeline.").unwrap();
        assert!(capitalization
            .errors
            .iter()
            .any(|e| e.message.contains("uppercase")));

        let redundancy = checker.check("Responsible for the the deployment.").unwrap();
        assert!(redundancy
            .errors
            .iter()
            .any(|e| e.message.contains("Repeated")));
    }

    #[test]
    fn errors_follow_position_of_occurrence() {
        let outcome = RuleBasedChecker
            .check("they was late. Then we recieve the the report.")
            .unwrap();
        assert!(outcome.errors.len() >= 3);
        let positions: Vec<usize> = outcome
            .errors
            .iter()
            .map(|e| {
                [
                    ("uppercase", 0usize),
                    ("agreement", 1),
                    ("spelling", 2),
                    ("Repeated", 3),
                ]
                .iter()
                .find(|(needle, _)| e.message.contains(needle))
                .map(|(_, rank)| *rank)
                .unwrap_or(usize::MAX)
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "{:?}", outcome.errors);
    }
}
