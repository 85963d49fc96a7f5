use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// Default vocabulary applied when no override is configured.
const DEFAULT_TARGET_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "sql",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "nodejs",
    "django",
    "flask",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "machine learning",
    "deep learning",
    "nlp",
    "data analysis",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "api",
    "rest",
    "mongodb",
    "postgresql",
    "mysql",
];

/// Ordered set of lowercase skill names, fixed at construction time.
///
/// Entries may contain internal whitespace (multi-word skills such as
/// "machine learning"); those are matched by substring containment while
/// single-word entries are matched token-for-token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillVocabulary {
    entries: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_SKILLS.iter().copied())
    }
}

impl SkillVocabulary {
    /// Build a vocabulary from raw skill names, lower-casing and deduplicating
    /// while preserving first-seen order.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for skill in skills {
            let normalized = skill.as_ref().trim().to_lowercase();
            if normalized.is_empty() || entries.iter().any(|existing| *existing == normalized) {
                continue;
            }
            entries.push(normalized);
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lexical membership check of the vocabulary against `text`.
    ///
    /// Single-word entries match when any token of the lower-cased text equals
    /// them; multi-word entries match when the phrase appears as a contiguous
    /// substring of the lower-cased text. The two tiers are deliberate:
    /// unifying them would change matched sets for compound terms ("c++"
    /// would collapse into "c" under pure substring matching).
    pub fn match_skills(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        if text.trim().is_empty() {
            return found;
        }

        let lowered = text.to_lowercase();
        let tokens = tokenize(&lowered);

        for entry in &self.entries {
            let matched = if entry.contains(' ') {
                lowered.contains(entry.as_str())
            } else {
                tokens.contains(entry.as_str())
            };
            if matched {
                found.insert(entry.clone());
            }
        }

        found
    }

    /// Vocabulary entries absent from `matched`; the complement used for the
    /// missing-skills half of a score report.
    pub fn missing_from(&self, matched: &BTreeSet<String>) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|entry| !matched.contains(entry.as_str()))
            .cloned()
            .collect()
    }
}

/// Token set of `lowered`: whitespace-delimited words with surrounding
/// punctuation stripped, plus each word's interior runs so comma- or
/// slash-joined lists ("python,sql") still surface their members.
///
/// `+` and `#` are kept in both passes so "c++" and "c#" survive intact and
/// never shed a bare "c". The whole trimmed word is always kept as well, so
/// hyphenated skills ("scikit-learn") keep matching their full form.
fn tokenize(lowered: &str) -> HashSet<&str> {
    let keep = |c: char| c.is_alphanumeric() || c == '+' || c == '#';
    let mut tokens = HashSet::new();
    for raw in lowered.split_whitespace() {
        let trimmed = raw.trim_matches(|c: char| !keep(c));
        if !trimmed.is_empty() {
            tokens.insert(trimmed);
        }
        for run in raw.split(|c: char| !keep(c)) {
            if !run.is_empty() {
                tokens.insert(run);
            }
        }
    }
    tokens
}
