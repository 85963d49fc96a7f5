//! Rule set for the in-process grammar engine.
//!
//! Each rule emits findings tagged with the byte offset of the offending
//! text; the merged list is stably sorted so errors retain their order of
//! occurrence regardless of which rule produced them.

use super::GrammarError;

/// Bytes of surrounding text captured on each side of a finding.
const CONTEXT_RADIUS: usize = 30;

/// Subject pronouns paired with verb forms they cannot take.
const AGREEMENT_VIOLATIONS: &[(&str, &str)] = &[
    ("i", "is"),
    ("i", "has"),
    ("i", "does"),
    ("he", "have"),
    ("she", "have"),
    ("it", "have"),
    ("they", "is"),
    ("they", "was"),
    ("they", "has"),
    ("they", "does"),
    ("we", "is"),
    ("we", "was"),
    ("we", "has"),
    ("you", "is"),
    ("you", "was"),
    ("you", "has"),
];

/// Misspellings common in resume prose, paired with their corrections.
const MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("recieve", "receive"),
    ("recieved", "received"),
    ("seperate", "separate"),
    ("definately", "definitely"),
    ("occured", "occurred"),
    ("managment", "management"),
    ("experiance", "experience"),
    ("acheive", "achieve"),
    ("acheived", "achieved"),
    ("enviroment", "environment"),
    ("responsibilty", "responsibility"),
    ("succesful", "successful"),
    ("proffesional", "professional"),
    ("buisness", "business"),
    ("calender", "calendar"),
    ("comunication", "communication"),
    ("knowlege", "knowledge"),
];

/// Phrases that say the same thing twice.
const REDUNDANT_PHRASES: &[&str] = &[
    "absolutely essential",
    "advance planning",
    "basic fundamentals",
    "close proximity",
    "collaborate together",
    "completely finished",
    "end result",
    "final outcome",
    "free gift",
    "join together",
    "past history",
];

pub(super) fn run(text: &str) -> Vec<GrammarError> {
    let mut findings: Vec<(usize, String)> = Vec::new();

    check_capitalization(text, &mut findings);
    check_tokens(text, &mut findings);
    check_punctuation(text, &mut findings);
    check_redundant_phrases(text, &mut findings);

    findings.sort_by_key(|(offset, _)| *offset);
    findings
        .into_iter()
        .map(|(offset, message)| GrammarError {
            message,
            context: context_snippet(text, offset),
        })
        .collect()
}

/// Sentences must open with an uppercase letter. Only `.`/`!`/`?` reset the
/// sentence state so line breaks inside a sentence are not penalized.
fn check_capitalization(text: &str, findings: &mut Vec<(usize, String)>) {
    let mut at_sentence_start = true;
    for (offset, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            at_sentence_start = true;
        } else if c.is_alphanumeric() {
            if at_sentence_start && c.is_lowercase() {
                findings.push((
                    offset,
                    "Sentence does not start with an uppercase letter".to_string(),
                ));
            }
            at_sentence_start = false;
        }
    }
}

/// Token-level rules: subject-verb agreement, spelling, repeated words, and
/// the lowercase pronoun "i".
fn check_tokens(text: &str, findings: &mut Vec<(usize, String)>) {
    let tokens = tokens_with_offsets(text);
    let cores: Vec<String> = tokens.iter().map(|(_, raw)| token_core(raw)).collect();

    for (index, (offset, raw)) in tokens.iter().enumerate() {
        let core = cores[index].as_str();
        if core.is_empty() {
            continue;
        }

        if *raw == "i" {
            findings.push((*offset, "The pronoun 'I' should be capitalized".to_string()));
        }

        if let Some((found, correction)) = MISSPELLINGS
            .iter()
            .find(|(misspelled, _)| *misspelled == core)
        {
            findings.push((
                *offset,
                format!("Possible spelling mistake: '{found}' should be '{correction}'"),
            ));
        }

        let crosses_sentence = raw.ends_with(['.', '!', '?']);
        if let Some((next_offset, _)) = tokens.get(index + 1) {
            let next_core = cores[index + 1].as_str();
            if next_core.is_empty() || crosses_sentence {
                continue;
            }

            if AGREEMENT_VIOLATIONS
                .iter()
                .any(|(subject, verb)| *subject == core && *verb == next_core)
            {
                findings.push((
                    *offset,
                    format!("Possible subject-verb agreement error: '{core} {next_core}'"),
                ));
            }

            if core == next_core && core.len() >= 2 && core.chars().all(char::is_alphabetic) {
                findings.push((*next_offset, format!("Repeated word '{core}'")));
            }
        }
    }
}

/// Whitespace and punctuation shape: duplicated marks, stray spaces before
/// punctuation, and runs of spaces inside a line.
fn check_punctuation(text: &str, findings: &mut Vec<(usize, String)>) {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut i = 0;
    while i < chars.len() {
        let (start, c) = chars[i];
        let mut j = i + 1;
        while j < chars.len() && chars[j].1 == c {
            j += 1;
        }
        let run_len = j - i;

        if c == ' ' && run_len >= 2 {
            let after_line_break = i > 0 && matches!(chars[i - 1].1, '\n' | '\r');
            if !after_line_break {
                findings.push((start, "Multiple consecutive spaces".to_string()));
            }
        }

        let duplicated = match c {
            ',' | ';' | '!' | '?' => run_len >= 2,
            // An exact ellipsis is tolerated.
            '.' => run_len == 2 || run_len >= 4,
            _ => false,
        };
        if duplicated {
            findings.push((start, format!("Duplicated punctuation mark '{c}'")));
        }

        if matches!(c, ',' | '.' | ';' | ':' | '!' | '?') && i > 0 && chars[i - 1].1 == ' ' {
            findings.push((start, format!("Whitespace before punctuation mark '{c}'")));
        }

        i = j;
    }
}

fn check_redundant_phrases(text: &str, findings: &mut Vec<(usize, String)>) {
    // ASCII lowering keeps byte offsets aligned with the source text.
    let lowered: String = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    for phrase in REDUNDANT_PHRASES {
        for (offset, _) in lowered.match_indices(phrase) {
            findings.push((offset, format!("Redundant phrase '{phrase}'")));
        }
    }
}

/// Whitespace-delimited tokens with their byte offsets.
fn tokens_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((s, &text[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((s, &text[s..]));
    }
    tokens
}

/// Lowercased token with surrounding punctuation stripped.
fn token_core(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Snippet of surrounding text for a finding, trimmed and flattened to a
/// single line.
fn context_snippet(text: &str, offset: usize) -> String {
    let mut start = offset.saturating_sub(CONTEXT_RADIUS);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (offset + CONTEXT_RADIUS).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    text[start..end].replace(['\n', '\r'], " ").trim().to_string()
}
