//! Normalized ease-of-reading metric from sentence/word statistics.
//!
//! Uses the Flesch Reading Ease formula
//! `206.835 − 1.015 × (words/sentences) − 84.6 × (syllables/words)`,
//! clamped into [0, 100] since the raw formula is unbounded on short or
//! degenerate text. Higher is easier to read.

/// Flesch Reading Ease of `text`, clamped into [0, 100].
///
/// Text with no words yields 0.0 by convention (the statistics are undefined
/// and the score clamps to the floor). A word must contain at least one
/// alphanumeric character, so punctuation-only text lands on the same floor
/// as whitespace-only text.
pub fn readability(text: &str) -> f64 {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentences = count_sentences(text).max(1);
    let syllables: usize = words.iter().map(|word| syllables_in(word)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let raw = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    raw.clamp(0.0, 100.0)
}

/// Count sentences as terminator-delimited segments containing at least one
/// alphanumeric character, so trailing punctuation and bullet noise do not
/// inflate the count.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

/// Heuristic syllable count: vowel groups, with a silent trailing "e"
/// discounted and a floor of one syllable per word.
fn syllables_in(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut previous_was_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            groups += 1;
        }
        previous_was_vowel = vowel;
    }

    if groups > 1 && letters.ends_with(&['e']) && !letters.ends_with(&['l', 'e']) {
        groups -= 1;
    }

    groups.max(1)
}
