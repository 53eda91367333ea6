use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub raw_distance: usize,
    /// 0 to 100, higher is closer.
    pub normalized_score: u8,
    pub exact_match: bool,
}

fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Classic Levenshtein distance over chars. Keeps a single row sized by the shorter input.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}

fn distance(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitution = diagonal + usize::from(lc != sc);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }
    row[short.len()]
}

/// Grades a recognized utterance against the expected word, ignoring case.
///
/// Two empty inputs score 100. An empty utterance for a non-empty word scores 0, like any other total miss.
pub fn similarity(expected: &str, heard: &str) -> ScoreResult {
    let expected = fold(expected);
    let heard = fold(heard);
    let exact_match = expected == heard;

    let max_len = expected.len().max(heard.len());
    if max_len == 0 {
        return ScoreResult {
            raw_distance: 0,
            normalized_score: 100,
            exact_match,
        };
    }

    let raw_distance = distance(&expected, &heard);
    let kept = max_len.saturating_sub(raw_distance);
    // round(100 * kept / max_len), halves up
    let score = (200 * kept + max_len) / (2 * max_len);
    ScoreResult {
        raw_distance,
        normalized_score: score.min(100) as u8,
        exact_match,
    }
}
