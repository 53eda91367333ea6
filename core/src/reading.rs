use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Minimum score for an attempt to count as close.
pub const CLOSE_SCORE: u8 = 70;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingGrade {
    /// The recognizer returned nothing usable.
    Unheard,
    Exact(ScoreResult),
    Close(ScoreResult),
    TryAgain(ScoreResult),
}

impl ReadingGrade {
    pub fn score(&self) -> Option<ScoreResult> {
        match self {
            Self::Unheard => None,
            Self::Exact(score) | Self::Close(score) | Self::TryAgain(score) => Some(*score),
        }
    }
}

/// Grades what the recognizer heard. Only the first word of the phrase is compared.
pub fn grade_attempt(expected: &str, heard_raw: &str) -> ReadingGrade {
    let Some(first_word) = heard_raw.split_whitespace().next() else {
        return ReadingGrade::Unheard;
    };
    let score = similarity(expected.trim(), first_word);
    if score.exact_match {
        ReadingGrade::Exact(score)
    } else if score.normalized_score >= CLOSE_SCORE {
        ReadingGrade::Close(score)
    } else {
        ReadingGrade::TryAgain(score)
    }
}

/// Sound prompt for one letter, `None` outside A-Z.
pub fn phonics_for(letter: char) -> Option<&'static str> {
    let sound = match letter.to_ascii_uppercase() {
        'A' => "a, like in apple",
        'B' => "b, b, b",
        'C' => "k, like in cat",
        'D' => "d, d, d",
        'E' => "eh, like in bed",
        'F' => "fff",
        'G' => "g, g, g",
        'H' => "h, h, h",
        'I' => "ih, like in sit",
        'J' => "j, j, j",
        'K' => "k, k, k",
        'L' => "l, l, l",
        'M' => "mmm",
        'N' => "nnn",
        'O' => "o, like in dog",
        'P' => "p, p, p",
        'Q' => "kw, like in queen",
        'R' => "rrr",
        'S' => "sss",
        'T' => "t, t, t",
        'U' => "uh, like in sun",
        'V' => "vvv",
        'W' => "w, w, w",
        'X' => "ks, like in fox",
        'Y' => "y, like in yes",
        'Z' => "zzz",
        _ => return None,
    };
    Some(sound)
}

/// `"CAT"` becomes `"C - A - T"`, for speaking one letter at a time.
pub fn spell_out(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 4);
    for (i, letter) in word.chars().enumerate() {
        if i > 0 {
            out.push_str(" - ");
        }
        out.push(letter);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_by_first_heard_word() {
        let grade = grade_attempt("TIGER", "  Tiger is big ");
        assert!(matches!(grade, ReadingGrade::Exact(score) if score.normalized_score == 100));
    }

    #[test]
    fn close_and_far_attempts() {
        // 1 - 1/5 = 80
        assert!(matches!(grade_attempt("HOUSE", "mouse"), ReadingGrade::Close(_)));
        // 1 - 1/3 = 67
        assert!(matches!(grade_attempt("CAT", "cot"), ReadingGrade::TryAgain(_)));
        assert!(matches!(grade_attempt("CAT", "banana"), ReadingGrade::TryAgain(_)));
    }

    #[test]
    fn seventy_is_close_enough() {
        // 3 edits over 10 letters
        let grade = grade_attempt("WATERMELON", "watermxxxn");
        assert!(matches!(grade, ReadingGrade::Close(score) if score.normalized_score == CLOSE_SCORE));
        // 4 edits over 10 letters
        let grade = grade_attempt("WATERMELON", "waterxxxxn");
        assert!(matches!(grade, ReadingGrade::TryAgain(score) if score.normalized_score == 60));
    }

    #[test]
    fn blank_phrase_is_unheard() {
        assert_eq!(grade_attempt("CAT", ""), ReadingGrade::Unheard);
        assert_eq!(grade_attempt("CAT", "   \t"), ReadingGrade::Unheard);
        assert_eq!(grade_attempt("CAT", "").score(), None);
    }

    #[test]
    fn phonics_cover_the_alphabet() {
        assert!(('A'..='Z').all(|c| phonics_for(c).is_some()));
        assert_eq!(phonics_for('c'), Some("k, like in cat"));
        assert_eq!(phonics_for('7'), None);
    }

    #[test]
    fn spells_out_words() {
        assert_eq!(spell_out("CAT"), "C - A - T");
        assert_eq!(spell_out("A"), "A");
        assert_eq!(spell_out(""), "");
    }
}
