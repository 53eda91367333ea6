use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MathQuestion {
    pub prompt: &'static str,
    pub answer: i32,
    /// Counting trick shown as the hint.
    pub trick: &'static str,
}

impl MathQuestion {
    const fn new(prompt: &'static str, answer: i32, trick: &'static str) -> Self {
        Self {
            prompt,
            answer,
            trick,
        }
    }
}

static EASY_QUESTIONS: [MathQuestion; 5] = [
    MathQuestion::new("2 + 2 =", 4, "Hold up 2 fingers on each hand. Count them!"),
    MathQuestion::new("5 - 1 =", 4, "Hold up 5 fingers. Put one down."),
    MathQuestion::new("3 + 4 =", 7, "Start with 4, and count up 3 more: 5, 6, 7."),
    MathQuestion::new("8 - 3 =", 5, "Start at 8 and count back 3: 7, 6, 5."),
    MathQuestion::new("1 + 2 =", 3, "Hold up 1 finger, then 2 more."),
];

static MEDIUM_QUESTIONS: [MathQuestion; 5] = [
    MathQuestion::new("15 + 8 =", 23, "You can do 15 + 10, then take away 2."),
    MathQuestion::new("30 - 12 =", 18, "Try 30 - 10 first, then take away 2 more."),
    MathQuestion::new("5 x 3 =", 15, "Count by 5s three times: 5, 10, 15."),
    MathQuestion::new("10 + 17 =", 27, "Add the tens (10+10), then add the ones (7)."),
    MathQuestion::new("25 - 9 =", 16, "25 - 10 is 15. Since you only took 9, add 1 back."),
];

static HARD_QUESTIONS: [MathQuestion; 5] = [
    MathQuestion::new("7 x 6 =", 42, "Try 7 x 5 first, then add 7 more."),
    MathQuestion::new("45 / 9 =", 5, "How many times does 9 go into 45?"),
    MathQuestion::new(
        "12 x 11 =",
        132,
        "For 11s, split the '12' -> 1__2 and add 1+2 in the middle!",
    ),
    MathQuestion::new("8 x 8 =", 64, "This is a square number!"),
    MathQuestion::new("100 / 4 =", 25, "Think of 4 quarters in a dollar."),
];

pub fn math_questions(difficulty: Difficulty) -> &'static [MathQuestion] {
    match difficulty {
        Difficulty::Easy => &EASY_QUESTIONS,
        Difficulty::Medium => &MEDIUM_QUESTIONS,
        Difficulty::Hard => &HARD_QUESTIONS,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    Blank,
    NotANumber,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizProgress {
    Next(usize),
    Complete,
}

/// Works through a fixed question list. A question has to be answered correctly before moving on.
#[derive(Clone, Debug, PartialEq)]
pub struct MathQuiz {
    questions: &'static [MathQuestion],
    index: usize,
    answered: bool,
}

impl MathQuiz {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_questions(math_questions(difficulty))
    }

    pub fn from_questions(questions: &'static [MathQuestion]) -> Self {
        Self {
            questions,
            index: 0,
            answered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// `None` once every question is done.
    pub fn current(&self) -> Option<&'static MathQuestion> {
        self.questions.get(self.index)
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn submit(&mut self, input: &str) -> Result<AnswerOutcome> {
        let question = self.current().ok_or(GameError::WrongPhase)?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(AnswerOutcome::Blank);
        }
        let Ok(value) = input.parse::<i32>() else {
            return Ok(AnswerOutcome::NotANumber);
        };
        if value == question.answer {
            self.answered = true;
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect)
        }
    }

    pub fn advance(&mut self) -> Result<QuizProgress> {
        if self.is_complete() || !self.answered {
            return Err(GameError::WrongPhase);
        }
        self.index += 1;
        self.answered = false;
        Ok(if self.is_complete() {
            QuizProgress::Complete
        } else {
            QuizProgress::Next(self.index)
        })
    }
}
