//! Settings contract between the per-child settings store and the game engine.
//!
//! The store keeps one `{enabled, difficulty}` entry per mini-app. Engines only ever see the parsed [`AppSettings`],
//! once per session start.

pub use settings::*;

mod settings;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MiniApp {
    MemoryMatch,
    SpellingGame,
    ReadingPractice,
    MathQuiz,
    StoryTime,
}

impl MiniApp {
    pub const ALL: [MiniApp; 5] = [
        Self::MemoryMatch,
        Self::SpellingGame,
        Self::ReadingPractice,
        Self::MathQuiz,
        Self::StoryTime,
    ];

    /// Key of this app's entry in the settings document, as written by the parental screen.
    pub const fn key(self) -> &'static str {
        match self {
            Self::MemoryMatch => "MemoryMatch",
            Self::SpellingGame => "Spelling Time",
            Self::ReadingPractice => "ReadingPractice",
            Self::MathQuiz => "Number Fun",
            Self::StoryTime => "Story Time",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.key() == key)
    }
}
