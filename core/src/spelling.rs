use alloc::string::String;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

pub type Letters = SmallVec<[char; 8]>;
pub type Slots = SmallVec<[Option<char>; 8]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellingStatus {
    InProgress,
    Solved,
    Incorrect,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceLetterOutcome {
    Accepted { index: usize },
    NoEmptySlot,
    LetterNotInBank,
}

impl PlaceLetterOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub const fn illegal_move(self) -> Option<IllegalMove> {
        match self {
            Self::Accepted { .. } => None,
            Self::NoEmptySlot => Some(IllegalMove::NoEmptySlot),
            Self::LetterNotInBank => Some(IllegalMove::LetterNotInBank),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoveOutcome {
    Accepted { letter: char, index: usize },
    SlotEmpty,
}

impl RemoveOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub const fn illegal_move(self) -> Option<IllegalMove> {
        match self {
            Self::Accepted { .. } => None,
            Self::SlotEmpty => Some(IllegalMove::SlotEmpty),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackspaceOutcome {
    Accepted { letter: char, index: usize },
    NothingToRemove,
}

impl BackspaceOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub const fn illegal_move(self) -> Option<IllegalMove> {
        match self {
            Self::Accepted { .. } => None,
            Self::NothingToRemove => Some(IllegalMove::NothingToRemove),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    RevealedLetter { letter: char, index: usize },
    NothingToReveal,
}

impl HintOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::RevealedLetter { .. })
    }

    pub const fn illegal_move(self) -> Option<IllegalMove> {
        match self {
            Self::RevealedLetter { .. } => None,
            Self::NothingToReveal => Some(IllegalMove::NothingToReveal),
        }
    }
}

/// Where a hinted letter is taken from.
enum LetterSource {
    Bank(usize),
    Slot(usize),
}

/// A word being spelled from a shuffled bank of its own letters.
///
/// Every mutation keeps `bank + filled slots` equal to the letters of the word, as a multiset.
/// Puzzles are only built through [`SpellingPuzzle::new`], never from data:
///
/// ```compile_fail
/// fn from_data<T: serde::de::DeserializeOwned>() {}
/// from_data::<learnly_core::SpellingPuzzle>();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpellingPuzzle {
    word: String,
    target: Letters,
    bank: Letters,
    slots: Slots,
}

impl SpellingPuzzle {
    pub fn new<R: RandomSource + ?Sized>(word: &str, rng: &mut R) -> Result<Self> {
        let word = word.trim().to_ascii_uppercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(GameError::InvalidWord);
        }
        let target: Letters = word.chars().collect();
        let mut puzzle = Self {
            word,
            bank: Letters::new(),
            slots: Slots::new(),
            target,
        };
        puzzle.reset(rng);
        Ok(puzzle)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn bank(&self) -> &[char] {
        &self.bank
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Slots concatenated, with `_` for empty ones.
    pub fn answer(&self) -> String {
        self.slots.iter().map(|slot| slot.unwrap_or('_')).collect()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn is_complete(&self) -> bool {
        self.slots
            .iter()
            .zip(self.target.iter())
            .all(|(slot, &expected)| *slot == Some(expected))
    }

    pub fn status(&self) -> SpellingStatus {
        if !self.is_full() {
            SpellingStatus::InProgress
        } else if self.is_complete() {
            SpellingStatus::Solved
        } else {
            SpellingStatus::Incorrect
        }
    }

    /// Deals a new puzzle from `pool`. Only allowed once this word is spelled correctly.
    pub fn next_word<R: RandomSource + ?Sized>(&self, pool: &[WordEntry], rng: &mut R) -> Result<Self> {
        if !self.is_complete() {
            return Err(GameError::WrongPhase);
        }
        let entry = choose_word(pool, rng).ok_or(GameError::EmptyWordPool)?;
        log::debug!("Moving on from {} to {}", self.word, entry.word);
        Self::new(entry.word, rng)
    }

    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.bank = self.target.clone();
        shuffle(&mut self.bank, rng);
        self.slots = core::iter::repeat_n(None, self.target.len()).collect();
    }

    /// Puts `letter` into the lowest empty slot.
    pub fn place(&mut self, letter: char) -> PlaceLetterOutcome {
        let letter = letter.to_ascii_uppercase();
        let Some(index) = self.first_empty_slot() else {
            return PlaceLetterOutcome::NoEmptySlot;
        };
        let Some(pos) = self.bank.iter().position(|&c| c == letter) else {
            return PlaceLetterOutcome::LetterNotInBank;
        };
        self.bank.remove(pos);
        self.slots[index] = Some(letter);
        PlaceLetterOutcome::Accepted { index }
    }

    pub fn remove_at<R: RandomSource + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<RemoveOutcome> {
        let slot = self.slots.get_mut(index).ok_or(GameError::InvalidSlot)?;
        let Some(letter) = slot.take() else {
            return Ok(RemoveOutcome::SlotEmpty);
        };
        self.return_to_bank(letter, rng);
        Ok(RemoveOutcome::Accepted { letter, index })
    }

    pub fn backspace_last<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> BackspaceOutcome {
        let Some(index) = self.slots.iter().rposition(Option::is_some) else {
            return BackspaceOutcome::NothingToRemove;
        };
        let Some(letter) = self.slots[index].take() else {
            return BackspaceOutcome::NothingToRemove;
        };
        self.return_to_bank(letter, rng);
        BackspaceOutcome::Accepted { letter, index }
    }

    /// Corrects the lowest wrong slot, or else fills the lowest empty one.
    ///
    /// The correct letter comes from the bank. When an earlier wrong placement left the bank without it, the letter
    /// is moved out of another slot holding it, leaving that slot empty.
    pub fn hint<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> HintOutcome {
        let wrong = self
            .slots
            .iter()
            .zip(self.target.iter())
            .position(|(slot, &expected)| matches!(slot, Some(c) if *c != expected));
        let Some(index) = wrong.or_else(|| self.first_empty_slot()) else {
            return HintOutcome::NothingToReveal;
        };
        let letter = self.target[index];

        let source = match self.bank.iter().position(|&c| c == letter) {
            Some(pos) => LetterSource::Bank(pos),
            None => match self.find_in_other_slot(letter, index) {
                Some(other) => LetterSource::Slot(other),
                None => {
                    log::warn!("Letter {:?} missing from bank and slots", letter);
                    return HintOutcome::NothingToReveal;
                }
            },
        };

        match source {
            LetterSource::Bank(pos) => {
                self.bank.remove(pos);
            }
            LetterSource::Slot(other) => {
                log::debug!("Hint moves {:?} from slot {} to slot {}", letter, other, index);
                self.slots[other] = None;
            }
        }
        if let Some(displaced) = self.slots[index].replace(letter) {
            self.bank.push(displaced);
        }
        shuffle(&mut self.bank, rng);
        HintOutcome::RevealedLetter { letter, index }
    }

    fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Another slot holding `letter`, preferring one where it is misplaced.
    fn find_in_other_slot(&self, letter: char, skip: usize) -> Option<usize> {
        let holds = |i: usize| i != skip && self.slots[i] == Some(letter);
        (0..self.slots.len())
            .find(|&i| holds(i) && self.target[i] != letter)
            .or_else(|| (0..self.slots.len()).find(|&i| holds(i)))
    }

    fn return_to_bank<R: RandomSource + ?Sized>(&mut self, letter: char, rng: &mut R) {
        self.bank.push(letter);
        shuffle(&mut self.bank, rng);
    }
}
