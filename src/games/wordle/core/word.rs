use std::{collections::HashMap, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::guess::Guess;

/// A target word, with its letter multiset precomputed for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: Vec<char>,
    letter_counts: HashMap<char, usize>,
}

impl Word {
    /// Builds a word without checking its alphabet. Use [`FromStr`] for
    /// untrusted input.
    pub fn new(word: &str) -> Self {
        let letters = word.to_lowercase().chars().collect::<Vec<char>>();

        let mut letter_counts: HashMap<char, usize> = HashMap::new();
        for letter in &letters {
            *letter_counts.entry(*letter).or_default() += 1;
        }

        Self {
            letters,
            letter_counts,
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Scores `word` against this target. Callers check the length first.
    pub fn guess(&self, word: &str) -> Guess {
        let mut guess: Guess = Guess::new(word);
        debug_assert_eq!(guess.len(), self.len(), "guess length should match target");

        let mut letter_counts = self.letter_counts.clone();
        let letters: Vec<char> = guess.word().chars().collect();

        for (index, letter) in letters.iter().enumerate() {
            if self.letters.get(index) == Some(letter) {
                guess.mark_correct(index);
                if let Some(count) = letter_counts.get_mut(letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (index, letter) in letters.iter().enumerate() {
            if guess.is_correct_at(index) {
                continue;
            }

            if let Some(count) = letter_counts.get_mut(letter).filter(|count| **count > 0) {
                trace!("{}: present", letter);

                guess.mark_present(index);
                *count -= 1;
            }
        }

        debug!(answer = %self, %guess);

        guess
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWordError {
    #[error("word must have at least one letter")]
    Empty,

    #[error("word `{word}` contains `{letter}`, only a-z and ç are allowed")]
    InvalidLetter { word: String, letter: char },
}

pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch == 'ç'
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_lowercase();

        if word.is_empty() {
            return Err(ParseWordError::Empty);
        }

        if let Some(letter) = word.chars().find(|ch| !is_letter(*ch)) {
            return Err(ParseWordError::InvalidLetter {
                word: word.clone(),
                letter,
            });
        }

        Ok(Self::new(&word))
    }
}

impl TryFrom<String> for Word {
    type Error = ParseWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<Word> for String {
    fn from(value: Word) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.letters.iter().copied().eq(other.chars())
    }
}
