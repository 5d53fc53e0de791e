use std::{
    borrow::Cow,
    fmt::Display,
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::AsEmoji;

/// A scored guess: every letter paired with its [`LetterState`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    letters: Vec<(char, LetterState)>,
}

impl Guess {
    /// Unscored guess, every letter starts out [`LetterState::Absent`].
    pub fn new(word: &str) -> Self {
        let letters = word
            .to_lowercase()
            .chars()
            .map(|ch: char| (ch, LetterState::Absent))
            .collect::<Vec<(char, LetterState)>>();

        Self { letters }
    }

    pub fn mark_correct(&mut self, index: usize) {
        self[index].1 = LetterState::Correct;
    }

    pub fn mark_present(&mut self, index: usize) {
        self[index].1 = LetterState::Present;
    }

    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|(_, state)| *state == LetterState::Correct)
    }

    pub fn is_correct_at(&self, index: usize) -> bool {
        self[index].1 == LetterState::Correct
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn word(&self) -> String {
        self.letters.iter().map(|(letter, _)| *letter).collect()
    }

    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.letters.iter().map(|(_, state)| *state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(char, LetterState)> + '_ {
        self.letters.iter()
    }
}

impl AsEmoji for Guess {
    fn as_emoji(&self) -> Cow<str> {
        self.letters
            .iter()
            .map(|(_, state)| state.as_emoji())
            .collect::<String>()
            .into()
    }
}

impl Index<usize> for Guess {
    type Output = (char, LetterState);

    fn index(&self, index: usize) -> &Self::Output {
        self.letters.index(index)
    }
}

impl IndexMut<usize> for Guess {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.letters.index_mut(index)
    }
}

/// Prints the states in the compact `O`/`o`/`.` notation.
impl Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for state in self.states() {
            write!(f, "{state}")?;
        }

        Ok(())
    }
}

impl PartialEq<&str> for Guess {
    fn eq(&self, other: &&str) -> bool {
        &self.to_string() == other
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    #[default]
    Absent,
    Present,
    Correct,
}

impl AsEmoji for LetterState {
    fn as_emoji(&self) -> Cow<str> {
        match self {
            Self::Correct => "🟩", // green square
            Self::Present => "🟨", // yellow square
            Self::Absent => "⬜",  // white square
        }
        .into()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("`{0}` is not a letter state (expected `O`, `o` or `.`)")]
pub struct ParseLetterStateError(String);

impl FromStr for LetterState {
    type Err = ParseLetterStateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "O" => Ok(Self::Correct),
            "o" => Ok(Self::Present),
            "." => Ok(Self::Absent),
            other => Err(ParseLetterStateError(other.to_owned())),
        }
    }
}

impl Display for LetterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Correct => "O",
            Self::Present => "o",
            Self::Absent => ".",
        };

        f.write_str(symbol)
    }
}
