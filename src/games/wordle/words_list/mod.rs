use std::collections::HashSet;

use serde::{Deserialize, Serialize};

mod source;
pub use source::{Location, Source, SourceFormat};

mod loader;
pub use loader::{load, Fetch, Fetcher, LoadOutcome, SourceError};

/// How submitted guesses are checked before being scored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Only dictionary words and round targets are accepted.
    #[default]
    Dictionary,
    /// Any guess of the right length is accepted.
    AcceptAny,
}

impl ValidationMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dictionary => Self::AcceptAny,
            Self::AcceptAny => Self::Dictionary,
        }
    }

    pub fn accepts_any(self) -> bool {
        self == Self::AcceptAny
    }
}

/// Set of known words guesses are validated against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordsList {
    words: HashSet<String>,
}

impl WordsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Parses a source's text and adds every accepted token, returning how
    /// many new words were added.
    pub fn extend_from_text(&mut self, format: SourceFormat, text: &str) -> usize {
        let before = self.len();
        self.words.extend(format.parse(text));
        self.len() - before
    }

    /// `targets` is consulted so the round words are always playable.
    pub fn valid_guess(
        &self,
        guess: &str,
        mode: ValidationMode,
        targets: impl Fn(&str) -> bool,
    ) -> bool {
        mode.accepts_any() || self.contains(guess) || targets(guess)
    }
}

impl FromIterator<String> for WordsList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ValidationMode, WordsList};

    fn list() -> WordsList {
        ["gat", "gos", "casa"].map(str::to_owned).into_iter().collect()
    }

    #[test]
    fn dictionary_mode_checks_membership() {
        let list = list();
        let no_targets = |_: &str| false;

        assert!(list.valid_guess("gat", ValidationMode::Dictionary, no_targets));
        assert!(!list.valid_guess("xyz", ValidationMode::Dictionary, no_targets));
    }

    #[test]
    fn round_targets_are_always_valid() {
        let list = list();

        assert!(list.valid_guess("avet", ValidationMode::Dictionary, |word| word == "avet"));
    }

    #[test]
    fn accept_any_skips_the_dictionary() {
        let empty = WordsList::new();

        assert!(empty.valid_guess("qwrt", ValidationMode::AcceptAny, |_| false));
        assert_eq!(ValidationMode::AcceptAny.toggled(), ValidationMode::Dictionary);
    }
}
