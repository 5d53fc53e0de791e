use std::collections::BTreeMap;

use serde::Serialize;

use super::core::{Guess, LetterState};

/// Virtual keyboard layout, `DEL` and `ENT` being the delete and submit keys.
pub const KEY_ROWS: [&[&str]; 3] = [
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &["DEL", "z", "x", "c", "v", "b", "n", "m", "ENT"],
];

/// Best known state of every letter played this round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Keyboard(BTreeMap<char, LetterState>);

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: char) -> Option<LetterState> {
        self.0.get(&letter).copied()
    }

    /// `Correct` sticks; anything else takes the latest state seen.
    pub fn mark(&mut self, letter: char, state: LetterState) {
        let entry = self.0.entry(letter).or_insert(state);

        if *entry != LetterState::Correct {
            *entry = state;
        }
    }

    pub fn record(&mut self, guess: &Guess) {
        for (letter, state) in guess.iter() {
            self.mark(*letter, *state);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.0.iter().map(|(letter, state)| (*letter, *state))
    }
}
