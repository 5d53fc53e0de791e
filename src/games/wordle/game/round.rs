use crate::games::wordle::{core::Guess, keyboard::Keyboard};

/// Mutable state of the round being played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundSession {
    guesses: Vec<Guess>,
    current: String,
    keyboard: Keyboard,
    solved: bool,
    done: bool,
}

impl RoundSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn current_len(&self) -> usize {
        self.current.chars().count()
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub(super) fn push_letter(&mut self, letter: char) {
        self.current.push(letter);
    }

    pub(super) fn pop_letter(&mut self) -> Option<char> {
        self.current.pop()
    }

    pub(super) fn clear_current(&mut self) {
        self.current.clear();
    }

    pub(super) fn record(&mut self, guess: Guess) {
        self.keyboard.record(&guess);
        self.guesses.push(guess);
    }

    pub(super) fn finish(&mut self, solved: bool) {
        self.solved = solved;
        self.done = true;
        self.current.clear();
    }
}
