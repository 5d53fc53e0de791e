use std::borrow::Cow;

mod word;
pub use word::{is_letter, ParseWordError, Word};

mod guess;
pub use guess::{Guess, LetterState, ParseLetterStateError};

/// Scores `guess` against `target` with the usual two-pass rules: exact
/// matches first, then leftover letters as present, each target letter
/// credited at most once.
pub fn evaluate(guess: &str, target: &str) -> Vec<LetterState> {
    Word::new(target).guess(guess).states().collect()
}

/// Renders a value with the square glyphs used in shared results.
pub trait AsEmoji {
    fn as_emoji(&self) -> Cow<str>;
}

impl AsEmoji for [Guess] {
    fn as_emoji(&self) -> Cow<str> {
        self.iter()
            .map(|guess| guess.as_emoji())
            .collect::<Vec<_>>()
            .join("\n")
            .into()
    }
}
