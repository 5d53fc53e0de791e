//! A Catalan word-guessing game played over a fixed table of rounds.

pub mod core;
pub use self::core::{evaluate, AsEmoji, Guess, LetterState, Word};

pub mod game;
pub use game::{Advance, Game, Input, Outcome, Phase, ScheduledAdvance, Snapshot, Submission};

pub mod keyboard;
pub use keyboard::{Keyboard, KEY_ROWS};

pub mod messages;

mod rounds;
pub use rounds::{Round, RoundConfig, Rounds, RoundsError};

pub mod words_list;
pub use words_list::{ValidationMode, WordsList};
