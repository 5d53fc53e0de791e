use std::{ops::Index, str::FromStr};

use serde::{Deserialize, Serialize};

use super::core::{ParseWordError, Word};

/// One puzzle: a target word, how many guesses it allows, and the hint shown
/// when it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word: Word,
    max_guesses: usize,
    hint: String,
}

impl Round {
    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn word_len(&self) -> usize {
        self.word.len()
    }
}

/// Configuration shape of a [`Round`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoundConfig {
    pub word: String,
    pub max_guesses: usize,
    pub hint: String,
}

impl TryFrom<RoundConfig> for Round {
    type Error = RoundsError;

    fn try_from(config: RoundConfig) -> Result<Self, Self::Error> {
        let word = Word::from_str(&config.word)?;

        if config.max_guesses == 0 {
            return Err(RoundsError::NoGuesses(word.to_string()));
        }

        Ok(Self {
            word,
            max_guesses: config.max_guesses,
            hint: config.hint,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoundsError {
    #[error("at least one round is required")]
    Empty,

    #[error("round word is invalid: {0}")]
    Word(#[from] ParseWordError),

    #[error("round `{0}` allows no guesses")]
    NoGuesses(String),

    #[error("reveal word `{0}` is not one of the round words")]
    UnknownRevealWord(String),
}

const CLASSIC: [(&str, usize, &str); 3] = [
    (
        "avet",
        6,
        "Comencem! Si et costa, pots desactivar la validacio per provar lletres.",
    ),
    (
        "golafres",
        8,
        "Nivell mitja. Si et costa, pots desactivar la validacio per provar lletres.",
    ),
    (
        "treballador",
        10,
        "Nivell super dificil. Si et costa, pots desactivar la validacio per provar lletres.",
    ),
];

const CLASSIC_REVEAL: [&str; 3] = ["avet", "treballador", "golafres"];

/// The ordered round table plus the order the words are revealed in once
/// every round is solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rounds {
    rounds: Vec<Round>,
    reveal_order: Vec<String>,
}

impl Rounds {
    /// Without an explicit `reveal_order`, the classic table reveals in its
    /// classic order and any other table in play order.
    pub fn new(
        rounds: impl IntoIterator<Item = RoundConfig>,
        reveal_order: Option<Vec<String>>,
    ) -> Result<Self, RoundsError> {
        let rounds = rounds
            .into_iter()
            .map(Round::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if rounds.is_empty() {
            return Err(RoundsError::Empty);
        }

        let reveal_order = match reveal_order {
            Some(order) => {
                if let Some(unknown) = order
                    .iter()
                    .find(|word| !rounds.iter().any(|round| round.word == *word.as_str()))
                {
                    return Err(RoundsError::UnknownRevealWord(unknown.clone()));
                }
                order
            }
            None if rounds
                .iter()
                .map(|round| round.word.to_string())
                .eq(CLASSIC.iter().map(|(word, ..)| (*word).to_owned())) =>
            {
                Self::classic_reveal_order()
            }
            None => rounds.iter().map(|round| round.word.to_string()).collect(),
        };

        Ok(Self {
            rounds,
            reveal_order,
        })
    }

    /// `avet`, `golafres` and `treballador`, with 6, 8 and 10 guesses.
    pub fn classic() -> Self {
        let rounds = CLASSIC
            .iter()
            .map(|(word, max_guesses, hint)| Round {
                word: Word::new(word),
                max_guesses: *max_guesses,
                hint: (*hint).to_owned(),
            })
            .collect();

        Self {
            rounds,
            reveal_order: Self::classic_reveal_order(),
        }
    }

    /// `avet`, `treballador`, `golafres`.
    pub fn classic_reveal_order() -> Vec<String> {
        CLASSIC_REVEAL.map(str::to_owned).to_vec()
    }

    pub fn classic_config() -> Vec<RoundConfig> {
        CLASSIC
            .iter()
            .map(|(word, max_guesses, hint)| RoundConfig {
                word: (*word).to_owned(),
                max_guesses: *max_guesses,
                hint: (*hint).to_owned(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> + '_ {
        self.rounds.iter()
    }

    pub fn is_target(&self, word: &str) -> bool {
        self.rounds.iter().any(|round| round.word == *word)
    }

    pub fn reveal_order(&self) -> &[String] {
        &self.reveal_order
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Self::classic()
    }
}

impl Index<usize> for Rounds {
    type Output = Round;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rounds[index]
    }
}
