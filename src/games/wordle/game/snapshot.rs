use serde::Serialize;

use super::{Overlay, Phase, Summary};
use crate::games::wordle::{
    core::{Guess, LetterState},
    keyboard::Keyboard,
    words_list::ValidationMode,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: Option<LetterState>,
}

impl Tile {
    fn scored((letter, state): (char, LetterState)) -> Self {
        Self {
            letter: Some(letter),
            state: Some(state),
        }
    }

    fn typed(letter: char) -> Self {
        Self {
            letter: Some(letter),
            state: None,
        }
    }
}

/// Everything a frontend needs to redraw after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// 1-based.
    pub round: usize,
    pub total_rounds: usize,
    pub phase: Phase,
    pub rows: Vec<Vec<Tile>>,
    pub keyboard: Keyboard,
    pub message: Option<String>,
    /// Set while an invalid guess is still on the board.
    pub invalid: bool,
    pub overlay: Option<Overlay>,
    pub validation: ValidationMode,
    pub summary: Option<Summary>,
}

/// Lays out `max_guesses` rows of `word_len` tiles: scored guesses first, then
/// the guess being typed, then blanks.
pub(super) fn board(
    guesses: &[Guess],
    current: &str,
    max_guesses: usize,
    word_len: usize,
) -> Vec<Vec<Tile>> {
    (0..max_guesses)
        .map(|row| {
            let mut tiles: Vec<Tile> = if let Some(guess) = guesses.get(row) {
                guess.iter().copied().map(Tile::scored).collect()
            } else if row == guesses.len() {
                current.chars().map(Tile::typed).collect()
            } else {
                Vec::new()
            };

            tiles.resize(word_len, Tile::default());
            tiles
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{board, Tile};
    use crate::games::wordle::core::{LetterState, Word};

    #[test]
    fn rows_fill_in_order() {
        let guesses = [Word::new("avet").guess("vaca")];
        let rows = board(&guesses, "av", 6, 4);

        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.len() == 4));
        assert_eq!(
            rows[0][0],
            Tile {
                letter: Some('v'),
                state: Some(LetterState::Present)
            }
        );
        assert_eq!(rows[1][1].letter, Some('v'));
        assert_eq!(rows[1][1].state, None);
        assert_eq!(rows[1][2], Tile::default());
        assert!(rows[2..].iter().flatten().all(|tile| *tile == Tile::default()));
    }
}
