use crate::games::wordle::core::is_letter;

/// A single player action on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Delete,
    Submit,
}

impl Input {
    /// Maps a key name from either keyboard: `Enter`/`ENT` submits,
    /// `Backspace`/`DEL` deletes, and a single letter types it.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "ENT" => Some(Self::Submit),
            "Backspace" | "DEL" => Some(Self::Delete),
            _ => {
                let mut chars = key.chars();
                let ch = chars.next()?;

                if chars.next().is_some() {
                    return None;
                }

                let letter = ch.to_lowercase().next()?;
                is_letter(letter).then_some(Self::Letter(letter))
            }
        }
    }
}
