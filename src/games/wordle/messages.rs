//! Player-facing Catalan texts.

pub const INVALID_WORD: [&str; 5] = [
    "Nasti, deixa el vi que aquesta paraula no existeix!",
    "Nasti, aquesta paraula s'ho ha inventat algu amb molta imaginacio.",
    "Nasti, avui la RAE plora... i el diccionari tambe.",
    "Nasti, aixo no es una paraula catalana ni per casualitat.",
    "Nasti, aquesta paraula necessita un DNI per entrar al diccionari.",
];

pub const ROUND_PASSED: [&str; 5] = [
    "Genial, Nasti! Ronda superada.",
    "Uau! Aixo ha estat perfecte.",
    "Brillant! Vas molt forta.",
    "Ho has clavat! Seguim.",
    "Fantastic! A per la seguent.",
];

/// Consecutive invalid guesses before suggesting accept-any mode.
pub const INVALID_STREAK_TIP_AFTER: u32 = 3;

pub const ACCEPT_ANY_TIP: &str =
    "Si es massa dificil, pots activar el mode que accepta qualsevol paraula.";
pub const MISSING_LETTERS: &str = "Falten lletres.";
pub const SOLVED: &str = "Ronda superada!";
pub const OVERLAY_TITLE: &str = "Molt be!";

pub const NOW_ACCEPT_ANY: &str = "Ara s'accepta qualsevol paraula.";
pub const NOW_DICTIONARY: &str = "Ara es valida amb el diccionari.";
pub const DICTIONARY_UNAVAILABLE: &str =
    "No he pogut carregar el diccionari. Activat el mode que accepta qualsevol paraula.";
pub const LOADING_DICTIONARY: &str = "Carregant diccionari...";

pub const COPIED: &str = "Copiat al porta-retalls!";
pub const COPY_FAILED: &str = "No he pogut copiar.";

pub const WON_TITLE: &str = "Ho has encertat!";
pub const LOST_TITLE: &str = "No ha pogut ser...";
pub const LOST_MESSAGE: &str = "Has acabat les tres rondes, pero no les has encertat totes. Pots tornar a comencar i intentar-ho de nou.";

pub fn failed(word: &str) -> String {
    format!("No era '{}'.", word.to_uppercase())
}

pub fn round_passed(round: usize, word: &str) -> String {
    format!(
        "{} Paraula: {}.",
        ROUND_PASSED[round % ROUND_PASSED.len()],
        word.to_uppercase()
    )
}

pub fn won(reveal_order: &[String]) -> String {
    format!(
        "Has completat les tres rondes. Escriu aquestes tres paraules en aquest ordre: {}. Hi ha una pagina per internet on, si hi poses aquestes tres paraules, trobaras una ubicacio.",
        reveal_order.join(", ")
    )
}

/// Rotating complaint for an invalid word, with the accept-any tip appended
/// once the streak is long enough.
pub fn invalid_word(rotation: usize, streak: u32) -> String {
    let message = INVALID_WORD[rotation % INVALID_WORD.len()];

    if streak >= INVALID_STREAK_TIP_AFTER {
        format!("{message} {ACCEPT_ANY_TIP}")
    } else {
        message.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_messages_rotate() {
        assert_eq!(super::invalid_word(0, 1), super::INVALID_WORD[0]);
        assert_eq!(super::invalid_word(6, 2), super::INVALID_WORD[1]);
        assert!(super::invalid_word(2, 3).ends_with(super::ACCEPT_ANY_TIP));
    }

    #[test]
    fn round_texts_use_upper_case_words() {
        assert_eq!(super::failed("avet"), "No era 'AVET'.");
        assert_eq!(
            super::round_passed(5, "golafres"),
            "Genial, Nasti! Ronda superada. Paraula: GOLAFRES."
        );
    }
}
