use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, trace};

use super::{
    core::{is_letter, AsEmoji, Guess},
    messages,
    rounds::{Round, Rounds},
    words_list::{LoadOutcome, ValidationMode, WordsList},
};

mod input;
pub use input::Input;

mod round;
pub use round::RoundSession;

mod snapshot;
pub use snapshot::{Snapshot, Tile};

/// Pause between the end of a round and the next board.
pub const DEFAULT_ROUND_DELAY: Duration = Duration::from_millis(900);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Accepting letters.
    Active,
    /// A round just ended and more rounds remain.
    RoundEnding,
    /// The last round just ended.
    SessionEnding,
    /// Every round has been played.
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub outcome: Outcome,
    pub title: String,
    pub message: String,
}

/// Acknowledgement shown after a solved round. Input is blocked until it is
/// dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub title: String,
    pub message: String,
}

/// Token for the deferred move to the next round. Only the token handed out
/// by the latest round end of the current session is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the game only moves on once the advance is fired"]
pub struct ScheduledAdvance {
    epoch: u64,
    delay: Duration,
}

impl ScheduledAdvance {
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input is blocked (overlay shown or round over).
    Ignored,
    MissingLetters,
    Invalid { streak: u32 },
    Scored(Guess),
    RoundOver {
        guess: Guess,
        solved: bool,
        advance: ScheduledAdvance,
    },
}

impl Submission {
    pub fn advance(&self) -> Option<ScheduledAdvance> {
        match self {
            Self::RoundOver { advance, .. } => Some(*advance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The token was from an earlier epoch or already used.
    Stale,
    /// Index of the round that just started.
    NextRound(usize),
    Finished(Outcome),
}

/// A whole play session across every round.
#[derive(Debug, Clone)]
pub struct Game {
    rounds: Rounds,
    words: WordsList,
    mode: ValidationMode,
    round_delay: Duration,

    round: usize,
    session: RoundSession,
    history: Vec<Vec<Guess>>,
    solved: Vec<bool>,

    invalid_streak: u32,
    invalid_rotation: usize,
    discard_on_input: bool,

    phase: Phase,
    overlay: Option<Overlay>,
    message: Option<String>,
    summary: Option<Summary>,
    epoch: u64,
}

impl Game {
    pub fn new(rounds: Rounds, words: WordsList, mode: ValidationMode) -> Self {
        let mut game = Self {
            rounds,
            words,
            mode,
            round_delay: DEFAULT_ROUND_DELAY,
            round: 0,
            session: RoundSession::new(),
            history: Vec::new(),
            solved: Vec::new(),
            invalid_streak: 0,
            invalid_rotation: 0,
            discard_on_input: false,
            phase: Phase::Active,
            overlay: None,
            message: None,
            summary: None,
            epoch: 0,
        };

        game.restart();
        game
    }

    /// Starts from a dictionary load, telling the player once if it fell back
    /// to accepting any word.
    pub fn from_load(rounds: Rounds, outcome: LoadOutcome) -> Self {
        let mode = outcome.mode();
        let mut game = Self::new(rounds, outcome.words, mode);

        if mode.accepts_any() {
            game.message = Some(messages::DICTIONARY_UNAVAILABLE.to_owned());
        }

        game
    }

    pub fn with_round_delay(mut self, delay: Duration) -> Self {
        self.round_delay = delay;
        self
    }

    pub fn rounds(&self) -> &Rounds {
        &self.rounds
    }

    /// Index of the round on the board. Stays on the last round once the
    /// summary is reached.
    pub fn round_index(&self) -> usize {
        self.round.min(self.rounds.len() - 1)
    }

    pub fn round(&self) -> &Round {
        &self.rounds[self.round_index()]
    }

    pub fn session(&self) -> &RoundSession {
        &self.session
    }

    pub fn history(&self) -> &[Vec<Guess>] {
        &self.history
    }

    pub fn solved(&self) -> &[bool] {
        &self.solved
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn invalid_streak(&self) -> u32 {
        self.invalid_streak
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn accepting_input(&self) -> bool {
        self.phase == Phase::Active && self.overlay.is_none()
    }

    /// Replaces the feedback line, for notices that come from outside the
    /// game such as sharing results.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn input(&mut self, input: Input) -> Option<ScheduledAdvance> {
        match input {
            Input::Letter(letter) => {
                self.type_letter(letter);
                None
            }
            Input::Delete => {
                self.delete();
                None
            }
            Input::Submit => self.submit().advance(),
        }
    }

    /// Clears a rejected guess left on the board. Runs before any input is
    /// handled, so the player sees the rejection until they touch a key.
    fn discard_invalid(&mut self) {
        if self.discard_on_input {
            trace!(current = self.session.current(), "discarding invalid guess");

            self.session.clear_current();
            self.discard_on_input = false;
            self.message = None;
        }
    }

    pub fn type_letter(&mut self, letter: char) -> bool {
        if !self.accepting_input() {
            return false;
        }
        self.discard_invalid();

        let Some(letter) = letter.to_lowercase().next().filter(|ch| is_letter(*ch)) else {
            return false;
        };

        if self.session.current_len() >= self.round().word_len() {
            return false;
        }

        self.session.push_letter(letter);
        self.message = None;
        true
    }

    pub fn delete(&mut self) -> bool {
        if !self.accepting_input() {
            return false;
        }
        self.discard_invalid();

        self.message = None;
        self.session.pop_letter().is_some()
    }

    pub fn is_valid(&self, word: &str) -> bool {
        self.words
            .valid_guess(word, self.mode, |word| self.rounds.is_target(word))
    }

    pub fn submit(&mut self) -> Submission {
        if !self.accepting_input() {
            return Submission::Ignored;
        }
        self.discard_invalid();

        let round = self.round().clone();
        let current = self.session.current().to_owned();

        if current.chars().count() != round.word_len() {
            self.message = Some(messages::MISSING_LETTERS.to_owned());
            return Submission::MissingLetters;
        }

        if !self.is_valid(&current) {
            self.invalid_streak += 1;
            self.message = Some(messages::invalid_word(
                self.invalid_rotation,
                self.invalid_streak,
            ));
            self.invalid_rotation += 1;
            self.discard_on_input = true;

            debug!(guess = %current, streak = self.invalid_streak, "invalid guess");

            return Submission::Invalid {
                streak: self.invalid_streak,
            };
        }

        self.invalid_streak = 0;

        let guess = round.word().guess(&current);
        self.session.record(guess.clone());

        debug!(
            round = self.round,
            guess = %current,
            result = %guess,
            guesses = self.session.guesses().len()
        );

        if guess.is_correct() {
            self.message = Some(messages::SOLVED.to_owned());
            self.overlay = Some(Overlay {
                title: messages::OVERLAY_TITLE.to_owned(),
                message: messages::round_passed(self.round, &round.word().to_string()),
            });

            let advance = self.finish_round(true);
            Submission::RoundOver {
                guess,
                solved: true,
                advance,
            }
        } else if self.session.guesses().len() >= round.max_guesses() {
            self.message = Some(messages::failed(&round.word().to_string()));

            let advance = self.finish_round(false);
            Submission::RoundOver {
                guess,
                solved: false,
                advance,
            }
        } else {
            self.session.clear_current();
            Submission::Scored(guess)
        }
    }

    fn finish_round(&mut self, solved: bool) -> ScheduledAdvance {
        self.session.finish(solved);
        self.history.push(self.session.guesses().to_vec());
        self.solved.push(self.session.is_solved());

        self.phase = if self.round + 1 >= self.rounds.len() {
            Phase::SessionEnding
        } else {
            Phase::RoundEnding
        };

        info!(round = self.round, solved, phase = ?self.phase, "round over");

        ScheduledAdvance {
            epoch: self.epoch,
            delay: self.round_delay,
        }
    }

    /// Fires a deferred advance. Tokens from before a restart, or already
    /// fired, are ignored.
    pub fn advance(&mut self, token: ScheduledAdvance) -> Advance {
        if token.epoch != self.epoch
            || !matches!(self.phase, Phase::RoundEnding | Phase::SessionEnding)
        {
            debug!(
                token = token.epoch,
                epoch = self.epoch,
                phase = ?self.phase,
                "ignoring stale advance"
            );
            return Advance::Stale;
        }

        self.epoch += 1;
        self.round += 1;

        if self.round >= self.rounds.len() {
            let outcome = if self.solved.iter().all(|solved| *solved) {
                Outcome::Won
            } else {
                Outcome::Lost
            };

            let (title, message) = match outcome {
                Outcome::Won => (
                    messages::WON_TITLE,
                    messages::won(self.rounds.reveal_order()),
                ),
                Outcome::Lost => (messages::LOST_TITLE, messages::LOST_MESSAGE.to_owned()),
            };

            self.overlay = None;
            self.phase = Phase::Summary;
            self.summary = Some(Summary {
                outcome,
                title: title.to_owned(),
                message,
            });

            info!(?outcome, solved = ?self.solved, "game finished");

            Advance::Finished(outcome)
        } else {
            self.start_round();
            Advance::NextRound(self.round)
        }
    }

    fn start_round(&mut self) {
        self.session = RoundSession::new();
        self.discard_on_input = false;
        self.message = Some(self.round().hint().to_owned());
        self.phase = Phase::Active;
        self.summary = None;

        info!(round = self.round, len = self.round().word_len(), "round started");
    }

    /// Back to the first round with a clean history. Any pending advance
    /// becomes stale.
    pub fn restart(&mut self) {
        self.round = 0;
        self.history.clear();
        self.solved.clear();
        self.invalid_streak = 0;
        self.overlay = None;
        self.epoch += 1;

        self.start_round();
    }

    pub fn dismiss_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn set_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> ValidationMode {
        self.mode = self.mode.toggled();
        self.message = Some(
            match self.mode {
                ValidationMode::AcceptAny => messages::NOW_ACCEPT_ANY,
                ValidationMode::Dictionary => messages::NOW_DICTIONARY,
            }
            .to_owned(),
        );

        info!(mode = ?self.mode, "validation toggled");

        self.mode
    }

    /// Every scored guess so far, finished rounds first.
    pub fn played_guesses(&self) -> impl Iterator<Item = &Guess> + '_ {
        let current: &[Guess] = if self.session.is_done() {
            &[]
        } else {
            self.session.guesses()
        };

        self.history.iter().flatten().chain(current)
    }

    pub fn share_text(&self, title: &str) -> String {
        let rows: Vec<Guess> = self.played_guesses().cloned().collect();
        format!("{title}\n{}", rows.as_slice().as_emoji())
    }

    pub fn snapshot(&self) -> Snapshot {
        let round = self.round();

        Snapshot {
            round: self.round_index() + 1,
            total_rounds: self.rounds.len(),
            phase: self.phase,
            rows: snapshot::board(
                self.session.guesses(),
                self.session.current(),
                round.max_guesses(),
                round.word_len(),
            ),
            keyboard: self.session.keyboard().clone(),
            message: self.message.clone(),
            invalid: self.discard_on_input,
            overlay: self.overlay.clone(),
            validation: self.mode,
            summary: self.summary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Advance, Game, Input, Outcome, Phase, ScheduledAdvance, Submission};
    use crate::games::wordle::{
        core::LetterState,
        messages,
        rounds::Rounds,
        words_list::{LoadOutcome, ValidationMode, WordsList},
    };

    fn dictionary() -> WordsList {
        ["vaca", "gats", "abcd", "abcdefgh", "abcdefghijk"]
            .map(str::to_owned)
            .into_iter()
            .collect()
    }

    fn game() -> Game {
        Game::new(Rounds::classic(), dictionary(), ValidationMode::Dictionary)
    }

    fn type_word(game: &mut Game, word: &str) {
        for letter in word.chars() {
            game.input(Input::Letter(letter));
        }
    }

    fn play(game: &mut Game, word: &str) -> Submission {
        type_word(game, word);
        game.submit()
    }

    /// Plays `word` and fires the advance it schedules.
    fn finish_with(game: &mut Game, word: &str) -> Advance {
        let submission = play(game, word);
        let advance = submission
            .advance()
            .unwrap_or_else(|| panic!("`{word}` should end the round, got {submission:?}"));

        let result = game.advance(advance);
        game.dismiss_overlay();
        result
    }

    fn fail_round(game: &mut Game, filler: &str) -> Advance {
        let max = game.round().max_guesses();
        for _ in 1..max {
            assert!(matches!(play(game, filler), Submission::Scored(_)));
        }
        finish_with(game, filler)
    }

    #[test]
    fn starts_on_first_round_with_hint() {
        let game = game();

        assert_eq!(game.phase(), Phase::Active);
        assert_eq!(game.round_index(), 0);
        assert_eq!(game.message(), Some(game.rounds()[0].hint()));
        assert!(game.session().guesses().is_empty());
    }

    #[test]
    fn letters_stop_at_word_length() {
        let mut game = game();
        type_word(&mut game, "avetx");
        assert_eq!(game.session().current(), "avet");

        assert!(game.delete());
        assert_eq!(game.session().current(), "ave");

        let mut empty = self::game();
        assert!(!empty.delete());
        assert!(!empty.type_letter('4'));
        assert!(empty.type_letter('Ç'));
        assert_eq!(empty.session().current(), "ç");
    }

    #[test]
    fn short_guess_changes_nothing() {
        let mut game = game();
        play(&mut game, "vaca");
        let before = game.session().clone();

        type_word(&mut game, "av");
        assert_eq!(game.submit(), Submission::MissingLetters);

        assert_eq!(game.message(), Some(messages::MISSING_LETTERS));
        assert_eq!(game.session().guesses(), before.guesses());
        assert_eq!(game.session().keyboard(), before.keyboard());
        assert_eq!(game.session().current(), "av");
    }

    #[test]
    fn invalid_streak_suggests_accept_any_and_resets() {
        let mut game = game();

        for streak in 1..=3 {
            assert_eq!(play(&mut game, "zzzz"), Submission::Invalid { streak });
        }
        assert!(game
            .message()
            .is_some_and(|message| message.ends_with(messages::ACCEPT_ANY_TIP)));
        assert!(game.session().guesses().is_empty());

        assert!(matches!(play(&mut game, "vaca"), Submission::Scored(_)));
        assert_eq!(game.invalid_streak(), 0);
    }

    #[test]
    fn invalid_guess_is_cleared_on_next_input() {
        let mut game = game();
        play(&mut game, "zzzz");

        assert_eq!(game.session().current(), "zzzz");
        assert!(game.snapshot().invalid);

        game.input(Input::Letter('v'));
        assert_eq!(game.session().current(), "v");
        assert!(!game.snapshot().invalid);
    }

    #[test]
    fn round_targets_are_accepted_without_dictionary_entry() {
        let mut game = Game::new(Rounds::classic(), WordsList::new(), ValidationMode::Dictionary);

        assert!(game.is_valid("golafres"));
        assert!(game.is_valid("treballador"));
        assert!(!game.is_valid("gola"));
        assert!(matches!(
            play(&mut game, "avet"),
            Submission::RoundOver { solved: true, .. }
        ));
        assert!(game.session().is_solved());
    }

    #[test]
    fn keyboard_tracks_best_known_state() {
        let mut game = game();
        play(&mut game, "vaca");

        let keyboard = game.session().keyboard();
        assert_eq!(keyboard.get('v'), Some(LetterState::Present));
        assert_eq!(keyboard.get('a'), Some(LetterState::Absent));
    }

    #[test]
    fn winning_every_round() {
        let mut game = game();

        assert_eq!(finish_with(&mut game, "avet"), Advance::NextRound(1));
        assert_eq!(game.message(), Some(game.rounds()[1].hint()));
        assert_eq!(finish_with(&mut game, "golafres"), Advance::NextRound(2));
        assert_eq!(
            finish_with(&mut game, "treballador"),
            Advance::Finished(Outcome::Won)
        );

        assert_eq!(game.phase(), Phase::Summary);
        assert_eq!(game.solved(), &[true, true, true]);

        let summary = game.summary().unwrap();
        assert_eq!(summary.title, messages::WON_TITLE);
        assert!(summary.message.contains("avet, treballador, golafres"));
    }

    #[test]
    fn failing_one_round_loses() {
        let mut game = game();

        assert_eq!(finish_with(&mut game, "avet"), Advance::NextRound(1));
        assert_eq!(fail_round(&mut game, "abcdefgh"), Advance::NextRound(2));
        assert_eq!(game.history()[1].len(), 8);
        assert_eq!(
            finish_with(&mut game, "treballador"),
            Advance::Finished(Outcome::Lost)
        );

        assert_eq!(game.solved(), &[true, false, true]);
        assert_eq!(game.summary().unwrap().title, messages::LOST_TITLE);
    }

    #[test]
    fn failed_round_shows_the_answer_without_overlay() {
        let mut game = game();
        for _ in 1..6 {
            play(&mut game, "abcd");
        }

        let submission = play(&mut game, "abcd");
        assert!(matches!(
            submission,
            Submission::RoundOver { solved: false, .. }
        ));
        assert_eq!(game.message(), Some("No era 'AVET'."));
        assert!(game.session().is_done());
        assert!(!game.session().is_solved());
        assert!(game.overlay().is_none());
        assert_eq!(game.phase(), Phase::RoundEnding);
    }

    #[test]
    fn input_is_ignored_while_round_is_ending() {
        let mut game = game();
        let advance = play(&mut game, "avet").advance().unwrap();

        assert!(game.overlay().is_some());
        assert!(!game.type_letter('a'));
        assert_eq!(game.submit(), Submission::Ignored);

        assert_eq!(game.advance(advance), Advance::NextRound(1));

        // the overlay outlives the round change until dismissed
        assert!(!game.type_letter('g'));
        game.dismiss_overlay();
        assert!(game.type_letter('g'));
    }

    #[test]
    fn last_round_ends_the_session() {
        let mut game = game();
        finish_with(&mut game, "avet");
        finish_with(&mut game, "golafres");

        let advance = play(&mut game, "treballador").advance().unwrap();
        assert_eq!(game.phase(), Phase::SessionEnding);

        assert_eq!(game.advance(advance), Advance::Finished(Outcome::Won));
        assert!(game.overlay().is_none());
    }

    #[test]
    fn stale_advances_are_ignored() {
        let mut game = game();
        let advance = play(&mut game, "avet").advance().unwrap();

        game.restart();
        assert_eq!(game.advance(advance), Advance::Stale);
        assert_eq!(game.round_index(), 0);
        assert_eq!(game.phase(), Phase::Active);

        let advance = play(&mut game, "avet").advance().unwrap();
        assert_eq!(game.advance(advance), Advance::NextRound(1));
        assert_eq!(game.advance(advance), Advance::Stale);
        assert_eq!(game.round_index(), 1);
    }

    #[test]
    fn restart_after_summary_is_a_fresh_game() {
        let mut game = game();
        finish_with(&mut game, "avet");
        fail_round(&mut game, "abcdefgh");
        finish_with(&mut game, "treballador");
        assert_eq!(game.phase(), Phase::Summary);

        game.restart();

        let fresh = self::game();
        assert_eq!(game.round_index(), 0);
        assert!(game.history().is_empty());
        assert!(game.solved().is_empty());
        assert_eq!(game.session(), fresh.session());
        assert_eq!(game.snapshot(), fresh.snapshot());
    }

    #[test]
    fn toggling_validation() {
        let mut game = game();

        assert_eq!(game.toggle_mode(), ValidationMode::AcceptAny);
        assert_eq!(game.message(), Some(messages::NOW_ACCEPT_ANY));
        assert!(matches!(play(&mut game, "qwrt"), Submission::Scored(_)));

        assert_eq!(game.toggle_mode(), ValidationMode::Dictionary);
        assert!(matches!(play(&mut game, "qwrt"), Submission::Invalid { .. }));
    }

    #[test]
    fn failed_dictionary_load_accepts_anything_and_says_so() {
        let game = Game::from_load(Rounds::classic(), LoadOutcome::default());

        assert_eq!(game.mode(), ValidationMode::AcceptAny);
        assert_eq!(game.message(), Some(messages::DICTIONARY_UNAVAILABLE));
    }

    #[test]
    fn share_text_lists_every_guess_in_order() {
        let mut game = game();
        assert_eq!(game.share_text("Endevina on visc"), "Endevina on visc\n");

        play(&mut game, "vaca");
        finish_with(&mut game, "avet");
        play(&mut game, "abcdefgh");

        assert_eq!(
            game.share_text("Endevina on visc"),
            "Endevina on visc\n🟨🟨⬜⬜\n🟩🟩🟩🟩\n🟨⬜⬜⬜🟨🟨🟨⬜"
        );
    }

    #[test]
    fn snapshot_reflects_the_board() {
        let mut game = game();
        play(&mut game, "vaca");
        type_word(&mut game, "av");

        let snapshot = game.snapshot();
        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.total_rounds, 3);
        assert_eq!(snapshot.rows.len(), 6);
        assert_eq!(snapshot.rows[0][0].state, Some(LetterState::Present));
        assert_eq!(snapshot.rows[1][0].letter, Some('a'));
        assert_eq!(snapshot.keyboard.get('v'), Some(LetterState::Present));
    }

    #[test]
    fn advance_tokens_carry_the_round_delay() {
        let delay = std::time::Duration::from_millis(5);
        let mut game = game().with_round_delay(delay);

        let advance: ScheduledAdvance = play(&mut game, "avet").advance().unwrap();
        assert_eq!(advance.delay(), delay);
    }
}
