//! A single player's attempt at one hidden word

use super::Rejection;
use crate::core::{
    Evaluation, HiddenWord, KeyboardHints, MAX_WORD_LEN, Mode, SEQUENCE_LEN, evaluate_guess,
};

/// Shortest accepted guess: the sequence plus one letter
pub const MIN_GUESS_LEN: usize = SEQUENCE_LEN + 1;

/// Longest accepted guess
pub const MAX_GUESS_LEN: usize = MAX_WORD_LEN;

/// Attempts per word unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Guess history and keyboard state for one hidden word
#[derive(Debug, Clone)]
pub struct GameSession {
    word: HiddenWord,
    mode: Mode,
    max_attempts: usize,
    evaluations: Vec<Evaluation>,
    hints: KeyboardHints,
}

impl GameSession {
    #[must_use]
    pub fn new(word: HiddenWord, mode: Mode, max_attempts: usize) -> Self {
        Self {
            word,
            mode,
            max_attempts: max_attempts.max(1),
            evaluations: Vec::new(),
            hints: KeyboardHints::new(),
        }
    }

    /// Normalize and validate a raw guess
    ///
    /// # Errors
    /// Returns the first `Rejection` that applies: game already over, bad
    /// length, non-letters, or missing sequence.
    pub fn validate(&self, raw: &str) -> Result<String, Rejection> {
        match self.status() {
            GameStatus::Won => return Err(Rejection::AlreadySolved),
            GameStatus::Lost => return Err(Rejection::AttemptsExhausted(self.max_attempts)),
            GameStatus::InProgress => {}
        }

        let guess = raw.trim();
        let len = guess.chars().count();

        if !(MIN_GUESS_LEN..=MAX_GUESS_LEN).contains(&len) {
            return Err(Rejection::InvalidGuessLength {
                len,
                min: MIN_GUESS_LEN,
                max: MAX_GUESS_LEN,
            });
        }

        if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Rejection::InvalidCharacters);
        }

        let guess = guess.to_ascii_lowercase();
        if !guess.contains(self.word.sequence()) {
            return Err(Rejection::MissingSequence(self.word.sequence().to_string()));
        }

        Ok(guess)
    }

    /// Validate, evaluate and record a guess
    ///
    /// # Errors
    /// Returns a `Rejection` if the guess is not accepted; the session is
    /// left unchanged.
    pub fn submit(&mut self, raw: &str) -> Result<&Evaluation, Rejection> {
        let guess = self.validate(raw)?;
        let evaluation = evaluate_guess(&self.word, &guess, self.mode);

        self.hints.merge(&evaluation.hints);
        self.evaluations.push(evaluation);

        match self.status() {
            GameStatus::Won => log::info!(
                "found '{}' in {} of {} attempts",
                self.word,
                self.evaluations.len(),
                self.max_attempts
            ),
            GameStatus::Lost => log::info!("out of attempts for '{}'", self.word),
            GameStatus::InProgress => {}
        }

        Ok(&self.evaluations[self.evaluations.len() - 1])
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.evaluations.iter().any(|e| e.won) {
            GameStatus::Won
        } else if self.evaluations.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// The sequence shown to the player
    #[must_use]
    pub fn sequence(&self) -> &str {
        self.word.sequence()
    }

    /// Hidden word length shown to the player
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word.len()
    }

    /// The hidden word, only once the game is over
    #[must_use]
    pub fn reveal(&self) -> Option<&HiddenWord> {
        self.is_over().then_some(&self.word)
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.evaluations.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.evaluations.len())
    }

    #[must_use]
    pub fn history(&self) -> &[Evaluation] {
        &self.evaluations
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    fn session(mode: Mode) -> GameSession {
        GameSession::new(HiddenWord::new("parent", "ent").unwrap(), mode, 3)
    }

    #[test]
    fn accepts_and_normalizes_guess() {
        let mut game = session(Mode::Normal);
        let eval = game.submit("  SPENT ").unwrap();

        assert_eq!(eval.guess, "spent");
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.attempts_left(), 2);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn rejects_bad_lengths() {
        let mut game = session(Mode::Normal);

        assert_eq!(
            game.submit("ent"),
            Err(Rejection::InvalidGuessLength {
                len: 3,
                min: 4,
                max: 8
            })
        );
        assert!(matches!(
            game.submit("tormentor"),
            Err(Rejection::InvalidGuessLength { len: 9, .. })
        ));
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn rejects_non_letters() {
        let game = session(Mode::Normal);
        assert_eq!(game.validate("sp3nt"), Err(Rejection::InvalidCharacters));
        assert_eq!(game.validate("sp ent"), Err(Rejection::InvalidCharacters));
        assert_eq!(game.validate("spént"), Err(Rejection::InvalidCharacters));
    }

    #[test]
    fn rejects_missing_sequence() {
        let game = session(Mode::Normal);
        assert_eq!(
            game.validate("crane"),
            Err(Rejection::MissingSequence("ent".into()))
        );
    }

    #[test]
    fn winning_ends_the_game() {
        let mut game = session(Mode::Normal);
        assert!(game.reveal().is_none());

        let eval = game.submit("Parent").unwrap();
        assert!(eval.won);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.reveal().unwrap().text(), "parent");
        assert_eq!(game.submit("spent"), Err(Rejection::AlreadySolved));
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let mut game = session(Mode::Normal);
        for guess in ["spent", "rents", "dents"] {
            game.submit(guess).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.is_over());
        assert_eq!(game.submit("parent"), Err(Rejection::AttemptsExhausted(3)));
    }

    #[test]
    fn hints_accumulate_across_guesses() {
        let mut game = session(Mode::Normal);
        game.submit("spent").unwrap();
        assert_eq!(game.hints().get('p'), Some(Category::Misplaced));
        assert_eq!(game.hints().get('e'), Some(Category::Sequence));

        game.submit("parent").unwrap();
        assert_eq!(game.hints().get('p'), Some(Category::Correct));
        assert_eq!(game.hints().get('e'), Some(Category::Correct));
        assert_eq!(game.hints().get('s'), Some(Category::Incorrect));
    }

    #[test]
    fn hard_mode_hides_overhang() {
        let mut game = session(Mode::Hard);
        let eval = game.submit("rentp").unwrap();

        assert_eq!(eval.verdicts[4].category, Category::Empty);
        assert_eq!(game.hints().get('p'), Some(Category::Empty));
    }

    #[test]
    fn zero_attempts_is_clamped() {
        let game = GameSession::new(HiddenWord::new("parent", "ent").unwrap(), Mode::Normal, 0);
        assert_eq!(game.max_attempts(), 1);
    }
}
