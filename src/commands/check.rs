//! One-shot guess check
//!
//! Evaluates a single guess against a word given on the command line.

use crate::core::{Evaluation, HiddenWord, Mode, evaluate_guess};
use crate::game::{GameSession, Rejection};
use anyhow::Result;

/// Evaluate `guess` against `word`, whose sequence is `sequence`
///
/// The guess goes through the same validation a game would apply.
///
/// # Errors
///
/// Returns an error if the word or sequence is invalid, or the guess would be
/// rejected in a game.
pub fn check_guess(word: &str, sequence: &str, guess: &str, mode: Mode) -> Result<Evaluation> {
    let hidden = HiddenWord::new(word, sequence)?;
    let game = GameSession::new(hidden.clone(), mode, 1);
    let guess = game.validate(guess).map_err(reject)?;

    Ok(evaluate_guess(&hidden, &guess, mode))
}

fn reject(rejection: Rejection) -> anyhow::Error {
    anyhow::anyhow!("{} ({})", rejection, rejection.kind())
}
