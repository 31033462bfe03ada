//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::game::{GameSession, GameStatus, start_session};
use crate::output::formatters::{keyboard_lines, share_text, verdict_row, verdicts_to_emoji};
use crate::puzzle::Puzzle;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Options for a line-based game
#[derive(Debug, Clone)]
pub struct SimpleConfig {
    pub length: usize,
    pub mode: crate::core::Mode,
    pub max_attempts: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output, or if the configured word length is not part of the puzzle.
pub fn run_simple(puzzle: &Puzzle, config: &SimpleConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(puzzle, config, stdin.lock(), stdout.lock()).map(|_| ())
}

/// Game loop over arbitrary input and output
///
/// Returns the session that was being played when input ended or the player
/// quit.
///
/// # Errors
///
/// Returns an error on I/O failure or an invalid starting word length.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<I: BufRead, O: Write>(
    puzzle: &Puzzle,
    config: &SimpleConfig,
    mut input: I,
    mut out: O,
) -> Result<GameSession, String> {
    let io_err = |e: io::Error| e.to_string();

    let mut game = start_session(puzzle, config.length, config.mode, config.max_attempts)
        .map_err(|e| e.to_string())?;

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗").map_err(io_err)?;
    writeln!(out, "║                 Sequence Word - Daily Puzzle                 ║").map_err(io_err)?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n").map_err(io_err)?;
    writeln!(out, "Find the hidden word that contains the sequence.").map_err(io_err)?;
    writeln!(
        out,
        "Guesses are 4-8 letters and must contain the sequence; they are lined up on it.\n"
    )
    .map_err(io_err)?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'hints' for the keyboard, 'new <6|7|8>' to switch words\n"
    )
    .map_err(io_err)?;

    print_banner(&mut out, &game).map_err(io_err)?;

    loop {
        let prompt = format!("Guess {}/{}", game.attempts_used() + 1, game.max_attempts());
        let Some(line) = read_line(&mut input, &mut out, &prompt).map_err(io_err)? else {
            return Ok(game);
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n").map_err(io_err)?;
                return Ok(game);
            }
            "hints" | "h" | "keyboard" => {
                writeln!(out).map_err(io_err)?;
                for kb_line in keyboard_lines(game.hints()) {
                    writeln!(out, "  {kb_line}").map_err(io_err)?;
                }
                writeln!(out).map_err(io_err)?;
                continue;
            }
            cmd if cmd == "new" || cmd.starts_with("new ") => {
                let length = cmd.trim_start_matches("new").trim().parse::<usize>();
                match length
                    .map_err(|_| "usage: new <6|7|8>".to_string())
                    .and_then(|len| {
                        start_session(puzzle, len, config.mode, config.max_attempts)
                            .map_err(|e| e.to_string())
                    }) {
                    Ok(new_game) => {
                        game = new_game;
                        writeln!(out, "\n🔄 New game started!\n").map_err(io_err)?;
                        print_banner(&mut out, &game).map_err(io_err)?;
                    }
                    Err(message) => writeln!(out, "❌ {message}\n").map_err(io_err)?,
                }
                continue;
            }
            _ => {}
        }

        let evaluation = match game.submit(&line) {
            Ok(evaluation) => evaluation.clone(),
            Err(rejection) => {
                writeln!(out, "❌ {rejection}\n").map_err(io_err)?;
                continue;
            }
        };

        writeln!(
            out,
            "  {}   {}",
            verdict_row(&evaluation.verdicts),
            verdicts_to_emoji(&evaluation.verdicts)
        )
        .map_err(io_err)?;

        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                writeln!(out, "\n{}", "═".repeat(70).bright_cyan()).map_err(io_err)?;
                writeln!(
                    out,
                    "{}",
                    format!(
                        "    🎉  Found {} in {} {}!  🎉",
                        evaluation.guess.to_uppercase(),
                        game.attempts_used(),
                        if game.attempts_used() == 1 { "guess" } else { "guesses" }
                    )
                    .bright_green()
                    .bold()
                )
                .map_err(io_err)?;
                print_share(&mut out, &game).map_err(io_err)?;
            }
            GameStatus::Lost => {
                let word = game.reveal().map(|w| w.text().to_uppercase()).unwrap_or_default();
                writeln!(out, "\n{}", "═".repeat(70).bright_cyan()).map_err(io_err)?;
                writeln!(
                    out,
                    "{}",
                    format!("    Out of attempts. The word was {word}.").red().bold()
                )
                .map_err(io_err)?;
                print_share(&mut out, &game).map_err(io_err)?;
            }
        }
    }
}

fn print_banner<O: Write>(out: &mut O, game: &GameSession) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Sequence: {}   Word length: {}   Attempts: {}{}",
        game.sequence().to_uppercase().bright_blue().bold(),
        game.word_length(),
        game.max_attempts(),
        if game.mode().is_hard() { "   (hard)" } else { "" }
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")
}

fn print_share<O: Write>(out: &mut O, game: &GameSession) -> io::Result<()> {
    let rows = game.history().iter().map(|e| e.verdicts.as_slice());
    writeln!(out, "\n{}", share_text(game.sequence(), game.word_length(), rows))?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(out, "Type 'new <6|7|8>' for another word or 'quit' to exit.\n")
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
