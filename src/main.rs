//! Sequence Word - CLI
//!
//! Daily sequence-word puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use seqword::{
    commands::{SimpleConfig, check_guess, puzzle_for, run_audit, run_simple},
    config::{FileSettingsStore, Settings, SettingsStore},
    core::Mode,
    game::Daily,
    output::{print_audit_report, print_evaluation, print_keyboard, print_puzzle_summary},
    puzzle::{
        DATE_FORMAT, PUZZLES, Puzzle, PuzzleRepository, RotatingRepository,
        loader::{PuzzleRecord, load_from_file, records_from_slice},
        repository_from_records,
    },
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqword",
    about = "Daily word puzzle where every guess contains the day's three-letter sequence",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hard mode: no hints for letters that overhang the hidden word
    #[arg(long, global = true)]
    hard: bool,

    /// Hidden word length to play: 6, 7 or 8
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Attempts allowed per word
    #[arg(short, long, global = true)]
    attempts: Option<usize>,

    /// Puzzle file to use instead of the built-in rotation
    #[arg(short, long, global = true)]
    puzzles: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Play the puzzle with this identifier; must be within a day of today
    #[arg(long, global = true)]
    puzzle: Option<String>,

    /// Store the effective hard/length/attempts/puzzles settings as defaults
    #[arg(long, global = true)]
    save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Evaluate one guess against a word
    Check {
        /// The hidden word
        word: String,

        /// Three-letter sequence contained in the word
        sequence: String,

        /// The guess to evaluate
        guess: String,
    },

    /// Show today's sequence and word lengths
    Today {
        /// Pick a random puzzle from the surrounding year instead
        #[arg(short, long)]
        random: bool,
    },

    /// Validate every puzzle and cross-check the engine on it
    Audit,
}

type Repository = Box<dyn PuzzleRepository + Send + Sync>;

/// Merge stored settings with command-line overrides
///
/// Overrides are not sanitized, so a bad `--length` is rejected when the
/// game starts instead of being replaced.
fn effective_settings(cli: &Cli, store: &FileSettingsStore) -> Settings {
    let mut settings = store.load();
    if cli.hard {
        settings.hard_mode = true;
    }
    if let Some(length) = cli.length {
        settings.word_length = length;
    }
    if let Some(attempts) = cli.attempts {
        settings.max_attempts = attempts;
    }
    if let Some(path) = &cli.puzzles {
        settings.puzzles = Some(path.clone());
    }
    settings
}

/// Load puzzle records from the configured file or the embedded table
fn load_records(settings: &Settings) -> Result<Vec<PuzzleRecord>> {
    match &settings.puzzles {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load puzzles from {}", path.display())),
        None => Ok(records_from_slice(PUZZLES)),
    }
}

fn build_repository(settings: &Settings) -> Result<Repository> {
    if settings.puzzles.is_some() {
        Ok(repository_from_records(&load_records(settings)?)?)
    } else {
        Ok(Box::new(RotatingRepository::embedded()?))
    }
}

fn today(cli: &Cli) -> Result<NaiveDate> {
    match &cli.date {
        Some(date) => NaiveDate::parse_from_str(date, DATE_FORMAT)
            .with_context(|| format!("invalid date '{date}', expected YYYY-MM-DD")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = FileSettingsStore::new();
    let settings = effective_settings(&cli, &store);

    if cli.save {
        store
            .save(&settings)
            .with_context(|| format!("failed to save settings to {}", store.path().display()))?;
        log::info!("saved settings to {}", store.path().display());
    }

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Check {
            word,
            sequence,
            guess,
        } => run_check_command(word, sequence, guess, settings.mode()),
        Commands::Audit => run_audit_command(&settings),
        Commands::Today { random } => {
            let daily = Daily::new(build_repository(&settings)?);
            let puzzle = puzzle_for(&daily, today(&cli)?, *random)?;
            print_puzzle_summary(&puzzle);
            Ok(())
        }
        Commands::Play => {
            let puzzle = select_puzzle(&cli, &settings)?;
            run_play_command(puzzle, &settings)
        }
        Commands::Simple => {
            let puzzle = select_puzzle(&cli, &settings)?;
            let config = SimpleConfig {
                length: settings.word_length,
                mode: settings.mode(),
                max_attempts: settings.max_attempts,
            };
            run_simple(&puzzle, &config).map_err(|e| anyhow::anyhow!(e))
        }
    }
}

/// Today's puzzle, or the one named by `--puzzle` if it is still fresh
fn select_puzzle(cli: &Cli, settings: &Settings) -> Result<Puzzle> {
    let daily = Daily::new(build_repository(settings)?);
    let today = today(cli)?;

    let puzzle = match &cli.puzzle {
        Some(id) => daily.resolve(id, today)?,
        None => daily.today(today)?,
    };
    log::debug!("playing puzzle {puzzle}");
    Ok(puzzle)
}

fn run_check_command(word: &str, sequence: &str, guess: &str, mode: Mode) -> Result<()> {
    let evaluation = check_guess(word, sequence, guess, mode)?;

    print_evaluation(&evaluation);
    print_keyboard(&evaluation.hints);
    if evaluation.won {
        println!("Solved!");
    }
    Ok(())
}

fn run_audit_command(settings: &Settings) -> Result<()> {
    let records = load_records(settings)?;
    println!("Auditing {} puzzles...", records.len());

    let report = run_audit(&records, true);
    print_audit_report(&report);

    if report.is_clean() {
        Ok(())
    } else {
        anyhow::bail!("{} problem(s) found", report.problems.len())
    }
}

fn run_play_command(puzzle: Puzzle, settings: &Settings) -> Result<()> {
    use seqword::interactive::{App, run_tui};

    let app = App::new(
        puzzle,
        settings.word_length,
        settings.mode(),
        settings.max_attempts,
    )?;
    run_tui(app)
}
