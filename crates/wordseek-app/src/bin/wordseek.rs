//! Wordseek terminal player.
//!
//! Puzzles are saved to a JSON file (`wordseek.json` by default) and can be
//! resumed later.
//!
//! # Usage
//!
//! ```sh
//! wordseek new --difficulty hard
//! wordseek new --word rust --word cargo --size 8
//! wordseek play
//! wordseek list
//! ```

use std::{
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::{Instant, SystemTime},
};

use clap::Parser;
use wordseek_app::{
    AppError, GameService, Session, Settings,
    command::{self, Command, ParseCommandError},
    game_factory::NewGameRequest,
    identity::LocalIdentity,
    render,
};
use wordseek_core::{Difficulty, Position, Word};
use wordseek_game::{GridView, Selection, SelectionOutcome, SelectionTracker};
use wordseek_generator::PuzzleSeed;
use wordseek_store::{JsonFileStore, PuzzleId};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Store file.
    #[arg(long, value_name = "PATH", global = true)]
    store: Option<PathBuf>,

    /// User to play as.
    #[arg(short, long, value_name = "NAME", default_value = "player", global = true)]
    user: String,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, clap::Subcommand)]
enum CliCommand {
    /// Generate a new puzzle and play it.
    New(NewArgs),
    /// Resume a saved puzzle, the latest unfinished one by default.
    Play {
        /// Puzzle to resume.
        id: Option<PuzzleId>,
    },
    /// List saved puzzles.
    List,
    /// Print a saved puzzle.
    Show {
        /// Puzzle to print.
        id: PuzzleId,
    },
    /// Delete a saved puzzle.
    Delete {
        /// Puzzle to delete.
        id: PuzzleId,
    },
}

#[derive(Debug, clap::Args)]
struct NewArgs {
    /// Grid size.
    #[arg(short, long, value_name = "N")]
    size: Option<usize>,

    /// Difficulty preset (easy, medium, hard).
    #[arg(short, long, value_name = "LEVEL")]
    difficulty: Option<Difficulty>,

    /// Word to hide. Repeatable. Defaults to the difficulty's built-in list.
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<Word>,

    /// Seed to regenerate a known puzzle.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Placement attempts per word.
    #[arg(long, value_name = "COUNT")]
    max_attempts: Option<usize>,
}

impl NewArgs {
    fn apply(&self, settings: &mut Settings) {
        let generation = &mut settings.generation;
        if let Some(size) = self.size {
            generation.grid_size = size;
        }
        if let Some(difficulty) = self.difficulty {
            generation.difficulty = difficulty;
        }
        if let Some(max_attempts) = self.max_attempts {
            generation.max_attempts = max_attempts;
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = Settings::default();
    if let Some(path) = cli.store {
        settings.store_path = path;
    }
    if let CliCommand::New(args) = &cli.command {
        args.apply(&mut settings);
    }
    let store = JsonFileStore::open(&settings.store_path)?;
    let mut service = GameService::sign_in(store, &LocalIdentity, &cli.user, settings)?;

    match cli.command {
        CliCommand::New(args) => {
            let request = NewGameRequest {
                words: args.words,
                seed: args.seed,
            };
            let (session, seed) = service.start_new(request)?;
            println!("Started puzzle {} (seed {seed}).", session.id());
            play(&mut service, session)
        }
        CliCommand::Play { id } => {
            let session = match id {
                Some(id) => service.open(id)?,
                None => {
                    let Some(session) = service.open_latest()? else {
                        println!("No unfinished puzzle. Start one with `wordseek new`.");
                        return Ok(());
                    };
                    session
                }
            };
            if session.game().is_completed() {
                println!("Puzzle {} is already completed.", session.id());
                print_board(&session, None);
                return Ok(());
            }
            println!("Resuming puzzle {}.", session.id());
            play(&mut service, session)
        }
        CliCommand::List => {
            let summaries = service.list()?;
            if summaries.is_empty() {
                println!("No saved puzzles.");
            } else {
                println!("{}", render::render_summaries(&summaries, SystemTime::now()));
            }
            Ok(())
        }
        CliCommand::Show { id } => {
            let session = service.open(id)?;
            print_board(&session, None);
            Ok(())
        }
        CliCommand::Delete { id } => {
            service.delete(id)?;
            println!("Deleted puzzle {id}.");
            Ok(())
        }
    }
}

fn play(service: &mut GameService<JsonFileStore>, mut session: Session) -> Result<(), AppError> {
    let grid_size = session.game().grid().size();
    let mut tracker = SelectionTracker::new(grid_size, session.game().directions());

    print_board(&session, None);
    println!("Type `help` for commands.");

    let input = spawn_input_reader();
    while !session.game().is_completed() {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(line) = next_line(&input, service, &mut session) else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match command {
            Command::Select { start, end } => {
                let Some(selection) = trace(&mut tracker, start, end) else {
                    println!("{start} to {end} is not a straight line this puzzle allows.");
                    continue;
                };
                let outcome = service.select(&mut session, &selection, Instant::now())?;
                print_board(&session, Some(&selection));
                match outcome {
                    SelectionOutcome::Found { word, .. } => println!("Found {word}!"),
                    SelectionOutcome::AlreadyFound { word } => {
                        println!("{word} is already found.");
                    }
                    SelectionOutcome::NoMatch => println!("No word there."),
                }
            }
            Command::ShowGrid => print_board(&session, None),
            Command::ShowWords => {
                println!("{}", render::render_words(&GridView::build(session.game(), None)));
            }
            Command::Help => println!("{}", command::HELP),
            Command::Quit => break,
        }
    }

    service.flush(&mut session)?;
    if session.game().is_completed() {
        println!("Puzzle {} completed. Well done!", session.id());
    } else {
        println!("Saved puzzle {}. Resume with `wordseek play`.", session.id());
    }
    Ok(())
}

/// Reads stdin on a separate thread so autosave can run while the prompt waits.
fn spawn_input_reader() -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Waits for the next input line, saving the session whenever its autosave
/// deadline passes first. Returns `None` at end of input.
fn next_line(
    input: &mpsc::Receiver<io::Result<String>>,
    service: &mut GameService<JsonFileStore>,
    session: &mut Session,
) -> Option<String> {
    // After a failed save, wait for input instead of retrying in a loop.
    let mut autosave_failed = false;
    loop {
        let received = match session.save_deadline().filter(|_| !autosave_failed) {
            Some(deadline) => {
                input.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => input.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(Ok(line)) => return Some(line),
            Ok(Err(e)) => {
                log::warn!("failed to read input: {e}");
                return None;
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Err(e) = service.save_if_due(session, Instant::now()) {
                    log::warn!("autosave failed: {e}");
                    autosave_failed = true;
                }
            }
            Err(RecvTimeoutError::Disconnected) => return None,
        }
    }
}

/// Replays a drag from `start` to `end`; `None` if the tracker rejects it.
fn trace(tracker: &mut SelectionTracker, start: Position, end: Position) -> Option<Selection> {
    tracker.start(start);
    tracker.update(end);
    let selection = tracker.finish()?;
    (selection.cells().last() == Some(&end)).then_some(selection)
}

fn print_board(session: &Session, selection: Option<&Selection>) {
    let view = GridView::build(session.game(), selection);
    println!("{}", render::render_grid(&view));
    println!();
    println!("{}", render::render_words(&view));
    println!("{}", render::render_status(&view));
}
