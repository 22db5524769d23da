use clap::{Parser, Subcommand};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rs_wordle_suggest::*;
use std::collections::HashMap;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

mod solved_log;

use solved_log::SolvedLog;

/// Suggests Wordle guesses, narrowing a word list down with the feedback from each guess.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the word list. Files ending in `.json` must contain `{"words": [...]}`; anything
    /// else is read as one word per line.
    #[arg(
        short = 'f',
        long,
        env = "WORDLE_WORDS_FILE",
        default_value = "data/words.json"
    )]
    words_file: PathBuf,

    /// The maximum number of guesses allowed per puzzle.
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_guesses: u32,

    /// Seeds the random suggestions so that runs can be reproduced.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest words while you play a puzzle, entering the feedback for each guess.
    Interactive {
        /// File that solved words are appended to.
        #[arg(long, default_value = "complete.txt")]
        solved_log: PathBuf,
    },
    /// List the words that remain possible after the given guesses.
    Candidates {
        /// Each guess with its feedback, as GUESS:FEEDBACK (e.g. `CRANE:.g..y`).
        #[arg(required = true)]
        guesses: Vec<String>,
    },
    /// Run a single game against the given word.
    Single { word: String },
    /// Play against every word in the word list and report how many guesses each one took.
    Benchmark,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    let word_bank = WordBank::from_path(&args.words_file).map_err(|err| {
        error!("Could not load {}: {}", args.words_file.display(), err);
        err
    })?;
    info!("Loaded words from {}", args.words_file.display());
    println!("There are {} possible words.", word_bank.len());
    if word_bank.is_empty() {
        return Err(format!("{} contains no usable words", args.words_file.display()).into());
    }

    match args.command {
        Command::Interactive { solved_log } => play_interactive_game(
            word_bank,
            args.max_guesses,
            make_rng(args.seed),
            &SolvedLog::new(solved_log),
            &mut io::stdin().lock().lines(),
        )?,
        Command::Candidates { guesses } => list_candidates(&word_bank, &guesses)?,
        Command::Single { word } => {
            play_single_game(&word, &word_bank, args.max_guesses, args.seed)
        }
        Command::Benchmark => run_benchmark(&word_bank, args.max_guesses, args.seed),
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn play_interactive_game<B: BufRead>(
    word_bank: WordBank,
    max_guesses: u32,
    rng: StdRng,
    solved_log: &SolvedLog,
    lines: &mut io::Lines<B>,
) -> io::Result<()> {
    let mut session =
        Session::with_max_attempts(RandomGuesser::with_rng(word_bank, rng), max_guesses);

    println!(
        "I will suggest a word for each guess.\n\n\
         After guessing, enter the colour of each letter as:\n\n\
           * '.' = this letter is not in the word (grey)\n\
           * 'y' = this letter is in the word, but not in this location (yellow)\n\
           * 'g' = this letter is in the word and in the right location (green)\n\n\
         For example, if the word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\"\n\
         To give feedback for a different word than the suggestion, enter \"use <word>\" first.\n\
         Enter \"reset\" to start a new puzzle."
    );

    'puzzle: loop {
        let mut guess = session.suggest();
        match &guess {
            Some(guess) if session.attempts() == 0 => println!("Starting suggestion: {}", guess),
            Some(guess) => println!(
                "Suggestion: {} ({} words remain)",
                guess,
                session.guesser().possible_words().len()
            ),
            None => println!(
                "No matching words remain with the current feedback. \
                 Enter \"use <word>\" to try your own word, or \"reset\"."
            ),
        }

        loop {
            let input = match read_line(lines)? {
                Some(input) => input,
                None => return Ok(()),
            };
            if input.eq_ignore_ascii_case("reset") {
                session.reset();
                continue 'puzzle;
            }
            if let Some(word) = strip_use_command(&input) {
                match parse_manual_guess(word) {
                    Some(word) => {
                        println!("Enter the feedback for {}.", word);
                        guess = Some(word);
                    }
                    None => println!("Words must be {} letters from A to Z.", WORD_LENGTH),
                }
                continue;
            }

            let current_guess = match &guess {
                Some(current_guess) => current_guess,
                None => {
                    println!("Choose a word first with \"use <word>\".");
                    continue;
                }
            };
            let outcome = GuessResult::from_feedback(current_guess, &input)
                .and_then(|result| session.commit(&result));
            match outcome {
                Ok(TurnOutcome::Continue { .. }) => break,
                Ok(TurnOutcome::Solved(word)) => {
                    println!("Solved it! It took {} guesses.", session.attempts());
                    if let Err(err) = solved_log.append(&word) {
                        warn!(
                            "Could not write to {}: {}",
                            solved_log.path().display(),
                            err
                        );
                    }
                }
                Ok(TurnOutcome::OutOfAttempts) => println!("Out of attempts."),
                Err(err) => {
                    println!("Invalid feedback ({}). Try again.", err);
                    continue;
                }
            }
            if !ask_to_play_again(lines)? {
                return Ok(());
            }
            session.reset();
            continue 'puzzle;
        }
    }
}

/// Returns the rest of the input if it starts with a `use` command, ignoring case.
fn strip_use_command(input: &str) -> Option<&str> {
    let (command, word) = input.split_once(char::is_whitespace)?;
    command.eq_ignore_ascii_case("use").then_some(word)
}

fn parse_manual_guess(word: &str) -> Option<Arc<str>> {
    let word = word.trim().to_ascii_uppercase();
    if word.chars().count() != WORD_LENGTH
        || !word.chars().all(|letter| letter.is_ascii_uppercase())
    {
        return None;
    }
    Some(Arc::from(word.as_str()))
}

fn read_line<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    lines
        .next()
        .transpose()
        .map(|maybe_line| maybe_line.map(|line| line.trim().to_string()))
}

fn ask_to_play_again<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<bool> {
    println!("Play again? (y/n)");
    Ok(read_line(lines)?.map_or(false, |answer| answer.eq_ignore_ascii_case("y")))
}

/// Builds the snapshot for a list of `GUESS:FEEDBACK` arguments.
fn snapshot_from_args(guesses: &[String]) -> Result<ConstraintSnapshot, Box<dyn Error>> {
    let mut snapshot = ConstraintSnapshot::new();
    for arg in guesses {
        let (guess, feedback) = arg
            .split_once(':')
            .ok_or_else(|| format!("expected GUESS:FEEDBACK, got {:?}", arg))?;
        let guess = guess.trim().to_ascii_uppercase();
        snapshot
            .update(&GuessResult::from_feedback(&guess, feedback.trim())?)
            .map_err(|err| format!("{}: {}", arg, err))?;
    }
    Ok(snapshot)
}

fn list_candidates(word_bank: &WordBank, guesses: &[String]) -> Result<(), Box<dyn Error>> {
    let snapshot = snapshot_from_args(guesses)?;
    let candidates = filter_words_par(word_bank, &snapshot);
    println!("{} words remain:", candidates.len());
    for word in candidates.iter() {
        println!("\t{}", word);
    }
    Ok(())
}

fn play_single_game(word: &str, word_bank: &WordBank, max_guesses: u32, seed: Option<u64>) {
    if !word_bank.contains(word) {
        eprintln!("Error: given word not in the word list.");
        std::process::exit(1);
    }
    let guesser = RandomGuesser::with_rng(word_bank.clone(), make_rng(seed));
    match play_game_with_guesser(word, max_guesses, guesser) {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => {
            eprintln!("Error: given word not in the word list.");
            std::process::exit(1);
        }
    }
}

fn run_benchmark(word_bank: &WordBank, max_guesses: u32, seed: Option<u64>) {
    let words: &[Arc<str>] = word_bank;
    let num_guesses_per_game: Vec<u32> = words
        .par_iter()
        .enumerate()
        .filter_map(|(index, word)| {
            let rng = make_rng(seed.map(|seed| seed.wrapping_add(index as u64)));
            let guesser = RandomGuesser::with_rng(word_bank.clone(), rng);
            // Allow as many guesses as there are words, so every game finishes.
            match play_game_with_guesser(word, word_bank.len() as u32, guesser) {
                GameResult::Success(guesses) => Some(guesses.len() as u32),
                other => {
                    error!("Unexpected result for {}: {:?}", word, other);
                    None
                }
            }
        })
        .collect();
    let num_failures = num_guesses_per_game
        .iter()
        .filter(|num_guesses| **num_guesses > max_guesses)
        .count();
    println!("Solved {} words. Results:", num_guesses_per_game.len());

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds: Vec<u32> = num_games_per_round.keys().copied().collect();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games_per_round[num_round]);
    }

    if num_guesses_per_game.is_empty() {
        return;
    }
    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    println!(
        "**Games needing more than {} guesses:** {}",
        max_guesses, num_failures
    );
}
