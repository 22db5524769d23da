use crate::data::WordBank;
use crate::filter::filter_words;
use crate::restrictions::ConstraintSnapshot;
use crate::results::*;
use log::{debug, error, info};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Guesses words in order to solve a single Wordle.
pub trait Guesser {
    /// Updates this guesser with information about a word.
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError>;

    /// Selects a new guess for the Wordle.
    ///
    /// Returns `None` if no known words are possible given the known restrictions imposed by
    /// previous calls to [`Self::update()`].
    fn select_next_guess(&mut self) -> Option<Arc<str>>;

    /// Provides read access to the remaining set of possible words in this guesser.
    fn possible_words(&self) -> &[Arc<str>];

    /// Forgets all feedback, ready for a new puzzle.
    fn reset(&mut self);
}

/// Guesses at random from the possible words that meet the restrictions.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rs_wordle_suggest::Guesser;
/// use rs_wordle_suggest::RandomGuesser;
/// use rs_wordle_suggest::WordBank;
///
/// let bank = WordBank::from_iterator(["CRANE", "SLATE", "TRACE"]);
/// let mut guesser = RandomGuesser::with_rng(bank, StdRng::seed_from_u64(7));
///
/// assert!(guesser.select_next_guess().is_some());
/// ```
#[derive(Clone)]
pub struct RandomGuesser<R = ThreadRng> {
    bank: WordBank,
    snapshot: ConstraintSnapshot,
    possible_words: Vec<Arc<str>>,
    rng: R,
}

impl RandomGuesser<ThreadRng> {
    /// Constructs a guesser that picks words using the thread-local random number generator.
    pub fn new(bank: WordBank) -> RandomGuesser<ThreadRng> {
        RandomGuesser::with_rng(bank, rand::thread_rng())
    }
}

impl<R: Rng> RandomGuesser<R> {
    /// Constructs a guesser that picks words using the given random number generator. Use a
    /// seeded generator for reproducible suggestions.
    pub fn with_rng(bank: WordBank, rng: R) -> RandomGuesser<R> {
        RandomGuesser {
            possible_words: bank.to_vec(),
            bank,
            snapshot: ConstraintSnapshot::new(),
            rng,
        }
    }

    /// The feedback gathered so far.
    pub fn snapshot(&self) -> &ConstraintSnapshot {
        &self.snapshot
    }
}

impl<R: Rng> Guesser for RandomGuesser<R> {
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError> {
        self.snapshot.update(result)?;
        self.possible_words = filter_words(&self.bank, &self.snapshot);
        Ok(())
    }

    fn select_next_guess(&mut self) -> Option<Arc<str>> {
        self.possible_words.choose(&mut self.rng).map(Arc::clone)
    }

    fn possible_words(&self) -> &[Arc<str>] {
        &self.possible_words
    }

    fn reset(&mut self) {
        self.snapshot.reset();
        self.possible_words = self.bank.to_vec();
    }
}

/// What happened after feedback was committed to a [`Session`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TurnOutcome {
    /// Every letter was correct.
    Solved(Arc<str>),
    /// The puzzle continues, with this many possible words left.
    Continue { remaining: usize },
    /// The maximum number of attempts was used up without solving the puzzle.
    OutOfAttempts,
}

/// The default number of guesses allowed in a puzzle.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Tracks a single puzzle: the guesser's feedback plus the number of attempts used.
pub struct Session<G: Guesser> {
    guesser: G,
    max_attempts: u32,
    attempts: u32,
    finished: bool,
}

impl<G: Guesser> Session<G> {
    /// Starts a session that allows [`DEFAULT_MAX_ATTEMPTS`] guesses.
    pub fn new(guesser: G) -> Session<G> {
        Session::with_max_attempts(guesser, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(guesser: G, max_attempts: u32) -> Session<G> {
        Session {
            guesser,
            max_attempts,
            attempts: 0,
            finished: false,
        }
    }

    /// The number of guesses whose feedback was committed.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns `true` once the puzzle was solved or ran out of attempts.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn guesser(&self) -> &G {
        &self.guesser
    }

    /// Suggests the next word to guess, if any remain.
    pub fn suggest(&mut self) -> Option<Arc<str>> {
        self.guesser.select_next_guess()
    }

    /// Commits the feedback for one guess.
    ///
    /// Invalid feedback is rejected without using up an attempt. Once the session is finished,
    /// further feedback is rejected until [`Session::reset`] is called.
    pub fn commit(&mut self, result: &GuessResult) -> Result<TurnOutcome, WordleError> {
        if self.finished {
            return Err(WordleError::Finished);
        }
        self.guesser.update(result)?;
        self.attempts += 1;
        if result.is_solved() {
            self.finished = true;
            info!("Solved {} in {} guesses", result.guess, self.attempts);
            return Ok(TurnOutcome::Solved(Arc::from(result.guess)));
        }
        if self.attempts >= self.max_attempts {
            self.finished = true;
            info!("Out of attempts after {} guesses", self.attempts);
            return Ok(TurnOutcome::OutOfAttempts);
        }
        let remaining = self.guesser.possible_words().len();
        debug!("Attempt {}: {} words remain", self.attempts, remaining);
        Ok(TurnOutcome::Continue { remaining })
    }

    /// Starts a new puzzle with the same guesser.
    pub fn reset(&mut self) {
        self.guesser.reset();
        self.attempts = 0;
        self.finished = false;
    }
}

/// Attempts to guess the given word within the maximum number of guesses, using a
/// [`RandomGuesser`] over the given word bank.
pub fn play_game(word_to_guess: &str, max_num_guesses: u32, bank: &WordBank) -> GameResult {
    if !bank.contains(word_to_guess) {
        return GameResult::UnknownWord;
    }
    play_game_with_guesser(
        word_to_guess,
        max_num_guesses,
        RandomGuesser::new(bank.clone()),
    )
}

/// Attempts to guess the given word within the maximum number of guesses, using the given
/// guesser.
pub fn play_game_with_guesser<G: Guesser>(
    word_to_guess: &str,
    max_num_guesses: u32,
    mut guesser: G,
) -> GameResult {
    let objective = word_to_guess.trim().to_ascii_uppercase();
    let mut guesses: Vec<Arc<str>> = Vec::new();
    for _ in 1..=max_num_guesses {
        let guess = match guesser.select_next_guess() {
            Some(guess) => guess,
            None => {
                error!(
                    "No candidates left for {} after {:?}",
                    objective, guesses
                );
                return GameResult::UnknownWord;
            }
        };
        guesses.push(Arc::clone(&guess));
        let result = match get_result_for_guess(&objective, &guess) {
            Ok(result) => result,
            Err(err) => {
                error!("Could not score {} against {}: {}", guess, objective, err);
                return GameResult::UnknownWord;
            }
        };
        if result.is_solved() {
            return GameResult::Success(guesses);
        }
        if let Err(err) = guesser.update(&result) {
            error!(
                "Could not apply {} {:?} for {}: {}",
                guess, result.results, objective, err
            );
            return GameResult::UnknownWord;
        }
    }
    GameResult::Failure(guesses)
}
