use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;
use std::iter::zip;
use std::sync::Arc;
use thiserror::Error;

/// The number of letters in every word of the puzzle.
pub const WORD_LENGTH: usize = 5;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum LetterResult {
    /// The letter is in the word, at this location (green).
    Correct,
    /// The letter is in the word, but somewhere else (yellow).
    Present,
    /// The letter is not in the word, or not as many times as it was guessed (grey).
    Absent,
}

impl LetterResult {
    /// Parses a single feedback character:
    ///
    ///   * `g` = [`LetterResult::Correct`]
    ///   * `y` = [`LetterResult::Present`]
    ///   * `.` or `x` = [`LetterResult::Absent`]
    ///
    /// Letters are matched case-insensitively.
    pub fn from_char(c: char) -> Option<LetterResult> {
        match c.to_ascii_lowercase() {
            'g' => Some(LetterResult::Correct),
            'y' => Some(LetterResult::Present),
            '.' | 'x' => Some(LetterResult::Absent),
            _ => None,
        }
    }

    /// The inverse of [`LetterResult::from_char`], using `.` for absent letters.
    pub fn to_char(self) -> char {
        match self {
            LetterResult::Correct => 'g',
            LetterResult::Present => 'y',
            LetterResult::Absent => '.',
        }
    }
}

/// Indicates that an error occurred while loading words or applying feedback.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// Indicates that the given `GuessResult`s are impossible due to some inconsistency with the
    /// feedback that was already applied.
    #[error("the given results contradict earlier feedback")]
    InvalidResults,
    /// Indicates that one or more given characters are not in the supported set (`A`-`Z`).
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),
    /// Indicates that a word or result has the wrong length. Contains the expected length.
    #[error("expected a length of {0}")]
    WordLength(usize),
    /// Feedback was given for a puzzle that is already solved or out of attempts.
    #[error("the puzzle is already finished")]
    Finished,
    /// Reading a word list failed.
    #[error("failed to read words: {0}")]
    Io(String),
    /// A JSON word list could not be parsed.
    #[error("failed to parse the word list: {0}")]
    Json(String),
}

impl From<io::Error> for WordleError {
    fn from(error: io::Error) -> Self {
        WordleError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for WordleError {
    fn from(error: serde_json::Error) -> Self {
        WordleError::Json(error.to_string())
    }
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    /// The guess that was made.
    pub guess: &'a str,
    /// The result of each letter, provided in the same leter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Builds a result from a feedback string such as `"g.y.."`. See
    /// [`LetterResult::from_char`] for the accepted characters.
    ///
    /// ```
    /// use rs_wordle_suggest::GuessResult;
    /// use rs_wordle_suggest::LetterResult;
    ///
    /// let result = GuessResult::from_feedback("CRANE", ".g...").unwrap();
    ///
    /// assert_eq!(result.results[1], LetterResult::Correct);
    /// assert_eq!(result.results[0], LetterResult::Absent);
    /// ```
    pub fn from_feedback(guess: &'a str, feedback: &str) -> Result<GuessResult<'a>, WordleError> {
        let results = feedback
            .chars()
            .map(|c| LetterResult::from_char(c).ok_or(WordleError::UnsupportedCharacter(c)))
            .collect::<Result<Vec<LetterResult>, WordleError>>()?;
        if results.len() != guess.chars().count() {
            return Err(WordleError::WordLength(guess.chars().count()));
        }
        Ok(GuessResult { guess, results })
    }

    /// Returns `true` iff every letter was correct.
    pub fn is_solved(&self) -> bool {
        !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|result| *result == LetterResult::Correct)
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Arc<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Arc<str>>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Repeated letters are only marked [`LetterResult::Present`] as many times as they remain
/// unmatched in the objective, after all [`LetterResult::Correct`] letters are accounted for.
///
/// ```
/// use rs_wordle_suggest::get_result_for_guess;
/// use rs_wordle_suggest::LetterResult;
///
/// let result = get_result_for_guess("ABIDE", "SPEED").unwrap();
///
/// assert_eq!(
///     result.results,
///     vec![
///         LetterResult::Absent,
///         LetterResult::Absent,
///         LetterResult::Present,
///         LetterResult::Absent,
///         LetterResult::Present,
///     ]
/// );
/// ```
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let objective_length = objective.chars().count();
    if objective_length != guess.chars().count() {
        return Err(WordleError::WordLength(objective_length));
    }
    let mut results = vec![LetterResult::Absent; objective_length];
    let mut unmatched: HashMap<char, u8> = HashMap::new();
    for ((index, objective_letter), guess_letter) in
        zip(objective.chars().enumerate(), guess.chars())
    {
        if objective_letter == guess_letter {
            results[index] = LetterResult::Correct;
        } else {
            *unmatched.entry(objective_letter).or_insert(0) += 1;
        }
    }
    for (index, letter) in guess.chars().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = unmatched.get_mut(&letter) {
            if *count > 0 {
                *count -= 1;
                results[index] = LetterResult::Present;
            }
        }
    }
    Ok(GuessResult { guess, results })
}
