use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
use crate::results::WORD_LENGTH;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::HashSet;
use std::iter::zip;
use std::sync::Arc;

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
}

impl LocatedLetter {
    pub fn new(letter: char, location: u8) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// The feedback accumulated from every guess made so far in one puzzle.
///
/// A fresh snapshot has no constraints. It is updated once per guess with
/// [`ConstraintSnapshot::update`], and read by [`filter_words`](crate::filter_words) and
/// [`ConstraintSnapshot::is_satisfied_by`].
///
/// The fields are public so that snapshots can be built directly, but
/// [`ConstraintSnapshot::update`] is the only way to derive them from feedback while keeping them
/// consistent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSnapshot {
    /// Words that were already guessed.
    pub tried_words: HashSet<Arc<str>>,
    /// Letters known to be at each location (green).
    pub known_positions: [Option<char>; WORD_LENGTH],
    /// Letters known to be somewhere in the word.
    pub present_letters: HashSet<char>,
    /// Letters that must not be at the given location (yellow).
    pub forbidden_positions: HashSet<LocatedLetter>,
    /// Letters that must not be in the word, unless they also have an exact count.
    pub absent_letters: HashSet<char>,
    /// Letters that must appear exactly this many times.
    pub exact_counts: HashMap<char, u8>,
}

impl ConstraintSnapshot {
    /// Creates an empty snapshot, which every word satisfies.
    pub fn new() -> ConstraintSnapshot {
        ConstraintSnapshot::default()
    }

    /// Returns the constraints imposed by the given result alone.
    pub fn from_result(result: &GuessResult) -> Result<ConstraintSnapshot, WordleError> {
        let mut snapshot = ConstraintSnapshot::new();
        snapshot.update(result)?;
        Ok(snapshot)
    }

    /// Clears all constraints, ready for a new puzzle.
    pub fn reset(&mut self) {
        *self = ConstraintSnapshot::default();
    }

    /// Adds the constraints arising from the given guess result.
    ///
    /// If the result is malformed or contradicts the feedback applied so far, an error is returned
    /// and the snapshot is left unchanged. The contradictions are: a green or yellow letter that
    /// is already absent, a green letter where a different letter is known, a yellow or grey
    /// letter where that same letter is known, and a repeated-letter count that differs from an
    /// earlier one. A grey tile for a letter that is already present is ignored.
    ///
    /// ```
    /// use rs_wordle_suggest::ConstraintSnapshot;
    /// use rs_wordle_suggest::GuessResult;
    ///
    /// let mut snapshot = ConstraintSnapshot::new();
    /// snapshot.update(&GuessResult::from_feedback("SPEED", "...g.")?)?;
    ///
    /// assert_eq!(snapshot.exact_counts.get(&'E'), Some(&1));
    /// assert_eq!(snapshot.known_positions[3], Some('E'));
    /// assert!(snapshot.is_satisfied_by("TOKEN"));
    /// assert!(!snapshot.is_satisfied_by("QUEEN"));
    /// # Ok::<(), rs_wordle_suggest::WordleError>(())
    /// ```
    pub fn update(&mut self, guess_result: &GuessResult) -> Result<(), WordleError> {
        let mut updated = self.clone();
        updated.apply(guess_result)?;
        *self = updated;
        debug!(
            "Applied {} {:?}: {:?}",
            guess_result.guess, guess_result.results, self
        );
        Ok(())
    }

    /// Returns `true` iff the given word satisfies these constraints.
    ///
    /// The checks are, in order: the word was not already tried, green letters are in place,
    /// present letters are somewhere in the word, yellow letters are not at their guessed
    /// locations, exact counts match, and absent letters are missing. Absent letters that also
    /// have an exact count are only checked against that count.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        !self.tried_words.contains(word)
            && self
                .known_positions
                .iter()
                .enumerate()
                .all(|(index, maybe_letter)| {
                    maybe_letter.map_or(true, |letter| word.chars().nth(index) == Some(letter))
                })
            && self
                .present_letters
                .iter()
                .all(|letter| word.contains(*letter))
            && self
                .forbidden_positions
                .iter()
                .all(|ll| word.chars().nth(ll.location as usize) != Some(ll.letter))
            && self.exact_counts.iter().all(|(letter, count)| {
                word.chars().filter(|other| other == letter).count() == *count as usize
            })
            && self
                .absent_letters
                .iter()
                .filter(|letter| !self.exact_counts.contains_key(*letter))
                .all(|letter| !word.contains(*letter))
    }

    fn apply(&mut self, guess_result: &GuessResult) -> Result<(), WordleError> {
        let letters: Vec<char> = guess_result.guess.chars().collect();
        if letters.len() != WORD_LENGTH || guess_result.results.len() != WORD_LENGTH {
            return Err(WordleError::WordLength(WORD_LENGTH));
        }
        if let Some(letter) = letters.iter().find(|letter| !letter.is_ascii_uppercase()) {
            return Err(WordleError::UnsupportedCharacter(*letter));
        }

        let colored_counts = count_letters(&letters, &guess_result.results);
        for (letter, total_count) in count_letters(&letters, &[]) {
            let colored_count = *colored_counts.get(&letter).unwrap_or(&0);
            // Grey repeats of a colored letter cap its count at the number of colored tiles.
            if colored_count > 0 && colored_count < total_count {
                self.set_exact_count(letter, colored_count)?;
            }
        }

        for (index, (letter, result)) in zip(letters, guess_result.results.iter()).enumerate() {
            match result {
                LetterResult::Correct => self.set_letter_here(letter, index)?,
                LetterResult::Present => self.set_letter_present_not_here(letter, index)?,
                LetterResult::Absent => {
                    let colored_count = *colored_counts.get(&letter).unwrap_or(&0);
                    self.set_letter_not_present(letter, index, colored_count)?
                }
            }
        }

        self.tried_words.insert(Arc::from(guess_result.guess));
        Ok(())
    }

    fn set_exact_count(&mut self, letter: char, count: u8) -> Result<(), WordleError> {
        match self.exact_counts.get(&letter) {
            Some(existing_count) if *existing_count != count => Err(WordleError::InvalidResults),
            _ => {
                self.exact_counts.insert(letter, count);
                Ok(())
            }
        }
    }

    fn set_letter_here(&mut self, letter: char, location: usize) -> Result<(), WordleError> {
        if self.absent_letters.contains(&letter) {
            return Err(WordleError::InvalidResults);
        }
        match self.known_positions[location] {
            Some(existing) if existing != letter => return Err(WordleError::InvalidResults),
            _ => {}
        }
        self.known_positions[location] = Some(letter);
        self.present_letters.insert(letter);
        self.forbidden_positions
            .remove(&LocatedLetter::new(letter, location as u8));
        Ok(())
    }

    fn set_letter_present_not_here(
        &mut self,
        letter: char,
        location: usize,
    ) -> Result<(), WordleError> {
        if self.absent_letters.contains(&letter)
            || self.known_positions[location] == Some(letter)
        {
            return Err(WordleError::InvalidResults);
        }
        self.present_letters.insert(letter);
        self.forbidden_positions
            .insert(LocatedLetter::new(letter, location as u8));
        Ok(())
    }

    fn set_letter_not_present(
        &mut self,
        letter: char,
        location: usize,
        colored_count: u8,
    ) -> Result<(), WordleError> {
        if self.known_positions[location] == Some(letter) {
            return Err(WordleError::InvalidResults);
        }
        // Colored repeats are captured by the exact count, and earlier colored tiles win over a
        // later grey one.
        if colored_count > 0 || self.present_letters.contains(&letter) {
            return Ok(());
        }
        self.absent_letters.insert(letter);
        Ok(())
    }
}

/// Counts each letter, only including letters whose result is not [`LetterResult::Absent`] unless
/// `results` is empty.
fn count_letters(letters: &[char], results: &[LetterResult]) -> HashMap<char, u8> {
    let mut counts: HashMap<char, u8> = HashMap::new();
    for (index, letter) in letters.iter().enumerate() {
        if results
            .get(index)
            .map_or(true, |result| *result != LetterResult::Absent)
        {
            *counts.entry(*letter).or_insert(0) += 1;
        }
    }
    counts
}
