use crate::restrictions::ConstraintSnapshot;
use log::debug;
use rayon::prelude::*;

/// Gets the words in the dictionary that satisfy the given snapshot, in dictionary order.
///
/// This never fails: an empty dictionary gives an empty list, and an empty snapshot gives every
/// word that was not already tried. Words are compared exactly as given, so the dictionary should
/// already be upper case (see [`WordBank`](crate::WordBank)).
///
/// ```
/// use rs_wordle_suggest::filter_words;
/// use rs_wordle_suggest::ConstraintSnapshot;
/// use rs_wordle_suggest::GuessResult;
///
/// let dictionary = ["SPEED", "ABIDE", "EAGER", "TOKEN"];
/// let snapshot = ConstraintSnapshot::from_result(&GuessResult::from_feedback("SPEED", "...g.")?)?;
///
/// assert_eq!(filter_words(&dictionary, &snapshot), vec!["TOKEN"]);
/// # Ok::<(), rs_wordle_suggest::WordleError>(())
/// ```
pub fn filter_words<W>(dictionary: &[W], snapshot: &ConstraintSnapshot) -> Vec<W>
where
    W: AsRef<str> + Clone,
{
    let possible_words: Vec<W> = dictionary
        .iter()
        .filter(|word| snapshot.is_satisfied_by(word.as_ref()))
        .cloned()
        .collect();
    debug!(
        "{} of {} words remain possible",
        possible_words.len(),
        dictionary.len()
    );
    possible_words
}

/// Same as [`filter_words`], but checks the words in parallel. The output order still matches the
/// dictionary.
pub fn filter_words_par<W>(dictionary: &[W], snapshot: &ConstraintSnapshot) -> Vec<W>
where
    W: AsRef<str> + Clone + Send + Sync,
{
    let possible_words: Vec<W> = dictionary
        .par_iter()
        .filter(|word| snapshot.is_satisfied_by(word.as_ref()))
        .cloned()
        .collect();
    debug!(
        "{} of {} words remain possible",
        possible_words.len(),
        dictionary.len()
    );
    possible_words
}
