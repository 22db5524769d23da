use crate::results::WordleError;
use crate::results::WORD_LENGTH;
use log::{debug, trace};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use std::result::Result;
use std::sync::Arc;

/// The layout of a JSON word list: `{"words": ["CRANE", "SLATE", ...]}`.
#[derive(Deserialize)]
struct WordsFile {
    #[serde(default)]
    words: Vec<serde_json::Value>,
}

/// Contains all the possible words for this Wordle game.
///
/// Words are stored in upper case. Entries that are not exactly [`WORD_LENGTH`] ASCII letters
/// are skipped while loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Surrounding whitespace is trimmed, and blank
    /// lines are ignored.
    pub fn from_reader<R: Read>(word_reader: R) -> Result<Self, WordleError> {
        let lines = BufReader::new(word_reader)
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()?;
        Ok(WordBank::from_iterator(lines))
    }

    /// Constructs a new `WordBank` from a JSON object with a `words` array.
    ///
    /// Entries that are not strings are skipped, and a missing `words` field gives an empty bank.
    ///
    /// ```
    /// use rs_wordle_suggest::WordBank;
    ///
    /// let json = r#"{"words": ["crane", "slate", 42, "toolong"]}"#;
    /// let bank = WordBank::from_json_reader(json.as_bytes())?;
    ///
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(&*bank[0], "CRANE");
    /// # Ok::<(), rs_wordle_suggest::WordleError>(())
    /// ```
    pub fn from_json_reader<R: Read>(json_reader: R) -> Result<Self, WordleError> {
        let file: WordsFile = serde_json::from_reader(json_reader)?;
        Ok(WordBank::from_iterator(
            file.words.iter().filter_map(|value| value.as_str()),
        ))
    }

    /// Loads a word list from disk. Files ending in `.json` are read with
    /// [`WordBank::from_json_reader`], anything else with [`WordBank::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordleError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let bank = match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => {
                WordBank::from_json_reader(BufReader::new(file))?
            }
            _ => WordBank::from_reader(file)?,
        };
        debug!("Loaded {} words from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank {
            all_words: words
                .into_iter()
                .filter_map(|word| normalize_word(word.as_ref()))
                .collect(),
        }
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff the bank has no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns `true` iff the given word is in the bank, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        self.all_words.iter().any(|other| **other == *word)
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

fn normalize_word(word: &str) -> Option<Arc<str>> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    if word.chars().count() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        trace!("Skipping {:?}", word);
        return None;
    }
    Some(Arc::from(word.to_ascii_uppercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_word_upper_cases() {
        assert_eq!(normalize_word(" crane\t"), Some(Arc::from("CRANE")));
        assert_eq!(normalize_word("Slate"), Some(Arc::from("SLATE")));
    }

    #[test]
    fn normalize_word_rejects_invalid() {
        assert_eq!(normalize_word(""), None);
        assert_eq!(normalize_word("   "), None);
        assert_eq!(normalize_word("cranes"), None);
        assert_eq!(normalize_word("cran"), None);
        assert_eq!(normalize_word("cr4ne"), None);
        assert_eq!(normalize_word("crâne"), None);
    }
}
