use chrono::{Local, NaiveDate};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends solved words to a text file, one `YYYY-MM-DD : WORD` line per puzzle.
pub struct SolvedLog {
    path: PathBuf,
}

impl SolvedLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> SolvedLog {
        SolvedLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records that the given word was solved today.
    pub fn append(&self, word: &str) -> io::Result<()> {
        self.append_on(Local::now().date_naive(), word)
    }

    fn append_on(&self, date: NaiveDate, word: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} : {}", date.format("%Y-%m-%d"), word)
    }
}
