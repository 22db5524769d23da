#![cfg_attr(feature = "unstable", feature(test))]

//! Suggests guesses for Wordle-style puzzles.
//!
//! Feedback from each guess is folded into a [`ConstraintSnapshot`], and [`filter_words`] keeps
//! only the dictionary words that are still consistent with it. Repeated letters are handled
//! exactly: if a guess repeats a letter and only some of its tiles are colored, the answer must
//! contain exactly that many of the letter.
//!
//! ```
//! use rs_wordle_suggest::*;
//!
//! let bank = WordBank::from_iterator(["CRANE", "BRINK", "TRUNK", "SLATE"]);
//! let mut snapshot = ConstraintSnapshot::new();
//! snapshot.update(&GuessResult::from_feedback("CRANE", ".g.g.")?)?;
//!
//! let candidates = filter_words(&bank, &snapshot);
//! assert_eq!(candidates.len(), 2);
//! assert_eq!(&*candidates[0], "BRINK");
//! # Ok::<(), WordleError>(())
//! ```

mod data;
mod engine;
mod filter;
mod restrictions;
mod results;

pub use data::WordBank;
pub use engine::*;
pub use filter::*;
pub use restrictions::*;
pub use results::*;
