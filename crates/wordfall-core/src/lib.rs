//! Core data structures for falling-letter word puzzles.
//!
//! A puzzle is a square grid of letters and a list of word lengths. Words are
//! traced through adjacent cells (including diagonals) and removed one at a
//! time; after each removal the letters above the gap fall straight down.
//! This crate provides the values such a search works with.
//!
//! # Overview
//!
//! 1. **Values** - Immutable building blocks
//!    - [`Letter`]: a character (or blank) tagged with its grid position
//!    - [`Word`]: a non-empty path of letters
//!    - [`Solution`]: a non-empty sequence of words, compared by text
//!
//! 2. **Board** - The puzzle state
//!    - [`Grid`]: an immutable N×N snapshot with 8-directional adjacency
//!    - [`GridBuilder`]: copy-on-write mutation, including [gravity]
//!
//! 3. **Lookup and bookkeeping**
//!    - [`Dictionary`]: a prefix trie answering word and prefix queries
//!    - [`CellSet`]: a compact set of positions
//!    - [`WordSet`]: words deduplicated and sorted by text
//!
//! [gravity]: GridBuilder::apply_gravity
//!
//! # Examples
//!
//! ```
//! use wordfall_core::{Dictionary, Grid, Word};
//!
//! let dictionary: Dictionary = ["cat"].into_iter().collect();
//! let grid: Grid = "C../AT./...".parse()?;
//!
//! let c = grid.get(0, 0)?;
//! let a = grid.get(1, 0)?;
//! let t = grid.get(1, 1)?;
//! assert!(grid.adjacent(a).contains(&t));
//!
//! let cat = Word::new(vec![c, a, t])?;
//! assert!(dictionary.contains_word(&cat));
//!
//! let next = grid.to_builder().clear_word(&cat)?.apply_gravity().build();
//! assert_eq!(next.letters().count(), 0);
//! # Ok::<(), wordfall_core::ModelError>(())
//! ```

pub mod cell_set;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod letter;
pub mod solution;
pub mod word;
pub mod word_set;

pub use self::{
    cell_set::CellSet,
    dictionary::{Dictionary, TrieCursor},
    error::ModelError,
    grid::{Direction, Grid, GridBuilder},
    letter::{BLANK_MARKERS, Letter, MAX_GRID_SIZE},
    solution::Solution,
    word::Word,
    word_set::WordSet,
};
