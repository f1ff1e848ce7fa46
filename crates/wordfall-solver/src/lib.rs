//! Backtracking search for falling-letter word puzzles.
//!
//! Given a [`Dictionary`](wordfall_core::Dictionary), a starting
//! [`Grid`](wordfall_core::Grid) and an ordered list of word lengths, this
//! crate finds every way to remove one word of each length in turn, letting
//! letters fall after each removal.
//!
//! - [`WordFinder`] traces dictionary words of a fixed length through a grid.
//! - [`Solver`] drives the search over successive grids and collects a
//!   [`SolveReport`].
//!
//! # Examples
//!
//! ```
//! use wordfall_core::{Dictionary, Grid};
//! use wordfall_solver::Solver;
//!
//! let dictionary: Dictionary = ["bee", "cat", "dog"].into_iter().collect();
//! let grid: Grid = "CAT/BEE/DOG".parse()?;
//!
//! let report = Solver::new(&dictionary, grid, vec![3, 3, 3]).solve();
//! assert_eq!(report.solutions().len(), 6);
//! assert_eq!(report.solutions()[0].to_string(), "BEE  CAT  DOG");
//! assert_eq!(report.all_words().len(), 3);
//! # Ok::<(), wordfall_core::ModelError>(())
//! ```

mod solver;
mod word_finder;

pub use self::{
    solver::{SolveReport, Solver},
    word_finder::WordFinder,
};
