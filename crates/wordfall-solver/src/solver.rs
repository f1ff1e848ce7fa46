use std::collections::BTreeSet;

use log::{debug, trace};
use rayon::prelude::*;
use wordfall_core::{Dictionary, Grid, Solution, Word, WordSet};

use crate::WordFinder;

/// Searches for every ordered sequence of words that matches a length list.
///
/// Starting from the initial grid, the solver finds all words of the first
/// requested length. For each one it removes the word's cells, lets the
/// letters above fall, and recurses on the resulting grid with the remaining
/// lengths. A branch is complete once every length has been consumed.
///
/// # Examples
///
/// ```
/// use wordfall_core::{Dictionary, Grid};
/// use wordfall_solver::Solver;
///
/// let dictionary: Dictionary = ["xyz", "at"].into_iter().collect();
/// let grid: Grid = "A../XYZ/T..".parse()?;
///
/// // "AT" only becomes traceable after "XYZ" is removed and "A" falls.
/// let report = Solver::new(&dictionary, grid, vec![3, 2]).solve();
/// let texts: Vec<_> = report.solutions().iter().map(ToString::to_string).collect();
/// assert_eq!(texts, ["XYZ  AT"]);
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    finder: WordFinder<'a>,
    grid: Grid,
    lengths: Vec<usize>,
}

/// The outcome of a [`Solver`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolveReport {
    solutions: Vec<Solution>,
    all_words: WordSet,
}

impl SolveReport {
    /// Returns the distinct solutions, sorted by concatenated text.
    #[must_use]
    #[inline]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Returns every word found at any stage of the search, including words
    /// on branches that never completed.
    #[must_use]
    #[inline]
    pub fn all_words(&self) -> &WordSet {
        &self.all_words
    }

    /// Returns `true` if at least one solution was found.
    #[must_use]
    #[inline]
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Splits the report into its solutions and its word inventory.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Solution>, WordSet) {
        (self.solutions, self.all_words)
    }
}

/// Results gathered below one node of the search tree.
///
/// Words are recorded in search preorder, so when two subtrees are merged the
/// left one keeps its word for any shared spelling.
#[derive(Debug, Default)]
struct Outcome {
    solutions: Vec<Solution>,
    words: WordSet,
}

impl Outcome {
    fn leaf(partial: &[Word]) -> Self {
        Self {
            // Empty only when no lengths were requested at all.
            solutions: Solution::new(partial.to_vec()).into_iter().collect(),
            words: WordSet::new(),
        }
    }

    fn observed(candidates: &[Word]) -> Self {
        Self {
            solutions: Vec::new(),
            words: candidates.iter().cloned().collect(),
        }
    }

    fn merge(&mut self, other: Self) {
        self.solutions.extend(other.solutions);
        self.words.merge(other.words);
    }

    fn merged(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }
}

impl<'a> Solver<'a> {
    /// Creates a solver for `grid` and the ordered word `lengths`.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, grid: Grid, lengths: Vec<usize>) -> Self {
        Self {
            finder: WordFinder::new(dictionary),
            grid,
            lengths,
        }
    }

    /// Returns the starting grid.
    #[must_use]
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the requested word lengths, in order.
    #[must_use]
    #[inline]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Runs the search on the current thread.
    #[must_use]
    pub fn solve(&self) -> SolveReport {
        debug!(
            "solving {0}x{0} grid for lengths {1:?}",
            self.grid.size(),
            self.lengths
        );
        let outcome = self.search(&mut Vec::new(), &self.grid, &self.lengths);
        self.finish(outcome)
    }

    /// Runs the search with top-level and nested branches spread over the
    /// rayon thread pool.
    ///
    /// Branch results are merged in candidate order, so the report is
    /// identical to the one produced by [`solve`](Self::solve).
    #[must_use]
    pub fn solve_parallel(&self) -> SolveReport {
        debug!(
            "solving {0}x{0} grid for lengths {1:?} in parallel",
            self.grid.size(),
            self.lengths
        );
        let outcome = self.search_parallel(&[], &self.grid, &self.lengths);
        self.finish(outcome)
    }

    fn search(&self, partial: &mut Vec<Word>, grid: &Grid, lengths: &[usize]) -> Outcome {
        let Some((&len, rest)) = lengths.split_first() else {
            return Outcome::leaf(partial);
        };

        let candidates = self.finder.find_words(grid, len);
        debug!(
            "depth {}: {} candidates of length {len}",
            partial.len(),
            candidates.len()
        );

        let mut outcome = Outcome::observed(&candidates);
        for word in candidates {
            trace!("depth {}: removing {word}", partial.len());
            let next = remove_word(grid, &word);
            partial.push(word);
            outcome.merge(self.search(partial, &next, rest));
            partial.pop();
        }
        outcome
    }

    fn search_parallel(&self, partial: &[Word], grid: &Grid, lengths: &[usize]) -> Outcome {
        let Some((&len, rest)) = lengths.split_first() else {
            return Outcome::leaf(partial);
        };

        let candidates = self.finder.find_words(grid, len);
        debug!(
            "depth {}: {} candidates of length {len}",
            partial.len(),
            candidates.len()
        );

        let observed = Outcome::observed(&candidates);
        let below = candidates
            .par_iter()
            .map(|word| {
                trace!("depth {}: removing {word}", partial.len());
                let next = remove_word(grid, word);
                let mut partial = partial.to_vec();
                partial.push(word.clone());
                self.search_parallel(&partial, &next, rest)
            })
            .reduce(Outcome::default, Outcome::merged);
        observed.merged(below)
    }

    fn finish(&self, outcome: Outcome) -> SolveReport {
        let expected = self.lengths.len();
        // `insert` keeps the stored element on a tie, so the first path
        // found for each text survives.
        let mut solutions = BTreeSet::new();
        for solution in outcome.solutions {
            if solution.word_count() == expected {
                solutions.insert(solution);
            }
        }
        let report = SolveReport {
            solutions: solutions.into_iter().collect(),
            all_words: outcome.words,
        };
        debug!(
            "found {} solutions using {} distinct words",
            report.solutions.len(),
            report.all_words.len()
        );
        report
    }
}

fn remove_word(grid: &Grid, word: &Word) -> Grid {
    grid.to_builder()
        .clear_cells(word.letters().iter().copied().collect())
        .apply_gravity()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        words.iter().collect()
    }

    fn solve(words: &[&str], grid: &str, lengths: &[usize]) -> SolveReport {
        let dictionary = dictionary(words);
        Solver::new(&dictionary, grid.parse().unwrap(), lengths.to_vec()).solve()
    }

    fn texts(report: &SolveReport) -> Vec<String> {
        report
            .solutions()
            .iter()
            .map(|s| s.chars().collect())
            .collect()
    }

    fn word_texts(report: &SolveReport) -> Vec<String> {
        report.all_words().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_every_order_is_a_solution() {
        let report = solve(&["bee", "cat", "dog"], "CAT/BEE/DOG", &[3, 3, 3]);
        assert_eq!(
            texts(&report),
            [
                "BEECATDOG",
                "BEEDOGCAT",
                "CATBEEDOG",
                "CATDOGBEE",
                "DOGBEECAT",
                "DOGCATBEE"
            ]
        );
        for solution in report.solutions() {
            let lengths: Vec<_> = solution.words().iter().map(Word::len).collect();
            assert_eq!(lengths, [3, 3, 3]);
        }
        assert_eq!(word_texts(&report), ["BEE", "CAT", "DOG"]);
    }

    #[test]
    fn test_gravity_connects_letters() {
        let report = solve(&["xyz", "at"], "A../XYZ/T..", &[3, 2]);
        assert_eq!(texts(&report), ["XYZAT"]);
        assert_eq!(report.solutions()[0].to_string(), "XYZ  AT");
        assert_eq!(word_texts(&report), ["AT", "XYZ"]);

        // The fallen "A" sits on row 1.
        let at = &report.solutions()[0].words()[1];
        assert_eq!((at.letters()[0].row(), at.letters()[0].col()), (1, 0));
    }

    #[test]
    fn test_length_order_matters() {
        let report = solve(&["xyz", "at"], "A../XYZ/T..", &[2, 3]);
        assert!(!report.is_solved());
        assert!(report.all_words().is_empty());
    }

    #[test]
    fn test_dead_ends_still_report_words() {
        let report = solve(&["bee", "cat", "dog"], "CAT/BEE/DOG", &[3, 4]);
        assert!(report.solutions().is_empty());
        assert_eq!(word_texts(&report), ["BEE", "CAT", "DOG"]);
    }

    #[test]
    fn test_no_lengths() {
        let report = solve(&["a"], "A", &[]);
        assert_eq!(report, SolveReport::default());
    }

    #[test]
    fn test_zero_length_is_unsolvable() {
        let report = solve(&["a"], "A", &[1, 0]);
        assert!(!report.is_solved());
        assert_eq!(word_texts(&report), ["A"]);
    }

    #[test]
    fn test_duplicate_spellings_are_merged() {
        let report = solve(&["at"], "AA/T.", &[2]);
        assert_eq!(texts(&report), ["AT"]);
        assert_eq!(report.all_words().len(), 1);

        // The first path found is kept: it starts in the top-left corner.
        let kept = report.all_words().iter().next().unwrap();
        assert_eq!(kept.letters()[0].col(), 0);

        // The same holds for the solution itself.
        let solution = &report.solutions()[0];
        assert_eq!(solution.words()[0], *kept);
    }

    #[test]
    fn test_unreachable_length_is_unsolvable() {
        let report = solve(&["at"], "AA/T.", &[usize::MAX]);
        assert_eq!(report, SolveReport::default());

        let report = solve(&["at"], "AA/T.", &[2, usize::MAX]);
        assert!(!report.is_solved());
        assert_eq!(word_texts(&report), ["AT"]);

        let dictionary = dictionary(&["at"]);
        let solver = Solver::new(&dictionary, "AA/T.".parse().unwrap(), vec![usize::MAX]);
        assert_eq!(solver.solve_parallel(), SolveReport::default());
    }

    #[test]
    fn test_distinct_paths_to_the_same_text() {
        // Both "MOLEST" paths leave a grid where "YOUR" can be traced.
        let report = solve(
            &["molest", "your", "hymn", "prom", "rote"],
            "NHYN/PRMO/ROSL/UTEE",
            &[6, 4],
        );
        assert_eq!(texts(&report), ["MOLESTYOUR"]);
        assert_eq!(word_texts(&report), ["MOLEST", "YOUR"]);

        let molest = report.all_words().iter().next().unwrap();
        assert_eq!(molest.letters()[3].col(), 3);
        assert_eq!(report.solutions()[0].words()[0], *molest);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dictionary = dictionary(&[
            "molest", "your", "hymn", "prom", "rote", "ore", "our", "son", "tee", "ten", "eel",
            "sole", "lest", "rot", "hyp", "pro",
        ]);
        let grid: Grid = "NHYN/PRMO/ROSL/UTEE".parse().unwrap();
        for lengths in [vec![6, 4], vec![3, 3, 3], vec![4, 3], vec![3, 4, 3], vec![]] {
            let solver = Solver::new(&dictionary, grid.clone(), lengths);
            assert_eq!(solver.solve(), solver.solve_parallel());
        }
    }

    #[test]
    fn test_into_parts() {
        let report = solve(&["xyz", "at"], "A../XYZ/T..", &[3, 2]);
        let (solutions, words) = report.clone().into_parts();
        assert_eq!(solutions, report.solutions());
        assert_eq!(&words, report.all_words());
    }
}
