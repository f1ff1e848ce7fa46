use wordfall_core::{CellSet, Dictionary, Grid, Letter, TrieCursor, Word};

/// Enumerates dictionary words that can be traced through a grid.
///
/// A word is traced as a path: it starts on any non-blank cell, and every
/// following letter is a non-blank neighbor (in any of the eight directions)
/// of the previous one. A cell may appear at most once in a path.
///
/// Paths are grown one letter at a time alongside a [`TrieCursor`]; as soon as
/// the letters so far stop being the prefix of any dictionary word, the branch
/// is abandoned.
///
/// # Examples
///
/// ```
/// use wordfall_core::{Dictionary, Grid};
/// use wordfall_solver::WordFinder;
///
/// let dictionary: Dictionary = ["tea", "eat", "ate"].into_iter().collect();
/// let grid: Grid = "TE/.A".parse()?;
///
/// let words = WordFinder::new(&dictionary).find_words(&grid, 3);
/// let texts: Vec<_> = words.iter().map(ToString::to_string).collect();
/// assert_eq!(texts, ["TEA", "EAT", "ATE"]);
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> WordFinder<'a> {
    /// Creates a finder backed by `dictionary`.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Returns every path of exactly `len` letters that spells a word.
    ///
    /// Paths are reported in search order: start cells in row-major order,
    /// and at each step neighbors in [`Grid::adjacent`] order. The same
    /// spelling can appear more than once when it can be traced through
    /// different cells. A `len` of zero, or longer than the number of
    /// letters on the grid, finds nothing.
    #[must_use]
    pub fn find_words(&self, grid: &Grid, len: usize) -> Vec<Word> {
        let mut found = Vec::new();
        if len == 0 || len > grid.letters().count() {
            return found;
        }

        let mut path = Vec::with_capacity(len);
        for start in grid.letters() {
            let Some(cursor) = self.dictionary.cursor().step(start) else {
                continue;
            };
            path.push(start);
            extend(grid, len, &mut path, CellSet::EMPTY.with(start), cursor, &mut found);
            path.pop();
        }
        found
    }
}

fn extend(
    grid: &Grid,
    len: usize,
    path: &mut Vec<Letter>,
    used: CellSet,
    cursor: TrieCursor<'_>,
    found: &mut Vec<Word>,
) {
    if path.len() == len {
        if cursor.is_word() {
            // `path` always holds at least the start letter here.
            found.extend(Word::new(path.clone()).ok());
        }
        return;
    }

    let Some(&last) = path.last() else {
        return;
    };
    for next in grid.adjacent(last) {
        if used.contains(next) {
            continue;
        }
        let Some(cursor) = cursor.step(next) else {
            continue;
        };
        path.push(next);
        extend(grid, len, path, used.with(next), cursor, found);
        path.pop();
    }
}
