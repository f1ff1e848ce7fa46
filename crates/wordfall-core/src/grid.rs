//! Square letter grids with adjacency and gravity.
//!
//! A [`Grid`] is an immutable N×N snapshot. Every change (setting letters,
//! clearing cells, letting letters fall) goes through a [`GridBuilder`] seeded
//! from an existing snapshot, and [`GridBuilder::build`] produces a new one.
//! Snapshots handed to a search branch can therefore never be disturbed by
//! another branch.
//!
//! # Examples
//!
//! ```
//! use wordfall_core::{Grid, Word};
//!
//! let grid: Grid = "NHYN/PRMO/ROSL/UTEE".parse()?;
//! let m = grid.get(1, 2)?;
//! let o = grid.get(1, 3)?;
//!
//! let next = grid
//!     .to_builder()
//!     .clear_word(&Word::new(vec![m, o])?)?
//!     .apply_gravity()
//!     .build();
//!
//! assert!(next.get(0, 2)?.is_blank());
//! assert_eq!(next.get(1, 2)?.char(), Some('y'));
//! # Ok::<(), wordfall_core::ModelError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::{CellSet, Letter, MAX_GRID_SIZE, ModelError, Word, letter::parse_cell};

const STRIDE: usize = MAX_GRID_SIZE as usize;
const CELLS: usize = STRIDE * STRIDE;

#[inline]
fn index(row: u8, col: u8) -> usize {
    usize::from(row) * STRIDE + usize::from(col)
}

/// Storage for all cells, pre-filled with blanks at their own coordinates.
fn blank_cells() -> [Letter; CELLS] {
    let mut cells = [Letter::default(); CELLS];
    for row in 0..MAX_GRID_SIZE {
        for col in 0..MAX_GRID_SIZE {
            cells[index(row, col)] = Letter::from_parts(row, col, None);
        }
    }
    cells
}

/// One of the eight king-move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same row, one column left.
    West,
    /// One row up, one column left.
    NorthWest,
    /// One row up.
    North,
    /// One row up, one column right.
    NorthEast,
    /// Same row, one column right.
    East,
    /// One row down, one column right.
    SouthEast,
    /// One row down.
    South,
    /// One row down, one column left.
    SouthWest,
}

impl Direction {
    /// All directions in adjacency order.
    ///
    /// [`Grid::adjacent`] reports neighbors in exactly this order.
    pub const ALL: [Self; 8] = [
        Self::West,
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
    ];

    /// Returns the `(row, col)` step for this direction.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
        }
    }
}

/// An immutable N×N board of letters and blanks.
///
/// Each in-bounds cell holds a [`Letter`] whose coordinates are the cell's
/// own, either carrying a character or blank.
///
/// The [`Display`] implementation draws a bordered table:
///
/// ```
/// use wordfall_core::Grid;
///
/// let grid: Grid = "AB/.C".parse()?;
/// assert_eq!(
///     grid.to_string(),
///     "+---+---+\n| A | B |\n+---+---+\n|   | C |\n+---+---+\n"
/// );
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: u8,
    cells: [Letter; CELLS],
}

impl Grid {
    /// Creates an all-blank grid.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidSize`] unless `1 <= size <= MAX_GRID_SIZE`.
    pub fn empty(size: usize) -> Result<Self, ModelError> {
        Ok(GridBuilder::new(size)?.build())
    }

    /// Creates a grid from row strings; the number of rows sets the size.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidSize`] for zero or too many rows,
    /// [`ModelError::RowLengthMismatch`] if a row is not exactly as long as
    /// there are rows, and [`ModelError::InvalidCharacter`] for characters
    /// that are neither letters nor blank markers.
    pub fn from_rows<S>(rows: &[S]) -> Result<Self, ModelError>
    where
        S: AsRef<str>,
    {
        Ok(GridBuilder::new(rows.len())?.set_rows(rows)?.build())
    }

    /// Returns the grid dimension N.
    #[must_use]
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if the position is outside
    /// the grid.
    pub fn get(&self, row: u8, col: u8) -> Result<Letter, ModelError> {
        check_bounds(self.size, row, col)?;
        Ok(self.cells[index(row, col)])
    }

    /// Returns the cell one step from `letter`'s position in `direction`.
    ///
    /// Returns `None` when the step leaves the board. The returned cell may be
    /// blank.
    #[must_use]
    pub fn neighbor(&self, letter: Letter, direction: Direction) -> Option<Letter> {
        let (dr, dc) = direction.offset();
        let row = letter.row().checked_add_signed(dr)?;
        let col = letter.col().checked_add_signed(dc)?;
        (row < self.size && col < self.size).then(|| self.cells[index(row, col)])
    }

    /// Returns the cell west of `letter`, if on the board.
    #[must_use]
    pub fn west(&self, letter: Letter) -> Option<Letter> {
        self.neighbor(letter, Direction::West)
    }

    /// Returns the cell north-west of `letter`, if on the board.
    #[must_use]
    pub fn north_west(&self, letter: Letter) -> Option<Letter> {
        self.neighbor(letter, Direction::NorthWest)
    }

    /// Returns the cell north of `letter`, if on the board.
    #[must_use]
    pub fn north(&self, letter: Letter) -> Option<Letter> {
        self.neighbor(letter, Direction::North)
    }

    /// Returns the cell north-east of `letter`, if on the board.
    #[must_use]
    pub fn north_east(&self, letter: Letter) -> Option<Letter> {
        self.neighbor(letter, Direction::NorthEast)
    }

    /// Returns the cell east of `letter`, if on the board.
    #[must_use]
    pub fn east(&self, letter: Letter) -> Option<Letter> {
        self.neighbor(letter, Direction::East)
    }

    /// Returns the cell south-east of `letter`, if on the board.
    #[must_use]
    pub fn south_east(&self, letter: Letter) -> Option<Letter> {
        self.neighbor(letter, Direction::SouthEast)
    }

    /// Returns the cell south of `letter`, if on the board.
    #[must_use]
    pub fn south(&self, letter: Letter) -> Option<Letter> {
        self.neighbor(letter, Direction::South)
    }

    /// Returns the cell south-west of `letter`, if on the board.
    #[must_use]
    pub fn south_west(&self, letter: Letter) -> Option<Letter> {
        self.neighbor(letter, Direction::SouthWest)
    }

    /// Returns the non-blank neighbors of `letter`'s cell.
    ///
    /// Neighbors are listed in [`Direction::ALL`] order: west, north-west,
    /// north, north-east, east, south-east, south, south-west.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfall_core::Grid;
    ///
    /// let grid: Grid = "ABC/D.F/GHI".parse()?;
    /// let adjacent = grid.adjacent(grid.get(0, 0)?);
    /// let text: String = adjacent.iter().map(ToString::to_string).collect();
    /// assert_eq!(text, "BD");
    /// # Ok::<(), wordfall_core::ModelError>(())
    /// ```
    #[must_use]
    pub fn adjacent(&self, letter: Letter) -> ArrayVec<[Letter; 8]> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(letter, direction))
            .filter(|neighbor| !neighbor.is_blank())
            .collect()
    }

    /// Iterates over the non-blank cells in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        (0..self.size)
            .flat_map(move |row| (0..self.size).map(move |col| self.cells[index(row, col)]))
            .filter(|letter| !letter.is_blank())
    }

    /// Iterates over the cells of one row, blanks included.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if `row` is outside the grid.
    pub fn row(&self, row: u8) -> Result<impl Iterator<Item = Letter> + '_, ModelError> {
        check_bounds(self.size, row, 0)?;
        Ok((0..self.size).map(move |col| self.cells[index(row, col)]))
    }

    /// Returns a builder seeded with this grid's cells.
    #[must_use]
    pub fn to_builder(&self) -> GridBuilder {
        GridBuilder::from(self)
    }

    fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("+")?;
        for _ in 0..self.size {
            f.write_str("---+")?;
        }
        f.write_str("\n")
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_separator(f)?;
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "| {} ", self.cells[index(row, col)])?;
            }
            f.write_str("|\n")?;
            self.write_separator(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ModelError;

    /// Parses rows separated by `/` or newlines.
    ///
    /// Empty lines are skipped. Leading and trailing spaces are kept, since a
    /// space is a blank cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(|row| row.strip_suffix('\r').unwrap_or(row))
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

fn check_bounds(size: u8, row: u8, col: u8) -> Result<(), ModelError> {
    if row >= size || col >= size {
        return Err(ModelError::InvalidCoordinates { row, col, size });
    }
    Ok(())
}

/// A mutable working copy used to derive new [`Grid`] snapshots.
///
/// All mutators return `&mut Self` so calls can be chained; fallible ones wrap
/// it in a `Result` and leave the builder unchanged on error.
///
/// # Examples
///
/// ```
/// use wordfall_core::GridBuilder;
///
/// let grid = GridBuilder::new(3)?
///     .set(0, 0, 'a')?
///     .apply_gravity()
///     .build();
///
/// assert!(grid.get(0, 0)?.is_blank());
/// assert_eq!(grid.get(2, 0)?.char(), Some('a'));
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder {
    size: u8,
    cells: [Letter; CELLS],
}

impl From<&Grid> for GridBuilder {
    fn from(grid: &Grid) -> Self {
        Self {
            size: grid.size,
            cells: grid.cells,
        }
    }
}

impl GridBuilder {
    /// Creates a builder for an all-blank grid of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidSize`] unless `1 <= size <= MAX_GRID_SIZE`.
    pub fn new(size: usize) -> Result<Self, ModelError> {
        let size = u8::try_from(size)
            .ok()
            .filter(|size| (1..=MAX_GRID_SIZE).contains(size))
            .ok_or(ModelError::InvalidSize { size })?;
        Ok(Self {
            size,
            cells: blank_cells(),
        })
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the working copy's cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if the position is outside
    /// the grid.
    pub fn get(&self, row: u8, col: u8) -> Result<Letter, ModelError> {
        check_bounds(self.size, row, col)?;
        Ok(self.cells[index(row, col)])
    }

    /// Sets the cell at `(row, col)` from an input character.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if the position is outside
    /// the grid and [`ModelError::InvalidCharacter`] for a character that is
    /// neither a letter nor a blank marker.
    pub fn set(&mut self, row: u8, col: u8, ch: char) -> Result<&mut Self, ModelError> {
        check_bounds(self.size, row, col)?;
        self.cells[index(row, col)] = Letter::from_parts(row, col, parse_cell(ch)?);
        Ok(self)
    }

    /// Sets every cell of one row from a string of exactly N characters.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if `row` is outside the grid,
    /// [`ModelError::RowLengthMismatch`] if `line` does not have N characters,
    /// and [`ModelError::InvalidCharacter`] for an unsupported character.
    pub fn set_row(&mut self, row: u8, line: &str) -> Result<&mut Self, ModelError> {
        check_bounds(self.size, row, 0)?;
        let len = line.chars().count();
        if len != usize::from(self.size) {
            return Err(ModelError::RowLengthMismatch {
                row,
                len,
                expected: self.size,
            });
        }

        let mut parsed = [None; STRIDE];
        for (slot, ch) in parsed.iter_mut().zip(line.chars()) {
            *slot = parse_cell(ch)?;
        }
        for (col, ch) in (0..self.size).zip(parsed) {
            self.cells[index(row, col)] = Letter::from_parts(row, col, ch);
        }
        Ok(self)
    }

    /// Sets all rows at once. Exactly N rows of N characters are required.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RowCountMismatch`] if the number of rows is not N,
    /// and any error [`set_row`](Self::set_row) reports.
    pub fn set_rows<S>(&mut self, rows: &[S]) -> Result<&mut Self, ModelError>
    where
        S: AsRef<str>,
    {
        if rows.len() != usize::from(self.size) {
            return Err(ModelError::RowCountMismatch {
                count: rows.len(),
                expected: self.size,
            });
        }

        let mut next = self.clone();
        for (row, line) in (0..self.size).zip(rows) {
            next.set_row(row, line.as_ref())?;
        }
        *self = next;
        Ok(self)
    }

    /// Blanks the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if the position is outside
    /// the grid.
    pub fn clear(&mut self, row: u8, col: u8) -> Result<&mut Self, ModelError> {
        check_bounds(self.size, row, col)?;
        self.cells[index(row, col)] = Letter::from_parts(row, col, None);
        Ok(self)
    }

    /// Blanks the cell that `letter` came from.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if the letter's position is
    /// outside the grid.
    pub fn clear_letter(&mut self, letter: Letter) -> Result<&mut Self, ModelError> {
        self.clear(letter.row(), letter.col())
    }

    /// Blanks every cell that `word`'s letters came from.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if any letter's position is
    /// outside the grid; no cell is cleared in that case.
    pub fn clear_word(&mut self, word: &Word) -> Result<&mut Self, ModelError> {
        for letter in word.letters() {
            check_bounds(self.size, letter.row(), letter.col())?;
        }
        Ok(self.clear_cells(word.letters().iter().copied().collect()))
    }

    /// Blanks every in-bounds cell in `cells`.
    ///
    /// Positions outside the grid are already blank and are left alone.
    pub fn clear_cells(&mut self, cells: CellSet) -> &mut Self {
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = &mut self.cells[index(row, col)];
                if cells.contains(*cell) {
                    *cell = Letter::from_parts(row, col, None);
                }
            }
        }
        self
    }

    /// Lets letters fall straight down into blank cells below them.
    ///
    /// Each pass scans rows from the second-to-last up to the top and moves a
    /// letter down one row whenever the cell beneath it is blank. N passes
    /// settle any column completely. Letters never change column and keep
    /// their vertical order; blanks end up at the top.
    pub fn apply_gravity(&mut self) -> &mut Self {
        let size = self.size;
        for _ in 0..size {
            for row in (0..size - 1).rev() {
                for col in 0..size {
                    let above = self.cells[index(row, col)];
                    let below = self.cells[index(row + 1, col)];
                    if !above.is_blank() && below.is_blank() {
                        self.cells[index(row + 1, col)] =
                            Letter::from_parts(row + 1, col, above.byte());
                        self.cells[index(row, col)] = Letter::from_parts(row, col, None);
                    }
                }
            }
        }
        self
    }

    /// Produces an immutable snapshot of the working copy.
    #[must_use]
    pub fn build(&self) -> Grid {
        Grid {
            size: self.size,
            cells: self.cells,
        }
    }
}
