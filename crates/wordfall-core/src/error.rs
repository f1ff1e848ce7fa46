//! Validation errors for the puzzle model.

/// Errors raised when constructing or mutating model values.
///
/// These indicate malformed puzzle input or programmer misuse. They are
/// reported immediately by the operation that detected them; a search never
/// produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ModelError {
    /// A row or column lies outside the grid.
    #[display("invalid coordinates ({row}, {col}) for grid of size {size}")]
    InvalidCoordinates {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
        /// Size of the grid (or the maximum grid size for free-standing letters).
        size: u8,
    },
    /// A character is neither an ASCII letter nor a blank marker.
    #[display("invalid character: {ch:?}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
    },
    /// A grid size is zero or larger than [`MAX_GRID_SIZE`](crate::MAX_GRID_SIZE).
    #[display("invalid grid size: {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// A row string does not have exactly one character per column.
    #[display("row {row} has length {len}, expected {expected}")]
    RowLengthMismatch {
        /// Row index.
        row: u8,
        /// Number of characters supplied.
        len: usize,
        /// Grid size.
        expected: u8,
    },
    /// The number of rows supplied does not match the grid size.
    #[display("got {count} rows, expected {expected}")]
    RowCountMismatch {
        /// Number of rows supplied.
        count: usize,
        /// Grid size.
        expected: u8,
    },
    /// A word was built from zero letters.
    #[display("word has no letters")]
    EmptyWord,
    /// A solution was built from zero words.
    #[display("solution has no words")]
    EmptySolution,
}
