//! Position-tagged grid characters.

use std::fmt::{self, Display};

use crate::ModelError;

/// Largest supported grid dimension.
///
/// Letter coordinates are bounded by this value regardless of the grid they
/// belong to.
pub const MAX_GRID_SIZE: u8 = 9;

/// Characters accepted on input as an empty cell.
pub const BLANK_MARKERS: [char; 3] = [' ', '.', '_'];

/// A single grid cell: its position and either a letter or a blank.
///
/// Letters are immutable. The character is stored in lowercase and rendered in
/// uppercase. Ordering compares the character first (a blank sorts before any
/// letter), then the row, then the column.
///
/// # Examples
///
/// ```
/// use wordfall_core::Letter;
///
/// let letter = Letter::new(1, 2, 'Q')?;
/// assert_eq!(letter.char(), Some('q'));
/// assert_eq!((letter.row(), letter.col()), (1, 2));
/// assert_eq!(letter.to_string(), "Q");
///
/// let blank = Letter::new(0, 0, '.')?;
/// assert!(blank.is_blank());
/// assert!(blank < letter);
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter {
    // Field order drives the derived ordering.
    ch: Option<u8>,
    row: u8,
    col: u8,
}

impl Letter {
    /// Creates a letter at `(row, col)` from an input character.
    ///
    /// ASCII letters are normalized to lowercase; any of [`BLANK_MARKERS`]
    /// produces a blank.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if either coordinate is not
    /// below [`MAX_GRID_SIZE`], and [`ModelError::InvalidCharacter`] for any
    /// other character.
    pub fn new(row: u8, col: u8, ch: char) -> Result<Self, ModelError> {
        check_position(row, col)?;
        Ok(Self {
            ch: parse_cell(ch)?,
            row,
            col,
        })
    }

    /// Creates a blank cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCoordinates`] if either coordinate is not
    /// below [`MAX_GRID_SIZE`].
    pub fn blank(row: u8, col: u8) -> Result<Self, ModelError> {
        check_position(row, col)?;
        Ok(Self::from_parts(row, col, None))
    }

    pub(crate) const fn from_parts(row: u8, col: u8, ch: Option<u8>) -> Self {
        Self { ch, row, col }
    }

    /// Returns the row this letter was taken from.
    #[must_use]
    #[inline]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column this letter was taken from.
    #[must_use]
    #[inline]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Returns the lowercase character, or `None` for a blank.
    #[must_use]
    #[inline]
    pub fn char(&self) -> Option<char> {
        self.ch.map(char::from)
    }

    /// Returns the lowercase ASCII byte, or `None` for a blank.
    #[must_use]
    #[inline]
    pub const fn byte(&self) -> Option<u8> {
        self.ch
    }

    /// Returns `true` if this cell holds no letter.
    #[must_use]
    #[inline]
    pub const fn is_blank(&self) -> bool {
        self.ch.is_none()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = self.ch.map_or(' ', |b| char::from(b.to_ascii_uppercase()));
        write!(f, "{ch}")
    }
}

/// Validates an input character, returning the stored lowercase byte.
pub(crate) fn parse_cell(ch: char) -> Result<Option<u8>, ModelError> {
    match u8::try_from(ch) {
        Ok(byte) if byte.is_ascii_alphabetic() => Ok(Some(byte.to_ascii_lowercase())),
        _ if BLANK_MARKERS.contains(&ch) => Ok(None),
        _ => Err(ModelError::InvalidCharacter { ch }),
    }
}

fn check_position(row: u8, col: u8) -> Result<(), ModelError> {
    if row >= MAX_GRID_SIZE || col >= MAX_GRID_SIZE {
        return Err(ModelError::InvalidCoordinates {
            row,
            col,
            size: MAX_GRID_SIZE,
        });
    }
    Ok(())
}
