//! A compact set of grid positions.
//!
//! [`CellSet`] stores one bit per cell of a [`MAX_GRID_SIZE`]×[`MAX_GRID_SIZE`]
//! board, indexed in row-major order. It is `Copy`, so path searches can mark
//! cells as consumed on the way down and get the previous state back for free
//! on the way up.
//!
//! # Examples
//!
//! ```
//! use wordfall_core::{CellSet, Letter};
//!
//! let a = Letter::new(0, 0, 'a')?;
//! let b = Letter::new(3, 4, 'b')?;
//!
//! let mut used = CellSet::EMPTY;
//! used.insert(a);
//! assert!(used.contains(a));
//! assert!(!used.contains(b));
//!
//! let more = used.with(b);
//! assert_eq!(more.len(), 2);
//! assert_eq!(used.len(), 1);
//! # Ok::<(), wordfall_core::ModelError>(())
//! ```

use crate::{Letter, MAX_GRID_SIZE};

/// A set of cell positions, keyed by a letter's `(row, col)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    #[inline]
    fn bit(letter: Letter) -> u128 {
        let index = u32::from(letter.row()) * u32::from(MAX_GRID_SIZE) + u32::from(letter.col());
        1 << index
    }

    /// Adds the position of `letter`.
    #[inline]
    pub fn insert(&mut self, letter: Letter) {
        self.bits |= Self::bit(letter);
    }

    /// Removes the position of `letter`.
    #[inline]
    pub fn remove(&mut self, letter: Letter) {
        self.bits &= !Self::bit(letter);
    }

    /// Returns a copy of this set with the position of `letter` added.
    #[must_use]
    #[inline]
    pub fn with(self, letter: Letter) -> Self {
        Self {
            bits: self.bits | Self::bit(letter),
        }
    }

    /// Returns `true` if the position of `letter` is in the set.
    #[must_use]
    #[inline]
    pub fn contains(&self, letter: Letter) -> bool {
        self.bits & Self::bit(letter) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<Letter> for CellSet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
