//! Words as ordered sequences of grid letters.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use crate::{Letter, ModelError};

/// A non-empty, immutable sequence of [`Letter`]s.
///
/// A word remembers where each of its letters came from, so two words with the
/// same spelling taken from different cells are distinct values.
///
/// Ordering compares letters pairwise; when one word is a prefix of the other,
/// the shorter word sorts first. [`Word::cmp_text`] provides the alternative
/// ordering by rendered text alone.
///
/// # Examples
///
/// ```
/// use wordfall_core::{Letter, Word};
///
/// let word = Word::new(vec![
///     Letter::new(0, 0, 'c')?,
///     Letter::new(0, 1, 'a')?,
///     Letter::new(1, 1, 't')?,
/// ])?;
/// assert_eq!(word.len(), 3);
/// assert_eq!(word.to_string(), "CAT");
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl TryFrom<Vec<Letter>> for Word {
    type Error = ModelError;

    fn try_from(letters: Vec<Letter>) -> Result<Self, Self::Error> {
        Self::new(letters)
    }
}

#[expect(clippy::len_without_is_empty)]
impl Word {
    /// Creates a word from its letters, in path order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyWord`] if `letters` is empty.
    pub fn new(letters: Vec<Letter>) -> Result<Self, ModelError> {
        if letters.is_empty() {
            return Err(ModelError::EmptyWord);
        }
        Ok(Self { letters })
    }

    /// Returns the letters in path order.
    #[must_use]
    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters. Always at least one.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns the rendered (uppercase) characters of this word.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letters
            .iter()
            .map(|letter| letter.byte().map_or(' ', |b| char::from(b.to_ascii_uppercase())))
    }

    /// Compares two words by their rendered text, ignoring positions.
    #[must_use]
    pub fn cmp_text(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(cells: &[(u8, u8, char)]) -> Word {
        let letters = cells
            .iter()
            .map(|&(row, col, ch)| Letter::new(row, col, ch).unwrap())
            .collect();
        Word::new(letters).unwrap()
    }

    #[test]
    fn test_empty_word_is_rejected() {
        assert_eq!(Word::new(Vec::new()), Err(ModelError::EmptyWord));
        assert_eq!(Word::try_from(Vec::new()), Err(ModelError::EmptyWord));
    }

    #[test]
    fn test_display_is_uppercase() {
        let w = word(&[(0, 0, 'm'), (0, 1, 'O'), (1, 1, 'l')]);
        assert_eq!(w.to_string(), "MOL");
        assert_eq!(w.chars().collect::<String>(), "MOL");
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn test_equality_includes_positions() {
        let a = word(&[(0, 0, 'a'), (0, 1, 't')]);
        let b = word(&[(0, 0, 'a'), (1, 0, 't')]);
        assert_ne!(a, b);
        assert_eq!(a.cmp_text(&b), Ordering::Equal);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_prefix_sorts_first() {
        let short = word(&[(0, 0, 'a'), (0, 1, 't')]);
        let long = word(&[(0, 0, 'a'), (0, 1, 't'), (0, 2, 'e')]);
        assert!(short < long);
        assert_eq!(short.cmp_text(&long), Ordering::Less);
        assert_eq!(long.cmp_text(&short), Ordering::Greater);
    }

    #[test]
    fn test_ordering_diverges_before_prefix_rule() {
        let ab = word(&[(0, 0, 'a'), (0, 1, 'b')]);
        let aab = word(&[(0, 0, 'a'), (1, 0, 'a'), (1, 1, 'b')]);
        // Second letters differ ('b' > 'a'), so length does not matter.
        assert!(aab < ab);
        assert_eq!(aab.cmp_text(&ab), Ordering::Less);
    }

    #[test]
    fn test_text_order_ignores_positions() {
        // Positional order puts the `b` at row 0 first; text order compares spelling.
        let ba = word(&[(0, 0, 'b'), (0, 1, 'a')]);
        let bb = word(&[(2, 2, 'b'), (2, 1, 'b')]);
        assert!(ba < bb);
        assert_eq!(ba.cmp_text(&bb), Ordering::Less);

        let late_ab = word(&[(5, 0, 'a'), (5, 1, 'b')]);
        let early_ab = word(&[(0, 0, 'a'), (0, 1, 'b')]);
        assert!(early_ab < late_ab);
        assert_eq!(early_ab.cmp_text(&late_ab), Ordering::Equal);
    }
}
