//! Complete decompositions of a puzzle into words.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use crate::{ModelError, Word};

/// A non-empty, ordered sequence of [`Word`]s solving a puzzle.
///
/// Solutions compare, hash, and deduplicate by the concatenated text of their
/// words. Two solutions that spell the same words through different cells are
/// therefore equal.
///
/// # Examples
///
/// ```
/// use wordfall_core::{Letter, Solution, Word};
///
/// let on = Word::new(vec![Letter::new(0, 0, 'o')?, Letter::new(0, 1, 'n')?])?;
/// let a = Word::new(vec![Letter::new(1, 0, 'a')?])?;
/// let solution = Solution::new(vec![on, a])?;
///
/// assert_eq!(solution.word_count(), 2);
/// assert_eq!(solution.to_string(), "ON  A");
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    words: Vec<Word>,
}

impl Solution {
    /// Creates a solution from its words, in the order they were removed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySolution`] if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, ModelError> {
        if words.is_empty() {
            return Err(ModelError::EmptySolution);
        }
        Ok(Self { words })
    }

    /// Returns the words in removal order.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the number of words.
    #[must_use]
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the rendered characters of all words, concatenated.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.words.iter().flat_map(Word::chars)
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.chars().eq(other.chars())
    }
}

impl Eq for Solution {}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for ch in self.chars() {
            ch.hash(state);
        }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            Display::fmt(word, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::Letter;

    fn word(row: u8, text: &str) -> Word {
        let letters = (0..)
            .zip(text.chars())
            .map(|(col, ch)| Letter::new(row, col, ch).unwrap())
            .collect();
        Word::new(letters).unwrap()
    }

    #[test]
    fn test_empty_solution_is_rejected() {
        assert!(matches!(
            Solution::new(Vec::new()),
            Err(ModelError::EmptySolution)
        ));
    }

    #[test]
    fn test_equality_ignores_positions() {
        let a = Solution::new(vec![word(0, "cat"), word(1, "dog")]).unwrap();
        let b = Solution::new(vec![word(2, "cat"), word(0, "dog")]).unwrap();
        assert_eq!(a, b);

        let set: BTreeSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_by_concatenated_text() {
        let bee_cat = Solution::new(vec![word(0, "bee"), word(1, "cat")]).unwrap();
        let cat_bee = Solution::new(vec![word(0, "cat"), word(1, "bee")]).unwrap();
        let bee_dog = Solution::new(vec![word(0, "bee"), word(1, "dog")]).unwrap();
        assert!(bee_cat < bee_dog);
        assert!(bee_dog < cat_bee);
    }

    #[test]
    fn test_display_joins_words() {
        let solution = Solution::new(vec![word(0, "molest"), word(1, "nyph")]).unwrap();
        assert_eq!(solution.to_string(), "MOLEST  NYPH");
        assert_eq!(solution.chars().collect::<String>(), "MOLESTNYPH");
        assert_eq!(solution.word_count(), 2);
    }
}
