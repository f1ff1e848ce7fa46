//! Words deduplicated and ordered by their rendered text.

use std::collections::{BTreeMap, btree_map};

use crate::Word;

/// A collection of [`Word`]s keyed by rendered text.
///
/// At most one word is kept per spelling: the first one inserted wins, and
/// later words with the same text are ignored even if they came from other
/// cells. Iteration yields words in plain lexicographic order of their text.
///
/// # Examples
///
/// ```
/// use wordfall_core::{Letter, Word, WordSet};
///
/// let first = Word::new(vec![Letter::new(0, 0, 'a')?, Letter::new(0, 1, 't')?])?;
/// let second = Word::new(vec![Letter::new(1, 1, 'a')?, Letter::new(0, 1, 't')?])?;
///
/// let mut words = WordSet::new();
/// assert!(words.insert(first.clone()));
/// assert!(!words.insert(second));
/// assert_eq!(words.len(), 1);
/// assert_eq!(words.iter().next(), Some(&first));
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeMap<String, Word>,
}

impl WordSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word unless its spelling is already present.
    ///
    /// Returns `true` if the word was added.
    pub fn insert(&mut self, word: Word) -> bool {
        match self.words.entry(word.to_string()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(word);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Moves every word of `other` into `self`.
    ///
    /// Spellings already present in `self` keep their existing word.
    pub fn merge(&mut self, other: WordSet) {
        for (text, word) in other.words {
            self.words.entry(text).or_insert(word);
        }
    }

    /// Returns `true` if a word with the given spelling is present.
    ///
    /// The comparison is case-insensitive.
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.words.contains_key(&text.to_ascii_uppercase())
    }

    /// Returns the number of distinct spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in text order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Word> + ExactSizeIterator {
        self.words.values()
    }
}

impl Extend<Word> for WordSet {
    fn extend<T: IntoIterator<Item = Word>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for WordSet {
    type Item = Word;
    type IntoIter = btree_map::IntoValues<String, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_values()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = btree_map::Values<'a, String, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.values()
    }
}

#[cfg(test)]
mod tests {
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
    fn test_iterates_in_text_order() {
        let words: WordSet = [word(0, "dog"), word(1, "ant"), word(2, "cat"), word(3, "an")]
            .into_iter()
            .collect();
        let texts: Vec<_> = words.iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["AN", "ANT", "CAT", "DOG"]);
    }

    #[test]
    fn test_first_insert_wins() {
        let mut words = WordSet::new();
        assert!(words.insert(word(0, "cat")));
        assert!(!words.insert(word(4, "cat")));
        assert_eq!(words.iter().next().unwrap().letters()[0].row(), 0);
        assert!(words.contains_text("cat"));
        assert!(words.contains_text("CAT"));
        assert!(!words.contains_text("ca"));
    }

    #[test]
    fn test_merge_keeps_existing_entries() {
        let mut left: WordSet = [word(0, "cat")].into_iter().collect();
        let right: WordSet = [word(5, "cat"), word(5, "dog")].into_iter().collect();
        left.merge(right);

        assert_eq!(left.len(), 2);
        let rows: Vec<_> = left.iter().map(|w| w.letters()[0].row()).collect();
        assert_eq!(rows, [0, 5]);
    }

    #[test]
    fn test_into_iter() {
        let words: WordSet = [word(0, "b"), word(0, "a")].into_iter().collect();
        assert!(!words.is_empty());
        let texts: Vec<_> = (&words).into_iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["A", "B"]);
        let owned: Vec<_> = words.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
