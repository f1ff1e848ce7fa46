//! Prefix trie of known words.
//!
//! [`Dictionary`] answers two questions during a search: "is this exact letter
//! sequence a word?" and "can any word start with this sequence?". The second
//! is what lets the path search abandon a branch early.
//!
//! Nodes live in a single arena and index their children through a fixed
//! 26-slot array, one slot per lowercase ASCII letter.
//!
//! # Examples
//!
//! ```
//! use wordfall_core::Dictionary;
//!
//! let dictionary = Dictionary::from_word_list("Cat\n\n  cattle \ndog\n");
//! assert_eq!(dictionary.len(), 3);
//! assert!(dictionary.contains("cat"));
//! assert!(dictionary.contains("cattle"));
//! assert!(!dictionary.contains("catt"));
//! assert!(dictionary.is_prefix("catt"));
//! assert!(!dictionary.is_prefix("cow"));
//! ```

use std::{
    fmt::{self, Debug},
    io::{self, BufRead},
};

use crate::{Letter, Word};

const ALPHABET: usize = 26;

/// Child index meaning "no child". The root is node 0 and is never a child.
const NO_CHILD: u32 = 0;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: [u32; ALPHABET],
    terminal: bool,
}

#[inline]
fn slot(byte: u8) -> Option<usize> {
    let byte = byte.to_ascii_lowercase();
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

/// A set of lowercase words stored as a prefix trie.
///
/// Words are made of the letters `a` to `z`. Lookups accept either case.
#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Builds a dictionary from the contents of a word list.
    ///
    /// Each line is trimmed and lowercased; blank lines are skipped, as are
    /// lines containing anything other than ASCII letters. Input without any
    /// usable line yields an empty dictionary.
    #[must_use]
    pub fn from_word_list(contents: &str) -> Self {
        let mut dictionary = Self::new();
        let mut lines = 0;
        for line in contents.lines() {
            lines += 1;
            dictionary.add_line(line);
        }
        log::debug!("loaded {} words from {lines} lines", dictionary.len());
        dictionary
    }

    /// Builds a dictionary from a word list read line by line.
    ///
    /// Lines are handled as in [`from_word_list`](Self::from_word_list).
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading.
    pub fn from_reader<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut dictionary = Self::new();
        let mut lines = 0;
        for line in reader.lines() {
            lines += 1;
            dictionary.add_line(&line?);
        }
        log::debug!("loaded {} words from {lines} lines", dictionary.len());
        Ok(dictionary)
    }

    fn add_line(&mut self, line: &str) {
        let word = line.trim();
        if !word.is_empty() && !self.insert(word) && !self.contains(word) {
            log::trace!("skipping word list entry {word:?}");
        }
    }

    /// Adds a word, creating intermediate nodes as needed.
    ///
    /// The word is lowercased first. Returns `true` if the word was not
    /// already present. Empty words and words containing characters outside
    /// `a..=z` are ignored and return `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(slots) = word.bytes().map(slot).collect::<Option<Vec<_>>>() else {
            return false;
        };
        if slots.is_empty() {
            return false;
        }

        let mut node = 0;
        for slot in slots {
            let child = self.nodes[node].children[slot];
            node = if child == NO_CHILD {
                let id = self.nodes.len();
                self.nodes.push(TrieNode::default());
                #[expect(clippy::cast_possible_truncation)]
                let child = id as u32;
                self.nodes[node].children[slot] = child;
                id
            } else {
                child as usize
            };
        }

        let terminal = &mut self.nodes[node].terminal;
        if *terminal {
            return false;
        }
        *terminal = true;
        self.len += 1;
        true
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the dictionary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a cursor positioned at the empty prefix.
    #[must_use]
    pub fn cursor(&self) -> TrieCursor<'_> {
        TrieCursor {
            dictionary: self,
            node: 0,
        }
    }

    fn walk<I>(&self, bytes: I) -> Option<TrieCursor<'_>>
    where
        I: IntoIterator<Item = Option<u8>>,
    {
        bytes
            .into_iter()
            .try_fold(self.cursor(), |cursor, byte| cursor.step_byte(byte?))
    }

    /// Returns `true` if `word` is a complete word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word.bytes().map(Some))
            .is_some_and(|cursor| cursor.is_word())
    }

    /// Returns `true` if some word starts with `prefix`.
    ///
    /// Every word is a prefix of itself, and the empty string is a prefix of
    /// everything.
    #[must_use]
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix.bytes().map(Some)).is_some()
    }

    /// Returns `true` if the letters of `word` spell a complete word.
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.walk(word.letters().iter().map(Letter::byte))
            .is_some_and(|cursor| cursor.is_word())
    }

    /// Returns `true` if the letters of `word` begin some word.
    #[must_use]
    pub fn is_word_prefix(&self, word: &Word) -> bool {
        self.walk(word.letters().iter().map(Letter::byte)).is_some()
    }
}

impl<S> Extend<S> for Dictionary
where
    S: AsRef<str>,
{
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S> FromIterator<S> for Dictionary
where
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

/// A position in the trie, reached by stepping one letter at a time.
///
/// Stepping costs O(1), so a search that grows a path letter by letter can
/// carry a cursor along instead of re-walking the whole prefix.
///
/// # Examples
///
/// ```
/// use wordfall_core::{Dictionary, Letter};
///
/// let dictionary: Dictionary = ["at", "ate"].into_iter().collect();
/// let a = dictionary.cursor().step(Letter::new(0, 0, 'a')?).unwrap();
/// assert!(!a.is_word());
///
/// let at = a.step(Letter::new(0, 1, 't')?).unwrap();
/// assert!(at.is_word());
/// assert!(at.step(Letter::new(0, 2, 'x')?).is_none());
/// # Ok::<(), wordfall_core::ModelError>(())
/// ```
#[derive(Clone, Copy)]
pub struct TrieCursor<'a> {
    dictionary: &'a Dictionary,
    node: u32,
}

impl Debug for TrieCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieCursor")
            .field("node", &self.node)
            .field("is_word", &self.is_word())
            .finish()
    }
}

impl<'a> TrieCursor<'a> {
    fn node(&self) -> &'a TrieNode {
        &self.dictionary.nodes[self.node as usize]
    }

    fn step_byte(self, byte: u8) -> Option<Self> {
        let child = self.node().children[slot(byte)?];
        (child != NO_CHILD).then_some(Self {
            dictionary: self.dictionary,
            node: child,
        })
    }

    /// Moves to the child for `letter`.
    ///
    /// Returns `None` if no word continues with that letter, or if `letter`
    /// is blank.
    #[must_use]
    pub fn step(self, letter: Letter) -> Option<Self> {
        self.step_byte(letter.byte()?)
    }

    /// Moves to the child for `ch`.
    ///
    /// Returns `None` if no word continues with that character.
    #[must_use]
    pub fn step_char(self, ch: char) -> Option<Self> {
        self.step_byte(u8::try_from(ch).ok()?)
    }

    /// Returns `true` if the letters stepped so far form a complete word.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.node().terminal
    }
}
