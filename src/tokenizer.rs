//! Word/separator segmentation of definition text.
//!
//! A definition is split into maximal runs that are either entirely separator
//! characters or entirely non-separator characters. Concatenating the runs in
//! order gives back the original text.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Separators used when none are configured: space, tab, comma, period.
pub const DEFAULT_SEPARATORS: &str = " \t,.";

/// Set of characters treated as token boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    /// Builds the set from any sequence of characters; repeats collapse.
    pub fn new<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Builds the set from every distinct character of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        Self::new(chars.chars())
    }

    /// True when `ch` is a token boundary.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of distinct separator characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when no character separates tokens.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Separator characters in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

impl Serialize for SeparatorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.iter().collect::<String>())
    }
}

/// Where a scan over a definition stops.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanBound {
    /// Walk the whole text.
    #[default]
    Full,
    /// Stop once the position reaches the start of the final character, so a
    /// final character that would begin a new token is never emitted.
    DropLast,
}

/// Returns the maximal word or separator run of `text` starting at byte
/// offset `position`.
///
/// `None` when `position` is at or past the end of `text` or does not fall on
/// a character boundary.
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Option<&'a str> {
    let rest = text.get(position..)?;
    let first = rest.chars().next()?;
    let in_separators = separators.contains(first);
    let len = rest
        .char_indices()
        .find(|&(_, ch)| separators.contains(ch) != in_separators)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Iterates the tokens of `text` left to right.
pub fn tokenize<'a, 's>(
    text: &'a str,
    separators: &'s SeparatorSet,
    bound: ScanBound,
) -> Tokens<'a, 's> {
    let end = match bound {
        ScanBound::Full => text.len(),
        ScanBound::DropLast => text.char_indices().last().map(|(idx, _)| idx).unwrap_or(0),
    };
    Tokens {
        text,
        separators,
        position: 0,
        end,
    }
}

/// Iterator returned by [`tokenize`]. Tokens borrow from the text only.
pub struct Tokens<'a, 's> {
    text: &'a str,
    separators: &'s SeparatorSet,
    position: usize,
    end: usize,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.end {
            return None;
        }
        let token = next_word_or_separator(self.text, self.position, self.separators)?;
        self.position += token.len();
        Some(token)
    }
}
