//! Configuration options for text counting.
//!
//! This module provides types to customize how [`Node::word_count_with_options`]
//! and [`Node::char_count_with_options`] measure text leaves:
//!
//! - [`CountOptions`]: Main configuration struct
//! - [`WordBoundary`]: What separates two words
//! - [`CharUnit`]: What a single character is
//!
//! ## Examples
//!
//! ```rust
//! use jagged_array::{jagged, CharUnit, CountOptions, Node, WordBoundary};
//!
//! let text: Node<String> = jagged!(["a\tb", "ש"]);
//!
//! let options = CountOptions::new().with_word_boundary(WordBoundary::Space);
//! assert_eq!(text.word_count_with_options(&options), 2);
//!
//! let options = CountOptions::new().with_char_unit(CharUnit::Byte);
//! assert_eq!(text.char_count_with_options(&options), 5);
//! ```
//!
//! [`Node::word_count_with_options`]: crate::Node::word_count_with_options
//! [`Node::char_count_with_options`]: crate::Node::char_count_with_options

/// Word separator used when counting words.
///
/// - **Whitespace**: Default, any Unicode whitespace run separates words
/// - **Space**: Only the ASCII space character separates words, so tabs and
///   newlines stay inside a word
///
/// # Examples
///
/// ```rust
/// use jagged_array::WordBoundary;
///
/// assert_eq!(WordBoundary::Whitespace.count("a\tb  c"), 3);
/// assert_eq!(WordBoundary::Space.count("a\tb  c"), 2);
/// assert_eq!(WordBoundary::Space.count(""), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WordBoundary {
    #[default]
    Whitespace,
    Space,
}

impl WordBoundary {
    /// Counts the words of `text`. Empty text has no words.
    #[must_use]
    pub fn count(self, text: &str) -> usize {
        match self {
            WordBoundary::Whitespace => text.split_whitespace().count(),
            WordBoundary::Space => text.split(' ').filter(|word| !word.is_empty()).count(),
        }
    }
}

/// Unit used when measuring text length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CharUnit {
    /// Unicode scalar values (`char`s).
    #[default]
    Scalar,
    /// UTF-8 bytes.
    Byte,
}

impl CharUnit {
    /// Measures the length of `text`.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            CharUnit::Scalar => text.chars().count(),
            CharUnit::Byte => text.len(),
        }
    }
}

/// Configuration options for counting words and characters.
///
/// # Examples
///
/// ```rust
/// use jagged_array::{CharUnit, CountOptions, WordBoundary};
///
/// // Default: whitespace-separated words, characters as Unicode scalars
/// let options = CountOptions::new();
/// assert_eq!(options.word_boundary, WordBoundary::Whitespace);
///
/// let options = CountOptions::new()
///     .with_word_boundary(WordBoundary::Space)
///     .with_char_unit(CharUnit::Byte);
/// assert_eq!(options.char_unit, CharUnit::Byte);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountOptions {
    pub word_boundary: WordBoundary,
    pub char_unit: CharUnit,
}

impl CountOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the word separator.
    #[must_use]
    pub fn with_word_boundary(mut self, word_boundary: WordBoundary) -> Self {
        self.word_boundary = word_boundary;
        self
    }

    /// Sets the unit of character counts.
    #[must_use]
    pub fn with_char_unit(mut self, char_unit: CharUnit) -> Self {
        self.char_unit = char_unit;
        self
    }
}
