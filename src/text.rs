//! Text leaves: word and character counts, overlap detection, flattening.
//!
//! Counting is a fold over every leaf of the tree; blank leaves contribute
//! nothing. Any leaf type that can be viewed as `&str` is accepted, so both
//! `Node<String>` and `Node<&str>` work.

use crate::error::{Error, Result};
use crate::leaf::LeafValue;
use crate::node::Node;
use crate::options::CountOptions;

/// A jagged array of text, e.g. book → chapter → verse.
pub type JaggedTextArray = Node<String>;

impl<T: AsRef<str>> Node<T> {
    /// Total number of whitespace-separated words over all leaves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, JaggedTextArray};
    ///
    /// let text: JaggedTextArray = jagged!([["In the beginning", ""], ["God created"]]);
    /// assert_eq!(text.word_count(), 5);
    /// ```
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count_with_options(&CountOptions::default())
    }

    /// Word count using the boundary configured in `options`.
    #[must_use]
    pub fn word_count_with_options(&self, options: &CountOptions) -> usize {
        self.leaves()
            .map(|text| options.word_boundary.count(text.as_ref()))
            .sum()
    }

    /// Total number of characters over all leaves.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.char_count_with_options(&CountOptions::default())
    }

    /// Character count using the unit configured in `options`.
    #[must_use]
    pub fn char_count_with_options(&self, options: &CountOptions) -> usize {
        self.leaves()
            .map(|text| options.char_unit.measure(text.as_ref()))
            .sum()
    }

    /// Joins every non-empty leaf, depth-first, with `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, JaggedTextArray};
    ///
    /// let text: JaggedTextArray = jagged!([["a", ""], ["b"], [], "c"]);
    /// assert_eq!(text.flatten_to_string(" "), "a b c");
    /// ```
    #[must_use]
    pub fn flatten_to_string(&self, separator: &str) -> String {
        self.leaves()
            .map(AsRef::<str>::as_ref)
            .filter(|text| !text.is_empty())
            .collect::<Vec<&str>>()
            .join(separator)
    }
}

impl<T: LeafValue> Node<T> {
    /// Returns `true` if some coordinate holds a non-blank leaf in both trees.
    ///
    /// Coordinates present in only one tree never overlap, and neither does a
    /// blank leaf facing anything at all. The relation is symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, JaggedTextArray};
    ///
    /// let a: JaggedTextArray = jagged!([["", "b"], ["c", ""]]);
    /// let b: JaggedTextArray = jagged!([["a", ""], ["", "d"]]);
    /// let c: JaggedTextArray = jagged!([["", ""], ["x", ""]]);
    /// assert!(!a.overlaps(&b).unwrap());
    /// assert!(a.overlaps(&c).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when a non-blank leaf in one tree sits
    /// at the coordinate of a branch in the other.
    pub fn overlaps(&self, other: &Node<T>) -> Result<bool> {
        overlaps_at(self, other, 0)
    }
}

fn overlaps_at<T: LeafValue>(a: &Node<T>, b: &Node<T>, level: usize) -> Result<bool> {
    match (a, b) {
        (Node::Leaf(x), Node::Leaf(y)) => Ok(!x.is_blank() && !y.is_blank()),
        (Node::Branch(xs), Node::Branch(ys)) => {
            for (x, y) in xs.iter().zip(ys) {
                if overlaps_at(x, y, level + 1)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        (Node::Leaf(value), Node::Branch(_)) | (Node::Branch(_), Node::Leaf(value))
            if value.is_blank() =>
        {
            Ok(false)
        }
        _ => Err(Error::shape_mismatch(
            level,
            "a leaf with content faces a branch",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jagged;
    use crate::options::{CharUnit, WordBoundary};

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        let text: JaggedTextArray = jagged!(["  two   words ", "", "\tthree\nmore words"]);
        assert_eq!(text.word_count(), 5);
    }

    #[test]
    fn test_char_count_counts_scalars() {
        let text: JaggedTextArray = jagged!(["בראשית", "ab"]);
        assert_eq!(text.char_count(), 8);
        let bytes = CountOptions::new().with_char_unit(CharUnit::Byte);
        assert_eq!(text.char_count_with_options(&bytes), 14);
    }

    #[test]
    fn test_space_boundary_keeps_tabs_inside_words() {
        let text: JaggedTextArray = jagged!([["a\tb c"]]);
        let options = CountOptions::new().with_word_boundary(WordBoundary::Space);
        assert_eq!(text.word_count_with_options(&options), 2);
        assert_eq!(text.word_count(), 3);
    }

    #[test]
    fn test_counts_on_str_leaves() {
        let text: Node<&str> = Node::Branch(vec![Node::Leaf("one two"), Node::Leaf("")]);
        assert_eq!(text.word_count(), 2);
        assert_eq!(text.char_count(), 7);
    }

    #[test]
    fn test_overlaps_ragged_lengths() {
        let a: JaggedTextArray = jagged!([["a"], ["b", "c"]]);
        let b: JaggedTextArray = jagged!([[""], ["", "", "z"]]);
        assert!(!a.overlaps(&b).unwrap());
        assert!(!b.overlaps(&a).unwrap());
    }

    #[test]
    fn test_overlaps_blank_leaf_against_branch() {
        let a: JaggedTextArray = jagged!(["", ["b"]]);
        let b: JaggedTextArray = jagged!([["a"], ["b"]]);
        assert!(a.overlaps(&b).unwrap());
    }

    #[test]
    fn test_overlaps_shape_mismatch() {
        let a: JaggedTextArray = jagged!([["a"], "b"]);
        let b: JaggedTextArray = jagged!([[""], ["b"]]);
        assert!(matches!(
            a.overlaps(&b),
            Err(Error::ShapeMismatch { level: 1, .. })
        ));
    }

    #[test]
    fn test_flatten_bare_leaf() {
        let text: JaggedTextArray = Node::leaf("solo".to_string());
        assert_eq!(text.flatten_to_string(", "), "solo");
    }
}
