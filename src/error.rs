//! Error types for coordinate addressing and shape transforms.
//!
//! Every failure in this crate is a deterministic function of the input tree
//! and the coordinates supplied by the caller; nothing is retried.
//!
//! ## Error Categories
//!
//! - **Shape mismatches**: a path descends through a leaf, paths differ in
//!   length, or two trees disagree about where a leaf sits
//! - **Out-of-range coordinates**: a path component outside `[0, len)`
//! - **Inverted ranges**: a `subarray` whose start lies after its end
//! - **Invalid resizes**: unwrapping a root that is not a single-child branch
//!
//! ## Examples
//!
//! ```rust
//! use jagged_array::{jagged, Error, Node};
//!
//! let text: Node<String> = jagged!([["a", "b"], ["c"]]);
//! let err = text.get(&[1, 4]).unwrap_err();
//! assert!(matches!(err, Error::OutOfRange { level: 1, index: 4, len: 1 }));
//! ```

use thiserror::Error;

/// Represents all possible errors raised by jagged array operations.
///
/// `level` fields count path components from the root, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The coordinates or the other tree do not fit this tree's structure.
    #[error("Shape mismatch at level {level}: {msg}")]
    ShapeMismatch { level: usize, msg: String },

    /// A path component addressed a child that does not exist.
    #[error("Index {index} out of range at level {level} (length {len})")]
    OutOfRange {
        level: usize,
        index: usize,
        len: usize,
    },

    /// A range whose start coordinate comes after its end coordinate.
    #[error("Inverted range at level {level}: start index {start} is after end index {end}")]
    InvertedRange {
        level: usize,
        start: usize,
        end: usize,
    },

    /// The root could not be unwrapped as many times as requested.
    #[error("Cannot reduce depth by {requested}: only {unwrapped} single-child level(s) could be unwrapped")]
    InvalidResize { requested: usize, unwrapped: usize },
}

impl Error {
    /// Creates a shape mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::Error;
    ///
    /// let err = Error::shape_mismatch(2, "path continues past a leaf");
    /// assert!(err.to_string().contains("level 2"));
    /// ```
    pub fn shape_mismatch(level: usize, msg: &str) -> Self {
        Error::ShapeMismatch {
            level,
            msg: msg.to_string(),
        }
    }

    /// Creates an out-of-range error for the offending level.
    pub fn out_of_range(level: usize, index: usize, len: usize) -> Self {
        Error::OutOfRange { level, index, len }
    }

    /// Creates an inverted range error.
    pub fn inverted_range(level: usize, start: usize, end: usize) -> Self {
        Error::InvertedRange { level, start, end }
    }

    /// Creates an invalid resize error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::Error;
    ///
    /// let err = Error::invalid_resize(3, 1);
    /// assert!(err.to_string().contains("reduce depth by 3"));
    /// ```
    pub fn invalid_resize(requested: usize, unwrapped: usize) -> Self {
        Error::InvalidResize {
            requested,
            unwrapped,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range(1, 7, 3);
        assert_eq!(
            err.to_string(),
            "Index 7 out of range at level 1 (length 3)"
        );
    }

    #[test]
    fn test_inverted_range_message() {
        let err = Error::inverted_range(0, 2, 1);
        assert!(err.to_string().contains("start index 2 is after end index 1"));
    }
}
