//! Integer leaves: presence masks and per-coordinate counts.
//!
//! [`Node::mask`] produces a [`JaggedIntArray`]. The same type is used on its
//! own to keep counts per coordinate, e.g. how many versions of a text have
//! content at each verse; [`Node::add_elementwise`] accumulates such counts.

use crate::error::{Error, Result};
use crate::node::Node;

/// A jagged array of integers.
pub type JaggedIntArray = Node<i64>;

impl Node<i64> {
    /// Adds two count arrays coordinate by coordinate.
    ///
    /// Branches of different lengths are combined up to the shorter one; the
    /// remaining children of the longer branch are copied unchanged. Sums
    /// saturate at the bounds of `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, JaggedIntArray};
    ///
    /// let a: JaggedIntArray = jagged!([[1, 0], [1]]);
    /// let b: JaggedIntArray = jagged!([[1, 1, 1], [0], [1]]);
    /// let total: JaggedIntArray = jagged!([[2, 1, 1], [1], [1]]);
    /// assert_eq!(a.add_elementwise(&b).unwrap(), total);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when a leaf in one array sits at the
    /// coordinate of a branch in the other.
    pub fn add_elementwise(&self, other: &JaggedIntArray) -> Result<JaggedIntArray> {
        add_at(self, other, 0)
    }

    /// Sum of every leaf value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, JaggedIntArray};
    ///
    /// let counts: JaggedIntArray = jagged!([[2, 1], [], [3]]);
    /// assert_eq!(counts.total(), 6);
    /// ```
    #[must_use]
    pub fn total(&self) -> i64 {
        self.leaves().sum()
    }
}

fn add_at(a: &JaggedIntArray, b: &JaggedIntArray, level: usize) -> Result<JaggedIntArray> {
    match (a, b) {
        (Node::Leaf(x), Node::Leaf(y)) => Ok(Node::Leaf(x.saturating_add(*y))),
        (Node::Branch(xs), Node::Branch(ys)) => {
            let mut sums = Vec::with_capacity(xs.len().max(ys.len()));
            for (x, y) in xs.iter().zip(ys) {
                sums.push(add_at(x, y, level + 1)?);
            }
            let longer = if xs.len() > ys.len() { xs } else { ys };
            sums.extend(longer[sums.len()..].iter().cloned());
            Ok(Node::Branch(sums))
        }
        _ => Err(Error::shape_mismatch(
            level,
            "cannot add a leaf to a branch",
        )),
    }
}
