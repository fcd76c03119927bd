//! Shape engine: traversal, predicates, addressing and shape transforms.
//!
//! Everything here works for any leaf type. Operations that need to know
//! whether a leaf is empty require [`LeafValue`]; operations that build new
//! trees require `Clone` and copy the retained subtrees.
//!
//! ## Coordinates
//!
//! A coordinate path is a slice of zero-based indices, one per level,
//! descending from the root. Coordinates order lexicographically, so a shorter
//! path sorts before its own descendants.
//!
//! ```rust
//! use jagged_array::{jagged, Node};
//!
//! let book: Node<String> = jagged!([
//!     ["1:1", "1:2", "1:3"],
//!     ["2:1", "2:2", "2:3"],
//! ]);
//!
//! assert_eq!(book.get(&[1, 2]).unwrap(), &Node::from("2:3"));
//! assert_eq!(book.sections(), vec![vec![0], vec![1]]);
//!
//! let range = book.subarray(&[0, 2], &[1, 0]).unwrap();
//! assert_eq!(range, jagged!([["1:3"], ["2:1"]]));
//! ```

use crate::error::{Error, Result};
use crate::int::JaggedIntArray;
use crate::leaf::LeafValue;
use crate::node::Node;

impl<T> Node<T> {
    /// Number of leaves reachable from this node, empty leaves included.
    ///
    /// A bare leaf counts as one verse.
    #[must_use]
    pub fn verse_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(children) => children.iter().map(Node::verse_count).sum(),
        }
    }

    /// Coordinate paths of every section, depth-first and left to right.
    ///
    /// A section is a branch whose direct children are all leaves. When the
    /// root itself is a section (depth 1), one single-index path is produced
    /// per root child. A bare leaf has no sections.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// let flat: Node<String> = jagged!(["a", "b", "c"]);
    /// assert_eq!(flat.sections(), vec![vec![0], vec![1], vec![2]]);
    ///
    /// let nested: Node<String> = jagged!([[["a"], ["b"]], [["c"]]]);
    /// assert_eq!(nested.sections(), vec![vec![0, 0], vec![0, 1], vec![1, 0]]);
    /// ```
    #[must_use]
    pub fn sections(&self) -> Vec<Vec<usize>> {
        let mut sections = Vec::new();
        if let Node::Branch(children) = self {
            if children.iter().all(Node::is_leaf) {
                sections.extend((0..children.len()).map(|index| vec![index]));
            } else {
                collect_sections(children, &mut Vec::new(), &mut sections);
            }
        }
        sections
    }

    /// Coordinate path of every leaf, depth-first.
    ///
    /// A bare leaf yields a single empty path.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        self.collect_leaf_paths(&mut Vec::new(), &mut paths);
        paths
    }

    fn collect_leaf_paths(&self, path: &mut Vec<usize>, paths: &mut Vec<Vec<usize>>) {
        match self {
            Node::Leaf(_) => paths.push(path.clone()),
            Node::Branch(children) => {
                for (index, child) in children.iter().enumerate() {
                    path.push(index);
                    child.collect_leaf_paths(path, paths);
                    path.pop();
                }
            }
        }
    }

    /// Returns the node addressed by `path`. The empty path addresses the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an index past the end of its branch and
    /// [`Error::ShapeMismatch`] if the path continues below a leaf.
    pub fn get(&self, path: &[usize]) -> Result<&Node<T>> {
        path.iter()
            .enumerate()
            .try_fold(self, |node, (level, &index)| node.child_at(index, level))
    }

    /// Number of children of the branch at `path`, or `None` if it is a leaf.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// let text: Node<String> = jagged!([["a", "b"], ["c"]]);
    /// assert_eq!(text.sub_array_length(&[]).unwrap(), Some(2));
    /// assert_eq!(text.sub_array_length(&[0]).unwrap(), Some(2));
    /// assert_eq!(text.sub_array_length(&[1, 0]).unwrap(), None);
    /// ```
    ///
    /// # Errors
    ///
    /// Same addressing errors as [`Node::get`].
    pub fn sub_array_length(&self, path: &[usize]) -> Result<Option<usize>> {
        Ok(self.get(path)?.children().map(<[Node<T>]>::len))
    }

    fn child_at(&self, index: usize, level: usize) -> Result<&Node<T>> {
        let children = self.branch_children(level)?;
        children
            .get(index)
            .ok_or_else(|| Error::out_of_range(level, index, children.len()))
    }

    fn branch_children(&self, level: usize) -> Result<&[Node<T>]> {
        self.children()
            .ok_or_else(|| Error::shape_mismatch(level, "path continues past a leaf"))
    }
}

fn collect_sections<T>(
    children: &[Node<T>],
    path: &mut Vec<usize>,
    sections: &mut Vec<Vec<usize>>,
) {
    for (index, child) in children.iter().enumerate() {
        if let Node::Branch(grandchildren) = child {
            path.push(index);
            if grandchildren.iter().all(Node::is_leaf) {
                sections.push(path.clone());
            } else {
                collect_sections(grandchildren, path, sections);
            }
            path.pop();
        }
    }
}

impl<T: Clone> Node<T> {
    /// Changes the nesting depth by `amount`.
    ///
    /// A positive amount wraps the root in that many single-child branches. A
    /// negative amount unwraps that many single-child branches from the root.
    /// `resize(k)` followed by `resize(-k)` always gives back the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// let text: Node<String> = jagged!(["a", "b"]);
    /// let wrapped = text.resize(2).unwrap();
    /// assert_eq!(wrapped, jagged!([[["a", "b"]]]));
    /// assert_eq!(wrapped.resize(-2).unwrap(), text);
    /// assert!(text.resize(-1).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResize`] when an unwrap meets a leaf or a branch
    /// that does not have exactly one child.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resize(&self, amount: isize) -> Result<Node<T>> {
        if amount >= 0 {
            let mut node = self.clone();
            for _ in 0..amount {
                node = Node::Branch(vec![node]);
            }
            return Ok(node);
        }

        let requested = amount.unsigned_abs();
        let mut current = self;
        for unwrapped in 0..requested {
            current = match current {
                Node::Branch(children) if children.len() == 1 => &children[0],
                _ => {
                    let err = Error::invalid_resize(requested, unwrapped);
                    tracing::debug!(%err, "resize rejected");
                    return Err(err);
                }
            };
        }
        Ok(current.clone())
    }

    /// Extracts the inclusive coordinate range from `start` to `end`.
    ///
    /// Both paths must have the same length. The node at their common prefix
    /// is the context of the range; within it the first kept child is cut
    /// before `start`, the last kept child is cut after `end`, and the
    /// children between them are kept whole. When the paths are identical the
    /// addressed node is returned as-is, whatever its depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// let text: Node<String> = jagged!([
    ///     [["1:1:1", "1:1:2"], ["1:2:1", "1:2:2"]],
    ///     [["2:1:1", "2:1:2"], ["2:2:1", "2:2:2"]],
    /// ]);
    ///
    /// assert_eq!(
    ///     text.subarray(&[0, 1, 1], &[1, 0, 0]).unwrap(),
    ///     jagged!([[["1:2:2"]], [["2:1:1"]]])
    /// );
    /// assert_eq!(
    ///     text.subarray(&[1], &[1]).unwrap(),
    ///     jagged!([["2:1:1", "2:1:2"], ["2:2:1", "2:2:2"]])
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`] if the paths differ in length or descend
    ///   below a leaf
    /// - [`Error::OutOfRange`] at the first level where an index does not exist
    /// - [`Error::InvertedRange`] if `start` comes after `end`
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn subarray(&self, start: &[usize], end: &[usize]) -> Result<Node<T>> {
        let result = self.extract_range(start, end);
        if let Err(err) = &result {
            tracing::debug!(%err, "subarray rejected");
        }
        result
    }

    fn extract_range(&self, start: &[usize], end: &[usize]) -> Result<Node<T>> {
        if start.len() != end.len() {
            return Err(Error::shape_mismatch(
                0,
                &format!(
                    "start path has {} coordinates but end path has {}",
                    start.len(),
                    end.len()
                ),
            ));
        }

        let common = start.iter().zip(end).take_while(|(a, b)| a == b).count();
        let context = self.get(&start[..common])?;
        if common == start.len() {
            return Ok(context.clone());
        }

        let level = common;
        let children = context.branch_children(level)?;
        let (first, last) = (start[level], end[level]);
        for index in [first, last] {
            if index >= children.len() {
                return Err(Error::out_of_range(level, index, children.len()));
            }
        }
        if first > last {
            return Err(Error::inverted_range(level, first, last));
        }

        let mut kept = Vec::with_capacity(last - first + 1);
        kept.push(children[first].slice_from(&start[level + 1..], level + 1)?);
        kept.extend(children[first + 1..last].iter().cloned());
        kept.push(children[last].slice_until(&end[level + 1..], level + 1)?);
        Ok(Node::Branch(kept))
    }

    /// Drops everything before `path` at every level below this node.
    fn slice_from(&self, path: &[usize], level: usize) -> Result<Node<T>> {
        let Some((&index, rest)) = path.split_first() else {
            return Ok(self.clone());
        };
        let children = self.branch_children(level)?;
        let first = self.child_at(index, level)?;

        let mut kept = Vec::with_capacity(children.len() - index);
        kept.push(first.slice_from(rest, level + 1)?);
        kept.extend(children[index + 1..].iter().cloned());
        Ok(Node::Branch(kept))
    }

    /// Drops everything after `path` at every level below this node.
    fn slice_until(&self, path: &[usize], level: usize) -> Result<Node<T>> {
        let Some((&index, rest)) = path.split_first() else {
            return Ok(self.clone());
        };
        let children = self.branch_children(level)?;
        let last = self.child_at(index, level)?;

        let mut kept = children[..index].to_vec();
        kept.push(last.slice_until(rest, level + 1)?);
        Ok(Node::Branch(kept))
    }
}

impl<T: LeafValue> Node<T> {
    /// Returns `true` if the tree has at least one leaf, every leaf has content
    /// and no branch is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// assert!(Node::leaf("Fee Fi Fo Fum".to_string()).is_full());
    /// assert!(!Node::<String>::empty_branch().is_full());
    /// let gap: Node<String> = jagged!([["a", "b", "c", ""]]);
    /// assert!(!gap.is_full());
    /// ```
    #[must_use]
    pub fn is_full(&self) -> bool {
        match self {
            Node::Leaf(value) => !value.is_blank(),
            Node::Branch(children) => {
                !children.is_empty() && children.iter().all(Node::is_full)
            }
        }
    }

    /// Returns `true` if every leaf is blank, or there are no leaves at all.
    ///
    /// This is not the negation of [`Node::is_full`]: a tree mixing blank and
    /// non-blank leaves is neither, and a tree with no leaves is empty but not
    /// full.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Leaf(value) => value.is_blank(),
            Node::Branch(children) => children.iter().all(Node::is_empty),
        }
    }

    /// Same-shape presence mask: `1` for a leaf with content, `0` for a blank one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, JaggedIntArray, Node};
    ///
    /// let text: Node<String> = jagged!([["a", ""], [], [["b"]]]);
    /// let mask: JaggedIntArray = jagged!([[1, 0], [], [[1]]]);
    /// assert_eq!(text.mask(), mask);
    /// ```
    #[must_use]
    pub fn mask(&self) -> JaggedIntArray {
        self.map_leaves(|value| i64::from(!value.is_blank()))
    }

    /// Coordinate of the first leaf with content strictly after `after`.
    ///
    /// With `None` the first leaf with content in the whole tree is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// let text: Node<String> = jagged!([["a", ""], ["", "d"]]);
    /// assert_eq!(text.next_index(None), Some(vec![0, 0]));
    /// assert_eq!(text.next_index(Some(&[0, 0])), Some(vec![1, 1]));
    /// assert_eq!(text.next_index(Some(&[1, 1])), None);
    /// ```
    #[must_use]
    pub fn next_index(&self, after: Option<&[usize]>) -> Option<Vec<usize>> {
        self.filled_paths()
            .into_iter()
            .find(|path| after.map_or(true, |after| path.as_slice() > after))
    }

    /// Coordinate of the last leaf with content strictly before `before`.
    ///
    /// With `None` the last leaf with content in the whole tree is returned.
    #[must_use]
    pub fn prev_index(&self, before: Option<&[usize]>) -> Option<Vec<usize>> {
        self.filled_paths()
            .into_iter()
            .rev()
            .find(|path| before.map_or(true, |before| path.as_slice() < before))
    }

    fn filled_paths(&self) -> Vec<Vec<usize>> {
        self.leaf_paths()
            .into_iter()
            .zip(self.leaves())
            .filter(|(_, value)| !value.is_blank())
            .map(|(path, _)| path)
            .collect()
    }
}

impl<T: LeafValue + Clone> Node<T> {
    /// Removes trailing blank leaves from every branch.
    ///
    /// Branches are trimmed innermost first, and a branch left with no children
    /// is itself trailing whitespace for its parent. Blank leaves followed by
    /// content are kept. Trimming twice gives the same tree as trimming once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// let text: Node<String> = jagged!([["a", "", "b", ""], ["", ""]]);
    /// assert_eq!(text.trim_ending_whitespace(), jagged!([["a", "", "b"]]));
    /// ```
    #[must_use]
    pub fn trim_ending_whitespace(&self) -> Node<T> {
        match self {
            Node::Leaf(_) => self.clone(),
            Node::Branch(children) => {
                let mut trimmed: Vec<Node<T>> =
                    children.iter().map(Node::trim_ending_whitespace).collect();
                while trimmed.last().map_or(false, Node::is_trailing_blank) {
                    trimmed.pop();
                }
                if trimmed.len() != children.len() {
                    tracing::trace!(
                        removed = children.len() - trimmed.len(),
                        "trimmed trailing blanks"
                    );
                }
                Node::Branch(trimmed)
            }
        }
    }

    fn is_trailing_blank(&self) -> bool {
        match self {
            Node::Leaf(value) => value.is_blank(),
            Node::Branch(children) => children.is_empty(),
        }
    }
}
