//! The recursive jagged array node.
//!
//! This module provides [`Node`], the single data type of the crate. A node is
//! either a scalar [`Node::Leaf`] or an ordered [`Node::Branch`] of child nodes.
//! Nothing forces the children of a branch to share a depth or a length, which
//! is what makes the array *jagged*.
//!
//! ## Depth zero
//!
//! A tree of depth zero is a bare leaf. It is never wrapped in a one-element
//! branch, and every operation accepts it as-is:
//!
//! ```rust
//! use jagged_array::Node;
//!
//! let verse: Node<String> = Node::from("Fee Fi Fo Fum");
//! assert!(verse.is_leaf());
//! assert_eq!(verse.depth(), 0);
//! ```
//!
//! ## Building trees
//!
//! ```rust
//! use jagged_array::{jagged, Node};
//!
//! // From nested vectors
//! let a: Node<String> = Node::from(vec![vec!["1:1", "1:2"], vec!["2:1"]]);
//!
//! // With the jagged! macro, which also allows mixed depths
//! let b: Node<String> = jagged!([["1:1", "1:2"], ["2:1"]]);
//! assert_eq!(a, b);
//!
//! // From JSON or any other self-describing serde format
//! let c: Node<String> = serde_json::from_str(r#"[["1:1","1:2"],["2:1"]]"#).unwrap();
//! assert_eq!(a, c);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A recursively nested, variable-depth sequence of leaf values.
///
/// Equality is structural: variants must match, leaves compare by value and
/// branches compare child-by-child with equal lengths.
///
/// # Examples
///
/// ```rust
/// use jagged_array::Node;
///
/// let chapter = Node::branch(vec![Node::leaf("In the beginning".to_string())]);
/// assert!(chapter.is_branch());
/// assert_eq!(chapter.children().map(|c| c.len()), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node<T> {
    Leaf(T),
    Branch(Vec<Node<T>>),
}

impl<T> Node<T> {
    /// Creates a leaf node.
    #[inline]
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Node::Leaf(value)
    }

    /// Creates a branch node from its children.
    #[inline]
    #[must_use]
    pub const fn branch(children: Vec<Node<T>>) -> Self {
        Node::Branch(children)
    }

    /// Creates a branch with no children.
    #[inline]
    #[must_use]
    pub const fn empty_branch() -> Self {
        Node::Branch(Vec::new())
    }

    /// Returns `true` if the node is a leaf.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns `true` if the node is a branch.
    #[inline]
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// If the node is a leaf, returns a reference to its value. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// If the node is a branch, returns its children. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::Node;
    ///
    /// let node: Node<i64> = Node::from(vec![1i64, 2, 3]);
    /// assert_eq!(node.children().map(|c| c.len()), Some(3));
    /// assert_eq!(Node::leaf(7i64).children(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn children(&self) -> Option<&[Node<T>]> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(children) => Some(children),
        }
    }

    /// Consumes the node, returning the leaf value if it is one.
    #[must_use]
    pub fn into_leaf(self) -> Option<T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Maximum nesting depth. A leaf has depth 0 and an empty branch depth 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// let ragged: Node<String> = jagged!(["a", ["b", ["c"]], []]);
    /// assert_eq!(ragged.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(children) => 1 + children.iter().map(Node::depth).max().unwrap_or(0),
        }
    }

    /// Depth-first, left-to-right iterator over every leaf value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jagged_array::{jagged, Node};
    ///
    /// let text: Node<String> = jagged!([["a", "b"], [], ["c"]]);
    /// let flat: Vec<&str> = text.leaves().map(String::as_str).collect();
    /// assert_eq!(flat, ["a", "b", "c"]);
    /// ```
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves::new(self)
    }

    /// Builds a same-shape tree by applying `f` to every leaf.
    ///
    /// Branches, empty ones included, are preserved exactly.
    pub fn map_leaves<U, F>(&self, mut f: F) -> Node<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map_with(&mut f)
    }

    fn map_with<U, F>(&self, f: &mut F) -> Node<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            Node::Leaf(value) => Node::Leaf(f(value)),
            Node::Branch(children) => {
                Node::Branch(children.iter().map(|child| child.map_with(f)).collect())
            }
        }
    }
}

/// Iterator over the leaf values of a [`Node`], returned by [`Node::leaves`].
pub struct Leaves<'a, T> {
    root: Option<&'a Node<T>>,
    stack: Vec<std::slice::Iter<'a, Node<T>>>,
}

impl<'a, T> Leaves<'a, T> {
    fn new(root: &'a Node<T>) -> Self {
        Leaves {
            root: Some(root),
            stack: Vec::new(),
        }
    }

    fn visit(&mut self, node: &'a Node<T>) -> Option<&'a T> {
        match node {
            Node::Leaf(value) => Some(value),
            Node::Branch(children) => {
                self.stack.push(children.iter());
                None
            }
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if let Some(value) = self.visit(root) {
                return Some(value);
            }
        }
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(node) => {
                    if let Some(value) = self.visit(node) {
                        return Some(value);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(value) => write!(f, "{}", value),
            Node::Branch(children) => {
                write!(f, "[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl<T: Serialize> Serialize for Node<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Leaf(value) => value.serialize(serializer),
            Node::Branch(children) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de, T> Deserialize<'de> for Node<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, IntoDeserializer, Visitor};

        struct NodeVisitor<T>(PhantomData<T>);

        // Every non-sequence value is handed to the leaf type to decode.
        fn scalar<'de, T, V, E>(value: V) -> Result<Node<T>, E>
        where
            T: Deserialize<'de>,
            V: IntoDeserializer<'de, E>,
            E: de::Error,
        {
            T::deserialize(value.into_deserializer()).map(Node::Leaf)
        }

        impl<'de, T> Visitor<'de> for NodeVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = Node<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar leaf or a nested sequence")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
                scalar(value)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                scalar(value)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                scalar(value)
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                scalar(value)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                scalar(value)
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                scalar(value)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut children = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(child) = seq.next_element()? {
                    children.push(child);
                }
                Ok(Node::Branch(children))
            }
        }

        deserializer.deserialize_any(NodeVisitor(PhantomData))
    }
}

impl From<&str> for Node<String> {
    fn from(value: &str) -> Self {
        Node::Leaf(value.to_string())
    }
}

impl From<String> for Node<String> {
    fn from(value: String) -> Self {
        Node::Leaf(value)
    }
}

impl From<i64> for Node<i64> {
    fn from(value: i64) -> Self {
        Node::Leaf(value)
    }
}

impl<T, X> From<Vec<X>> for Node<T>
where
    X: Into<Node<T>>,
{
    fn from(values: Vec<X>) -> Self {
        Node::Branch(values.into_iter().map(Into::into).collect())
    }
}

impl<T> FromIterator<Node<T>> for Node<T> {
    fn from_iter<I: IntoIterator<Item = Node<T>>>(iter: I) -> Self {
        Node::Branch(iter.into_iter().collect())
    }
}
