/// Builds a [`Node`](crate::Node) from a nested literal.
///
/// Square brackets become branches and anything else becomes a leaf through
/// `Node::from`, so text literals produce `Node<String>` and integer literals
/// produce `Node<i64>`. Branches may mix leaves and sub-branches freely.
///
/// Array elements are single token trees; wrap anything longer (a negative
/// number, a method call) in parentheses.
///
/// # Examples
///
/// ```rust
/// use jagged_array::{jagged, JaggedIntArray, JaggedTextArray};
///
/// let text: JaggedTextArray = jagged!([["a", []], "b"]);
/// assert_eq!(text.verse_count(), 2);
///
/// let mask: JaggedIntArray = jagged!([1, [0, (-1)]]);
/// assert_eq!(mask.depth(), 2);
///
/// let verse: JaggedTextArray = jagged!("Fee Fi Fo Fum");
/// assert!(verse.is_leaf());
/// ```
#[macro_export]
macro_rules! jagged {
    // Handle empty branch
    ([]) => {
        $crate::Node::Branch(vec![])
    };

    // Handle non-empty branch
    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Node::Branch(vec![$($crate::jagged!($elem)),+])
    };

    // Anything else is a leaf
    ($leaf:expr) => {
        $crate::Node::from($leaf)
    };
}
