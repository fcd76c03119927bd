//! Leaf value semantics.
//!
//! The shape engine only needs one thing from a leaf: whether it counts as
//! empty. Text leaves are empty when the string has zero length (whitespace is
//! *not* trimmed first). Integer leaves are never empty; a mask of `0`s is still
//! a fully populated tree of counts.

/// A value that can sit at the bottom of a [`Node`](crate::Node).
///
/// # Examples
///
/// ```rust
/// use jagged_array::LeafValue;
///
/// assert!(String::new().is_blank());
/// assert!(!" ".to_string().is_blank());
/// assert!(!0i64.is_blank());
/// ```
pub trait LeafValue {
    /// Returns `true` if this leaf holds no content.
    fn is_blank(&self) -> bool {
        false
    }
}

impl LeafValue for String {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl LeafValue for &str {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_integer_leaf {
    ($($ty:ty),*) => {
        $(impl LeafValue for $ty {})*
    };
}

impl_integer_leaf!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_blankness() {
        assert!("".is_blank());
        assert!(!"a".is_blank());
        assert!(!"  ".to_string().is_blank());
    }

    #[test]
    fn test_integers_never_blank() {
        assert!(!0i64.is_blank());
        assert!(!0u8.is_blank());
        assert!(!1usize.is_blank());
    }
}
