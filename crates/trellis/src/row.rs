//! Row identity and the trait rows must implement to appear in a grid.

use std::fmt;

use crate::value::ChildRow;

/// A normalized row identifier.
///
/// Backends hand out identifiers as strings or numbers, sometimes
/// inconsistently between endpoints. All identifiers are normalized to
/// string form at the grid boundary so that `1` and `"1"` refer to the
/// same row when tracking expansion state.
///
/// An empty key marks a row with no usable identifier; such rows render
/// normally but are never expandable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RowKey(String);

impl RowKey {
    /// Returns whether the key carries no identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the normalized string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RowKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RowKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for RowKey {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<u64> for RowKey {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Trait for records that can be displayed as grid rows.
///
/// # Example
///
/// ```rust
/// use trellis::row::{GridRow, RowKey};
/// use trellis::value::ChildRow;
///
/// #[derive(Clone)]
/// struct Exam {
///     id: u64,
///     title: String,
///     plans: Vec<ChildRow>,
/// }
///
/// impl GridRow for Exam {
///     fn key(&self) -> RowKey {
///         RowKey::from(self.id)
///     }
///
///     fn children(&self) -> &[ChildRow] {
///         &self.plans
///     }
/// }
/// ```
pub trait GridRow: Clone + Send + 'static {
    /// Returns the row's normalized identifier.
    fn key(&self) -> RowKey;

    /// Returns the row's nested detail records, if any.
    ///
    /// Children must already be present on the row; expanding never
    /// triggers a fetch.
    fn children(&self) -> &[ChildRow] {
        &[]
    }

    /// Returns whether the row can be expanded.
    ///
    /// A row is expandable iff it has a usable identifier and at least
    /// one child.
    fn expandable(&self) -> bool {
        !self.key().is_empty() && !self.children().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Rec {
        id: RowKey,
        kids: Vec<ChildRow>,
    }

    impl GridRow for Rec {
        fn key(&self) -> RowKey {
            self.id.clone()
        }

        fn children(&self) -> &[ChildRow] {
            &self.kids
        }
    }

    #[test]
    fn test_key_normalization() {
        assert_eq!(RowKey::from(1i64), RowKey::from("1"));
        assert_eq!(RowKey::from(42u64).as_str(), "42");
    }

    #[test]
    fn test_empty_key() {
        assert!(RowKey::default().is_empty());
        assert!(!RowKey::from("7").is_empty());
    }

    #[test]
    fn test_expandable_predicate() {
        let leaf = Rec {
            id: RowKey::from("1"),
            kids: Vec::new(),
        };
        assert!(!leaf.expandable());

        let parent = Rec {
            id: RowKey::from("2"),
            kids: vec![ChildRow::new().field("a", 1i64)],
        };
        assert!(parent.expandable());

        // A row without an identifier is never expandable, even with
        // children present.
        let anonymous = Rec {
            id: RowKey::default(),
            kids: vec![ChildRow::new().field("a", 1i64)],
        };
        assert!(!anonymous.expandable());
    }
}
