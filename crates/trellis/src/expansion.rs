//! Per-row expansion state.

use std::collections::HashSet;

use crate::row::RowKey;

/// The set of row identifiers currently shown expanded.
///
/// Membership is the only state. Expansions are fully independent:
/// expanding one row never implicitly collapses another, and collapsing
/// one row leaves its siblings untouched.
///
/// After a data refresh, keys for rows no longer present simply become
/// inert; they are not purged unless the owner calls [`Self::retain`] or
/// [`Self::clear`].
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    open: HashSet<RowKey>,
}

impl ExpansionState {
    /// Creates an empty state (everything collapsed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the given row is expanded.
    #[must_use]
    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.open.contains(key)
    }

    /// Marks the row expanded. Idempotent.
    pub fn expand(&mut self, key: RowKey) {
        self.open.insert(key);
    }

    /// Marks the row collapsed. Idempotent; collapsing a collapsed row
    /// is a no-op.
    pub fn collapse(&mut self, key: &RowKey) {
        self.open.remove(key);
    }

    /// Toggles the row and returns whether it is now expanded.
    pub fn toggle(&mut self, key: RowKey) -> bool {
        if self.open.remove(&key) {
            false
        } else {
            self.open.insert(key);
            true
        }
    }

    /// Collapses everything.
    pub fn clear(&mut self) {
        self.open.clear();
    }

    /// Drops keys not accepted by the predicate. Offered for owners that
    /// prefer pruning stale keys on data refresh.
    pub fn retain(&mut self, keep: impl Fn(&RowKey) -> bool) {
        self.open.retain(|k| keep(k));
    }

    /// Returns the number of expanded rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Returns whether nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut st = ExpansionState::new();
        let key = RowKey::from("1");

        assert!(st.toggle(key.clone()));
        assert!(st.is_expanded(&key));

        assert!(!st.toggle(key.clone()));
        assert!(!st.is_expanded(&key));
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let mut st = ExpansionState::new();
        let key = RowKey::from("1");

        st.collapse(&key);
        assert!(st.is_empty());

        st.expand(key.clone());
        st.collapse(&key);
        st.collapse(&key);
        assert!(st.is_empty());
    }

    #[test]
    fn test_expansions_are_independent() {
        let mut st = ExpansionState::new();
        for i in 0..5i64 {
            st.expand(RowKey::from(i));
        }
        assert_eq!(st.len(), 5);

        st.collapse(&RowKey::from(2i64));
        st.collapse(&RowKey::from(4i64));

        assert_eq!(st.len(), 3);
        assert!(st.is_expanded(&RowKey::from(0i64)));
        assert!(st.is_expanded(&RowKey::from(1i64)));
        assert!(!st.is_expanded(&RowKey::from(2i64)));
        assert!(st.is_expanded(&RowKey::from(3i64)));
    }

    #[test]
    fn test_retain_prunes_stale_keys() {
        let mut st = ExpansionState::new();
        st.expand(RowKey::from("1"));
        st.expand(RowKey::from("2"));

        st.retain(|k| k.as_str() == "1");

        assert!(st.is_expanded(&RowKey::from("1")));
        assert!(!st.is_expanded(&RowKey::from("2")));
    }
}
