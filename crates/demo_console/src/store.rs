//! In-memory paginated catalog store.
//!
//! Plays the part of the REST backend a real admin console would talk
//! to: a paginated list endpoint returning `{ data, total }` and a
//! delete-by-id endpoint. The grid never sees this module; the app
//! controller fetches pages here and hands row snapshots to the grid.

use serde::{Deserialize, Serialize};

use crate::dataset::{self, Exam};

/// One page of list results, in the wire shape of the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// The requested page of records.
    pub data: Vec<Exam>,
    /// Total records across all pages.
    pub total: usize,
}

/// Store errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// Delete target does not exist.
    #[error("no exam with id {0}")]
    NotFound(u64),
}

/// In-memory exam catalog.
#[derive(Debug, Clone)]
pub struct Store {
    exams: Vec<Exam>,
}

impl Store {
    /// Creates a store with a deterministic seeded catalog.
    #[must_use]
    pub fn seeded(seed: u64, count: usize) -> Self {
        Self {
            exams: dataset::generate(seed, count),
        }
    }

    /// Returns the number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exams.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }

    /// Returns one page of records (0-indexed page number).
    ///
    /// A page past the end returns an empty data vector with the true
    /// total; it is not an error.
    #[must_use]
    pub fn list(&self, page: usize, per_page: usize) -> ListResponse {
        let per_page = per_page.max(1);
        let start = page.saturating_mul(per_page).min(self.exams.len());
        let end = start.saturating_add(per_page).min(self.exams.len());

        tracing::debug!(page, per_page, start, end, total = self.exams.len(), "list exams");

        ListResponse {
            data: self.exams[start..end].to_vec(),
            total: self.exams.len(),
        }
    }

    /// Deletes the record with the given id.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let before = self.exams.len();
        self.exams.retain(|e| e.id != id);
        if self.exams.len() == before {
            tracing::warn!(id, "delete target missing");
            return Err(StoreError::NotFound(id));
        }
        tracing::info!(id, remaining = self.exams.len(), "deleted exam");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_shape() {
        let store = Store::seeded(42, 23);

        let page = store.list(0, 10);
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.total, 23);

        let last = store.list(2, 10);
        assert_eq!(last.data.len(), 3);
        assert_eq!(last.total, 23);
    }

    #[test]
    fn test_page_past_end_is_empty_not_error() {
        let store = Store::seeded(42, 23);
        let page = store.list(9, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 23);
    }

    #[test]
    fn test_delete_shrinks_total() {
        let mut store = Store::seeded(42, 23);
        let victim = store.list(0, 1).data[0].id;

        store.delete(victim).unwrap();
        assert_eq!(store.len(), 22);
        assert!(store.list(0, 25).data.iter().all(|e| e.id != victim));
    }

    #[test]
    fn test_delete_missing_id() {
        let mut store = Store::seeded(42, 23);
        assert_eq!(store.delete(999), Err(StoreError::NotFound(999)));
        assert_eq!(store.len(), 23);
    }

    #[test]
    fn test_response_round_trips_as_json() {
        let store = Store::seeded(42, 23);
        let page = store.list(1, 10);

        let json = serde_json::to_string(&page).unwrap();
        let back: ListResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, 23);
        assert_eq!(back.data.len(), 10);
        assert_eq!(back.data[0].id, page.data[0].id);
    }
}
