//! Column definitions and nested-table column derivation.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::value::{CellValue, ChildRow};

/// Accessor reading a displayable value out of a row.
///
/// Returning `None` means the field is absent on that particular row;
/// the cell renders as a placeholder instead of failing the render.
pub type Accessor<R> = Arc<dyn Fn(&R) -> Option<CellValue> + Send + Sync>;

/// Custom renderer producing the full display text for a cell.
pub type Renderer<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// A single column definition for the grid's top-level table.
///
/// # Example
///
/// ```rust
/// use trellis::column::Column;
///
/// struct Exam { title: String }
///
/// let col = Column::new("Title", 24, |e: &Exam| Some(e.title.as_str().into()));
/// ```
#[derive(Clone)]
pub struct Column<R> {
    /// Column title displayed in the header.
    pub header: String,
    /// Width of the column in display cells.
    pub width: usize,
    /// Advisory flag for callers that offer sorting. The grid itself
    /// imposes no order on its rows.
    pub sortable: bool,
    accessor: Accessor<R>,
    renderer: Option<Renderer<R>>,
}

impl<R> Column<R> {
    /// Creates a new column with a header, width, and value accessor.
    #[must_use]
    pub fn new(
        header: impl Into<String>,
        width: usize,
        accessor: impl Fn(&R) -> Option<CellValue> + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            width,
            sortable: false,
            accessor: Arc::new(accessor),
            renderer: None,
        }
    }

    /// Marks the column as sortable (builder pattern).
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets a custom renderer that overrides the accessor for display
    /// (builder pattern).
    #[must_use]
    pub fn renderer(mut self, f: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(f));
        self
    }

    /// Returns the display text for this column on the given row.
    ///
    /// Falls back to `"-"` when the accessor reports the field absent.
    #[must_use]
    pub fn display(&self, row: &R) -> String {
        if let Some(render) = &self.renderer {
            return render(row);
        }
        (self.accessor)(row).map_or_else(|| "-".to_string(), |v| v.to_string())
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Header labels for nested-table columns whose field set is only known
/// at runtime.
///
/// Fields absent from the map fall back to the upper-cased field name.
#[derive(Debug, Clone, Default)]
pub struct HeaderNames {
    labels: HashMap<String, String>,
}

impl HeaderNames {
    /// Creates an empty map; every field falls back to its upper-cased
    /// name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label for a field name (builder pattern).
    #[must_use]
    pub fn label_for(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(field.into(), label.into());
        self
    }

    /// Returns the header label for a field.
    #[must_use]
    pub fn label(&self, field: &str) -> String {
        self.labels
            .get(field)
            .cloned()
            .unwrap_or_else(|| field.to_uppercase())
    }
}

/// Derives the nested-table column set for one parent's children.
///
/// The column set is the key set of the *first* child, in field order;
/// each entry pairs the field name with its header label from `names`.
/// Children past the first are never consulted: if children within one
/// parent have heterogeneous keys, only the first child's keys become
/// headers. That mirrors how the backing data is produced and is a
/// documented limitation, not something this function papers over.
///
/// Empty input yields an empty column set.
#[must_use]
pub fn derive_child_columns(children: &[ChildRow], names: &HeaderNames) -> Vec<(String, String)> {
    children.first().map_or_else(Vec::new, |first| {
        first
            .keys()
            .map(|field| (field.to_string(), names.label(field)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Rec {
        title: Option<String>,
    }

    fn title_col() -> Column<Rec> {
        Column::new("Title", 20, |r: &Rec| {
            r.title.as_ref().map(|t| t.as_str().into())
        })
    }

    #[test]
    fn test_display_via_accessor() {
        let col = title_col();
        let rec = Rec {
            title: Some("Exam A".into()),
        };
        assert_eq!(col.display(&rec), "Exam A");
    }

    #[test]
    fn test_missing_field_renders_placeholder() {
        let col = title_col();
        let rec = Rec { title: None };
        assert_eq!(col.display(&rec), "-");
    }

    #[test]
    fn test_custom_renderer_wins() {
        let col = title_col().renderer(|_| "custom".to_string());
        let rec = Rec { title: None };
        assert_eq!(col.display(&rec), "custom");
    }

    #[test]
    fn test_header_names_fallback() {
        let names = HeaderNames::new().label_for("plan_type", "Plan");
        assert_eq!(names.label("plan_type"), "Plan");
        assert_eq!(names.label("plan_month"), "PLAN_MONTH");
    }

    #[test]
    fn test_derive_from_first_child_only() {
        let children = vec![
            ChildRow::new().field("a", 1i64).field("b", 2i64),
            // Heterogeneous on purpose: "c" never becomes a header.
            ChildRow::new().field("a", 3i64).field("c", 4i64),
        ];
        let cols = derive_child_columns(&children, &HeaderNames::new());
        assert_eq!(
            cols,
            vec![
                ("a".to_string(), "A".to_string()),
                ("b".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn test_derive_empty_children() {
        assert!(derive_child_columns(&[], &HeaderNames::new()).is_empty());
    }
}
