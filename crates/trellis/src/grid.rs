//! Expandable data-grid component.
//!
//! The grid renders one page of typed records with declarative columns,
//! lets rows with children expand into a nested detail table, and
//! signals page-change, edit, and delete intent to its owner. It owns
//! only presentation state (cursor, expansion, pager position) and
//! performs no I/O: data arrives as wholesale row snapshots, and the
//! owner reacts to [`GridMsg`] values by fetching or mutating on its own
//! terms.
//!
//! # Example
//!
//! ```rust
//! use trellis::column::Column;
//! use trellis::grid::Grid;
//! use trellis::row::{GridRow, RowKey};
//! use trellis::value::ChildRow;
//!
//! #[derive(Clone)]
//! struct Exam {
//!     id: u64,
//!     title: String,
//!     plans: Vec<ChildRow>,
//! }
//!
//! impl GridRow for Exam {
//!     fn key(&self) -> RowKey {
//!         RowKey::from(self.id)
//!     }
//!     fn children(&self) -> &[ChildRow] {
//!         &self.plans
//!     }
//! }
//!
//! let grid = Grid::new()
//!     .columns(vec![Column::new("Title", 24, |e: &Exam| {
//!         Some(e.title.as_str().into())
//!     })])
//!     .per_page(10)
//!     .total_records(23)
//!     .focused(true);
//! ```

use crate::column::{Column, HeaderNames, derive_child_columns};
use crate::event::{KeyMsg, Msg};
use crate::expansion::ExpansionState;
use crate::key::{Binding, matches};
use crate::paginator::Paginator;
use crate::row::{GridRow, RowKey};
use crate::style::{Styles, pad_truncate, paint};
use crate::value::ChildRow;
use unicode_width::UnicodeWidthStr;

/// Width of the expand-marker column.
const MARKER_WIDTH: usize = 2;

/// Width of the trailing Action column.
const ACTION_WIDTH: usize = 11;

/// Indent for nested child tables, past the marker column.
const CHILD_INDENT: &str = "    ";

/// Intent signaled by the grid to its owner.
///
/// The grid never fetches, edits, or deletes anything itself; it reports
/// what the user asked for and learns about the outcome only through the
/// next rows/total snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMsg<R> {
    /// The user navigated to another page.
    PageChange {
        /// Requested page (0-indexed).
        page: usize,
        /// Page size in effect.
        per_page: usize,
    },
    /// The user asked to edit the given row.
    Edit(R),
    /// The user asked to delete the given row.
    Delete(R),
}

/// Key bindings for grid interaction.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor up one row.
    pub cursor_up: Binding,
    /// Move the cursor down one row.
    pub cursor_down: Binding,
    /// Expand or collapse the cursor row.
    pub toggle_expand: Binding,
    /// Go to the previous page.
    pub prev_page: Binding,
    /// Go to the next page.
    pub next_page: Binding,
    /// Edit the cursor row.
    pub edit: Binding,
    /// Delete the cursor row.
    pub delete: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new().keys(&["up", "k"]).help("↑/k", "up"),
            cursor_down: Binding::new().keys(&["down", "j"]).help("↓/j", "down"),
            toggle_expand: Binding::new()
                .keys(&["enter", " "])
                .help("enter", "expand/collapse"),
            prev_page: Binding::new()
                .keys(&["left", "h", "pgup"])
                .help("←/h", "prev page"),
            next_page: Binding::new()
                .keys(&["right", "l", "pgdown"])
                .help("→/l", "next page"),
            edit: Binding::new().keys(&["e"]).help("e", "edit"),
            delete: Binding::new().keys(&["d", "x"]).help("d", "delete"),
        }
    }
}

/// Expandable data-grid model.
#[derive(Debug, Clone)]
pub struct Grid<R: GridRow> {
    /// Key bindings for interaction.
    pub key_map: KeyMap,
    /// Styles for rendering.
    pub styles: Styles,
    /// Column definitions (positional identity; replacing the vector
    /// replaces the columns).
    columns: Vec<Column<R>>,
    /// Current page of rows. Replaced wholesale on refresh.
    rows: Vec<R>,
    /// Header labels for nested-table columns.
    header_names: HeaderNames,
    /// Expanded row keys.
    expansion: ExpansionState,
    /// Pager state.
    paginator: Paginator,
    /// Total records across all pages.
    total_records: usize,
    /// Cursor position within the current page.
    cursor: usize,
    /// Whether the grid accepts input.
    focus: bool,
    /// Whether a data fetch is in flight (owner-declared).
    loading: bool,
    /// Whether the trailing Action column is rendered and the edit and
    /// delete bindings are live.
    actions: bool,
}

impl<R: GridRow> Default for Grid<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GridRow> Grid<R> {
    /// Creates a new empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_map: KeyMap::default(),
            styles: Styles::default(),
            columns: Vec::new(),
            rows: Vec::new(),
            header_names: HeaderNames::new(),
            expansion: ExpansionState::new(),
            paginator: Paginator::new(),
            total_records: 0,
            cursor: 0,
            focus: false,
            loading: false,
            actions: false,
        }
    }

    /// Sets the columns (builder pattern).
    #[must_use]
    pub fn columns(mut self, columns: Vec<Column<R>>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the current page of rows (builder pattern).
    #[must_use]
    pub fn rows(mut self, rows: Vec<R>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Sets the page size (builder pattern).
    #[must_use]
    pub fn per_page(mut self, n: usize) -> Self {
        self.paginator.set_per_page(n);
        self.paginator.set_total_pages_from_items(self.total_records);
        self
    }

    /// Sets the total record count across all pages (builder pattern).
    #[must_use]
    pub fn total_records(mut self, n: usize) -> Self {
        self.set_total_records(n);
        self
    }

    /// Sets the nested-table header labels (builder pattern).
    #[must_use]
    pub fn header_names(mut self, names: HeaderNames) -> Self {
        self.header_names = names;
        self
    }

    /// Sets the focused state (builder pattern).
    #[must_use]
    pub fn focused(mut self, f: bool) -> Self {
        self.focus = f;
        self
    }

    /// Sets the loading state (builder pattern).
    #[must_use]
    pub fn loading(mut self, l: bool) -> Self {
        self.loading = l;
        self
    }

    /// Enables the Action column and the edit/delete bindings
    /// (builder pattern).
    #[must_use]
    pub fn actions(mut self, on: bool) -> Self {
        self.actions = on;
        self
    }

    /// Sets the styles (builder pattern).
    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key map (builder pattern).
    #[must_use]
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Replaces the current page of rows.
    ///
    /// The cursor is clamped into the new page. Expansion state is left
    /// alone: keys for rows no longer present become inert.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }

    /// Replaces the columns.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Sets the total record count and re-derives the page count.
    pub fn set_total_records(&mut self, n: usize) {
        self.total_records = n;
        self.paginator.set_total_pages_from_items(n);
    }

    /// Sets the loading state.
    pub fn set_loading(&mut self, l: bool) {
        self.loading = l;
    }

    /// Focuses the grid.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Blurs (unfocuses) the grid.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Returns whether the grid is focused.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focus
    }

    /// Returns whether the grid is in the loading state.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the current page of rows.
    #[must_use]
    pub fn get_rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the columns.
    #[must_use]
    pub fn get_columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Returns the row under the cursor, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<&R> {
        self.rows.get(self.cursor)
    }

    /// Returns the cursor position within the current page.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the expansion state (read-only; the grid owns it).
    #[must_use]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Returns the pager state.
    #[must_use]
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Returns the total record count across all pages.
    #[must_use]
    pub const fn total_record_count(&self) -> usize {
        self.total_records
    }

    /// Moves the cursor up by n rows.
    pub fn move_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// Moves the cursor down by n rows.
    pub fn move_down(&mut self, n: usize) {
        if !self.rows.is_empty() {
            self.cursor = (self.cursor + n).min(self.rows.len() - 1);
        }
    }

    /// Toggles expansion of the row with the given key.
    ///
    /// Collapsing always succeeds. Expanding is guarded: the key must
    /// belong to an expandable row on the current page, so the expansion
    /// set never gains a key for a leaf-only or unidentified row.
    ///
    /// Returns whether the row is expanded afterwards.
    pub fn toggle_row(&mut self, key: &RowKey) -> bool {
        if self.expansion.is_expanded(key) {
            self.expansion.collapse(key);
            return false;
        }
        let can_expand = self
            .rows
            .iter()
            .any(|r| r.expandable() && r.key() == *key);
        if can_expand {
            self.expansion.expand(key.clone());
        }
        self.expansion.is_expanded(key)
    }

    /// Toggles expansion of the cursor row.
    pub fn toggle_selected(&mut self) {
        if let Some(row) = self.rows.get(self.cursor) {
            let key = row.key();
            self.toggle_row(&key);
        }
    }

    /// Updates the grid from a message.
    ///
    /// A blurred or loading grid ignores input. Page navigation moves
    /// the pager immediately and reports the requested page; edit and
    /// delete report the cursor row. Everything else is handled
    /// internally.
    pub fn update(&mut self, msg: &Msg) -> Option<GridMsg<R>> {
        if !self.focus || self.loading {
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>()?;
        let key_str = key.to_string();

        if matches(&key_str, &[&self.key_map.cursor_up]) {
            self.move_up(1);
        } else if matches(&key_str, &[&self.key_map.cursor_down]) {
            self.move_down(1);
        } else if matches(&key_str, &[&self.key_map.toggle_expand]) {
            self.toggle_selected();
        } else if matches(&key_str, &[&self.key_map.next_page]) {
            if !self.paginator.on_last_page() {
                self.paginator.next_page();
                return Some(GridMsg::PageChange {
                    page: self.paginator.page(),
                    per_page: self.paginator.get_per_page(),
                });
            }
        } else if matches(&key_str, &[&self.key_map.prev_page]) {
            if !self.paginator.on_first_page() {
                self.paginator.prev_page();
                return Some(GridMsg::PageChange {
                    page: self.paginator.page(),
                    per_page: self.paginator.get_per_page(),
                });
            }
        } else if matches(&key_str, &[&self.key_map.edit]) {
            if self.actions {
                return self.selected_row().cloned().map(GridMsg::Edit);
            }
        } else if matches(&key_str, &[&self.key_map.delete]) && self.actions {
            return self.selected_row().cloned().map(GridMsg::Delete);
        }

        None
    }

    /// Renders the grid.
    #[must_use]
    pub fn view(&self) -> String {
        let mut lines = vec![self.headers_view()];

        if self.loading {
            lines.push(paint(&self.styles.placeholder, "Loading…"));
        } else if self.rows.is_empty() {
            lines.push(paint(&self.styles.placeholder, "No records."));
        } else {
            for (i, row) in self.rows.iter().enumerate() {
                lines.push(self.render_row(row, i));
                if self.expansion.is_expanded(&row.key()) {
                    self.render_children(row.children(), &mut lines);
                }
            }
        }

        lines.push(self.footer_view());
        lines.join("\n")
    }

    /// Renders the header row.
    fn headers_view(&self) -> String {
        let mut cells = vec![" ".repeat(MARKER_WIDTH)];
        cells.extend(
            self.columns
                .iter()
                .filter(|col| col.width > 0)
                .map(|col| paint(&self.styles.header, &pad_truncate(&col.header, col.width))),
        );
        if self.actions {
            cells.push(paint(
                &self.styles.header,
                &pad_truncate("Action", ACTION_WIDTH),
            ));
        }
        cells.join(" ")
    }

    /// Renders a single top-level row.
    fn render_row(&self, row: &R, idx: usize) -> String {
        let marker = if row.expandable() {
            if self.expansion.is_expanded(&row.key()) {
                "▾ "
            } else {
                "▸ "
            }
        } else {
            "  "
        };

        let mut cells = vec![paint(&self.styles.marker, marker)];
        cells.extend(
            self.columns
                .iter()
                .filter(|col| col.width > 0)
                .map(|col| pad_truncate(&col.display(row), col.width)),
        );
        if self.actions {
            cells.push(pad_truncate("edit/delete", ACTION_WIDTH));
        }

        let line = cells.join(" ");
        if self.focus && idx == self.cursor {
            paint(&self.styles.selected, &line)
        } else {
            paint(&self.styles.cell, &line)
        }
    }

    /// Renders the nested detail table for one expanded row.
    ///
    /// Nested columns come from the first child only (see
    /// [`derive_child_columns`]); widths are content-derived. An
    /// expanded row with no children gets an explicit placeholder line,
    /// never a bare table shell. A child missing a derived field renders
    /// as a placeholder cell without disturbing its siblings.
    fn render_children(&self, children: &[ChildRow], lines: &mut Vec<String>) {
        if children.is_empty() {
            lines.push(format!(
                "{CHILD_INDENT}{}",
                paint(&self.styles.placeholder, "No additional details.")
            ));
            return;
        }

        let cols = derive_child_columns(children, &self.header_names);
        let widths: Vec<usize> = cols
            .iter()
            .map(|(field, label)| {
                let content = children
                    .iter()
                    .map(|c| c.get(field).map_or(1, |v| v.to_string().width()))
                    .max()
                    .unwrap_or(1);
                label.width().max(content)
            })
            .collect();

        let header = cols
            .iter()
            .zip(&widths)
            .map(|((_, label), w)| paint(&self.styles.header, &pad_truncate(label, *w)))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("{CHILD_INDENT}{header}"));

        for child in children {
            let cells = cols
                .iter()
                .zip(&widths)
                .map(|((field, _), w)| {
                    let text = child.get(field).map_or_else(|| "-".to_string(), |v| v.to_string());
                    pad_truncate(&text, *w)
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("{CHILD_INDENT}{}", paint(&self.styles.cell, &cells)));
        }
    }

    /// Renders the footer: pager plus record count.
    fn footer_view(&self) -> String {
        let text = format!(
            "page {} · {} record{}",
            self.paginator.view(),
            self.total_records,
            if self.total_records == 1 { "" } else { "s" }
        );
        paint(&self.styles.footer, &text)
    }
}
