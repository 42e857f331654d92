#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Trellis
//!
//! An expandable data-grid component for terminal applications.
//!
//! The grid renders a paginated collection of typed records, expands
//! rows with nested child records into an inline detail table, and
//! signals page-change, edit, and delete intent to its owner instead of
//! performing any work itself:
//!
//! - **grid** - The grid model: update/view, cursor, per-row expansion
//! - **column** - Declarative column definitions and nested-column
//!   derivation
//! - **row** - The `GridRow` trait and normalized row identifiers
//! - **value** - Displayable cell values and child rows
//! - **expansion** - The set of expanded row identifiers
//! - **paginator** - Page tracking and pager display
//! - **event** - Type-erased messages and normalized key events
//! - **key** - Key binding definitions and matching
//! - **style** - Rendering styles and width helpers
//!
//! ## Example
//!
//! ```rust,ignore
//! use trellis::prelude::*;
//!
//! let mut grid = Grid::new()
//!     .columns(columns)
//!     .rows(page_of_rows)
//!     .per_page(10)
//!     .total_records(23)
//!     .actions(true)
//!     .focused(true);
//!
//! match grid.update(&msg) {
//!     Some(GridMsg::PageChange { page, per_page }) => fetch(page, per_page),
//!     Some(GridMsg::Delete(row)) => delete(&row),
//!     _ => {}
//! }
//! println!("{}", grid.view());
//! ```

pub mod column;
pub mod event;
pub mod expansion;
pub mod grid;
pub mod key;
pub mod paginator;
pub mod row;
pub mod style;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::column::{Column, HeaderNames, derive_child_columns};
    pub use crate::event::{KeyMsg, Msg};
    pub use crate::expansion::ExpansionState;
    pub use crate::grid::{Grid, GridMsg, KeyMap};
    pub use crate::key::{Binding, matches};
    pub use crate::paginator::{Paginator, Type as PaginatorType};
    pub use crate::row::{GridRow, RowKey};
    pub use crate::style::Styles;
    pub use crate::value::{CellValue, ChildRow};
}
