//! Application controller.
//!
//! Owns the grid and the store, and wires the two together: grid intents
//! (page changes, deletes) become store calls, and store results become
//! fresh row snapshots for the grid. The grid itself never touches the
//! store.

use trellis::column::{Column, HeaderNames};
use trellis::event::Msg;
use trellis::grid::{Grid, GridMsg};
use trellis::row::{GridRow, RowKey};
use trellis::style::Styles;
use trellis::value::ChildRow;

use crate::dataset::Exam;
use crate::store::Store;

/// An exam record prepared for display: the raw record plus its detail
/// rows, converted once when the page arrives.
#[derive(Debug, Clone)]
pub struct ExamRow {
    /// The backing catalog record.
    pub exam: Exam,
    children: Vec<ChildRow>,
}

impl ExamRow {
    fn new(exam: Exam) -> Self {
        let children = detail_rows(&exam);
        Self { exam, children }
    }
}

impl GridRow for ExamRow {
    fn key(&self) -> RowKey {
        RowKey::from(self.exam.id)
    }

    fn children(&self) -> &[ChildRow] {
        &self.children
    }
}

/// Converts an exam's detail records into child rows.
///
/// Exams carry either subscription plans or study materials; the two
/// have different field sets and the nested table adapts per row.
fn detail_rows(exam: &Exam) -> Vec<ChildRow> {
    if exam.plans.is_empty() {
        exam.materials
            .iter()
            .map(|m| {
                ChildRow::new()
                    .field("material", m.title.as_str())
                    .field("format", m.format.as_str())
                    .field("pages", i64::from(m.pages))
            })
            .collect()
    } else {
        exam.plans
            .iter()
            .map(|p| {
                ChildRow::new()
                    .field("plan_type", p.plan_type.as_str())
                    .field("plan_month", i64::from(p.plan_month))
                    .field("price", format!("{:.2}", p.price))
            })
            .collect()
    }
}

fn catalog_columns() -> Vec<Column<ExamRow>> {
    vec![
        Column::new("ID", 4, |r: &ExamRow| Some(r.exam.id.to_string().into())).sortable(),
        Column::new("Title", 28, |r: &ExamRow| {
            Some(r.exam.title.as_str().into())
        })
        .sortable(),
        Column::new("Category", 12, |r: &ExamRow| {
            Some(r.exam.category.as_str().into())
        }),
        Column::new("Price", 8, |r: &ExamRow| Some(r.exam.price.into()))
            .renderer(|r| format!("${:.2}", r.exam.price)),
        Column::new("Published", 9, |r: &ExamRow| Some(r.exam.published.into()))
            .renderer(|r| if r.exam.published { "yes" } else { "no" }.to_string()),
    ]
}

fn detail_headers() -> HeaderNames {
    HeaderNames::new()
        .label_for("plan_type", "Plan")
        .label_for("plan_month", "Months")
        .label_for("price", "Price")
        .label_for("material", "Material")
        .label_for("format", "Format")
        .label_for("pages", "Pages")
}

/// The admin-console application model.
pub struct App {
    store: Store,
    grid: Grid<ExamRow>,
    status: String,
}

impl App {
    /// Creates the app over a store and loads the first page.
    #[must_use]
    pub fn new(store: Store, per_page: usize, plain: bool) -> Self {
        let mut grid = Grid::new()
            .columns(catalog_columns())
            .header_names(detail_headers())
            .per_page(per_page)
            .actions(true)
            .focused(true);
        if plain {
            grid = grid.with_styles(Styles::plain());
        }

        let mut app = Self {
            store,
            grid,
            status: String::from("ready"),
        };
        app.refresh();
        app
    }

    /// Returns the grid (read-only, for assertions).
    #[must_use]
    pub fn grid(&self) -> &Grid<ExamRow> {
        &self.grid
    }

    /// Re-fetches the grid's current page from the store.
    ///
    /// Deleting the last row of the last page shrinks the page count;
    /// the pager clamps and the fetch follows the clamped page.
    fn refresh(&mut self) {
        let per_page = self.grid.paginator().get_per_page();
        self.grid.set_total_records(self.store.len());

        let page = self.grid.paginator().page();
        let resp = self.store.list(page, per_page);
        self.grid
            .set_rows(resp.data.into_iter().map(ExamRow::new).collect());
    }

    /// Feeds a message to the grid and acts on the intent it reports.
    pub fn update(&mut self, msg: &Msg) {
        match self.grid.update(msg) {
            Some(GridMsg::PageChange { page, per_page }) => {
                tracing::debug!(page, per_page, "page change requested");
                let resp = self.store.list(page, per_page);
                self.grid.set_total_records(resp.total);
                self.grid
                    .set_rows(resp.data.into_iter().map(ExamRow::new).collect());
                self.status = format!("page {}", page + 1);
            }
            Some(GridMsg::Edit(row)) => {
                tracing::info!(id = row.exam.id, "edit requested");
                // Editing happens in an external form; the console only
                // reports where the user would be taken.
                self.status = format!("edit exam #{} (external form ?id={})", row.exam.id, row.exam.id);
            }
            Some(GridMsg::Delete(row)) => {
                match self.store.delete(row.exam.id) {
                    Ok(()) => self.status = format!("deleted exam #{}", row.exam.id),
                    Err(err) => self.status = err.to_string(),
                }
                self.refresh();
            }
            None => {}
        }
    }

    /// Renders the full console frame.
    #[must_use]
    pub fn view(&self) -> String {
        format!(
            "Exam Catalog · admin console\n\n{}\n{}\n{}",
            self.grid.view(),
            self.status,
            self.help_line(),
        )
    }

    /// Builds the help line from the grid's live key bindings.
    fn help_line(&self) -> String {
        let km = &self.grid.key_map;
        let mut parts: Vec<String> = [
            &km.cursor_up,
            &km.cursor_down,
            &km.toggle_expand,
            &km.prev_page,
            &km.next_page,
            &km.edit,
            &km.delete,
        ]
        .iter()
        .filter(|b| b.enabled())
        .map(|b| {
            let help = b.get_help();
            format!("{} {}", help.key, help.desc)
        })
        .collect();
        parts.push("q quit".to_string());
        parts.join(" · ")
    }
}
