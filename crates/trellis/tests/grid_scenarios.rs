//! End-to-end scenarios for the grid rendered as plain text.

use crossterm::event::{KeyCode, KeyModifiers};
use trellis::column::Column;
use trellis::event::{KeyMsg, Msg};
use trellis::grid::{Grid, GridMsg};
use trellis::row::{GridRow, RowKey};
use trellis::style::Styles;
use trellis::value::ChildRow;

#[derive(Debug, Clone, PartialEq)]
struct Exam {
    id: String,
    title: String,
    plans: Vec<ChildRow>,
}

impl GridRow for Exam {
    fn key(&self) -> RowKey {
        RowKey::from(self.id.as_str())
    }

    fn children(&self) -> &[ChildRow] {
        &self.plans
    }
}

fn exam_grid() -> Grid<Exam> {
    let rows = vec![
        Exam {
            id: "1".into(),
            title: "Exam A".into(),
            plans: vec![
                ChildRow::new()
                    .field("plan_type", "Gold")
                    .field("plan_month", "3"),
            ],
        },
        Exam {
            id: "2".into(),
            title: "Exam B".into(),
            plans: vec![],
        },
    ];

    Grid::new()
        .columns(vec![Column::new("Title", 20, |e: &Exam| {
            Some(e.title.as_str().into())
        })])
        .rows(rows)
        .per_page(10)
        .total_records(2)
        .focused(true)
        .with_styles(Styles::plain())
}

fn press(grid: &mut Grid<Exam>, code: KeyCode) -> Option<GridMsg<Exam>> {
    grid.update(&Msg::new(KeyMsg::new(code, KeyModifiers::NONE)))
}

#[test]
fn expand_shows_nested_table_and_leaves_siblings_alone() {
    let mut grid = exam_grid();

    // Only the row with children carries an expand control.
    let view = grid.view();
    let lines: Vec<&str> = view.lines().collect();
    assert!(lines[1].starts_with('▸'), "Exam A should be expandable");
    assert!(lines[2].starts_with(' '), "Exam B is leaf-only");

    grid.toggle_row(&RowKey::from("1"));
    let view = grid.view();
    assert!(view.contains("PLAN_TYPE"));
    assert!(view.contains("PLAN_MONTH"));
    assert!(view.contains("Gold"));
    assert!(view.contains('3'));

    // Collapsing hides the nested table; Exam B is untouched.
    grid.toggle_row(&RowKey::from("1"));
    let view = grid.view();
    assert!(!view.contains("PLAN_TYPE"));
    assert!(view.contains("Exam B"));
}

#[test]
fn leaf_row_cannot_be_expanded_via_keyboard() {
    let mut grid = exam_grid();

    press(&mut grid, KeyCode::Down);
    press(&mut grid, KeyCode::Enter);

    assert!(grid.expansion().is_empty());
    assert!(!grid.view().contains("No additional details."));
}

#[test]
fn nested_table_rows_keep_input_order() {
    let mut grid = exam_grid();
    grid.set_rows(vec![Exam {
        id: "1".into(),
        title: "Exam A".into(),
        plans: vec![
            ChildRow::new().field("a", "1").field("b", "2"),
            ChildRow::new().field("a", "3").field("b", "4"),
        ],
    }]);

    grid.toggle_row(&RowKey::from("1"));
    let view = grid.view();
    let lines: Vec<&str> = view.lines().collect();

    // Header, parent row, nested header, two nested rows in order, footer.
    assert_eq!(lines.len(), 6);
    assert!(lines[2].contains('A') && lines[2].contains('B'));
    assert!(lines[3].contains('1') && lines[3].contains('2'));
    assert!(lines[4].contains('3') && lines[4].contains('4'));
}

#[test]
fn short_last_page_renders_without_error() {
    let mut grid = exam_grid();
    grid.set_total_records(23);

    assert_eq!(grid.paginator().get_total_pages(), 3);

    // Walk to page 3; the owner would normally supply fresh rows, here
    // the last page holds a lone record.
    assert!(matches!(
        press(&mut grid, KeyCode::Right),
        Some(GridMsg::PageChange { page: 1, .. })
    ));
    assert!(matches!(
        press(&mut grid, KeyCode::Right),
        Some(GridMsg::PageChange { page: 2, .. })
    ));

    grid.set_rows(vec![Exam {
        id: "23".into(),
        title: "Exam W".into(),
        plans: vec![],
    }]);

    let view = grid.view();
    assert!(view.contains("Exam W"));
    assert!(view.contains("page 3/3"));
}

#[test]
fn numeric_and_string_ids_share_expansion_keys() {
    let mut grid = exam_grid();

    grid.toggle_row(&RowKey::from("1"));
    assert!(grid.expansion().is_expanded(&RowKey::from(1i64)));
}
