use crate::*;

use alloc::vec::Vec;
use virtual_window::{Item, ItemPosition, Span};

fn rows(count: usize) -> Vec<Item<u64, usize>> {
    (0..count).map(|i| Item::new(i as u64, i)).collect()
}

fn abc_columns() -> Vec<Column<&'static str>> {
    alloc::vec![
        Column::new("a", 100).with_fixed(FixedSide::Left),
        Column::new("b", 100),
        Column::new("c", 100),
    ]
}

fn no_margin(width: u32, height: u32) -> TableConfig {
    TableConfig::new(20, 100)
        .with_container(width, height)
        .with_buffer_size(0)
        .with_overscan(0)
}

fn visible_ids<T>(table: &VirtualTable<T, u64, &'static str>) -> Vec<&'static str> {
    table.visible_columns().map(|c| c.id).collect()
}

#[test]
fn left_fixed_column_stays_visible_past_scroll() {
    let mut table = VirtualTable::with_data(no_margin(200, 100), rows(10), abc_columns());
    let update = table.update_scroll_position(0, 150);

    assert!(update.needs_update);
    assert_eq!(
        update.range.columns,
        Some(Span {
            start_index: 1,
            end_index: 1
        })
    );
    assert_eq!(update.range.column_offset_left, 100);
    assert_eq!(visible_ids(&table), ["a", "c"]);
}

#[test]
fn fixed_columns_are_excluded_from_scrollable_width() {
    let columns = alloc::vec![
        Column::new("l", 60).with_fixed(FixedSide::Left),
        Column::new("x", 100),
        Column::new("y", 150),
        Column::new("r", 40).with_fixed(FixedSide::Right),
    ];
    let mut table = VirtualTable::with_data(no_margin(300, 100), rows(5), columns);
    assert_eq!(table.total_column_width(), 250);
    assert_eq!(table.fixed_left_width(), 60);
    assert_eq!(table.fixed_right_width(), 40);
    // 300 - 60 - 40 = 200 px for scrollable columns.
    assert_eq!(table.max_scroll_left(), 50);

    let update = table.update_scroll_position(0, 0);
    assert_eq!(update.range.total_column_width, 250);
    assert_eq!(
        update.range.columns,
        Some(Span {
            start_index: 0,
            end_index: 1
        })
    );
    assert_eq!(visible_ids(&table), ["l", "x", "y", "r"]);
}

#[test]
fn column_positions_by_strip() {
    let columns = alloc::vec![
        Column::new("l1", 30).with_fixed(FixedSide::Left),
        Column::new("x", 100),
        Column::new("l2", 20).with_fixed(FixedSide::Left),
        Column::new("y", 50),
        Column::new("r1", 10).with_fixed(FixedSide::Right),
        Column::new("r2", 15).with_fixed(FixedSide::Right),
    ];
    let table: VirtualTable<(), u64, &str> =
        VirtualTable::with_data(no_margin(400, 100), Vec::new(), columns);

    let left = |i| table.column_position(i).map(|p| p.left);
    assert_eq!(left(0), Some(0));
    assert_eq!(left(1), Some(0));
    assert_eq!(left(2), Some(30));
    assert_eq!(left(3), Some(100));
    assert_eq!(left(4), Some(0));
    assert_eq!(left(5), Some(10));
    assert_eq!(table.column_position(6), None);
    assert_eq!(
        table.column_position(2).and_then(|p| p.fixed),
        Some(FixedSide::Left)
    );

    assert_eq!(table.scroll_to_column(&"y"), Some(100));
    assert_eq!(table.scroll_to_column(&"l2"), None);
    assert_eq!(table.scroll_to_column(&"missing"), None);
}

#[test]
fn needs_update_is_or_of_axes() {
    let mut table = VirtualTable::with_data(no_margin(200, 100), rows(100), abc_columns());
    table.update_scroll_position(0, 0);

    let update = table.update_scroll_position(0, 0);
    assert!(!update.needs_update);

    let update = table.update_scroll_position(40, 0);
    assert!(update.needs_update);
    assert!(update.rows_changed);
    assert!(!update.columns_changed);

    let update = table.update_scroll_position(40, 100);
    assert!(update.needs_update);
    assert!(!update.rows_changed);
    assert!(update.columns_changed);

    let update = table.update_scroll_position(40, 100);
    assert!(!update.needs_update);
}

#[test]
fn rows_window_like_a_list() {
    let config = TableConfig::new(50, 100)
        .with_container(300, 500)
        .with_buffer_size(5)
        .with_overscan(2);
    let mut table = VirtualTable::with_data(config, rows(1000), abc_columns());
    let update = table.update_scroll_position(1000, 0);

    assert_eq!(
        update.range.rows,
        Some(Span {
            start_index: 13,
            end_index: 37
        })
    );
    assert_eq!(update.range.row_offset_top, 650);
    assert_eq!(update.range.total_row_height, 50_000);
    assert_eq!(table.visible_rows().len(), 25);
    assert_eq!(table.visible_rows()[0].data, 13);
}

#[test]
fn column_width_respects_bounds() {
    let columns = alloc::vec![
        Column::new("a", 100).with_min_width(80).with_max_width(150),
        Column::new("b", 0),
        Column::new("f", 50).with_fixed(FixedSide::Left),
    ];
    let mut table: VirtualTable<(), u64, &str> =
        VirtualTable::with_data(no_margin(400, 100), Vec::new(), columns);
    // "b" falls back to the default width.
    assert_eq!(table.total_column_width(), 200);

    assert_eq!(table.set_column_width(&"a", 500), 50);
    assert_eq!(table.column_position(0).map(|p| p.width), Some(150));
    assert_eq!(table.set_column_width(&"a", 10), -70);
    assert_eq!(table.column_position(0).map(|p| p.width), Some(80));
    assert_eq!(table.column_position(1).map(|p| p.left), Some(80));
    assert_eq!(table.total_column_width(), 180);

    assert_eq!(table.set_column_width(&"f", 70), 20);
    assert_eq!(table.fixed_left_width(), 70);
    assert_eq!(table.total_column_width(), 180);

    assert_eq!(table.set_column_width(&"nope", 70), 0);
    assert_eq!(table.set_column_width(&"a", 0), 0);
}

#[test]
fn default_column_width_change_reflows_zero_width_columns() {
    let columns = alloc::vec![Column::new("a", 0), Column::new("b", 30)];
    let mut table: VirtualTable<(), u64, &str> =
        VirtualTable::with_data(no_margin(400, 100), Vec::new(), columns);
    assert_eq!(table.total_column_width(), 130);

    table.update_config(|c| c.column_width = 60);
    assert_eq!(table.total_column_width(), 90);
}

#[test]
fn container_width_change_invalidates_columns_only() {
    let mut table = VirtualTable::with_data(no_margin(200, 100), rows(10), abc_columns());
    table.update_scroll_position(0, 0);

    table.update_config(|c| c.container_width = 250);
    let update = table.update_scroll_position(0, 0);
    assert!(update.columns_changed);
    assert!(!update.rows_changed);
}

#[test]
fn row_height_override_shifts_later_rows() {
    let mut table = VirtualTable::with_data(no_margin(200, 100), rows(10), abc_columns());
    table.update_scroll_position(0, 0);

    assert_eq!(table.set_row_height(&3, 50), 30);
    assert_eq!(table.row_position(3), Some(ItemPosition { top: 60, height: 50 }));
    assert_eq!(table.row_position(4).map(|p| p.top), Some(110));
    assert_eq!(table.total_row_height(), 230);
    assert!(table.update_scroll_position(0, 0).rows_changed);

    assert_eq!(table.set_row_height(&99, 50), 0);
    assert_eq!(table.scroll_to_row(4), 110);
    assert_eq!(table.scroll_to_row(1_000), 210);
}

#[test]
fn measured_row_height_survives_row_height_change() {
    let mut table = VirtualTable::with_data(no_margin(200, 100), rows(5), abc_columns());
    table.update_scroll_position(0, 0);

    assert_eq!(table.set_row_height(&2, 20), 0);
    assert_eq!(table.rows()[2].height, Some(20));

    table.update_config(|c| c.row_height = 30);
    assert_eq!(table.row_position(2), Some(ItemPosition { top: 60, height: 20 }));
    assert_eq!(table.total_row_height(), 140);
    assert_eq!(table.row_list().config().item_height, 30);

    let update = table.update_scroll_position(0, 0);
    assert!(update.rows_changed);
    assert!(!update.columns_changed);
}

#[test]
fn row_axis_follows_table_config() {
    let mut table = VirtualTable::with_data(no_margin(200, 100), rows(50), abc_columns());
    table.update_config(|c| {
        c.container_height = 60;
        c.buffer_size = 1;
    });
    let list = table.row_list().config();
    assert_eq!(list.container_height, 60);
    assert_eq!(list.buffer_size, 1);
    assert_eq!(list.overscan, 0);

    let update = table.update_scroll_position(100, 0);
    // Rows 5..=8 touch the viewport; one buffer row on each side.
    assert_eq!(
        update.range.rows,
        Some(Span {
            start_index: 4,
            end_index: 9
        })
    );
    assert_eq!(update.range.row_offset_top, 80);
}

#[test]
fn empty_table_is_harmless() {
    let mut table: VirtualTable<(), u64, &str> = VirtualTable::new(TableConfig::default());
    let update = table.update_scroll_position(500, 500);
    assert_eq!(update.range.rows, None);
    assert_eq!(update.range.columns, None);
    assert_eq!(update.range.total_row_height, 0);
    assert_eq!(update.range.total_column_width, 0);
    assert!(table.visible_rows().is_empty());
    assert_eq!(table.visible_columns().count(), 0);
    assert_eq!(table.row_position(0), None);
}

#[test]
fn only_fixed_columns_are_always_visible() {
    let columns = alloc::vec![
        Column::new("l", 50).with_fixed(FixedSide::Left),
        Column::new("r", 50).with_fixed(FixedSide::Right),
    ];
    let mut table = VirtualTable::with_data(no_margin(80, 100), rows(3), columns);
    let update = table.update_scroll_position(0, 1_000);
    assert_eq!(update.range.columns, None);
    assert_eq!(visible_ids(&table), ["l", "r"]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fixed_columns_always_visible(
            widths in proptest::collection::vec((1u32..200, 0u8..4), 1..40),
            container in 0u32..1200,
            scroll_left in 0u64..10_000,
            margin in 0usize..4,
        ) {
            let columns: Vec<Column<usize>> = widths
                .iter()
                .enumerate()
                .map(|(i, &(w, kind))| {
                    let column = Column::new(i, w);
                    match kind {
                        0 => column.with_fixed(FixedSide::Left),
                        1 => column.with_fixed(FixedSide::Right),
                        _ => column,
                    }
                })
                .collect();
            let config = TableConfig::new(20, 100)
                .with_container(container, 100)
                .with_buffer_size(margin)
                .with_overscan(0);
            let mut table: VirtualTable<(), u64, usize> =
                VirtualTable::with_data(config, Vec::new(), columns.clone());
            let update = table.update_scroll_position(0, scroll_left);

            let visible: Vec<usize> = table.visible_columns().map(|c| c.id).collect();
            for column in columns.iter().filter(|c| c.is_fixed()) {
                prop_assert!(visible.contains(&column.id));
            }
            let scrollable = columns.iter().filter(|c| !c.is_fixed()).count();
            match update.range.columns {
                Some(span) => prop_assert!(span.end_index < scrollable),
                None => prop_assert_eq!(scrollable, 0),
            }
            let expected: u64 = columns
                .iter()
                .filter(|c| !c.is_fixed())
                .map(|c| c.width as u64)
                .sum();
            prop_assert_eq!(update.range.total_column_width, expected);
        }
    }
}
