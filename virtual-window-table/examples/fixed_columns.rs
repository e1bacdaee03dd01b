// Example: a wide grid with a pinned id column on the left and an actions column on the right.
use virtual_window::Item;
use virtual_window_table::{Column, FixedSide, TableConfig, VirtualTable};

fn main() {
    let mut columns = vec![Column::new("id".to_string(), 80).with_fixed(FixedSide::Left)];
    columns.extend((0..50).map(|i| Column::new(format!("c{i}"), 0)));
    columns.push(Column::new("actions".to_string(), 96).with_fixed(FixedSide::Right));

    let rows: Vec<Item<u64, u64>> = (0..100_000u64).map(|i| Item::new(i, i * 7)).collect();
    let config = TableConfig::new(32, 120).with_container(1024, 640);
    let mut table = VirtualTable::with_data(config, rows, columns);

    let update = table.update_scroll_position(64_000, 2_500);
    println!("range={:?}", update.range);
    println!(
        "fixed_left={} fixed_right={} max_scroll_left={}",
        table.fixed_left_width(),
        table.fixed_right_width(),
        table.max_scroll_left()
    );
    let ids: Vec<&str> = table.visible_columns().map(|c| c.id.as_str()).collect();
    println!("columns={ids:?}");
    println!("rows={}", table.visible_rows().len());

    if let Some(left) = table.scroll_to_column(&"c40".to_string()) {
        let update = table.update_scroll_position(table.scroll_top(), left);
        println!("after scroll_to_column: {:?}", update.range.columns);
    }
}
