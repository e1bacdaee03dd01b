// Example: feeding measured heights back and re-rendering at the same scroll position.
use virtual_window::{Item, ListConfig, VirtualList};

fn main() {
    let items: Vec<Item<u64, &str>> = (0..200u64).map(|i| Item::new(i, "message")).collect();
    let config = ListConfig::new(40, 400).with_buffer_size(2).with_overscan(1);
    let mut list = VirtualList::with_items(config, items);

    let update = list.update_scroll_top(800);
    println!("before: {:?} total={}", update.range.span, update.scroll_height);

    // The host measured a few rendered rows.
    for (id, height) in [(20u64, 120u32), (21, 64), (22, 18)] {
        let delta = list.set_item_height(&id, height);
        println!("row {id}: {height}px (total {delta:+})");
    }

    let update = list.refresh();
    println!(
        "after: {:?} offset_top={} total={} needs_update={}",
        update.range.span, update.range.offset_top, update.scroll_height, update.needs_update
    );
    println!("row 23 at {:?}", list.item_position(23));
}
