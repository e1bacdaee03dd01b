// Example: a million fixed-height rows, one scroll update and a scroll-to target.
use virtual_window::{Align, Item, ListConfig, VirtualList};

fn main() {
    let items: Vec<Item<u64, String>> = (0..1_000_000u64)
        .map(|i| Item::new(i, format!("row {i}")))
        .collect();
    let mut list = VirtualList::with_items(ListConfig::new(24, 480), items);

    let update = list.update_scroll_top(123_456);
    println!("needs_update={}", update.needs_update);
    println!("range={:?}", update.range);
    println!("scroll_height={}", update.scroll_height);
    println!("first_rendered={:?}", list.visible_items().first().map(|i| &i.data));

    let target = list.scroll_to_index_aligned(999_999, Align::End);
    let update = list.update_scroll_top(target);
    println!("after scroll_to_index: offset={} span={:?}", target, update.range.span);
}
