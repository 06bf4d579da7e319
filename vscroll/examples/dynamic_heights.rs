// Example: per-item heights with a gap, and the memoized index.
use vscroll::{Align, HeightSpec, ListOptions, VirtualList};

fn main() {
    let messages: Vec<String> = (0..500)
        .map(|i| "lorem ipsum ".repeat(1 + i % 7))
        .collect();

    // Rough line wrapping: 40 characters per 18px line, plus padding.
    let heights: Vec<f64> = messages
        .iter()
        .map(|m| 16.0 + 18.0 * m.len().div_ceil(40) as f64)
        .collect();
    let spec = HeightSpec::dynamic(move |i| heights[i]);

    let mut list = VirtualList::new(ListOptions::default().with_gap(8.0));
    list.on_resize(320.0, 600.0);

    let frame = list.render(&messages, &spec);
    println!("total_height={} items={}", frame.total_height, frame.items.len());

    // Same spec handle, same count: no rebuild.
    list.scroll_to_index(250, Align::Center);
    list.for_each_virtual_item(&messages, |it| {
        if it.index % 5 == 0 {
            println!("#{} top={} height={}", it.index, it.offset_top, it.height);
        }
    });
}
