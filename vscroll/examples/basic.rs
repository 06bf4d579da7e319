// Example: a million fixed-height rows, then a jump to the last one.
use vscroll::{Align, HeightSpec, ListOptions, VirtualList};

fn main() {
    let items: Vec<u32> = (0..1_000_000).collect();
    let spec = HeightSpec::Fixed(24.0);

    let mut list = VirtualList::new(ListOptions::default().with_overscan(2));
    list.on_resize(480.0, 240.0);
    list.on_scroll(123_456.0, 0);

    let frame = list.render(&items, &spec);
    println!("total_height={}", frame.total_height);
    println!("range={:?}", frame.range);
    println!("first={:?}", frame.items.first());

    let target = list.scroll_to_index(999_999, Align::End);
    println!("after scroll_to_index: target={target:?} range={:?}", list.resolved_range());

    list.tick(150);
    println!("is_scrolling={}", list.is_scrolling());
}
