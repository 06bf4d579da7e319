// Example: pagination by appending pages as the end comes into view.
use vscroll::{HeightSpec, ListOptions, VirtualList};

const PAGE: usize = 50;

fn main() {
    let spec = HeightSpec::Fixed(64.0);
    let mut items: Vec<usize> = (0..PAGE).collect();

    let mut list = VirtualList::new(ListOptions::default());
    list.on_resize(360.0, 640.0);
    list.sync(items.len(), &spec);

    let mut now_ms = 0;
    let mut top = 0.0;
    while items.len() < 5 * PAGE {
        now_ms += 16;
        top += 400.0;
        list.on_scroll(top, now_ms);

        if list.is_end_reached(320.0) {
            let start = items.len();
            items.extend(start..start + PAGE);
            // Only the new page is measured.
            list.append(items.len(), &spec);
            println!("t={now_ms} loaded page, len={} total={}", items.len(), list.total_height());
        }
    }

    let frame = list.render(&items, &spec);
    println!("range={:?} is_scrolling={}", frame.range, frame.is_scrolling);
}
