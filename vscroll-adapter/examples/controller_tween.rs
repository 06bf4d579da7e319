use vscroll::{Align, HeightSpec, ListOptions, VirtualList};
use vscroll_adapter::{Controller, ControllerOptions, Easing, SimulatedContainer, SmoothScroll};

fn main() {
    // Example: a host without native smooth scrolling, driven from a 60fps timer.
    //
    // The host would:
    // - attach its scroll container once mounted
    // - forward scroll/resize events
    // - call tick(now_ms) at next_deadline() (every frame while animating)
    // - render using the engine
    let items: Vec<u32> = (0..10_000).collect();
    let spec = HeightSpec::Fixed(20.0);

    let mut list = VirtualList::new(ListOptions::default());
    list.sync(items.len(), &spec);

    let options = ControllerOptions::default().with_smooth_scroll(SmoothScroll::Tween {
        duration_ms: 240,
        easing: Easing::SmoothStep,
    });
    let mut c = Controller::new(list, options);
    c.set_on_end_reached(|| println!("end reached"));
    c.attach(SimulatedContainer::new(300.0, 400.0, 200_000.0));

    let target = c.scroll_to_index(2_000, Align::Center, 0);
    println!("target={target:?}");

    let mut now_ms = 0u64;
    while let Some(deadline) = c.next_deadline() {
        now_ms = (now_ms + 16).max(deadline);
        if let Some(top) = c.tick(now_ms) {
            // The container echoes the programmatic scroll.
            c.on_scroll_event(now_ms);
            if now_ms % 80 == 0 {
                println!(
                    "t={now_ms} top={top} visible={:?}",
                    c.engine().resolved_range()
                );
            }
        }
    }

    let frame = c.engine_mut().render(&items, &spec);
    println!(
        "settled at t={now_ms}: top={} range={:?} is_scrolling={}",
        c.scroll_top(),
        frame.range,
        frame.is_scrolling
    );

    c.dispose();
}
