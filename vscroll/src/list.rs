use alloc::vec::Vec;

use crate::height::sanitize;
use crate::offsets::OffsetIndex;
use crate::resize::ContainerSize;
use crate::scroll::{ScrollSession, scroll_top_for};
use crate::{
    Align, HeightSpec, ListOptions, Phase, ResolvedRange, ScrollState, ViewportState,
    VirtualItem, projector, range,
};

/// Everything a caller needs to draw one frame of a virtual list.
#[derive(Debug)]
pub struct ListFrame<'a, T> {
    /// Positioned descriptors for the overscanned range, in index order.
    pub items: Vec<VirtualItem<'a, T>>,
    /// Height of the full scrollable content.
    pub total_height: f64,
    pub is_scrolling: bool,
    /// `None` when the list is empty.
    pub range: Option<ResolvedRange>,
}

impl<T> ListFrame<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A headless windowed list engine.
///
/// One instance owns its offset index, viewport state and scroll session; nothing is shared
/// between instances. The item slice stays owned by the caller and is only borrowed, never
/// mutated.
///
/// A host drives the engine by reporting scroll and resize events and calling
/// [`Self::render`] whenever it needs a frame. For attach/detach, timers and smooth
/// scrolling, see the `vscroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct VirtualList {
    options: ListOptions,
    index: OffsetIndex,
    size: ContainerSize,
    session: ScrollSession,
    stale: bool,
}

impl VirtualList {
    pub fn new(options: ListOptions) -> Self {
        vdebug!(
            overscan = options.overscan,
            delay_ms = options.scrolling_delay_ms,
            "VirtualList::new"
        );
        Self {
            index: OffsetIndex::empty(),
            size: ContainerSize::new(options.container_height),
            session: ScrollSession::new(options.scrolling_delay_ms),
            stale: true,
            options,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ListOptions) {
        if sanitize(options.gap) != sanitize(self.options.gap) {
            self.stale = true;
        }
        self.size.set_explicit_height(options.container_height);
        self.session.set_delay_ms(options.scrolling_delay_ms);
        self.options = options;
        vtrace!(
            overscan = self.options.overscan,
            stale = self.stale,
            "VirtualList::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Brings the offset index up to date for `count` items.
    ///
    /// Rebuilds only when the count, the height spec or the gap changed since the last
    /// build, or after [`Self::invalidate`].
    pub fn sync(&mut self, count: usize, spec: &HeightSpec) {
        if !self.stale && self.index.is_built_for(count, spec, self.options.gap) {
            return;
        }
        vdebug!(
            count,
            previous = self.index.len(),
            "VirtualList: rebuilding offset index"
        );
        self.index = OffsetIndex::build(count, spec, self.options.gap);
        self.stale = false;
    }

    /// Resolves, projects and returns the current frame.
    pub fn render<'a, T>(&mut self, items: &'a [T], spec: &HeightSpec) -> ListFrame<'a, T> {
        self.sync(items.len(), spec);
        let range = self.resolved_range();
        let items = match range {
            Some(r) => projector::project(&self.index, items, r.overscanned),
            None => Vec::new(),
        };
        ListFrame {
            items,
            total_height: self.index.total_height(),
            is_scrolling: self.session.is_scrolling(),
            range,
        }
    }

    /// Extends the offset index for items appended at the end of the list.
    ///
    /// Only the new items are measured. Use this for infinite-scroll pagination where existing
    /// items keep their heights; anything else should go through `render`/`sync`.
    pub fn append(&mut self, new_count: usize, spec: &HeightSpec) {
        if self.stale {
            self.sync(new_count, spec);
            return;
        }
        self.index.extend(new_count, spec);
    }

    /// Forces a rebuild on the next `sync`/`render`.
    ///
    /// Call this after reordering or replacing items without changing their count.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn offsets(&self) -> &OffsetIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn total_height(&self) -> f64 {
        self.index.total_height()
    }

    pub fn container_height(&self) -> f64 {
        self.size.height()
    }

    pub fn container_width(&self) -> f64 {
        self.size.width()
    }

    pub fn scroll_top(&self) -> f64 {
        self.session.scroll_top()
    }

    pub fn is_scrolling(&self) -> bool {
        self.session.is_scrolling()
    }

    pub fn phase(&self) -> Phase {
        if self.index.is_empty() {
            Phase::Idle
        } else if self.session.is_scrolling() {
            Phase::Scrolling
        } else {
            Phase::Populated
        }
    }

    /// Applies a scroll event reported by the host and marks the list as scrolling.
    pub fn on_scroll(&mut self, scroll_top: f64, now_ms: u64) {
        self.session.on_scroll(scroll_top, now_ms);
    }

    /// Fires the `is_scrolling` debounce. Returns `true` when scrolling just settled.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.session.tick(now_ms)
    }

    /// When the pending `is_scrolling` debounce fires, if armed.
    pub fn scroll_deadline(&self) -> Option<u64> {
        self.session.deadline()
    }

    pub fn cancel_scrolling(&mut self) {
        self.session.cancel();
    }

    /// Applies a container resize observation.
    ///
    /// Returns `true` when the effective viewport changed. An explicit `container_height`
    /// option is never overridden.
    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        self.size.observe(width, height)
    }

    /// The visible range for the current viewport, using the last synced index.
    pub fn resolved_range(&self) -> Option<ResolvedRange> {
        range::resolve(
            &self.index,
            self.session.scroll_top(),
            self.size.height(),
            self.options.overscan,
        )
    }

    /// Same as [`Self::resolved_range`], for an arbitrary scroll position and height.
    pub fn resolved_range_for(
        &self,
        scroll_top: f64,
        container_height: f64,
    ) -> Option<ResolvedRange> {
        range::resolve(
            &self.index,
            scroll_top,
            container_height,
            self.options.overscan,
        )
    }

    /// Iterates the current overscanned range without allocating.
    pub fn for_each_virtual_item<'a, T>(
        &self,
        items: &'a [T],
        f: impl FnMut(VirtualItem<'a, T>),
    ) {
        if let Some(r) = self.resolved_range() {
            projector::for_each_item(&self.index, items, r.overscanned, f);
        }
    }

    /// Collects the current overscanned range into `out` (clears `out` first).
    pub fn collect_virtual_items<'a, T>(
        &self,
        items: &'a [T],
        out: &mut Vec<VirtualItem<'a, T>>,
    ) {
        out.clear();
        self.for_each_virtual_item(items, |it| out.push(it));
    }

    /// Computes the scroll position that aligns `index` in the viewport.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn scroll_target(&self, index: usize, align: Align) -> Option<f64> {
        let height = self.index.height(index)?;
        let offset = self.index.start_of(index);
        Some(scroll_top_for(offset, height, self.size.height(), align))
    }

    /// Jumps to `index` immediately (no animation, no scrolling burst).
    ///
    /// The target is clamped to the last full page. Returns the applied position, or `None`
    /// (without side effects) when `index` is out of range.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Option<f64> {
        let Some(target) = self.scroll_target(index, align) else {
            vtrace!(index, len = self.index.len(), "scroll_to_index: out of range");
            return None;
        };
        let top = range::clamp_scroll_top(&self.index, target, self.size.height());
        self.session.set_scroll_top(top);
        Some(top)
    }

    /// Returns `true` when fewer than `threshold` pixels of content remain below the viewport.
    pub fn is_end_reached(&self, threshold: f64) -> bool {
        let view = self.size.height();
        let top = range::clamp_scroll_top(&self.index, self.session.scroll_top(), view);
        self.index.total_height() - top - view < threshold
    }

    pub fn viewport(&self) -> ViewportState {
        ViewportState {
            scroll_top: self.session.scroll_top(),
            container_height: self.size.height(),
            container_width: self.size.width(),
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            scroll_top: self.session.scroll_top(),
            is_scrolling: self.session.is_scrolling(),
        }
    }

    /// Restores a previously captured viewport without starting a scroll burst.
    pub fn restore_viewport(&mut self, viewport: ViewportState) {
        self.size
            .observe(viewport.container_width, viewport.container_height);
        self.session.set_scroll_top(viewport.scroll_top);
    }
}

impl Default for VirtualList {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}
