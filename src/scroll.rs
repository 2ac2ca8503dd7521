//! Collapse/scroll state and the explicit scroll-routing chain.
//!
//! A scroll delta delivered to a [`CollapsingHeader`](crate::ui::widgets::collapsing_header::CollapsingHeader)
//! is consumed by an ordered sequence of three stages within the same event:
//!
//! 1. [`CollapseState::pre_scroll`] — the header eats collapse-direction
//!    deltas until it is fully collapsed.
//! 2. [`ListState::scroll_by`] — the content list takes what it can.
//! 3. [`CollapseState::post_scroll`] — once the list is back at its top,
//!    remaining expand-direction deltas re-open the header.
//!
//! Ordering matters: the header's offset is always updated before the list
//! position within one event, so the band and the rows move in lockstep.
//! No fling or decay physics — position follows input deltas directly.
//!
//! Sign convention: `delta` is the raw vertical wheel delta in points.
//! Negative moves content up (collapsing), positive moves content down.

// ── Header collapse state ──────────────────────────────────────────────────────

/// How far the header has collapsed, in points.
///
/// `offset` is clamped to `[0, distance]` on every mutation, never only at
/// read time; rapid scroll reversals therefore cannot push it out of range.
#[derive(Debug, Clone, Copy)]
pub struct CollapseState {
    offset: f32,
    distance: f32,
}

impl CollapseState {
    /// Fully-expanded state that collapses over `distance` points.
    pub fn new(distance: f32) -> Self {
        Self {
            offset: 0.0,
            distance: distance.max(0.0),
        }
    }

    /// Normalised collapse progress: 0 = expanded, 1 = collapsed.
    ///
    /// Always derived from `offset` and `distance`, never stored, so the two
    /// cannot diverge. A zero distance reports 0 (nothing to collapse over).
    pub fn fraction(&self) -> f32 {
        if self.distance <= 0.0 {
            return 0.0;
        }
        (self.offset / self.distance).clamp(0.0, 1.0)
    }

    /// Current collapse offset in points, in `[0, distance]`.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The configured collapse distance in points.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn is_collapsed(&self) -> bool {
        self.offset >= self.distance
    }

    /// Stage 1: consume collapse-direction deltas (`delta < 0`) until fully
    /// collapsed. Returns the consumed portion (≤ 0).
    pub fn pre_scroll(&mut self, delta: f32) -> f32 {
        if delta >= 0.0 {
            return 0.0;
        }
        let headroom = self.distance - self.offset;
        let consumed = delta.max(-headroom);
        self.offset = (self.offset - consumed).clamp(0.0, self.distance);
        consumed
    }

    /// Stage 3: consume expand-direction deltas (`delta > 0`) that the list
    /// left over. Returns the consumed portion (≥ 0).
    pub fn post_scroll(&mut self, delta: f32) -> f32 {
        if delta <= 0.0 {
            return 0.0;
        }
        let consumed = delta.min(self.offset);
        self.offset = (self.offset - consumed).clamp(0.0, self.distance);
        consumed
    }
}

// ── List scroll state ──────────────────────────────────────────────────────────

/// The content list's own scroll position, in points from the top.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListState {
    offset: f32,
    max_offset: f32,
}

impl ListState {
    /// Recompute the scrollable range from measured viewport/content heights
    /// and re-clamp the current offset into it.
    pub fn set_extents(&mut self, viewport_height: f32, content_height: f32) {
        self.max_offset = (content_height - viewport_height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Scroll position to impose on the list container this frame.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn is_at_top(&self) -> bool {
        self.offset <= 0.0
    }

    /// Stage 2: move by `delta` within `[0, max_offset]`. Returns the
    /// consumed portion (same sign as `delta`).
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let target = (self.offset - delta).clamp(0.0, self.max_offset);
        let consumed = self.offset - target;
        self.offset = target;
        consumed
    }
}

// ── Routing ────────────────────────────────────────────────────────────────────

/// Run one scroll delta through the collapse → list → expand chain, returning
/// whatever no stage consumed.
///
/// A list with nothing to scroll (`max_offset == 0`) leaves the header alone
/// entirely: wheel deltas still arrive over such a list on desktop, but a
/// header over unscrollable content must not collapse.
pub fn route_scroll(collapse: &mut CollapseState, list: &mut ListState, delta: f32) -> f32 {
    if delta == 0.0 || list.max_offset() <= 0.0 {
        return delta;
    }
    let mut rest = delta;
    rest -= collapse.pre_scroll(rest);
    rest -= list.scroll_by(rest);
    rest -= collapse.post_scroll(rest);
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrollable_list() -> ListState {
        let mut list = ListState::default();
        // 50 rows of 56 points in a 600-point viewport.
        list.set_extents(600.0, 50.0 * 56.0);
        list
    }

    #[test]
    fn fraction_stays_in_unit_range_under_reversals() {
        let mut collapse = CollapseState::new(88.0);
        let mut list = scrollable_list();

        for delta in [-30.0, -500.0, 200.0, -15.0, 1_000.0, -2_000.0, 3_000.0] {
            route_scroll(&mut collapse, &mut list, delta);
            let f = collapse.fraction();
            assert!((0.0..=1.0).contains(&f), "fraction {f} out of range");
            assert!((0.0..=collapse.distance()).contains(&collapse.offset()));
        }
    }

    #[test]
    fn collapse_direction_is_consumed_by_header_first() {
        let mut collapse = CollapseState::new(88.0);
        let mut list = scrollable_list();

        route_scroll(&mut collapse, &mut list, -30.0);
        assert_eq!(collapse.offset(), 30.0);
        assert_eq!(list.offset(), 0.0, "list must not move before the header");

        // Remainder past the collapse distance flows into the list.
        route_scroll(&mut collapse, &mut list, -100.0);
        assert!(collapse.is_collapsed());
        assert_eq!(list.offset(), 42.0);
    }

    #[test]
    fn scenario_collapse_fully_then_restore_origin() {
        let mut collapse = CollapseState::new(88.0);
        let mut list = scrollable_list();

        // Scroll up through the content by well over the collapse distance.
        for _ in 0..10 {
            route_scroll(&mut collapse, &mut list, -40.0);
        }
        assert_eq!(collapse.fraction(), 1.0);

        // Scroll back to the origin: list returns to its top first, then the
        // header re-expands to exactly zero.
        for _ in 0..10 {
            route_scroll(&mut collapse, &mut list, 40.0);
        }
        assert_eq!(list.offset(), 0.0);
        assert_eq!(collapse.fraction(), 0.0);
    }

    #[test]
    fn expand_waits_for_list_top() {
        let mut collapse = CollapseState::new(88.0);
        let mut list = scrollable_list();

        route_scroll(&mut collapse, &mut list, -200.0); // collapsed, list at 112
        assert!(collapse.is_collapsed());
        assert_eq!(list.offset(), 112.0);

        // A downward scroll smaller than the list offset only moves the list.
        route_scroll(&mut collapse, &mut list, 50.0);
        assert!(collapse.is_collapsed());
        assert_eq!(list.offset(), 62.0);

        // The overshoot past the top re-expands the header.
        route_scroll(&mut collapse, &mut list, 100.0);
        assert!(list.is_at_top());
        assert_eq!(collapse.offset(), 88.0 - 38.0);
    }

    #[test]
    fn unscrollable_content_never_collapses() {
        let mut collapse = CollapseState::new(88.0);
        let mut list = ListState::default();
        list.set_extents(600.0, 0.0); // zero content rows

        let rest = route_scroll(&mut collapse, &mut list, -300.0);
        assert_eq!(rest, -300.0);
        assert_eq!(collapse.fraction(), 0.0);
    }

    #[test]
    fn shrinking_content_reclamps_list_offset() {
        let mut list = ListState::default();
        list.set_extents(600.0, 2_000.0);
        list.scroll_by(-1_000.0);
        assert_eq!(list.offset(), 1_000.0);

        list.set_extents(600.0, 700.0);
        assert_eq!(list.offset(), 100.0);
    }

    #[test]
    fn leftover_delta_is_reported() {
        let mut collapse = CollapseState::new(88.0);
        let mut list = scrollable_list();

        // Everything consumed on the way down.
        assert_eq!(route_scroll(&mut collapse, &mut list, -100.0), 0.0);

        // Scrolling down past origin + expansion leaves a remainder.
        let rest = route_scroll(&mut collapse, &mut list, 500.0);
        assert_eq!(rest, 500.0 - 12.0 - 88.0);
        assert_eq!(collapse.fraction(), 0.0);
        assert!(list.is_at_top());
    }
}
