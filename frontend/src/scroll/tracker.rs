//! Scroll-spy state: which section is current, and when a wheel gesture
//! should snap the viewport to the neighbouring section.
//!
//! Time is passed in as milliseconds from a monotonic clock so every
//! decision can be replayed without a browser.

use log::debug;

use super::geometry::{max_scroll_offset, SectionRegion};
use crate::config::ScrollSettings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    /// A programmatic smooth scroll is running until `settles_at`.
    Transitioning { settles_at: f64 },
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    settings: ScrollSettings,
    current: usize,
    phase: Phase,
    last_snap_at: Option<f64>,
}

impl ScrollTracker {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            current: 0,
            phase: Phase::Idle,
            last_snap_at: None,
        }
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Section whose centre is nearest the viewport centre.
    pub fn recompute_current_section(
        &self,
        scroll_offset: f64,
        viewport_height: f64,
        regions: &[SectionRegion],
    ) -> usize {
        let Some(last) = regions.len().checked_sub(1) else {
            return 0;
        };
        let epsilon = self.settings.edge_epsilon;

        if scroll_offset <= epsilon {
            return 0;
        }
        if scroll_offset >= max_scroll_offset(regions, viewport_height) - epsilon {
            return last;
        }

        let viewport_center = scroll_offset + viewport_height / 2.0;
        let nearest = |visible_only: bool| {
            let mut best: Option<(usize, f64)> = None;
            for (index, region) in regions.iter().enumerate() {
                if visible_only && !region.is_visible(scroll_offset, viewport_height) {
                    continue;
                }
                let distance = (region.center() - viewport_center).abs();
                // strict comparison keeps the smaller index on ties
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((index, distance));
                }
            }
            best.map(|(index, _)| index)
        };

        nearest(true)
            .or_else(|| nearest(false))
            .unwrap_or(0)
            .min(last)
    }

    /// Passive scroll update. Returns the new index when it changed.
    ///
    /// Ignored while a programmatic scroll is still inside its settle window.
    pub fn on_passive_scroll(
        &mut self,
        scroll_offset: f64,
        viewport_height: f64,
        regions: &[SectionRegion],
        now: f64,
    ) -> Option<usize> {
        if let Phase::Transitioning { settles_at } = self.phase {
            if now < settles_at {
                return None;
            }
            self.phase = Phase::Idle;
        }

        let next = self.recompute_current_section(scroll_offset, viewport_height, regions);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    /// Decides whether a wheel gesture should jump to the neighbouring section.
    #[allow(clippy::too_many_arguments)]
    pub fn should_snap(
        &self,
        current: usize,
        wheel_delta: f64,
        regions: &[SectionRegion],
        scroll_offset: f64,
        viewport_height: f64,
        now: f64,
    ) -> Option<usize> {
        if !self.settings.snap_enabled || self.is_transitioning() || wheel_delta == 0.0 {
            return None;
        }
        if let Some(last_snap) = self.last_snap_at {
            if now - last_snap < self.settings.snap_cooldown_ms {
                return None;
            }
        }

        let count = regions.len();
        if count < 2 {
            return None;
        }
        let current = current.min(count - 1);
        let epsilon = self.settings.edge_epsilon;
        let down = wheel_delta > 0.0;

        let target = if down {
            if current + 1 >= count
                || scroll_offset >= max_scroll_offset(regions, viewport_height) - epsilon
            {
                return None;
            }
            current + 1
        } else {
            if current == 0 || scroll_offset <= epsilon {
                return None;
            }
            current - 1
        };

        let here = regions[current];
        let decisive = if here.height > viewport_height {
            let progress = here.scroll_progress(scroll_offset, viewport_height);
            if down {
                progress >= self.settings.tall_section_progress
            } else {
                progress <= 1.0 - self.settings.tall_section_progress
            }
        } else {
            regions[target].visible_fraction(scroll_offset, viewport_height)
                >= self.settings.snap_visible_threshold
        };

        decisive.then_some(target)
    }

    /// Runs [`Self::should_snap`] against the tracked index and, on a snap,
    /// commits to it: records the cooldown and starts the transition.
    pub fn on_wheel(
        &mut self,
        wheel_delta: f64,
        regions: &[SectionRegion],
        scroll_offset: f64,
        viewport_height: f64,
        now: f64,
    ) -> Option<usize> {
        let target = self.should_snap(
            self.current,
            wheel_delta,
            regions,
            scroll_offset,
            viewport_height,
            now,
        )?;
        debug!("snapping from section {} to {}", self.current, target);
        self.last_snap_at = Some(now);
        self.begin_transition(target, now);
        Some(target)
    }

    /// Optimistically moves to `index` and suppresses passive updates for
    /// the settle window. Returns the clamped index.
    pub fn navigate_to(&mut self, index: usize, section_count: usize, now: f64) -> usize {
        let target = index.min(section_count.saturating_sub(1));
        debug!("navigating to section {}", target);
        self.begin_transition(target, now);
        target
    }

    /// Called by the settle timer; a no-op if a newer transition is still running.
    pub fn settle(&mut self, now: f64) -> bool {
        match self.phase {
            Phase::Transitioning { settles_at } if now >= settles_at => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    fn begin_transition(&mut self, target: usize, now: f64) {
        self.current = target;
        self.phase = Phase::Transitioning {
            settles_at: now + f64::from(self.settings.settle_ms),
        };
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::geometry::stack;
    use proptest::prelude::*;

    const VH: f64 = 800.0;

    fn equal_sections(count: usize) -> Vec<SectionRegion> {
        stack(&vec![VH; count])
    }

    #[test]
    fn section_top_selects_that_section() {
        let tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        assert_eq!(tracker.recompute_current_section(2.0 * VH, VH, &regions), 2);
        assert_eq!(tracker.recompute_current_section(VH, VH, &regions), 1);
    }

    #[test]
    fn short_last_section_is_selected_at_bottom() {
        let tracker = ScrollTracker::default();
        let regions = stack(&[VH, 1600.0, 1200.0, 300.0]);
        let bottom = max_scroll_offset(&regions, VH);
        assert_eq!(tracker.recompute_current_section(bottom - 20.0, VH, &regions), 3);
    }

    #[test]
    fn equal_distance_prefers_smaller_index() {
        let tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        // viewport centre sits exactly on the 1/2 boundary
        assert_eq!(tracker.recompute_current_section(1.5 * VH, VH, &regions), 1);
    }

    #[test]
    fn empty_registry_yields_first_index() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.recompute_current_section(500.0, VH, &[]), 0);
    }

    #[test]
    fn passive_scroll_inside_settle_window_keeps_navigation_target() {
        let mut tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        assert_eq!(tracker.navigate_to(3, regions.len(), 1_000.0), 3);

        // animation has barely started, page is still near the top
        assert_eq!(tracker.on_passive_scroll(120.0, VH, &regions, 1_100.0), None);
        assert_eq!(tracker.current(), 3);
        assert!(tracker.is_transitioning());
    }

    #[test]
    fn passive_scroll_after_settle_resumes_tracking() {
        let mut tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        tracker.navigate_to(3, regions.len(), 0.0);
        assert_eq!(tracker.on_passive_scroll(VH, VH, &regions, 900.0), Some(1));
        assert_eq!(tracker.phase(), Phase::Idle);
    }

    #[test]
    fn navigate_clamps_out_of_range_index() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.navigate_to(9, 4, 0.0), 3);
        assert_eq!(tracker.current(), 3);
    }

    #[test]
    fn stale_settle_timer_does_not_end_newer_transition() {
        let mut tracker = ScrollTracker::default();
        tracker.navigate_to(1, 4, 0.0);
        tracker.navigate_to(2, 4, 500.0);
        assert!(!tracker.settle(800.0));
        assert!(tracker.is_transitioning());
        assert!(tracker.settle(1_300.0));
        assert!(!tracker.is_transitioning());
    }

    #[test]
    fn quarter_of_next_section_visible_snaps_down() {
        let mut tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        let offset = 0.25 * VH;
        assert_eq!(tracker.on_passive_scroll(offset, VH, &regions, 0.0), None);
        assert_eq!(tracker.on_wheel(50.0, &regions, offset, VH, 5_000.0), Some(1));
        assert_eq!(tracker.current(), 1);
        assert!(tracker.is_transitioning());
    }

    #[test]
    fn barely_visible_next_section_does_not_snap() {
        let tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        assert_eq!(tracker.should_snap(0, 50.0, &regions, 0.1 * VH, VH, 5_000.0), None);
    }

    #[test]
    fn no_snap_at_document_bottom() {
        let tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        let bottom = max_scroll_offset(&regions, VH);
        assert_eq!(tracker.should_snap(2, 50.0, &regions, bottom, VH, 5_000.0), None);
        assert_eq!(tracker.should_snap(3, 50.0, &regions, bottom, VH, 5_000.0), None);
    }

    #[test]
    fn no_snap_upwards_at_document_top() {
        let tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        assert_eq!(tracker.should_snap(1, -50.0, &regions, 10.0, VH, 5_000.0), None);
    }

    #[test]
    fn upward_snap_when_previous_section_shows() {
        let tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        // section 2 current, 30% of section 1 visible above it
        let offset = 2.0 * VH - 0.3 * VH;
        assert_eq!(tracker.should_snap(2, -50.0, &regions, offset, VH, 5_000.0), Some(1));
    }

    #[test]
    fn tall_section_waits_for_most_of_its_height() {
        let tracker = ScrollTracker::default();
        let regions = stack(&[VH, 3.0 * VH, VH]);
        let tall = regions[1];
        // 50% through the scrollable part of the tall section
        let halfway = tall.top + 0.5 * (tall.height - VH);
        assert_eq!(tracker.should_snap(1, 50.0, &regions, halfway, VH, 5_000.0), None);

        let late = tall.top + 0.85 * (tall.height - VH);
        assert_eq!(tracker.should_snap(1, 50.0, &regions, late, VH, 5_000.0), Some(2));
    }

    #[test]
    fn tall_section_snaps_up_only_near_its_top() {
        let tracker = ScrollTracker::default();
        let regions = stack(&[VH, 3.0 * VH, VH]);
        let tall = regions[1];
        let deep = tall.top + 0.6 * (tall.height - VH);
        assert_eq!(tracker.should_snap(1, -50.0, &regions, deep, VH, 5_000.0), None);
        let near_top = tall.top + 0.1 * (tall.height - VH);
        assert_eq!(tracker.should_snap(1, -50.0, &regions, near_top, VH, 5_000.0), Some(0));
    }

    #[test]
    fn two_snaps_inside_cooldown_change_section_once() {
        let mut tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        assert_eq!(tracker.on_wheel(50.0, &regions, 0.3 * VH, VH, 0.0), Some(1));
        // transition settled, but still inside the cooldown
        assert!(tracker.settle(850.0));
        assert_eq!(tracker.on_wheel(50.0, &regions, 1.3 * VH, VH, 900.0), None);
        assert_eq!(tracker.current(), 1);
        assert_eq!(tracker.on_wheel(50.0, &regions, 1.3 * VH, VH, 1_100.0), Some(2));
    }

    #[test]
    fn rapid_wheel_burst_snaps_at_most_once() {
        let mut tracker = ScrollTracker::default();
        let regions = equal_sections(4);
        let snaps = (0..5u32)
            .filter_map(|i| {
                let now = 10_000.0 + f64::from(i) * 40.0;
                tracker.on_wheel(60.0, &regions, 0.3 * VH, VH, now)
            })
            .count();
        assert_eq!(snaps, 1);
        assert_eq!(tracker.current(), 1);
    }

    #[test]
    fn disabled_snapping_never_triggers() {
        let tracker = ScrollTracker::new(ScrollSettings {
            snap_enabled: false,
            ..ScrollSettings::default()
        });
        let regions = equal_sections(4);
        assert_eq!(tracker.should_snap(0, 50.0, &regions, 0.5 * VH, VH, 5_000.0), None);
    }

    fn arbitrary_regions() -> impl Strategy<Value = Vec<SectionRegion>> {
        prop::collection::vec(50.0f64..3_000.0, 1..8).prop_map(|heights| stack(&heights))
    }

    proptest! {
        #[test]
        fn offsets_near_top_select_first(regions in arbitrary_regions(), offset in 0.0f64..=50.0, vh in 200.0f64..1_400.0) {
            let tracker = ScrollTracker::default();
            prop_assert_eq!(tracker.recompute_current_section(offset, vh, &regions), 0);
        }

        #[test]
        fn offsets_near_bottom_select_last(regions in arbitrary_regions(), past in 0.0f64..200.0, vh in 200.0f64..1_400.0) {
            let tracker = ScrollTracker::default();
            let max = max_scroll_offset(&regions, vh);
            // the top rule wins on pages barely taller than the viewport
            prop_assume!(max - 50.0 > 50.0);
            let offset = max - 50.0 + past;
            prop_assert_eq!(tracker.recompute_current_section(offset, vh, &regions), regions.len() - 1);
        }

        #[test]
        fn index_always_in_range(regions in arbitrary_regions(), offset in -500.0f64..30_000.0, vh in 1.0f64..2_000.0) {
            let tracker = ScrollTracker::default();
            let index = tracker.recompute_current_section(offset, vh, &regions);
            prop_assert!(index < regions.len());
        }
    }
}
