//! Event → controller → effects. Browser listeners translate DOM events
//! into [`ViewportEvent`]s and apply the returned [`Effects`]; everything
//! in between runs without a browser.

use super::geometry::SectionRegion;
use super::tracker::ScrollTracker;
use crate::config::ScrollSettings;

/// Leading-edge rate limit.
#[derive(Clone, Debug)]
pub struct Throttle {
    window_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_fired: None,
        }
    }

    /// True (and records the firing) if the window has passed since the last one.
    pub fn try_fire(&mut self, now: f64) -> bool {
        match self.last_fired {
            Some(last) if now - last < self.window_ms => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewportEvent {
    /// A scroll event. `trailing` marks the debounced call after a burst,
    /// which always recomputes.
    Scroll {
        offset: f64,
        viewport_height: f64,
        trailing: bool,
    },
    /// A wheel gesture. `in_overlay` marks one that started inside a modal
    /// or other scrollable layer; `zoom` marks ctrl+wheel and trackpad pinch.
    /// Neither kind drives the page.
    Wheel {
        delta_y: f64,
        offset: f64,
        viewport_height: f64,
        in_overlay: bool,
        zoom: bool,
    },
    /// Fresh section geometry after a resize or content load.
    Layout { regions: Vec<SectionRegion> },
    Navigate { index: usize },
    /// The settle timer of a programmatic scroll fired.
    Settled {
        offset: f64,
        viewport_height: f64,
    },
}

/// What the browser side should do in response to an event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Effects {
    /// New current section to publish.
    pub current: Option<usize>,
    /// Page offset to smooth-scroll to.
    pub scroll_to: Option<f64>,
    /// Whether to cancel the native wheel scroll.
    pub prevent_default: bool,
    /// Start a settle timer of this length.
    pub settle_after_ms: Option<u32>,
}

#[derive(Debug)]
pub struct ScrollController {
    tracker: ScrollTracker,
    regions: Vec<SectionRegion>,
    throttle: Throttle,
}

impl ScrollController {
    pub fn new(settings: ScrollSettings) -> Self {
        let throttle = Throttle::new(settings.scroll_throttle_ms);
        Self {
            tracker: ScrollTracker::new(settings),
            regions: Vec::new(),
            throttle,
        }
    }

    pub fn current(&self) -> usize {
        self.tracker.current()
    }

    #[cfg(test)]
    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn handle(&mut self, event: ViewportEvent, now: f64) -> Effects {
        match event {
            ViewportEvent::Scroll {
                offset,
                viewport_height,
                trailing,
            } => {
                if !trailing && !self.throttle.try_fire(now) {
                    return Effects::default();
                }
                Effects {
                    current: self
                        .tracker
                        .on_passive_scroll(offset, viewport_height, &self.regions, now),
                    ..Effects::default()
                }
            }
            ViewportEvent::Wheel {
                in_overlay: true, ..
            }
            | ViewportEvent::Wheel { zoom: true, .. } => Effects::default(),
            ViewportEvent::Wheel {
                delta_y,
                offset,
                viewport_height,
                ..
            } => match self
                .tracker
                .on_wheel(delta_y, &self.regions, offset, viewport_height, now)
            {
                Some(target) => self.transition_effects(target),
                None => Effects::default(),
            },
            ViewportEvent::Layout { regions } => {
                self.regions = regions;
                Effects::default()
            }
            ViewportEvent::Navigate { index } => {
                if self.regions.is_empty() {
                    return Effects::default();
                }
                let target = self.tracker.navigate_to(index, self.regions.len(), now);
                Effects {
                    prevent_default: false,
                    ..self.transition_effects(target)
                }
            }
            ViewportEvent::Settled {
                offset,
                viewport_height,
            } => {
                if !self.tracker.settle(now) {
                    return Effects::default();
                }
                Effects {
                    current: self
                        .tracker
                        .on_passive_scroll(offset, viewport_height, &self.regions, now),
                    ..Effects::default()
                }
            }
        }
    }

    fn transition_effects(&self, target: usize) -> Effects {
        Effects {
            current: Some(target),
            scroll_to: self.regions.get(target).map(|r| r.top),
            prevent_default: true,
            settle_after_ms: Some(self.tracker.settings().settle_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::geometry::stack;

    const VH: f64 = 800.0;

    fn controller() -> ScrollController {
        let mut controller = ScrollController::new(ScrollSettings::default());
        controller.handle(
            ViewportEvent::Layout {
                regions: stack(&[VH; 4]),
            },
            0.0,
        );
        controller
    }

    fn scroll(offset: f64, trailing: bool) -> ViewportEvent {
        ViewportEvent::Scroll {
            offset,
            viewport_height: VH,
            trailing,
        }
    }

    fn wheel(delta_y: f64, offset: f64) -> ViewportEvent {
        ViewportEvent::Wheel {
            delta_y,
            offset,
            viewport_height: VH,
            in_overlay: false,
            zoom: false,
        }
    }

    #[test]
    fn throttle_drops_events_inside_window() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_fire(0.0));
        assert!(!throttle.try_fire(50.0));
        assert!(throttle.try_fire(100.0));
    }

    #[test]
    fn throttled_scroll_is_picked_up_by_trailing_call() {
        let mut controller = controller();
        assert_eq!(controller.handle(scroll(100.0, false), 0.0).current, None);
        // inside the throttle window: ignored
        assert_eq!(controller.handle(scroll(1_600.0, false), 30.0).current, None);
        assert_eq!(controller.current(), 0);
        // debounced trailing call
        assert_eq!(controller.handle(scroll(1_600.0, true), 130.0).current, Some(2));
    }

    #[test]
    fn navigate_scrolls_to_target_top_and_schedules_settle() {
        let mut controller = controller();
        let effects = controller.handle(ViewportEvent::Navigate { index: 2 }, 0.0);
        assert_eq!(effects.current, Some(2));
        assert_eq!(effects.scroll_to, Some(1_600.0));
        assert_eq!(effects.settle_after_ms, Some(800));
        assert!(!effects.prevent_default);

        // the smooth scroll passes section 1 on its way
        assert_eq!(controller.handle(scroll(900.0, true), 200.0).current, None);
        assert_eq!(controller.current(), 2);
    }

    #[test]
    fn navigate_before_layout_is_ignored() {
        let mut controller = ScrollController::new(ScrollSettings::default());
        assert_eq!(
            controller.handle(ViewportEvent::Navigate { index: 1 }, 0.0),
            Effects::default()
        );
    }

    #[test]
    fn settle_reconciles_with_actual_position() {
        let mut controller = controller();
        controller.handle(ViewportEvent::Navigate { index: 2 }, 0.0);
        let effects = controller.handle(
            ViewportEvent::Settled {
                offset: 2.0 * VH,
                viewport_height: VH,
            },
            800.0,
        );
        assert_eq!(effects.current, None);
        assert!(!controller.tracker().is_transitioning());
    }

    #[test]
    fn snap_prevents_native_scroll() {
        let mut controller = controller();
        let effects = controller.handle(wheel(50.0, 0.25 * VH), 5_000.0);
        assert!(effects.prevent_default);
        assert_eq!(effects.current, Some(1));
        assert_eq!(effects.scroll_to, Some(VH));
    }

    #[test]
    fn wheel_at_bottom_leaves_native_scroll_alone() {
        let mut controller = controller();
        controller.handle(scroll(3.0 * VH, true), 0.0);
        let effects = controller.handle(wheel(50.0, 3.0 * VH), 5_000.0);
        assert_eq!(effects, Effects::default());
    }

    #[test]
    fn wheel_burst_executes_one_snap() {
        let mut controller = controller();
        let snaps = (0..5u32)
            .map(|i| controller.handle(wheel(50.0, 0.3 * VH), 2_000.0 + f64::from(i) * 40.0))
            .filter(|effects| effects.scroll_to.is_some())
            .count();
        assert_eq!(snaps, 1);
    }

    #[test]
    fn wheel_inside_overlay_never_drives_the_page() {
        let mut controller = ScrollController::new(ScrollSettings::default());
        let regions = stack(&[VH, VH, 3.0 * VH, 900.0]);
        let projects = regions[2];
        controller.handle(ViewportEvent::Layout { regions }, 0.0);
        let offset = projects.top + 0.85 * (projects.height - VH);
        controller.handle(scroll(offset, true), 0.0);
        assert_eq!(controller.current(), 2);

        let effects = controller.handle(
            ViewportEvent::Wheel {
                delta_y: 40.0,
                offset,
                viewport_height: VH,
                in_overlay: true,
                zoom: false,
            },
            5_000.0,
        );
        assert_eq!(effects, Effects::default());
        assert_eq!(controller.current(), 2);
        assert!(!controller.tracker().is_transitioning());

        // the same gesture on the page itself snaps to contact
        let effects = controller.handle(wheel(40.0, offset), 5_000.0);
        assert!(effects.prevent_default);
        assert_eq!(effects.scroll_to, Some(5.0 * VH));
    }

    #[test]
    fn pinch_zoom_is_left_to_the_browser() {
        let mut controller = controller();
        let effects = controller.handle(
            ViewportEvent::Wheel {
                delta_y: 50.0,
                offset: 0.25 * VH,
                viewport_height: VH,
                in_overlay: false,
                zoom: true,
            },
            5_000.0,
        );
        assert_eq!(effects, Effects::default());
        assert_eq!(controller.current(), 0);

        // cooldown was not consumed by the ignored gesture
        assert!(controller.handle(wheel(50.0, 0.25 * VH), 5_100.0).prevent_default);
    }
}
