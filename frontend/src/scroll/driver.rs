//! Browser side of the scroll tracker: DOM listeners, timers and the
//! context provider that publishes the current section.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, AddEventListenerOptions, Element, Event, ScrollBehavior, ScrollToOptions, WheelEvent,
};
use yew::prelude::*;

use super::pipeline::{Effects, ScrollController, ViewportEvent};
use super::registry::{measure_regions, scroll_offset, viewport_height, SectionId};
use super::store::{CurrentSection, SectionAction, SectionContext};
use crate::config::{ScrollSettings, LATE_LAYOUT_MS, OVERLAY_SELECTOR};

fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn on_next_frame(f: impl FnOnce() + 'static) {
    if let Some(window) = window() {
        let callback = Closure::once_into_js(f);
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }
}

fn started_in_overlay(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(OVERLAY_SELECTOR).ok().flatten())
        .is_some()
}

#[derive(Default)]
struct Timers {
    debounce: Option<Timeout>,
    settle: Option<Timeout>,
    late_layout: Option<Timeout>,
}

/// Owns the controller and turns its [`Effects`] into DOM calls.
#[derive(Clone)]
struct Driver {
    controller: Rc<RefCell<ScrollController>>,
    timers: Rc<RefCell<Timers>>,
    dispatcher: UseReducerDispatcher<CurrentSection>,
    debounce_ms: u32,
}

impl Driver {
    fn new(settings: ScrollSettings, dispatcher: UseReducerDispatcher<CurrentSection>) -> Self {
        Self {
            debounce_ms: settings.scroll_debounce_ms,
            controller: Rc::new(RefCell::new(ScrollController::new(settings))),
            timers: Rc::new(RefCell::new(Timers::default())),
            dispatcher,
        }
    }

    fn send(&self, event: ViewportEvent) -> Effects {
        let effects = self.controller.borrow_mut().handle(event, now());
        self.apply(&effects);
        effects
    }

    fn apply(&self, effects: &Effects) {
        if let Some(index) = effects.current {
            self.dispatcher.dispatch(SectionAction::Publish(index));
        }
        if let Some(top) = effects.scroll_to {
            smooth_scroll_to(top);
        }
        if let Some(ms) = effects.settle_after_ms {
            let driver = self.clone();
            // replacing the handle cancels a settle timer still pending
            self.timers.borrow_mut().settle = Some(Timeout::new(ms, move || {
                driver.send(ViewportEvent::Settled {
                    offset: scroll_offset(),
                    viewport_height: viewport_height(),
                });
            }));
        }
    }

    fn on_scroll(&self) {
        self.send(ViewportEvent::Scroll {
            offset: scroll_offset(),
            viewport_height: viewport_height(),
            trailing: false,
        });

        let driver = self.clone();
        self.timers.borrow_mut().debounce = Some(Timeout::new(self.debounce_ms, move || {
            driver.send(ViewportEvent::Scroll {
                offset: scroll_offset(),
                viewport_height: viewport_height(),
                trailing: true,
            });
        }));
    }

    fn on_wheel(&self, event: &WheelEvent) {
        let effects = self.send(ViewportEvent::Wheel {
            delta_y: event.delta_y(),
            offset: scroll_offset(),
            viewport_height: viewport_height(),
            in_overlay: started_in_overlay(event),
            zoom: event.ctrl_key(),
        });
        if effects.prevent_default {
            event.prevent_default();
        }
    }

    /// Re-reads section geometry on the next animation frame.
    fn remeasure(&self, then: impl FnOnce(&Driver) + 'static) {
        let driver = self.clone();
        on_next_frame(move || {
            let regions = measure_regions();
            debug!("measured {} section regions", regions.len());
            driver.send(ViewportEvent::Layout { regions });
            driver.send(ViewportEvent::Scroll {
                offset: scroll_offset(),
                viewport_height: viewport_height(),
                trailing: true,
            });
            then(&driver);
        });
    }

    fn navigate(&self, target: SectionId) {
        let from = SectionId::from_index(self.controller.borrow().current());
        info!("Navigating from section {} to {}", from, target);
        self.send(ViewportEvent::Navigate {
            index: target.index(),
        });
    }

    fn clear_timers(&self) {
        *self.timers.borrow_mut() = Timers::default();
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollSpyProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Tracks the current section for everything rendered inside it.
#[function_component(ScrollSpyProvider)]
pub fn scroll_spy_provider(props: &ScrollSpyProviderProps) -> Html {
    let section = use_reducer(CurrentSection::default);

    let driver = {
        let dispatcher = section.dispatcher();
        use_memo(move |_| Driver::new(ScrollSettings::load(), dispatcher), ())
    };

    let navigate = {
        let driver = driver.clone();
        use_memo(
            move |_| Callback::from(move |target: SectionId| driver.navigate(target)),
            (),
        )
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let driver = driver.clone();
                        move || driver.on_scroll()
                    });
                    let wheel_callback = Closure::<dyn Fn(WheelEvent)>::new({
                        let driver = driver.clone();
                        move |event: WheelEvent| driver.on_wheel(&event)
                    });
                    let layout_callback = Closure::<dyn Fn()>::new({
                        let driver = driver.clone();
                        move || driver.remeasure(|_| ())
                    });

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    // non-passive so a snap can cancel the native scroll
                    let wheel_options = AddEventListenerOptions::new();
                    wheel_options.set_passive(false);
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        wheel_callback.as_ref().unchecked_ref(),
                        &wheel_options,
                    );
                    for event in ["resize", "load"] {
                        let _ = window.add_event_listener_with_callback(
                            event,
                            layout_callback.as_ref().unchecked_ref(),
                        );
                    }

                    // first layout, then honour a section named in the URL hash
                    driver.remeasure(|driver| {
                        let target = web_sys::window()
                            .and_then(|w| w.location().hash().ok())
                            .and_then(|hash| hash.parse::<SectionId>().ok());
                        if let Some(target) = target {
                            driver.navigate(target);
                        }
                    });
                    let late = {
                        let driver = driver.clone();
                        Timeout::new(LATE_LAYOUT_MS, move || driver.remeasure(|_| ()))
                    };
                    driver.timers.borrow_mut().late_layout = Some(late);

                    let driver = driver.clone();
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "wheel",
                            wheel_callback.as_ref().unchecked_ref(),
                        );
                        for event in ["resize", "load"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                layout_callback.as_ref().unchecked_ref(),
                            );
                        }
                        driver.clear_timers();
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let context = SectionContext {
        current: section.section,
        navigate: (*navigate).clone(),
    };

    html! {
        <ContextProvider<SectionContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<SectionContext>>
    }
}
