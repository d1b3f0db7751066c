use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::registry::scroll_offset;

/// Whether the window is scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let past = use_state(|| scroll_offset() > threshold);

    {
        let past = past.clone();
        use_event_with_window("scroll", move |_: Event| {
            let next = scroll_offset() > threshold;
            if *past != next {
                past.set(next);
            }
        });
    }

    *past
}
