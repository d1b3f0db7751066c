use serde::Deserialize;
use web_sys::window;

/// Where the contact form is posted. Empty means submissions are simulated.
#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> &'static str {
    ""  // Local development: no form backend
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> &'static str {
    "https://formspree.io/f/ns-engineering"
}

/// Header switches to its compact style past this offset.
pub const HEADER_SCROLLED_PX: f64 = 50.0;
/// Scroll-to-top button appears past this offset.
pub const SCROLL_TOP_VISIBLE_PX: f64 = 400.0;
/// Delay of the simulated contact submission.
pub const SIMULATED_SUBMIT_MS: u32 = 2000;
/// How long the "message sent" panel stays up.
pub const CONTACT_SUCCESS_RESET_MS: u32 = 5000;
/// Second measurement after mount, once fonts and images have had a chance to load.
pub const LATE_LAYOUT_MS: u32 = 500;
/// Layers whose wheel gestures scroll themselves, never the page.
pub const OVERLAY_SELECTOR: &str = ".modal-backdrop";

/// Tuning of the scroll tracker and snap behaviour.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Distance from the document top/bottom that forces the first/last section.
    pub edge_epsilon: f64,
    /// Minimum time between two snaps.
    pub snap_cooldown_ms: f64,
    /// Length of the programmatic smooth scroll; passive updates are ignored meanwhile.
    pub settle_ms: u32,
    /// Visible fraction of the next section that triggers a snap.
    pub snap_visible_threshold: f64,
    /// Progress through a section taller than the viewport before snapping away.
    pub tall_section_progress: f64,
    /// Trailing delay before recomputing after the last scroll event.
    pub scroll_debounce_ms: u32,
    /// Minimum spacing of leading-edge recomputes during a scroll burst.
    pub scroll_throttle_ms: f64,
    pub snap_enabled: bool,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            edge_epsilon: 50.0,
            snap_cooldown_ms: 1000.0,
            settle_ms: 800,
            snap_visible_threshold: 0.2,
            tall_section_progress: 0.8,
            scroll_debounce_ms: 100,
            scroll_throttle_ms: 100.0,
            snap_enabled: true,
        }
    }
}

impl ScrollSettings {
    /// Parses overrides; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Settings from the `data-scroll-settings` attribute of `<body>`, if any.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute("data-scroll-settings"));

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid scroll settings: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_defaults() {
        let settings = ScrollSettings::from_json(r#"{"snap_enabled": false, "settle_ms": 600}"#).unwrap();
        assert!(!settings.snap_enabled);
        assert_eq!(settings.settle_ms, 600);
        assert_eq!(settings.edge_epsilon, 50.0);
        assert_eq!(settings.snap_cooldown_ms, 1000.0);
    }

    #[test]
    fn snap_threshold_sits_in_band() {
        let settings = ScrollSettings::default();
        assert!((0.2..=0.3).contains(&settings.snap_visible_threshold));
    }
}
