use std::fmt;
use std::str::FromStr;

use web_sys::window;

use super::geometry::SectionRegion;

/// Logical sections of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Services,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element id the section is rendered under.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Clamps out-of-range indices to the nearest section.
    pub fn from_index(index: usize) -> SectionId {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn nav_key(&self) -> String {
        format!("navigation.{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == name)
            .ok_or(())
    }
}

/// Reads the current page regions of every section from the DOM.
///
/// Sections that are not mounted yet are given a zero-height region at the
/// bottom of the previous one so the list keeps its order and length.
pub fn measure_regions() -> Vec<SectionRegion> {
    let Some(window) = window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let mut regions: Vec<SectionRegion> = Vec::with_capacity(SectionId::ALL.len());
    for section in SectionId::ALL {
        let fallback_top = regions.last().map(SectionRegion::bottom).unwrap_or(0.0);
        let region = document
            .get_element_by_id(section.as_str())
            .map(|element| {
                let rect = element.get_bounding_client_rect();
                SectionRegion::new(rect.top() + scroll_y, rect.height())
            })
            .unwrap_or_else(|| SectionRegion::new(fallback_top, 0.0));
        regions.push(region);
    }
    regions
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_with_or_without_hash() {
        assert_eq!("projects".parse::<SectionId>(), Ok(SectionId::Projects));
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert!("about".parse::<SectionId>().is_err());
    }

    #[test]
    fn index_round_trips_and_clamps() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_index(section.index()), section);
        }
        assert_eq!(SectionId::from_index(42), SectionId::Contact);
    }
}
