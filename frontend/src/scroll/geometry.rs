/// Vertical extent of one rendered section, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRegion {
    pub top: f64,
    pub height: f64,
}

impl SectionRegion {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Pixels of this region inside the viewport `[offset, offset + viewport_height)`.
    pub fn visible_px(&self, offset: f64, viewport_height: f64) -> f64 {
        let start = self.top.max(offset);
        let end = self.bottom().min(offset + viewport_height);
        (end - start).max(0.0)
    }

    pub fn is_visible(&self, offset: f64, viewport_height: f64) -> bool {
        self.visible_px(offset, viewport_height) > 0.0
    }

    /// Share of the region that is on screen. A region taller than the
    /// viewport counts as fully visible once it fills the viewport.
    pub fn visible_fraction(&self, offset: f64, viewport_height: f64) -> f64 {
        let denom = self.height.min(viewport_height).max(1.0);
        (self.visible_px(offset, viewport_height) / denom).min(1.0)
    }

    /// How far the viewport has travelled through a region taller than it:
    /// 0.0 with the region's top at the viewport top, 1.0 with its bottom at
    /// the viewport bottom.
    pub fn scroll_progress(&self, offset: f64, viewport_height: f64) -> f64 {
        let scrollable = (self.height - viewport_height).max(1.0);
        ((offset - self.top) / scrollable).clamp(0.0, 1.0)
    }
}

/// Bottom of the page as described by the registry: the last region's bottom.
pub fn document_height(regions: &[SectionRegion]) -> f64 {
    regions
        .iter()
        .map(SectionRegion::bottom)
        .fold(0.0, f64::max)
}

/// Largest reachable scroll offset for the given viewport.
pub fn max_scroll_offset(regions: &[SectionRegion], viewport_height: f64) -> f64 {
    (document_height(regions) - viewport_height).max(0.0)
}

/// Stacks regions of the given heights top to bottom without gaps.
pub fn stack(heights: &[f64]) -> Vec<SectionRegion> {
    let mut top = 0.0;
    heights
        .iter()
        .map(|&height| {
            let region = SectionRegion::new(top, height);
            top += region.height;
            region
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_px_clips_to_viewport() {
        let region = SectionRegion::new(800.0, 800.0);
        assert_eq!(region.visible_px(0.0, 800.0), 0.0);
        assert_eq!(region.visible_px(200.0, 800.0), 200.0);
        assert_eq!(region.visible_px(800.0, 800.0), 800.0);
        assert_eq!(region.visible_px(1700.0, 800.0), 0.0);
    }

    #[test]
    fn tall_region_fills_viewport_counts_as_fully_visible() {
        let region = SectionRegion::new(0.0, 2400.0);
        assert_eq!(region.visible_fraction(600.0, 800.0), 1.0);
    }

    #[test]
    fn progress_guards_region_equal_to_viewport() {
        let region = SectionRegion::new(800.0, 800.0);
        let progress = region.scroll_progress(850.0, 800.0);
        assert!(progress.is_finite());
        assert_eq!(progress, 1.0);
    }

    #[test]
    fn stack_partitions_page_without_gaps() {
        let regions = stack(&[700.0, 1200.0, 900.0]);
        assert_eq!(regions[1].top, 700.0);
        assert_eq!(regions[2].top, 1900.0);
        assert_eq!(document_height(&regions), 2800.0);
        assert_eq!(max_scroll_offset(&regions, 800.0), 2000.0);
    }
}
