// crates/folio-core/src/scroll_spy.rs
// Active-section tracking for the navbar

/// Navbar switches to its solid style past this many pixels
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// A section must cover more than this fraction of the viewport to become active
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// A section's bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// Fraction of the viewport covered by a box spanning `top..bottom`
pub fn occupancy(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let visible = (bottom.min(viewport_height) - top.max(0.0)).max(0.0);
    (visible / viewport_height).clamp(0.0, 1.0)
}

/// Id of the section covering most of the viewport. Earlier sections win
/// ties. `None` if nothing clears [`VISIBILITY_THRESHOLD`], in which case the
/// caller keeps its current section.
pub fn most_visible<'a>(sections: &[SectionBounds<'a>], viewport_height: f64) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for section in sections {
        let share = occupancy(section.top, section.bottom, viewport_height);
        if share > best.map_or(0.0, |(_, b)| b) {
            best = Some((section.id, share));
        }
    }
    best.filter(|(_, share)| *share > VISIBILITY_THRESHOLD)
        .map(|(id, _)| id)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}
