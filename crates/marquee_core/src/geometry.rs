//! Scroll geometry
//!
//! Page-space rectangles, viewport scroll metrics, and the band math that
//! places trigger start/end positions. Positions follow the usual
//! convention for long-form pages: `y` grows downward and element bounds
//! are in document space (unaffected by scrolling).

use serde::{Deserialize, Serialize};

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle in document space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge in document space
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge in document space
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Vertical center in document space
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

// ============================================================================
// Scroll Metrics
// ============================================================================

/// Current scroll state of the page viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Scroll offset from the top of the document (>= 0)
    pub scroll_y: f32,
    /// Height of the visible viewport
    pub viewport_height: f32,
    /// Total document height
    pub content_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f32, viewport_height: f32, content_height: f32) -> Self {
        Self {
            scroll_y,
            viewport_height,
            content_height,
        }
    }

    /// Maximum reachable scroll offset
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Scroll progress through the document (0.0 = top, 1.0 = bottom)
    pub fn progress(&self) -> f32 {
        let max = self.max_scroll();
        if max > 0.0 {
            (self.scroll_y / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Clamp an arbitrary offset into the scrollable range
    pub fn clamp_offset(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_scroll())
    }
}

// ============================================================================
// Trigger Band Positions
// ============================================================================

/// Which edge of the trigger element a band position refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementEdge {
    Top,
    Bottom,
}

/// Where in the viewport the element edge must arrive for a crossing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportAnchor {
    /// Top of the viewport
    Top,
    /// Vertical center of the viewport
    Center,
    /// Bottom of the viewport
    Bottom,
    /// Fraction of the viewport height from the top (0.0..=1.0)
    Fraction(f32),
}

impl ViewportAnchor {
    /// Resolve to an offset from the top of the viewport
    pub fn resolve(&self, viewport_height: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => viewport_height / 2.0,
            Self::Bottom => viewport_height,
            Self::Fraction(f) => viewport_height * f.clamp(0.0, 1.0),
        }
    }
}

/// A trigger band position: an element edge paired with a viewport anchor
///
/// `EdgePosition::top_center()` reads "when the element's top edge reaches
/// the center of the viewport", matching how the scroll-trigger engine
/// describes its start/end thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePosition {
    pub edge: ElementEdge,
    pub anchor: ViewportAnchor,
}

impl EdgePosition {
    pub fn new(edge: ElementEdge, anchor: ViewportAnchor) -> Self {
        Self { edge, anchor }
    }

    /// Element top meets viewport top
    pub fn top_top() -> Self {
        Self::new(ElementEdge::Top, ViewportAnchor::Top)
    }

    /// Element top meets viewport center
    pub fn top_center() -> Self {
        Self::new(ElementEdge::Top, ViewportAnchor::Center)
    }

    /// Element top meets a fraction of the viewport height
    pub fn top_fraction(f: f32) -> Self {
        Self::new(ElementEdge::Top, ViewportAnchor::Fraction(f))
    }

    /// Element bottom meets viewport top
    pub fn bottom_top() -> Self {
        Self::new(ElementEdge::Bottom, ViewportAnchor::Top)
    }

    /// Element bottom meets viewport center
    pub fn bottom_center() -> Self {
        Self::new(ElementEdge::Bottom, ViewportAnchor::Center)
    }

    /// Scroll offset at which this position's crossing occurs
    ///
    /// The crossing happens when `scroll_y` passes the returned value.
    /// Used for smooth-scroll targeting and for test harnesses; the live
    /// crossing detection belongs to the scroll-trigger engine.
    pub fn crossing_offset(&self, element: Rect, viewport_height: f32) -> f32 {
        let edge_y = match self.edge {
            ElementEdge::Top => element.top(),
            ElementEdge::Bottom => element.bottom(),
        };
        edge_y - self.anchor.resolve(viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(0.0, 100.0, 800.0, 400.0);
        assert_eq!(r.top(), 100.0);
        assert_eq!(r.bottom(), 500.0);
        assert_eq!(r.center_y(), 300.0);
    }

    #[test]
    fn test_scroll_metrics_progress() {
        let m = ScrollMetrics::new(300.0, 400.0, 1000.0);
        assert_eq!(m.max_scroll(), 600.0);
        assert!((m.progress() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_scroll_metrics_short_content() {
        // Content shorter than the viewport never scrolls
        let m = ScrollMetrics::new(0.0, 800.0, 500.0);
        assert_eq!(m.max_scroll(), 0.0);
        assert_eq!(m.progress(), 0.0);
        assert_eq!(m.clamp_offset(250.0), 0.0);
    }

    #[test]
    fn test_crossing_offset_top_center() {
        // Section starting at y=1000 in an 800px viewport: its top reaches
        // the viewport center once we've scrolled past 1000 - 400 = 600.
        let section = Rect::new(0.0, 1000.0, 800.0, 600.0);
        let pos = EdgePosition::top_center();
        assert_eq!(pos.crossing_offset(section, 800.0), 600.0);
    }

    #[test]
    fn test_crossing_offset_bottom_top() {
        // Hero spanning 0..900: its bottom leaves past the viewport top at
        // scroll_y = 900.
        let hero = Rect::new(0.0, 0.0, 800.0, 900.0);
        let pos = EdgePosition::bottom_top();
        assert_eq!(pos.crossing_offset(hero, 800.0), 900.0);
    }

    #[test]
    fn test_anchor_fraction_clamped() {
        assert_eq!(ViewportAnchor::Fraction(0.7).resolve(1000.0), 700.0);
        assert_eq!(ViewportAnchor::Fraction(1.5).resolve(1000.0), 1000.0);
    }
}
