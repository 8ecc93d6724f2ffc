//! Nav click to smooth-scroll command
//!
//! Link activation suppresses the default jump and instead queues a
//! smooth scroll to the target section's top. The command sits in a
//! pending slot until the host consumes it, mirroring how scroll
//! references hand commands to a renderer.

use marquee_core::{ElementQuery, ElementRef, ScrollCommand};

/// Resolves nav clicks into pending scroll commands
pub struct NavScroller {
    sections: Vec<ElementRef>,
    pending: Option<ScrollCommand>,
}

impl NavScroller {
    /// Create a scroller over the ordered section references
    pub fn new(sections: Vec<ElementRef>) -> Self {
        Self {
            sections,
            pending: None,
        }
    }

    /// Handle a click on nav link `index`
    ///
    /// Resolves the matching section's top offset and queues a smooth
    /// scroll to it. An unknown index or a section the page doesn't have
    /// is a silent no-op.
    pub fn on_click(&mut self, index: usize, query: &dyn ElementQuery) {
        let Some(section) = self.sections.get(index) else {
            return;
        };
        let Some(bounds) = query.bounds(section) else {
            tracing::debug!(section = %section, "nav target missing, ignoring click");
            return;
        };

        self.pending = Some(ScrollCommand::ToOffset {
            y: bounds.top(),
            smooth: true,
        });
    }

    /// Take the queued command, if any
    pub fn take_pending(&mut self) -> Option<ScrollCommand> {
        self.pending.take()
    }

    /// Number of known sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::testing::StaticElements;
    use marquee_core::Rect;

    fn scroller() -> NavScroller {
        NavScroller::new(vec!["section-0".into(), "section-1".into()])
    }

    #[test]
    fn test_click_queues_smooth_scroll_to_section_top() {
        let elements = StaticElements::new()
            .with("section-0", Rect::new(0.0, 900.0, 800.0, 600.0))
            .with("section-1", Rect::new(0.0, 1500.0, 800.0, 600.0));
        let mut s = scroller();

        s.on_click(1, &elements);
        assert_eq!(
            s.take_pending(),
            Some(ScrollCommand::ToOffset {
                y: 1500.0,
                smooth: true
            })
        );
        // Consumed
        assert_eq!(s.take_pending(), None);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let elements = StaticElements::new();
        let mut s = scroller();

        s.on_click(0, &elements);
        assert_eq!(s.take_pending(), None);
    }

    #[test]
    fn test_unknown_index_is_noop() {
        let elements =
            StaticElements::new().with("section-0", Rect::new(0.0, 900.0, 800.0, 600.0));
        let mut s = scroller();

        s.on_click(9, &elements);
        assert_eq!(s.take_pending(), None);
    }
}
