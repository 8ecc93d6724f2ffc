//! Page signals and section crossing events

/// Browser-level signals routed through the page runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSignal {
    /// Scroll position changed
    Scroll {
        /// Current scroll offset from the document top
        y: f32,
    },
    /// Viewport was resized
    Resize,
    /// Full page load completed (late content may have shifted layout)
    Loaded,
    /// A navigation link was activated
    NavClick {
        /// Index of the clicked link / target section
        index: usize,
    },
}

/// A scroll-trigger crossing reported for a registered region
///
/// The hero region and each content section register their own trigger;
/// crossings arrive one at a time in the order the engine fires them, and
/// the last one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    /// Scrolled into the hero from above
    HeroEnter,
    /// Scrolled back up past the hero's bottom edge
    HeroEnterBack,
    /// Section `i` entered its center band scrolling down
    SectionEnter(usize),
    /// Section `i` re-entered its center band scrolling up
    SectionEnterBack(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_event_equality() {
        assert_eq!(SectionEvent::SectionEnter(2), SectionEvent::SectionEnter(2));
        assert_ne!(
            SectionEvent::SectionEnter(2),
            SectionEvent::SectionEnterBack(2)
        );
    }
}
