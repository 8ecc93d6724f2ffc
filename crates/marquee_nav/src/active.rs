//! Active-section tracking
//!
//! A pure reducer maps crossing events to the active selection, and the
//! tracker applies that selection to the nav links as a marker toggle.
//! The two are split so the selection logic tests without any link sink.

use marquee_core::SectionEvent;

/// Reduce a crossing event to the selection it implies
///
/// Hero crossings clear the selection (the reader is above all sections);
/// section crossings select that section. Events arrive one at a time and
/// the last one wins.
pub fn reduce(event: SectionEvent) -> Option<usize> {
    match event {
        SectionEvent::HeroEnter | SectionEvent::HeroEnterBack => None,
        SectionEvent::SectionEnter(i) | SectionEvent::SectionEnterBack(i) => Some(i),
    }
}

/// Sink for the active marker on a row of navigation links
///
/// Implemented by the host over its real nav elements. A page with no
/// links reports zero and every marker operation degrades to a no-op.
pub trait NavLinks {
    /// Number of links in the nav row
    fn link_count(&self) -> usize;

    /// Remove the active marker from every link
    fn clear_active(&mut self);

    /// Add the active marker to link `index` (guaranteed in range)
    fn mark_active(&mut self, index: usize);
}

/// Tracks which navigation link is active
///
/// Holds the current selection and applies changes to the links as a
/// clear-then-mark pass. The full clear on every call is intentional
/// simplicity, not a bug; it keeps the invariant (at most one marked
/// link) trivially true no matter what state the links were left in.
pub struct ActiveSectionTracker<L: NavLinks> {
    links: L,
    selection: Option<usize>,
}

impl<L: NavLinks> ActiveSectionTracker<L> {
    /// Create a tracker with no active selection
    pub fn new(links: L) -> Self {
        Self {
            links,
            selection: None,
        }
    }

    /// Current selection (None = above all sections)
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Apply a crossing event
    pub fn on_event(&mut self, event: SectionEvent) {
        self.set_active(reduce(event));
    }

    /// Set the active link
    ///
    /// Clears every marker, then marks `index` if it refers to an existing
    /// link. An out-of-range index clears and marks nothing. Idempotent:
    /// repeating the same index leaves the same visible state.
    pub fn set_active(&mut self, index: Option<usize>) {
        self.links.clear_active();

        match index {
            Some(i) if i < self.links.link_count() => {
                self.links.mark_active(i);
                self.selection = Some(i);
            }
            _ => {
                self.selection = None;
            }
        }
    }

    /// Access the underlying link sink
    pub fn links(&self) -> &L {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Marker state per link, as a host would hold it
    struct FakeLinks {
        active: Vec<bool>,
        clear_calls: usize,
    }

    impl FakeLinks {
        fn new(count: usize) -> Self {
            Self {
                active: vec![false; count],
                clear_calls: 0,
            }
        }

        fn active_indices(&self) -> Vec<usize> {
            self.active
                .iter()
                .enumerate()
                .filter_map(|(i, a)| a.then_some(i))
                .collect()
        }
    }

    impl NavLinks for FakeLinks {
        fn link_count(&self) -> usize {
            self.active.len()
        }

        fn clear_active(&mut self) {
            self.clear_calls += 1;
            self.active.fill(false);
        }

        fn mark_active(&mut self, index: usize) {
            self.active[index] = true;
        }
    }

    #[test]
    fn test_reduce_hero_clears() {
        assert_eq!(reduce(SectionEvent::HeroEnter), None);
        assert_eq!(reduce(SectionEvent::HeroEnterBack), None);
    }

    #[test]
    fn test_reduce_section_selects() {
        assert_eq!(reduce(SectionEvent::SectionEnter(3)), Some(3));
        assert_eq!(reduce(SectionEvent::SectionEnterBack(0)), Some(0));
    }

    #[test]
    fn test_at_most_one_active_after_any_sequence() {
        let mut tracker = ActiveSectionTracker::new(FakeLinks::new(5));

        let events = [
            SectionEvent::SectionEnter(0),
            SectionEvent::SectionEnter(1),
            SectionEvent::SectionEnterBack(0),
            SectionEvent::HeroEnterBack,
            SectionEvent::SectionEnter(4),
        ];
        for event in events {
            tracker.on_event(event);
            assert!(tracker.links().active_indices().len() <= 1);
        }

        // Last event wins
        assert_eq!(tracker.selection(), Some(4));
        assert_eq!(tracker.links().active_indices(), vec![4]);
    }

    #[test]
    fn test_set_active_none_clears_all() {
        let mut tracker = ActiveSectionTracker::new(FakeLinks::new(3));
        tracker.set_active(Some(1));
        assert_eq!(tracker.links().active_indices(), vec![1]);

        tracker.set_active(None);
        assert!(tracker.links().active_indices().is_empty());
        assert_eq!(tracker.selection(), None);
    }

    #[test]
    fn test_out_of_range_clears_without_panic() {
        let mut tracker = ActiveSectionTracker::new(FakeLinks::new(3));
        tracker.set_active(Some(0));

        tracker.set_active(Some(7));
        assert!(tracker.links().active_indices().is_empty());
        assert_eq!(tracker.selection(), None);
    }

    #[test]
    fn test_idempotent_reapply() {
        let mut tracker = ActiveSectionTracker::new(FakeLinks::new(3));
        tracker.set_active(Some(2));
        tracker.set_active(Some(2));
        tracker.set_active(Some(2));

        assert_eq!(tracker.links().active_indices(), vec![2]);
        assert_eq!(tracker.selection(), Some(2));
    }

    #[test]
    fn test_zero_links_degrades_silently() {
        let mut tracker = ActiveSectionTracker::new(FakeLinks::new(0));
        tracker.on_event(SectionEvent::SectionEnter(0));
        assert_eq!(tracker.selection(), None);
    }
}
