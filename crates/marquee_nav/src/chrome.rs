//! Nav bar scrolled-state toggle

/// Default scroll offset at which the nav bar switches to its scrolled look
pub const DEFAULT_SCROLLED_THRESHOLD: f32 = 100.0;

/// Binary scrolled-state for the nav bar chrome
///
/// Flips on when scroll passes the threshold and off when it returns.
/// `on_scroll` reports only transitions so the host touches the nav
/// element's marker exactly once per visual change.
#[derive(Debug, Clone, Copy)]
pub struct NavChrome {
    threshold: f32,
    scrolled: bool,
}

impl Default for NavChrome {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLED_THRESHOLD)
    }
}

impl NavChrome {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Current scrolled-state
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed a scroll position; returns the new state if it changed
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            Some(scrolled)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_across_threshold() {
        let mut chrome = NavChrome::default();

        // 0 -> 150 -> 50: on at 150, off at 50
        assert_eq!(chrome.on_scroll(0.0), None);
        assert_eq!(chrome.on_scroll(150.0), Some(true));
        assert_eq!(chrome.on_scroll(50.0), Some(false));
        assert!(!chrome.is_scrolled());
    }

    #[test]
    fn test_no_repeat_on_same_side() {
        let mut chrome = NavChrome::default();

        assert_eq!(chrome.on_scroll(150.0), Some(true));
        assert_eq!(chrome.on_scroll(300.0), None);
        assert_eq!(chrome.on_scroll(101.0), None);
        assert!(chrome.is_scrolled());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut chrome = NavChrome::new(100.0);
        assert_eq!(chrome.on_scroll(100.0), None);
        assert_eq!(chrome.on_scroll(100.1), Some(true));
    }
}
