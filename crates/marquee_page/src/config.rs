//! Page configuration

use serde::{Deserialize, Serialize};

use marquee_core::{EdgePosition, ElementRef, TriggerThrottle};

/// Configuration for one choreographed page
///
/// Sections are listed in document order; nav links pair with them by
/// position. The defaults reproduce the standard band placement: hero
/// watched from `top top` to `bottom top`, sections through their
/// center-crossing band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// The hero region element
    pub hero: ElementRef,
    /// Content sections in document order
    pub sections: Vec<ElementRef>,
    /// Scroll offset past which the nav bar shows its scrolled look
    pub scrolled_threshold: f32,
    /// Quiet period for resize-refresh debouncing
    pub quiet_period_ms: u64,
    /// Hero trigger band start
    pub hero_start: EdgePosition,
    /// Hero trigger band end
    pub hero_end: EdgePosition,
    /// Section trigger band start
    pub section_start: EdgePosition,
    /// Section trigger band end
    pub section_end: EdgePosition,
    /// Trigger engine throttling
    pub throttle: TriggerThrottle,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hero: ElementRef::new("hero"),
            sections: Vec::new(),
            scrolled_threshold: 100.0,
            quiet_period_ms: 250,
            hero_start: EdgePosition::top_top(),
            hero_end: EdgePosition::bottom_top(),
            section_start: EdgePosition::top_center(),
            section_end: EdgePosition::bottom_center(),
            throttle: TriggerThrottle::default(),
        }
    }
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a content section
    pub fn section(mut self, section: impl Into<ElementRef>) -> Self {
        self.sections.push(section.into());
        self
    }

    /// Append `count` sections named `section-0`..`section-{count-1}`
    pub fn numbered_sections(mut self, count: usize) -> Self {
        let base = ElementRef::new("section");
        self.sections
            .extend((0..count).map(|i| base.indexed(i)));
        self
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
