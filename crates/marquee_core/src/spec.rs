//! Animation declarations
//!
//! Parameter objects describing tweens, timelines, and trigger bindings.
//! These are handed to the external engine verbatim; marquee does not
//! interpolate them. Builders follow the chained style of the rest of the
//! workspace.
//!
//! # Example
//!
//! ```rust
//! use marquee_core::spec::{Property, TweenSpec};
//! use marquee_core::Easing;
//!
//! let reveal = TweenSpec::from_values("section-title")
//!     .prop(Property::TranslateX, -50.0)
//!     .prop(Property::Opacity, 0.0)
//!     .duration(1000)
//!     .easing(Easing::Power3Out);
//! ```

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::element::ElementRef;
use crate::geometry::EdgePosition;

// ============================================================================
// Properties
// ============================================================================

/// A visual property the engine can animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    TranslateX,
    TranslateY,
    Opacity,
    Scale,
    /// Rotation in degrees around the element center
    Rotation,
    /// SVG stroke dash offset (used for draw-on effects)
    StrokeDashoffset,
}

/// A property paired with its tween endpoint value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub property: Property,
    pub value: f32,
}

// ============================================================================
// Tweens
// ============================================================================

/// Whether the listed values are the starting state or the ending state
///
/// `From` mirrors entrance animations: the element starts at the listed
/// values and animates to its natural state. `To` animates away from the
/// natural state toward the listed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TweenDirection {
    From,
    #[default]
    To,
}

/// A single tween declaration
///
/// `target` is a selector-style reference; when it matches several
/// elements the engine applies the tween to each, offset by `stagger_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    pub target: ElementRef,
    pub direction: TweenDirection,
    pub values: Vec<PropertyValue>,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Delay between successive matched elements
    pub stagger_ms: u32,
    pub easing: Easing,
    /// Optional scroll-trigger binding gating or scrubbing this tween
    pub trigger: Option<TriggerBinding>,
}

impl TweenSpec {
    /// Tween from the listed values to the element's natural state
    pub fn from_values(target: impl Into<ElementRef>) -> Self {
        Self::new(target, TweenDirection::From)
    }

    /// Tween from the natural state to the listed values
    pub fn to_values(target: impl Into<ElementRef>) -> Self {
        Self::new(target, TweenDirection::To)
    }

    fn new(target: impl Into<ElementRef>, direction: TweenDirection) -> Self {
        Self {
            target: target.into(),
            direction,
            values: Vec::new(),
            duration_ms: 0,
            delay_ms: 0,
            stagger_ms: 0,
            easing: Easing::default(),
            trigger: None,
        }
    }

    /// Add a property endpoint
    pub fn prop(mut self, property: Property, value: f32) -> Self {
        self.values.push(PropertyValue { property, value });
        self
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Stagger successive matched elements by `ms`
    pub fn stagger(mut self, ms: u32) -> Self {
        self.stagger_ms = ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Gate or scrub this tween with a scroll trigger
    pub fn trigger(mut self, binding: TriggerBinding) -> Self {
        self.trigger = Some(binding);
        self
    }

    /// Start delay for the nth matched element
    pub fn delay_for_index(&self, index: usize) -> u32 {
        self.delay_ms + self.stagger_ms * index as u32
    }
}

// ============================================================================
// Trigger Bindings
// ============================================================================

/// What a trigger does to its bound tween on each crossing kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    #[default]
    None,
}

/// Actions for the four crossing kinds: enter, leave, enter-back, leave-back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleActions {
    pub on_enter: TriggerAction,
    pub on_leave: TriggerAction,
    pub on_enter_back: TriggerAction,
    pub on_leave_back: TriggerAction,
}

impl ToggleActions {
    /// Play on enter, reverse when scrolled back out above
    ///
    /// The standard entrance pattern: content animates in on the way down
    /// and resets when the reader scrolls back up past it.
    pub fn play_reverse() -> Self {
        Self {
            on_enter: TriggerAction::Play,
            on_enter_back: TriggerAction::None,
            on_leave: TriggerAction::None,
            on_leave_back: TriggerAction::Reverse,
        }
    }

    /// Play on enter only
    pub fn play_once() -> Self {
        Self {
            on_enter: TriggerAction::Play,
            ..Default::default()
        }
    }
}

/// A scroll-trigger binding for a tween or timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerBinding {
    /// Element whose position defines the band
    pub trigger: ElementRef,
    pub start: EdgePosition,
    /// End position; `None` means the engine's default band length
    pub end: Option<EdgePosition>,
    /// Scrub the tween's progress to scroll position, with this many
    /// seconds of smoothing; `None` plays on time instead
    pub scrub: Option<f32>,
    pub toggle: ToggleActions,
}

impl TriggerBinding {
    pub fn new(trigger: impl Into<ElementRef>, start: EdgePosition) -> Self {
        Self {
            trigger: trigger.into(),
            start,
            end: None,
            scrub: None,
            toggle: ToggleActions::default(),
        }
    }

    pub fn end(mut self, end: EdgePosition) -> Self {
        self.end = Some(end);
        self
    }

    pub fn scrub(mut self, smoothing_secs: f32) -> Self {
        self.scrub = Some(smoothing_secs);
        self
    }

    pub fn toggle(mut self, toggle: ToggleActions) -> Self {
        self.toggle = toggle;
        self
    }
}

// ============================================================================
// Timelines
// ============================================================================

/// Placement of a timeline entry relative to its predecessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimelinePosition {
    /// Start when the previous entry finishes
    #[default]
    Sequential,
    /// Offset in milliseconds from the previous entry's end; negative
    /// values overlap the entries
    OffsetMs(i32),
}

/// One tween slotted into a timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub tween: TweenSpec,
    pub position: TimelinePosition,
}

/// An ordered sequence of tweens played as one unit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelineSpec {
    /// Easing applied to entries that don't set their own
    pub default_easing: Option<Easing>,
    pub entries: Vec<TimelineEntry>,
    pub trigger: Option<TriggerBinding>,
}

impl TimelineSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_easing(mut self, easing: Easing) -> Self {
        self.default_easing = Some(easing);
        self
    }

    /// Append an entry starting when the previous one finishes
    pub fn entry(mut self, tween: TweenSpec) -> Self {
        self.entries.push(TimelineEntry {
            tween,
            position: TimelinePosition::Sequential,
        });
        self
    }

    /// Append an entry offset from the previous entry's end
    pub fn entry_at(mut self, tween: TweenSpec, offset_ms: i32) -> Self {
        self.entries.push(TimelineEntry {
            tween,
            position: TimelinePosition::OffsetMs(offset_ms),
        });
        self
    }

    pub fn trigger(mut self, binding: TriggerBinding) -> Self {
        self.trigger = Some(binding);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Scroll Commands
// ============================================================================

/// A scroll operation issued to the host
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollCommand {
    /// Scroll to an absolute document offset
    ToOffset { y: f32, smooth: bool },
    /// Scroll an element's top to the viewport top
    ToElement { element: ElementRef, smooth: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_builder() {
        let tween = TweenSpec::from_values("hero-subtitle")
            .prop(Property::TranslateY, 30.0)
            .prop(Property::Opacity, 0.0)
            .duration(800)
            .easing(Easing::Power3Out);

        assert_eq!(tween.direction, TweenDirection::From);
        assert_eq!(tween.values.len(), 2);
        assert_eq!(tween.duration_ms, 800);
        assert!(tween.trigger.is_none());
    }

    #[test]
    fn test_stagger_delay() {
        let tween = TweenSpec::from_values("key-point")
            .prop(Property::TranslateX, -50.0)
            .delay(200)
            .stagger(150);

        assert_eq!(tween.delay_for_index(0), 200);
        assert_eq!(tween.delay_for_index(3), 650);
    }

    #[test]
    fn test_timeline_positions() {
        let tl = TimelineSpec::new()
            .default_easing(Easing::Power3Out)
            .entry(TweenSpec::from_values("a").duration(1000))
            .entry_at(TweenSpec::from_values("b").duration(800), -400);

        assert_eq!(tl.len(), 2);
        assert_eq!(tl.entries[0].position, TimelinePosition::Sequential);
        assert_eq!(tl.entries[1].position, TimelinePosition::OffsetMs(-400));
    }

    #[test]
    fn test_toggle_play_reverse() {
        let t = ToggleActions::play_reverse();
        assert_eq!(t.on_enter, TriggerAction::Play);
        assert_eq!(t.on_leave_back, TriggerAction::Reverse);
        assert_eq!(t.on_leave, TriggerAction::None);
    }
}
