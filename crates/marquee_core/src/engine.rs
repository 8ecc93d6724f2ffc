//! External engine seams
//!
//! The tween engine and the scroll-trigger engine are consumed through
//! these traits; so is the timer host the debouncer schedules against.
//! Hosts adapt their real engines behind them, and tests substitute
//! recording fakes.

use std::sync::Arc;
use std::time::Duration;

use slotmap::new_key_type;

use crate::element::ElementRef;
use crate::error::Result;
use crate::geometry::EdgePosition;
use crate::spec::{ScrollCommand, TimelineSpec, TweenSpec};

new_key_type! {
    /// Handle to a registered scroll trigger
    pub struct TriggerId;
    /// Handle to a scheduled timer
    pub struct TimerId;
}

/// Callback fired when a trigger crossing occurs
pub type TriggerCallback = Arc<dyn Fn() + Send + Sync>;

/// Callback fired when a scheduled timer elapses
pub type TimerCallback = Arc<dyn Fn() + Send + Sync>;

// ============================================================================
// Trigger Engine
// ============================================================================

/// A standalone trigger registration with crossing callbacks
///
/// Unlike [`crate::spec::TriggerBinding`], which gates a tween inside the
/// engine, this form surfaces crossings back to marquee — it's how the
/// active-section tracker hears about the hero and section bands.
#[derive(Clone, Default)]
pub struct TriggerSpec {
    pub trigger: Option<ElementRef>,
    pub start: Option<EdgePosition>,
    pub end: Option<EdgePosition>,
    pub on_enter: Option<TriggerCallback>,
    pub on_enter_back: Option<TriggerCallback>,
}

impl TriggerSpec {
    pub fn new(trigger: impl Into<ElementRef>) -> Self {
        Self {
            trigger: Some(trigger.into()),
            ..Default::default()
        }
    }

    pub fn start(mut self, start: EdgePosition) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: EdgePosition) -> Self {
        self.end = Some(end);
        self
    }

    pub fn on_enter<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_enter = Some(Arc::new(callback));
        self
    }

    pub fn on_enter_back<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_enter_back = Some(Arc::new(callback));
        self
    }
}

impl std::fmt::Debug for TriggerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerSpec")
            .field("trigger", &self.trigger)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_enter_back", &self.on_enter_back.is_some())
            .finish()
    }
}

/// Throttling configuration for the trigger engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TriggerThrottle {
    /// Limit crossing callbacks to scroll-synced moments
    pub limit_callbacks: bool,
    /// Interval between scroll-position sync passes
    pub sync_interval_ms: u32,
}

impl Default for TriggerThrottle {
    fn default() -> Self {
        Self {
            limit_callbacks: true,
            sync_interval_ms: 150,
        }
    }
}

/// The scroll-trigger engine surface
///
/// Registration order matters: the runtime registers regions in document
/// order so that callback order matches it on simultaneous crossings.
pub trait TriggerEngine {
    /// Register a trigger; the engine starts watching its band
    fn register(&self, spec: TriggerSpec) -> Result<TriggerId>;

    /// Re-measure all registered trigger bands against current layout
    fn recompute(&self) -> Result<()>;

    /// Apply throttling configuration
    fn configure(&self, throttle: TriggerThrottle) -> Result<()>;
}

// ============================================================================
// Tween Engine
// ============================================================================

/// The tween/timeline engine surface
pub trait TweenEngine {
    /// Submit a one-off tween (possibly trigger-bound or scrubbed)
    fn tween(&self, spec: TweenSpec) -> Result<()>;

    /// Submit a sequenced timeline
    fn timeline(&self, spec: TimelineSpec) -> Result<()>;

    /// Animate the viewport scroll position
    fn scroll_to(&self, command: ScrollCommand) -> Result<()>;
}

// ============================================================================
// Timer Host
// ============================================================================

/// Cancelable one-shot timers supplied by the host event loop
///
/// `schedule` arms a timer that fires `callback` once after `delay`,
/// unless `cancel` is called first with the returned id. Canceling an
/// already-fired or unknown timer is a no-op.
pub trait TimerHost {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId;

    fn cancel(&self, id: TimerId);
}
