//! Test support: recording engines, a manual timer host, and fixed
//! element geometry
//!
//! Used by the workspace's own tests and handy for hosts testing their
//! marquee wiring without a real engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use slotmap::SlotMap;

use crate::element::{ElementQuery, ElementRef};
use crate::engine::{
    TimerCallback, TimerHost, TimerId, TriggerEngine, TriggerId, TriggerSpec, TriggerThrottle,
    TweenEngine,
};
use crate::error::Result;
use crate::geometry::Rect;
use crate::spec::{ScrollCommand, TimelineSpec, TweenSpec};

// ============================================================================
// Recording Trigger Engine
// ============================================================================

/// Trigger engine that records registrations and lets tests fire crossings
#[derive(Default)]
pub struct RecordingTriggerEngine {
    inner: Mutex<SlotMap<TriggerId, TriggerSpec>>,
    order: Mutex<Vec<TriggerId>>,
    recomputes: AtomicUsize,
    throttle: Mutex<Option<TriggerThrottle>>,
}

impl RecordingTriggerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered triggers
    pub fn trigger_count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Number of recompute calls observed
    pub fn recompute_count(&self) -> usize {
        self.recomputes.load(Ordering::SeqCst)
    }

    /// The throttle configuration last applied, if any
    pub fn throttle(&self) -> Option<TriggerThrottle> {
        *self.throttle.lock().unwrap()
    }

    /// Registered specs in registration order (callbacks cloned out)
    pub fn registrations(&self) -> Vec<TriggerSpec> {
        let inner = self.inner.lock().unwrap();
        self.order
            .lock()
            .unwrap()
            .iter()
            .filter_map(|id| inner.get(*id).cloned())
            .collect()
    }

    /// Fire the enter callback of the nth registered trigger
    pub fn fire_enter(&self, index: usize) {
        if let Some(cb) = self.registrations().get(index).and_then(|s| s.on_enter.clone()) {
            cb();
        }
    }

    /// Fire the enter-back callback of the nth registered trigger
    pub fn fire_enter_back(&self, index: usize) {
        if let Some(cb) = self
            .registrations()
            .get(index)
            .and_then(|s| s.on_enter_back.clone())
        {
            cb();
        }
    }
}

impl TriggerEngine for RecordingTriggerEngine {
    fn register(&self, spec: TriggerSpec) -> Result<TriggerId> {
        let id = self.inner.lock().unwrap().insert(spec);
        self.order.lock().unwrap().push(id);
        Ok(id)
    }

    fn recompute(&self) -> Result<()> {
        self.recomputes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn configure(&self, throttle: TriggerThrottle) -> Result<()> {
        *self.throttle.lock().unwrap() = Some(throttle);
        Ok(())
    }
}

// ============================================================================
// Recording Tween Engine
// ============================================================================

/// Tween engine that records every declaration it receives
#[derive(Default)]
pub struct RecordingTweenEngine {
    tweens: Mutex<Vec<TweenSpec>>,
    timelines: Mutex<Vec<TimelineSpec>>,
    scrolls: Mutex<Vec<ScrollCommand>>,
}

impl RecordingTweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tweens(&self) -> Vec<TweenSpec> {
        self.tweens.lock().unwrap().clone()
    }

    pub fn timelines(&self) -> Vec<TimelineSpec> {
        self.timelines.lock().unwrap().clone()
    }

    pub fn scrolls(&self) -> Vec<ScrollCommand> {
        self.scrolls.lock().unwrap().clone()
    }
}

impl TweenEngine for RecordingTweenEngine {
    fn tween(&self, spec: TweenSpec) -> Result<()> {
        self.tweens.lock().unwrap().push(spec);
        Ok(())
    }

    fn timeline(&self, spec: TimelineSpec) -> Result<()> {
        self.timelines.lock().unwrap().push(spec);
        Ok(())
    }

    fn scroll_to(&self, command: ScrollCommand) -> Result<()> {
        self.scrolls.lock().unwrap().push(command);
        Ok(())
    }
}

// ============================================================================
// Manual Timer Host
// ============================================================================

struct ScheduledTimer {
    deadline_ms: u64,
    callback: TimerCallback,
}

/// Timer host driven by a simulated clock
///
/// `advance_to` fires due timers in deadline order; `cancel` of a fired
/// or unknown id is a no-op, matching the [`TimerHost`] contract.
#[derive(Default)]
pub struct ManualTimerHost {
    now_ms: Mutex<u64>,
    timers: Mutex<SlotMap<TimerId, ScheduledTimer>>,
}

impl ManualTimerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in milliseconds
    pub fn now_ms(&self) -> u64 {
        *self.now_ms.lock().unwrap()
    }

    /// Number of armed (not yet fired) timers
    pub fn armed_count(&self) -> usize {
        self.timers.lock().unwrap().len()
    }

    /// Advance the clock, firing every timer due on the way
    pub fn advance(&self, delta_ms: u64) {
        let target = self.now_ms() + delta_ms;
        self.advance_to(target);
    }

    /// Advance the clock to an absolute time, firing due timers in order
    pub fn advance_to(&self, target_ms: u64) {
        loop {
            let next = {
                let timers = self.timers.lock().unwrap();
                timers
                    .iter()
                    .filter(|(_, t)| t.deadline_ms <= target_ms)
                    .min_by_key(|(_, t)| t.deadline_ms)
                    .map(|(id, t)| (id, t.deadline_ms))
            };

            match next {
                Some((id, deadline)) => {
                    let callback = {
                        let mut timers = self.timers.lock().unwrap();
                        *self.now_ms.lock().unwrap() = deadline;
                        timers.remove(id).map(|t| t.callback)
                    };
                    if let Some(cb) = callback {
                        cb();
                    }
                }
                None => break,
            }
        }
        *self.now_ms.lock().unwrap() = target_ms;
    }
}

impl TimerHost for ManualTimerHost {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let deadline_ms = self.now_ms() + delay.as_millis() as u64;
        self.timers.lock().unwrap().insert(ScheduledTimer {
            deadline_ms,
            callback,
        })
    }

    fn cancel(&self, id: TimerId) {
        self.timers.lock().unwrap().remove(id);
    }
}

// ============================================================================
// Static Elements
// ============================================================================

/// Fixed element geometry for tests
#[derive(Default)]
pub struct StaticElements {
    bounds: HashMap<ElementRef, Rect>,
}

impl StaticElements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element: impl Into<ElementRef>, bounds: Rect) -> Self {
        self.bounds.insert(element.into(), bounds);
        self
    }
}

impl ElementQuery for StaticElements {
    fn bounds(&self, element: &ElementRef) -> Option<Rect> {
        self.bounds.get(element).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    #[test]
    fn test_manual_timer_fires_at_deadline() {
        let host = ManualTimerHost::new();
        let fired = Arc::new(AtomicBool::new(false));

        host.schedule(Duration::from_millis(250), {
            let fired = Arc::clone(&fired);
            Arc::new(move || fired.store(true, Ordering::SeqCst))
        });

        host.advance(249);
        assert!(!fired.load(Ordering::SeqCst));
        host.advance(1);
        assert!(fired.load(Ordering::SeqCst));
        assert_eq!(host.armed_count(), 0);
    }

    #[test]
    fn test_manual_timer_cancel() {
        let host = ManualTimerHost::new();
        let fired = Arc::new(AtomicBool::new(false));

        let id = host.schedule(Duration::from_millis(100), {
            let fired = Arc::clone(&fired);
            Arc::new(move || fired.store(true, Ordering::SeqCst))
        });
        host.cancel(id);
        host.advance(500);

        assert!(!fired.load(Ordering::SeqCst));
        // Canceling again is a no-op
        host.cancel(id);
    }

    #[test]
    fn test_recording_trigger_engine_fires() {
        let engine = RecordingTriggerEngine::new();
        let fired = Arc::new(AtomicBool::new(false));

        engine
            .register(TriggerSpec::new("hero").on_enter({
                let fired = Arc::clone(&fired);
                move || fired.store(true, Ordering::SeqCst)
            }))
            .unwrap();

        engine.fire_enter(0);
        assert!(fired.load(Ordering::SeqCst));
        assert_eq!(engine.trigger_count(), 1);
    }
}
